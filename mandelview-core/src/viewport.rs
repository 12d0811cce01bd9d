use crate::complex::Complex;
use crate::error::CoreError;

/// Width of the visible complex-plane window at `zoom == 1`.
///
/// The visible window spans `4.0 / zoom` units along the imaginary axis and
/// `4.0 / zoom × aspect` along the real axis. Fixed design constant, not
/// configurable.
pub const BASE_PLANE_WIDTH: f64 = 4.0;

/// Below this sample spacing adjacent pixels collapse onto nearly the same
/// `f64` value and the rendered detail degrades.
pub const PRECISION_LIMIT_STEP: f64 = 1e-13;

/// The pixel-grid dimensions of the rendered output.
///
/// The viewport carries no view state — center and zoom travel with every
/// mapping call, so the same viewport can serve any number of frames.
/// Dimensions are immutable; changing them means building a new viewport
/// (and reallocating every buffer sized from it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport {
                reason: format!("dimensions must be > 0, got {width}×{height}"),
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The aspect ratio of the viewport (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Real-axis coordinate of pixel column `x`.
    ///
    /// The column at `width / 2` maps exactly onto `center_re`.
    #[inline]
    pub fn real_axis_coord(&self, x: u32, center_re: f64, zoom: f64) -> f64 {
        center_re + (f64::from(x) - f64::from(self.width) / 2.0) * self.real_axis_step(zoom)
    }

    /// Imaginary-axis coordinate of pixel row `y`.
    ///
    /// Screen space is flipped relative to the mathematical plane:
    /// increasing `y` (downward on screen) maps to decreasing imaginary
    /// value. Interactive callers must pan with the same sign convention.
    #[inline]
    pub fn imag_axis_coord(&self, y: u32, center_im: f64, zoom: f64) -> f64 {
        center_im - (f64::from(y) - f64::from(self.height) / 2.0) * self.imag_axis_step(zoom)
    }

    /// Distance between adjacent real-axis samples.
    #[inline]
    pub fn real_axis_step(&self, zoom: f64) -> f64 {
        BASE_PLANE_WIDTH / zoom / f64::from(self.width) * self.aspect_ratio()
    }

    /// Distance between adjacent imaginary-axis samples.
    #[inline]
    pub fn imag_axis_step(&self, zoom: f64) -> f64 {
        BASE_PLANE_WIDTH / zoom / f64::from(self.height)
    }

    /// `true` when the given zoom pushes the sample spacing below what
    /// `f64` can meaningfully resolve.
    ///
    /// The engine keeps rendering past this point (fixed-precision detail
    /// loss at extreme zoom is expected behavior); the flag exists so
    /// callers can surface a warning.
    pub fn precision_exhausted(&self, zoom: f64) -> bool {
        self.real_axis_step(zoom).min(self.imag_axis_step(zoom)) < PRECISION_LIMIT_STEP
    }

    /// Map a pixel coordinate to a point on the complex plane.
    ///
    /// `(0, 0)` is the top-left pixel. Combines both axis mappings; frame
    /// rendering computes each axis once per row/column instead of calling
    /// this per pixel.
    #[inline]
    pub fn pixel_to_complex(&self, x: u32, y: u32, center: Complex, zoom: f64) -> Complex {
        Complex::new(
            self.real_axis_coord(x, center.re, zoom),
            self.imag_axis_coord(y, center.im, zoom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn invalid_dimensions() {
        assert!(Viewport::new(0, 100).is_err());
        assert!(Viewport::new(100, 0).is_err());
    }

    #[test]
    fn aspect_ratio() {
        let vp = Viewport::new(1920, 1080).unwrap();
        assert!((vp.aspect_ratio() - 1920.0 / 1080.0).abs() < EPSILON);
    }

    #[test]
    fn center_pixel_maps_exactly_to_center() {
        // The half-width column has a zero pixel offset, so the mapping is
        // exact for any zoom — no epsilon needed.
        let vp = Viewport::new(800, 600).unwrap();
        let center = Complex::new(-0.7436, 0.1318);
        for zoom in [0.5, 1.0, 123.456, 1e9] {
            let c = vp.pixel_to_complex(400, 300, center, zoom);
            assert_eq!(c.re, center.re);
            assert_eq!(c.im, center.im);
        }
    }

    #[test]
    fn window_spans_base_width_at_unit_zoom() {
        // At zoom 1 a square viewport covers 4 plane units per axis.
        let vp = Viewport::new(100, 100).unwrap();
        assert!((vp.imag_axis_step(1.0) * 100.0 - BASE_PLANE_WIDTH).abs() < EPSILON);
        assert!((vp.real_axis_step(1.0) * 100.0 - BASE_PLANE_WIDTH).abs() < EPSILON);
    }

    #[test]
    fn wide_viewport_stretches_real_axis() {
        let vp = Viewport::new(200, 100).unwrap();
        // aspect = 2 → real window is twice the imaginary window.
        let real_span = vp.real_axis_step(1.0) * 200.0;
        let imag_span = vp.imag_axis_step(1.0) * 100.0;
        assert!((real_span - 2.0 * imag_span).abs() < EPSILON);
    }

    #[test]
    fn doubling_zoom_halves_spacing() {
        let vp = Viewport::new(640, 480).unwrap();
        for zoom in [1.0, 3.0, 1e6] {
            assert_eq!(vp.real_axis_step(zoom * 2.0), vp.real_axis_step(zoom) / 2.0);
            assert_eq!(vp.imag_axis_step(zoom * 2.0), vp.imag_axis_step(zoom) / 2.0);
        }
    }

    #[test]
    fn precision_flag_trips_only_at_extreme_zoom() {
        let vp = Viewport::new(1280, 720).unwrap();
        assert!(!vp.precision_exhausted(1.0));
        assert!(!vp.precision_exhausted(1e9));
        assert!(vp.precision_exhausted(1e15));
    }

    #[test]
    fn screen_y_is_flipped() {
        let vp = Viewport::new(100, 100).unwrap();
        let top = vp.pixel_to_complex(50, 0, Complex::ZERO, 1.0);
        let bottom = vp.pixel_to_complex(50, 99, Complex::ZERO, 1.0);
        assert!(top.im > 0.0, "top row must map above the real axis");
        assert!(bottom.im < 0.0, "bottom row must map below the real axis");
    }
}
