use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use mandelview_core::{evaluate, Complex, CoreError, Viewport};

use crate::frame::FrameBuffer;
use crate::palette::{self, PaletteKind};
use crate::params::ViewParameters;

/// Orchestrates one frame's computation end-to-end and owns every buffer
/// needed to do so across frames.
///
/// All storage — the per-axis coordinate arrays, the iteration grid, and the
/// RGB frame — is allocated once at construction (or resize) and reused on
/// every [`compute_frame`](Self::compute_frame) call. The thread pool is the
/// compute backend; if it cannot be built there is nothing to render with,
/// so construction fails outright.
///
/// The caller owns the view parameters and passes center/zoom by value per
/// frame. `&mut self` on `compute_frame` and `resize` is what serializes
/// parameter mutation against an in-flight frame — there is no internal
/// locking.
pub struct FrameDispatcher {
    viewport: Viewport,
    iteration_bound: u32,
    palette: PaletteKind,
    color_phase: f64,
    pool: rayon::ThreadPool,
    /// Real-axis sample per pixel column; refilled each frame.
    x_coords: Vec<f64>,
    /// Imaginary-axis sample per pixel row; refilled each frame.
    y_coords: Vec<f64>,
    /// Escape count per pixel, row-major.
    iterations: Vec<u32>,
    frame: FrameBuffer,
}

impl FrameDispatcher {
    /// Build a dispatcher for the given viewport and initial parameters.
    ///
    /// Fails if the parameters violate their contract or the parallel
    /// backend cannot be initialized. Both are fatal — there is no degraded
    /// mode to fall back to.
    pub fn new(viewport: Viewport, params: &ViewParameters) -> crate::Result<Self> {
        params.validate()?;

        let pool = rayon::ThreadPoolBuilder::new().build()?;
        info!(
            width = viewport.width(),
            height = viewport.height(),
            threads = pool.current_num_threads(),
            "Frame dispatcher ready"
        );

        Ok(Self {
            viewport,
            iteration_bound: params.iteration_bound,
            palette: params.palette,
            color_phase: params.color_phase,
            pool,
            x_coords: vec![0.0; viewport.width() as usize],
            y_coords: vec![0.0; viewport.height() as usize],
            iterations: vec![0; viewport.pixel_count()],
            frame: FrameBuffer::new(viewport.width(), viewport.height()),
        })
    }

    /// Release and reallocate every buffer at a new size.
    ///
    /// Invalidates the current frame buffer contents; the next
    /// [`compute_frame`](Self::compute_frame) fills the new one from scratch.
    pub fn resize(&mut self, width: u32, height: u32) -> crate::Result<()> {
        let viewport = Viewport::new(width, height)?;
        debug!(
            old_width = self.viewport.width(),
            old_height = self.viewport.height(),
            width,
            height,
            "Resizing frame buffers"
        );
        self.viewport = viewport;
        self.x_coords = vec![0.0; width as usize];
        self.y_coords = vec![0.0; height as usize];
        self.iterations = vec![0; viewport.pixel_count()];
        self.frame = FrameBuffer::new(width, height);
        Ok(())
    }

    /// Set the escape-time iteration cap; takes effect on the next frame.
    pub fn set_iteration_bound(&mut self, iteration_bound: u32) -> crate::Result<()> {
        if iteration_bound < 1 {
            return Err(CoreError::InvalidIterationBound(iteration_bound).into());
        }
        self.iteration_bound = iteration_bound;
        Ok(())
    }

    /// Select the palette; takes effect on the next frame.
    pub fn set_palette(&mut self, palette: PaletteKind) {
        self.palette = palette;
    }

    /// Set the palette phase shift; takes effect on the next frame.
    pub fn set_color_phase(&mut self, color_phase: f64) {
        self.color_phase = color_phase;
    }

    /// Apply the non-navigational fields of a parameter snapshot.
    pub fn apply_parameters(&mut self, params: &ViewParameters) -> crate::Result<()> {
        params.validate()?;
        self.iteration_bound = params.iteration_bound;
        self.palette = params.palette;
        self.color_phase = params.color_phase;
        Ok(())
    }

    /// Compute one full frame synchronously.
    ///
    /// Refills the per-axis coordinate arrays for the requested view, then
    /// evaluates and colors every pixel in parallel — one logical work unit
    /// per pixel, each reading only its own `(x0, y0)` and writing only its
    /// own iteration slot and RGB triplet. Returns after the implicit join
    /// barrier, with the result in [`frame_buffer`](Self::frame_buffer).
    ///
    /// Cost is O(width · height · average iterations); this is the single
    /// most expensive call per UI frame and every frame recomputes every
    /// pixel from scratch.
    pub fn compute_frame(&mut self, center: Complex, zoom: f64) -> crate::Result<()> {
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidZoom(zoom).into());
        }
        if self.viewport.precision_exhausted(zoom) {
            warn!(zoom, "Sample spacing below f64 resolution; expect detail loss");
        }

        let start = Instant::now();

        // Host-side coordinate pass: one value per row/column, shared by the
        // whole row/column below.
        for (x, slot) in self.x_coords.iter_mut().enumerate() {
            *slot = self.viewport.real_axis_coord(x as u32, center.re, zoom);
        }
        for (y, slot) in self.y_coords.iter_mut().enumerate() {
            *slot = self.viewport.imag_axis_coord(y as u32, center.im, zoom);
        }

        let width = self.viewport.width() as usize;
        let bound = self.iteration_bound;
        let palette = self.palette;
        let phase = self.color_phase;
        let x_coords = &self.x_coords;
        let y_coords = &self.y_coords;
        let iterations = &mut self.iterations;
        let pixels = self.frame.pixels_mut();

        self.pool.install(|| {
            iterations
                .par_iter_mut()
                .zip(pixels.par_chunks_exact_mut(3))
                .enumerate()
                .for_each(|(idx, (count, rgb))| {
                    let x0 = x_coords[idx % width];
                    let y0 = y_coords[idx / width];

                    let result = evaluate(x0, y0, bound);
                    *count = result.iterations;

                    let color = palette::color_for(result.iterations, bound, palette, phase);
                    rgb.copy_from_slice(&palette::to_rgb8(color));
                });
        });

        debug!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            iteration_bound = bound,
            zoom,
            elapsed_ms = start.elapsed().as_millis(),
            "Frame complete"
        );
        Ok(())
    }

    /// The most recently computed frame.
    ///
    /// Valid until the next [`compute_frame`](Self::compute_frame) or
    /// [`resize`](Self::resize) call.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Per-pixel escape counts of the last frame, row-major.
    pub fn iteration_counts(&self) -> &[u32] {
        &self.iterations
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn iteration_bound(&self) -> u32 {
        self.iteration_bound
    }

    pub fn palette(&self) -> PaletteKind {
        self.palette
    }

    pub fn color_phase(&self) -> f64 {
        self.color_phase
    }
}
