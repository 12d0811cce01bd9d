use serde::{Deserialize, Serialize};

use mandelview_core::{Complex, CoreError, HistoryEntry};

use crate::palette::PaletteKind;

/// A complete view description, owned by the caller and passed by value.
///
/// The engine never retains a reference into one of these across frames —
/// the dispatcher copies what it needs. Serde-derived so a persistence layer
/// can store and reload the whole thing as one flat snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewParameters {
    /// Center of the view on the complex plane.
    pub center: Complex,
    /// Magnification; the visible window width is `4.0 / zoom`. Must be
    /// positive and finite.
    pub zoom: f64,
    /// Escape-time iteration cap. Must be at least 1.
    pub iteration_bound: u32,
    pub palette: PaletteKind,
    /// Palette phase shift. Cyclic with period 1; any real value is
    /// accepted and wrapped inside the palette functions. The UI keeps its
    /// slider in `[0, 2π)` but that is a presentation choice.
    pub color_phase: f64,
}

impl ViewParameters {
    pub const DEFAULT_CENTER: Complex = Complex { re: -0.5, im: 0.0 };
    pub const DEFAULT_ZOOM: f64 = 1.5;
    pub const DEFAULT_ITERATION_BOUND: u32 = 200;
    pub const DEFAULT_COLOR_PHASE: f64 = 1.8;

    /// Create parameters, rejecting out-of-contract values.
    pub fn new(
        center: Complex,
        zoom: f64,
        iteration_bound: u32,
        palette: PaletteKind,
        color_phase: f64,
    ) -> crate::Result<Self> {
        let params = Self {
            center,
            zoom,
            iteration_bound,
            palette,
            color_phase,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the §3 invariants: `zoom > 0` and finite, `iteration_bound >= 1`.
    ///
    /// The color phase is deliberately unconstrained.
    pub fn validate(&self) -> crate::Result<()> {
        if self.zoom <= 0.0 || !self.zoom.is_finite() {
            return Err(CoreError::InvalidZoom(self.zoom).into());
        }
        if self.iteration_bound < 1 {
            return Err(CoreError::InvalidIterationBound(self.iteration_bound).into());
        }
        Ok(())
    }

    /// Snapshot the navigational part of the view for the undo stack.
    pub fn history_entry(&self) -> HistoryEntry {
        HistoryEntry::new(self.center, self.zoom, self.iteration_bound)
    }
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            center: Self::DEFAULT_CENTER,
            zoom: Self::DEFAULT_ZOOM,
            iteration_bound: Self::DEFAULT_ITERATION_BOUND,
            palette: PaletteKind::Fire,
            color_phase: Self::DEFAULT_COLOR_PHASE,
        }
    }
}
