//! Procedural color palettes.
//!
//! Every palette is a pure function of the smoothed iteration fraction and a
//! phase shift — no lookup tables, no state. Colors are produced in unit
//! range and quantized to 8-bit at the very end of the pipeline.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteKind {
    Rainbow,
    Fire,
    ElectricBlue,
    Twilight,
    Neon,
    Sepia,
}

impl PaletteKind {
    /// All palettes, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Rainbow,
        Self::Fire,
        Self::ElectricBlue,
        Self::Twilight,
        Self::Neon,
        Self::Sepia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire",
            Self::ElectricBlue => "Electric Blue",
            Self::Twilight => "Twilight",
            Self::Neon => "Neon",
            Self::Sepia => "Sepia",
        }
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Logarithmic remapping of the normalized iteration count.
///
/// Compresses the low end (boundary detail near the set) and stretches the
/// high end, which reduces color banding compared to the raw linear
/// fraction. Maps `[0, 1)` onto `[ln(0.5)/ln(1.5), 0)`.
#[inline]
pub fn log_smooth(value: f64) -> f64 {
    (value * 0.5 + 0.5).ln() / 1.5_f64.ln()
}

/// Map an iteration count to RGB in `[0, 1]³`.
///
/// Points that reached the bound are the set interior and are always pure
/// black, regardless of palette or phase. Everything else goes through
/// log-smoothing and the selected palette.
pub fn color_for(
    iterations: u32,
    iteration_bound: u32,
    palette: PaletteKind,
    color_phase: f64,
) -> [f64; 3] {
    if iterations >= iteration_bound {
        return [0.0, 0.0, 0.0];
    }

    let normalized = f64::from(iterations) / f64::from(iteration_bound);
    let smoothed = log_smooth(normalized);

    match palette {
        PaletteKind::Rainbow => rainbow(smoothed, color_phase),
        PaletteKind::Fire => fire(smoothed, color_phase),
        PaletteKind::ElectricBlue => electric_blue(smoothed, color_phase),
        PaletteKind::Twilight => twilight(smoothed, color_phase),
        PaletteKind::Neon => neon(smoothed, color_phase),
        PaletteKind::Sepia => sepia(smoothed, color_phase),
    }
}

/// Quantize a unit-range color to 8-bit RGB.
#[inline]
pub fn to_rgb8(color: [f64; 3]) -> [u8; 3] {
    [
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
    ]
}

/// Wrap `smoothed * scale + shift` into `[0, 1)`.
///
/// `rem_euclid` rather than `%`: the smoothed fraction is negative and the
/// phase shift is an unconstrained real, so a truncating remainder would
/// leak negative phases into the channel formulas.
#[inline]
fn wrap_phase(smoothed: f64, scale: f64, shift: f64) -> f64 {
    (smoothed * scale + shift).rem_euclid(1.0)
}

/// Three sine waves at 120° offsets, boosted 1.5× and capped.
/// The only palette that cycles three times over the smoothed range.
fn rainbow(smoothed: f64, shift: f64) -> [f64; 3] {
    let angle = wrap_phase(smoothed, 3.0, shift) * TAU;
    [
        ((angle.sin() * 0.5 + 0.5) * 1.5).min(1.0),
        (((angle + TAU / 3.0).sin() * 0.5 + 0.5) * 1.5).min(1.0),
        (((angle + 2.0 * TAU / 3.0).sin() * 0.5 + 0.5) * 1.5).min(1.0),
    ]
}

/// Black through red to yellow.
fn fire(smoothed: f64, shift: f64) -> [f64; 3] {
    let phase = wrap_phase(smoothed, 1.0, shift);
    [
        (phase * 2.0).min(1.0),
        ((phase - 0.3) * 2.0).clamp(0.0, 1.0),
        0.0,
    ]
}

fn electric_blue(smoothed: f64, shift: f64) -> [f64; 3] {
    let phase = wrap_phase(smoothed, 1.0, shift);
    [0.0, (phase * 2.0).min(1.0), (phase * 2.5).min(1.0)]
}

/// Deep blue into purple.
fn twilight(smoothed: f64, shift: f64) -> [f64; 3] {
    let phase = wrap_phase(smoothed, 1.0, shift);
    [(phase * 1.5).min(1.0), 0.0, (phase * 2.0).min(1.0)]
}

fn neon(smoothed: f64, shift: f64) -> [f64; 3] {
    let phase = wrap_phase(smoothed, 1.0, shift);
    [
        (phase * PI).sin() * 0.5 + 0.5,
        (phase * PI).cos() * 0.5 + 0.5,
        (phase * PI + PI / 3.0).sin() * 0.5 + 0.5,
    ]
}

fn sepia(smoothed: f64, shift: f64) -> [f64; 3] {
    let phase = wrap_phase(smoothed, 1.0, shift);
    [
        (phase * 1.2).min(1.0),
        (phase * 1.1).min(1.0),
        (phase * 0.9).min(1.0),
    ]
}
