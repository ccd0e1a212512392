// src/color/mod.rs

//! Phase-to-color lookup for the phasor clock needles.
//!
//! A piecewise-linear hue wheel over six sectors (red, yellow, green, cyan,
//! blue, magenta, back to red); in each sector one RGB channel is linearly
//! interpolated while the other two sit on a rail at 0 or 255. The wheel is
//! precomputed into a table indexed by rounded phase angle, so the per-frame
//! cost of coloring a needle is one lookup.

use crate::core::constants::qho_constants::{N_COLORS, TWO_PI};
use crate::core::state::wrap_phase;

/// Converts a channel value to a two-digit lowercase hex string chunk.
fn two_digit_hex(c: u8) -> String {
    format!("{:02x}", c)
}

/// RGB channels for a hue in `[0, 1]`, walking the six-sector wheel.
fn hue_rgb(hue: f64) -> (u8, u8, u8) {
    if hue < 1.0 / 6.0 {
        (255, (hue * 6.0 * 255.0).round() as u8, 0) // red to yellow
    } else if hue < 1.0 / 3.0 {
        (((1.0 / 3.0 - hue) * 6.0 * 255.0).round() as u8, 255, 0) // yellow to green
    } else if hue < 1.0 / 2.0 {
        (0, 255, ((hue - 1.0 / 3.0) * 6.0 * 255.0).round() as u8) // green to cyan
    } else if hue < 2.0 / 3.0 {
        (0, ((2.0 / 3.0 - hue) * 6.0 * 255.0).round() as u8, 255) // cyan to blue
    } else if hue < 5.0 / 6.0 {
        (((hue - 2.0 / 3.0) * 6.0 * 255.0).round() as u8, 0, 255) // blue to magenta
    } else {
        (255, 0, ((1.0 - hue) * 6.0 * 255.0).round() as u8) // magenta to red
    }
}

/// Hex color string (`#rrggbb`) for a hue in `[0, 1]`.
///
/// Pure and stateless; `hue = 0` is pure red, `hue = 0.5` pure cyan, and the
/// wheel wraps back to red as `hue` approaches 1.
pub fn hue_color(hue: f64) -> String {
    let (r, g, b) = hue_rgb(hue);
    format!("#{}{}{}", two_digit_hex(r), two_digit_hex(g), two_digit_hex(b))
}

/// Precomputed hue wheel indexed by rounded phase angle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseColorTable {
    colors: Vec<String>,
}

impl PhaseColorTable {
    /// Builds the standard 361-entry table (one entry per hue degree, with
    /// both endpoints present so rounding never falls off the table).
    pub fn new() -> Self {
        Self::with_resolution(N_COLORS)
    }

    /// Builds a table of `n_colors + 1` entries.
    pub fn with_resolution(n_colors: usize) -> Self {
        let colors = (0..=n_colors)
            .map(|c| hue_color(c as f64 / n_colors as f64))
            .collect();
        Self { colors }
    }

    /// Number of table entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// The table always holds at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color for a phase angle in radians. The phase is wrapped into
    /// `[0, TWO_PI)` first, so any real input is acceptable.
    pub fn color_for_phase(&self, phase: f64) -> &str {
        let steps = (self.colors.len() - 1) as f64;
        let index = (wrap_phase(phase) * steps / TWO_PI).round() as usize;
        &self.colors[index]
    }
}

impl Default for PhaseColorTable {
    fn default() -> Self {
        Self::new()
    }
}
