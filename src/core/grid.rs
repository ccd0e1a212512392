// src/core/grid.rs

use super::error::QhoError;
use std::fmt;

/// The fixed spatial sampling grid shared by the eigenbasis and the
/// superposed wavefunction.
///
/// Index `i` in `0..=i_max` maps to the oscillator's natural coordinate
/// `x = (i - i_max/2) / px_per_x`, so the grid is centered on the potential
/// minimum and `px_per_x` controls how many samples cover one natural unit.
/// The grid is immutable after construction and lives for the whole process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Highest sample index; the grid holds `i_max + 1` samples.
    i_max: usize,
    /// Samples per natural-unit x. Strictly positive.
    px_per_x: f64,
}

impl Grid {
    /// Creates a grid of `i_max + 1` samples with the given sampling density.
    ///
    /// # Errors
    /// Returns `QhoError::ConfigMismatch` for an empty grid (`i_max == 0`) or
    /// a non-positive or non-finite `px_per_x`; both make every downstream
    /// coordinate meaningless, so construction is the place to refuse them.
    pub fn new(i_max: usize, px_per_x: f64) -> Result<Self, QhoError> {
        if i_max == 0 {
            return Err(QhoError::ConfigMismatch {
                message: "grid needs at least two samples (i_max == 0)".to_string(),
            });
        }
        if !px_per_x.is_finite() || px_per_x <= 0.0 {
            return Err(QhoError::ConfigMismatch {
                message: format!("sampling density px_per_x must be finite and positive, got {}", px_per_x),
            });
        }
        Ok(Self { i_max, px_per_x })
    }

    /// Highest sample index.
    pub fn i_max(&self) -> usize {
        self.i_max
    }

    /// Number of samples, `i_max + 1`.
    pub fn len(&self) -> usize {
        self.i_max + 1
    }

    /// A grid always holds at least two samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Samples per natural-unit x.
    pub fn px_per_x(&self) -> f64 {
        self.px_per_x
    }

    /// Spacing between adjacent samples in natural units.
    pub fn dx(&self) -> f64 {
        1.0 / self.px_per_x
    }

    /// Natural-unit coordinate of sample `i`.
    pub fn x(&self, i: usize) -> f64 {
        (i as f64 - self.i_max as f64 / 2.0) / self.px_per_x
    }

    /// Iterates over all sample coordinates in index order.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.i_max).map(move |i| self.x(i))
    }
}

impl Default for Grid {
    /// The reference layout: 601 samples, 60 samples per natural unit,
    /// covering x in [-5, 5].
    fn default() -> Self {
        use super::constants::qho_constants::{DEFAULT_I_MAX, DEFAULT_PX_PER_X};
        // Defaults are valid by inspection, so the Result cannot surface here.
        Self {
            i_max: DEFAULT_I_MAX,
            px_per_x: DEFAULT_PX_PER_X,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid[{} samples, x in [{:.3}, {:.3}]]",
            self.len(),
            self.x(0),
            self.x(self.i_max)
        )
    }
}
