// src/input/mod.rs

//! Maps pointer gestures onto per-eigenstate clock controls.
//!
//! The renderer draws one phasor clock per eigenstate along the bottom strip
//! of the canvas; [`ClockLayout`] mirrors that geometry so raw canvas
//! coordinates can be resolved to a control index and center-relative
//! offsets. [`PointerTracker`] owns the press-drag-release protocol: the
//! control selected at `pointer_down` stays latched for every `pointer_move`
//! until `pointer_up`, no matter where the drag travels — a drag may leave
//! the clock, or the canvas, and keeps steering the same clock.

use crate::core::constants::qho_constants::{CLOCK_RADIUS_FRACTION, CLOCK_SPACE_FRACTION, N_MAX};
use crate::core::QhoError;

/// On-canvas geometry of the clock controls.
///
/// The clock strip occupies the bottom `CLOCK_SPACE_FRACTION` of the canvas;
/// each clock gets a square cell of that height, with clock `n` centered at
/// `((n + 0.5) * cell, height - 0.5 * cell)`. All coordinates are
/// screen-oriented (origin top-left, y downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockLayout {
    width: f64,
    height: f64,
    clocks: usize,
}

impl ClockLayout {
    /// Creates a layout for `clocks` controls on a `width` x `height` canvas.
    ///
    /// # Errors
    /// Returns `QhoError::ConfigMismatch` for non-positive canvas dimensions
    /// or zero clocks.
    pub fn new(width: f64, height: f64, clocks: usize) -> Result<Self, QhoError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(QhoError::ConfigMismatch {
                message: format!("canvas dimensions must be positive, got {}x{}", width, height),
            });
        }
        if clocks == 0 {
            return Err(QhoError::ConfigMismatch {
                message: "layout needs at least one clock control".to_string(),
            });
        }
        Ok(Self { width, height, clocks })
    }

    /// Number of clock controls.
    pub fn clocks(&self) -> usize {
        self.clocks
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Side of each clock's square cell, in pixels.
    pub fn cell(&self) -> f64 {
        self.height * CLOCK_SPACE_FRACTION
    }

    /// Pixel radius of each clock face.
    pub fn radius(&self) -> f64 {
        self.cell() * CLOCK_RADIUS_FRACTION
    }

    /// Center of clock `n` in canvas coordinates.
    pub fn center(&self, n: usize) -> (f64, f64) {
        (
            (n as f64 + 0.5) * self.cell(),
            self.height - 0.5 * self.cell(),
        )
    }

    /// Offsets of a canvas point from clock `n`'s center (y downward).
    pub fn relative(&self, n: usize, x: f64, y: f64) -> (f64, f64) {
        let (cx, cy) = self.center(n);
        (x - cx, y - cy)
    }

    /// Resolves a canvas point to the clock whose circular face contains it.
    ///
    /// Points above the clock strip, past the last clock, or inside a cell
    /// but outside the clock's circle all miss — a miss is an ignored
    /// gesture, not an error.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        if y <= self.height - self.cell() || x < 0.0 {
            return None;
        }
        let n = (x / self.cell()).floor() as usize;
        if n >= self.clocks {
            return None;
        }
        let (rel_x, rel_y) = self.relative(n, x, y);
        let radius = self.radius();
        if rel_x * rel_x + rel_y * rel_y <= radius * radius {
            Some(n)
        } else {
            None
        }
    }
}

impl Default for ClockLayout {
    /// The reference canvas: 600 x 300, eight clocks of 75 px cells.
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            clocks: N_MAX + 1,
        }
    }
}

/// Latches the active clock for the duration of a press-drag-release gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    active: Option<usize>,
}

impl PointerTracker {
    /// Creates a tracker with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// The latched clock index, if a gesture is in progress.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Begins a gesture. Returns the hit clock and center-relative offsets,
    /// or `None` (and latches nothing) when the press misses every clock.
    pub fn pointer_down(&mut self, layout: &ClockLayout, x: f64, y: f64) -> Option<(usize, f64, f64)> {
        let n = layout.hit_test(x, y)?;
        self.active = Some(n);
        let (rel_x, rel_y) = layout.relative(n, x, y);
        Some((n, rel_x, rel_y))
    }

    /// Continues a gesture. Returns offsets relative to the *latched* clock
    /// regardless of where the pointer is now; `None` when no gesture is in
    /// progress.
    pub fn pointer_move(&self, layout: &ClockLayout, x: f64, y: f64) -> Option<(usize, f64, f64)> {
        let n = self.active?;
        let (rel_x, rel_y) = layout.relative(n, x, y);
        Some((n, rel_x, rel_y))
    }

    /// Ends the gesture, releasing the latch.
    pub fn pointer_up(&mut self) {
        self.active = None;
    }
}
