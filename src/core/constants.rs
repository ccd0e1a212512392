//! Shared constants for the oscillator engine.

/// Constants fixed by the physics or inherited from the reference canvas layout.
pub mod qho_constants {
    /// Highest energy quantum number in the fixed eigenbasis (n = 0..=7).
    pub const N_MAX: usize = 7;
    /// Full turn in radians; phases live in `[0, TWO_PI)`.
    pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
    /// Default number of grid samples minus one.
    pub const DEFAULT_I_MAX: usize = 600;
    /// Default sampling density: grid samples per natural-unit x.
    pub const DEFAULT_PX_PER_X: f64 = 60.0;
    /// Hue resolution of the phase color table (the table holds `N_COLORS + 1` entries).
    pub const N_COLORS: usize = 360;
    /// Frame period of the cooperative tick loop, in milliseconds (30 fps).
    pub const FRAME_PERIOD_MS: f64 = 1000.0 / 30.0;
    /// Vertical fraction of the canvas occupied by the clock strip.
    pub const CLOCK_SPACE_FRACTION: f64 = 0.25;
    /// Clock radius as a fraction of the clock cell size.
    pub const CLOCK_RADIUS_FRACTION: f64 = 0.45;
    /// Default speed parameter: ground-state phase decrement per frame, in radians.
    pub const DEFAULT_SPEED: f64 = 0.1;
}
