//! Error handling logic

use std::fmt;

/// Error types for the oscillator engine.
///
/// The engine's user-facing operations are total: amplitudes are clamped,
/// phases are wrapped, and pointer misses are ignored rather than rejected.
/// The only real failure class is a malformed configuration, which is fatal
/// at construction time since the engine cannot safely proceed with, say,
/// an eigenbasis sampled on a different grid than the wavefunction buffer.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QhoError {
    /// Inconsistent construction parameters: empty grid, non-positive sampling
    /// density, or an eigenbasis whose dimensions do not match the state or grid.
    ConfigMismatch {
        /// ConfigMismatch failure message
        message: String,
    },

    /// A quantum number outside the configured eigenbasis was referenced.
    InvalidMode {
        /// The offending quantum number.
        n: usize,
        /// InvalidMode failure message
        message: String,
    },

    /// A state invariant (amplitude clamp, phase wrap) was found broken.
    /// Raised only by the validation checks; the mutating operations
    /// themselves maintain the invariants.
    InvariantViolation {
        /// InvariantViolation failure message
        message: String,
    },
}

impl fmt::Display for QhoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QhoError::ConfigMismatch { message } => write!(f, "Configuration Mismatch: {}", message),
            QhoError::InvalidMode { n, message } => write!(f, "Invalid Mode (n = {}): {}", n, message),
            QhoError::InvariantViolation { message } => write!(f, "Invariant Violation: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QhoError {}
