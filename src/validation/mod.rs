// src/validation/mod.rs

//! Provides functions to check engine invariants and configuration consistency.

use crate::basis::Eigenbasis;
use crate::core::constants::qho_constants::TWO_PI;
use crate::core::{Grid, OscillatorState, QhoError};

/// Checks the state invariants: every amplitude in `[0, 1]` and every phase
/// in `[0, 2*pi)`.
///
/// The mutating operations maintain these by clamping and wrapping, so a
/// failure here means state was corrupted through some path that bypassed
/// them.
///
/// # Errors
/// `QhoError::InvariantViolation` naming the first offending mode.
pub fn check_state(state: &OscillatorState) -> Result<(), QhoError> {
    for n in 0..state.modes() {
        let amplitude = state.amplitude(n);
        if !(0.0..=1.0).contains(&amplitude) {
            return Err(QhoError::InvariantViolation {
                message: format!("amplitude[{}] = {} outside [0, 1]", n, amplitude),
            });
        }
        let phase = state.phase(n);
        if !(0.0..TWO_PI).contains(&phase) {
            return Err(QhoError::InvariantViolation {
                message: format!("phase[{}] = {} outside [0, 2*pi)", n, phase),
            });
        }
    }
    Ok(())
}

/// Total probability weight `sum(amplitude[n]^2)` of the current state.
///
/// Purely diagnostic: the engine deliberately allows the user to dial in a
/// total above 1 (the displayed wave is then not a unit-norm state), so this
/// is a number to report, not a condition to enforce.
pub fn total_probability(state: &OscillatorState) -> f64 {
    state.amplitudes().iter().map(|a| a * a).sum()
}

/// Checks that grid, eigenbasis, and state describe the same system: the
/// basis must be sampled on the grid, and basis and state must agree on the
/// number of eigenstates.
///
/// A failure here is a malformed configuration — the fatal initialization
/// error class; the engine cannot safely proceed from it.
///
/// # Errors
/// `QhoError::ConfigMismatch` describing the disagreement.
pub fn check_configuration(
    grid: &Grid,
    basis: &Eigenbasis,
    state: &OscillatorState,
) -> Result<(), QhoError> {
    if basis.sample_len() != grid.len() {
        return Err(QhoError::ConfigMismatch {
            message: format!(
                "eigenbasis sampled at {} points but grid has {}",
                basis.sample_len(),
                grid.len()
            ),
        });
    }
    if basis.modes() != state.modes() {
        return Err(QhoError::ConfigMismatch {
            message: format!(
                "eigenbasis has {} modes but state has {}",
                basis.modes(),
                state.modes()
            ),
        });
    }
    Ok(())
}
