// src/superposition/mod.rs

//! Combines the fixed eigenbasis and the mutable oscillator state into the
//! displayed wavefunction.
//!
//! This module contains the [`Oscillator`] entry point, which owns every
//! piece of engine state and keeps them mutually consistent, plus the pure
//! [`superpose`] contract for callers that manage their own buffers. The
//! inner recombination kernel lives in the private `engine` module.

mod engine;

use crate::basis::Eigenbasis;
use crate::core::constants::qho_constants::N_MAX;
use crate::core::{Grid, OscillatorState, QhoError, Wavefunction};

/// Recomputes the superposed wavefunction from scratch.
///
/// Pure and deterministic: identical `(basis, state)` inputs always yield
/// identical sample arrays. With all amplitudes zero the result is an
/// all-zero array of `basis.sample_len()` samples.
///
/// # Errors
/// Returns `QhoError::ConfigMismatch` when the basis and state disagree on
/// the number of eigenstates — a malformed configuration the engine cannot
/// safely proceed from.
pub fn superpose(basis: &Eigenbasis, state: &OscillatorState) -> Result<Wavefunction, QhoError> {
    if basis.modes() != state.modes() {
        return Err(QhoError::ConfigMismatch {
            message: format!(
                "eigenbasis has {} modes but state has {}",
                basis.modes(),
                state.modes()
            ),
        });
    }
    let mut psi = Wavefunction::zeroed(basis.sample_len());
    engine::rebuild_into(basis, state, &mut psi);
    Ok(psi)
}

/// The assembled superposition engine.
///
/// Owns the grid, the precomputed eigenbasis, the per-eigenstate
/// amplitude/phase state, and the wavefunction buffer, all sized consistently
/// at construction so the per-frame rebuild can never fail. Every mutating
/// operation rebuilds the wavefunction before returning, so `psi()` is always
/// current for the renderer.
#[derive(Debug, Clone)]
pub struct Oscillator {
    grid: Grid,
    basis: Eigenbasis,
    state: OscillatorState,
    psi: Wavefunction,
}

impl Oscillator {
    /// Creates an oscillator with the standard eight eigenstates (n = 0..=7).
    pub fn new(grid: Grid) -> Self {
        Self::with_modes(grid, N_MAX)
    }

    /// Creates an oscillator with eigenstates `n = 0..=n_max`.
    pub fn with_modes(grid: Grid, n_max: usize) -> Self {
        let basis = Eigenbasis::generate(&grid, n_max);
        let state = OscillatorState::new(n_max + 1);
        let psi = Wavefunction::zeroed(grid.len());
        Self { grid, basis, state, psi }
    }

    /// The spatial grid everything is sampled on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The precomputed eigenbasis.
    pub fn basis(&self) -> &Eigenbasis {
        &self.basis
    }

    /// The current per-eigenstate amplitudes and phases.
    pub fn state(&self) -> &OscillatorState {
        &self.state
    }

    /// The current superposed wavefunction.
    pub fn psi(&self) -> &Wavefunction {
        &self.psi
    }

    /// Sets eigenstate `n` from pointer coordinates relative to its clock
    /// center (screen-oriented, y downward) and rebuilds the wave.
    ///
    /// # Errors
    /// Returns `QhoError::InvalidMode` when `n` exceeds the configured basis.
    pub fn set_from_pointer(
        &mut self,
        n: usize,
        rel_x: f64,
        rel_y: f64,
        radius: f64,
    ) -> Result<(), QhoError> {
        self.check_mode(n)?;
        self.state.set_from_pointer(n, rel_x, rel_y, radius);
        self.rebuild();
        Ok(())
    }

    /// Sets eigenstate `n`'s coefficient directly (amplitude clamped into
    /// `[0, 1]`, phase wrapped into `[0, 2*pi)`) and rebuilds the wave.
    ///
    /// # Errors
    /// Returns `QhoError::InvalidMode` when `n` exceeds the configured basis.
    pub fn set_coefficient(&mut self, n: usize, amplitude: f64, phase: f64) -> Result<(), QhoError> {
        self.check_mode(n)?;
        self.state.set_coefficient(n, amplitude, phase);
        self.rebuild();
        Ok(())
    }

    /// Advances every phase by one step of free time evolution and rebuilds.
    pub fn advance(&mut self, step: f64) {
        self.state.advance(step);
        self.rebuild();
    }

    /// Zeroes every amplitude (phases keep spinning from where they are) and
    /// rebuilds, leaving a flat wave.
    pub fn reset(&mut self) {
        self.state.reset_amplitudes();
        self.rebuild();
    }

    fn check_mode(&self, n: usize) -> Result<(), QhoError> {
        if n >= self.state.modes() {
            return Err(QhoError::InvalidMode {
                n,
                message: format!("basis holds modes 0..={}", self.basis.n_max()),
            });
        }
        Ok(())
    }

    fn rebuild(&mut self) {
        engine::rebuild_into(&self.basis, &self.state, &mut self.psi);
    }
}
