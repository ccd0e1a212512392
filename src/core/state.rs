// src/core/state.rs

use super::constants::qho_constants::TWO_PI;
use num_complex::Complex;
use std::fmt;

/// Wraps an angle into `[0, TWO_PI)`.
///
/// `rem_euclid` alone can round a tiny negative input up to exactly `TWO_PI`,
/// which would break the phase invariant, so that case folds back to zero.
pub(crate) fn wrap_phase(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TWO_PI);
    if wrapped >= TWO_PI { 0.0 } else { wrapped }
}

/// Per-eigenstate polar coefficients of the superposition.
///
/// For each quantum number `n` the state holds an amplitude in `[0, 1]` and a
/// phase in `[0, TWO_PI)`. These are the only mutable quantities in the
/// engine: the user sets them through the pointer mapping, and the tick loop
/// precesses the phases. Every operation is total over its input domain —
/// amplitudes saturate at 1 and phases wrap, nothing is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorState {
    amplitude: Vec<f64>,
    phase: Vec<f64>,
}

impl OscillatorState {
    /// Creates a state for `modes` eigenstates, all amplitudes and phases zero.
    pub fn new(modes: usize) -> Self {
        Self {
            amplitude: vec![0.0; modes],
            phase: vec![0.0; modes],
        }
    }

    /// Number of eigenstates tracked (`n_max + 1`).
    pub fn modes(&self) -> usize {
        self.amplitude.len()
    }

    /// Amplitude of eigenstate `n`. Panics if `n` is out of range.
    pub fn amplitude(&self, n: usize) -> f64 {
        self.amplitude[n]
    }

    /// Phase of eigenstate `n`, in `[0, TWO_PI)`. Panics if `n` is out of range.
    pub fn phase(&self, n: usize) -> f64 {
        self.phase[n]
    }

    /// All amplitudes, indexed by quantum number.
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitude
    }

    /// All phases, indexed by quantum number.
    pub fn phases(&self) -> &[f64] {
        &self.phase
    }

    /// Complex coefficient `amplitude * e^(i*phase)` of eigenstate `n`.
    pub fn coefficient(&self, n: usize) -> Complex<f64> {
        Complex::from_polar(self.amplitude[n], self.phase[n])
    }

    /// Sets eigenstate `n` from a pointer position relative to its clock
    /// center, given the clock's pixel radius.
    ///
    /// Coordinates are screen-oriented: x grows rightward, y grows downward.
    /// The needle length becomes the amplitude (`distance / radius`, clamped
    /// to 1 so a drag outside the clock saturates instead of erroring) and the
    /// needle angle becomes the phase, measured counterclockwise from the
    /// positive x axis — hence the sign flip on `rel_y` when converting from
    /// screen orientation. A pointer at `(radius, 0)` yields `(1, 0)`; a
    /// pointer straight above the center at `(0, -radius)` yields `(1, PI/2)`.
    pub fn set_from_pointer(&mut self, n: usize, rel_x: f64, rel_y: f64, radius: f64) {
        let distance = rel_x.hypot(rel_y);
        self.amplitude[n] = (distance / radius).min(1.0);
        self.phase[n] = wrap_phase((-rel_y).atan2(rel_x));
    }

    /// Sets eigenstate `n`'s coefficient directly: the amplitude is clamped
    /// into `[0, 1]` and the phase wrapped into `[0, TWO_PI)`.
    pub fn set_coefficient(&mut self, n: usize, amplitude: f64, phase: f64) {
        self.amplitude[n] = amplitude.clamp(0.0, 1.0);
        self.phase[n] = wrap_phase(phase);
    }

    /// Advances every phase by one step of free time evolution.
    ///
    /// Eigenstate `n` precesses clockwise at angular frequency `n + 0.5` in
    /// natural units (hbar*omega = 1): `phase[n] -= (n + 0.5) * step`, wrapped
    /// back into `[0, TWO_PI)`. The half-quantum offset is the oscillator's
    /// zero-point energy and must not be "simplified" away.
    pub fn advance(&mut self, step: f64) {
        for (n, phase) in self.phase.iter_mut().enumerate() {
            *phase = wrap_phase(*phase - (n as f64 + 0.5) * step);
        }
    }

    /// Zeroes every amplitude, leaving phases untouched.
    pub fn reset_amplitudes(&mut self) {
        self.amplitude.fill(0.0);
    }
}

/// The superposed wavefunction, sampled on the grid.
///
/// A flat array of complex samples, one per grid point, fully overwritten on
/// every rebuild — no incremental update and no history. The renderer reads
/// it through `samples()` or the real/imaginary part views.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavefunction {
    samples: Vec<Complex<f64>>,
}

impl Wavefunction {
    /// Creates an all-zero wavefunction of `len` samples.
    pub fn zeroed(len: usize) -> Self {
        Self {
            samples: vec![Complex::new(0.0, 0.0); len],
        }
    }

    /// Number of grid samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the wavefunction holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read-only access to the complex samples.
    pub fn samples(&self) -> &[Complex<f64>] {
        &self.samples
    }

    /// Mutable access for the superposition engine.
    pub(crate) fn samples_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.samples
    }

    /// Real part of the wave, in index order.
    pub fn real(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|c| c.re)
    }

    /// Imaginary part of the wave, in index order.
    pub fn imag(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|c| c.im)
    }
}

impl fmt::Display for Wavefunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let peak = self.samples.iter().map(|c| c.norm()).fold(0.0_f64, f64::max);
        write!(f, "Psi[{} samples, peak |psi| = {:.4}]", self.samples.len(), peak)
    }
}
