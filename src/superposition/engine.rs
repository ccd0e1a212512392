// src/superposition/engine.rs

use crate::basis::Eigenbasis;
use crate::core::{OscillatorState, Wavefunction};
use num_traits::Zero; // For Complex::set_zero()

/// Recombines the eigenbasis into the wavefunction buffer.
///
/// For each grid index `i`:
/// `psi[i] = sum_n amplitude[n] * e^(i*phase[n]) * u_n[i]`.
///
/// The buffer is zeroed and fully recomputed on every call — no incremental
/// update. Total work is O(modes * samples), bounded and small, so simplicity
/// wins over delta tracking. The result is deliberately not renormalized:
/// when the user dials in sum(amplitude^2) > 1 the displayed wave is not a
/// unit-norm state, and that is accepted behavior for an exploratory toy.
///
/// Callers guarantee `basis.modes() == state.modes()` and
/// `basis.sample_len() == psi.len()`; [`superpose`](super::superpose) is the
/// checked entry point for foreign inputs.
pub(crate) fn rebuild_into(basis: &Eigenbasis, state: &OscillatorState, psi: &mut Wavefunction) {
    for sample in psi.samples_mut() {
        sample.set_zero();
    }
    for n in 0..state.modes() {
        let coefficient = state.coefficient(n);
        let row = basis.function(n);
        for (sample, &u) in psi.samples_mut().iter_mut().zip(row) {
            *sample += coefficient * u;
        }
    }
}
