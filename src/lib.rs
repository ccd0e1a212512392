// src/lib.rs

//! `qho` - An interactive superposition engine for the quantum harmonic oscillator
//!
//! This library maintains per-eigenstate complex amplitudes (magnitude and
//! phase) for the first eight stationary states of the harmonic oscillator,
//! recomputes the superposed wavefunction sample array each frame, and maps
//! pointer gestures on per-eigenstate phasor "clock" controls to amplitude
//! and phase. Rendering and OS event plumbing live outside the crate: the
//! renderer consumes [`Wavefunction`] samples and [`RenderState`] snapshots,
//! and feeds back discrete [`InputEvent`]s.

pub mod core;
pub mod basis;
pub mod superposition;
pub mod input;
pub mod runtime;
pub mod color;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{Grid, OscillatorState, QhoError, Wavefunction};
pub use basis::Eigenbasis;
pub use superposition::{superpose, Oscillator};
pub use input::{ClockLayout, PointerTracker};
pub use runtime::{FrameTimer, InputEvent, RenderState, Script, ScriptBuilder, Session, Step};
pub use color::{hue_color, PhaseColorTable};
pub use validation::{check_configuration, check_state, total_probability};

// Example 1: Exciting a single eigenstate
// Demonstrates that a unit-amplitude, zero-phase ground state reproduces its
// basis wavefunction exactly, and that free evolution rotates the phase
// without touching the amplitude.
/// ```
/// use qho::{Grid, Oscillator, QhoError};
///
/// # fn main() -> Result<(), QhoError> {
/// let mut osc = Oscillator::new(Grid::default());
/// osc.set_coefficient(0, 1.0, 0.0)?;
///
/// // psi now equals the ground-state Gaussian: purely real.
/// let mid = osc.grid().len() / 2;
/// let sample = osc.psi().samples()[mid];
/// assert!((sample.re - 1.0).abs() < 1e-12); // exp(0) at the well center
/// assert!(sample.im.abs() < 1e-12);
///
/// // One frame of evolution: the ground state precesses at rate 0.5.
/// osc.advance(0.1);
/// assert!((osc.state().amplitude(0) - 1.0).abs() < 1e-12);
/// let expected = 2.0 * std::f64::consts::PI - 0.05;
/// assert!((osc.state().phase(0) - expected).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Driving a session with gesture events
// Demonstrates the press-drag-release protocol, the run/pause gate, and the
// renderer-facing snapshot.
/// ```
/// use qho::{InputEvent, QhoError, Session};
///
/// # fn main() -> Result<(), QhoError> {
/// let mut session = Session::with_defaults();
///
/// // Press on clock 0's face, at its rightmost point: amplitude 1, phase 0.
/// let (cx, cy) = session.layout().center(0);
/// let radius = session.layout().radius();
/// session.handle(InputEvent::PointerDown { x: cx + radius, y: cy })?;
/// session.handle(InputEvent::PointerUp)?;
/// assert_eq!(session.oscillator().state().amplitude(0), 1.0);
///
/// // Pause: the gate closes and ticks become no-ops.
/// session.handle(InputEvent::TogglePause)?;
/// assert!(!session.tick());
///
/// let frame = session.render_state();
/// assert_eq!(frame.needle_colors[0], "#ff0000"); // phase 0 is pure red
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
