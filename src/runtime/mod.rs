// src/runtime/mod.rs

//! Deterministic runtime around the superposition engine.
//!
//! The reference implementation drove everything from browser callbacks and
//! `setTimeout`. Here the control flow is explicit instead: discrete
//! [`InputEvent`]s feed a [`Session`] (directly or through its queue), and a
//! [`FrameTimer`] decides when a tick is due. Because the tick source is
//! injectable, `advance`/`rebuild` behavior is testable without a real timer,
//! and a recorded [`Script`] replays a whole gesture byte-for-byte.
//!
//! Everything mutates through `&mut Session`, so pointer-driven and
//! tick-driven mutation are serialized by construction. If this is ever run
//! across threads, the `Session` is the single-writer unit to guard.

use crate::color::PhaseColorTable;
use crate::core::constants::qho_constants::{DEFAULT_SPEED, FRAME_PERIOD_MS};
use crate::core::{Grid, QhoError, Wavefunction};
use crate::input::{ClockLayout, PointerTracker};
use crate::superposition::Oscillator;
use std::collections::VecDeque;
use std::fmt;

/// A discrete gesture or control-surface event, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at canvas coordinates (x, y).
    PointerDown {
        /// Canvas x coordinate, pixels from the left edge.
        x: f64,
        /// Canvas y coordinate, pixels from the top edge.
        y: f64,
    },
    /// Pointer moved while (possibly) held. Coordinates may lie outside the
    /// canvas; a latched gesture keeps tracking them.
    PointerMove {
        /// Canvas x coordinate, pixels from the left edge.
        x: f64,
        /// Canvas y coordinate, pixels from the top edge.
        y: f64,
    },
    /// Pointer released (possibly outside the canvas).
    PointerUp,
    /// Sets the speed parameter scaling all angular velocities.
    SetSpeed(f64),
    /// Flips the run/pause gate.
    TogglePause,
    /// Zeroes every amplitude, leaving phases untouched.
    Reset,
}

/// One step of a recorded [`Script`]: an input event or a timer tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Apply an input event.
    Input(InputEvent),
    /// Advance one frame (subject to the run/pause gate).
    Tick,
}

/// A recorded, replayable sequence of session steps.
///
/// Useful for deterministic tests and demos: the same script against the
/// same starting session always produces the same wavefunction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// The recorded steps, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the script records nothing.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Script[{} steps]", self.steps.len())?;
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Input(event) => writeln!(f, "  {:04}: {:?}", i, event)?,
                Step::Tick => writeln!(f, "  {:04}: Tick", i)?,
            }
        }
        Ok(())
    }
}

/// Builds a [`Script`] by method chaining.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    script: Script,
}

impl ScriptBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an input event.
    pub fn event(mut self, event: InputEvent) -> Self {
        self.script.steps.push(Step::Input(event));
        self
    }

    /// Appends a single frame tick.
    pub fn tick(self) -> Self {
        self.ticks(1)
    }

    /// Appends `count` frame ticks.
    pub fn ticks(mut self, count: usize) -> Self {
        self.script.steps.extend(std::iter::repeat_n(Step::Tick, count));
        self
    }

    /// Finalizes the script.
    pub fn build(self) -> Script {
        self.script
    }
}

/// Fixed-period tick source with run-to-completion semantics.
///
/// Mirrors the original's "schedule the next frame only after this one
/// finished": when enough time has accumulated, exactly one tick becomes due
/// and the surplus is dropped, so a long stall never produces a burst of
/// catch-up ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTimer {
    period_ms: f64,
    credit_ms: f64,
}

impl FrameTimer {
    /// Creates a timer with the given period in milliseconds.
    ///
    /// # Errors
    /// Returns `QhoError::ConfigMismatch` for a non-positive or non-finite period.
    pub fn new(period_ms: f64) -> Result<Self, QhoError> {
        if !period_ms.is_finite() || period_ms <= 0.0 {
            return Err(QhoError::ConfigMismatch {
                message: format!("frame period must be finite and positive, got {}", period_ms),
            });
        }
        Ok(Self { period_ms, credit_ms: 0.0 })
    }

    /// The configured period in milliseconds.
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Records elapsed wall-clock time. Negative values are ignored.
    pub fn record(&mut self, elapsed_ms: f64) {
        self.credit_ms += elapsed_ms.max(0.0);
    }

    /// Consumes accumulated time and reports whether one tick is due.
    /// At most one tick becomes due per call regardless of how much time
    /// has passed.
    pub fn due(&mut self) -> bool {
        if self.credit_ms >= self.period_ms {
            self.credit_ms = 0.0;
            true
        } else {
            false
        }
    }
}

impl Default for FrameTimer {
    /// The reference frame rate: 1000/30 ms per frame.
    fn default() -> Self {
        Self {
            period_ms: FRAME_PERIOD_MS,
            credit_ms: 0.0,
        }
    }
}

/// Everything the renderer needs for one frame, borrowed from the session.
#[derive(Debug)]
pub struct RenderState<'a> {
    /// The superposed wavefunction samples.
    pub psi: &'a Wavefunction,
    /// Per-eigenstate needle lengths.
    pub amplitudes: &'a [f64],
    /// Per-eigenstate needle angles, in `[0, 2*pi)`.
    pub phases: &'a [f64],
    /// Per-eigenstate needle colors, looked up from the phase wheel.
    pub needle_colors: Vec<&'a str>,
}

/// The interactive session: oscillator, clock controls, and the run loop
/// state (speed parameter, run/pause gate, event queue).
#[derive(Debug, Clone)]
pub struct Session {
    oscillator: Oscillator,
    layout: ClockLayout,
    tracker: PointerTracker,
    colors: PhaseColorTable,
    queue: VecDeque<InputEvent>,
    speed: f64,
    running: bool,
}

impl Session {
    /// Assembles a session from an oscillator and a clock layout.
    ///
    /// # Errors
    /// Returns `QhoError::ConfigMismatch` when the layout's clock count does
    /// not match the oscillator's mode count — every clock must steer exactly
    /// one eigenstate.
    pub fn new(oscillator: Oscillator, layout: ClockLayout) -> Result<Self, QhoError> {
        if layout.clocks() != oscillator.state().modes() {
            return Err(QhoError::ConfigMismatch {
                message: format!(
                    "layout has {} clocks but oscillator has {} modes",
                    layout.clocks(),
                    oscillator.state().modes()
                ),
            });
        }
        Ok(Self {
            oscillator,
            layout,
            tracker: PointerTracker::new(),
            colors: PhaseColorTable::new(),
            queue: VecDeque::new(),
            speed: DEFAULT_SPEED,
            running: true,
        })
    }

    /// A session over the default grid, eight modes, and the reference layout.
    pub fn with_defaults() -> Self {
        // Default grid and layout agree on eight modes, so the clock-count
        // check of `new` cannot fire.
        Self {
            oscillator: Oscillator::new(Grid::default()),
            layout: ClockLayout::default(),
            tracker: PointerTracker::new(),
            colors: PhaseColorTable::new(),
            queue: VecDeque::new(),
            speed: DEFAULT_SPEED,
            running: true,
        }
    }

    /// The underlying oscillator.
    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// The clock control geometry.
    pub fn layout(&self) -> &ClockLayout {
        &self.layout
    }

    /// The latched clock index, if a drag is in progress.
    pub fn active_clock(&self) -> Option<usize> {
        self.tracker.active()
    }

    /// Current speed parameter.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the tick loop is running (true) or paused (false).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one event immediately.
    ///
    /// Pointer presses that miss every clock are ignored. All events are
    /// total; the only error source is a latched clock index exceeding the
    /// oscillator's modes, which `new` rules out by construction.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), QhoError> {
        match event {
            InputEvent::PointerDown { x, y } => {
                if let Some((n, rel_x, rel_y)) = self.tracker.pointer_down(&self.layout, x, y) {
                    self.oscillator
                        .set_from_pointer(n, rel_x, rel_y, self.layout.radius())?;
                }
            }
            InputEvent::PointerMove { x, y } => {
                if let Some((n, rel_x, rel_y)) = self.tracker.pointer_move(&self.layout, x, y) {
                    self.oscillator
                        .set_from_pointer(n, rel_x, rel_y, self.layout.radius())?;
                }
            }
            InputEvent::PointerUp => self.tracker.pointer_up(),
            InputEvent::SetSpeed(value) => self.speed = value,
            InputEvent::TogglePause => self.running = !self.running,
            InputEvent::Reset => self.oscillator.reset(),
        }
        Ok(())
    }

    /// Queues an event for the next [`drain`](Self::drain).
    pub fn enqueue(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Applies all queued events in arrival order.
    pub fn drain(&mut self) -> Result<(), QhoError> {
        while let Some(event) = self.queue.pop_front() {
            self.handle(event)?;
        }
        Ok(())
    }

    /// Advances one frame if the run gate is open. Returns whether the frame
    /// actually advanced. The gate is checked before any work, so pausing
    /// stops future ticks without interrupting one in flight.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.oscillator.advance(self.speed);
        true
    }

    /// Replays a recorded script step by step.
    pub fn replay(&mut self, script: &Script) -> Result<(), QhoError> {
        for step in script.steps() {
            match step {
                Step::Input(event) => self.handle(*event)?,
                Step::Tick => {
                    self.tick();
                }
            }
        }
        Ok(())
    }

    /// Borrows everything the renderer needs to draw the current frame.
    pub fn render_state(&self) -> RenderState<'_> {
        let state = self.oscillator.state();
        let needle_colors = state
            .phases()
            .iter()
            .map(|&phase| self.colors.color_for_phase(phase))
            .collect();
        RenderState {
            psi: self.oscillator.psi(),
            amplitudes: state.amplitudes(),
            phases: state.phases(),
            needle_colors,
        }
    }
}
