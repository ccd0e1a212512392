// tests/session_tests.rs

use qho::{InputEvent, QhoError, ScriptBuilder, Session};

const TOLERANCE: f64 = 1e-12;

/// Canvas point at the rim of clock `n`, directly right of its center.
fn rim_of(session: &Session, n: usize) -> (f64, f64) {
    let (cx, cy) = session.layout().center(n);
    (cx + session.layout().radius(), cy)
}

#[test]
fn drag_stays_latched_to_the_pressed_clock() -> Result<(), QhoError> {
    let mut session = Session::with_defaults();
    let (x, y) = rim_of(&session, 5);
    session.handle(InputEvent::PointerDown { x, y })?;
    assert_eq!(session.active_clock(), Some(5));
    assert_eq!(session.oscillator().state().amplitude(5), 1.0);

    // Drag across other clocks and off the canvas entirely: still clock 5.
    session.handle(InputEvent::PointerMove { x: -2000.0, y: -3000.0 })?;
    assert_eq!(session.active_clock(), Some(5));
    assert_eq!(session.oscillator().state().amplitude(5), 1.0, "far drag saturates");
    for n in [0, 1, 2, 3, 4, 6, 7] {
        assert_eq!(session.oscillator().state().amplitude(n), 0.0, "clock {} must be untouched", n);
    }

    session.handle(InputEvent::PointerUp)?;
    assert_eq!(session.active_clock(), None);

    // Moves after release steer nothing.
    let amplitude_before = session.oscillator().state().amplitude(5);
    session.handle(InputEvent::PointerMove { x: 10.0, y: 290.0 })?;
    assert_eq!(session.oscillator().state().amplitude(5), amplitude_before);
    Ok(())
}

#[test]
fn press_outside_every_clock_is_ignored() -> Result<(), QhoError> {
    let mut session = Session::with_defaults();
    session.handle(InputEvent::PointerDown { x: 300.0, y: 50.0 })?;
    assert_eq!(session.active_clock(), None);
    for n in 0..8 {
        assert_eq!(session.oscillator().state().amplitude(n), 0.0);
    }
    Ok(())
}

#[test]
fn pause_gate_blocks_ticks_until_resumed() -> Result<(), QhoError> {
    let mut session = Session::with_defaults();
    let (x, y) = rim_of(&session, 0);
    session.handle(InputEvent::PointerDown { x, y })?;
    session.handle(InputEvent::PointerUp)?;

    session.handle(InputEvent::TogglePause)?;
    assert!(!session.is_running());
    let phase_before = session.oscillator().state().phase(0);
    assert!(!session.tick(), "paused session must not advance");
    assert_eq!(session.oscillator().state().phase(0), phase_before);

    session.handle(InputEvent::TogglePause)?;
    assert!(session.tick(), "resumed session advances again");
    assert_ne!(session.oscillator().state().phase(0), phase_before);
    Ok(())
}

#[test]
fn speed_parameter_scales_the_phase_decrement() -> Result<(), QhoError> {
    let mut session = Session::with_defaults();
    session.handle(InputEvent::SetSpeed(0.2))?;
    session.tick();
    for n in 0..8 {
        let expected = (-(n as f64 + 0.5) * 0.2).rem_euclid(2.0 * std::f64::consts::PI);
        assert!(
            (session.oscillator().state().phase(n) - expected).abs() < TOLERANCE,
            "mode {} phase off after one tick at speed 0.2",
            n
        );
    }
    Ok(())
}

#[test]
fn reset_flattens_the_wave_but_keeps_phases() -> Result<(), QhoError> {
    let mut session = Session::with_defaults();
    let (x, y) = rim_of(&session, 1);
    session.handle(InputEvent::PointerDown { x, y })?;
    session.handle(InputEvent::PointerUp)?;
    for _ in 0..7 {
        session.tick();
    }
    let phases_before: Vec<f64> = session.oscillator().state().phases().to_vec();

    session.handle(InputEvent::Reset)?;
    assert_eq!(session.oscillator().state().phases(), phases_before.as_slice());
    for n in 0..8 {
        assert_eq!(session.oscillator().state().amplitude(n), 0.0);
    }
    assert!(session.oscillator().psi().real().all(|v| v == 0.0));
    assert!(session.oscillator().psi().imag().all(|v| v == 0.0));
    Ok(())
}

#[test]
fn script_replay_is_deterministic() -> Result<(), QhoError> {
    let reference = Session::with_defaults();
    let (x, y) = rim_of(&reference, 2);
    let script = ScriptBuilder::new()
        .event(InputEvent::SetSpeed(0.15))
        .event(InputEvent::PointerDown { x, y })
        .event(InputEvent::PointerMove { x: x - 20.0, y: y - 45.0 })
        .event(InputEvent::PointerUp)
        .ticks(12)
        .event(InputEvent::TogglePause)
        .ticks(5) // gated off, must not matter
        .build();

    let mut first = Session::with_defaults();
    let mut second = Session::with_defaults();
    first.replay(&script)?;
    second.replay(&script)?;

    assert_eq!(
        first.oscillator().psi().samples(),
        second.oscillator().psi().samples(),
        "same script, same wave"
    );
    assert_eq!(first.oscillator().state(), second.oscillator().state());
    assert!(!first.is_running(), "script left the session paused");
    Ok(())
}

#[test]
fn render_state_exposes_one_entry_per_clock_and_sample() -> Result<(), QhoError> {
    let mut session = Session::with_defaults();
    let (x, y) = rim_of(&session, 0);
    session.handle(InputEvent::PointerDown { x, y })?;
    session.handle(InputEvent::PointerUp)?;

    let frame = session.render_state();
    assert_eq!(frame.psi.len(), session.oscillator().grid().len());
    assert_eq!(frame.amplitudes.len(), 8);
    assert_eq!(frame.phases.len(), 8);
    assert_eq!(frame.needle_colors.len(), 8);
    assert_eq!(frame.needle_colors[0], "#ff0000", "zero phase draws a red needle");
    Ok(())
}
