// demos/gesture_replay.rs

//! Replays a recorded pointer gesture through a session and reports the
//! resulting state — a deterministic, renderer-free walkthrough of the
//! press-drag-release protocol.
//!
//! Run with: `cargo run --example gesture_replay`

use qho::validation::total_probability;
use qho::{InputEvent, QhoError, ScriptBuilder, Session};

fn main() -> Result<(), QhoError> {
    let mut session = Session::with_defaults();

    // Dial clock 1 to full amplitude at phase 0, drag it upward, release,
    // then let the wave precess for a second of frames.
    let (cx, cy) = session.layout().center(1);
    let radius = session.layout().radius();
    let script = ScriptBuilder::new()
        .event(InputEvent::SetSpeed(0.12))
        .event(InputEvent::PointerDown { x: cx + radius, y: cy })
        .event(InputEvent::PointerMove { x: cx, y: cy - radius })
        .event(InputEvent::PointerUp)
        .ticks(30)
        .build();

    println!("{}", script);
    session.replay(&script)?;

    let frame = session.render_state();
    println!("after replay: {}", session.oscillator().psi());
    println!("total probability: {:.3}", total_probability(session.oscillator().state()));
    for n in 0..frame.amplitudes.len() {
        println!(
            "clock {}: amplitude {:.3}, phase {:.3} rad, needle {}",
            n, frame.amplitudes[n], frame.phases[n], frame.needle_colors[n]
        );
    }
    Ok(())
}
