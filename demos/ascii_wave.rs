// demos/ascii_wave.rs

//! Renders the evolving real part of the wave as ASCII, standing in for the
//! canvas renderer on the far side of the engine boundary.
//!
//! Run with: `cargo run --example ascii_wave`

use qho::{Grid, Oscillator, QhoError};

const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Maps a sample value in roughly [-1.5, 1.5] onto the brightness ramp.
fn glyph(v: f64) -> char {
    let t = ((v + 1.5) / 3.0).clamp(0.0, 1.0);
    let idx = (t * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx]
}

fn main() -> Result<(), QhoError> {
    // A coarse grid keeps one sample per terminal column.
    let mut osc = Oscillator::new(Grid::new(72, 7.2)?);

    // A lopsided superposition of the three lowest modes: the packet sloshes.
    osc.set_coefficient(0, 0.7, 0.0)?;
    osc.set_coefficient(1, 0.5, 0.0)?;
    osc.set_coefficient(2, 0.3, 0.0)?;

    println!("Re(psi) on {}:", osc.grid());
    for frame in 0..30 {
        let row: String = osc.psi().real().map(glyph).collect();
        println!("t={:02} |{}|", frame, row);
        osc.advance(0.3);
    }
    println!("final {}", osc.psi());
    Ok(())
}
