// tests/superposition_tests.rs

use qho::core::TWO_PI;
use qho::{superpose, Eigenbasis, Grid, Oscillator, OscillatorState, QhoError};
use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-12;

fn default_oscillator() -> Oscillator {
    Oscillator::new(Grid::default())
}

#[test]
fn invariants_survive_arbitrary_operation_sequences() -> Result<(), QhoError> {
    let mut osc = default_oscillator();
    // Mix pointer sets (including wild coordinates), advances, and resets.
    for k in 0..500 {
        let n = k % 8;
        osc.set_from_pointer(n, (k as f64) * 13.7 - 1000.0, 400.0 - (k as f64) * 3.1, 33.75)?;
        osc.advance(0.173);
        if k % 97 == 0 {
            osc.reset();
        }
    }
    for n in 0..8 {
        let a = osc.state().amplitude(n);
        let p = osc.state().phase(n);
        assert!((0.0..=1.0).contains(&a), "amplitude[{}] = {} escaped [0, 1]", n, a);
        assert!((0.0..TWO_PI).contains(&p), "phase[{}] = {} escaped [0, 2*pi)", n, p);
    }
    Ok(())
}

#[test]
fn recompute_is_pure_and_deterministic() -> Result<(), QhoError> {
    let grid = Grid::default();
    let basis = Eigenbasis::generate(&grid, 7);
    let mut state = OscillatorState::new(8);
    state.set_coefficient(1, 0.7, 1.3);
    state.set_coefficient(4, 0.3, 5.9);

    let first = superpose(&basis, &state)?;
    let second = superpose(&basis, &state)?;
    assert_eq!(first.samples(), second.samples(), "identical inputs must yield identical arrays");
    // The inputs were not mutated by the call.
    assert!((state.amplitude(1) - 0.7).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn zero_amplitudes_yield_a_flat_wave() -> Result<(), QhoError> {
    let grid = Grid::default();
    let basis = Eigenbasis::generate(&grid, 7);
    let psi = superpose(&basis, &OscillatorState::new(8))?;
    assert_eq!(psi.len(), grid.len());
    for sample in psi.samples() {
        assert_eq!(sample.re, 0.0);
        assert_eq!(sample.im, 0.0);
    }
    Ok(())
}

#[test]
fn lone_ground_state_reproduces_its_eigenfunction() -> Result<(), QhoError> {
    let mut osc = default_oscillator();
    osc.set_coefficient(0, 1.0, 0.0)?;
    let basis_row = osc.basis().function(0);
    for (i, sample) in osc.psi().samples().iter().enumerate() {
        assert!((sample.re - basis_row[i]).abs() < TOLERANCE);
        assert!(sample.im.abs() < TOLERANCE);
    }
    Ok(())
}

#[test]
fn one_advance_decrements_each_phase_by_n_plus_half_times_speed() -> Result<(), QhoError> {
    let speed = 0.05;
    let mut osc = default_oscillator();
    // Park every phase at pi so no wrap interferes with the comparison.
    for n in 0..8 {
        osc.set_coefficient(n, 0.5, PI)?;
    }
    osc.advance(speed);

    let mut previous_drop = 0.0;
    for n in 0..8 {
        let drop = PI - osc.state().phase(n);
        let expected = (n as f64 + 0.5) * speed;
        assert!(
            (drop - expected).abs() < TOLERANCE,
            "mode {} dropped {} instead of {}",
            n,
            drop,
            expected
        );
        assert!(drop > previous_drop, "higher modes must precess faster");
        previous_drop = drop;
    }
    Ok(())
}

#[test]
fn pointer_mapping_matches_the_clock_geometry() -> Result<(), QhoError> {
    let radius = 33.75;
    let mut osc = default_oscillator();

    // Pointer directly right of center, exactly at the rim.
    osc.set_from_pointer(2, radius, 0.0, radius)?;
    assert_eq!(osc.state().amplitude(2), 1.0);
    assert!(osc.state().phase(2).abs() < TOLERANCE);

    // Pointer straight up (screen y is negative above the center).
    osc.set_from_pointer(3, 0.0, -radius, radius)?;
    assert_eq!(osc.state().amplitude(3), 1.0);
    assert!((osc.state().phase(3) - PI / 2.0).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn pointer_distance_beyond_radius_clamps_to_one() -> Result<(), QhoError> {
    let mut osc = default_oscillator();
    osc.set_from_pointer(6, 1e6, -1e6, 33.75)?;
    assert_eq!(osc.state().amplitude(6), 1.0, "amplitude must saturate at exactly 1");
    Ok(())
}

#[test]
fn hue_table_boundaries() {
    use qho::{hue_color, PhaseColorTable};
    assert_eq!(hue_color(0.0), "#ff0000");
    assert_eq!(hue_color(0.5), "#00ffff");
    assert_eq!(hue_color(1.0), "#ff0000");

    let table = PhaseColorTable::new();
    assert_eq!(table.color_for_phase(0.0), "#ff0000");
    assert_eq!(table.color_for_phase(PI), "#00ffff");
    assert_eq!(table.color_for_phase(TWO_PI - 1e-9), "#ff0000");
}
