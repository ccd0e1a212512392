// src/basis/mod.rs

//! Precomputes the stationary-state wavefunctions of the harmonic oscillator.
//!
//! Each eigenstate `n` is the Hermite function
//! `u_n(x) = H_n(x) / sqrt(2^n n!) * exp(-x^2 / 2)`, sampled once on the
//! shared [`Grid`](crate::core::Grid) at startup and never mutated afterwards.
//! The constant prefactor `pi^(-1/4)` common to all states is omitted, so the
//! states are mutually orthogonal and share the same norm on the grid; only
//! their relative weights matter to the superposition.

use crate::core::Grid;

/// The fixed set of eigenstate sample rows, one per quantum number.
///
/// Rows are real-valued, all of length `grid.len()`, and immutable after
/// generation. Generation is a pure function of the grid parameters and the
/// requested `n_max`; there are no error conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigenbasis {
    /// `functions[n][i]` is eigenstate `n` evaluated at grid sample `i`.
    functions: Vec<Vec<f64>>,
}

impl Eigenbasis {
    /// Generates eigenstates `n = 0..=n_max` on the given grid.
    ///
    /// States up to `n = 7` use the explicit polynomial-times-Gaussian
    /// expressions; higher states extend them through the normalized Hermite
    /// recurrence `u_n = sqrt(2/n) x u_(n-1) - sqrt((n-1)/n) u_(n-2)`, which
    /// agrees with the fixed forms and stays numerically stable because the
    /// coefficients never grow.
    pub fn generate(grid: &Grid, n_max: usize) -> Self {
        let len = grid.len();
        let mut functions = vec![vec![0.0; len]; n_max + 1];

        for i in 0..len {
            let x = grid.x(i);
            let gauss = (-x * x / 2.0).exp();
            for n in 0..=n_max.min(7) {
                functions[n][i] = fixed_form(n, x, gauss);
            }
            for n in 8..=n_max {
                functions[n][i] = (2.0 / n as f64).sqrt() * x * functions[n - 1][i]
                    - ((n as f64 - 1.0) / n as f64).sqrt() * functions[n - 2][i];
            }
        }

        Self { functions }
    }

    /// Highest quantum number in the basis.
    pub fn n_max(&self) -> usize {
        self.functions.len() - 1
    }

    /// Number of eigenstates, `n_max + 1`.
    pub fn modes(&self) -> usize {
        self.functions.len()
    }

    /// Number of samples in each eigenstate row.
    pub fn sample_len(&self) -> usize {
        self.functions[0].len()
    }

    /// The sample row of eigenstate `n`. Panics if `n > n_max`.
    pub fn function(&self, n: usize) -> &[f64] {
        &self.functions[n]
    }
}

/// The closed-form Hermite functions for `n <= 7`, as polynomial times
/// Gaussian with the `1/sqrt(2^n n!)` normalization folded into the leading
/// coefficients. `gauss` is `exp(-x^2/2)`.
fn fixed_form(n: usize, x: f64, gauss: f64) -> f64 {
    let x2 = x * x;
    match n {
        0 => gauss,
        1 => 2.0_f64.sqrt() * x * gauss,
        2 => (1.0 / 2.0_f64.sqrt()) * (2.0 * x2 - 1.0) * gauss,
        3 => (1.0 / 3.0_f64.sqrt()) * (2.0 * x2 * x - 3.0 * x) * gauss,
        4 => (1.0 / 24.0_f64.sqrt()) * (4.0 * x2 * x2 - 12.0 * x2 + 3.0) * gauss,
        5 => (1.0 / 60.0_f64.sqrt()) * (4.0 * x2 * x2 * x - 20.0 * x2 * x + 15.0 * x) * gauss,
        6 => {
            (1.0 / 720.0_f64.sqrt())
                * (8.0 * x2 * x2 * x2 - 60.0 * x2 * x2 + 90.0 * x2 - 15.0)
                * gauss
        }
        7 => {
            (1.0 / (36.0 * 70.0_f64).sqrt())
                * (8.0 * x2 * x2 * x2 * x - 84.0 * x2 * x2 * x + 210.0 * x2 * x - 105.0 * x)
                * gauss
        }
        _ => unreachable!("fixed forms cover n <= 7 only"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn default_basis() -> Eigenbasis {
        Eigenbasis::generate(&Grid::default(), 7)
    }

    /// Discrete inner product with the grid's sample spacing.
    fn inner(grid: &Grid, a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(p, q)| p * q).sum::<f64>() * grid.dx()
    }

    #[test]
    fn ground_state_is_a_gaussian() {
        let grid = Grid::default();
        let basis = default_basis();
        for (i, x) in grid.positions().enumerate() {
            let expected = (-x * x / 2.0).exp();
            assert!((basis.function(0)[i] - expected).abs() < TOLERANCE);
        }
    }

    #[test]
    fn recurrence_reproduces_the_fixed_forms() {
        // Rebuild every n <= 7 row from the recurrence and compare with the
        // explicit polynomial expressions.
        let grid = Grid::default();
        let basis = default_basis();
        for (i, x) in grid.positions().enumerate() {
            let mut prev2 = basis.function(0)[i];
            let mut prev1 = basis.function(1)[i];
            for n in 2..=7 {
                let from_recurrence = (2.0 / n as f64).sqrt() * x * prev1
                    - ((n as f64 - 1.0) / n as f64).sqrt() * prev2;
                assert!(
                    (from_recurrence - basis.function(n)[i]).abs() < 1e-10,
                    "mode {} sample {} diverges: {} vs {}",
                    n,
                    i,
                    from_recurrence,
                    basis.function(n)[i]
                );
                prev2 = prev1;
                prev1 = from_recurrence;
            }
        }
    }

    #[test]
    fn states_share_a_common_norm() {
        // With the pi^(-1/4) prefactor omitted every state integrates to
        // sqrt(pi). Needs a grid wide enough to contain the n = 7 tails,
        // hence x in [-10, 10] rather than the default window.
        let grid = Grid::new(1200, 60.0).unwrap();
        let basis = Eigenbasis::generate(&grid, 7);
        let expected = std::f64::consts::PI.sqrt();
        for n in 0..=7 {
            let norm = inner(&grid, basis.function(n), basis.function(n));
            assert!(
                (norm - expected).abs() < 1e-9,
                "mode {} norm {} deviates from sqrt(pi)",
                n,
                norm
            );
        }
    }

    #[test]
    fn states_are_orthogonal_on_the_grid() {
        let grid = Grid::new(1200, 60.0).unwrap();
        let basis = Eigenbasis::generate(&grid, 7);
        for n in 0..=7 {
            for m in (n + 1)..=7 {
                let overlap = inner(&grid, basis.function(n), basis.function(m));
                assert!(
                    overlap.abs() < 1e-9,
                    "modes {} and {} overlap: {}",
                    n,
                    m,
                    overlap
                );
            }
        }
    }

    #[test]
    fn higher_modes_extend_past_the_fixed_forms() {
        let grid = Grid::default();
        let basis = Eigenbasis::generate(&grid, 10);
        assert_eq!(basis.modes(), 11);
        // u_8 at x = 0: H_8(0)/sqrt(2^8 8!) = 1680/sqrt(256 * 40320).
        let mid = grid.len() / 2;
        let expected = 1680.0 / (256.0 * 40320.0_f64).sqrt();
        assert!((basis.function(8)[mid] - expected).abs() < 1e-10);
    }

    #[test]
    fn parity_alternates_with_n() {
        let grid = Grid::default();
        let basis = default_basis();
        let len = grid.len();
        for n in 0..=7 {
            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            for i in 0..len {
                let mirrored = basis.function(n)[len - 1 - i];
                assert!((basis.function(n)[i] - sign * mirrored).abs() < 1e-10);
            }
        }
    }
}
