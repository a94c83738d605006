//! Finite-difference derivative estimation.
//!
//! Standard gradient convention: central differences in the interior,
//! one-sided (forward/backward) differences at the first and last sample.
//! Spacing is the uniform axis step; the grids built by this crate are
//! always uniform, so a single scalar step suffices.

use crate::grid::Grid;

/// Discrete derivative of a 1-D sample array with uniform spacing `step`.
///
/// Requires at least two samples.
pub fn gradient_1d(samples: &[f64], step: f64) -> Vec<f64> {
    let n = samples.len();
    assert!(n >= 2, "gradient needs at least two samples");

    let mut out = Vec::with_capacity(n);
    out.push((samples[1] - samples[0]) / step);
    for i in 1..n - 1 {
        out.push((samples[i + 1] - samples[i - 1]) / (2.0 * step));
    }
    out.push((samples[n - 1] - samples[n - 2]) / step);
    out
}

/// Partial derivative of a field along the column axis (`u` direction).
pub fn gradient_cols(field: &Grid, step: f64) -> Grid {
    let n = field.n();
    Grid::from_fn(n, |i, j| {
        if j == 0 {
            (field.at(i, 1) - field.at(i, 0)) / step
        } else if j == n - 1 {
            (field.at(i, n - 1) - field.at(i, n - 2)) / step
        } else {
            (field.at(i, j + 1) - field.at(i, j - 1)) / (2.0 * step)
        }
    })
}

/// Partial derivative of a field along the row axis (`v` direction).
pub fn gradient_rows(field: &Grid, step: f64) -> Grid {
    let n = field.n();
    Grid::from_fn(n, |i, j| {
        if i == 0 {
            (field.at(1, j) - field.at(0, j)) / step
        } else if i == n - 1 {
            (field.at(n - 1, j) - field.at(n - 2, j)) / step
        } else {
            (field.at(i + 1, j) - field.at(i - 1, j)) / (2.0 * step)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gradient_of_linear_samples_is_exact() {
        // f(t) = 3t over t = 0, 0.5, 1.0, 1.5
        let samples = [0.0, 1.5, 3.0, 4.5];
        let d = gradient_1d(&samples, 0.5);
        for &g in &d {
            assert_relative_eq!(g, 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn central_difference_is_exact_on_quadratics() {
        // f(t) = t² sampled with step 1; central differences recover f' = 2t
        let samples: Vec<f64> = (0..6).map(|k| (k as f64) * (k as f64)).collect();
        let d = gradient_1d(&samples, 1.0);
        for i in 1..5 {
            assert_relative_eq!(d[i], 2.0 * i as f64, epsilon = 1e-12);
        }
        // One-sided ends are first-order: f'(0) = 0 estimated as 1
        assert_relative_eq!(d[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(d[5], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn grid_gradients_follow_their_axes() {
        // f(u, v) = 2u + 5v on a 4×4 meshgrid with steps du = 1, dv = 0.5
        let field = Grid::from_fn(4, |i, j| 2.0 * j as f64 + 5.0 * (0.5 * i as f64));
        let d_du = gradient_cols(&field, 1.0);
        let d_dv = gradient_rows(&field, 0.5);
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(d_du.at(i, j), 2.0, epsilon = 1e-12);
                assert_relative_eq!(d_dv.at(i, j), 5.0, epsilon = 1e-12);
            }
        }
    }
}
