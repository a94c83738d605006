//! Composite quadrature over uniformly spaced samples.

use crate::grid::Grid;

/// Composite Simpson's rule over uniformly spaced samples.
///
/// Simpson pairs cover the intervals two at a time; when the interval count
/// is odd the final interval is closed with a trapezoid term. Fewer than two
/// samples integrate to zero.
pub fn simpson(samples: &[f64], step: f64) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let pairs = (n - 1) / 2;
    for k in 0..pairs {
        let i = 2 * k;
        total += step / 3.0 * (samples[i] + 4.0 * samples[i + 1] + samples[i + 2]);
    }
    if (n - 1) % 2 == 1 {
        total += step / 2.0 * (samples[n - 2] + samples[n - 1]);
    }
    total
}

/// Integrate an n×n field over its parameter rectangle.
///
/// Simpson along the rows (the `v` axis, spacing `row_step`) first, one
/// profile value per `u` column, then Simpson along that profile (spacing
/// `col_step`). The axis/spacing pairing must match the derivative
/// convention of the caller; swapping one without the other silently scales
/// the result.
pub fn integrate_grid(field: &Grid, row_step: f64, col_step: f64) -> f64 {
    let n = field.n();
    let mut column = vec![0.0; n];
    let mut profile = Vec::with_capacity(n);
    for j in 0..n {
        for (i, slot) in column.iter_mut().enumerate() {
            *slot = field.at(i, j);
        }
        profile.push(simpson(&column, row_step));
    }
    simpson(&profile, col_step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{linspace, Grid};
    use approx::assert_relative_eq;

    #[test]
    fn simpson_is_exact_on_cubics() {
        // ∫₀² t³ dt = 4, with an even interval count (pure Simpson pairs)
        let axis = linspace(0.0, 2.0, 9);
        let samples: Vec<f64> = axis.iter().map(|&t| t * t * t).collect();
        let step = axis[1] - axis[0];
        assert_relative_eq!(simpson(&samples, step), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn odd_interval_count_uses_trapezoid_tail() {
        // ∫₀¹ t dt = 0.5 is exact for the trapezoid too, so the tail
        // handling introduces no error on linear integrands
        let axis = linspace(0.0, 1.0, 4);
        let samples: Vec<f64> = axis.clone();
        let step = axis[1] - axis[0];
        assert_relative_eq!(simpson(&samples, step), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_sample_counts_integrate_to_zero() {
        assert_eq!(simpson(&[], 1.0), 0.0);
        assert_eq!(simpson(&[7.0], 1.0), 0.0);
    }

    #[test]
    fn grid_integration_recovers_rectangle_area() {
        // Constant 1 over a (0.4 × 2.0) rectangle
        let n = 9;
        let field = Grid::from_fn(n, |_, _| 1.0);
        let row_step = 0.4 / (n - 1) as f64;
        let col_step = 2.0 / (n - 1) as f64;
        assert_relative_eq!(
            integrate_grid(&field, row_step, col_step),
            0.8,
            epsilon = 1e-12
        );
    }

    #[test]
    fn grid_integration_of_separable_product() {
        // ∫₀¹∫₀¹ u·v dv du = 1/4
        let n = 11;
        let axis = linspace(0.0, 1.0, n);
        let field = Grid::from_fn(n, |i, j| axis[j] * axis[i]);
        let step = axis[1] - axis[0];
        assert_relative_eq!(integrate_grid(&field, step, step), 0.25, epsilon = 1e-12);
    }
}
