//! The half-twist Möbius parametrization.
//!
//! ```text
//! x = (R + v·cos(u/2))·cos(u)
//! y = (R + v·cos(u/2))·sin(u)
//! z = v·sin(u/2)
//! ```
//!
//! The `u/2` half-angle inside the width-offset rotation is what gives the
//! strip its single boundary edge: the width direction flips sign as `u`
//! advances by `2π`, so the edge curve only closes after a `4π` traversal.
//! The same evaluator, restricted to `v = w/2`, produces the boundary curve.

use crate::math::{Point3, Vector3, DEGENERATE_TOL};

/// The half-twist Möbius surface with a fixed centerline radius.
#[derive(Clone, Copy, Debug)]
pub struct MobiusSurface {
    radius: f64,
}

impl MobiusSurface {
    pub fn new(radius: f64) -> Self {
        MobiusSurface { radius }
    }

    /// Centerline radius `R`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluate the surface at parameters `(u, v)`.
    pub fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let half = u / 2.0;
        let ring = self.radius + v * half.cos();
        Point3::new(ring * u.cos(), ring * u.sin(), v * half.sin())
    }

    /// Analytic partial derivative with respect to `u`.
    ///
    /// Used for mesh-export normals only; the area pipeline estimates its
    /// tangents by finite differences over the sampled fields.
    pub fn derivative_u(&self, u: f64, v: f64) -> Vector3 {
        let half = u / 2.0;
        let ring = self.radius + v * half.cos();
        let d_ring = -0.5 * v * half.sin();
        Vector3::new(
            d_ring * u.cos() - ring * u.sin(),
            d_ring * u.sin() + ring * u.cos(),
            0.5 * v * half.cos(),
        )
    }

    /// Analytic partial derivative with respect to `v`.
    pub fn derivative_v(&self, u: f64, _v: f64) -> Vector3 {
        let half = u / 2.0;
        Vector3::new(half.cos() * u.cos(), half.cos() * u.sin(), half.sin())
    }

    /// Unit surface normal at `(u, v)`.
    pub fn normal(&self, u: f64, v: f64) -> Vector3 {
        let du = self.derivative_u(u, v);
        let dv = self.derivative_v(u, v);
        let n = du.cross(&dv);
        let len = n.norm();
        if len > DEGENERATE_TOL {
            n / len
        } else {
            // Degenerate tangents only occur when the ring radius collapses
            Vector3::new(0.0, 0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn evaluate_matches_closed_form() {
        let s = MobiusSurface::new(1.0);

        // u = 0: point on the outer x axis, no lift
        let p = s.evaluate(0.0, 0.2);
        assert_relative_eq!(p.x, 1.2, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);

        // u = π: half-angle π/2 puts the full offset into z
        let p = s.evaluate(PI, 0.2);
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn analytic_derivatives_match_finite_differences() {
        let s = MobiusSurface::new(1.3);
        let h = 1e-6;
        for &(u, v) in &[(0.4, 0.1), (2.0, -0.15), (5.5, 0.05)] {
            let du = (s.evaluate(u + h, v) - s.evaluate(u - h, v)) / (2.0 * h);
            let dv = (s.evaluate(u, v + h) - s.evaluate(u, v - h)) / (2.0 * h);
            assert_relative_eq!(du, s.derivative_u(u, v), epsilon = 1e-8);
            assert_relative_eq!(dv, s.derivative_v(u, v), epsilon = 1e-8);
        }
    }

    #[test]
    fn normal_is_unit_length() {
        let s = MobiusSurface::new(1.0);
        let n = s.normal(1.7, 0.12);
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
    }
}
