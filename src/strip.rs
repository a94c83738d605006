//! The discretized Möbius strip and its scalar queries.
//!
//! `MobiusStrip` is an immutable value: the parameter axes, the meshgrid
//! and the three coordinate fields are built once at construction and only
//! read afterwards. Changing shape parameters means building a fresh
//! instance. Both queries are pure and return identical values on every
//! call.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::gradient::{gradient_1d, gradient_cols, gradient_rows};
use crate::grid::{linspace, meshgrid, Grid};
use crate::math::Point3;
use crate::quadrature::integrate_grid;
use crate::surface::MobiusSurface;

/// Shape parameters of the strip.
///
/// `width < 2·radius` avoids self-intersection but is not enforced;
/// `resolution >= 2` is required for the finite differences to be defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripParams {
    /// Centerline radius `R`.
    pub radius: f64,
    /// Strip width `w`; the `v` axis spans `[-w/2, w/2]`.
    pub width: f64,
    /// Grid resolution `n` per parameter axis.
    pub resolution: usize,
}

impl Default for StripParams {
    fn default() -> Self {
        StripParams {
            radius: 1.0,
            width: 0.3,
            resolution: 200,
        }
    }
}

/// Errors raised by parameter validation at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    NonPositiveRadius,
    NonPositiveWidth,
    ResolutionTooSmall,
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterError::NonPositiveRadius => {
                write!(f, "centerline radius must be positive")
            }
            ParameterError::NonPositiveWidth => write!(f, "strip width must be positive"),
            ParameterError::ResolutionTooSmall => {
                write!(f, "grid resolution must be at least 2")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// A Möbius strip sampled on an n×n parameter grid.
pub struct MobiusStrip {
    params: StripParams,
    surface: MobiusSurface,
    u: Vec<f64>,
    v: Vec<f64>,
    uu: Grid,
    vv: Grid,
    x: Grid,
    y: Grid,
    z: Grid,
}

impl MobiusStrip {
    /// Validate the parameters and build the sampled strip.
    ///
    /// The `u` axis spans `[0, 2π]` and the `v` axis `[-w/2, w/2]`, both
    /// inclusive with uniform steps. Coordinate-field evaluation is
    /// parallelized across grid cells with rayon.
    pub fn new(params: StripParams) -> Result<Self, ParameterError> {
        if params.radius <= 0.0 {
            return Err(ParameterError::NonPositiveRadius);
        }
        if params.width <= 0.0 {
            return Err(ParameterError::NonPositiveWidth);
        }
        if params.resolution < 2 {
            return Err(ParameterError::ResolutionTooSmall);
        }

        let n = params.resolution;
        let u = linspace(0.0, TAU, n);
        let v = linspace(-params.width / 2.0, params.width / 2.0, n);
        let (uu, vv) = meshgrid(&u, &v);

        let surface = MobiusSurface::new(params.radius);
        let points: Vec<Point3> = (0..n * n)
            .into_par_iter()
            .map(|idx| surface.evaluate(uu.at(idx / n, idx % n), vv.at(idx / n, idx % n)))
            .collect();

        let x = Grid::from_vec(n, points.iter().map(|p| p.x).collect());
        let y = Grid::from_vec(n, points.iter().map(|p| p.y).collect());
        let z = Grid::from_vec(n, points.iter().map(|p| p.z).collect());

        Ok(MobiusStrip {
            params,
            surface,
            u,
            v,
            uu,
            vv,
            x,
            y,
            z,
        })
    }

    /// Total surface area by finite-difference tangents and composite
    /// Simpson quadrature over the `(u, v)` rectangle.
    ///
    /// The six derivative fields are recomputed on each call; the strip
    /// itself stays immutable.
    pub fn surface_area(&self) -> f64 {
        let du = self.u_step();
        let dv = self.v_step();

        let dxdu = gradient_cols(&self.x, du);
        let dydu = gradient_cols(&self.y, du);
        let dzdu = gradient_cols(&self.z, du);
        let dxdv = gradient_rows(&self.x, dv);
        let dydv = gradient_rows(&self.y, dv);
        let dzdv = gradient_rows(&self.z, dv);

        // |∂r/∂u × ∂r/∂v| at every grid point
        let area_element = Grid::from_fn(self.params.resolution, |i, j| {
            let n1 = dydu.at(i, j) * dzdv.at(i, j) - dzdu.at(i, j) * dydv.at(i, j);
            let n2 = dzdu.at(i, j) * dxdv.at(i, j) - dxdu.at(i, j) * dzdv.at(i, j);
            let n3 = dxdu.at(i, j) * dydv.at(i, j) - dydu.at(i, j) * dxdv.at(i, j);
            (n1 * n1 + n2 * n2 + n3 * n3).sqrt()
        });

        integrate_grid(&area_element, dv, du)
    }

    /// Arc length of the sampled boundary curve at `v = w/2`.
    ///
    /// Only `u ∈ [0, 2π]` is sampled, which traces half of the strip's
    /// single true boundary loop (the full edge closes after `4π`). The
    /// half-loop value is kept deliberately as the reference behavior.
    /// Accumulation is a left-Riemann sum of the local speed, not a
    /// trapezoid rule.
    pub fn edge_length(&self) -> f64 {
        let curve = self.boundary_curve();
        let xs: Vec<f64> = curve.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = curve.iter().map(|p| p.y).collect();
        let zs: Vec<f64> = curve.iter().map(|p| p.z).collect();

        let du = self.u_step();
        let dx = gradient_1d(&xs, du);
        let dy = gradient_1d(&ys, du);
        let dz = gradient_1d(&zs, du);

        (0..curve.len())
            .map(|i| du * (dx[i] * dx[i] + dy[i] * dy[i] + dz[i] * dz[i]).sqrt())
            .sum()
    }

    /// Boundary curve samples: the surface evaluated at `v = w/2` for every
    /// `u` sample. The first and last points differ (the half-loop is open).
    pub fn boundary_curve(&self) -> Vec<Point3> {
        let half_width = self.params.width / 2.0;
        self.u
            .iter()
            .map(|&u| self.surface.evaluate(u, half_width))
            .collect()
    }

    /// The parameters this strip was built from.
    pub fn params(&self) -> StripParams {
        self.params
    }

    /// The underlying parametric surface (used for export normals).
    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    /// The `u` axis samples.
    pub fn u_axis(&self) -> &[f64] {
        &self.u
    }

    /// The `v` axis samples.
    pub fn v_axis(&self) -> &[f64] {
        &self.v
    }

    /// Meshgrid of `u` values (`U[i][j] = u[j]`).
    pub fn u_grid(&self) -> &Grid {
        &self.uu
    }

    /// Meshgrid of `v` values (`V[i][j] = v[i]`).
    pub fn v_grid(&self) -> &Grid {
        &self.vv
    }

    /// The x coordinate field.
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// The y coordinate field.
    pub fn y(&self) -> &Grid {
        &self.y
    }

    /// The z coordinate field.
    pub fn z(&self) -> &Grid {
        &self.z
    }

    fn u_step(&self) -> f64 {
        self.u[1] - self.u[0]
    }

    fn v_step(&self) -> f64 {
        self.v[1] - self.v[0]
    }
}
