//! Numerical geometry of the half-twist Möbius strip.
//!
//! The crate discretizes the strip over its `(u, v)` parameter rectangle,
//! estimates tangent vectors by finite differences, and integrates the
//! resulting area element with composite Simpson quadrature. The boundary
//! edge length is accumulated along the sampled `v = w/2` curve.
//!
//! Pipeline, leaves first:
//! - [`grid`] — parameter axes and the dense `U`/`V` meshgrid
//! - [`surface`] — the Möbius parametric equations
//! - [`gradient`] — finite-difference partial derivatives
//! - [`quadrature`] — composite Simpson integration
//! - [`strip`] — the immutable [`MobiusStrip`] value and its scalar queries
//! - [`export`] — OBJ hand-off for 3D viewers
//!
//! # Example
//!
//! ```rust
//! use moebius::{MobiusStrip, StripParams};
//!
//! let strip = MobiusStrip::new(StripParams::default()).unwrap();
//! let area = strip.surface_area();
//! let edge = strip.edge_length();
//! assert!(area > 0.0 && edge > 0.0);
//! ```

pub mod export;
pub mod gradient;
pub mod grid;
pub mod math;
pub mod quadrature;
pub mod strip;
pub mod surface;

pub use strip::{MobiusStrip, ParameterError, StripParams};
