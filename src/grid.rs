//! Parameter axes and dense square grids.
//!
//! The meshgrid convention follows the rest of the pipeline: the row index
//! walks the `v` axis and the column index walks the `u` axis, so
//! `U[i][j] = u[j]` and `V[i][j] = v[i]`.

/// A dense row-major n×n field of `f64` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    n: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Build an n×n grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(n: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Grid { n, data }
    }

    /// Wrap an existing row-major buffer of length n·n.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), n * n, "grid buffer length must be n*n");
        Grid { n, data }
    }

    /// Side length of the grid.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Sample at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// Contiguous row slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// The underlying row-major buffer.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

/// `count` uniform samples of `[start, end]` inclusive.
///
/// Requires `count >= 2`; the first sample is exactly `start` and the last
/// exactly `end`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    assert!(count >= 2, "linspace needs at least two samples");
    let step = (end - start) / (count - 1) as f64;
    let mut out = Vec::with_capacity(count);
    for k in 0..count - 1 {
        out.push(start + step * k as f64);
    }
    out.push(end);
    out
}

/// Outer-product grids of two equal-length axes.
///
/// Returns `(U, V)` with `U[i][j] = u[j]` and `V[i][j] = v[i]`.
pub fn meshgrid(u: &[f64], v: &[f64]) -> (Grid, Grid) {
    assert_eq!(u.len(), v.len(), "meshgrid axes must have equal length");
    let n = u.len();
    let uu = Grid::from_fn(n, |_, j| u[j]);
    let vv = Grid::from_fn(n, |i, _| v[i]);
    (uu, vv)
}
