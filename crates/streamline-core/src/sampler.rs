// File: crates/streamline-core/src/sampler.rs
// Summary: Bilinear sampling of the (u, v) field, in world coordinates and in normalised grid-index space.
// Notes:
// - Tracing happens in index space: node (i, j) sits at (i, j), and the field
//   is rescaled so each axis spans its node count. The integrator steps along
//   the unit direction, so step length is measured in those units.

use crate::field::{Array2, Grid};

/// Points may sit this far outside the grid (in index units) and still be sampled.
pub const DOMAIN_EPSILON: f64 = 1e-9;

/// Integration direction along the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

pub struct VectorFieldSampler {
    grid: Grid,
    u: Array2,
    v: Array2,
    // Index-space copies used by the integrator.
    u_idx: Array2,
    v_idx: Array2,
    speed: Array2,
}

impl VectorFieldSampler {
    /// Build a sampler over a validated grid. `u` and `v` must already have
    /// shape `(len(y), len(x))`.
    pub fn new(grid: Grid, u: Array2, v: Array2) -> Self {
        let un = u.map(|c| c / grid.x.span());
        let vn = v.map(|c| c / grid.y.span());
        let speed = un.zip_map(&vn, |a, b| (a * a + b * b).sqrt());
        let nx = grid.x.len as f64;
        let ny = grid.y.len as f64;
        let u_idx = un.map(|c| c * nx);
        let v_idx = vn.map(|c| c * ny);
        Self { grid, u, v, u_idx, v_idx, speed }
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Interpolated `(u, v)` at a world coordinate, or `None` outside the grid.
    pub fn sample(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let xi = self.grid.x.to_index(x);
        let yi = self.grid.y.to_index(y);
        let max_x = (self.grid.x.len - 1) as f64;
        let max_y = (self.grid.y.len - 1) as f64;
        if !(xi >= -DOMAIN_EPSILON && xi <= max_x + DOMAIN_EPSILON) { return None; }
        if !(yi >= -DOMAIN_EPSILON && yi <= max_y + DOMAIN_EPSILON) { return None; }

        let xi = xi.clamp(0.0, max_x);
        let yi = yi.clamp(0.0, max_y);
        let col = (xi.floor() as usize).min(self.grid.x.len - 2);
        let row = (yi.floor() as usize).min(self.grid.y.len - 2);
        let xt = xi - col as f64;
        let yt = yi - row as f64;
        Some((bilinear(&self.u, row, col, xt, yt), bilinear(&self.v, row, col, xt, yt)))
    }

    /// Whether an index-space point lies in the traceable domain
    /// `[0, len-1)` on both axes.
    #[inline]
    pub fn contains_index(&self, xi: f64, yi: f64) -> bool {
        0.0 <= xi
            && xi < (self.grid.x.len - 1) as f64
            && 0.0 <= yi
            && yi < (self.grid.y.len - 1) as f64
    }

    /// Unit-speed direction at an index-space point, scaled per axis by the
    /// node count. `None` at stagnation points or when the enclosing cell
    /// would need nodes beyond the grid.
    pub fn direction(&self, xi: f64, yi: f64, dir: Direction) -> Option<(f64, f64)> {
        let dt_ds = 1.0 / index_value(&self.speed, xi, yi)?;
        if !dt_ds.is_finite() {
            return None;
        }
        let ui = index_value(&self.u_idx, xi, yi)?;
        let vi = index_value(&self.v_idx, xi, yi)?;
        let s = dir.sign();
        let step = (s * ui * dt_ds, s * vi * dt_ds);
        if step.0.is_finite() && step.1.is_finite() { Some(step) } else { None }
    }
}

/// Interpolate `a` at an index-space point. The cell is found by truncation,
/// so a point slightly below zero extrapolates from the first cell.
fn index_value(a: &Array2, xi: f64, yi: f64) -> Option<f64> {
    if !xi.is_finite() || !yi.is_finite() {
        return None;
    }
    let cx = xi.trunc();
    let cy = yi.trunc();
    if cx < 0.0 || cy < 0.0 {
        return None;
    }
    let (col, row) = (cx as usize, cy as usize);
    if col + 1 >= a.cols() || row + 1 >= a.rows() {
        return None;
    }
    Some(bilinear(a, row, col, xi - cx, yi - cy))
}

#[inline]
fn bilinear(a: &Array2, row: usize, col: usize, xt: f64, yt: f64) -> f64 {
    let a0 = a.get(row, col) * (1.0 - xt) + a.get(row, col + 1) * xt;
    let a1 = a.get(row + 1, col) * (1.0 - xt) + a.get(row + 1, col + 1) * xt;
    a0 * (1.0 - yt) + a1 * yt
}
