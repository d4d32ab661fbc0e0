// File: crates/streamline-core/src/field.rs
// Summary: Fixed-shape 2-D buffers, uniform grid axes, and the conversions used at the API boundary.

use crate::error::{AxisName, Result, StreamlineError};

/// Row-major 2-D buffer of `f64`, indexed `[row][col]` = `[y][x]`.
/// Contract: `data.len() == rows * cols`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Array2 {
    /// Wrap a flat row-major buffer, checking it fits `(rows, cols)`.
    pub fn from_shape_vec(field: &'static str, rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(StreamlineError::BufferLength { field, rows, cols, found: data.len() });
        }
        Ok(Self { rows, cols, data })
    }

    /// Copy nested rows into a contiguous buffer. Every row must have the
    /// length of the first one.
    pub fn from_rows<R: AsRef<[f64]>>(field: &'static str, rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(StreamlineError::RaggedRows { field, row: i, expected: cols, found: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    /// Build a buffer by evaluating `f(row, col)` at every node.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub const fn rows(&self) -> usize { self.rows }
    pub const fn cols(&self) -> usize { self.cols }
    /// `(rows, cols)`, i.e. `(len(y), len(x))` for a field buffer.
    pub const fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Apply `f` elementwise, keeping the shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { rows: self.rows, cols: self.cols, data: self.data.iter().map(|&v| f(v)).collect() }
    }

    /// Combine two buffers of the same shape elementwise.
    pub(crate) fn zip_map(&self, other: &Array2, f: impl Fn(f64, f64) -> f64) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Self { rows: self.rows, cols: self.cols, data }
    }
}

/// Anything that can be turned into a shape-checked [`Array2`] at the API
/// boundary. `field` names the argument in error messages.
pub trait IntoArray2 {
    fn into_array2(self, field: &'static str) -> Result<Array2>;
}

impl IntoArray2 for Array2 {
    fn into_array2(self, _field: &'static str) -> Result<Array2> { Ok(self) }
}

impl IntoArray2 for &Array2 {
    fn into_array2(self, _field: &'static str) -> Result<Array2> { Ok(self.clone()) }
}

impl IntoArray2 for Vec<Vec<f64>> {
    fn into_array2(self, field: &'static str) -> Result<Array2> { Array2::from_rows(field, &self) }
}

impl IntoArray2 for &Vec<Vec<f64>> {
    fn into_array2(self, field: &'static str) -> Result<Array2> { Array2::from_rows(field, self) }
}

impl IntoArray2 for &[Vec<f64>] {
    fn into_array2(self, field: &'static str) -> Result<Array2> { Array2::from_rows(field, self) }
}

impl<const C: usize> IntoArray2 for &[[f64; C]] {
    fn into_array2(self, field: &'static str) -> Result<Array2> { Array2::from_rows(field, self) }
}

impl<const R: usize, const C: usize> IntoArray2 for [[f64; C]; R] {
    fn into_array2(self, field: &'static str) -> Result<Array2> { Array2::from_rows(field, &self) }
}

/// A validated, evenly spaced axis.
/// Contract: `len >= 2`, `step > 0`, `end > start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformAxis {
    pub name: AxisName,
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub len: usize,
}

impl UniformAxis {
    /// Distance between the first and last sample.
    pub fn span(&self) -> f64 { self.end - self.start }

    /// Fractional node index of a world coordinate.
    #[inline]
    pub fn to_index(&self, v: f64) -> f64 { (v - self.start) / self.step }

    /// World coordinate of a fractional node index.
    #[inline]
    pub fn to_world(&self, i: f64) -> f64 { i * self.step + self.start }
}

/// Rectangular grid made of two uniform axes. Immutable once validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub x: UniformAxis,
    pub y: UniformAxis,
}

impl Grid {
    /// Expected field shape `(len(y), len(x))`.
    pub const fn shape(&self) -> (usize, usize) { (self.y.len, self.x.len) }

    /// Map a point in index space back to world coordinates.
    #[inline]
    pub fn to_world(&self, xi: f64, yi: f64) -> (f64, f64) {
        (self.x.to_world(xi), self.y.to_world(yi))
    }
}

/// Evenly spaced values from `start` to `end` inclusive; the last value is exactly `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    out[steps - 1] = end;
    out
}
