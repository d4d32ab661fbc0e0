// File: crates/streamline-core/src/validate.rs
// Summary: Fail-fast input checks run before any tracing (parameters, axis spacing, field shapes).

use crate::density;
use crate::error::{AxisName, Result, StreamlineError};
use crate::field::{Array2, Grid, IntoArray2, UniformAxis};

/// Allowed deviation between consecutive axis steps, relative to the first step.
pub const SPACING_TOLERANCE: f64 = 1e-4;

/// Reject zero, negative, infinite and NaN parameters.
pub fn validate_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StreamlineError::NonPositive { name, value })
    }
}

/// Check that `values` is an evenly spaced, strictly increasing axis.
pub fn validate_axis(name: AxisName, values: &[f64]) -> Result<UniformAxis> {
    if values.len() < 2 {
        return Err(StreamlineError::AxisTooShort { axis: name, len: values.len() });
    }
    let step = values[1] - values[0];
    let tol = SPACING_TOLERANCE * step.abs();
    for w in values.windows(2) {
        // Negated so that NaN steps fail too.
        if !(((w[1] - w[0]) - step).abs() <= tol) {
            return Err(StreamlineError::UnevenSpacing { axis: name });
        }
    }
    if step <= 0.0 {
        return Err(StreamlineError::NotIncreasing { axis: name });
    }
    Ok(UniformAxis {
        name,
        start: values[0],
        end: values[values.len() - 1],
        step,
        len: values.len(),
    })
}

/// `u` and `v` must agree with each other and with `(len(y), len(x))`.
pub fn validate_field_shapes(u: &Array2, v: &Array2, grid: &Grid) -> Result<()> {
    if u.shape() != v.shape() {
        return Err(StreamlineError::ShapeMismatch { field: "v", expected: u.shape(), found: v.shape() });
    }
    let expected = grid.shape();
    for (field, arr) in [("u", u), ("v", v)] {
        if arr.shape() != expected {
            return Err(StreamlineError::ShapeMismatch { field, expected, found: arr.shape() });
        }
    }
    Ok(())
}

/// Validated inputs: the grid and the field buffers, shape-checked against it.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedInput {
    pub grid: Grid,
    pub u: Array2,
    pub v: Array2,
}

/// Full input check in a fixed order: `arrow_scale`, `density` (including
/// whether its coarse grid fits under [`density::MAX_CELLS`]), conversion
/// of `u`/`v` to buffers, x axis, y axis, then field shapes.
pub fn validate_inputs(
    x: &[f64],
    y: &[f64],
    u: impl IntoArray2,
    v: impl IntoArray2,
    density: f64,
    arrow_scale: f64,
) -> Result<ValidatedInput> {
    validate_positive("arrow_scale", arrow_scale)?;
    validate_positive("density", density)?;
    density::resolution_for(density)?;
    let u = u.into_array2("u")?;
    let v = v.into_array2("v")?;
    let grid = Grid {
        x: validate_axis(AxisName::X, x)?,
        y: validate_axis(AxisName::Y, y)?,
    };
    validate_field_shapes(&u, &v, &grid)?;
    Ok(ValidatedInput { grid, u, v })
}
