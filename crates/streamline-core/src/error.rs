// File: crates/streamline-core/src/error.rs
// Summary: Error type shared by validation and buffer construction.

use thiserror::Error;

/// Which grid axis an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisName {
    X,
    Y,
}

impl std::fmt::Display for AxisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisName::X => f.write_str("x"),
            AxisName::Y => f.write_str("y"),
        }
    }
}

/// Coarse classification so callers can tell parameter misuse from bad data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric parameter is out of range (`density`, `arrow_scale`).
    Value,
    /// Axis or field arrays are malformed or disagree in shape.
    DataShape,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum StreamlineError {
    #[error("{name} must be a finite positive number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("density {value} needs more than {max_cells} coarse cells per side")]
    DensityTooLarge { value: f64, max_cells: usize },

    #[error("{axis} must have at least 2 values, got {len}")]
    AxisTooShort { axis: AxisName, len: usize },

    #[error("{axis} must be strictly increasing")]
    NotIncreasing { axis: AxisName },

    #[error("{axis} must be a 1 dimensional, evenly spaced array")]
    UnevenSpacing { axis: AxisName },

    #[error("{field}: row {row} has {found} values, expected {expected}")]
    RaggedRows { field: &'static str, row: usize, expected: usize, found: usize },

    #[error("{field}: buffer holds {found} values, which does not fit shape ({rows}, {cols})")]
    BufferLength { field: &'static str, rows: usize, cols: usize, found: usize },

    #[error("{field} has shape {found:?}, expected {expected:?} (len(y), len(x))")]
    ShapeMismatch { field: &'static str, expected: (usize, usize), found: (usize, usize) },
}

impl StreamlineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StreamlineError::NonPositive { .. } | StreamlineError::DensityTooLarge { .. } => ErrorKind::Value,
            _ => ErrorKind::DataShape,
        }
    }

    pub fn is_value_error(&self) -> bool { self.kind() == ErrorKind::Value }

    pub fn is_shape_error(&self) -> bool { self.kind() == ErrorKind::DataShape }
}

pub type Result<T> = std::result::Result<T, StreamlineError>;
