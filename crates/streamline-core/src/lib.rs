// File: crates/streamline-core/src/lib.rs
// Summary: Core library entry point; exports the streamline API (validation, sampling, tracing, assembly).

pub mod error;
pub mod field;
pub mod validate;
pub mod sampler;
pub mod density;
pub mod integrator;
pub mod assemble;
pub mod trace;
pub mod streamline;

pub use error::{ErrorKind, StreamlineError};
pub use field::{linspace, Array2, Grid, IntoArray2, UniformAxis};
pub use sampler::{Direction, VectorFieldSampler};
pub use density::{DensityGrid, SeedOrder};
pub use integrator::{StreamlineIntegrator, StreamlinePath};
pub use assemble::{arrowhead, Arrowhead, PathAssembler};
pub use trace::{LineStyle, LineTrace, TraceMode, TraceType};
pub use streamline::{compute_streamlines, create_streamline, StreamlineOptions};
