// File: crates/streamline-core/src/streamline.rs
// Summary: Public entry points: options, the seed loop, and assembly into a chart-ready line trace.

use log::debug;

use crate::assemble::{PathAssembler, DEFAULT_ARROW_ANGLE};
use crate::density::{DensityGrid, SeedOrder};
use crate::error::Result;
use crate::field::IntoArray2;
use crate::integrator::{StreamlineIntegrator, StreamlinePath};
use crate::sampler::VectorFieldSampler;
use crate::trace::{LineStyle, LineTrace};
use crate::validate::{validate_inputs, ValidatedInput};

/// Tuning knobs for one streamline computation.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamlineOptions {
    /// Spacing control; higher packs streamlines closer. Must be > 0.
    pub density: f64,
    /// Arrowhead wing length in data units. Must be > 0.
    pub arrow_scale: f64,
    /// Half-opening of the arrowhead chevron, radians.
    pub angle: f64,
    pub seed_order: SeedOrder,
    /// Passed through to the resulting trace untouched.
    pub style: LineStyle,
}

impl Default for StreamlineOptions {
    fn default() -> Self {
        Self {
            density: 1.0,
            arrow_scale: 0.09,
            angle: DEFAULT_ARROW_ANGLE,
            seed_order: SeedOrder::EdgeInward,
            style: LineStyle::default(),
        }
    }
}

impl StreamlineOptions {
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_arrow_scale(mut self, arrow_scale: f64) -> Self {
        self.arrow_scale = arrow_scale;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_seed_order(mut self, seed_order: SeedOrder) -> Self {
        self.seed_order = seed_order;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

/// Trace streamlines over the field `(u, v)` sampled on axes `x`, `y` and
/// return them flattened into a single scatter/lines trace.
///
/// `u` and `v` are indexed `[y][x]`. Fails before any tracing if a
/// parameter is non-positive or the data is malformed; see
/// [`crate::validate::validate_inputs`].
pub fn create_streamline(
    x: &[f64],
    y: &[f64],
    u: impl IntoArray2,
    v: impl IntoArray2,
    opts: &StreamlineOptions,
) -> Result<LineTrace> {
    let paths = compute_streamlines(x, y, u, v, opts)?;
    let mut assembler = PathAssembler::new(opts.arrow_scale, opts.angle);
    for path in &paths {
        assembler.push_path(path);
    }
    let trace = assembler.finish(opts.style.clone());
    debug!("assembled {} paths into {} trace entries", paths.len(), trace.len());
    Ok(trace)
}

/// Same validation and tracing as [`create_streamline`], without flattening.
/// Paths come back in seed-scan order.
pub fn compute_streamlines(
    x: &[f64],
    y: &[f64],
    u: impl IntoArray2,
    v: impl IntoArray2,
    opts: &StreamlineOptions,
) -> Result<Vec<StreamlinePath>> {
    let input = validate_inputs(x, y, u, v, opts.density, opts.arrow_scale)?;
    trace_field(input, opts.density, opts.seed_order)
}

fn trace_field(input: ValidatedInput, density: f64, order: SeedOrder) -> Result<Vec<StreamlinePath>> {
    let ValidatedInput { grid, u, v } = input;
    let mut cells = DensityGrid::new(&grid, density)?;
    let sampler = VectorFieldSampler::new(grid, u, v);
    let integrator = StreamlineIntegrator::new(&sampler);

    let seeds = cells.seed_cells(order);
    let mut paths = Vec::new();
    for &(cx, cy) in &seeds {
        if !cells.is_free(cx, cy) {
            continue;
        }
        if let Some(path) = integrator.trace(cells.seed_point(cx, cy), &mut cells) {
            paths.push(path);
        }
    }
    debug!(
        "{}x{} grid, {} cells per side: {} paths from {} seed visits, {} cells occupied",
        grid.x.len,
        grid.y.len,
        cells.resolution(),
        paths.len(),
        seeds.len(),
        cells.occupied_count()
    );
    Ok(paths)
}
