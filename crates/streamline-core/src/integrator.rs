// File: crates/streamline-core/src/integrator.rs
// Summary: Traces one streamline through the field from a seed, forward and backward, with fixed-step RK4.

use log::trace;

use crate::density::DensityGrid;
use crate::sampler::{Direction, VectorFieldSampler};

/// Arc-length step in index units.
pub const STEP: f64 = 0.01;
/// Each direction stops once its length exceeds this.
pub const MAX_HALF_LENGTH: f64 = 2.0;
/// Traces whose two halves sum to this or less are dropped.
pub const MIN_LENGTH: f64 = 0.2;

/// One accepted streamline in world coordinates, ordered from the end of
/// the backward half to the end of the forward half.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamlinePath {
    pub points: Vec<(f64, f64)>,
    /// Seed the path was traced from (world coordinates).
    pub seed: (f64, f64),
    /// Combined arc length of both halves, in index units.
    pub length: f64,
}

impl StreamlinePath {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

struct HalfTrace {
    length: f64,
    points: Vec<(f64, f64)>,
}

pub struct StreamlineIntegrator<'a> {
    sampler: &'a VectorFieldSampler,
}

impl<'a> StreamlineIntegrator<'a> {
    pub fn new(sampler: &'a VectorFieldSampler) -> Self {
        Self { sampler }
    }

    /// Trace from an index-space seed. Claims coarse cells in `cells` as it
    /// goes; they are committed if the path is kept and released otherwise.
    pub fn trace(&self, seed: (f64, f64), cells: &mut DensityGrid) -> Option<StreamlinePath> {
        let forward = self.integrate(seed, Direction::Forward, cells);
        let backward = self.integrate(seed, Direction::Backward, cells);
        let length = forward.length + backward.length;

        let mut points = backward.points;
        points.reverse();
        // The seed opens both halves; keep it once.
        points.extend(forward.points.into_iter().skip(1));

        if points.len() < 2 || length <= MIN_LENGTH {
            trace!("seed ({:.4}, {:.4}) dropped: {} points, length {:.2}", seed.0, seed.1, points.len(), length);
            cells.release();
            return None;
        }
        cells.commit(cells.cell_of(seed.0, seed.1));

        let grid = self.sampler.grid();
        Some(StreamlinePath {
            points: points.into_iter().map(|(xi, yi)| grid.to_world(xi, yi)).collect(),
            seed: grid.to_world(seed.0, seed.1),
            length,
        })
    }

    fn integrate(&self, start: (f64, f64), dir: Direction, cells: &mut DensityGrid) -> HalfTrace {
        let (mut xi, mut yi) = start;
        let mut cell = cells.cell_of(xi, yi);
        let mut length = 0.0;
        let mut points = Vec::new();

        while self.sampler.contains_index(xi, yi) {
            points.push((xi, yi));
            let Some((dx, dy)) = self.rk4_step(xi, yi, dir) else { break };
            xi += dx;
            yi += dy;
            if !self.sampler.contains_index(xi, yi) {
                break;
            }
            length += STEP;

            let next = cells.cell_of(xi, yi);
            if next != cell {
                if !cells.claim(next.0, next.1) {
                    break;
                }
                cell = next;
            }
            if length > MAX_HALF_LENGTH {
                break;
            }
        }
        HalfTrace { length, points }
    }

    /// Classical RK4 increment from `(xi, yi)`; `None` if any stage hits a
    /// stagnation point or leaves the sampled cells.
    fn rk4_step(&self, xi: f64, yi: f64, dir: Direction) -> Option<(f64, f64)> {
        let f = |x: f64, y: f64| self.sampler.direction(x, y, dir);
        let ds = STEP;
        let (k1x, k1y) = f(xi, yi)?;
        let (k2x, k2y) = f(xi + 0.5 * ds * k1x, yi + 0.5 * ds * k1y)?;
        let (k3x, k3y) = f(xi + 0.5 * ds * k2x, yi + 0.5 * ds * k2y)?;
        let (k4x, k4y) = f(xi + ds * k3x, yi + ds * k3y)?;
        Some((
            ds * (k1x + 2.0 * k2x + 2.0 * k3x + k4x) / 6.0,
            ds * (k1y + 2.0 * k2y + 2.0 * k3y + k4y) / 6.0,
        ))
    }
}
