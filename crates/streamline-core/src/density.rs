// File: crates/streamline-core/src/density.rs
// Summary: Coarse occupancy grid controlling streamline spacing, and the deterministic seed scan.
// Notes:
// - Cells claimed while a trace is in flight are tentative. Accepting the
//   trace commits them; rejecting it releases them. Committed cells never
//   become free again within one run.

use crate::error::{Result, StreamlineError};
use crate::field::Grid;

/// Coarse cells per side for `density = 1`.
pub const CELLS_PER_DENSITY: f64 = 30.0;
/// Smallest usable resolution; cell spacing divides by `cells - 1`.
pub const MIN_CELLS: usize = 2;
/// Largest resolution accepted, about `density = 68`.
pub const MAX_CELLS: usize = 2048;

/// Cells per side for `density`: `int(30 * density)`, at least [`MIN_CELLS`].
/// Fails when the grid would exceed [`MAX_CELLS`] per side or is not a
/// finite positive density.
pub fn resolution_for(density: f64) -> Result<usize> {
    if !(density.is_finite() && density > 0.0) {
        return Err(StreamlineError::NonPositive { name: "density", value: density });
    }
    let raw = CELLS_PER_DENSITY * density;
    if raw >= (MAX_CELLS + 1) as f64 {
        return Err(StreamlineError::DensityTooLarge { value: density, max_cells: MAX_CELLS });
    }
    Ok((raw as usize).max(MIN_CELLS))
}

/// Order in which coarse cells are offered as seeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedOrder {
    /// Ring by ring from the border towards the centre: bottom, top, left
    /// and right edges of each ring interleaved cell by cell.
    #[default]
    EdgeInward,
    /// Row by row from the bottom-left cell.
    RowMajor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellState {
    Free,
    Claimed,
    Occupied,
}

pub struct DensityGrid {
    cells: usize,
    spacing_x: f64,
    spacing_y: f64,
    state: Vec<CellState>,
    // Cells claimed by the trace in flight, in claim order.
    journal: Vec<usize>,
}

impl DensityGrid {
    /// Overlay a `cells x cells` occupancy grid on `grid`, with
    /// `cells` from [`resolution_for`].
    pub fn new(grid: &Grid, density: f64) -> Result<Self> {
        let cells = resolution_for(density)?;
        let total = cells
            .checked_mul(cells)
            .ok_or(StreamlineError::DensityTooLarge { value: density, max_cells: MAX_CELLS })?;
        let spacing_x = grid.x.len as f64 / (cells - 1) as f64;
        let spacing_y = grid.y.len as f64 / (cells - 1) as f64;
        Ok(Self {
            cells,
            spacing_x,
            spacing_y,
            state: vec![CellState::Free; total],
            journal: Vec::new(),
        })
    }

    /// Cells per side.
    pub const fn resolution(&self) -> usize { self.cells }

    /// Coarse cell nearest to an index-space point.
    #[inline]
    pub fn cell_of(&self, xi: f64, yi: f64) -> (usize, usize) {
        let cx = (xi / self.spacing_x + 0.5) as usize;
        let cy = (yi / self.spacing_y + 0.5) as usize;
        (cx.min(self.cells - 1), cy.min(self.cells - 1))
    }

    /// Index-space start point for the seed in cell `(cx, cy)`.
    #[inline]
    pub fn seed_point(&self, cx: usize, cy: usize) -> (f64, f64) {
        (cx as f64 * self.spacing_x, cy as f64 * self.spacing_y)
    }

    #[inline]
    fn idx(&self, cx: usize, cy: usize) -> usize { cy * self.cells + cx }

    pub fn contains_cell(&self, cx: usize, cy: usize) -> bool {
        cx < self.cells && cy < self.cells
    }

    /// Free means neither committed nor claimed by the trace in flight.
    pub fn is_free(&self, cx: usize, cy: usize) -> bool {
        self.state[self.idx(cx, cy)] == CellState::Free
    }

    /// Committed by an accepted streamline.
    pub fn is_occupied(&self, cx: usize, cy: usize) -> bool {
        self.state[self.idx(cx, cy)] == CellState::Occupied
    }

    /// Tentatively mark a cell for the trace in flight. Returns `false` if
    /// the cell is already taken, which ends the current direction.
    pub fn claim(&mut self, cx: usize, cy: usize) -> bool {
        let i = self.idx(cx, cy);
        if self.state[i] != CellState::Free {
            return false;
        }
        self.state[i] = CellState::Claimed;
        self.journal.push(i);
        true
    }

    /// Accept the trace in flight: its claims and its seed cell become
    /// permanently occupied.
    pub fn commit(&mut self, seed_cell: (usize, usize)) {
        for i in self.journal.drain(..) {
            self.state[i] = CellState::Occupied;
        }
        let i = self.idx(seed_cell.0, seed_cell.1);
        self.state[i] = CellState::Occupied;
    }

    /// Reject the trace in flight and free the cells it claimed.
    pub fn release(&mut self) {
        for i in self.journal.drain(..) {
            self.state[i] = CellState::Free;
        }
    }

    /// Number of committed cells.
    pub fn occupied_count(&self) -> usize {
        self.state.iter().filter(|&&s| s == CellState::Occupied).count()
    }

    /// Seed candidates in scan order. Cells may repeat (ring corners are
    /// offered twice); occupancy is checked by the caller at scan time.
    pub fn seed_cells(&self, order: SeedOrder) -> Vec<(usize, usize)> {
        scan_order(self.cells, order)
    }
}

/// Cell visiting sequence for a `cells x cells` grid.
pub fn scan_order(cells: usize, order: SeedOrder) -> Vec<(usize, usize)> {
    match order {
        SeedOrder::RowMajor => (0..cells)
            .flat_map(|cy| (0..cells).map(move |cx| (cx, cy)))
            .collect(),
        SeedOrder::EdgeInward => {
            let mut out = Vec::new();
            for indent in 0..cells / 2 {
                let far = cells - 1 - indent;
                for i in 0..cells - 2 * indent {
                    out.push((i + indent, indent));
                    out.push((i + indent, far));
                    out.push((indent, i + indent));
                    out.push((far, i + indent));
                }
            }
            out
        }
    }
}
