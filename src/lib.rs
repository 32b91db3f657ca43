use log::{debug, info, warn};
use rand::Rng;

/// Grid shape and value-range parameters
pub mod defaults {
    /// Matrix dimensions at initialization.
    pub const GRID_ROWS: usize = 100;
    pub const GRID_COLS: usize = 100;
    /// Cell values are drawn from `[0, CELL_VALUE_LIMIT)`.
    pub const CELL_VALUE_LIMIT: u8 = 100;
    /// A cell is replaced during a bulk randomize when a uniform draw
    /// exceeds this threshold (replacement probability 0.3).
    pub const REROLL_THRESHOLD: f64 = 0.7;
}

pub type CellValue = u8;

/// Draw a fresh cell value: `floor(u * 100)` for a uniform `u` in `[0, 1)`.
#[inline]
pub fn roll_value<R: Rng + ?Sized>(rng: &mut R) -> CellValue {
    (rng.random::<f64>() * defaults::CELL_VALUE_LIMIT as f64) as CellValue
}

/// A rectangular matrix of cell values, stored row-major.
///
/// Dimensions are fixed at creation; update operations never mutate in
/// place. Each returns a structurally new `Grid` so readers holding the old
/// value observe the replacement atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellValue>, // rows * cols entries
}

impl Grid {
    /// Build a `rows x cols` grid where every cell is drawn independently.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows * cols).map(|_| roll_value(rng)).collect();
        info!("Initialized {}x{} grid", rows, cols);
        Grid { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Value at `(row, col)`, or `None` when the coordinates are out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.idx(row, col)])
        } else {
            None
        }
    }

    /// Stochastic partial refresh: every cell independently keeps its prior
    /// value unless a fresh uniform draw exceeds the re-roll threshold, in
    /// which case it is replaced with a new roll. On average about 30% of
    /// the cells change per call.
    pub fn randomize_all<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut rerolled = 0usize;
        let cells: Vec<CellValue> = self
            .cells
            .iter()
            .map(|&v| {
                if rng.random::<f64>() > defaults::REROLL_THRESHOLD {
                    rerolled += 1;
                    roll_value(rng)
                } else {
                    v
                }
            })
            .collect();
        debug!("Bulk randomize re-rolled {}/{} cells", rerolled, cells.len());
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Replace exactly the cell at `(row, col)` with a new roll, leaving
    /// every other cell untouched. Out-of-range coordinates are ignored and
    /// the grid is returned unchanged.
    pub fn randomize_cell<R: Rng + ?Sized>(&self, row: usize, col: usize, rng: &mut R) -> Grid {
        if row >= self.rows || col >= self.cols {
            warn!(
                "Ignoring cell randomize outside the {}x{} grid: ({}, {})",
                self.rows, self.cols, row, col
            );
            return self.clone();
        }
        let mut next = self.clone();
        let i = next.idx(row, col);
        next.cells[i] = roll_value(rng);
        debug!("Cell ({}, {}) re-rolled to {}", row, col, next.cells[i]);
        next
    }

    /// Clamp requested display dimensions to this grid's bounds.
    ///
    /// The lower bound is one row/column so the view never collapses to
    /// nothing while the grid itself is non-empty.
    pub fn visible_window(&self, want_rows: usize, want_cols: usize) -> (usize, usize) {
        if self.rows == 0 || self.cols == 0 {
            return (0, 0);
        }
        (want_rows.clamp(1, self.rows), want_cols.clamp(1, self.cols))
    }
}
