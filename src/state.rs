//! Shared grid state: the action set and its reducer.

use log::debug;
use random_grid::{defaults, Grid};
use std::rc::Rc;
use yew::prelude::*;

/// Operations the UI can request against the grid.
///
/// The set is closed and `reduce` matches it exhaustively, so an unhandled
/// action cannot exist at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    /// Stochastic partial refresh of the whole grid.
    RandomizeAll,
    /// Replace the single cell at the given coordinates.
    RandomizeCell { row: usize, col: usize },
}

/// The single owner of the grid. Consumers receive a
/// `UseReducerHandle<GridState>` through props; there is no ambient lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub grid: Grid,
}

impl GridState {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        GridState {
            grid: Grid::random(defaults::GRID_ROWS, defaults::GRID_COLS, &mut rng),
        }
    }
}

impl Reducible for GridState {
    type Action = GridAction;

    fn reduce(self: Rc<Self>, action: GridAction) -> Rc<Self> {
        debug!("Applying {:?}", action);
        let mut rng = rand::rng();
        let grid = match action {
            GridAction::RandomizeAll => self.grid.randomize_all(&mut rng),
            GridAction::RandomizeCell { row, col } => self.grid.randomize_cell(row, col, &mut rng),
        };
        Rc::new(GridState { grid })
    }
}
