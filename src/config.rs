//! Application-level configuration constants.

use random_grid::defaults::{GRID_COLS, GRID_ROWS};

// UI Behavior
pub const UPDATE_INTERVAL_MS: u32 = 200;

// Default values for input fields
pub const DEFAULT_VISIBLE_ROWS: usize = 50;
pub const DEFAULT_VISIBLE_COLS: usize = 50;

// Min/Max limits for input fields
pub const MIN_VISIBLE_DIM: usize = 1;
pub const MAX_VISIBLE_ROWS: usize = GRID_ROWS;
pub const MAX_VISIBLE_COLS: usize = GRID_COLS;
