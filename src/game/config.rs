use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::grid::Position;
use super::rule::Rule;

/// Configuration for a life session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Width of the grid in cells
    pub grid_width: usize,
    /// Height of the grid in cells
    pub grid_height: usize,
    /// Delay between generations at speed level 1, in milliseconds
    pub turn_interval_ms: u64,
    /// Input poll timeout while nothing is scheduled, in milliseconds
    pub frame_interval_ms: u64,
    /// Where the edit cursor starts each time the editor opens
    pub edit_cursor_row: usize,
    pub edit_cursor_col: usize,
    /// Birth/survival rule
    pub rule: Rule,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: 80,
            grid_height: 25,
            turn_interval_ms: 90,
            frame_interval_ms: 33,
            edit_cursor_row: 4,
            edit_cursor_col: 4,
            rule: Rule::conway(),
        }
    }
}

impl LifeConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn turn_interval(&self) -> Duration {
        Duration::from_millis(self.turn_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    /// Edit cursor start, wrapped into the grid
    pub fn edit_cursor_start(&self) -> Position {
        Position::new(
            self.edit_cursor_row % self.grid_height.max(1),
            self.edit_cursor_col % self.grid_width.max(1),
        )
    }
}
