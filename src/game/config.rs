use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest grid that fits the initial snakes with room to move
pub const MIN_GRID_SIZE: usize = 5;
/// Above 1000 Hz the tick interval rounds down to zero milliseconds
pub const MAX_TICK_HZ: u64 = 1000;

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of every snake
    pub initial_snake_length: usize,
    /// Simulation rate in ticks per second
    pub tick_hz: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            initial_snake_length: 3,
            tick_hz: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
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

    /// Time between simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.tick_hz.max(1))
    }

    /// Reject configurations the game cannot run: degenerate grids,
    /// snakes longer than their spawn row, and tick rates outside
    /// 1..=[`MAX_TICK_HZ`]
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width >= MIN_GRID_SIZE && self.grid_height >= MIN_GRID_SIZE,
            "grid must be at least {}x{} cells, got {}x{}",
            MIN_GRID_SIZE,
            MIN_GRID_SIZE,
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.initial_snake_length >= 1
                && self.initial_snake_length <= self.grid_width / 2 + 1,
            "initial snake length {} does not fit a grid {} cells wide",
            self.initial_snake_length,
            self.grid_width
        );
        ensure!(
            (1..=MAX_TICK_HZ).contains(&self.tick_hz),
            "tick rate must be between 1 and {} Hz, got {}",
            MAX_TICK_HZ,
            self.tick_hz
        );
        Ok(())
    }
}
