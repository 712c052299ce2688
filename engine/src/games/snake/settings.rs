use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::{GRID_SIZE, Grid};
use super::types::Point;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;
pub const DEFAULT_START: Point = Point::new(9, 10);
pub const DEFAULT_FOOD: Point = Point::new(15, 15);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSessionSettings {
    pub grid_size: i32,
    pub tick_interval_ms: u64,
    pub initial_snake: Vec<Point>,
    pub initial_food: Point,
}

impl SnakeSessionSettings {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            initial_snake: vec![DEFAULT_START],
            initial_food: DEFAULT_FOOD,
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if !(5..=50).contains(&self.grid_size) {
            return Err("Grid size must be between 5 and 50".to_string());
        }
        if !(50..=5000).contains(&self.tick_interval_ms) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.initial_snake.is_empty() {
            return Err("Initial snake must have at least one cell".to_string());
        }

        let grid = self.grid();
        let mut seen = HashSet::new();
        for cell in &self.initial_snake {
            if !grid.in_bounds(*cell) {
                return Err(format!("Initial snake cell ({}, {}) is outside the grid", cell.x, cell.y));
            }
            if !seen.insert(*cell) {
                return Err(format!("Initial snake repeats cell ({}, {})", cell.x, cell.y));
            }
        }
        if self.initial_snake.len() >= grid.cell_count() {
            return Err("Initial snake must leave room for food".to_string());
        }

        if !grid.in_bounds(self.initial_food) {
            return Err("Initial food is outside the grid".to_string());
        }
        if seen.contains(&self.initial_food) {
            return Err("Initial food must not overlap the snake".to_string());
        }
        Ok(())
    }
}
