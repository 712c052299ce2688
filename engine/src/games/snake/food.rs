use crate::games::SessionRng;

use super::grid::Grid;
use super::snake::Snake;
use super::types::Point;

const MAX_RANDOM_DRAWS: usize = 256;

pub struct FoodSpawner;

impl FoodSpawner {
    /// Uniform over the free cells. Rejection-samples first; a crowded board
    /// falls back to picking from the enumerated free cells. `None` means the
    /// snake covers the whole grid.
    pub fn place(grid: &Grid, snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
        if snake.len() >= grid.cell_count() {
            return None;
        }

        for _ in 0..MAX_RANDOM_DRAWS {
            let candidate = Point::new(
                rng.random_range(0..grid.size()),
                rng.random_range(0..grid.size()),
            );
            if !snake.contains(candidate) {
                return Some(candidate);
            }
        }

        let free: Vec<Point> = grid.cells().filter(|cell| !snake.contains(*cell)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[rng.random_range(0..free.len())])
    }
}
