use serde::{Deserialize, Serialize};

use super::types::{Direction, Point};

pub const GRID_SIZE: i32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        (self.size.max(0) as usize).pow(2)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        (0..self.size).contains(&point.x) && (0..self.size).contains(&point.y)
    }

    /// Neighbours in `Direction::MOVES` order, including out-of-bounds ones.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
        Direction::MOVES.into_iter().map(move |direction| point.offset(direction))
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}
