use std::collections::{HashSet, VecDeque};

use super::collision::would_collide;
use super::grid::Grid;
use super::snake::Snake;
use super::types::Point;

/// Size of the free region reachable from `from`, `from` included. A blocked
/// starting cell has no room at all.
pub fn reachable_count(grid: &Grid, from: Point, snake: &Snake) -> usize {
    if would_collide(grid, from, snake) {
        return 0;
    }

    let mut visited = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbors(current) {
            if !would_collide(grid, neighbor, snake) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_counts_all_free_cells() {
        let grid = Grid::default();
        let snake = Snake::new(Point::new(9, 10));
        assert_eq!(reachable_count(&grid, Point::new(0, 0), &snake), 399);
    }

    #[test]
    fn test_wall_splits_components() {
        // Column x = 10 is body, leaving 10 columns on the left and 9 on the right.
        let grid = Grid::default();
        let snake = Snake::from_cells((0..20).map(|y| Point::new(10, y))).unwrap();
        assert_eq!(reachable_count(&grid, Point::new(0, 0), &snake), 200);
        assert_eq!(reachable_count(&grid, Point::new(19, 19), &snake), 180);
    }

    #[test]
    fn test_pocket_component() {
        // 4x4 grid, a 1-cell pocket at (0,0) sealed by (1,0) and (0,1).
        let grid = Grid::new(4);
        let snake = Snake::from_cells(vec![Point::new(1, 0), Point::new(0, 1)]).unwrap();
        assert_eq!(reachable_count(&grid, Point::new(0, 0), &snake), 1);
        assert_eq!(reachable_count(&grid, Point::new(3, 3), &snake), 13);
    }

    #[test]
    fn test_blocked_start_is_zero() {
        let grid = Grid::new(4);
        let snake = Snake::new(Point::new(2, 2));
        assert_eq!(reachable_count(&grid, Point::new(2, 2), &snake), 0);
        assert_eq!(reachable_count(&grid, Point::new(-1, 2), &snake), 0);
    }
}
