use super::grid::Grid;
use super::snake::Snake;
use super::types::Point;

/// The one legality check for player moves, simulation steps and the
/// autopilot. The tail counts as occupied: it has not moved yet when a
/// candidate head is tested.
pub fn would_collide(grid: &Grid, candidate_head: Point, snake: &Snake) -> bool {
    !grid.in_bounds(candidate_head) || snake.contains(candidate_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_collide() {
        let grid = Grid::default();
        let snake = Snake::new(Point::new(0, 0));
        assert!(would_collide(&grid, Point::new(-1, 0), &snake));
        assert!(would_collide(&grid, Point::new(0, 20), &snake));
        assert!(!would_collide(&grid, Point::new(1, 0), &snake));
    }

    #[test]
    fn test_tail_counts_as_body() {
        let grid = Grid::default();
        let snake = Snake::from_cells(vec![
            Point::new(5, 5),
            Point::new(5, 6),
            Point::new(6, 6),
            Point::new(6, 5),
        ])
        .unwrap();
        assert!(would_collide(&grid, Point::new(6, 5), &snake));
        assert!(!would_collide(&grid, Point::new(4, 5), &snake));
    }
}
