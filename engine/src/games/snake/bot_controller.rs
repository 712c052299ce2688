use super::collision::would_collide;
use super::grid::Grid;
use super::pathfinding::find_route;
use super::snake::Snake;
use super::space::reachable_count;
use super::types::{Direction, Point};

pub struct AutoPilot;

impl AutoPilot {
    /// Shortest route to the food when one exists, otherwise the move that
    /// keeps the most cells reachable. This is a one-ply greedy policy and
    /// can still trap itself. `heading` is the direction of the last step;
    /// its reverse is never returned since the axis lock would drop it.
    /// `None` means every allowed move collides.
    pub fn decide(grid: &Grid, food: Option<Point>, snake: &Snake, heading: Direction) -> Option<Direction> {
        let head = snake.head();
        let reverse = heading.opposite();
        food.and_then(|food| Self::route_step(grid, head, food, snake, reverse))
            .or_else(|| Self::escape_move(grid, head, snake, reverse))
    }

    fn route_step(grid: &Grid, head: Point, food: Point, snake: &Snake, reverse: Direction) -> Option<Direction> {
        let route = find_route(grid, head, food, snake)?;
        let next = *route.get(1)?;
        let direction = Direction::between(head, next)?;
        if would_collide(grid, next, snake) {
            return None;
        }
        if direction == reverse {
            return Self::detour_step(grid, head, food, snake, reverse);
        }
        Some(direction)
    }

    /// Side step with the shortest onward route, for a one-cell snake whose
    /// food lies behind it.
    fn detour_step(grid: &Grid, head: Point, food: Point, snake: &Snake, reverse: Direction) -> Option<Direction> {
        let mut best: Option<(Direction, usize)> = None;

        for direction in Direction::MOVES {
            let next = head.offset(direction);
            if direction == reverse || would_collide(grid, next, snake) {
                continue;
            }
            let Some(route) = find_route(grid, next, food, snake) else {
                continue;
            };
            if best.is_none_or(|(_, best_len)| route.len() < best_len) {
                best = Some((direction, route.len()));
            }
        }

        best.map(|(direction, _)| direction)
    }

    fn escape_move(grid: &Grid, head: Point, snake: &Snake, reverse: Direction) -> Option<Direction> {
        let mut best: Option<(Direction, usize)> = None;

        for direction in Direction::MOVES {
            let next = head.offset(direction);
            if direction == reverse || would_collide(grid, next, snake) {
                continue;
            }
            let space = reachable_count(grid, next, snake);
            if best.is_none_or(|(_, best_space)| space > best_space) {
                best = Some((direction, space));
            }
        }

        best.map(|(direction, _)| direction)
    }
}
