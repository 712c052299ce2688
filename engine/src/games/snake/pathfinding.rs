//! Shortest routes over the 4-connected grid, treating walls and the snake
//! body as blocked.

use std::collections::{HashMap, HashSet, VecDeque};

use super::collision::would_collide;
use super::grid::Grid;
use super::snake::Snake;
use super::types::Point;

/// Returns the route from `start` to `goal` inclusive, or `None` when the body
/// cuts them apart. `start` itself is not tested for collision since it is
/// normally the head. Ties between equal-length routes follow the fixed
/// neighbour order, so results are reproducible.
pub fn find_route(grid: &Grid, start: Point, goal: Point, snake: &Snake) -> Option<Vec<Point>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut visited = HashSet::from([start]);
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(reconstruct_route(&came_from, start, goal));
        }
        for neighbor in grid.neighbors(current) {
            if would_collide(grid, neighbor, snake) || !visited.insert(neighbor) {
                continue;
            }
            came_from.insert(neighbor, current);
            queue.push_back(neighbor);
        }
    }

    None
}

fn reconstruct_route(came_from: &HashMap<Point, Point>, start: Point, goal: Point) -> Vec<Point> {
    let mut route = vec![goal];
    let mut current = goal;
    while current != start {
        current = came_from[&current];
        route.push(current);
    }
    route.reverse();
    route
}
