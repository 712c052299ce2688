use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Head first, tail last. The set mirrors the deque for O(1) occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            body_set: HashSet::from([start_pos]),
        }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Point>) -> Result<Self, String> {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        for cell in cells {
            if !body_set.insert(cell) {
                return Err(format!("Snake body repeats cell ({}, {})", cell.x, cell.y));
            }
            body.push_back(cell);
        }
        if body.is_empty() {
            return Err("Snake body must contain at least one cell".to_string());
        }
        Ok(Self { body, body_set })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub(super) fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub(super) fn pop_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
    }
}
