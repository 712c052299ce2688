use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;
use super::collision::would_collide;
use super::food::FoodSpawner;
use super::grid::Grid;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Direction, GameEndReason, GameStatus, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not started or paused; nothing moved.
    Idle,
    Moved,
    Ate { score: u32 },
    Ended { reason: GameEndReason },
}

/// Read model handed to renderers after each tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid_size: i32,
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
    pub end_reason: Option<GameEndReason>,
    pub autopilot: bool,
    pub tick: u64,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    snake: Snake,
    food: Option<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    status: GameStatus,
    end_reason: Option<GameEndReason>,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings) -> Result<Self, String> {
        Self::with_layout(settings.grid(), settings.initial_snake.clone(), Some(settings.initial_food))
    }

    pub fn with_layout(grid: Grid, body: Vec<Point>, food: Option<Point>) -> Result<Self, String> {
        let snake = Snake::from_cells(body)?;
        if let Some(cell) = snake.cells().find(|cell| !grid.in_bounds(*cell)) {
            return Err(format!("Snake cell ({}, {}) is outside the grid", cell.x, cell.y));
        }
        if let Some(food) = food
            && would_collide(&grid, food, &snake)
        {
            return Err(format!("Food at ({}, {}) is not on a free cell", food.x, food.y));
        }

        Ok(Self {
            grid,
            snake,
            food,
            direction: Direction::None,
            pending_direction: None,
            score: 0,
            status: GameStatus::NotStarted,
            end_reason: None,
        })
    }

    /// Throws away the current game and starts over with fresh random food.
    pub fn reset(&mut self, settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Result<(), String> {
        let grid = settings.grid();
        let snake = Snake::from_cells(settings.initial_snake.iter().copied())?;
        let food = FoodSpawner::place(&grid, &snake, rng);
        *self = Self::with_layout(grid, snake.cells().collect(), food)?;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// The direction the next step will use.
    pub fn direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    /// The direction the last step used; `set_direction` locks its axis.
    pub fn committed_direction(&self) -> Direction {
        self.direction
    }

    /// Requests on the axis the snake last moved along are dropped, so a
    /// double key press inside one tick cannot fold the snake onto its neck.
    /// The latest accepted request wins.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.is_over() || !requested.is_moving() || requested.is_same_axis(self.direction) {
            return false;
        }

        self.pending_direction = Some(requested);
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
        }
        true
    }

    /// Only a running game can pause; before the first turn there is nothing to suspend.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::NotStarted | GameStatus::Over => return false,
        };
        true
    }

    pub fn step(&mut self, rng: &mut SessionRng) -> Result<StepOutcome, String> {
        match self.status {
            GameStatus::Over => return Err("Cannot step a game that is already over".to_string()),
            GameStatus::NotStarted | GameStatus::Paused => return Ok(StepOutcome::Idle),
            GameStatus::Running => {}
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        if !self.direction.is_moving() {
            return Ok(StepOutcome::Idle);
        }

        let next_head = self.snake.head().offset(self.direction);
        if would_collide(&self.grid, next_head, &self.snake) {
            let reason = if self.grid.in_bounds(next_head) {
                GameEndReason::SelfCollision
            } else {
                GameEndReason::WallCollision
            };
            return Ok(self.finish(reason));
        }

        self.snake.push_head(next_head);

        if self.food != Some(next_head) {
            self.snake.pop_tail();
            return Ok(StepOutcome::Moved);
        }

        self.score += 1;
        self.food = FoodSpawner::place(&self.grid, &self.snake, rng);
        log!(
            "Ate food at ({}, {}). Score: {}",
            next_head.x,
            next_head.y,
            self.score
        );

        match self.food {
            Some(_) => Ok(StepOutcome::Ate { score: self.score }),
            None => Ok(self.finish(GameEndReason::BoardFilled)),
        }
    }

    fn finish(&mut self, reason: GameEndReason) -> StepOutcome {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        self.pending_direction = None;
        log!("Game over ({:?}) with score {}", reason, self.score);
        StepOutcome::Ended { reason }
    }

    pub fn snapshot(&self, tick: u64, autopilot: bool) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.grid.size(),
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            direction: self.direction(),
            end_reason: self.end_reason,
            autopilot,
            tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn create_state(body: Vec<Point>, food: Point) -> SnakeGameState {
        SnakeGameState::with_layout(Grid::default(), body, Some(food)).unwrap()
    }

    fn body(state: &SnakeGameState) -> Vec<Point> {
        state.snake().cells().collect()
    }

    fn assert_invariants(state: &SnakeGameState) {
        let cells = body(state);
        assert!(cells.iter().all(|cell| state.grid().in_bounds(*cell)));
        if !state.is_over() {
            let distinct: HashSet<Point> = cells.iter().copied().collect();
            assert_eq!(distinct.len(), cells.len());
        }
        if let Some(food) = state.food() {
            assert!(!state.snake().contains(food));
        }
    }

    #[test]
    fn test_new_uses_defaults() {
        let state = SnakeGameState::new(&SnakeSessionSettings::default()).unwrap();
        assert_eq!(body(&state), vec![Point::new(9, 10)]);
        assert_eq!(state.food(), Some(Point::new(15, 15)));
        assert_eq!(state.status(), GameStatus::NotStarted);
        assert_eq!(state.direction(), Direction::None);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_with_layout_rejects_food_on_snake() {
        let result = SnakeGameState::with_layout(Grid::default(), vec![Point::new(1, 1)], Some(Point::new(1, 1)));
        assert!(result.is_err());
    }

    #[test]
    fn test_step_without_direction_is_noop() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(9, 10)], Point::new(15, 15));
        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Idle));
        assert_eq!(body(&state), vec![Point::new(9, 10)]);
        assert_eq!(state.status(), GameStatus::NotStarted);
        assert_eq!(state.food(), Some(Point::new(15, 15)));
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_eating_grows_and_relocates_food() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(5, 5)], Point::new(6, 5));
        assert!(state.set_direction(Direction::Right));
        assert_eq!(state.status(), GameStatus::Running);

        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Ate { score: 1 }));
        assert_eq!(body(&state), vec![Point::new(6, 5), Point::new(5, 5)]);
        assert_eq!(state.score(), 1);
        let food = state.food().unwrap();
        assert_ne!(food, Point::new(6, 5));
        assert_ne!(food, Point::new(5, 5));
    }

    #[test]
    fn test_plain_move_keeps_length_and_score() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(5, 5), Point::new(4, 5)], Point::new(15, 15));
        state.set_direction(Direction::Down);
        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Moved));
        assert_eq!(body(&state), vec![Point::new(5, 6), Point::new(5, 5)]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.food(), Some(Point::new(15, 15)));
    }

    #[test]
    fn test_wall_collision_freezes_body() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(0, 0), Point::new(1, 0)], Point::new(15, 15));
        assert!(state.set_direction(Direction::Left));

        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Ended { reason: GameEndReason::WallCollision }));
        assert_eq!(state.status(), GameStatus::Over);
        assert_eq!(body(&state), vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_tail_cell_is_fatal() {
        // A 2x2 loop: moving into the tail cell ends the game even though
        // the tail would have moved away.
        let mut rng = SessionRng::new(42);
        let mut state = create_state(
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(6, 6), Point::new(6, 5)],
            Point::new(15, 15),
        );
        state.set_direction(Direction::Right);
        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Ended { reason: GameEndReason::SelfCollision }));
        assert_eq!(body(&state).len(), 4);
    }

    #[test]
    fn test_same_axis_request_is_ignored() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(5, 5), Point::new(4, 5)], Point::new(15, 15));
        state.set_direction(Direction::Right);
        state.step(&mut rng).unwrap();

        assert!(!state.set_direction(Direction::Left));
        assert!(!state.set_direction(Direction::Right));
        assert_eq!(state.direction(), Direction::Right);
        state.step(&mut rng).unwrap();
        assert_eq!(state.snake().head(), Point::new(7, 5));
    }

    #[test]
    fn test_double_turn_within_tick_cannot_reverse() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(5, 5), Point::new(4, 5)], Point::new(15, 15));
        state.set_direction(Direction::Right);
        state.step(&mut rng).unwrap();

        assert!(state.set_direction(Direction::Up));
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Moved));
        assert_eq!(state.snake().head(), Point::new(6, 4));
    }

    #[test]
    fn test_latest_request_wins() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(5, 5)], Point::new(15, 15));
        state.set_direction(Direction::Right);
        state.step(&mut rng).unwrap();
        state.set_direction(Direction::Up);
        state.set_direction(Direction::Down);
        state.step(&mut rng).unwrap();
        assert_eq!(state.snake().head(), Point::new(6, 6));
    }

    #[test]
    fn test_pause_suspends_movement() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(5, 5)], Point::new(15, 15));
        assert!(!state.toggle_pause());
        assert_eq!(state.status(), GameStatus::NotStarted);
        state.set_direction(Direction::Right);
        assert!(state.toggle_pause());
        assert_eq!(state.status(), GameStatus::Paused);
        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Idle));
        assert_eq!(state.snake().head(), Point::new(5, 5));

        state.toggle_pause();
        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Moved));
        assert_eq!(state.snake().head(), Point::new(6, 5));
    }

    #[test]
    fn test_over_is_terminal() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(vec![Point::new(19, 0)], Point::new(15, 15));
        state.set_direction(Direction::Up);
        state.step(&mut rng).unwrap();
        assert!(state.is_over());

        assert!(!state.set_direction(Direction::Left));
        assert!(!state.toggle_pause());
        assert!(state.step(&mut rng).is_err());
        assert_eq!(body(&state), vec![Point::new(19, 0)]);
    }

    #[test]
    fn test_filling_the_board_ends_the_game() {
        // 5x5 grid, a serpentine body covering every cell but (4,4); the head
        // at (3,4) eats the last food.
        let grid = Grid::new(5);
        let mut cells: Vec<Point> = (0..4).rev().map(|x| Point::new(x, 4)).collect();
        for y in (0..4).rev() {
            if y % 2 == 1 {
                cells.extend((0..5).map(|x| Point::new(x, y)));
            } else {
                cells.extend((0..5).rev().map(|x| Point::new(x, y)));
            }
        }
        assert_eq!(cells.len(), 24);
        let mut state = SnakeGameState::with_layout(grid, cells, Some(Point::new(4, 4))).unwrap();

        let mut rng = SessionRng::new(42);
        state.set_direction(Direction::Right);
        assert_eq!(state.step(&mut rng), Ok(StepOutcome::Ended { reason: GameEndReason::BoardFilled }));
        assert_eq!(state.score(), 1);
        assert_eq!(state.food(), None);
        assert_eq!(state.snake().len(), 25);
        assert_eq!(state.snake().head(), Point::new(4, 4));
        assert_invariants(&state);
    }

    #[test]
    fn test_reset_discards_previous_game() {
        let mut rng = SessionRng::new(42);
        let settings = SnakeSessionSettings::default();
        let mut state = SnakeGameState::new(&settings).unwrap();
        state.set_direction(Direction::Up);
        for _ in 0..3 {
            state.step(&mut rng).unwrap();
        }

        state.reset(&settings, &mut rng).unwrap();
        assert_eq!(body(&state), vec![Point::new(9, 10)]);
        assert_eq!(state.status(), GameStatus::NotStarted);
        assert_eq!(state.direction(), Direction::None);
        assert_eq!(state.score(), 0);
        assert_eq!(state.end_reason(), None);
        assert_invariants(&state);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut rng = SessionRng::new(7);
        let mut turn_rng = SessionRng::new(8);
        for _ in 0..50 {
            let mut state = SnakeGameState::new(&SnakeSessionSettings::default()).unwrap();
            for _ in 0..300 {
                let turn = Direction::MOVES[turn_rng.random_range(0..4)];
                let before_len = state.snake().len();
                let before_score = state.score();
                state.set_direction(turn);
                match state.step(&mut rng).unwrap() {
                    StepOutcome::Ate { score } => {
                        assert_eq!(score, before_score + 1);
                        assert_eq!(state.snake().len(), before_len + 1);
                    }
                    StepOutcome::Moved | StepOutcome::Idle => {
                        assert_eq!(state.score(), before_score);
                        assert_eq!(state.snake().len(), before_len);
                    }
                    StepOutcome::Ended { .. } => {
                        assert_invariants(&state);
                        break;
                    }
                }
                assert_invariants(&state);
            }
        }
    }
}
