mod bot_controller;
mod collision;
mod food;
mod game_state;
mod grid;
mod input;
mod pathfinding;
mod session;
mod settings;
mod snake;
mod space;
mod types;

pub use bot_controller::AutoPilot;
pub use collision::would_collide;
pub use food::FoodSpawner;
pub use game_state::{GameSnapshot, SnakeGameState, StepOutcome};
pub use grid::{GRID_SIZE, Grid};
pub use input::InputCommand;
pub use pathfinding::find_route;
pub use session::{SnakeSession, TickResult};
pub use settings::{DEFAULT_FOOD, DEFAULT_START, DEFAULT_TICK_INTERVAL_MS, SnakeSessionSettings};
pub use snake::Snake;
pub use space::reachable_count;
pub use types::{Direction, GameEndReason, GameStatus, Point};
