mod scheduler;
mod score_board;
mod session_rng;

pub mod snake;

pub use scheduler::{ImmediateScheduler, IntervalScheduler, TickScheduler};
pub use score_board::{ScoreBoard, ScoreEntry};
pub use session_rng::SessionRng;
