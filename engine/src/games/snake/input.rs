use super::types::Direction;

/// Input events queued by any source (keyboard, tests, network) and applied
/// by the session right before the next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    TogglePause,
    ToggleAutopilot,
    Restart,
}

impl InputCommand {
    /// Arrow-key/WASD style bindings: `w a s d`, `p` or space for pause,
    /// `b` for the bot, `r` to restart.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "w" | "up" => Some(InputCommand::Turn(Direction::Up)),
            "s" | "down" => Some(InputCommand::Turn(Direction::Down)),
            "a" | "left" => Some(InputCommand::Turn(Direction::Left)),
            "d" | "right" => Some(InputCommand::Turn(Direction::Right)),
            "p" | "pause" | "space" => Some(InputCommand::TogglePause),
            "b" | "bot" => Some(InputCommand::ToggleAutopilot),
            "r" | "restart" => Some(InputCommand::Restart),
            _ => None,
        }
    }
}
