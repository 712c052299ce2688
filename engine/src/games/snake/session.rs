use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::config::Validate;
use crate::games::{ScoreBoard, ScoreEntry, SessionRng, TickScheduler};
use crate::{PlayerIdentity, log};
use super::bot_controller::AutoPilot;
use super::game_state::{GameSnapshot, SnakeGameState, StepOutcome};
use super::input::InputCommand;
use super::settings::SnakeSessionSettings;
use super::types::GameStatus;

#[derive(Clone, Debug, PartialEq)]
pub enum TickResult {
    Continue(StepOutcome),
    /// Carries the final score; produced once per game.
    GameOver(ScoreEntry),
    Finished,
}

pub struct SnakeSession {
    player: PlayerIdentity,
    settings: SnakeSessionSettings,
    game_state: SnakeGameState,
    rng: SessionRng,
    autopilot: bool,
    tick: u64,
    score_reported: bool,
}

impl SnakeSession {
    pub fn new(player: PlayerIdentity, settings: SnakeSessionSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let game_state = SnakeGameState::new(&settings)?;
        Ok(Self {
            player,
            settings,
            game_state,
            rng,
            autopilot: false,
            tick: 0,
            score_reported: false,
        })
    }

    pub fn game_state(&self) -> &SnakeGameState {
        &self.game_state
    }

    pub fn player(&self) -> &PlayerIdentity {
        &self.player
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.autopilot != enabled {
            log!("[{}] Autopilot {}", self.player.name, if enabled { "enabled" } else { "disabled" });
        }
        self.autopilot = enabled;
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game_state.snapshot(self.tick, self.autopilot)
    }

    /// New snake, new food, score zero, autopilot off.
    pub fn reset(&mut self) -> Result<(), String> {
        self.game_state.reset(&self.settings, &mut self.rng)?;
        self.autopilot = false;
        self.tick = 0;
        self.score_reported = false;
        log!("[{}] Game restarted", self.player.name);
        Ok(())
    }

    pub fn apply_command(&mut self, command: InputCommand) -> Result<(), String> {
        match command {
            InputCommand::Turn(direction) => {
                self.game_state.set_direction(direction);
            }
            InputCommand::TogglePause => {
                self.game_state.toggle_pause();
            }
            InputCommand::ToggleAutopilot => self.set_autopilot(!self.autopilot),
            InputCommand::Restart => self.reset()?,
        }
        Ok(())
    }

    pub fn tick(&mut self) -> Result<TickResult, String> {
        if self.game_state.is_over() {
            return Ok(self.take_final_score().map_or(TickResult::Finished, TickResult::GameOver));
        }

        if self.autopilot
            && self.game_state.status() != GameStatus::Paused
            && let Some(direction) = AutoPilot::decide(
                self.game_state.grid(),
                self.game_state.food(),
                self.game_state.snake(),
                self.game_state.committed_direction(),
            )
        {
            self.game_state.set_direction(direction);
        }

        let outcome = self.game_state.step(&mut self.rng)?;
        self.tick += 1;

        match outcome {
            StepOutcome::Ended { .. } => {
                Ok(self.take_final_score().map_or(TickResult::Finished, TickResult::GameOver))
            }
            outcome => Ok(TickResult::Continue(outcome)),
        }
    }

    /// A paused game, or one not started without the autopilot, only moves
    /// on a player command.
    fn awaits_input(&self) -> bool {
        match self.game_state.status() {
            GameStatus::Paused => true,
            GameStatus::NotStarted => !self.autopilot,
            GameStatus::Running | GameStatus::Over => false,
        }
    }

    fn take_final_score(&mut self) -> Option<ScoreEntry> {
        if self.score_reported {
            return None;
        }
        self.score_reported = true;
        Some(ScoreEntry {
            player: self.player.clone(),
            score: self.game_state.score(),
        })
    }

    /// Drives ticks until the game ends, then submits the final score.
    /// Commands queued since the previous tick are applied before each step.
    /// Fails once the command queue is closed while the game can only
    /// continue on player input.
    pub async fn run<S, B, F>(
        &mut self,
        scheduler: &mut S,
        commands: &mut mpsc::UnboundedReceiver<InputCommand>,
        score_board: &B,
        mut on_tick: F,
    ) -> Result<ScoreEntry, String>
    where
        S: TickScheduler,
        B: ScoreBoard,
        F: FnMut(&GameSnapshot),
    {
        loop {
            scheduler.next_tick().await;

            let mut input_closed = false;
            loop {
                match commands.try_recv() {
                    Ok(command) => self.apply_command(command)?,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        input_closed = true;
                        break;
                    }
                }
            }
            if input_closed && self.awaits_input() {
                log!("[{}] Input closed while the game is {:?}", self.player.name, self.game_state.status());
                return Err("Command queue closed while the game waits for input".to_string());
            }

            match self.tick()? {
                TickResult::Continue(_) => on_tick(&self.snapshot()),
                TickResult::GameOver(entry) => {
                    on_tick(&self.snapshot());
                    log!(
                        "[{}] Final score {} after {} ticks ({:?})",
                        entry.player.name,
                        entry.score,
                        self.tick,
                        self.game_state.end_reason()
                    );
                    score_board.submit_score(entry.clone()).await;
                    return Ok(entry);
                }
                TickResult::Finished => {
                    return Err("Session finished without a final score".to_string());
                }
            }
        }
    }
}
