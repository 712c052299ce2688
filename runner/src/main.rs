mod config;
mod console_input;
mod render;
mod score_board;

use std::path::PathBuf;

use clap::Parser;
use snake_engine::config::Validate;
use snake_engine::games::snake::{GameSnapshot, SnakeSession};
use snake_engine::games::{ImmediateScheduler, IntervalScheduler, ScoreBoard, SessionRng};
use snake_engine::{PlayerIdentity, log, logger};
use tokio::sync::mpsc;

use config::{RunnerConfig, get_config_manager};
use score_board::InMemoryScoreBoard;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// YAML config; defaults to snake_runner_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Store the effective config back to the config file.
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    autopilot: bool,
    #[arg(long)]
    headless: bool,
    #[arg(long)]
    no_render: bool,
    #[arg(long)]
    games: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    avatar: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut RunnerConfig) {
        if self.autopilot {
            config.autopilot = true;
        }
        if self.headless {
            config.headless = true;
        }
        if self.no_render {
            config.render = false;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.name.is_some() || self.email.is_some() || self.avatar.is_some() {
            config.player = PlayerIdentity::new(
                self.name.as_deref().unwrap_or(&config.player.name),
                self.email.as_deref().unwrap_or(&config.player.email),
                self.avatar.as_deref().unwrap_or(&config.player.avatar),
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    args.apply(&mut config);
    config.validate()?;
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = SessionRng::from_seed(config.seed);
    log!("Starting {} game(s) for {} with seed {}", config.games, config.player, rng.seed());

    let score_board = InMemoryScoreBoard::new();
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    if !config.headless {
        tokio::spawn(console_input::read_commands(command_tx));
    } else {
        drop(command_tx);
    }

    let mut session = SnakeSession::new(config.player.clone(), config.game.clone(), rng)?;
    let render = config.render;
    let on_tick = move |snapshot: &GameSnapshot| {
        if render {
            println!("{}", render::render_snapshot(snapshot));
        }
    };

    for game_index in 0..config.games {
        if game_index > 0 {
            session.reset()?;
        }
        session.set_autopilot(config.autopilot);

        let result = if config.headless {
            session.run(&mut ImmediateScheduler, &mut command_rx, &score_board, on_tick).await
        } else {
            let mut scheduler = IntervalScheduler::new(config.game.tick_interval());
            session.run(&mut scheduler, &mut command_rx, &score_board, on_tick).await
        };
        match result {
            Ok(entry) => log!("Game {} finished with score {}", game_index + 1, entry.score),
            Err(e) => {
                log!("Game {} abandoned: {}", game_index + 1, e);
                break;
            }
        }
    }

    println!("Top {} scores:", config.leaderboard_size);
    for (rank, entry) in score_board
        .top_scores(config.leaderboard_size)
        .await
        .iter()
        .enumerate()
    {
        println!("{}. {} [{}] {}", rank + 1, entry.player.name, entry.player.avatar, entry.score);
    }

    Ok(())
}
