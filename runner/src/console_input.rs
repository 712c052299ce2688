use snake_engine::games::snake::InputCommand;
use snake_engine::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Splits a typed line into commands; `"wd"` and `"w d"` both mean up, right.
pub fn parse_line(line: &str) -> Vec<InputCommand> {
    let mut commands = Vec::new();
    for token in line.split_whitespace() {
        match InputCommand::from_key(token) {
            Some(command) => commands.push(command),
            None => commands.extend(
                token
                    .chars()
                    .filter_map(|key| InputCommand::from_key(&key.to_string())),
            ),
        }
    }
    commands
}

pub async fn read_commands(tx: mpsc::UnboundedSender<InputCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                for command in parse_line(&line) {
                    if tx.send(command).is_err() {
                        return;
                    }
                }
            }
            Ok(None) => return,
            Err(e) => {
                log!("Failed to read input: {}", e);
                return;
            }
        }
    }
}
