use std::collections::HashMap;
use std::sync::Arc;

use snake_engine::games::{ScoreBoard, ScoreEntry};
use snake_engine::{PlayerId, log};
use tokio::sync::Mutex;

/// Keeps each player's best score only, keyed by email.
#[derive(Clone, Default)]
pub struct InMemoryScoreBoard {
    best: Arc<Mutex<HashMap<PlayerId, ScoreEntry>>>,
}

impl InMemoryScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreBoard for InMemoryScoreBoard {
    async fn submit_score(&self, entry: ScoreEntry) {
        let mut best = self.best.lock().await;
        let player_id = entry.player.player_id();
        match best.get(&player_id) {
            Some(existing) if existing.score >= entry.score => {
                log!("Score {} for {} does not beat {}", entry.score, player_id, existing.score);
            }
            _ => {
                log!("New best score {} for {}", entry.score, player_id);
                best.insert(player_id, entry);
            }
        }
    }

    async fn top_scores(&self, limit: usize) -> Vec<ScoreEntry> {
        let best = self.best.lock().await;
        let mut entries: Vec<ScoreEntry> = best.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.player.name.cmp(&b.player.name))
        });
        entries.truncate(limit);
        entries
    }

    async fn remove_score(&self, player_id: PlayerId) -> bool {
        let removed = self.best.lock().await.remove(&player_id).is_some();
        if removed {
            log!("Removed score for {}", player_id);
        }
        removed
    }
}
