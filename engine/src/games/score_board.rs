use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{PlayerId, PlayerIdentity};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerIdentity,
    pub score: u32,
}

/// The leaderboard collaborator. How entries are stored, deduplicated or
/// retried is up to the implementation.
pub trait ScoreBoard: Send + Sync + Clone + 'static {
    fn submit_score(&self, entry: ScoreEntry) -> impl Future<Output = ()> + Send;

    fn top_scores(&self, limit: usize) -> impl Future<Output = Vec<ScoreEntry>> + Send;

    /// Returns whether an entry for the player existed.
    fn remove_score(&self, player_id: PlayerId) -> impl Future<Output = bool> + Send;
}
