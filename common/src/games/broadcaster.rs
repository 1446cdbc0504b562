use std::future::Future;

use super::snake::{DeathReason, SnakeSnapshot};

/// Receives everything a renderer needs from a running session.
pub trait SnapshotBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_snapshot(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        snapshot: SnakeSnapshot,
        reason: DeathReason,
    ) -> impl Future<Output = ()> + Send;
}
