use snake_common::games::SnapshotBroadcaster;
use snake_common::games::snake::{DeathReason, GameStatus, SnakeSnapshot};

use crate::state::{AppState, SharedState};

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
    repaint: Option<egui::Context>,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState, repaint: Option<egui::Context>) -> Self {
        Self { shared_state, repaint }
    }

    fn request_repaint(&self) {
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

impl SnapshotBroadcaster for LocalBroadcaster {
    async fn broadcast_snapshot(&self, snapshot: SnakeSnapshot) {
        let state = match snapshot.status {
            GameStatus::Running => AppState::Playing { snapshot },
            GameStatus::GameOver(reason) => AppState::GameOver { snapshot, reason },
        };
        self.shared_state.set_state(state);
        self.request_repaint();
    }

    async fn broadcast_game_over(&self, snapshot: SnakeSnapshot, reason: DeathReason) {
        self.shared_state.set_state(AppState::GameOver { snapshot, reason });
        self.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::games::snake::{Direction, Position, SessionCommand};
    use tokio::sync::mpsc;

    fn snapshot(status: GameStatus) -> SnakeSnapshot {
        SnakeSnapshot {
            board_size: 30,
            snake: vec![Position::new(5, 5)],
            food: Position::new(7, 7),
            direction: Direction::Right,
            score: 2,
            high_score: 4,
            new_high_score: false,
            status,
            tick: 9,
        }
    }

    #[tokio::test]
    async fn test_running_snapshot_sets_playing_state() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let shared_state = SharedState::new(tx);
        let broadcaster = LocalBroadcaster::new(shared_state.clone(), None);

        broadcaster.broadcast_snapshot(snapshot(GameStatus::Running)).await;

        match shared_state.get_state() {
            AppState::Playing { snapshot } => assert_eq!(snapshot.score, 2),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_game_over_sets_game_over_state() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let shared_state = SharedState::new(tx);
        let broadcaster = LocalBroadcaster::new(shared_state.clone(), None);
        let over = GameStatus::GameOver(DeathReason::SelfCollision);

        broadcaster.broadcast_game_over(snapshot(over), DeathReason::SelfCollision).await;

        match shared_state.get_state() {
            AppState::GameOver { reason, snapshot } => {
                assert_eq!(reason, DeathReason::SelfCollision);
                assert_eq!(snapshot.high_score, 4);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_commands_reach_session_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let shared_state = SharedState::new(tx);

        shared_state.send_direction(Direction::Up);
        shared_state.request_reset();
        shared_state.request_shutdown();

        assert_eq!(rx.try_recv().unwrap(), SessionCommand::SetDirection(Direction::Up));
        assert_eq!(rx.try_recv().unwrap(), SessionCommand::Reset);
        assert_eq!(rx.try_recv().unwrap(), SessionCommand::Shutdown);
    }
}
