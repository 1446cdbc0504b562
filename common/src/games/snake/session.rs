use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::games::{SessionRng, SnapshotBroadcaster};
use crate::log;
use super::game_state::SnakeGameState;
use super::score_store::ScoreStore;
use super::settings::SnakeSettings;
use super::types::{Direction, SnakeSnapshot, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    SetDirection(Direction),
    Reset,
    Shutdown,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Owns the game until `Shutdown` arrives or every command sender is
    /// dropped, then returns the last snapshot.
    ///
    /// Commands are handled between ticks, never during one. The tick timer
    /// only exists while the game is running: it is dropped on game over and
    /// recreated by `Reset`.
    pub async fn run<B, S>(
        settings: SnakeSettings,
        store: Arc<S>,
        broadcaster: B,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    ) -> SnakeSnapshot
    where
        B: SnapshotBroadcaster,
        S: ScoreStore + ?Sized + 'static,
    {
        let mut rng = settings.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
        let mut state = SnakeGameState::new(&settings, store.read_high_score(), &mut rng);
        log!(
            "Snake session started: {}x{} board, tick {}ms, seed {}, high score {}",
            settings.board_size,
            settings.board_size,
            settings.tick_interval.as_millis(),
            rng.seed(),
            state.high_score()
        );

        broadcaster.broadcast_snapshot(state.snapshot()).await;
        let mut timer = Some(Self::start_timer(settings.tick_interval));

        loop {
            tokio::select! {
                _ = Self::next_tick(&mut timer) => {
                    let outcome = state.tick(&mut rng, store.as_ref());
                    if outcome == TickOutcome::Idle {
                        continue;
                    }

                    let snapshot = state.snapshot();
                    broadcaster.broadcast_snapshot(snapshot.clone()).await;

                    if let TickOutcome::GameOver(reason) = outcome {
                        timer = None;
                        broadcaster.broadcast_game_over(snapshot, reason).await;
                    }
                }
                command = command_rx.recv() => {
                    match command {
                        Some(SessionCommand::SetDirection(direction)) => {
                            state.set_direction(direction);
                        }
                        Some(SessionCommand::Reset) => {
                            state.reset(&mut rng);
                            timer = Some(Self::start_timer(settings.tick_interval));
                            log!("Game reset, high score {}", state.high_score());
                            broadcaster.broadcast_snapshot(state.snapshot()).await;
                        }
                        Some(SessionCommand::Shutdown) | None => break,
                    }
                }
            }
        }

        log!("Snake session stopped at score {}", state.score());
        state.snapshot()
    }

    fn start_timer(period: Duration) -> Interval {
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    }

    async fn next_tick(timer: &mut Option<Interval>) {
        match timer {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}
