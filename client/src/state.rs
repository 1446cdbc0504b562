use snake_common::games::snake::{DeathReason, Direction, SessionCommand, SnakeSnapshot};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum AppState {
    Starting,
    Playing { snapshot: SnakeSnapshot },
    GameOver { snapshot: SnakeSnapshot, reason: DeathReason },
}

/// Shared between the egui thread and the session runtime thread.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
}

impl SharedState {
    pub fn new(command_tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Starting)),
            command_tx,
        }
    }

    pub fn get_state(&self) -> AppState {
        match self.state.lock() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_state(&self, state: AppState) {
        match self.state.lock() {
            Ok(mut current) => *current = state,
            Err(poisoned) => *poisoned.into_inner() = state,
        }
    }

    pub fn send_direction(&self, direction: Direction) {
        self.send(SessionCommand::SetDirection(direction));
    }

    pub fn request_reset(&self) {
        self.send(SessionCommand::Reset);
    }

    pub fn request_shutdown(&self) {
        self.send(SessionCommand::Shutdown);
    }

    fn send(&self, command: SessionCommand) {
        // A closed channel means the session is already gone.
        let _ = self.command_tx.send(command);
    }
}
