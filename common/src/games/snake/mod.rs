mod game_state;
mod score_store;
mod session;
mod settings;
mod snake;
mod types;

pub use game_state::SnakeGameState;
pub use score_store::{ConfigScoreStore, FileScoreStore, HighScoreRecord, MemoryScoreStore, ScoreStore};
pub use session::{SessionCommand, SnakeSession};
pub use settings::{
    SnakeSettings, DEFAULT_TICK_INTERVAL_MS, MAX_BOARD_SIZE, MAX_TICK_INTERVAL_MS, MIN_BOARD_SIZE,
    MIN_TICK_INTERVAL_MS,
};
pub use snake::Snake;
pub use types::{
    DeathReason, Direction, FoodPlacement, GameStatus, Position, SnakeSnapshot, TickOutcome,
    DEFAULT_BOARD_SIZE,
};
