use serde::{Deserialize, Serialize};

pub const DEFAULT_BOARD_SIZE: i32 = 30;

/// Board coordinate. Both axes are 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_on_board(self, board_size: i32) -> bool {
        (1..=board_size).contains(&self.x) && (1..=board_size).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Neutral,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Neutral => (0, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl DeathReason {
    pub fn describe(&self) -> &'static str {
        match self {
            DeathReason::WallCollision => "hit the wall",
            DeathReason::SelfCollision => "ran into itself",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(DeathReason),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPlacement {
    /// Any cell, independently per axis. Food may land on the snake.
    #[default]
    Uniform,
    /// Any cell not covered by the snake.
    AvoidSnake,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game already over, or no direction chosen yet.
    Idle,
    Moved,
    AteFood { new_high_score: bool },
    GameOver(DeathReason),
}

/// Read-only copy of the game handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSnapshot {
    pub board_size: i32,
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    /// The stored best was beaten during this game, not merely tied.
    pub new_high_score: bool,
    pub status: GameStatus,
    pub tick: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Neutral.is_opposite(&Direction::Right));
        assert!(!Direction::Right.is_opposite(&Direction::Neutral));
    }

    #[test]
    fn test_board_bounds_are_one_indexed() {
        assert!(Position::new(1, 1).is_on_board(30));
        assert!(Position::new(30, 30).is_on_board(30));
        assert!(!Position::new(0, 5).is_on_board(30));
        assert!(!Position::new(5, 31).is_on_board(30));
    }

    #[test]
    fn test_offset_uses_screen_coordinates() {
        let p = Position::new(5, 5);
        assert_eq!(p.offset(Direction::Up), Position::new(5, 4));
        assert_eq!(p.offset(Direction::Down), Position::new(5, 6));
        assert_eq!(p.offset(Direction::Left), Position::new(4, 5));
        assert_eq!(p.offset(Direction::Right), Position::new(6, 5));
        assert_eq!(p.offset(Direction::Neutral), p);
    }
}
