use crate::games::SessionRng;
use crate::log;
use super::score_store::ScoreStore;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, FoodPlacement, GameStatus, Position, SnakeSnapshot, TickOutcome};

/// Complete state of one game. Mutated only through `set_direction`, `tick`
/// and `reset`.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    board_size: i32,
    start_position: Position,
    food_placement: FoodPlacement,
    snake: Snake,
    food: Position,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    high_score: u32,
    new_high_score: bool,
    status: GameStatus,
    tick: u64,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, high_score: u32, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(settings.start_position);
        let food = Self::spawn_food(settings.board_size, settings.food_placement, &snake, rng);

        Self {
            board_size: settings.board_size,
            start_position: settings.start_position,
            food_placement: settings.food_placement,
            snake,
            food,
            direction: Direction::Neutral,
            pending_direction: None,
            score: 0,
            high_score,
            new_high_score: false,
            status: GameStatus::Running,
            tick: 0,
        }
    }

    /// Queues `direction` for the next tick. Reversals of the direction the
    /// snake last moved in, `Neutral`, and anything after game over are
    /// ignored; the return value says whether the intent was kept.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.status.is_running()
            || direction == Direction::Neutral
            || direction.is_opposite(&self.direction)
        {
            return false;
        }

        self.pending_direction = Some(direction);
        true
    }

    /// Advances the game by one step.
    ///
    /// Until the first direction arrives the effective direction is
    /// `Neutral` and the tick does nothing: the snake stays put and cannot
    /// eat food lying under its own head. Applying the zero delta instead
    /// would grow the snake in place and end the game on the next tick.
    pub fn tick<S: ScoreStore + ?Sized>(&mut self, rng: &mut SessionRng, store: &S) -> TickOutcome {
        if !self.status.is_running() {
            return TickOutcome::Idle;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        if self.direction == Direction::Neutral {
            return TickOutcome::Idle;
        }

        self.tick += 1;
        let next_head = self.snake.head().offset(self.direction);

        if let Err(reason) = self.check_collision(next_head) {
            self.status = GameStatus::GameOver(reason);
            log!(
                "Game over after {} ticks: snake {} at ({}, {}), score {}",
                self.tick,
                reason.describe(),
                next_head.x,
                next_head.y,
                self.score
            );
            return TickOutcome::GameOver(reason);
        }

        if next_head != self.food {
            self.snake.advance(next_head);
            return TickOutcome::Moved;
        }

        self.snake.grow(next_head);
        self.score += 1;
        self.food = Self::spawn_food(self.board_size, self.food_placement, &self.snake, rng);
        log!(
            "Ate food at ({}, {}). Score: {}. Next food at ({}, {})",
            next_head.x,
            next_head.y,
            self.score,
            self.food.x,
            self.food.y
        );

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
            self.new_high_score = true;
            store.write_high_score(self.high_score);
            log!("New high score: {}", self.high_score);
        }

        TickOutcome::AteFood { new_high_score }
    }

    /// Starts a fresh game on the same board. The high score carries over.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(self.start_position);
        self.food = Self::spawn_food(self.board_size, self.food_placement, &self.snake, rng);
        self.direction = Direction::Neutral;
        self.pending_direction = None;
        self.score = 0;
        self.new_high_score = false;
        self.status = GameStatus::Running;
        self.tick = 0;
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            board_size: self.board_size,
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            status: self.status,
            tick: self.tick,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    fn check_collision(&self, next_head: Position) -> Result<(), DeathReason> {
        if !next_head.is_on_board(self.board_size) {
            return Err(DeathReason::WallCollision);
        }
        // Checked against the body before this tick's move, so the tail
        // still counts even though it is about to leave.
        if self.snake.body_contains(&next_head) {
            return Err(DeathReason::SelfCollision);
        }
        Ok(())
    }

    fn spawn_food(board_size: i32, placement: FoodPlacement, snake: &Snake, rng: &mut SessionRng) -> Position {
        if placement == FoodPlacement::AvoidSnake {
            let free: Vec<Position> = (1..=board_size)
                .flat_map(|y| (1..=board_size).map(move |x| Position::new(x, y)))
                .filter(|pos| !snake.contains(pos))
                .collect();
            if !free.is_empty() {
                return free[rng.random_range(0..free.len())];
            }
        }

        Position::new(
            rng.random_range(1..=board_size),
            rng.random_range(1..=board_size),
        )
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, segments: &[Position], direction: Direction, food: Position) {
        self.snake = Snake::from_segments(segments);
        self.direction = direction;
        self.pending_direction = None;
        self.food = food;
    }
}
