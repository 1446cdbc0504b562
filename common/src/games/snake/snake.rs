use std::collections::VecDeque;

use super::types::Position;

/// Snake body, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(start_pos: Position) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Position]) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: segments.iter().copied().collect(),
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.body.contains(pos)
    }

    /// True if `pos` is covered by any segment except the head.
    pub fn body_contains(&self, pos: &Position) -> bool {
        self.body.iter().skip(1).any(|segment| segment == pos)
    }

    pub fn advance(&mut self, new_head: Position) {
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    pub fn grow(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }
}
