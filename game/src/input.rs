//! Pending direction changes.

use crate::aux::Direction;
use std::collections::VecDeque;

/// Key name which turns the snake left.
pub const ARROW_LEFT: &str = "ArrowLeft";

/// Key name which turns the snake right.
pub const ARROW_RIGHT: &str = "ArrowRight";

/// Key name which turns the snake up.
pub const ARROW_UP: &str = "ArrowUp";

/// Key name which turns the snake down.
pub const ARROW_DOWN: &str = "ArrowDown";

/// Map a host key name to a direction. Return `None` for keys which don't
/// steer the snake.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        ARROW_LEFT => Some(Direction::Left),
        ARROW_RIGHT => Some(Direction::Right),
        ARROW_UP => Some(Direction::Up),
        ARROW_DOWN => Some(Direction::Down),
        _ => None,
    }
}

/// Bounded FIFO of direction changes waiting for the next ticks.
///
/// A change is only accepted if it actually turns the snake relative to the
/// last direction it will be moving in, so a quick double key press can't
/// reverse the snake into itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
    bound: usize,
}

impl InputQueue {
    /// Default maximum amount of pending changes.
    pub const BOUND: usize = 2;

    /// Return an empty queue holding at most `bound` changes.
    pub fn new(bound: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(bound),
            bound,
        }
    }

    /// Direction the snake will be moving in once every pending change is
    /// applied.
    pub fn effective_direction(&self, committed: Direction) -> Direction {
        self.pending.back().copied().unwrap_or(committed)
    }

    /// Queue `candidate` unless the queue is full or `candidate` equals or
    /// reverses the effective direction. Return `true` if it was queued.
    pub fn enqueue(&mut self, candidate: Direction, committed: Direction) -> bool {
        let last = self.effective_direction(committed);
        if self.pending.len() >= self.bound || candidate == last || candidate.is_opposite(last) {
            log::trace!("Ignored {} turn, heading {}", candidate, last);
            return false;
        }
        self.pending.push_back(candidate);
        true
    }

    /// Take the oldest pending change.
    pub fn dequeue(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    /// Drop every pending change.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Return amount of pending changes.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Return `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Return maximum amount of pending changes.
    pub fn bound(&self) -> usize {
        self.bound
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new(Self::BOUND)
    }
}
