//! Snake abstractions.

use crate::aux::*;
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};

/// Snake body: points ordered from the head (index 0) to the tail.
///
/// Every two consecutive points are orthogonal neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// Length of a freshly placed snake.
    pub const INITIAL_LENGTH: usize = 3;

    /// Return a snake made of `points`, head first.
    ///
    /// # Panics
    /// Panics if fewer than three points are given or two consecutive points
    /// aren't adjacent.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let snake = Self {
            body: points.into_iter().collect(),
        };
        assert!(
            snake.len() >= Self::INITIAL_LENGTH,
            "snake needs at least {} parts, got {}",
            Self::INITIAL_LENGTH,
            snake.len()
        );
        assert!(snake.is_connected(), "snake parts aren't adjacent: {:?}", snake.body);
        snake
    }

    /// Return the starting snake for a board with `size` side: three
    /// horizontal parts in the middle row facing right, with the tail one
    /// cell away from the left wall.
    pub fn initial(size: usize) -> Self {
        let row = (size / 2) as i32;
        Self::new((1..=Self::INITIAL_LENGTH as i32).rev().map(|x| Point::new(x, row)))
    }

    /// Return the head.
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Return the tail.
    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    /// Return the part at `index` counting from the head.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.body.get(index).copied()
    }

	/// Return snake's length (amount of parts).
	pub fn len(&self) -> usize {
		self.body.len()
	}

	/// Return true if snake has zero length, false otherwise.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

    /// Return `true` if any part of the snake lies at `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Iterate over parts from the head to the tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, Point> {
        self.body.iter()
    }

    /// Put a new head in front of the current one.
    pub(crate) fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
    }

    /// Drop the tail and return it.
    pub(crate) fn pop_tail(&mut self) -> Option<Point> {
        self.body.pop_back()
    }

    /// Check that every two consecutive parts are neighbours.
    pub fn is_connected(&self) -> bool {
        self.body
            .iter()
            .zip(self.body.iter().skip(1))
            .all(|(a, b)| a.is_adjacent(*b))
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = &'a Point;
    type IntoIter = vec_deque::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_placement() {
        let snake = Snake::initial(15);
        let parts: Vec<Point> = snake.iter().copied().collect();

        assert_eq!(parts, [Point::new(3, 7), Point::new(2, 7), Point::new(1, 7)]);
        assert_eq!(snake.head(), Point::new(3, 7));
        assert_eq!(snake.tail(), Point::new(1, 7));
        assert_eq!(Snake::initial(10).head(), Point::new(3, 5));
    }

    #[test]
    fn grow_and_shrink() {
        let mut snake = Snake::initial(10);
        snake.push_head(Point::new(4, 5));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.pop_tail(), Some(Point::new(1, 5)));
        assert_eq!(snake.len(), 3);
        assert!(snake.is_connected());
        assert!(snake.contains(Point::new(4, 5)));
        assert!(!snake.contains(Point::new(1, 5)));
    }

    #[test]
    #[should_panic]
    fn too_short() {
        Snake::new([Point::new(1, 1), Point::new(2, 1)]);
    }

    #[test]
    #[should_panic]
    fn disconnected() {
        Snake::new([Point::new(1, 1), Point::new(2, 1), Point::new(4, 1)]);
    }
}
