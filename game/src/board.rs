//! Board state and the single-tick transition.

use crate::{
	aux::{Direction, Point},
	food::place_food,
	grid::{CellTag, Grid},
	orientation::{classify_body, classify_head, classify_tail},
	snake::Snake,
};
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a game has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
	/// The head left the board.
	WallCollision,

	/// The head ran into the snake's own body.
	SelfCollision,

	/// The snake covers every cell, so there's nowhere to put food. This is
	/// a win.
	BoardFull,
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::WallCollision => write!(f, "hit the wall"),
			Self::SelfCollision => write!(f, "bit itself"),
			Self::BoardFull => write!(f, "filled the board"),
		}
	}
}

/// Complete snapshot of a game: snake, rendered grid, food, score and
/// whether the game is over.
///
/// A board is replaced as a whole on every tick, see [`Board::tick`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Board {
	snake: Snake,
	grid: Grid,
	food: Option<Point>,
	score: u32,
	outcome: Option<Outcome>,
}

impl Board {
	/// Return a fresh board with `size` side: the initial snake facing right
	/// and one food on a random empty cell.
	pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
		let snake = Snake::initial(size);
		let mut grid = draw(size, &snake, Direction::Right, None);
		let food = place_food(&grid, rng);
		if let Some(food) = food {
			grid.set(food, CellTag::Pickup);
		}
		Self {
			snake,
			grid,
			outcome: food.is_none().then(|| Outcome::BoardFull),
			food,
			score: 0,
		}
	}

	/// Return a running board made of the given parts. `heading` is the
	/// direction the head is drawn facing.
	///
	/// # Panics
	/// Panics if the snake leaves the board or `food` is off the board or
	/// under the snake.
	pub fn from_parts(size: usize, snake: Snake, heading: Direction, food: Point) -> Self {
		let grid = Grid::new(size);
		assert!(
			snake.iter().all(|part| grid.contains(*part)),
			"snake doesn't fit on {}x{} board",
			size,
			size
		);
		assert!(
			grid.contains(food) && !snake.contains(food),
			"food at {} must be on an empty cell",
			food
		);
		Self {
			grid: draw(size, &snake, heading, Some(food)),
			snake,
			food: Some(food),
			score: 0,
			outcome: None,
		}
	}

	/// Advance the board by one step with the snake heading in `direction`
	/// and return the resulting board.
	///
	/// If the new head leaves the board or lands on the snake, the result is
	/// this board marked as finished. A finished board is returned unchanged.
	pub fn tick<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> Self {
		if self.is_finished() {
			return self.clone();
		}

		let size = self.grid.size();
		let head = direction.move_point(self.snake.head());

		let collision = if !self.grid.contains(head) {
			Some(Outcome::WallCollision)
		} else if self.snake.contains(head) {
			Some(Outcome::SelfCollision)
		} else {
			None
		};
		if let Some(outcome) = collision {
			log::info!("Snake {} at {} with score {}", outcome, head, self.score);
			return Self {
				outcome: Some(outcome),
				..self.clone()
			};
		}

		let mut snake = self.snake.clone();
		snake.push_head(head);

		if self.food == Some(head) {
			let score = self.score + 1;
			log::debug!("Food eaten at {}. Score: {}", head, score);

			let mut grid = draw(size, &snake, direction, None);
			let food = place_food(&grid, rng);
			match food {
				Some(food) => grid.set(food, CellTag::Pickup),
				None => log::info!("Snake {} with score {}", Outcome::BoardFull, score),
			}
			Self {
				snake,
				grid,
				outcome: food.is_none().then(|| Outcome::BoardFull),
				food,
				score,
			}
		} else {
			snake.pop_tail();
			Self {
				grid: draw(size, &snake, direction, self.food),
				snake,
				food: self.food,
				score: self.score,
				outcome: None,
			}
		}
	}

	/// Return length of the board side.
	pub fn size(&self) -> usize {
		self.grid.size()
	}

	/// Return the snake.
	pub fn snake(&self) -> &Snake {
		&self.snake
	}

	/// Return the rendered grid.
	pub fn grid(&self) -> &Grid {
		&self.grid
	}

	/// Return food position. It's `None` only when the board is full.
	pub fn food(&self) -> Option<Point> {
		self.food
	}

	/// Return amount of eaten food.
	pub fn score(&self) -> u32 {
		self.score
	}

	/// Return why the game finished, if it did.
	pub fn outcome(&self) -> Option<Outcome> {
		self.outcome
	}

	/// Return `true` if no further ticks change the board.
	pub fn is_finished(&self) -> bool {
		self.outcome.is_some()
	}
}

/// Render `snake` and `food` onto a fresh grid.
fn draw(size: usize, snake: &Snake, heading: Direction, food: Option<Point>) -> Grid {
	let mut grid = Grid::new(size);
	if let Some(food) = food {
		grid.set(food, CellTag::Pickup);
	}

	grid.set(snake.head(), classify_head(heading));
	for (prev, current, next) in snake.iter().copied().tuple_windows::<(_, _, _)>() {
		grid.set(current, classify_body(prev, current, next));
	}
	if let Some(tail_prev) = snake.len().checked_sub(2).and_then(|i| snake.get(i)) {
		grid.set(snake.tail(), classify_tail(snake.tail(), tail_prev));
	}

	grid
}
