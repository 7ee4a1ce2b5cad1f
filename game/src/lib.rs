//! Snake game simulation crate.
//!
//! [`Game`] keeps a [`Board`](board::Board) together with the pending input
//! and the direction the snake is heading. Hosts feed it direction changes
//! with [`Game::turn`] and drive it with a [`Driver`](driver::Driver), then
//! draw [`Board::grid`](board::Board::grid) however they like.

pub mod aux;
pub mod board;
pub mod driver;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod orientation;
pub mod score;
pub mod snake;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		aux::*,
		board::{Board, Outcome},
		driver::{Driver, DriverState, Frame, Ticker},
		grid::{CellTag, Grid},
		input::direction_for_key,
		score::{record_high_score, JsonFileStore, MemoryStore, ScoreStore},
		Difficulty, Game, Settings,
	};
}

use aux::Direction;
use board::Board;
use driver::Ticker;
use error::{GameError, ParseDifficultyError};
use input::InputQueue;
use rand::{rngs::StdRng, SeedableRng};
use std::{fmt, str::FromStr, time::Duration};

/// A single game session.
#[derive(Debug, Clone)]
pub struct Game {
	board: Board,
	queue: InputQueue,
	direction: Direction,
	settings: Settings,
	rng: StdRng,
}

impl Game {
	/// Direction the snake starts moving in.
	pub const DIRECTION: Direction = Direction::Right;

	/// Return a new [`Game`] with food placed from an entropy seeded generator.
	pub fn new(settings: Settings) -> Result<Self> {
		Self::with_rng(settings, StdRng::from_entropy())
	}

	/// Return a new [`Game`] whose food placement is fully determined by
	/// `seed`.
	pub fn with_seed(settings: Settings, seed: u64) -> Result<Self> {
		Self::with_rng(settings, StdRng::seed_from_u64(seed))
	}

	fn with_rng(settings: Settings, mut rng: StdRng) -> Result<Self> {
		settings.validate()?;
		log::info!(
			"Starting {}x{} game, tick every {:?}",
			settings.size,
			settings.size,
			settings.tick_interval
		);
		Ok(Self {
			board: Board::new(settings.size, &mut rng),
			queue: InputQueue::new(settings.queue_bound),
			direction: Self::DIRECTION,
			settings,
			rng,
		})
	}

	/// Ask the snake to turn to `direction` on one of the next ticks. Return
	/// `true` if the request was queued.
	pub fn turn(&mut self, direction: Direction) -> bool {
		!self.board.is_finished() && self.queue.enqueue(direction, self.direction)
	}

	/// Apply the oldest pending turn, advance the board by one tick and
	/// return it.
	pub fn step(&mut self) -> &Board {
		if !self.board.is_finished() {
			if let Some(direction) = self.queue.dequeue() {
				self.direction = direction;
			}
			self.board = self.board.tick(self.direction, &mut self.rng);
		}
		&self.board
	}

	/// Throw the current board away and start over.
	pub fn reset(&mut self) {
		log::info!("Restarting game with score {}", self.board.score());
		self.board = Board::new(self.settings.size, &mut self.rng);
		self.queue.clear();
		self.direction = Self::DIRECTION;
	}

	/// Return the current board.
	pub fn board(&self) -> &Board {
		&self.board
	}

	/// Return the direction the snake moved in on the last tick.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Return pending turns.
	pub fn queue(&self) -> &InputQueue {
		&self.queue
	}

	/// Return current score.
	pub fn score(&self) -> u32 {
		self.board.score()
	}

	/// Return `true` if the game is over.
	pub fn is_finished(&self) -> bool {
		self.board.is_finished()
	}

	/// Return game [`settings`](Settings).
	pub fn settings(&self) -> &Settings {
		&self.settings
	}
}

impl Ticker for Game {
	fn tick(&mut self) -> bool {
		self.step().is_finished()
	}
}

/// Game settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Length of the board side.
	pub size: usize,

	/// Game time of a single tick.
	pub tick_interval: Duration,

	/// How many turns may wait for the next ticks.
	pub queue_bound: usize,
}

impl Settings {
	/// Default board size.
	pub const SIZE: usize = 15;

	/// Smallest board which fits the initial snake with room to turn.
	pub const MIN_SIZE: usize = 5;

	/// Default tick interval.
	pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

	/// Default amount of turns which may wait for the next ticks.
	pub const QUEUE_BOUND: usize = InputQueue::BOUND;

	/// Check that a game can be played with these settings.
	pub fn validate(&self) -> std::result::Result<(), GameError> {
		if self.size < Self::MIN_SIZE {
			Err(GameError::BoardTooSmall(self.size))
		} else if self.tick_interval.is_zero() {
			Err(GameError::ZeroTickInterval)
		} else if self.queue_bound == 0 {
			Err(GameError::ZeroQueueBound)
		} else {
			Ok(())
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			size: Self::SIZE,
			tick_interval: Self::TICK_INTERVAL,
			queue_bound: Self::QUEUE_BOUND,
		}
	}
}

impl From<Difficulty> for Settings {
	fn from(difficulty: Difficulty) -> Self {
		Self {
			size: difficulty.size(),
			tick_interval: difficulty.tick_interval(),
			..Self::default()
		}
	}
}

/// Difficulty tier. Harder games use a bigger board and a faster snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
	Easy,
	Medium,
	Hard,
}

impl Difficulty {
	/// Return length of the board side.
	pub fn size(self) -> usize {
		match self {
			Self::Easy => 10,
			Self::Medium => 12,
			Self::Hard => 14,
		}
	}

	/// Return game time of a single tick.
	pub fn tick_interval(self) -> Duration {
		match self {
			Self::Easy => Duration::from_millis(150),
			Self::Medium => Duration::from_millis(120),
			Self::Hard => Duration::from_millis(90),
		}
	}
}

impl Default for Difficulty {
	fn default() -> Self {
		Self::Easy
	}
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let lower_case = format!("{:?}", self).to_lowercase();
		write!(f, "{}", lower_case)
	}
}

impl FromStr for Difficulty {
	type Err = ParseDifficultyError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"easy" => Ok(Self::Easy),
			"medium" => Ok(Self::Medium),
			"hard" => Ok(Self::Hard),
			_ => Err(ParseDifficultyError),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::{aux::Point, board::Outcome, driver::Driver, grid::CellTag};

	fn settings(size: usize) -> Settings {
		Settings {
			size,
			..Settings::default()
		}
	}

	#[test]
	fn invalid_settings() {
		assert!(matches!(
			Game::new(settings(4)).unwrap_err().downcast_ref::<GameError>(),
			Some(GameError::BoardTooSmall(4))
		));

		let zero_tick = Settings {
			tick_interval: Duration::ZERO,
			..Settings::default()
		};
		assert_eq!(zero_tick.validate(), Err(GameError::ZeroTickInterval));

		let zero_queue = Settings {
			queue_bound: 0,
			..Settings::default()
		};
		assert_eq!(zero_queue.validate(), Err(GameError::ZeroQueueBound));
		assert_eq!(settings(5).validate(), Ok(()));
	}

	#[test]
	fn difficulty() {
		assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
		assert!("insane".parse::<Difficulty>().is_err());
		assert_eq!(Difficulty::Hard.to_string(), "hard");

		let hard = Settings::from(Difficulty::Hard);
		assert_eq!(hard.size, 14);
		assert_eq!(hard.tick_interval, Duration::from_millis(90));
		assert_eq!(hard.queue_bound, Settings::QUEUE_BOUND);
		assert!(Difficulty::Easy.tick_interval() > Difficulty::Hard.tick_interval());
	}

	#[test]
	fn turns_are_applied_one_per_tick() -> crate::Result<()> {
		let mut game = Game::with_seed(settings(15), 9)?;

		assert!(game.turn(Direction::Up));
		assert!(game.turn(Direction::Left));
		assert!(!game.turn(Direction::Down), "queue is full");

		game.step();
		assert_eq!(game.direction(), Direction::Up);
		assert_eq!(game.board().snake().head(), Point::new(3, 6));
		assert_eq!(game.board().grid().get(Point::new(3, 6)), Some(CellTag::HeadUp));

		game.step();
		assert_eq!(game.direction(), Direction::Left);
		assert_eq!(game.board().snake().head(), Point::new(2, 6));

		game.step();
		assert_eq!(game.direction(), Direction::Left);
		assert_eq!(game.board().snake().head(), Point::new(1, 6));
		assert!(game.queue().is_empty());

		Ok(())
	}

	#[test]
	fn quick_reversal_is_refused() -> crate::Result<()> {
		let mut game = Game::with_seed(settings(15), 1)?;

		assert!(!game.turn(Direction::Left));
		assert!(game.turn(Direction::Up));
		assert!(!game.turn(Direction::Down));
		game.step();
		game.step();

		assert!(!game.is_finished());
		Ok(())
	}

	#[test]
	fn reset_starts_over() -> crate::Result<()> {
		let mut game = Game::with_seed(settings(10), 5)?;
		game.turn(Direction::Up);
		while !game.is_finished() {
			game.step();
		}
		assert!(!game.turn(Direction::Left));

		game.reset();
		assert!(!game.is_finished());
		assert_eq!(game.score(), 0);
		assert_eq!(game.direction(), Direction::Right);
		assert!(game.queue().is_empty());
		assert_eq!(game.board().snake().head(), Point::new(3, 5));

		Ok(())
	}

	#[test]
	fn grid_matches_snake_every_tick() -> crate::Result<()> {
		let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];
		for seed in 0..20 {
			let mut game = Game::with_seed(settings(8), seed)?;
			let mut tick = 0;
			while !game.is_finished() && tick < 500 {
				if tick % 3 == 0 {
					game.turn(turns[(tick / 3 + seed as usize) % turns.len()]);
				}
				let before = game.board().clone();
				let board = game.step();
				tick += 1;

				assert_eq!(board.snake().len(), board.grid().snake_parts());
				assert!(board.snake().is_connected());
				if board.is_finished() {
					if board.outcome() != Some(Outcome::BoardFull) {
						assert_eq!(board.snake(), before.snake());
					}
					continue;
				}
				let food = board.food().unwrap();
				assert!(!board.snake().contains(food));
				assert_eq!(board.grid().get(food), Some(CellTag::Pickup));

				if board.score() == before.score() {
					assert_eq!(board.snake().len(), before.snake().len());
				} else {
					assert_eq!(board.score(), before.score() + 1);
					assert_eq!(board.snake().len(), before.snake().len() + 1);
				}
			}
		}
		Ok(())
	}

	#[test]
	fn driven_game_stops_on_wall() -> crate::Result<()> {
		let settings = settings(10);
		let interval = settings.tick_interval;
		let mut game = Game::with_seed(settings, 2)?;
		game.turn(Direction::Up);
		let mut driver = Driver::new(interval);

		let mut now = Duration::ZERO;
		let mut frames = 0;
		while driver.frame(now, &mut game).next_frame {
			now += Duration::from_millis(16);
			frames += 1;
			assert!(frames < 10_000, "game never finished");
		}

		assert!(game.is_finished());
		assert_eq!(game.board().outcome(), Some(Outcome::WallCollision));
		assert_eq!(game.board().snake().head(), Point::new(3, 0));
		Ok(())
	}
}
