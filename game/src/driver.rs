//! Fixed-timestep driver.
//!
//! The host calls [`Driver::frame`] from its frame callback with the current
//! monotonic time. The driver accumulates elapsed time and runs the
//! simulation once per whole tick interval, so the game runs at the same
//! speed whatever the frame rate is. After a slow frame several ticks run
//! back to back to catch up.

use std::time::Duration;

/// Something advanced one step at a time by a [`Driver`].
pub trait Ticker {
	/// Run a single step. Return `true` if the simulation is finished and
	/// shouldn't be ticked anymore.
	fn tick(&mut self) -> bool;
}

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
	/// Ticks fire as time passes.
	Running,

	/// The simulation reported it's finished. No ticks fire until
	/// [`Driver::reset`].
	Finished,
}

/// What happened during a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
	/// Amount of ticks run.
	pub ticks: usize,

	/// Whether the host should schedule another frame callback.
	pub next_frame: bool,
}

/// Runs a [`Ticker`] at a fixed rate from variable rate frame callbacks.
#[derive(Debug, Clone)]
pub struct Driver {
	tick_interval: Duration,
	previous: Option<Duration>,
	accumulator: Duration,
	state: DriverState,
}

impl Driver {
	/// Return a running driver ticking every `tick_interval`.
	///
	/// # Panics
	/// Panics if `tick_interval` is zero.
	pub fn new(tick_interval: Duration) -> Self {
		assert!(!tick_interval.is_zero(), "tick interval should be greater than zero");
		Self {
			tick_interval,
			previous: None,
			accumulator: Duration::ZERO,
			state: DriverState::Running,
		}
	}

	/// Handle a frame callback at time `now` and run as many ticks of
	/// `ticker` as the elapsed time allows.
	///
	/// The first call only records the time. Time going backwards counts as
	/// no time passing.
	pub fn frame<T: Ticker + ?Sized>(&mut self, now: Duration, ticker: &mut T) -> Frame {
		if self.state == DriverState::Finished {
			return Frame {
				ticks: 0,
				next_frame: false,
			};
		}

		let delta = match self.previous {
			Some(previous) => now.saturating_sub(previous),
			None => Duration::ZERO,
		};
		self.previous = Some(now);
		self.accumulator += delta;

		let mut ticks = 0;
		while self.accumulator >= self.tick_interval {
			self.accumulator -= self.tick_interval;
			ticks += 1;
			if ticker.tick() {
				log::debug!("Simulation finished after {} tick(s) this frame", ticks);
				self.state = DriverState::Finished;
				self.accumulator = Duration::ZERO;
				break;
			}
		}
		if ticks > 1 {
			log::trace!("Caught up with {} ticks in one frame", ticks);
		}

		Frame {
			ticks,
			next_frame: self.state == DriverState::Running,
		}
	}

	/// Make the driver live again, as if no frame was seen yet.
	pub fn reset(&mut self) {
		self.previous = None;
		self.accumulator = Duration::ZERO;
		self.state = DriverState::Running;
	}

	/// Return driver state.
	pub fn state(&self) -> DriverState {
		self.state
	}

	/// Return `true` while the host should keep delivering frames.
	pub fn is_running(&self) -> bool {
		self.state == DriverState::Running
	}

	/// Return the fixed tick interval.
	pub fn tick_interval(&self) -> Duration {
		self.tick_interval
	}
}
