//! Best score persistence.
//!
//! The game itself never reads stored scores. Hosts pass a [`ScoreStore`] in
//! and report the final score with [`record_high_score`] once a game ends.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::{
	fs,
	io::ErrorKind,
	path::{Path, PathBuf},
};

/// Place where the best score is kept between games.
pub trait ScoreStore {
	/// Return the stored best score, zero if none was saved yet.
	fn load(&self) -> Result<u32>;

	/// Replace the stored best score.
	fn save(&mut self, score: u32) -> Result<()>;
}

/// Save `score` to `store` if it beats the stored one. Return `true` if it
/// did.
pub fn record_high_score<S: ScoreStore + ?Sized>(store: &mut S, score: u32) -> Result<bool> {
	let best = store.load()?;
	if score > best {
		log::info!("New high score {} (was {})", score, best);
		store.save(score)?;
		Ok(true)
	} else {
		Ok(false)
	}
}

/// Contents of the score file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
struct ScoreFile {
	high_score: u32,
}

/// [`ScoreStore`] keeping the score in a json file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	/// Default score file name.
	pub const FILE_NAME: &'static str = "snake_scores.json";

	/// Return a store backed by the file at `path`. The file is created on
	/// first save.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Return path of the score file.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ScoreStore for JsonFileStore {
	fn load(&self) -> Result<u32> {
		match fs::read_to_string(&self.path) {
			Ok(content) => Ok(serde_json::from_str::<ScoreFile>(&content)?.high_score),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
			Err(e) => Err(e.into()),
		}
	}

	fn save(&mut self, score: u32) -> Result<()> {
		let content = serde_json::to_string_pretty(&ScoreFile { high_score: score })?;
		fs::write(&self.path, content)?;
		Ok(())
	}
}

/// [`ScoreStore`] living only as long as the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
	best: u32,
}

impl ScoreStore for MemoryStore {
	fn load(&self) -> Result<u32> {
		Ok(self.best)
	}

	fn save(&mut self, score: u32) -> Result<()> {
		self.best = score;
		Ok(())
	}
}
