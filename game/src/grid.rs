//! Game grid abstractions.
//!
//! Grid is a square table of [`CellTag`]s indexed by [`Point`]s, where (0, 0)
//! is the top left cell, X-axis is going right and Y-axis is going down.

use crate::aux::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What is drawn in a single grid cell.
///
/// Snake part variants describe which way a segment is oriented, so a
/// renderer can pick the matching sprite without looking at the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellTag {
	/// Nothing.
	Empty,

	/// Food.
	Pickup,

	/// Board edge. Never stamped by the game itself.
	Edge,

	BodyVertical,
	BodyHorizontal,
	BodyTopLeft,
	BodyTopRight,
	BodyBottomLeft,
	BodyBottomRight,

	HeadUp,
	HeadDown,
	HeadLeft,
	HeadRight,

	TailUp,
	TailDown,
	TailLeft,
	TailRight,
}

impl CellTag {
	/// Every tag in declaration order.
	pub const ALL: [CellTag; 17] = [
		Self::Empty,
		Self::Pickup,
		Self::Edge,
		Self::BodyVertical,
		Self::BodyHorizontal,
		Self::BodyTopLeft,
		Self::BodyTopRight,
		Self::BodyBottomLeft,
		Self::BodyBottomRight,
		Self::HeadUp,
		Self::HeadDown,
		Self::HeadLeft,
		Self::HeadRight,
		Self::TailUp,
		Self::TailDown,
		Self::TailLeft,
		Self::TailRight,
	];

	/// Return `true` if the cell holds a head, body or tail segment.
	pub fn is_snake_part(self) -> bool {
		!matches!(self, Self::Empty | Self::Pickup | Self::Edge)
	}

	/// Return path of the sprite used for the tag, relative to the asset
	/// root, or `None` if nothing should be drawn.
	pub fn asset(self) -> Option<&'static str> {
		match self {
			Self::Empty | Self::Edge => None,
			Self::Pickup => Some("assets/apple.png"),
			Self::BodyVertical => Some("assets/body_vertical.png"),
			Self::BodyHorizontal => Some("assets/body_horizontal.png"),
			Self::BodyTopLeft => Some("assets/body_topleft.png"),
			Self::BodyTopRight => Some("assets/body_topright.png"),
			Self::BodyBottomLeft => Some("assets/body_bottomleft.png"),
			Self::BodyBottomRight => Some("assets/body_bottomright.png"),
			Self::HeadUp => Some("assets/head_up.png"),
			Self::HeadDown => Some("assets/head_down.png"),
			Self::HeadLeft => Some("assets/head_left.png"),
			Self::HeadRight => Some("assets/head_right.png"),
			Self::TailUp => Some("assets/tail_up.png"),
			Self::TailDown => Some("assets/tail_down.png"),
			Self::TailLeft => Some("assets/tail_left.png"),
			Self::TailRight => Some("assets/tail_right.png"),
		}
	}

	/// Return a character used to draw the tag in text mode.
	pub fn glyph(self) -> char {
		match self {
			Self::Empty => '·',
			Self::Pickup => '●',
			Self::Edge => '#',
			Self::BodyVertical => '║',
			Self::BodyHorizontal => '═',
			Self::BodyTopLeft => '╝',
			Self::BodyTopRight => '╚',
			Self::BodyBottomLeft => '╗',
			Self::BodyBottomRight => '╔',
			Self::HeadUp => '▲',
			Self::HeadDown => '▼',
			Self::HeadLeft => '◀',
			Self::HeadRight => '▶',
			Self::TailUp | Self::TailDown => '╿',
			Self::TailLeft | Self::TailRight => '╼',
		}
	}
}

impl Default for CellTag {
	fn default() -> Self {
		Self::Empty
	}
}

/// Game grid. In other words, `size × size` table of [`CellTag`]s stored row
/// by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
	size: usize,
	cells: Vec<CellTag>,
}

impl Grid {
	/// Return a new [`Grid`] filled with [`CellTag::Empty`].
	pub fn new(size: usize) -> Self {
		Self {
			size,
			cells: vec![CellTag::Empty; size * size],
		}
	}

	/// Return length of the grid side.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Return `true` if `point` lies on the grid.
	pub fn contains(&self, point: Point) -> bool {
		let size = self.size as i32;
		(0..size).contains(&point.x) && (0..size).contains(&point.y)
	}

	fn index(&self, point: Point) -> Option<usize> {
		self.contains(point)
			.then(|| point.y as usize * self.size + point.x as usize)
	}

	/// Return tag at `point` or `None` if it's off the grid.
	pub fn get(&self, point: Point) -> Option<CellTag> {
		self.index(point).map(|i| self.cells[i])
	}

	/// Stamp `tag` at `point`.
	///
	/// # Panics
	/// Panics if `point` is off the grid.
	pub fn set(&mut self, point: Point, tag: CellTag) {
		match self.index(point) {
			Some(i) => self.cells[i] = tag,
			None => panic!("{} is outside of {}x{} grid", point, self.size, self.size),
		}
	}

	/// Reset every cell to [`CellTag::Empty`].
	pub fn clear(&mut self) {
		self.cells.fill(CellTag::Empty);
	}

	/// Iterate over grid rows from top to bottom.
	pub fn rows(&self) -> impl Iterator<Item = &[CellTag]> {
		self.cells.chunks(self.size.max(1))
	}

	/// Iterate over all cells with their coordinates.
	pub fn cells(&self) -> impl Iterator<Item = (Point, CellTag)> + '_ {
		let size = self.size;
		self.cells.iter().enumerate().map(move |(i, tag)| {
			(Point::new((i % size) as i32, (i / size) as i32), *tag)
		})
	}

	/// Return coordinates of every empty cell, row by row.
	pub fn empty_cells(&self) -> Vec<Point> {
		self.cells()
			.filter(|(_, tag)| *tag == CellTag::Empty)
			.map(|(point, _)| point)
			.collect()
	}

	/// Return number of cells which hold a snake part.
	pub fn snake_parts(&self) -> usize {
		self.cells.iter().filter(|tag| tag.is_snake_part()).count()
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in self.rows() {
			let line: String = row.iter().map(|tag| tag.glyph()).collect();
			writeln!(f, "{}", line)?;
		}
		Ok(())
	}
}
