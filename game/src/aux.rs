//! Auxiliary abstractions.

use crate::error::*;
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// Grid point abstraction.
///
/// Note that the origin is the top left cell of the board, so X grows to the
/// right and Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Point {
    /// Column.
    pub x: i32,

    /// Row.
    pub y: i32,
}

impl Point {
    /// Return a new [`Point`].
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return `true` if `other` is exactly one step away horizontally or
    /// vertically.
    pub fn is_adjacent(self, other: Point) -> bool {
        let d = self - other;
        d.x.abs() + d.y.abs() == 1
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl ops::Add<Direction> for Point {
    type Output = Self;

    fn add(self, direction: Direction) -> Self::Output {
        direction.move_point(self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left.
    Left,

    /// Right.
    Right,

    /// Up.
    Up,

    /// Down.
    Down,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Return the unit vector of the direction.
    pub const fn delta(self) -> Point {
        match self {
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
        }
    }

    /// Return opposite direction.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Return `true` if `other` points the other way.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Return `point` shifted one step in this direction.
    pub fn move_point(self, point: Point) -> Point {
        let delta = self.delta();
        Point::new(point.x + delta.x, point.y + delta.y)
    }

    /// Return the direction leading from `from` to the adjacent `to`, or
    /// `None` if they aren't orthogonal neighbours.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|direction| direction.delta() == d)
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Right
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            _ => Err(ParseDirectionError),
        }
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_sum() {
        let p1 = Point::new(10, 15);
        let p2 = Point::new(-5, 3);

        assert_eq!(p1 + p2, Point::new(5, 18));
        assert_eq!(p1 - p2, Point::new(15, 12));
    }

    #[test]
    fn move_uses_screen_axes() {
        let p = Point::new(3, 7);

        assert_eq!(Direction::Right.move_point(p), Point::new(4, 7));
        assert_eq!(Direction::Left.move_point(p), Point::new(2, 7));
        assert_eq!(Direction::Up.move_point(p), Point::new(3, 6));
        assert_eq!(Direction::Down.move_point(p), Point::new(3, 8));
        assert_eq!(p + Direction::Down, Point::new(3, 8));
    }

    #[test]
    fn move_and_back() {
        let p = Point::new(-2, 9);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().move_point(direction.move_point(p)), p);
        }
    }

    #[test]
    fn opposite_is_symmetric() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(a.is_opposite(b), b.is_opposite(a), "{} vs {}", a, b);
            }
            assert!(!a.is_opposite(a));
        }
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn dir_neg() {
        assert_eq!(Direction::Left, -Direction::Right);
        assert_eq!(Direction::Right, -Direction::Left);
        assert_eq!(Direction::Down, -Direction::Up);
        assert_eq!(Direction::Up, -Direction::Down);
    }

    #[test]
    fn dir_from_str() {
        assert_eq!(Direction::Up, "up".parse().unwrap());
        assert_eq!(Direction::Down, "down".parse().unwrap());
        assert_eq!(Direction::Left, "left".parse().unwrap());
        assert_eq!(Direction::Right, "right".parse().unwrap());
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_between_neighbours() {
        let p = Point::new(5, 5);

        assert_eq!(Direction::between(p, Point::new(5, 4)), Some(Direction::Up));
        assert_eq!(Direction::between(p, Point::new(6, 5)), Some(Direction::Right));
        assert_eq!(Direction::between(p, Point::new(6, 6)), None);
        assert_eq!(Direction::between(p, p), None);
        assert!(p.is_adjacent(Point::new(4, 5)));
        assert!(!p.is_adjacent(Point::new(3, 5)));
    }
}
