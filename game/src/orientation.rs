//! Mapping of snake topology to cell tags.
//!
//! Every function here expects a well-formed snake, that is every two
//! consecutive points are orthogonal neighbours. Anything else is a bug in
//! the caller and panics instead of producing an empty cell.

use crate::{
    aux::{Direction, Point},
    grid::CellTag,
};

/// Return the tag of the body segment at `current`, given the segment closer
/// to the head (`prev`) and the one closer to the tail (`next`).
///
/// Corners are named after the two sides the neighbours are on, so a segment
/// with one neighbour above and one to the left is [`CellTag::BodyTopLeft`].
/// The result doesn't depend on which neighbour is `prev`.
///
/// # Panics
/// Panics if either neighbour isn't adjacent to `current` or both neighbours
/// are the same point.
pub fn classify_body(prev: Point, current: Point, next: Point) -> CellTag {
    use Direction::*;

    let a = side(current, prev);
    let b = side(current, next);

    match (a, b) {
        (Up, Down) | (Down, Up) => CellTag::BodyVertical,
        (Left, Right) | (Right, Left) => CellTag::BodyHorizontal,
        (Up, Left) | (Left, Up) => CellTag::BodyTopLeft,
        (Up, Right) | (Right, Up) => CellTag::BodyTopRight,
        (Down, Left) | (Left, Down) => CellTag::BodyBottomLeft,
        (Down, Right) | (Right, Down) => CellTag::BodyBottomRight,
        _ => panic!(
            "body segment {} has both neighbours at {} ({} and {})",
            current, prev, a, b
        ),
    }
}

/// Return the head tag for a snake moving in `direction`.
pub fn classify_head(direction: Direction) -> CellTag {
    match direction {
        Direction::Left => CellTag::HeadLeft,
        Direction::Right => CellTag::HeadRight,
        Direction::Up => CellTag::HeadUp,
        Direction::Down => CellTag::HeadDown,
    }
}

/// Return the tail tag given the last point of the snake and the one before
/// it. The tag names the way the tail sticks out of the body.
///
/// # Panics
/// Panics if the points aren't orthogonal neighbours.
pub fn classify_tail(tail: Point, tail_prev: Point) -> CellTag {
    match side(tail_prev, tail) {
        Direction::Up => CellTag::TailUp,
        Direction::Down => CellTag::TailDown,
        Direction::Left => CellTag::TailLeft,
        Direction::Right => CellTag::TailRight,
    }
}

/// Which side of `from` the neighbour `to` is on.
fn side(from: Point, to: Point) -> Direction {
    match Direction::between(from, to) {
        Some(direction) => direction,
        None => panic!("snake points {} and {} aren't adjacent", from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn straight_runs() {
        assert_eq!(classify_body(p(4, 7), p(3, 7), p(2, 7)), CellTag::BodyHorizontal);
        assert_eq!(classify_body(p(2, 7), p(3, 7), p(4, 7)), CellTag::BodyHorizontal);
        assert_eq!(classify_body(p(3, 6), p(3, 7), p(3, 8)), CellTag::BodyVertical);
        assert_eq!(classify_body(p(3, 8), p(3, 7), p(3, 6)), CellTag::BodyVertical);
    }

    #[test]
    fn corners() {
        let c = p(5, 5);
        let (up, down, left, right) = (p(5, 4), p(5, 6), p(4, 5), p(6, 5));

        assert_eq!(classify_body(up, c, left), CellTag::BodyTopLeft);
        assert_eq!(classify_body(left, c, up), CellTag::BodyTopLeft);
        assert_eq!(classify_body(up, c, right), CellTag::BodyTopRight);
        assert_eq!(classify_body(right, c, up), CellTag::BodyTopRight);
        assert_eq!(classify_body(down, c, left), CellTag::BodyBottomLeft);
        assert_eq!(classify_body(left, c, down), CellTag::BodyBottomLeft);
        assert_eq!(classify_body(down, c, right), CellTag::BodyBottomRight);
        assert_eq!(classify_body(right, c, down), CellTag::BodyBottomRight);
    }

    #[test]
    #[should_panic]
    fn body_with_gap() {
        classify_body(p(5, 3), p(5, 5), p(5, 6));
    }

    #[test]
    #[should_panic]
    fn body_folded_onto_itself() {
        classify_body(p(5, 4), p(5, 5), p(5, 4));
    }

    #[test]
    fn heads() {
        assert_eq!(classify_head(Direction::Left), CellTag::HeadLeft);
        assert_eq!(classify_head(Direction::Right), CellTag::HeadRight);
        assert_eq!(classify_head(Direction::Up), CellTag::HeadUp);
        assert_eq!(classify_head(Direction::Down), CellTag::HeadDown);
    }

    #[test]
    fn tails() {
        let prev = p(5, 5);

        assert_eq!(classify_tail(p(5, 6), prev), CellTag::TailDown);
        assert_eq!(classify_tail(p(5, 4), prev), CellTag::TailUp);
        assert_eq!(classify_tail(p(4, 5), prev), CellTag::TailLeft);
        assert_eq!(classify_tail(p(6, 5), prev), CellTag::TailRight);
    }

    #[test]
    #[should_panic]
    fn tail_on_body() {
        classify_tail(p(5, 5), p(5, 5));
    }
}
