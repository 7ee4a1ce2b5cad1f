//! Food placement.

use crate::{aux::Point, grid::Grid};
use rand::{seq::SliceRandom, Rng};

/// Pick a uniformly random empty cell of `grid` for new food.
///
/// Return `None` if the grid has no empty cell left.
pub fn place_food<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Point> {
    let food = grid.empty_cells().choose(rng).copied();
    match food {
        Some(point) => log::trace!("Food placed at {}", point),
        None => log::debug!("No empty cell left for food"),
    }
    food
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellTag;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn lands_on_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(5);
        for x in 0..5 {
            for y in 0..4 {
                grid.set(Point::new(x, y), CellTag::BodyHorizontal);
            }
        }

        for _ in 0..50 {
            let food = place_food(&grid, &mut rng).unwrap();
            assert_eq!(food.y, 4);
            assert_eq!(grid.get(food), Some(CellTag::Empty));
        }
    }

    #[test]
    fn only_one_choice() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(5);
        for (point, _) in grid.clone().cells() {
            if point != Point::new(2, 3) {
                grid.set(point, CellTag::BodyVertical);
            }
        }

        assert_eq!(place_food(&grid, &mut rng), Some(Point::new(2, 3)));
    }

    #[test]
    fn full_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(5);
        for (point, _) in grid.clone().cells() {
            grid.set(point, CellTag::BodyVertical);
        }

        assert_eq!(place_food(&grid, &mut rng), None);
    }
}
