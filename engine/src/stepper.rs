use crate::grid::CellState::{self, Alive, Dead};
use crate::grid::Grid;
use crate::neighbors::count_live_neighbors;

/// Compute the next generation into a fresh grid.
///
/// Every neighbor count is taken against `grid`, which is left untouched.
pub fn next_generation(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next_cells = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let alive_neighbors = count_live_neighbors(grid, row, col);
            next_cells.push(apply_rule(grid[(row, col)], alive_neighbors));
        }
    }

    log::trace!("computed next generation of {rows}x{cols} grid");
    Grid::from_cells(rows, cols, next_cells)
}

/// Apply Game of Life rules to one cell.
pub fn apply_rule(state: CellState, alive_neighbors: usize) -> CellState {
    match (state, alive_neighbors) {
        (Alive, 2..=3) => Alive, // Survives
        (Dead, 3) => Alive,      // Becomes alive
        _ => Dead,               // Dies or remains dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            let survives = matches!(n, 2 | 3);
            assert_eq!(apply_rule(Alive, n) == Alive, survives, "alive with {n}");
            assert_eq!(apply_rule(Dead, n) == Alive, n == 3, "dead with {n}");
        }
    }

    #[test]
    fn dead_grid_stays_dead() {
        let grid = Grid::empty(6, 9).unwrap();
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn plus_shape_on_three_by_three() {
        let plus = Grid::from_picture(&[
            ".#.", //
            "###",
            ".#.",
        ]);
        // Corners see three live in-bounds neighbors and are born; edge cells see
        // three and survive; the center sees four and dies.
        let expected = Grid::from_picture(&[
            "###", //
            "#.#",
            "###",
        ]);
        assert_eq!(count_live_neighbors(&plus, 0, 0), 3);
        assert_eq!(count_live_neighbors(&plus, 0, 1), 3);
        assert_eq!(count_live_neighbors(&plus, 1, 1), 4);
        assert_eq!(next_generation(&plus), expected);
    }

    #[test]
    fn input_is_not_mutated() {
        let blinker = Grid::from_picture(&[".....", "..#..", "..#..", "..#..", "....."]);
        let before = blinker.clone();
        let next = next_generation(&blinker);
        assert_eq!(blinker, before);
        assert_eq!(next, Grid::from_picture(&[".....", ".....", ".###.", ".....", "....."]));
    }

    #[test]
    fn update_is_synchronous() {
        // An in-place row-major update would let (0, 1) see its freshly killed
        // left neighbor and turn this into something other than a blinker.
        let horizontal = Grid::from_picture(&["###", "...", "..."]);
        assert_eq!(next_generation(&horizontal), Grid::from_picture(&[".#.", ".#.", "..."]));
    }

    proptest! {
        #[test]
        fn next_generation_is_deterministic(rows in 1usize..16, cols in 1usize..16, seed in any::<u64>()) {
            let grid = Grid::random_with(rows, cols, &mut StdRng::seed_from_u64(seed)).unwrap();
            let first = next_generation(&grid);
            prop_assert_eq!(first.dimensions(), grid.dimensions());
            prop_assert_eq!(next_generation(&grid), first);
        }
    }
}
