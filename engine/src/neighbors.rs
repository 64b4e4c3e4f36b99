use crate::grid::Grid;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the number of alive neighbors for a cell.
///
/// Offsets that land outside the grid are skipped, so corner cells have
/// three candidate neighbors and non-corner edge cells five.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    neighbor_positions(grid, row, col)
        .filter(|&position| grid[position].is_alive())
        .count()
}

/// In-bounds neighbor coordinates of `(row, col)`, excluding the cell itself.
pub fn neighbor_positions(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let neighbor_row = row.checked_add_signed(dr)?;
        let neighbor_col = col.checked_add_signed(dc)?;
        grid.contains(neighbor_row, neighbor_col)
            .then_some((neighbor_row, neighbor_col))
    })
}
