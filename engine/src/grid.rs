use std::fmt;
use std::ops::Index;

use rand::Rng;

use crate::error::{GridError, Result};
use crate::grid::CellState::{Alive, Dead};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

/// Fixed-size rectangle of cells stored row-major in one buffer.
///
/// `Clone` is a deep copy, so a cloned grid never observes later edits to
/// the grid it was cloned from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Every cell starts `Dead`.
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![Dead; rows * cols],
        })
    }

    /// Every cell is independently `Alive` or `Dead` with equal probability.
    pub fn random(rows: usize, cols: usize) -> Result<Self> {
        Self::random_with(rows, cols, &mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let cells = (0..rows * cols)
            .map(|_| if rng.random_bool(0.5) { Alive } else { Dead })
            .collect();
        Ok(Grid { rows, cols, cells })
    }

    /// Builds a grid from rows of `#` (alive) and `.` (dead). Handy for fixtures.
    ///
    /// # Panics
    ///
    /// Panics on ragged rows, an empty picture or any other character.
    pub fn from_picture(picture: &[&str]) -> Self {
        let rows = picture.len();
        let cols = picture.first().map_or(0, |row| row.len());
        assert!(rows > 0 && cols > 0, "picture must not be empty");

        let mut cells = Vec::with_capacity(rows * cols);
        for row in picture {
            assert_eq!(row.len(), cols, "ragged picture row {row:?}");
            cells.extend(row.chars().map(|ch| match ch {
                '#' => Alive,
                '.' => Dead,
                other => panic!("unexpected picture character {other:?}"),
            }));
        }
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        let index = self.checked_index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState> {
        let index = self.checked_index(row, col)?;
        let toggled = self.cells[index].toggled();
        self.cells[index] = toggled;
        Ok(toggled)
    }

    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Rows in order, each a slice of exactly `cols` cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.cols)
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells }
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if !self.contains(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Unchecked read for the engine's own loops; panics out of range.
impl Index<(usize, usize)> for Grid {
    type Output = CellState;

    fn index(&self, (row, col): (usize, usize)) -> &CellState {
        assert!(self.contains(row, col), "cell ({row}, {col}) outside {}x{} grid", self.rows, self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
