//! Drawing phase: an all-dead grid the user edits before the simulation starts.

use crate::error::Result;
use crate::grid::CellState::{Alive, Dead};
use crate::grid::Grid;

#[derive(Debug, Clone)]
pub struct PatternEditor {
    grid: Grid,
}

impl PatternEditor {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(PatternEditor {
            grid: Grid::empty(rows, cols)?,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Click: flip one cell.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.toggle(row, col)?;
        Ok(())
    }

    /// Drag: bring a dead cell to life, leave live cells alone.
    /// Returns whether the cell changed.
    pub fn paint(&mut self, row: usize, col: usize) -> Result<bool> {
        if self.grid.get(row, col)? == Alive {
            return Ok(false);
        }
        self.grid.set(row, col, Alive)?;
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.grid.fill(Dead);
    }

    /// Maps a pixel offset from the grid's top-left corner to the cell under it.
    pub fn cell_at(&self, x: f32, y: f32, cell_size: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
            return None;
        }
        let (row, col) = ((y / cell_size) as usize, (x / cell_size) as usize);
        self.grid.contains(row, col).then_some((row, col))
    }

    /// Hands the drawn grid over, ending the drawing phase.
    pub fn finish(self) -> Grid {
        log::info!("pattern finished with {} live cells", self.grid.live_count());
        self.grid
    }
}
