/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Cells beyond the edge of the grid do not exist: they are neither counted nor wrapped.
*/

pub mod controller;
pub mod editor;
pub mod error;
pub mod grid;
pub mod history;
pub mod neighbors;
pub mod stepper;

pub use controller::{Controller, RunState};
pub use editor::PatternEditor;
pub use error::{GridError, Result};
pub use grid::{CellState, Grid};
pub use history::History;
pub use neighbors::count_live_neighbors;
pub use stepper::next_generation;
