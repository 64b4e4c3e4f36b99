use std::time::Duration;

use clap::Parser;

/// Conway's Game of Life: draw a pattern, then play it forward and back.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of grid rows.
    #[arg(long, value_name = "ROWS", default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..=1_000))]
    rows: u64,
    /// Number of grid columns.
    #[arg(long, value_name = "COLUMNS", default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..=1_000))]
    cols: u64,
    /// Edge length of one cell on screen.
    #[arg(long = "cell-size", value_name = "PIXELS", default_value_t = 20.0)]
    pub cell_size: f32,
    /// Milliseconds between generations while playing.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = 200,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    tick_ms: u64,
    /// Skip the drawing phase and start from a random grid.
    #[arg(long)]
    pub random: bool,
    /// Keep at most this many past generations for stepping backward.
    #[arg(long = "history-limit", value_name = "GENERATIONS")]
    pub history_limit: Option<usize>,
}

impl Config {
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows as usize, self.cols as usize)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
