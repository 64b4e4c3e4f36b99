use std::fmt;

use crate::error::Result;
use crate::grid::Grid;
use crate::history::History;
use crate::stepper::next_generation;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Paused => f.write_str("paused"),
            RunState::Running => f.write_str("running"),
        }
    }
}

/// Play/pause/step state machine around the current grid and its history.
///
/// Starts `Paused`. Manual steps only apply while paused; `tick` only
/// advances while running. Every advance, manual or automatic, pushes the
/// previous generation so it can be stepped back to later.
#[derive(Debug, Clone)]
pub struct Controller {
    current: Grid,
    history: History,
    state: RunState,
    generation: u64,
}

impl Controller {
    /// Takes ownership of a starting grid, typically one drawn in a
    /// [`PatternEditor`](crate::editor::PatternEditor).
    pub fn new(grid: Grid) -> Self {
        let (rows, cols) = grid.dimensions();
        log::info!("controller created for {rows}x{cols} grid with {} live cells", grid.live_count());
        Controller {
            current: grid,
            history: History::new(),
            state: RunState::Paused,
            generation: 0,
        }
    }

    pub fn random(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::new(Grid::random(rows, cols)?))
    }

    /// Caps the history depth; older generations are forgotten once full.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history.set_limit(Some(limit));
        self
    }

    pub fn current_grid(&self) -> &Grid {
        &self.current
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_step_backward(&self) -> bool {
        self.state == RunState::Paused && !self.history.is_empty()
    }

    pub fn play(&mut self) {
        self.transition(RunState::Running);
    }

    pub fn pause(&mut self) {
        self.transition(RunState::Paused);
    }

    pub fn toggle_running(&mut self) {
        match self.state {
            RunState::Paused => self.play(),
            RunState::Running => self.pause(),
        }
    }

    /// Advances one generation if paused. Returns whether anything happened.
    pub fn step_forward(&mut self) -> bool {
        if self.state != RunState::Paused {
            return false;
        }
        self.advance();
        true
    }

    /// Restores the previous generation if paused and one is recorded.
    pub fn step_backward(&mut self) -> bool {
        if self.state != RunState::Paused {
            return false;
        }
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                self.generation = self.generation.saturating_sub(1);
                log::debug!("stepped back to generation {}, {} left in history", self.generation, self.history.len());
                true
            }
            None => false,
        }
    }

    /// Scheduler hook: advances one generation while running.
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        self.history.push(&self.current);
        self.current = next_generation(&self.current);
        self.generation += 1;
        log::trace!("generation {}: {} live cells", self.generation, self.current.live_count());
    }

    fn transition(&mut self, to: RunState) {
        if self.state != to {
            log::debug!("simulation {} -> {} at generation {}", self.state, to, self.generation);
            self.state = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::Alive;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn blinker() -> Grid {
        Grid::from_picture(&[".....", "..#..", "..#..", "..#..", "....."])
    }

    #[test]
    fn starts_paused_with_empty_history() {
        let controller = Controller::new(blinker());
        assert_eq!(controller.run_state(), RunState::Paused);
        assert_eq!(controller.history_len(), 0);
        assert_eq!(controller.generation(), 0);
        assert!(!controller.can_step_backward());
    }

    #[test]
    fn play_and_pause_are_idempotent() {
        let mut controller = Controller::new(blinker());
        controller.pause();
        assert_eq!(controller.run_state(), RunState::Paused);
        controller.play();
        controller.play();
        assert!(controller.is_running());
        controller.toggle_running();
        assert_eq!(controller.run_state(), RunState::Paused);
    }

    #[test]
    fn step_forward_then_backward_restores_grid() {
        let mut controller = Controller::new(blinker());
        assert!(controller.step_forward());
        assert_eq!(controller.generation(), 1);
        assert_ne!(controller.current_grid(), &blinker());
        assert!(controller.step_backward());
        assert_eq!(controller.current_grid(), &blinker());
        assert_eq!(controller.generation(), 0);
        assert_eq!(controller.history_len(), 0);
    }

    #[test]
    fn step_backward_on_empty_history_is_a_noop() {
        let mut controller = Controller::new(blinker());
        assert!(!controller.step_backward());
        assert_eq!(controller.current_grid(), &blinker());
    }

    #[test]
    fn manual_steps_are_ignored_while_running() {
        let mut controller = Controller::new(blinker());
        controller.step_forward();
        controller.play();
        let before = controller.current_grid().clone();
        assert!(!controller.step_forward());
        assert!(!controller.step_backward());
        assert!(!controller.can_step_backward());
        assert_eq!(controller.current_grid(), &before);
        assert_eq!(controller.history_len(), 1);
    }

    #[test]
    fn tick_only_advances_while_running() {
        let mut controller = Controller::new(blinker());
        assert!(!controller.tick());
        assert_eq!(controller.generation(), 0);

        controller.play();
        for _ in 0..5 {
            assert!(controller.tick());
        }
        assert_eq!(controller.generation(), 5);
        assert_eq!(controller.history_len(), 5);

        controller.pause();
        for _ in 0..5 {
            assert!(controller.step_backward());
        }
        assert_eq!(controller.current_grid(), &blinker());
        assert!(!controller.step_backward());
    }

    #[test]
    fn history_limit_keeps_newest_snapshots() {
        let glider = Grid::from_picture(&[".#......", "..#.....", "###.....", "........", "........", "........"]);
        let mut generations = vec![glider.clone()];
        for _ in 0..4 {
            let next = next_generation(generations.last().unwrap());
            generations.push(next);
        }

        let mut controller = Controller::new(glider);
        for _ in 0..4 {
            controller.step_forward();
        }
        let mut controller = controller.with_history_limit(2);
        assert_eq!(controller.history_len(), 2);
        assert!(controller.step_backward());
        assert_eq!(controller.current_grid(), &generations[3]);
        assert!(controller.step_backward());
        assert_eq!(controller.current_grid(), &generations[2]);
        assert!(!controller.step_backward());
    }

    #[test]
    fn edits_to_a_returned_clone_do_not_reach_history() {
        let mut controller = Controller::new(blinker());
        controller.step_forward();
        let mut copy = controller.current_grid().clone();
        copy.set(0, 0, Alive).unwrap();
        controller.step_backward();
        assert_eq!(controller.current_grid(), &blinker());
    }

    #[test]
    fn random_rejects_zero_size() {
        assert!(Controller::random(0, 10).is_err());
        let controller = Controller::random(8, 6).unwrap();
        assert_eq!(controller.current_grid().dimensions(), (8, 6));
    }

    proptest! {
        #[test]
        fn forward_backward_round_trip(rows in 1usize..10, cols in 1usize..10, seed in any::<u64>(), steps in 1usize..6) {
            let start = Grid::random_with(rows, cols, &mut StdRng::seed_from_u64(seed)).unwrap();
            let mut controller = Controller::new(start.clone());
            for _ in 0..steps {
                prop_assert!(controller.step_forward());
            }
            for _ in 0..steps {
                prop_assert!(controller.step_backward());
            }
            prop_assert_eq!(controller.current_grid(), &start);
        }
    }
}
