use std::collections::VecDeque;

use crate::grid::Grid;

/// Stack of earlier generations for stepping backward.
///
/// Unbounded unless built with [`History::with_limit`]; a bounded history
/// drops its oldest snapshot to make room for a new one.
#[derive(Debug, Default, Clone)]
pub struct History {
    snapshots: VecDeque<Grid>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `limit` of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        History {
            snapshots: VecDeque::with_capacity(limit.min(1024)),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Changes the cap, dropping the oldest snapshots that no longer fit.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        if let Some(limit) = limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
            }
        }
    }

    /// Stores an independent copy of `snapshot`.
    pub fn push(&mut self, snapshot: &Grid) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.snapshots.len() >= limit {
                self.snapshots.pop_front();
            }
        }
        self.snapshots.push_back(snapshot.clone());
    }

    pub fn pop(&mut self) -> Option<Grid> {
        self.snapshots.pop_back()
    }

    pub fn peek(&self) -> Option<&Grid> {
        self.snapshots.back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
