//! Double-buffered cell state.

use serde::{Deserialize, Serialize};

/// One grid cell: the displayed state plus a staging slot for the next generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    current: bool,
    next: bool,
}

impl Cell {
    pub fn dead() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.current
    }

    pub(crate) fn set_alive(&mut self) {
        self.current = true;
    }

    /// Reset the staging slot to the current state before a neighbour pass
    pub(crate) fn stage_baseline(&mut self) {
        self.next = self.current;
    }

    /// Apply B3/S23 to the staging slot given the live neighbour count
    pub(crate) fn stage_rule(&mut self, live_neighbors: usize) {
        if self.current && !(2..=3).contains(&live_neighbors) {
            self.next = false;
        }
        if !self.current && live_neighbors == 3 {
            self.next = true;
        }
    }

    pub(crate) fn commit(&mut self) {
        self.current = self.next;
    }
}
