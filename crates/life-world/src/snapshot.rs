//! Read-only view of one generation, handed to renderers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    columns: i32,
    rows: i32,
    generation: u64,
    /// Row-major alive flags
    cells: Vec<bool>,
}

impl Snapshot {
    pub(crate) fn new(columns: i32, rows: i32, generation: u64, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), columns as usize * rows as usize);
        Self {
            columns,
            rows,
            generation,
            cells,
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Coordinates outside the grid read as dead
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        if !(0..self.columns).contains(&x) || !(0..self.rows).contains(&y) {
            return false;
        }
        self.cells[(y * self.columns + x) as usize]
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// One slice per grid row, top to bottom
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.columns as usize)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_slices() {
        let snapshot = Snapshot::new(3, 2, 4, vec![true, false, false, false, false, true]);
        let rows: Vec<_> = snapshot.row_slices().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[true, false, false]);
        assert_eq!(rows[1], &[false, false, true]);
        assert_eq!(snapshot.generation(), 4);
    }

    #[test]
    fn test_out_of_range_reads_dead() {
        let snapshot = Snapshot::new(2, 2, 0, vec![true; 4]);
        assert!(snapshot.is_alive(1, 1));
        assert!(!snapshot.is_alive(2, 0));
        assert!(!snapshot.is_alive(0, -1));
    }
}
