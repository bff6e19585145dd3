//! 2D grid for the world.

use crate::cell::Cell;
use crate::snapshot::Snapshot;
use life_core::{Error, Position, Result, NEIGHBOR_OFFSETS};
use tracing::{debug, trace};

/// A 2D toroidal grid of double-buffered cells
#[derive(Debug, Clone)]
pub struct Grid {
    columns: i32,
    rows: i32,
    generation: u64,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(columns: i32, rows: i32) -> Result<Self> {
        if columns < 1 || rows < 1 {
            return Err(Error::InvalidDimensions { columns, rows });
        }

        // Cell indices are computed in i32, so the cell count must fit too.
        let size = columns
            .checked_mul(rows)
            .ok_or(Error::InvalidDimensions { columns, rows })? as usize;
        Ok(Self {
            columns,
            rows,
            generation: 0,
            cells: vec![Cell::dead(); size],
        })
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

    /// Mark a cell alive. Seeding an already-live cell is a no-op.
    pub fn seed_life(&mut self, pos: Position) -> Result<()> {
        let index = self.checked_index(pos)?;
        self.cells[index].set_alive();
        trace!(%pos, "seeded cell");
        Ok(())
    }

    /// Seed every position in order, stopping at the first one off the grid
    pub fn seed_all<I>(&mut self, positions: I) -> Result<()>
    where
        I: IntoIterator<Item = Position>,
    {
        for pos in positions {
            self.seed_life(pos)?;
        }
        Ok(())
    }

    pub fn is_alive(&self, pos: Position) -> Result<bool> {
        let index = self.checked_index(pos)?;
        Ok(self.cells[index].is_alive())
    }

    /// The eight neighbours of a position, wrapped onto the torus
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| pos.offset(dx, dy).wrap(self.columns, self.rows))
    }

    /// Number of live cells among the eight toroidal neighbours
    pub fn live_neighbors(&self, pos: Position) -> Result<usize> {
        self.checked_index(pos)?;
        Ok(self.count_live_neighbors(pos))
    }

    /// Compute one generation.
    ///
    /// Neighbour counts read only `current`; every rule writes only `next`, so
    /// the pass never observes state produced during the same advance.
    pub fn advance(&mut self) {
        for cell in &mut self.cells {
            cell.stage_baseline();
        }

        for index in 0..self.cells.len() {
            let pos = self.index_to_pos(index);
            let live = self.count_live_neighbors(pos);
            self.cells[index].stage_rule(live);
        }

        for cell in &mut self.cells {
            cell.commit();
        }

        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.population(),
            "advanced generation"
        );
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(Cell::is_alive)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Read-only copy of the current generation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.columns,
            self.rows,
            self.generation,
            self.cells.iter().map(Cell::is_alive).collect(),
        )
    }

    /// Iterator over all positions with their current state, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), cell.is_alive()))
    }

    fn count_live_neighbors(&self, pos: Position) -> usize {
        self.neighbors(pos)
            .filter(|&n| self.cells[self.pos_to_index(n)].is_alive())
            .count()
    }

    fn checked_index(&self, pos: Position) -> Result<usize> {
        if !pos.in_bounds(self.columns, self.rows) {
            return Err(Error::OutOfRange {
                x: pos.x,
                y: pos.y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self.pos_to_index(pos))
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        (pos.y * self.columns + pos.x) as usize
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.columns;
        let y = (index as i32) / self.columns;
        Position::new(x, y)
    }
}
