//! Simulation driver: shows each generation, advances, stops when life runs out.

use crate::grid::Grid;
use crate::snapshot::Snapshot;
use life_core::RunConfig;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every cell died; `generation` is the grid's generation at that point
    Extinct { generation: u64 },
    /// The generation budget ran out with life remaining
    Survived { generations: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub outcome: Outcome,
    pub final_population: usize,
}

pub struct Simulation {
    grid: Grid,
    config: RunConfig,
}

impl Simulation {
    pub fn new(grid: Grid, config: RunConfig) -> Self {
        Self { grid, config }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Run for at most `config.generations` frames, handing each one to `on_frame`
    /// before it is advanced.
    #[instrument(skip(self, on_frame), fields(generations = self.config.generations))]
    pub fn run<F>(&mut self, mut on_frame: F) -> SimulationResult
    where
        F: FnMut(&Snapshot),
    {
        info!(
            columns = self.grid.columns(),
            rows = self.grid.rows(),
            population = self.grid.population(),
            "Starting simulation"
        );

        let delay = Duration::from_millis(self.config.frame_delay_ms);

        for _ in 0..self.config.generations {
            on_frame(&self.grid.snapshot());
            self.grid.advance();

            if self.grid.is_empty() {
                let generation = self.grid.generation();
                info!(generation, "All life died");
                return SimulationResult {
                    outcome: Outcome::Extinct { generation },
                    final_population: 0,
                };
            }

            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        debug!(population = self.grid.population(), "Generation budget exhausted");
        SimulationResult {
            outcome: Outcome::Survived {
                generations: self.config.generations,
            },
            final_population: self.grid.population(),
        }
    }
}
