//! Seed patterns for populating a fresh grid.

use crate::grid::Grid;
use life_core::{Error, Position, RandomConfig, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// A named set of live cells, relative to an origin
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    pub fn positions(&self, origin: Position) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| origin.offset(dx, dy))
    }

    /// Seed the pattern with its top-left corner at `origin`
    pub fn apply(&self, grid: &mut Grid, origin: Position) -> Result<()> {
        grid.seed_all(self.positions(origin))?;
        debug!(pattern = self.name, %origin, "applied pattern");
        Ok(())
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// The built-in demonstration run: a glider and a vertical blinker
pub struct Sample;

impl Sample {
    pub const COLUMNS: i32 = 40;
    pub const ROWS: i32 = 20;
    pub const CELLS: &'static [(i32, i32)] = &[
        (5, 5),
        (6, 6),
        (6, 7),
        (5, 7),
        (4, 7),
        (10, 10),
        (10, 11),
        (10, 12),
    ];

    pub fn grid() -> Result<Grid> {
        let mut grid = Grid::new(Self::COLUMNS, Self::ROWS)?;
        grid.seed_all(Self::CELLS.iter().copied().map(Position::from))?;
        Ok(grid)
    }
}

/// Seed each cell alive with probability `density`; returns the number seeded
pub fn random_soup(grid: &mut Grid, config: &RandomConfig) -> Result<usize> {
    if !(0.0..=1.0).contains(&config.density) {
        return Err(Error::Config(format!(
            "density must be within [0, 1], got {}",
            config.density
        )));
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seeded = 0;

    for y in 0..grid.rows() {
        for x in 0..grid.columns() {
            if rng.gen_bool(config.density) {
                grid.seed_life(Position::new(x, y))?;
                seeded += 1;
            }
        }
    }

    info!(seed, density = config.density, seeded, "seeded random soup");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_grid() {
        let grid = Sample::grid().unwrap();
        assert_eq!(grid.columns(), 40);
        assert_eq!(grid.rows(), 20);
        assert_eq!(grid.population(), Sample::CELLS.len());
    }

    #[test]
    fn test_pattern_apply_offsets_origin() {
        let mut grid = Grid::new(10, 10).unwrap();
        BLOCK.apply(&mut grid, Position::new(7, 2)).unwrap();
        for (x, y) in [(7, 2), (8, 2), (7, 3), (8, 3)] {
            assert!(grid.is_alive(Position::new(x, y)).unwrap());
        }
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_pattern_apply_off_grid_fails() {
        let mut grid = Grid::new(10, 10).unwrap();
        assert!(BLINKER.apply(&mut grid, Position::new(8, 0)).is_err());
    }

    #[test]
    fn test_random_soup_is_reproducible() {
        let config = RandomConfig {
            density: 0.4,
            seed: Some(42),
        };

        let mut first = Grid::new(20, 20).unwrap();
        let mut second = Grid::new(20, 20).unwrap();
        let seeded = random_soup(&mut first, &config).unwrap();
        random_soup(&mut second, &config).unwrap();

        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(first.population(), seeded);
        assert!(seeded > 0);
        assert!(seeded < 400);
    }

    #[test]
    fn test_random_soup_density_extremes() {
        let mut grid = Grid::new(10, 10).unwrap();
        let empty = RandomConfig {
            density: 0.0,
            seed: Some(1),
        };
        assert_eq!(random_soup(&mut grid, &empty).unwrap(), 0);
        assert!(grid.is_empty());

        let full = RandomConfig {
            density: 1.0,
            seed: Some(1),
        };
        assert_eq!(random_soup(&mut grid, &full).unwrap(), 100);
    }

    #[test]
    fn test_random_soup_rejects_density_out_of_range() {
        let mut grid = Grid::new(10, 10).unwrap();
        for density in [1.5, -0.1, f64::NAN] {
            let config = RandomConfig {
                density,
                seed: Some(1),
            };
            assert!(matches!(
                random_soup(&mut grid, &config),
                Err(Error::Config(_))
            ));
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_catalogue_names() {
        let names: Vec<_> = [BLINKER, BLOCK, GLIDER].iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Blinker", "Block", "Glider"]);
    }
}
