//! Interactive console front end for the toroidal Game of Life.

mod prompt;
mod render;
mod telemetry;

use anyhow::Result;
use life_core::LifeConfig;
use life_world::patterns::{self, Sample};
use life_world::{Grid, Simulation};
use prompt::{MenuChoice, Prompter};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const INTRO: &str = "
\t\t****** Welcome to Conway's Game of Life *****

\tConway's Game of Life is a simulated world in which beings
\tplaced on a 2 dimensional grid live, die and are born based
\tupon simple adjacency rules.  It is a zero player game in which
\tthe initial configuration determines all subsequent generations.
\tThe grid wraps around, so beings leaving one edge re-enter on
\tthe opposite one.

\tSee Wikipedia \"Conway's Game of Life\" for more information

";

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let config = LifeConfig::load()?;
    info!(?config, "Configuration loaded");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    write!(prompter.output(), "{}", INTRO)?;
    writeln!(
        prompter.output(),
        "\tEach emulation runs for {} generations in the console.\n",
        config.run.generations
    )?;

    let Some(grid) = setup_grid(&mut prompter, &config)? else {
        writeln!(prompter.output(), "\n\n\t\t   ***** Goodbye *****\n")?;
        return Ok(());
    };

    let mut simulation = Simulation::new(grid, config.run.clone());
    let stdout = prompter.output();
    let mut write_error = None;
    let result = simulation.run(|snapshot| {
        if write_error.is_some() {
            return;
        }
        let frame = render::render_frame(snapshot, &config.render);
        if let Err(e) = write!(stdout, "\n{}", frame).and_then(|_| stdout.flush()) {
            write_error = Some(e);
        }
    });
    if let Some(e) = write_error {
        return Err(e.into());
    }

    writeln!(stdout, "\n\n{}\n", render::render_outcome(&result.outcome))?;
    writeln!(stdout, "\n\t**** Thanks for playing!!!  Goodbye. ****\n")?;

    Ok(())
}

/// Ask which run to perform and build its seeded grid. `None` means the user quit.
fn setup_grid<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &LifeConfig,
) -> Result<Option<Grid>> {
    let Some(choice) = prompter.menu_choice()? else {
        return Ok(None);
    };

    match choice {
        MenuChoice::Sample => Ok(Some(Sample::grid()?)),
        MenuChoice::Custom => {
            let Some((width, height)) = prompter.dimensions(&config.bounds)? else {
                return Ok(None);
            };
            let empty = Grid::new(width, height)?;

            loop {
                let Some(cells) = prompter.coordinates()? else {
                    return Ok(None);
                };

                let mut grid = empty.clone();
                match grid.seed_all(cells) {
                    Ok(()) => return Ok(Some(grid)),
                    Err(e) => {
                        warn!(error = %e, "rejected seed coordinates");
                        writeln!(
                            prompter.output(),
                            "\n{}, try again (or type q to quit)",
                            e
                        )?;
                    }
                }
            }
        }
        MenuChoice::Random => {
            let Some((width, height)) = prompter.dimensions(&config.bounds)? else {
                return Ok(None);
            };
            let mut grid = Grid::new(width, height)?;
            patterns::random_soup(&mut grid, &config.random)?;
            Ok(Some(grid))
        }
    }
}
