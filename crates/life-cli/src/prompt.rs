//! Console prompts and the parsers behind them.
//!
//! Parsers are pure: they turn one line of input into a [`Parsed`] value and
//! never touch the terminal. [`Prompter`] owns the read/retry loop over any
//! `BufRead`/`Write` pair, so quitting is a return value rather than an exit.

use life_core::{BoundsConfig, Position};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Result of parsing one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    /// The user typed `q`
    Quit,
    Valid(T),
    /// Unusable input; the reason is shown before prompting again
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sample,
    Custom,
    Random,
}

fn is_quit(line: &str) -> bool {
    line.trim() == "q"
}

pub fn parse_menu_choice(line: &str) -> Parsed<MenuChoice> {
    if is_quit(line) {
        return Parsed::Quit;
    }

    match line.trim() {
        "1" => Parsed::Valid(MenuChoice::Sample),
        "2" => Parsed::Valid(MenuChoice::Custom),
        "3" => Parsed::Valid(MenuChoice::Random),
        _ => Parsed::Invalid("Bad Input".to_string()),
    }
}

/// Two integers, width then height, each clamped into `bounds`
pub fn parse_dimensions(line: &str, bounds: &BoundsConfig) -> Parsed<(i32, i32)> {
    if is_quit(line) {
        return Parsed::Quit;
    }

    let values: Result<Vec<i32>, _> = line.split_whitespace().map(str::parse).collect();
    match values.as_deref() {
        Ok(&[width, height]) => Parsed::Valid((bounds.clamp(width), bounds.clamp(height))),
        _ => Parsed::Invalid("Bad Input".to_string()),
    }
}

/// A flat list `x1 y1 x2 y2 ...` taken as coordinate pairs
pub fn parse_coordinates(line: &str) -> Parsed<Vec<Position>> {
    if is_quit(line) {
        return Parsed::Quit;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Parsed::Invalid("Bad Input".to_string());
    }
    if tokens.len() % 2 != 0 {
        return Parsed::Invalid("Must enter an even number of coordinates".to_string());
    }

    let values: Result<Vec<i32>, _> = tokens.iter().map(|token| token.parse()).collect();
    match values {
        Ok(values) => Parsed::Valid(
            values
                .chunks_exact(2)
                .map(|pair| Position::new(pair[0], pair[1]))
                .collect(),
        ),
        Err(_) => Parsed::Invalid("Bad Input".to_string()),
    }
}

/// Prompt/read/retry loop over arbitrary input and output streams
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Show `prompt` until `parse` accepts a line. `None` means the user quit
    /// or input ended.
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Parsed<T>,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                return Ok(None);
            }

            match parse(&line) {
                Parsed::Quit => return Ok(None),
                Parsed::Valid(value) => return Ok(Some(value)),
                Parsed::Invalid(reason) => {
                    debug!(input = line.trim(), %reason, "rejected input");
                    writeln!(self.output, "\n{}, try again (or type q to quit)", reason)?;
                }
            }
        }
    }

    pub fn menu_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        self.ask(
            "To run a sample, enter 1.\n\
             To set up and run your own emulation, enter 2.\n\
             To run a random soup, enter 3.\n\
             If at any time you want to exit, enter q.\n\n\
             Enter choice: ",
            parse_menu_choice,
        )
    }

    pub fn dimensions(&mut self, bounds: &BoundsConfig) -> io::Result<Option<(i32, i32)>> {
        let prompt = format!(
            "\nEnter the grid width and height and hit enter. (e.g, 60 30)\
             \nValues should be between {} and {}.\
             \nEnter Values: ",
            bounds.min_dimension, bounds.max_dimension
        );
        self.ask(&prompt, |line| parse_dimensions(line, bounds))
    }

    pub fn coordinates(&mut self) -> io::Result<Option<Vec<Position>>> {
        self.ask(
            "\nEnter the cells that are alive x1 y1 x2 y2 ... (e.g., 20 20 21 20 22 20)\
             \nEnter Values: ",
            parse_coordinates,
        )
    }
}
