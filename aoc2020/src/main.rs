use anyhow::{bail, Result};
use aoc_runner::Solver;
use clap::Parser;
use std::path::PathBuf;

mod day;
mod logging;
mod prelude;
use day::*;

fn main() -> Result<()> {
    logging::init();
    let app: App = App::parse();
    app.run()?;
    Ok(())
}

/// Advent of code 2020
#[derive(Debug, Parser)]
struct App {
    /// Day to run
    #[clap(short = 'd', long)]
    day: usize,

    /// Optional path to input file. Defaults to `input/day/NN.txt`.
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,
}

impl App {
    fn run(&self) -> Result<()> {
        let input = self.input.as_deref();

        match self.day {
            1 => day01::Answer.solve(self.day, input)?,
            2 => day02::Answer.solve(self.day, input)?,
            5 => day05::Answer.solve(self.day, input)?,
            6 => day06::Answer.solve(self.day, input)?,
            _ => bail!("Day {} is not implemented", self.day),
        };
        Ok(())
    }
}
