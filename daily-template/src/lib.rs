pub mod part1;

use aoc_puzzle::{FromInput, Puzzle};
use miette::*;

/// Register with `(day, aoc_puzzle::construct::<Day> as Constructor)` in the runner.
pub struct Day {
    input: String,
}

impl FromInput for Day {
    fn from_input(lines: &[String]) -> Result<Self> {
        Ok(Self {
            input: lines.join("\n"),
        })
    }
}

impl Puzzle for Day {
    fn part1(&self) -> Result<String> {
        part1::process(&self.input)
    }

    fn part2(&self) -> Result<String> {
        Err(miette!("part 2 not solved yet"))
    }
}
