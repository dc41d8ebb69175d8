pub mod coefficient;
pub mod error;
pub mod lights;
pub mod machine;
pub mod part1;
pub mod part2;
pub mod reduce;
pub mod search;

use aoc_puzzle::{FromInput, Puzzle};

pub use error::{MachineError, Objective};
pub use machine::{Button, Machine, PressAssignment};
pub use search::{Arithmetic, SearchCeiling, SolverConfig};

/// Factory machines: parsed once, then both parts reuse the same machines.
#[derive(Debug, Clone)]
pub struct Day10 {
    machines: Vec<Machine>,
    config: SolverConfig,
}

impl Day10 {
    pub fn with_config(lines: &[String], config: SolverConfig) -> miette::Result<Self> {
        let machines = machine::parse_machines(lines.iter().map(String::as_str))?;
        tracing::debug!(machines = machines.len(), "input parsed");
        Ok(Self { machines, config })
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }
}

impl FromInput for Day10 {
    fn from_input(lines: &[String]) -> miette::Result<Self> {
        Self::with_config(lines, SolverConfig::default())
    }
}

impl Puzzle for Day10 {
    fn part1(&self) -> miette::Result<String> {
        part1::total(&self.machines).map(|n| n.to_string())
    }

    fn part2(&self) -> miette::Result<String> {
        part2::total(&self.machines, &self.config).map(|n| n.to_string())
    }
}
