use miette::*;
use rayon::prelude::*;

use crate::machine::{parse_machines, Machine};
use crate::search::{min_joltage_presses, SolverConfig};

/// Sum over all machines of the fewest presses that reach every joltage target.
/// Machines are independent, so they are solved in parallel.
pub fn total(machines: &[Machine], config: &SolverConfig) -> Result<u64> {
    let counts = machines
        .par_iter()
        .enumerate()
        .map(|(i, machine)| {
            min_joltage_presses(machine, config)
                .map(|presses| presses.total())
                .wrap_err_with(|| format!("machine #{} `{machine}`", i + 1))
        })
        .collect::<Result<Vec<u64>>>()?;

    Ok(counts.iter().sum())
}

#[tracing::instrument]
pub fn process_with(input: &str, config: &SolverConfig) -> Result<String> {
    let machines = parse_machines(input.lines())?;
    let total_presses = total(&machines, config)?;

    Ok(total_presses.to_string())
}

pub fn process(input: &str) -> Result<String> {
    process_with(input, &SolverConfig::default())
}
