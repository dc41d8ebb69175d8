use num::rational::Rational64;

use crate::coefficient::Coefficient;
use crate::error::{MachineError, Objective};
use crate::machine::{Machine, PressAssignment};
use crate::reduce::ReducedSystem;

/// Highest press count tried for each free column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchCeiling {
    /// The largest joltage target of the machine. With unit wiring no button
    /// can be pressed more often than the counter it feeds asks for.
    #[default]
    MaxTarget,
    Fixed(u64),
}

impl SearchCeiling {
    pub fn resolve(self, machine: &Machine) -> u64 {
        match self {
            SearchCeiling::MaxTarget => machine.joltages().iter().copied().max().unwrap_or(0),
            SearchCeiling::Fixed(limit) => limit,
        }
    }
}

/// Number type used to reduce the counter equations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Arithmetic {
    /// `f64` with pivot and integrality tolerances.
    #[default]
    Float,
    /// Exact rationals, no tolerances.
    Exact,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub ceiling: SearchCeiling,
    pub arithmetic: Arithmetic,
}

/// Fewest total presses that drive every joltage counter from zero to its target.
#[tracing::instrument(level = "debug", skip(machine), fields(buttons = machine.buttons().len()))]
pub fn min_joltage_presses(
    machine: &Machine,
    config: &SolverConfig,
) -> Result<PressAssignment, MachineError> {
    match config.arithmetic {
        Arithmetic::Float => search::<f64>(machine, config.ceiling),
        Arithmetic::Exact => search::<Rational64>(machine, config.ceiling),
    }
}

fn search<T: Coefficient>(
    machine: &Machine,
    ceiling: SearchCeiling,
) -> Result<PressAssignment, MachineError> {
    let no_solution = || MachineError::NoSolutionFound {
        objective: Objective::Joltage,
    };

    let system = ReducedSystem::<T>::new(machine);
    if !system.is_consistent() {
        return Err(no_solution());
    }

    let mut dfs = FreeVariableSearch {
        machine,
        system: &system,
        ceiling: ceiling.resolve(machine),
        presses: PressAssignment::zeros(machine.buttons().len()),
        best: None,
    };
    dfs.descend(0, 0);

    let best = dfs.best.ok_or_else(no_solution)?;
    tracing::debug!(
        free = system.free_columns().len(),
        total = best.total(),
        "joltage matched"
    );
    Ok(best)
}

/// Depth-first enumeration of the free columns of one reduced system.
struct FreeVariableSearch<'a, T: Coefficient> {
    machine: &'a Machine,
    system: &'a ReducedSystem<T>,
    ceiling: u64,
    /// Assignment under construction
    presses: PressAssignment,
    best: Option<PressAssignment>,
}

impl<T: Coefficient> FreeVariableSearch<'_, T> {
    fn descend(&mut self, depth: usize, spent: u64) {
        let Some(&col) = self.system.free_columns().get(depth) else {
            self.evaluate();
            return;
        };

        for value in 0..=self.ceiling {
            // Pivot presses are never negative, so this branch cannot beat the best
            if let Some(best) = &self.best {
                if spent + value >= best.total() {
                    break;
                }
            }
            self.presses.set(col, value);
            self.descend(depth + 1, spent + value);
        }
        self.presses.set(col, 0);
    }

    /// Completes the assignment from the pivot rows and keeps it if it is the
    /// cheapest exact solution so far.
    fn evaluate(&mut self) {
        if !self.back_substitute() {
            return;
        }

        // Re-check against the raw wiring in case elimination drifted
        if self.machine.increment(&self.presses) != self.machine.joltages() {
            return;
        }

        let total = self.presses.total();
        if self.best.as_ref().map_or(true, |best| total < best.total()) {
            self.best = Some(self.presses.clone());
        }
    }

    /// Fills in every pivot column. `false` when one would need a negative or
    /// fractional press count.
    fn back_substitute(&mut self) -> bool {
        let system = self.system;
        for (row, &col) in system.pivots().iter().enumerate() {
            let mut value = system.rhs(row);
            for &free in system.free_columns() {
                let presses = T::from_count(self.presses.presses()[free]);
                value = value - system.coefficient(row, free) * presses;
            }

            match value.to_press_count() {
                Some(count) => self.presses.set(col, count),
                None => return false,
            }
        }
        true
    }
}
