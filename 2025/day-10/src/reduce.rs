use nalgebra::DMatrix;

use crate::coefficient::Coefficient;
use crate::machine::Machine;

/// Counter equations of a machine in Reduced Row Echelon Form.
///
/// Row `i` holds the pivot of column `pivots[i]`; every other pivot column is
/// zero in that row, so a pivot variable depends on the free columns only.
#[derive(Debug, Clone)]
pub struct ReducedSystem<T: Coefficient> {
    /// Augmented matrix [A | b]
    matrix: DMatrix<T>,
    num_vars: usize,
    num_eqs: usize,
    /// Pivot columns in elimination order
    pivots: Vec<usize>,
    /// Columns without a pivot
    free: Vec<usize>,
}

impl<T: Coefficient> ReducedSystem<T> {
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(buttons = machine.buttons().len(), counters = machine.joltages().len())
    )]
    pub fn new(machine: &Machine) -> Self {
        let num_eqs = machine.joltages().len();
        let num_vars = machine.buttons().len();

        // One row per counter, one column per button plus the target column
        let matrix = DMatrix::from_fn(num_eqs, num_vars + 1, |r, c| {
            if c == num_vars {
                T::from_count(machine.joltages()[r])
            } else if machine.buttons()[c].wiring().contains(&r) {
                T::one()
            } else {
                T::zero()
            }
        });

        let mut system = Self {
            matrix,
            num_vars,
            num_eqs,
            pivots: Vec::with_capacity(num_vars.min(num_eqs)),
            free: Vec::new(),
        };
        system.eliminate();

        tracing::trace!(pivots = ?system.pivots, free = ?system.free, "system reduced");
        system
    }

    /// Gauss-Jordan elimination with partial pivoting.
    fn eliminate(&mut self) {
        for c in 0..self.num_vars {
            let pivot_row = self.pivots.len();
            if pivot_row >= self.num_eqs {
                self.free.push(c);
                continue;
            }

            // Largest magnitude among the rows that have no pivot yet
            let best = (pivot_row + 1..self.num_eqs).fold(pivot_row, |best, r| {
                if self.matrix[(r, c)].abs() > self.matrix[(best, c)].abs() {
                    r
                } else {
                    best
                }
            });

            if self.matrix[(best, c)].is_negligible() {
                self.free.push(c);
                continue;
            }

            self.matrix.swap_rows(pivot_row, best);

            let scale = self.matrix[(pivot_row, c)];
            for j in 0..=self.num_vars {
                self.matrix[(pivot_row, j)] = self.matrix[(pivot_row, j)] / scale;
            }

            // Clear the column above and below the pivot
            for r in 0..self.num_eqs {
                if r == pivot_row {
                    continue;
                }
                let factor = self.matrix[(r, c)];
                if factor.is_negligible() {
                    continue;
                }
                for j in 0..=self.num_vars {
                    let delta = factor * self.matrix[(pivot_row, j)];
                    self.matrix[(r, j)] = self.matrix[(r, j)] - delta;
                }
            }

            self.pivots.push(c);
        }
    }

    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    pub fn free_columns(&self) -> &[usize] {
        &self.free
    }

    pub fn coefficient(&self, row: usize, col: usize) -> T {
        self.matrix[(row, col)]
    }

    /// Target column value of `row`.
    pub fn rhs(&self, row: usize) -> T {
        self.matrix[(row, self.num_vars)]
    }

    /// `false` when a row without pivot still demands a non-zero target,
    /// i.e. the reduced system contains `0 = c`.
    pub fn is_consistent(&self) -> bool {
        (self.pivots.len()..self.num_eqs).all(|r| self.rhs(r).is_negligible())
    }
}
