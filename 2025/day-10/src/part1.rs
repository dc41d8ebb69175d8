use miette::*;

use crate::lights::min_boolean_presses;
use crate::machine::{parse_machines, Machine};

/// Sum over all machines of the fewest presses that match the light diagram.
pub fn total(machines: &[Machine]) -> Result<u64> {
    machines
        .iter()
        .enumerate()
        .map(|(i, machine)| {
            min_boolean_presses(machine)
                .map(|presses| presses.total())
                .wrap_err_with(|| format!("machine #{} `{machine}`", i + 1))
        })
        .sum()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let machines = parse_machines(input.lines())?;
    let total_presses = total(&machines)?;

    Ok(total_presses.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}";
        assert_eq!("7", process(input)?);
        Ok(())
    }

    #[test]
    fn empty_input_sums_to_zero() -> Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }

    #[test]
    fn unsolvable_machine_aborts() {
        let input = "[#.] (0) {1,0}
[#] () {0}";
        let report = process(input).unwrap_err();
        assert!(report.to_string().contains("machine #2"), "{report:?}");
    }

    #[test]
    fn malformed_line_aborts() {
        assert!(process("[#.] (0 {1,0}").is_err());
    }
}
