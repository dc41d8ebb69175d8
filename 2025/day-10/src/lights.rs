use crate::error::{MachineError, Objective};
use crate::machine::{Lights, Machine, PressAssignment};

/// Upper bound on buttons for the exhaustive subset walk (2^30 subsets).
pub const MAX_BRUTE_FORCE_BUTTONS: usize = 30;

/// Fewest button presses that turn the all-off panel into the target pattern.
///
/// Pressing a button twice cancels out, so only subsets of buttons matter.
/// All `2^k` subsets are visited in Gray code order: consecutive subsets
/// differ in exactly one button, so every step costs a single XOR.
#[tracing::instrument(level = "debug", skip_all, fields(buttons = machine.buttons().len()))]
pub fn min_boolean_presses(machine: &Machine) -> Result<PressAssignment, MachineError> {
    let k = machine.buttons().len();
    if k > MAX_BRUTE_FORCE_BUTTONS {
        return Err(MachineError::TooManyButtons {
            count: k,
            max: MAX_BRUTE_FORCE_BUTTONS,
        });
    }

    let target = machine.lights();
    let masks: Vec<Lights> = machine
        .buttons()
        .iter()
        .map(|button| button.light_mask(target.len()))
        .collect();

    let mut state = Lights::repeat(false, target.len());

    // (cost, gray code of the subset)
    let mut best: Option<(u32, usize)> = (state == *target).then_some((0, 0));

    let num_subsets: usize = 1 << k;
    for i in 1..num_subsets {
        // The bit that changes between gray(i - 1) and gray(i)
        let flipped = i.trailing_zeros() as usize;
        state ^= &masks[flipped];

        if state == *target {
            let gray = i ^ (i >> 1);
            let cost = gray.count_ones();
            if best.map_or(true, |(min, _)| cost < min) {
                best = Some((cost, gray));
            }
        }
    }

    let (cost, gray) = best.ok_or(MachineError::NoSolutionFound {
        objective: Objective::Lights,
    })?;
    tracing::debug!(cost, "lights matched");

    let presses: Vec<u64> = (0..k).map(|b| ((gray >> b) & 1) as u64).collect();
    Ok(presses.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::machine::Button;
    use miette::Result;
    use rstest::rstest;

    fn reordered(machine: &Machine, order: &[usize]) -> Result<Machine> {
        let buttons = order
            .iter()
            .enumerate()
            .map(|(id, &i)| Button::new(id, machine.buttons()[i].wiring().to_vec()))
            .collect();
        Ok(Machine::new(
            machine.lights().clone(),
            buttons,
            machine.joltages().to_vec(),
        )?)
    }

    #[rstest]
    #[case::single_button("[#.] [0] [1] [0,1] [0,0]", 1)]
    #[case::example_1("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}", 2)]
    #[case::example_2("[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}", 3)]
    #[case::example_3("[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}", 2)]
    #[case::already_off("[...] (0) (1,2) {1,1,1}", 0)]
    fn fewest_presses(#[case] line: &str, #[case] expected: u64) -> Result<()> {
        let machine: Machine = line.parse()?;
        let presses = min_boolean_presses(&machine)?;

        assert_eq!(expected, presses.total());
        assert_eq!(machine.lights(), &machine.toggle(&presses));
        assert!(presses.presses().iter().all(|&p| p <= 1));
        Ok(())
    }

    #[test]
    fn presses_the_single_matching_button() -> Result<()> {
        let machine: Machine = "[#.] [0] [1] [0,1] [0,0]".parse()?;
        let presses = min_boolean_presses(&machine)?;
        assert_eq!(presses.presses(), &[1, 0, 0]);
        Ok(())
    }

    #[test]
    fn unreachable_pattern_has_no_solution() -> Result<()> {
        let machine: Machine = "[#] [] [0]".parse()?;
        let err = min_boolean_presses(&machine).unwrap_err();
        assert!(matches!(
            err,
            MachineError::NoSolutionFound {
                objective: Objective::Lights
            }
        ));
        Ok(())
    }

    #[rstest]
    #[case(&[5, 4, 3, 2, 1, 0])]
    #[case(&[2, 0, 5, 1, 4, 3])]
    #[case(&[0, 1, 2, 3, 4, 5])]
    fn cost_ignores_button_order(#[case] order: &[usize]) -> Result<()> {
        let machine: Machine = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}".parse()?;
        let shuffled = reordered(&machine, order)?;

        assert_eq!(
            min_boolean_presses(&machine)?.total(),
            min_boolean_presses(&shuffled)?.total()
        );
        Ok(())
    }

    #[test]
    fn repeated_calls_agree() -> Result<()> {
        let machine: Machine = "[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}".parse()?;
        assert_eq!(min_boolean_presses(&machine)?, min_boolean_presses(&machine)?);
        Ok(())
    }

    #[test]
    fn zero_only_for_dark_target() -> Result<()> {
        let dark: Machine = "[....] (0,1) (2) {0,0,0,0}".parse()?;
        let lit: Machine = "[...#] (3) (2) {0,0,0,0}".parse()?;

        assert_eq!(0, min_boolean_presses(&dark)?.total());
        assert!(min_boolean_presses(&lit)?.total() > 0);
        Ok(())
    }

    #[test]
    fn refuses_oversized_subset_space() -> Result<()> {
        let buttons = (0..=MAX_BRUTE_FORCE_BUTTONS)
            .map(|id| Button::new(id, vec![0]))
            .collect();
        let machine = Machine::new(Lights::repeat(true, 1), buttons, vec![1])?;

        assert!(matches!(
            min_boolean_presses(&machine),
            Err(MachineError::TooManyButtons { count: 31, max: 30 })
        ));
        Ok(())
    }
}
