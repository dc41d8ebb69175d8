use aoc2025_day_10::Day10;
use aoc_puzzle::{construct, Constructor, Registry};

/// Every implemented day of 2025.
pub static PUZZLES: Registry = Registry::new(&[(10, construct::<Day10> as Constructor)]);

#[cfg(test)]
mod tests {
    use super::*;

    use miette::{miette, Result};

    #[test]
    fn day_10_is_registered() -> Result<()> {
        assert_eq!(Some(10), PUZZLES.latest());

        let lines = vec![String::from("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}")];
        let puzzle = PUZZLES
            .build(10, &lines)?
            .ok_or(miette!("day 10 should be registered"))?;
        assert_eq!("2", puzzle.part1()?);
        assert_eq!("10", puzzle.part2()?);
        Ok(())
    }

    #[test]
    fn unknown_day_builds_nothing() -> Result<()> {
        assert!(PUZZLES.build(1, &[])?.is_none());
        Ok(())
    }
}
