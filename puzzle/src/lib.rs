//! Shared contract between the runner and every day crate.
//!
//! A day is built once from the raw input lines and then answers both parts
//! on demand. Days are looked up by number through a [`Registry`] of plain
//! constructor functions.

use miette::Result;

/// One day's solution. Both parts return the answer as a decimal string.
pub trait Puzzle: Send + Sync {
    fn part1(&self) -> Result<String>;
    fn part2(&self) -> Result<String>;
}

/// Builds a puzzle from the raw lines of its input file.
pub trait FromInput: Sized {
    fn from_input(lines: &[String]) -> Result<Self>;
}

/// Type-erased constructor stored in a [`Registry`].
pub type Constructor = fn(&[String]) -> Result<Box<dyn Puzzle>>;

/// Generic [`Constructor`] for any puzzle that knows how to read its input.
pub fn construct<P>(lines: &[String]) -> Result<Box<dyn Puzzle>>
where
    P: Puzzle + FromInput + 'static,
{
    Ok(Box::new(P::from_input(lines)?))
}

/// Static mapping from day number to constructor.
#[derive(Clone, Copy)]
pub struct Registry {
    entries: &'static [(u8, Constructor)],
}

impl Registry {
    pub const fn new(entries: &'static [(u8, Constructor)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, day: u8) -> Option<Constructor> {
        self.entries
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, constructor)| *constructor)
    }

    /// Highest registered day, used when the caller does not pick one.
    pub fn latest(&self) -> Option<u8> {
        self.entries.iter().map(|(day, _)| *day).max()
    }

    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|(day, _)| *day)
    }

    #[tracing::instrument(skip(self, lines), fields(lines = lines.len()))]
    pub fn build(&self, day: u8, lines: &[String]) -> Result<Option<Box<dyn Puzzle>>> {
        self.get(day).map(|constructor| constructor(lines)).transpose()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.days()).finish()
    }
}
