use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Which of the two press-count objectives failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Lights,
    Joltage,
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Lights => f.write_str("indicator lights"),
            Objective::Joltage => f.write_str("joltage counters"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum MachineError {
    #[error("malformed machine on line {line}: {reason}")]
    #[diagnostic(
        code(day10::malformed_input),
        help("expected `[.#..] [0,2] (1) ... {{3,5,4}}`")
    )]
    MalformedInput {
        line: usize,
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
    },

    #[error("button {button} is wired to index {index}, but the machine only has {len} slots")]
    #[diagnostic(code(day10::wiring_out_of_range))]
    WiringOutOfRange {
        button: usize,
        index: usize,
        len: usize,
    },

    #[error("no button combination reproduces the {objective}")]
    #[diagnostic(
        code(day10::no_solution),
        help("puzzle machines are always solvable; check the input line")
    )]
    NoSolutionFound { objective: Objective },

    #[error("{count} buttons exceed the {max} supported by the exhaustive light search")]
    #[diagnostic(code(day10::too_many_buttons))]
    TooManyButtons { count: usize, max: usize },
}
