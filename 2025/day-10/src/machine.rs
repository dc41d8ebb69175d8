use bitvec::prelude::*;
use chumsky::prelude::*;
use itertools::Itertools;
use miette::NamedSource;

use crate::error::MachineError;

/// Indicator light pattern, one bit per light, Least Significant Bit first.
pub type Lights = BitVec<usize, Lsb0>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    id: usize,
    /// Light and counter indices touched by one press. Both share index space.
    wiring: Vec<usize>,
}

impl Button {
    pub fn new(id: usize, wiring: Vec<usize>) -> Self {
        Self { id, wiring }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn wiring(&self) -> &[usize] {
        &self.wiring
    }

    /// The lights this button toggles, as a row of `len` bits.
    pub fn light_mask(&self, len: usize) -> Lights {
        let mut mask = Lights::repeat(false, len);
        for &i in &self.wiring {
            let flipped = !mask[i];
            mask.set(i, flipped);
        }
        mask
    }
}

/// Press count per button, indexed like [`Machine::buttons`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressAssignment(Vec<u64>);

impl PressAssignment {
    pub fn zeros(buttons: usize) -> Self {
        Self(vec![0; buttons])
    }

    pub fn presses(&self) -> &[u64] {
        &self.0
    }

    pub fn set(&mut self, button: usize, count: u64) {
        self.0[button] = count;
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl From<Vec<u64>> for PressAssignment {
    fn from(presses: Vec<u64>) -> Self {
        Self(presses)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    lights: Lights,
    buttons: Vec<Button>,
    joltages: Vec<u64>,
}

impl Machine {
    /// Builds a machine, rejecting wiring that points outside either target.
    pub fn new(
        lights: Lights,
        buttons: Vec<Button>,
        joltages: Vec<u64>,
    ) -> Result<Self, MachineError> {
        let len = lights.len().min(joltages.len());
        for button in &buttons {
            for &index in button.wiring() {
                if index >= len {
                    return Err(MachineError::WiringOutOfRange {
                        button: button.id(),
                        index,
                        len,
                    });
                }
            }
        }

        Ok(Self {
            lights,
            buttons,
            joltages,
        })
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn joltages(&self) -> &[u64] {
        &self.joltages
    }

    /// Light pattern reached from all-off: only the parity of each count matters.
    pub fn toggle(&self, presses: &PressAssignment) -> Lights {
        let mut state = Lights::repeat(false, self.lights.len());
        for (button, &count) in self.buttons.iter().zip(presses.presses()) {
            if count % 2 == 1 {
                state ^= &button.light_mask(self.lights.len());
            }
        }
        state
    }

    /// Counter values reached from all-zero.
    pub fn increment(&self, presses: &PressAssignment) -> Vec<u64> {
        let mut counters = vec![0; self.joltages.len()];
        for (button, &count) in self.buttons.iter().zip(presses.presses()) {
            for &i in button.wiring() {
                counters[i] += count;
            }
        }
        counters
    }
}

impl std::fmt::Display for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lights: String = self
            .lights
            .iter()
            .by_vals()
            .map(|on| if on { '#' } else { '.' })
            .collect();
        write!(f, "[{lights}]")?;
        for button in &self.buttons {
            write!(f, " ({})", button.wiring().iter().join(","))?;
        }
        write!(f, " {{{}}}", self.joltages.iter().join(","))
    }
}

/// Grammar of a single machine line. Every integer list after the light
/// diagram is collected; the last one is the joltage target.
fn parser<'a>() -> impl Parser<'a, &'a str, (Lights, Vec<Vec<usize>>), extra::Err<Rich<'a, char>>> {
    // Custom whitespace parser that excludes newlines
    let hspace = one_of(" \t").repeated();

    let light = choice((just('.').to(false), just('#').to(true)));

    // [.##.]
    let diagram = light
        .repeated()
        .collect::<Vec<bool>>()
        .map(|v| v.into_iter().collect::<Lights>())
        .delimited_by(just('['), just(']'));

    let number = text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<usize>()
                .map_err(|e| Rich::custom(span, e))
        });

    let list = number.separated_by(just(',')).collect::<Vec<usize>>();

    // [0,2] (0,2) {3,5,4}
    let group = choice((
        list.clone().delimited_by(just('['), just(']')),
        list.clone().delimited_by(just('('), just(')')),
        list.delimited_by(just('{'), just('}')),
    ));

    diagram
        .padded_by(hspace)
        .then(group.padded_by(hspace).repeated().at_least(1).collect::<Vec<_>>())
        .then_ignore(end())
}

/// Parses one input line. `line_no` is 1-based and only used for diagnostics.
#[tracing::instrument(level = "trace")]
pub fn parse_machine(line: &str, line_no: usize) -> Result<Machine, MachineError> {
    let (lights, mut groups) = parser().parse(line).into_result().map_err(|errors| {
        let (span, reason) = errors
            .first()
            .map(|e| (e.span().start..e.span().end, e.to_string()))
            .unwrap_or_else(|| (0..line.len(), String::from("unparseable line")));
        MachineError::MalformedInput {
            line: line_no,
            reason,
            src: NamedSource::new(format!("line {line_no}"), line.to_string()),
            span: span.into(),
        }
    })?;

    // `at_least(1)` guarantees the joltage group is present
    let joltages = groups
        .pop()
        .unwrap_or_default()
        .into_iter()
        .map(|v| v as u64)
        .collect();

    let buttons = groups
        .into_iter()
        .enumerate()
        .map(|(id, wiring)| Button::new(id, wiring))
        .collect();

    Machine::new(lights, buttons, joltages)
}

/// Parses every non-blank line into a machine, stopping at the first error.
pub fn parse_machines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Machine>, MachineError> {
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_machine(line, i + 1))
        .collect()
}

impl std::str::FromStr for Machine {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_machine(s, 1)
    }
}
