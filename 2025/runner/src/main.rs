use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::ProgressBar;
use miette::*;

mod input;
mod registry;

use registry::PUZZLES;

#[derive(Parser, Debug)]
#[command(author, version, about = "Advent of Code 2025 solutions", long_about = None)]
struct Args {
    /// Day to run. Defaults to the most recent implemented day.
    day: Option<u8>,

    /// Input file to use instead of looking one up in `--inputs`.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory searched for `dayNN.txt` or `DayNN.txt`.
    #[arg(long, default_value = "inputs")]
    inputs: PathBuf,
}

/// Runs `solve` behind a spinner and reports how long it took.
fn timed(label: &str, solve: impl FnOnce() -> Result<String>) -> Result<(String, Duration)> {
    let spinner = ProgressBar::new_spinner().with_message(format!("{label}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let answer = solve();
    let elapsed = start.elapsed();
    spinner.finish_and_clear();

    tracing::info!(part = label, elapsed_ms = elapsed.as_millis() as u64, "solved");
    Ok((answer?, elapsed))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let day = args
        .day
        .or_else(|| PUZZLES.latest())
        .ok_or_else(|| miette!("No days registered"))?;

    let path = match args.input {
        Some(path) => path,
        None => input::locate(&args.inputs, day)?,
    };
    let lines = input::read_lines(&path)?;

    let puzzle = PUZZLES
        .build(day, &lines)?
        .ok_or_else(|| miette!("Day {day} not implemented"))?;

    println!("=== Day {day} ===");

    let (result1, duration1) = timed("Part 1", || puzzle.part1())?;
    println!("Part 1: {} ({}ms)", result1, duration1.as_millis());

    let (result2, duration2) = timed("Part 2", || puzzle.part2())?;
    println!("Part 2: {} ({}ms)", result2, duration2.as_millis());

    Ok(())
}
