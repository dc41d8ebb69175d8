use std::path::{Path, PathBuf};

use miette::*;

/// File names tried for `day` inside `dir`, in lookup order.
pub fn candidates(dir: &Path, day: u8) -> Vec<PathBuf> {
    ["day", "Day"]
        .iter()
        .map(|prefix| dir.join(format!("{prefix}{day:02}.txt")))
        .collect()
}

/// First existing input file for `day`.
pub fn locate(dir: &Path, day: u8) -> Result<PathBuf> {
    let candidates = candidates(dir, day);
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            let tried = candidates
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(" or ");
            miette!("Input file not found: {tried}")
        })
}

#[tracing::instrument]
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    Ok(content.lines().map(String::from).collect())
}
