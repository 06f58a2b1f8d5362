use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::core::IGNORE_FILE_NAME;

const IGNORE_TEMPLATE: &str = "\
# Paths listed here are never reported by pr-noise.
# One pattern per line, matched against the whole path relative to the
# repository root. `*` matches any characters, including `/`.
#
# fixtures/*.log
# docs/untitled-diagram.svg
";

pub fn init() -> Result<ExitStatus> {
    let path = Path::new(IGNORE_FILE_NAME);

    if path.exists() {
        eprintln!("Error: {} already exists", IGNORE_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(path, IGNORE_TEMPLATE)
        .with_context(|| format!("Failed to write {}", IGNORE_FILE_NAME))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", IGNORE_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
