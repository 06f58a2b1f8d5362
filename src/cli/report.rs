//! Console output for the CLI.
//!
//! The notice text itself comes from [`crate::report`]; this module only adds
//! the status lines around it. Separate from core logic so the library can be
//! used without a terminal.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::{pipeline::Detection, review::ReconcileAction};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a scan to stdout.
pub fn print_detection(detection: &Detection) {
    print_detection_to(detection, &mut io::stdout().lock());
}

/// Print the outcome of a scan to a custom writer.
pub fn print_detection_to<W: Write>(detection: &Detection, writer: &mut W) {
    if !detection.noise_found() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} {} - no noise detected",
                detection.visited,
                if detection.visited == 1 { "entry" } else { "entries" }
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        "Found potentially superfluous files/directories:".bold()
    );
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", detection.report);
}

/// Print what happened to the pull request comment.
pub fn print_action(action: ReconcileAction, comments_file: &Path) {
    print_action_to(action, comments_file, &mut io::stderr().lock());
}

pub fn print_action_to<W: Write>(action: ReconcileAction, comments_file: &Path, writer: &mut W) {
    let message = match action {
        ReconcileAction::Skipped => return,
        ReconcileAction::Created => "Posted noise comment".to_string(),
        ReconcileAction::Updated(id) => format!("Updated noise comment {}", id),
        ReconcileAction::Deleted(id) => format!("Deleted noise comment {}", id),
    };
    let _ = writeln!(
        writer,
        "{} {} ({})",
        SUCCESS_MARK.green(),
        message,
        comments_file.display().to_string().dimmed()
    );
}
