use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::{
    args::CheckArgs,
    comments_file::CommentsFile,
    exit_status::ExitStatus,
    report::{print_action, print_detection},
};
use crate::pipeline::{Detection, detect, publish};

pub fn check(args: &CheckArgs) -> Result<ExitStatus> {
    let settings = args.settings();
    debug!(?settings, "running check");

    let detection = detect(&settings)
        .with_context(|| format!("Failed to check {}", settings.root.display()))?;
    print_detection(&detection);

    if let Some(path) = &args.output_file {
        write_outputs(path, &detection)?;
    }

    if let Some(path) = &args.comments_file {
        let mut thread = CommentsFile::new(path);
        let action = publish(&mut thread, &detection, settings.reconcile_context(true))
            .with_context(|| format!("Failed to reconcile comments in {}", path.display()))?;
        print_action(action, thread.path());
    }

    Ok(ExitStatus::from_check(detection.noise_found(), args.deny))
}

/// Append `key=value` output lines.
fn write_outputs(path: &Path, detection: &Detection) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;

    for (key, value) in detection.outputs()? {
        writeln!(file, "{}={}", key, value)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    }
    Ok(())
}
