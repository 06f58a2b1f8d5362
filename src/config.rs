use std::path::PathBuf;

use crate::{
    core::IGNORE_FILE_NAME,
    error::Result,
    report::{DEFAULT_GROUP_THRESHOLD, DEFAULT_MAX_FILES_PER_DIR, ReportOptions},
    review::ReconcileContext,
};

/// File the rendered report is written to.
pub const REPORT_FILE_NAME: &str = "noise.txt";

/// Invocation parameters for one detection run.
///
/// Built by the CLI from arguments and the hosting environment's input
/// variables; library users can start from [`Settings::default`].
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory to scan.
    pub root: PathBuf,
    /// Ignore file, resolved against the working directory.
    pub ignore_file: PathBuf,
    /// Exact paths never reported.
    pub explicit_ignores: Vec<String>,
    pub max_files_per_dir: usize,
    pub group_threshold: usize,
    /// Keep a single managed comment instead of posting one per run.
    pub update_mode: bool,
    pub report_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_file: PathBuf::from(IGNORE_FILE_NAME),
            explicit_ignores: Vec::new(),
            max_files_per_dir: DEFAULT_MAX_FILES_PER_DIR,
            group_threshold: DEFAULT_GROUP_THRESHOLD,
            update_mode: false,
            report_file: Some(PathBuf::from(REPORT_FILE_NAME)),
        }
    }
}

impl Settings {
    /// Validated report options.
    pub fn report_options(&self) -> Result<ReportOptions> {
        ReportOptions::new(self.max_files_per_dir, self.group_threshold)
    }

    pub fn reconcile_context(&self, pull_request: bool) -> ReconcileContext {
        ReconcileContext {
            pull_request,
            update_mode: self.update_mode,
        }
    }
}
