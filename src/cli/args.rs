//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan the tree, write the report and outputs, optionally reconcile
//!   the pull request comment stored in a comments file
//! - `init`: Create a commented ignore file template
//!
//! Every `check` option can also come from the hosting environment's
//! `INPUT_*` variables so the binary runs unchanged inside a CI action.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{
    config::{REPORT_FILE_NAME, Settings},
    core::IGNORE_FILE_NAME,
    report::{DEFAULT_GROUP_THRESHOLD, DEFAULT_MAX_FILES_PER_DIR},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Directory to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Ignore file with one glob pattern per line
    #[arg(long, env = "INPUT_IGNORE-FILE", default_value = IGNORE_FILE_NAME)]
    pub ignore_file: PathBuf,

    /// Path that is never reported (repeatable)
    #[arg(long = "ignore", value_name = "PATH")]
    pub ignores: Vec<String>,

    /// Files listed on a grouped directory line
    #[arg(
        long,
        env = "INPUT_MAX-FILES-PER-DIR",
        default_value_t = DEFAULT_MAX_FILES_PER_DIR,
        value_parser = parse_positive
    )]
    pub max_files_per_dir: usize,

    /// Files in one directory before they are grouped
    #[arg(
        long,
        env = "INPUT_GROUP-THRESHOLD",
        default_value_t = DEFAULT_GROUP_THRESHOLD,
        value_parser = parse_positive
    )]
    pub group_threshold: usize,

    /// Update the previous notice instead of posting a new one, and delete it
    /// once the tree is clean
    #[arg(long, env = "INPUT_UPDATE-COMMENT")]
    pub update_comment: bool,

    /// File the report text is written to
    #[arg(long, default_value = REPORT_FILE_NAME)]
    pub report_file: PathBuf,

    /// Append `noise-found` and `noise-files` outputs to this file
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// JSON file holding the pull request's comments; when set the run is
    /// treated as a pull request and the notice is reconciled against it
    #[arg(long, value_name = "PATH")]
    pub comments_file: Option<PathBuf>,

    /// Exit with status 1 when noise is found
    #[arg(long)]
    pub deny: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            root: self.root.clone(),
            ignore_file: self.ignore_file.clone(),
            explicit_ignores: self.ignores.clone(),
            max_files_per_dir: self.max_files_per_dir,
            group_threshold: self.group_threshold,
            update_mode: self.update_comment,
            report_file: Some(self.report_file.clone()),
        }
    }
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan for log, scratch and tooling byproduct files
    Check(CheckArgs),
    /// Create a .pr-noise-ignore template
    Init,
}
