//! Rendering flagged paths into the review notice.
//!
//! Output is fully determined by the input set and [`ReportOptions`]: directory
//! groups are ordered lexicographically and basenames are sorted within each
//! group, so rendering the same paths twice yields identical text.
//!
//! Top-level paths are grouped under a `None` key rather than a string sentinel,
//! so a real `root/` directory never merges with them. `None` orders before
//! every named directory, which puts the root group first.

use std::collections::BTreeMap;

use crate::error::{NoiseError, Result};

/// Text returned when nothing was flagged.
pub const NO_NOISE_MESSAGE: &str = "\u{2705} No noise detected.";

/// Leading text of every report header; the count follows it.
pub const HEADER_PREFIX: &str = "\u{26a0}\u{fe0f} Found ";

/// Text following the count in the header.
pub const HEADER_SUFFIX: &str = " potentially superfluous files:";

/// Closing remediation sentence.
pub const REMEDIATION: &str = "\u{1f9f9} Consider removing them if they are not needed.";

/// Label used in place of a directory for top-level paths.
const ROOT_LABEL: &str = "(root)";

pub const DEFAULT_MAX_FILES_PER_DIR: usize = 3;
pub const DEFAULT_GROUP_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Basenames listed on a grouped line before "... and N more".
    pub max_files_per_dir: usize,
    /// Files in one directory at which they collapse into a single line.
    pub group_threshold: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_files_per_dir: DEFAULT_MAX_FILES_PER_DIR,
            group_threshold: DEFAULT_GROUP_THRESHOLD,
        }
    }
}

impl ReportOptions {
    /// Both values must be positive.
    pub fn new(max_files_per_dir: usize, group_threshold: usize) -> Result<Self> {
        if max_files_per_dir == 0 {
            return Err(NoiseError::InvalidOption {
                name: "max-files-per-dir",
                reason: "must be a positive integer".to_string(),
            });
        }
        if group_threshold == 0 {
            return Err(NoiseError::InvalidOption {
                name: "group-threshold",
                reason: "must be a positive integer".to_string(),
            });
        }
        Ok(Self {
            max_files_per_dir,
            group_threshold,
        })
    }
}

/// Header line for `count` flagged paths.
pub fn header(count: usize) -> String {
    format!("{}{}{}", HEADER_PREFIX, count, HEADER_SUFFIX)
}

/// Render flagged paths as the notice text.
///
/// # Example
///
/// ```
/// use pr_noise::report::{format_report, ReportOptions};
///
/// let text = format_report(&["debug.log"], ReportOptions::default());
/// assert!(text.contains("- debug.log"));
/// ```
pub fn format_report<S: AsRef<str>>(paths: &[S], options: ReportOptions) -> String {
    if paths.is_empty() {
        return NO_NOISE_MESSAGE.to_string();
    }

    let mut out = header(paths.len());
    out.push('\n');

    for (dir, mut names) in group_by_directory(paths) {
        names.sort();
        if names.len() >= options.group_threshold {
            out.push_str(&grouped_line(dir.as_deref(), &names, options.max_files_per_dir));
            out.push('\n');
        } else {
            for name in names {
                out.push_str("- ");
                if let Some(dir) = dir.as_deref() {
                    out.push_str(dir);
                    out.push('/');
                }
                out.push_str(name);
                out.push('\n');
            }
        }
    }

    out.push('\n');
    out.push_str(REMEDIATION);
    out
}

/// Partition paths into `directory -> basenames`. `None` is the root.
fn group_by_directory<S: AsRef<str>>(paths: &[S]) -> BTreeMap<Option<String>, Vec<&str>> {
    let mut groups: BTreeMap<Option<String>, Vec<&str>> = BTreeMap::new();
    for path in paths {
        let path = path.as_ref();
        // Split on either separator so mixed Windows/Unix input groups together.
        match path.rfind(['/', '\\']) {
            Some(idx) => groups
                .entry(Some(path[..idx].replace('\\', "/")))
                .or_default()
                .push(&path[idx + 1..]),
            None => groups.entry(None).or_default().push(path),
        }
    }
    groups
}

fn grouped_line(dir: Option<&str>, names: &[&str], max_files: usize) -> String {
    let label = match dir {
        Some(dir) => format!("{}/", dir),
        None => ROOT_LABEL.to_string(),
    };
    let shown = names.iter().take(max_files).copied().collect::<Vec<_>>().join(", ");
    let hidden = names.len().saturating_sub(max_files);
    if hidden > 0 {
        format!(
            "- {} ({} files: {}... and {} more)",
            label,
            names.len(),
            shown,
            hidden
        )
    } else {
        format!("- {} ({} files: {})", label, names.len(), shown)
    }
}
