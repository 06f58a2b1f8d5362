use std::path::{Component, Path};

use tracing::debug;
use walkdir::WalkDir;

use super::{classifier::Classifier, taxonomy::NoiseKind};
use crate::error::{NoiseError, Result};

/// Result of scanning a tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Flagged paths in traversal order.
    pub flagged: Vec<String>,
    /// Entries examined, excluding pruned subtrees.
    pub visited: usize,
}

/// Walk `root` pre-order and collect noise entries.
///
/// Entries are classified by their path relative to `root` and reported joined
/// onto `root` as given (a root of `.` yields bare relative paths).
///
/// - An entry whose relative or reported path is ignored is skipped along
///   with its subtree.
/// - A directory flagged by the directory family is reported once and not
///   descended into.
/// - Any other directory is descended, even when its own name is flagged.
///
/// Entry order within a directory is the filesystem's. Failing to list the
/// root or any entry below it aborts the scan.
pub fn scan(root: &Path, classifier: &Classifier<'_>) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    let prefix = display_prefix(root);

    let mut walker = WalkDir::new(root).min_depth(1).into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|source| NoiseError::Walk {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;
        result.visited += 1;

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = to_slash_path(relative);
        let reported = join_display(&prefix, &relative);
        let is_dir = entry.file_type().is_dir();

        if classifier.is_suppressed(&relative) || classifier.is_suppressed(&reported) {
            debug!(path = %reported, "ignored");
            if is_dir {
                walker.skip_current_dir();
            }
            continue;
        }

        match classifier.classify_entry(&relative, is_dir) {
            Some(NoiseKind::Directory) if is_dir => {
                debug!(path = %reported, "noise directory, not descending");
                result.flagged.push(reported);
                walker.skip_current_dir();
            }
            Some(_) => {
                result.flagged.push(reported);
            }
            None => {}
        }
    }

    Ok(result)
}

/// Root as a `/`-separated display prefix, or `None` for the current directory.
fn display_prefix(root: &Path) -> Option<String> {
    let prefix = to_slash_path(root);
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        if prefix.starts_with('/') {
            Some(String::new())
        } else {
            None
        }
    } else {
        Some(trimmed.to_string())
    }
}

fn join_display(prefix: &Option<String>, relative: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}/{}", prefix, relative),
        None => relative.to_string(),
    }
}

fn to_slash_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::CurDir => continue,
            Component::RootDir => {
                out.push('/');
                continue;
            }
            _ => {}
        }
        if !out.is_empty() && !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}
