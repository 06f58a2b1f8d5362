//! Built-in noise patterns.
//!
//! Two fixed families are evaluated against a path whose backslashes have been
//! normalized to forward slashes:
//!
//! - **Filename family**: extensions and name fragments left behind by editors,
//!   debuggers, scratch work and the OS (`.log`, `.swp`, `scratch.`, `.DS_Store`...).
//! - **Directory family**: well-known tooling/output directories at the root of
//!   the scanned tree (`node_modules/`, `.vscode/`, `dist/`...). These only match
//!   when the directory name is followed by a separator, so a directory entry
//!   must be tested with a trailing `/`.
//!
//! The tables are constants; nothing here is user-configurable.

use std::sync::LazyLock;

use regex::RegexSet;

/// Filename patterns. Fixed extensions are case-sensitive, name fragments are not.
const FILE_PATTERNS: &[&str] = &[
    r"\.log$",
    r"\.tmp$",
    r"\.bak$",
    r"\.swp$",
    r"(?i)debug\.",
    r"(?i)test-output",
    r"\.orig$",
    r"(?i)scratch\.",
    r"(?i)temp\.",
    r"\.draft$",
    r"\.checkpoint$",
    r"\.autosave$",
    r"(?i)untitled",
    r"(?i)new-file",
    r"\.DS_Store$",
    r"Thumbs\.db$",
    r"\.pyc$",
    r"\.pyo$",
];

/// Directory names matched as the first path segment.
const DIR_NAMES: &[&str] = &[
    ".vscode",
    ".idea",
    ".pytest_cache",
    "coverage",
    "__pycache__",
    "node_modules",
    "tmp",
    "temp",
    "dist",
    "build",
    "scratch",
    "debug",
    "experiments",
    ".cache",
    ".next",
    ".nuxt",
    "out",
    "output",
];

static FILE_SET: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(FILE_PATTERNS).expect("built-in file patterns are valid"));

static DIR_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(
        DIR_NAMES
            .iter()
            .map(|name| format!("^{}/", regex::escape(name))),
    )
    .expect("built-in directory patterns are valid")
});

/// Which pattern family flagged a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    /// Matched a filename pattern.
    File,
    /// Matched a root tooling/output directory prefix.
    Directory,
}

/// Replace Windows separators so every pattern sees `/`.
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

pub fn matches_file_pattern(path: &str) -> bool {
    FILE_SET.is_match(&normalize(path))
}

pub fn matches_dir_pattern(path: &str) -> bool {
    DIR_SET.is_match(&normalize(path))
}

/// Classify a path by name alone.
///
/// The directory family wins when both match, since it decides whether the
/// scanner descends.
pub fn classify(path: &str) -> Option<NoiseKind> {
    let normalized = normalize(path);
    if DIR_SET.is_match(&normalized) {
        Some(NoiseKind::Directory)
    } else if FILE_SET.is_match(&normalized) {
        Some(NoiseKind::File)
    } else {
        None
    }
}

/// True when either family flags the path.
pub fn is_noise_name(path: &str) -> bool {
    classify(path).is_some()
}
