//! User allow-list loaded from the repository's ignore file.
//!
//! Each non-blank, non-`#` line is a glob where `*` matches any run of
//! characters (including `/`) and every other character is literal. A rule
//! must match the entire relative path.
//!
//! [`IgnoreRules`] is an immutable snapshot. [`IgnoreCache`] owns the current
//! snapshot and swaps in a fresh one on [`IgnoreCache::reload`], so callers that
//! need isolation (tests) reload instead of sharing hidden global state.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use regex::Regex;
use tracing::{debug, warn};

use super::taxonomy::normalize;

/// Default ignore file name, relative to the repository root.
pub const IGNORE_FILE_NAME: &str = ".pr-noise-ignore";

/// One compiled line of the ignore file.
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    source: String,
    regex: Regex,
}

impl IgnoreRule {
    /// Compile a glob line into an anchored matcher.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{}$", body))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The line this rule was compiled from.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// A set of ignore rules. Empty when no ignore file exists.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse ignore-file contents.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are dropped.
    pub fn parse(content: &str) -> Self {
        let rules = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| match IgnoreRule::new(line) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    warn!(pattern = line, error = %e, "skipping ignore pattern");
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Load rules from `path`.
    ///
    /// Never fails: an absent file yields an empty set, and an unreadable one
    /// is logged and also treated as empty.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => {
                let rules = Self::parse(&content);
                debug!(path = %path.display(), count = rules.len(), "loaded ignore rules");
                rules
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ignore file");
                Self::empty()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read ignore file, ignoring it");
                Self::empty()
            }
        }
    }

    /// True when any rule matches the whole path.
    ///
    /// Backslashes are normalized first so rules written with `/` also apply
    /// to Windows-style paths.
    pub fn is_ignored(&self, path: &str) -> bool {
        if self.rules.is_empty() {
            return false;
        }
        let normalized = normalize(path);
        self.rules.iter().any(|rule| rule.is_match(&normalized))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IgnoreRule> {
        self.rules.iter()
    }
}

/// Owns the current rule snapshot for one ignore-file path.
#[derive(Debug)]
pub struct IgnoreCache {
    path: PathBuf,
    current: Arc<IgnoreRules>,
}

impl IgnoreCache {
    /// Load the snapshot for `path` once.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = Arc::new(IgnoreRules::load(&path));
        Self { path, current }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached snapshot. Cheap to clone and hold across a scan.
    pub fn rules(&self) -> Arc<IgnoreRules> {
        Arc::clone(&self.current)
    }

    /// Re-read the ignore file and replace the cached snapshot.
    ///
    /// Snapshots handed out earlier keep their old rules.
    pub fn reload(&mut self) -> Arc<IgnoreRules> {
        self.current = Arc::new(IgnoreRules::load(&self.path));
        self.rules()
    }
}
