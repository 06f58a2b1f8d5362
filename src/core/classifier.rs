use std::collections::HashSet;

use super::{
    ignore::IgnoreRules,
    taxonomy::{self, NoiseKind},
};

/// Decides whether a path is noise.
///
/// A path is noise when the built-in taxonomy flags it, no ignore rule matches
/// it and it is not in the caller's explicit ignore list. Checks run cheapest
/// first and short-circuit; ignore rules and the explicit list only ever
/// suppress a flag.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    rules: &'a IgnoreRules,
    explicit: HashSet<String>,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a IgnoreRules) -> Self {
        Self {
            rules,
            explicit: HashSet::new(),
        }
    }

    /// Exact paths that are never reported, regardless of the taxonomy.
    pub fn with_explicit_ignores<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.explicit.extend(paths.into_iter().map(Into::into));
        self
    }

    /// True when the path is suppressed by the explicit list or an ignore rule.
    pub fn is_suppressed(&self, path: &str) -> bool {
        self.explicit.contains(path) || self.rules.is_ignored(path)
    }

    /// Which family flags `path`, after suppression.
    pub fn classify(&self, path: &str) -> Option<NoiseKind> {
        if self.is_suppressed(path) {
            return None;
        }
        taxonomy::classify(path)
    }

    /// Classify a scanned entry.
    ///
    /// Directories are tested against the directory family with a trailing
    /// separator so the directory itself matches, then against the filename
    /// family like any other path.
    pub fn classify_entry(&self, path: &str, is_dir: bool) -> Option<NoiseKind> {
        if self.is_suppressed(path) {
            return None;
        }
        if is_dir && taxonomy::matches_dir_pattern(&format!("{}/", path)) {
            return Some(NoiseKind::Directory);
        }
        taxonomy::classify(path)
    }

    pub fn is_noise(&self, path: &str) -> bool {
        self.classify(path).is_some()
    }

    /// Filter a candidate list down to its noise entries, keeping input order.
    pub fn detect<S: AsRef<str>>(&self, paths: &[S]) -> Vec<String> {
        paths
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| self.is_noise(path))
            .map(String::from)
            .collect()
    }
}
