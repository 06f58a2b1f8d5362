//! Detect, render and (optionally) reconcile in one call.

use std::fs;

use tracing::debug;

use crate::{
    config::Settings,
    core::{Classifier, IgnoreCache, scan},
    error::{NoiseError, Result},
    report::format_report,
    review::{ReconcileAction, ReconcileContext, ReviewThread, reconcile},
};

/// Outcome of scanning a tree.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Flagged paths in traversal order.
    pub flagged: Vec<String>,
    /// Rendered notice text.
    pub report: String,
    /// Entries examined by the scan.
    pub visited: usize,
}

impl Detection {
    pub fn noise_found(&self) -> bool {
        !self.flagged.is_empty()
    }

    /// `noise-found` and `noise-files` output values.
    pub fn outputs(&self) -> Result<Vec<(&'static str, String)>> {
        let files = serde_json::to_string(&self.flagged)?;
        Ok(vec![
            ("noise-found", self.noise_found().to_string()),
            ("noise-files", files),
        ])
    }
}

/// Scan `settings.root` and render the report.
///
/// The ignore file is read once here; the report is written to
/// `settings.report_file` when set.
pub fn detect(settings: &Settings) -> Result<Detection> {
    let options = settings.report_options()?;
    let cache = IgnoreCache::new(&settings.ignore_file);
    let rules = cache.rules();
    let classifier =
        Classifier::new(&rules).with_explicit_ignores(settings.explicit_ignores.iter().cloned());

    let scanned = scan(&settings.root, &classifier)?;
    debug!(
        visited = scanned.visited,
        flagged = scanned.flagged.len(),
        "scan finished"
    );

    let report = format_report(&scanned.flagged, options);
    if let Some(path) = &settings.report_file {
        fs::write(path, &report).map_err(|source| NoiseError::Io {
            path: path.clone(),
            source,
        })?;
    }

    Ok(Detection {
        flagged: scanned.flagged,
        report,
        visited: scanned.visited,
    })
}

/// Reconcile a detection against a review thread.
pub fn publish<T: ReviewThread>(
    thread: &mut T,
    detection: &Detection,
    ctx: ReconcileContext,
) -> Result<ReconcileAction> {
    reconcile(thread, detection.flagged.len(), &detection.report, ctx)
}
