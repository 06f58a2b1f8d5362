use tracing::debug;

use super::thread::{CommentId, ReviewComment, ReviewThread};
use crate::{
    error::{NoiseError, Result},
    report::{HEADER_PREFIX, HEADER_SUFFIX, REMEDIATION},
};

/// Hidden tag appended to every comment body this tool posts.
pub const COMMENT_MARKER: &str = "<!-- pr-noise-detector -->";

/// Where and how the notice is being reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileContext {
    /// The run belongs to a pull request; otherwise nothing is posted.
    pub pull_request: bool,
    /// Keep one managed comment up to date instead of posting a new one per run.
    pub update_mode: bool,
}

/// The single mutation performed, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    Skipped,
    Created,
    Updated(CommentId),
    Deleted(CommentId),
}

/// Comment body posted for a report.
pub fn comment_body(report: &str) -> String {
    format!("{}\n\n{}", report, COMMENT_MARKER)
}

/// True for a comment previously posted by this tool.
///
/// Matches the hidden marker, or for comments that predate it, the header and
/// remediation landmarks of the report text.
pub fn is_managed_comment(comment: &ReviewComment) -> bool {
    if !comment.author_is_automation {
        return false;
    }
    let body = comment.body.as_str();
    body.contains(COMMENT_MARKER)
        || (body.starts_with(HEADER_PREFIX)
            && body.contains(HEADER_SUFFIX)
            && body.contains(REMEDIATION))
}

/// Bring the review thread in line with the current report.
///
/// - Outside a pull request nothing happens.
/// - With flagged paths: create a comment, or in update mode rewrite the last
///   managed comment (creating one if none exists).
/// - With nothing flagged: in update mode delete the last managed comment;
///   otherwise do nothing.
///
/// At most one create, update or delete call is issued.
pub fn reconcile<T: ReviewThread>(
    thread: &mut T,
    flagged_count: usize,
    report: &str,
    ctx: ReconcileContext,
) -> Result<ReconcileAction> {
    if !ctx.pull_request {
        debug!("not a pull request, skipping comment");
        return Ok(ReconcileAction::Skipped);
    }

    if flagged_count > 0 {
        let body = comment_body(report);
        if ctx.update_mode
            && let Some(id) = find_managed_comment(thread)?
        {
            debug!(%id, "updating existing noise comment");
            thread
                .update(id, &body)
                .map_err(|e| NoiseError::remote("update", e))?;
            return Ok(ReconcileAction::Updated(id));
        }
        debug!("creating noise comment");
        thread
            .create(&body)
            .map_err(|e| NoiseError::remote("create", e))?;
        return Ok(ReconcileAction::Created);
    }

    if !ctx.update_mode {
        return Ok(ReconcileAction::Skipped);
    }

    match find_managed_comment(thread)? {
        Some(id) => {
            debug!(%id, "no noise left, deleting comment");
            thread
                .delete(id)
                .map_err(|e| NoiseError::remote("delete", e))?;
            Ok(ReconcileAction::Deleted(id))
        }
        None => Ok(ReconcileAction::Skipped),
    }
}

/// The last managed comment in listing order.
fn find_managed_comment<T: ReviewThread>(thread: &mut T) -> Result<Option<CommentId>> {
    let comments = thread.list().map_err(|e| NoiseError::remote("list", e))?;
    Ok(comments
        .iter()
        .rev()
        .find(|c| is_managed_comment(c))
        .map(|c| c.id))
}
