//! Review-thread side of the pipeline: the abstract comment capability and
//! the reconciler that keeps one managed notice per pull request.

pub mod reconcile;
pub mod thread;

pub use reconcile::{
    COMMENT_MARKER, ReconcileAction, ReconcileContext, comment_body, is_managed_comment, reconcile,
};
pub use thread::{CommentId, ReviewComment, ReviewThread};
