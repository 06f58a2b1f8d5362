use std::fmt;

/// Identifier of a comment on the review thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A comment as returned by [`ReviewThread::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewComment {
    pub id: CommentId,
    /// Posted by a bot/automation identity rather than a person.
    pub author_is_automation: bool,
    pub body: String,
}

/// Comment operations on one pull request's discussion.
///
/// Every call is a single blocking attempt; retries and timeouts belong to the
/// transport behind this trait.
pub trait ReviewThread {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current comments in listing order.
    fn list(&mut self) -> Result<Vec<ReviewComment>, Self::Error>;

    fn create(&mut self, body: &str) -> Result<(), Self::Error>;

    fn update(&mut self, id: CommentId, body: &str) -> Result<(), Self::Error>;

    fn delete(&mut self, id: CommentId) -> Result<(), Self::Error>;
}
