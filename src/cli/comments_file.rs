//! Review thread backed by a JSON file.
//!
//! The hosting workflow dumps the pull request's comments into a file, runs
//! `check --comments-file`, and replays whatever changed. The file is a JSON
//! array of `{ "id", "authorIsAutomation", "body" }` objects; a missing file is
//! an empty thread. Comments created here are authored by automation.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::review::{CommentId, ReviewComment, ReviewThread};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredComment {
    id: u64,
    #[serde(default)]
    author_is_automation: bool,
    body: String,
}

impl From<StoredComment> for ReviewComment {
    fn from(c: StoredComment) -> Self {
        ReviewComment {
            id: CommentId(c.id),
            author_is_automation: c.author_is_automation,
            body: c.body,
        }
    }
}

pub struct CommentsFile {
    path: PathBuf,
}

impl CommentsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> io::Result<Vec<StoredComment>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => serde_json::from_str(&content).map_err(io::Error::from),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn write(&self, comments: &[StoredComment]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(comments).map_err(io::Error::from)?;
        fs::write(&self.path, json)
    }

    fn not_found(id: CommentId) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, format!("comment {} not found", id))
    }
}

impl ReviewThread for CommentsFile {
    type Error = io::Error;

    fn list(&mut self) -> io::Result<Vec<ReviewComment>> {
        Ok(self.read()?.into_iter().map(ReviewComment::from).collect())
    }

    fn create(&mut self, body: &str) -> io::Result<()> {
        let mut comments = self.read()?;
        let id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        comments.push(StoredComment {
            id,
            author_is_automation: true,
            body: body.to_string(),
        });
        self.write(&comments)
    }

    fn update(&mut self, id: CommentId, body: &str) -> io::Result<()> {
        let mut comments = self.read()?;
        let comment = comments
            .iter_mut()
            .find(|c| c.id == id.0)
            .ok_or_else(|| Self::not_found(id))?;
        comment.body = body.to_string();
        self.write(&comments)
    }

    fn delete(&mut self, id: CommentId) -> io::Result<()> {
        let mut comments = self.read()?;
        let before = comments.len();
        comments.retain(|c| c.id != id.0);
        if comments.len() == before {
            return Err(Self::not_found(id));
        }
        self.write(&comments)
    }
}
