//! pr-noise - flags byproduct files on pull requests
//!
//! pr-noise scans a source tree for files and directories that are leftovers of
//! incidental work (logs, swap files, scratch files, editor and build caches)
//! rather than project content, renders them as one grouped notice, and keeps
//! a single managed comment on the pull request in sync with that notice.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Invocation settings and defaults
//! - `core`: Detection engine (taxonomy, ignore rules, classifier, scanner)
//! - `error`: Library error type
//! - `pipeline`: Detect, render and publish in one call
//! - `report`: Notice rendering
//! - `review`: Review-thread capability and comment reconciliation

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod review;

pub use error::{NoiseError, Result};
