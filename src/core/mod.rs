//! Detection engine: built-in taxonomy, user ignore rules, the classifier that
//! combines them, and the tree scanner that applies it to a directory.

pub mod classifier;
pub mod ignore;
pub mod scanner;
pub mod taxonomy;

pub use classifier::Classifier;
pub use ignore::{IGNORE_FILE_NAME, IgnoreCache, IgnoreRule, IgnoreRules};
pub use scanner::{ScanResult, scan};
pub use taxonomy::NoiseKind;
