//! MailTriage Classify — turns raw message text into a classification.
//!
//! The pipeline is preprocess → classify → compose reply:
//! - [`preprocess::normalize`] cleans and redacts the raw text;
//! - [`semantic::SemanticClassifier`] compares embeddings against reference
//!   phrase sets (requires a loaded embedding backend);
//! - [`keyword::KeywordClassifier`] is the dependency-free fallback;
//! - [`engine::TriageEngine`] wires them together and always returns a
//!   [`types::ClassificationResult`], never an error.

pub mod engine;
pub mod keyword;
pub mod preprocess;
pub mod response;
pub mod semantic;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::TriageEngine;
pub use keyword::KeywordClassifier;
pub use semantic::SemanticClassifier;
pub use types::{Category, Classification, ClassificationResult};
