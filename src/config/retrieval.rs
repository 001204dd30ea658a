//! Retrieval configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Retrieval configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// Path to the policy corpus text file, chunked on blank lines
    pub corpus_path: Option<PathBuf>,

    /// Number of passages to return per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl RetrievalConfig {
    /// Validate retrieval configuration
    ///
    /// Grounded answering requires a corpus; refuse to start without one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(path) = &self.corpus_path else {
            return Err(ValidationError::MissingRequired("RETRIEVAL__CORPUS_PATH"));
        };
        if !path.is_file() {
            return Err(ValidationError::CorpusNotFound(
                path.display().to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(ValidationError::InvalidTopK);
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    5
}
