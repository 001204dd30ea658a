//! Retriever Port - Interface for the policy passage retrieval backend.
//!
//! The retriever turns a free-text query into an ordered set of relevant
//! passages from the policy corpus. No ranking-score contract is relied upon
//! beyond ordering; top-k is an adapter/configuration concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One retrieved passage of policy text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Passage content.
    pub text: String,
    /// Optional origin label (document/section), informational only.
    pub source: Option<String>,
}

impl Passage {
    /// Creates a passage with no source label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// Sets the source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Port for passage retrieval.
///
/// Implementations query an embedded/searchable index built by the (out of
/// scope) corpus ingestion pipeline.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Retrieves the most relevant passages for a query, best match first.
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>, RetrieverError>;
}

/// Retriever errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrieverError {
    /// The backing index cannot serve queries.
    #[error("retriever unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error reaching a remote index.
    #[error("network error: {0}")]
    Network(String),

    /// The query was rejected by the backend.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl RetrieverError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Returns true if retrying the same query may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RetrieverError::Unavailable { .. } | RetrieverError::Network(_)
        )
    }
}
