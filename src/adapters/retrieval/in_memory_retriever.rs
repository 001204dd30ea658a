//! In-memory retriever over a pre-chunked policy corpus.
//!
//! Scores passages by query term overlap. This stands in for a vector
//! index: the corpus is small (one policy handbook) and term overlap is
//! enough to surface the relevant section for grounding.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::ports::{Passage, Retriever, RetrieverError};

/// Retriever backed by an in-memory list of passages.
pub struct InMemoryRetriever {
    passages: Vec<Passage>,
    top_k: usize,
}

impl InMemoryRetriever {
    /// Creates a retriever over pre-chunked passages.
    pub fn new(chunks: Vec<String>, top_k: usize) -> Self {
        Self {
            passages: chunks.into_iter().map(Passage::new).collect(),
            top_k,
        }
    }

    /// Creates a retriever from raw corpus text, chunked on blank lines.
    pub fn from_text(text: &str, top_k: usize) -> Self {
        let chunks = text
            .split("\n\n")
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(String::from)
            .collect();
        Self::new(chunks, top_k)
    }

    /// Number of passages in the corpus.
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// Returns true when the corpus holds no passages.
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    fn terms(text: &str) -> HashSet<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    fn score(query_terms: &HashSet<String>, passage: &Passage) -> usize {
        let passage_terms = Self::terms(&passage.text);
        query_terms.intersection(&passage_terms).count()
    }
}

#[async_trait]
impl Retriever for InMemoryRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>, RetrieverError> {
        let query_terms = Self::terms(query);
        if query_terms.is_empty() {
            return Err(RetrieverError::InvalidQuery(
                "query contains no searchable terms".to_string(),
            ));
        }

        let mut scored: Vec<(usize, &Passage)> = self
            .passages
            .iter()
            .map(|p| (Self::score(&query_terms, p), p))
            .filter(|(score, _)| *score > 0)
            .collect();

        // Stable sort keeps corpus order among equally-scored passages.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.top_k);

        Ok(scored.into_iter().map(|(_, p)| p.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> InMemoryRetriever {
        InMemoryRetriever::new(
            vec![
                "Passwords must be at least 12 characters long and changed every 90 days."
                    .to_string(),
                "All security incidents must be reported to the ICT Helpdesk immediately."
                    .to_string(),
                "Visitors must be escorted at all times within substations.".to_string(),
            ],
            2,
        )
    }

    #[tokio::test]
    async fn best_match_comes_first() {
        let passages = corpus()
            .retrieve("how often must passwords be changed?")
            .await
            .unwrap();
        assert!(passages[0].text.contains("90 days"));
    }

    #[tokio::test]
    async fn results_are_capped_at_top_k() {
        let passages = corpus().retrieve("must").await.unwrap();
        assert_eq!(passages.len(), 2);
    }

    #[tokio::test]
    async fn unrelated_query_returns_nothing() {
        let passages = corpus().retrieve("quarterly dividend forecast").await.unwrap();
        assert!(passages.is_empty());
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let err = corpus().retrieve("  !?  ").await.unwrap_err();
        assert!(matches!(err, RetrieverError::InvalidQuery(_)));
    }

    #[test]
    fn from_text_chunks_on_blank_lines() {
        let retriever = InMemoryRetriever::from_text(
            "First passage about passwords.\n\nSecond passage about incidents.\n\n",
            5,
        );
        assert_eq!(retriever.len(), 2);
    }
}
