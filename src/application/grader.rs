//! Challenge grader - literal keyword match with semantic fallback.
//!
//! The generator is consulted only when the expected keyword is absent from
//! the answer; a literal match short-circuits without any port call. A
//! failed fallback degrades to the keyword-reveal message so the learner is
//! never blocked.

use std::sync::Arc;

use tracing::warn;

use crate::domain::curriculum::Challenge;
use crate::domain::roles::RoleProfile;
use crate::domain::tutor::{grading, prompts};
use crate::ports::{GenerationRequest, Generator, Retriever};

use super::qa::{join_passages, RagError};

/// Grades free-text challenge answers.
pub struct ChallengeGrader {
    retriever: Arc<dyn Retriever>,
    generator: Arc<dyn Generator>,
}

impl ChallengeGrader {
    pub fn new(retriever: Arc<dyn Retriever>, generator: Arc<dyn Generator>) -> Self {
        Self {
            retriever,
            generator,
        }
    }

    /// Returns feedback text for the learner's answer.
    ///
    /// Grading never advances progression; the learner must still type
    /// 'continue' regardless of the outcome.
    pub async fn grade(
        &self,
        answer: &str,
        challenge: &Challenge,
        profile: Option<&RoleProfile>,
    ) -> String {
        if grading::literal_match(answer, &challenge.keyword) {
            return grading::literal_success_feedback(challenge, profile);
        }

        let request = grading::evaluation_request(challenge, answer);
        match self.evaluate(&request).await {
            Ok(verdict) if grading::shows_understanding(&verdict) => {
                grading::semantic_success_feedback()
            }
            Ok(_) => grading::failure_feedback(challenge, profile),
            Err(err) => {
                warn!(error = %err, "semantic grading fallback failed");
                grading::failure_feedback(challenge, profile)
            }
        }
    }

    async fn evaluate(&self, request: &str) -> Result<String, RagError> {
        let passages = self.retriever.retrieve(request).await?;
        let prompt = prompts::evaluation_prompt(&join_passages(&passages), request);
        let verdict = self.generator.generate(GenerationRequest::new(prompt)).await?;
        Ok(verdict)
    }
}
