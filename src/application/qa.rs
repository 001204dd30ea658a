//! Retrieval-augmented question answering.
//!
//! Retrieves policy passages for the learner's question, builds a
//! role/module-framed prompt, and asks the generator. Port failures are
//! recovered locally: the learner gets a fixed "answer unavailable" reply
//! and the failure is logged, never propagated raw.

use std::sync::Arc;

use tracing::warn;

use crate::domain::roles::RoleProfile;
use crate::domain::tutor::prompts;
use crate::ports::{
    GenerationRequest, Generator, GeneratorError, Passage, Retriever, RetrieverError,
};

/// Recoverable reply when the retriever or generator cannot be reached.
pub const ANSWER_UNAVAILABLE: &str =
    "I couldn't reach the policy knowledge base just now. Please try your question again in a \
     moment, or type 'continue' to proceed with your training.";

/// Failure in the retrieve-then-generate flow.
#[derive(Debug, thiserror::Error)]
pub enum RagError {
    #[error(transparent)]
    Retriever(#[from] RetrieverError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Joins retrieved passages into a prompt context block.
pub(crate) fn join_passages(passages: &[Passage]) -> String {
    passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Answers learner questions against the policy corpus.
pub struct QuestionAnswerer {
    retriever: Arc<dyn Retriever>,
    generator: Arc<dyn Generator>,
}

impl QuestionAnswerer {
    pub fn new(retriever: Arc<dyn Retriever>, generator: Arc<dyn Generator>) -> Self {
        Self {
            retriever,
            generator,
        }
    }

    /// Answers a question scoped to the active module's topic.
    pub async fn answer_module_question(
        &self,
        user_name: &str,
        profile: Option<&RoleProfile>,
        module_name: &str,
        step_number: usize,
        question: &str,
    ) -> String {
        match self
            .try_module_question(user_name, profile, module_name, step_number, question)
            .await
        {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "module question answering failed");
                ANSWER_UNAVAILABLE.to_string()
            }
        }
    }

    /// Answers a general cybersecurity question.
    pub async fn answer_general_question(
        &self,
        user_name: &str,
        profile: Option<&RoleProfile>,
        question: &str,
    ) -> String {
        match self.try_general_question(user_name, profile, question).await {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "general question answering failed");
                ANSWER_UNAVAILABLE.to_string()
            }
        }
    }

    async fn try_module_question(
        &self,
        user_name: &str,
        profile: Option<&RoleProfile>,
        module_name: &str,
        step_number: usize,
        question: &str,
    ) -> Result<String, RagError> {
        let passages = self.retriever.retrieve(question).await?;
        let prompt = prompts::module_question_prompt(
            user_name,
            profile,
            module_name,
            step_number,
            &join_passages(&passages),
            question,
        );
        let answer = self.generator.generate(GenerationRequest::new(prompt)).await?;
        Ok(answer)
    }

    async fn try_general_question(
        &self,
        user_name: &str,
        profile: Option<&RoleProfile>,
        question: &str,
    ) -> Result<String, RagError> {
        let passages = self.retriever.retrieve(question).await?;
        let prompt = prompts::general_question_prompt(
            user_name,
            profile,
            &join_passages(&passages),
            question,
        );
        let answer = self.generator.generate(GenerationRequest::new(prompt)).await?;
        Ok(answer)
    }
}
