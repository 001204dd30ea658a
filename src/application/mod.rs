//! Application Layer - use case orchestration.
//!
//! Handlers coordinate the domain state machine with the retrieval and
//! generation ports. They hold no business rules of their own; classification,
//! progression, and grading decisions live in the domain.

pub mod grader;
pub mod handlers;
pub mod qa;

pub use grader::ChallengeGrader;
pub use qa::{QuestionAnswerer, RagError, ANSWER_UNAVAILABLE};
