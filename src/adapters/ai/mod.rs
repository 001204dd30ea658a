//! AI adapters - Generator port implementations.

pub mod mock_generator;
pub mod openai_generator;

pub use mock_generator::{MockError, MockGenerator, MockResponse};
pub use openai_generator::{OpenAiConfig, OpenAiGenerator};
