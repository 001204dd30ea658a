//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generator implementations (OpenAI-compatible API, mock)
//! - `retrieval` - Retriever implementations (in-memory term overlap)
//! - `http` - REST surface over the application handlers

pub mod ai;
pub mod http;
pub mod retrieval;

pub use ai::{MockError, MockGenerator, OpenAiConfig, OpenAiGenerator};
pub use retrieval::InMemoryRetriever;
