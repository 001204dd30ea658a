//! Ports - interfaces to external collaborators.
//!
//! The tutor core consumes two narrow interfaces: a retriever that returns
//! relevant policy passages for a query, and a generator that turns a prompt
//! into free text. Adapters implement them against concrete backends.

mod generator;
mod retriever;

pub use generator::{GenerationRequest, Generator, GeneratorError};
pub use retriever::{Passage, Retriever, RetrieverError};
