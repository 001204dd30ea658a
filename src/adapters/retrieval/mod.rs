//! Retrieval adapters - Retriever port implementations.

pub mod in_memory_retriever;

pub use in_memory_retriever::InMemoryRetriever;
