//! HTTP adapters - the REST surface over the application handlers.

pub mod tutor;

pub use tutor::{tutor_routes, TutorHandlers};
