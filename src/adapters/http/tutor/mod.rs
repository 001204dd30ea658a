//! Tutor HTTP adapter - routes, handlers, and DTOs.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TutorHandlers;
pub use routes::tutor_routes;
