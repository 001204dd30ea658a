//! Domain layer - pure logic, no I/O.

pub mod curriculum;
pub mod foundation;
pub mod personalization;
pub mod roles;
pub mod session;
pub mod tutor;
