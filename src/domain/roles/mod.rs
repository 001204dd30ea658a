//! Role profiles and the registry that resolves them.

mod profile;
mod registry;

pub use profile::{RiskLevel, RoleProfile, TechnicalLevel};
pub use registry::{RoleProfileRegistry, CUSTOM_ROLE_MARKER};
