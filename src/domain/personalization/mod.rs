//! Role-based content personalization.

mod personalizer;
mod scenarios;

pub use personalizer::{completion_note, personalize};
pub use scenarios::{scenario_for, RoleScenario};
