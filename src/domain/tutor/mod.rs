//! The tutor core: intent classification, module progression, and
//! challenge grading primitives.

pub mod grading;
pub mod intent;
pub mod progression;
pub mod prompts;

pub use intent::{classify, is_help_request, Intent, IntentKind};
