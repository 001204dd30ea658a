//! Curriculum - the fixed, ordered training module catalog.

mod content;
mod module;
mod step;
mod store;

pub use module::{Module, ModuleId};
pub use step::{Challenge, Step};
pub use store::CurriculumStore;
