//! Application handlers - one per tutor operation.

pub mod dispatch;
pub mod list_modules;
pub mod onboard;
pub mod select_module;

pub use dispatch::{DispatchCommand, DispatchHandler, DispatchResult};
pub use list_modules::{ListModulesForRoleHandler, ModuleAssignment, ModulePriority};
pub use onboard::{OnboardCommand, OnboardError, OnboardHandler, OnboardResult};
pub use select_module::{
    SelectModuleCommand, SelectModuleError, SelectModuleHandler, SelectModuleResult,
};
