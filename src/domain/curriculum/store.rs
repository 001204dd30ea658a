//! Curriculum store - the canonical ordered module sequence.

use super::content::builtin_modules;
use super::module::{Module, ModuleId};

/// Read-only, ordered store of training modules.
///
/// Loaded once at startup and shared across sessions without locking; nothing
/// mutates it after construction.
#[derive(Debug, Clone)]
pub struct CurriculumStore {
    modules: Vec<Module>,
}

impl CurriculumStore {
    /// Creates a store over the given modules, preserving their order.
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// Creates the store with the built-in ten-module curriculum.
    pub fn builtin() -> Self {
        Self::new(builtin_modules())
    }

    /// Returns all modules in curriculum order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Looks up a module by its stable identifier.
    pub fn get(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == id)
    }

    /// Resolves a module from either its identifier ("Module 2") or its full
    /// display name ("Module 2: Password & Access Control").
    pub fn resolve(&self, reference: &str) -> Option<&Module> {
        let reference = reference.trim();
        self.modules
            .iter()
            .find(|m| m.id().as_str() == reference || m.full_name() == reference)
    }
}

impl Default for CurriculumStore {
    fn default() -> Self {
        Self::builtin()
    }
}
