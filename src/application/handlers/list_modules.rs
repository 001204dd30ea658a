//! ListModulesForRoleHandler - the personalized training plan.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::curriculum::{CurriculumStore, ModuleId};
use crate::domain::roles::RoleProfile;

/// Whether a module is required or merely suggested for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModulePriority {
    Mandatory,
    Recommended,
}

/// One entry in a role's training plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAssignment {
    pub module_id: ModuleId,
    pub title: String,
    pub priority: ModulePriority,
}

/// Handler producing the ordered training plan for a role.
pub struct ListModulesForRoleHandler {
    curriculum: Arc<CurriculumStore>,
}

impl ListModulesForRoleHandler {
    pub fn new(curriculum: Arc<CurriculumStore>) -> Self {
        Self { curriculum }
    }

    /// Lists the role's modules, mandatory first, in curriculum order.
    ///
    /// Module ids the curriculum does not know are skipped rather than
    /// surfaced; the plan is advisory, not a contract.
    pub fn handle(&self, profile: &RoleProfile) -> Vec<ModuleAssignment> {
        let mut plan = Vec::new();
        self.push_assignments(&mut plan, &profile.mandatory_modules, ModulePriority::Mandatory);
        self.push_assignments(
            &mut plan,
            &profile.recommended_modules,
            ModulePriority::Recommended,
        );
        plan
    }

    fn push_assignments(
        &self,
        plan: &mut Vec<ModuleAssignment>,
        ids: &[ModuleId],
        priority: ModulePriority,
    ) {
        for id in ids {
            if let Some(module) = self.curriculum.get(id) {
                plan.push(ModuleAssignment {
                    module_id: id.clone(),
                    title: module.title().to_string(),
                    priority,
                });
            }
        }
    }
}
