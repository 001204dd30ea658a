//! SelectModuleHandler - enter a training module.

use std::sync::Arc;

use crate::domain::curriculum::CurriculumStore;
use crate::domain::session::SessionContext;
use crate::domain::tutor::progression;

/// Command to select a module by identifier or full display name.
#[derive(Debug, Clone)]
pub struct SelectModuleCommand {
    pub module: String,
    pub context: SessionContext,
}

/// Result of selecting a module.
#[derive(Debug, Clone)]
pub struct SelectModuleResult {
    pub response: String,
    pub context: SessionContext,
}

/// Error type for module selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectModuleError {
    #[error("Unknown module: {0}")]
    UnknownModule(String),
}

/// Handler for entering modules.
pub struct SelectModuleHandler {
    curriculum: Arc<CurriculumStore>,
}

impl SelectModuleHandler {
    pub fn new(curriculum: Arc<CurriculumStore>) -> Self {
        Self { curriculum }
    }

    pub fn handle(&self, cmd: SelectModuleCommand) -> Result<SelectModuleResult, SelectModuleError> {
        let module = self
            .curriculum
            .resolve(&cmd.module)
            .ok_or_else(|| SelectModuleError::UnknownModule(cmd.module.clone()))?;

        let mut context = cmd.context;
        let response = progression::select_module(&mut context, module);
        context.record_assistant_turn(&response);

        Ok(SelectModuleResult { response, context })
    }
}
