//! Training modules and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::step::Step;

/// Stable module identifier, e.g. "Module 3".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId(String);

impl ModuleId {
    /// Creates a module identifier.
    pub fn new(id: impl Into<String>) -> Self {
        ModuleId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        ModuleId::new(id)
    }
}

/// One unit of the training curriculum: an ordered sequence of steps.
///
/// Invariants, checked by [`Module::validate`]:
/// - the step sequence ends in exactly one `Final` step;
/// - every `Challenge` step carries a non-empty expected keyword;
/// - the first step is an `Instruction` (it is shown on module entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    id: ModuleId,
    title: String,
    steps: Vec<Step>,
}

impl Module {
    /// Creates a module after validating its step sequence.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        steps: Vec<Step>,
    ) -> Result<Self, ValidationError> {
        let module = Self {
            id,
            title: title.into(),
            steps,
        };
        module.validate()?;
        Ok(module)
    }

    /// Returns the module identifier.
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    /// Returns the display title, e.g. "Password & Access Control".
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered step sequence.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the full display name, e.g. "Module 2: Password & Access Control".
    pub fn full_name(&self) -> String {
        format!("{}: {}", self.id, self.title)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.steps.is_empty() {
            return Err(ValidationError::empty_field("steps"));
        }
        match self.steps.first() {
            Some(Step::Instruction { .. }) => {}
            _ => {
                return Err(ValidationError::invalid_format(
                    "steps",
                    "first step must be an instruction",
                ))
            }
        }
        let finals = self.steps.iter().filter(|s| s.is_final()).count();
        if finals != 1 || !self.steps[self.steps.len() - 1].is_final() {
            return Err(ValidationError::invalid_format(
                "steps",
                "step sequence must end in exactly one final step",
            ));
        }
        for step in &self.steps {
            if let Some(challenge) = step.as_challenge() {
                if challenge.keyword.trim().is_empty() {
                    return Err(ValidationError::empty_field("challenge keyword"));
                }
            }
        }
        Ok(())
    }
}
