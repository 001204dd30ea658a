//! OnboardHandler - create a session context from name and role.

use std::sync::Arc;

use crate::domain::roles::{RoleProfileRegistry, CUSTOM_ROLE_MARKER};
use crate::domain::session::SessionContext;

/// Command to onboard a new learner.
#[derive(Debug, Clone)]
pub struct OnboardCommand {
    pub name: String,
    pub role: String,
    /// Free-text role description, required when `role` is the
    /// custom-role marker.
    pub custom_role: Option<String>,
}

/// Result of onboarding: the initial context and the welcome message.
#[derive(Debug, Clone)]
pub struct OnboardResult {
    pub context: SessionContext,
    pub welcome: String,
}

/// Onboarding validation failures. These block session creation; no context
/// is created on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardError {
    #[error("Please provide your name to begin training")]
    MissingName,
    #[error("Please provide your role to begin training")]
    MissingRole,
    #[error("Please specify your custom role")]
    MissingCustomRole,
}

/// Handler for onboarding learners.
pub struct OnboardHandler {
    registry: Arc<RoleProfileRegistry>,
}

impl OnboardHandler {
    pub fn new(registry: Arc<RoleProfileRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, cmd: OnboardCommand) -> Result<OnboardResult, OnboardError> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(OnboardError::MissingName);
        }
        let role = cmd.role.trim();
        if role.is_empty() {
            return Err(OnboardError::MissingRole);
        }

        let profile = if role == CUSTOM_ROLE_MARKER {
            match cmd.custom_role.as_deref().map(str::trim) {
                Some(custom) if !custom.is_empty() => self.registry.synthesize(custom),
                _ => return Err(OnboardError::MissingCustomRole),
            }
        } else {
            self.registry.resolve(role)
        };

        let welcome = format!(
            "Hello {}! As a {} in {}, you play a key role in our security. Your training is \
             customized for your {} risk level role. Pick a module from your personalized \
             training plan to begin!",
            name, profile.role, profile.department, profile.risk_level
        );

        let mut context = SessionContext::new(name, Some(profile));
        context.record_assistant_turn(&welcome);

        Ok(OnboardResult { context, welcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roles::RiskLevel;

    fn handler() -> OnboardHandler {
        OnboardHandler::new(Arc::new(RoleProfileRegistry::builtin()))
    }

    #[test]
    fn onboards_listed_role() {
        let result = handler()
            .handle(OnboardCommand {
                name: "Amy".to_string(),
                role: "Administration Officer".to_string(),
                custom_role: None,
            })
            .unwrap();

        let profile = result.context.profile.as_ref().unwrap();
        assert_eq!(profile.risk_level, RiskLevel::Standard);
        assert_eq!(
            profile
                .mandatory_modules
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>(),
            vec!["Module 1", "Module 2", "Module 3", "Module 5", "Module 10"]
        );
        assert!(result.welcome.contains("Hello Amy!"));
        assert!(result.welcome.contains("standard risk level"));
        assert_eq!(result.context.transcript.len(), 1);
    }

    #[test]
    fn onboards_custom_role_via_marker() {
        let result = handler()
            .handle(OnboardCommand {
                name: "Sam".to_string(),
                role: CUSTOM_ROLE_MARKER.to_string(),
                custom_role: Some("Senior Field Engineer".to_string()),
            })
            .unwrap();

        let profile = result.context.profile.as_ref().unwrap();
        assert_eq!(profile.risk_level, RiskLevel::High);
        assert_eq!(profile.role, "Senior Field Engineer");
    }

    #[test]
    fn unlisted_role_is_synthesized_directly() {
        let result = handler()
            .handle(OnboardCommand {
                name: "Sam".to_string(),
                role: "Senior Field Engineer".to_string(),
                custom_role: None,
            })
            .unwrap();
        assert_eq!(result.context.profile.as_ref().unwrap().risk_level, RiskLevel::High);
    }

    #[test]
    fn missing_name_blocks_onboarding() {
        let result = handler().handle(OnboardCommand {
            name: "  ".to_string(),
            role: "IT Technician".to_string(),
            custom_role: None,
        });
        assert_eq!(result.unwrap_err(), OnboardError::MissingName);
    }

    #[test]
    fn custom_marker_without_text_blocks_onboarding() {
        let result = handler().handle(OnboardCommand {
            name: "Sam".to_string(),
            role: CUSTOM_ROLE_MARKER.to_string(),
            custom_role: Some("   ".to_string()),
        });
        assert_eq!(result.unwrap_err(), OnboardError::MissingCustomRole);
    }

    #[test]
    fn missing_role_blocks_onboarding() {
        let result = handler().handle(OnboardCommand {
            name: "Sam".to_string(),
            role: String::new(),
            custom_role: None,
        });
        assert_eq!(result.unwrap_err(), OnboardError::MissingRole);
    }
}
