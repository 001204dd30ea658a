//! HTTP DTOs for tutor endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::handlers::{ModuleAssignment, ModulePriority};
use crate::domain::roles::{RiskLevel, RoleProfile, TechnicalLevel};
use crate::domain::session::SessionContext;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a training session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    pub role: String,
    /// Free-text role, required when `role` is the custom-role marker.
    pub custom_role: Option<String>,
}

/// Request to send one conversational turn.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// Request to enter a training module.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectModuleRequest {
    pub module: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Role profile as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub role: String,
    pub department: String,
    pub risk_level: RiskLevel,
    pub technical_level: TechnicalLevel,
    pub description: String,
}

impl From<&RoleProfile> for ProfileResponse {
    fn from(profile: &RoleProfile) -> Self {
        Self {
            role: profile.role.clone(),
            department: profile.department.clone(),
            risk_level: profile.risk_level,
            technical_level: profile.technical_level,
            description: profile.description.clone(),
        }
    }
}

/// One training plan entry.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleAssignmentResponse {
    pub module_id: String,
    pub title: String,
    pub priority: ModulePriority,
}

impl From<ModuleAssignment> for ModuleAssignmentResponse {
    fn from(assignment: ModuleAssignment) -> Self {
        Self {
            module_id: assignment.module_id.as_str().to_string(),
            title: assignment.title,
            priority: assignment.priority,
        }
    }
}

/// Response to session creation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub welcome: String,
    pub profile: ProfileResponse,
    pub training_plan: Vec<ModuleAssignmentResponse>,
}

/// Response to a conversational turn or module selection.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub response: String,
    /// Active module id, absent in module-picking state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_module: Option<String>,
    pub step: usize,
    pub completed_modules: Vec<String>,
}

impl MessageResponse {
    pub fn from_context(response: String, context: &SessionContext) -> Self {
        Self {
            response,
            active_module: context
                .selected_module
                .as_ref()
                .map(|id| id.as_str().to_string()),
            step: context.module_step,
            completed_modules: context
                .completed_modules
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}

/// Mandatory-module progress report.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub completed_mandatory: usize,
    pub total_mandatory: usize,
    pub fraction: f32,
    pub completed_modules: Vec<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Error DTO
// ════════════════════════════════════════════════════════════════════════════

/// Standard error envelope for tutor endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn unknown_module(module: &str) -> Self {
        Self {
            code: "UNKNOWN_MODULE".to_string(),
            message: format!("Unknown module: {}", module),
            details: None,
        }
    }
}
