//! Role profiles - per-job-role metadata driving module assignment
//! and content personalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::curriculum::ModuleId;

/// How much security risk a role's access implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Standard,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Standard => "standard",
        };
        write!(f, "{}", s)
    }
}

/// How technical the role's training framing should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalLevel {
    Advanced,
    Intermediate,
    Basic,
}

impl fmt::Display for TechnicalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TechnicalLevel::Advanced => "advanced",
            TechnicalLevel::Intermediate => "intermediate",
            TechnicalLevel::Basic => "basic",
        };
        write!(f, "{}", s)
    }
}

/// Immutable profile for one job role.
///
/// Module assignments reference modules that must exist in the curriculum
/// store; the registry tests enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub role: String,
    pub department: String,
    pub risk_level: RiskLevel,
    pub technical_level: TechnicalLevel,
    pub mandatory_modules: Vec<ModuleId>,
    pub recommended_modules: Vec<ModuleId>,
    pub scenario_focus: Vec<String>,
    pub description: String,
}

impl RoleProfile {
    /// Returns true if the module is mandatory for this role.
    pub fn is_mandatory(&self, module: &ModuleId) -> bool {
        self.mandatory_modules.contains(module)
    }

    /// Returns true if the module is assigned (mandatory or recommended).
    pub fn is_assigned(&self, module: &ModuleId) -> bool {
        self.is_mandatory(module) || self.recommended_modules.contains(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> RoleProfile {
        RoleProfile {
            role: "IT Technician".to_string(),
            department: "ICT".to_string(),
            risk_level: RiskLevel::High,
            technical_level: TechnicalLevel::Advanced,
            mandatory_modules: vec![ModuleId::new("Module 1")],
            recommended_modules: vec![ModuleId::new("Module 5")],
            scenario_focus: vec!["network_security".to_string()],
            description: "Manages infrastructure".to_string(),
        }
    }

    #[test]
    fn mandatory_and_assigned_checks() {
        let p = profile();
        assert!(p.is_mandatory(&ModuleId::new("Module 1")));
        assert!(!p.is_mandatory(&ModuleId::new("Module 5")));
        assert!(p.is_assigned(&ModuleId::new("Module 5")));
        assert!(!p.is_assigned(&ModuleId::new("Module 9")));
    }

    #[test]
    fn levels_display_lowercase() {
        assert_eq!(RiskLevel::High.to_string(), "high");
        assert_eq!(TechnicalLevel::Basic.to_string(), "basic");
    }

    #[test]
    fn levels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Standard).unwrap(), "\"standard\"");
        assert_eq!(
            serde_json::to_string(&TechnicalLevel::Intermediate).unwrap(),
            "\"intermediate\""
        );
    }
}
