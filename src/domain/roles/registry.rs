//! Role profile registry with a fallback classifier for unlisted roles.

use crate::domain::curriculum::ModuleId;

use super::profile::{RiskLevel, RoleProfile, TechnicalLevel};

/// Marker offered in the role picker for roles not in the registry.
pub const CUSTOM_ROLE_MARKER: &str = "Other (Please specify)";

fn modules(ids: &[&str]) -> Vec<ModuleId> {
    ids.iter().map(|id| ModuleId::new(*id)).collect()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Read-only mapping from role name to profile.
///
/// Unlisted roles are synthesized from a fixed keyword rule table, so every
/// role string resolves to exactly one profile.
#[derive(Debug, Clone)]
pub struct RoleProfileRegistry {
    profiles: Vec<RoleProfile>,
}

impl RoleProfileRegistry {
    /// Creates the registry with the built-in role profiles.
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    /// Returns role names for a picker: listed roles sorted, then the
    /// custom-role marker.
    pub fn available_roles(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.iter().map(|p| p.role.clone()).collect();
        names.sort();
        names.push(CUSTOM_ROLE_MARKER.to_string());
        names
    }

    /// Looks up a listed role by exact name.
    pub fn lookup(&self, role: &str) -> Option<&RoleProfile> {
        self.profiles.iter().find(|p| p.role == role)
    }

    /// Resolves any role name to a profile: an exact registry entry when one
    /// exists, otherwise a profile synthesized from the keyword rule table.
    pub fn resolve(&self, role: &str) -> RoleProfile {
        self.lookup(role)
            .cloned()
            .unwrap_or_else(|| self.synthesize(role))
    }

    /// Synthesizes a profile for an unlisted role.
    ///
    /// Rules are checked in order; the first matching branch wins, so
    /// "Senior Field Engineer" hits the technical branch via "engineer"
    /// before the management branch sees "senior".
    pub fn synthesize(&self, custom_role: &str) -> RoleProfile {
        let role_lower = custom_role.to_lowercase();
        let contains_any =
            |keywords: &[&str]| keywords.iter().any(|k| role_lower.contains(k));

        let (risk_level, technical_level, mandatory) =
            if contains_any(&["it", "technical", "engineer", "system"]) {
                (
                    RiskLevel::High,
                    TechnicalLevel::Advanced,
                    modules(&[
                        "Module 1", "Module 2", "Module 3", "Module 4", "Module 7", "Module 8",
                        "Module 9",
                    ]),
                )
            } else if contains_any(&["finance", "accounting", "commercial"]) {
                (
                    RiskLevel::High,
                    TechnicalLevel::Intermediate,
                    modules(&["Module 1", "Module 2", "Module 3", "Module 4", "Module 5"]),
                )
            } else if contains_any(&["manager", "director", "head", "senior"]) {
                (
                    RiskLevel::Medium,
                    TechnicalLevel::Intermediate,
                    modules(&["Module 1", "Module 2", "Module 3", "Module 4", "Module 10"]),
                )
            } else {
                (
                    RiskLevel::Standard,
                    TechnicalLevel::Basic,
                    modules(&["Module 1", "Module 2", "Module 3", "Module 5"]),
                )
            };

        RoleProfile {
            role: custom_role.to_string(),
            department: "Custom/Other".to_string(),
            risk_level,
            technical_level,
            mandatory_modules: mandatory,
            recommended_modules: modules(&["Module 6", "Module 10"]),
            scenario_focus: tags(&["general_awareness"]),
            description: format!("Custom role: {}", custom_role),
        }
    }
}

impl Default for RoleProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_profiles() -> Vec<RoleProfile> {
    vec![
        RoleProfile {
            role: "IT Technician".to_string(),
            department: "Information and Communication Technology".to_string(),
            risk_level: RiskLevel::High,
            technical_level: TechnicalLevel::Advanced,
            mandatory_modules: modules(&[
                "Module 1", "Module 2", "Module 3", "Module 4", "Module 7", "Module 8",
                "Module 9",
            ]),
            recommended_modules: modules(&["Module 5", "Module 6", "Module 10"]),
            scenario_focus: tags(&[
                "network_security",
                "system_administration",
                "technical_controls",
            ]),
            description: "You manage critical IT infrastructure and have elevated system access."
                .to_string(),
        },
        RoleProfile {
            role: "Manager IT".to_string(),
            department: "Information and Communication Technology".to_string(),
            risk_level: RiskLevel::High,
            technical_level: TechnicalLevel::Advanced,
            mandatory_modules: modules(&[
                "Module 1", "Module 2", "Module 3", "Module 4", "Module 7", "Module 8",
                "Module 9", "Module 10",
            ]),
            recommended_modules: modules(&["Module 5", "Module 6"]),
            scenario_focus: tags(&["leadership", "incident_management", "policy_enforcement"]),
            description:
                "You lead the IT team and are responsible for organizational security policies."
                    .to_string(),
        },
        RoleProfile {
            role: "IT Support Officer".to_string(),
            department: "Information and Communication Technology".to_string(),
            risk_level: RiskLevel::High,
            technical_level: TechnicalLevel::Intermediate,
            mandatory_modules: modules(&[
                "Module 1", "Module 2", "Module 3", "Module 7", "Module 8", "Module 9",
            ]),
            recommended_modules: modules(&["Module 4", "Module 5", "Module 6", "Module 10"]),
            scenario_focus: tags(&["user_support", "device_management", "basic_security"]),
            description: "You provide technical support and have access to user systems."
                .to_string(),
        },
        RoleProfile {
            role: "Financial Accountant".to_string(),
            department: "Finance".to_string(),
            risk_level: RiskLevel::High,
            technical_level: TechnicalLevel::Intermediate,
            mandatory_modules: modules(&[
                "Module 1", "Module 2", "Module 3", "Module 4", "Module 5",
            ]),
            recommended_modules: modules(&["Module 6", "Module 7", "Module 8", "Module 10"]),
            scenario_focus: tags(&[
                "financial_data",
                "business_email_compromise",
                "regulatory_compliance",
            ]),
            description: "You handle sensitive financial data and payment processing.".to_string(),
        },
        RoleProfile {
            role: "Control Engineer".to_string(),
            department: "Operations and Maintenance".to_string(),
            risk_level: RiskLevel::Medium,
            technical_level: TechnicalLevel::Intermediate,
            mandatory_modules: modules(&[
                "Module 1", "Module 2", "Module 3", "Module 6", "Module 7",
            ]),
            recommended_modules: modules(&["Module 4", "Module 5", "Module 8"]),
            scenario_focus: tags(&["operational_systems", "field_security", "remote_operations"]),
            description: "You operate critical power systems and control infrastructure."
                .to_string(),
        },
        RoleProfile {
            role: "Human Resource Officer".to_string(),
            department: "Human Resource and Administration".to_string(),
            risk_level: RiskLevel::Medium,
            technical_level: TechnicalLevel::Basic,
            mandatory_modules: modules(&[
                "Module 1", "Module 2", "Module 3", "Module 4", "Module 10",
            ]),
            recommended_modules: modules(&["Module 5", "Module 6", "Module 8"]),
            scenario_focus: tags(&["personal_data", "social_engineering", "hr_processes"]),
            description:
                "You handle employee personal information and confidential HR data.".to_string(),
        },
        RoleProfile {
            role: "Administration Officer".to_string(),
            department: "Human Resource and Administration".to_string(),
            risk_level: RiskLevel::Standard,
            technical_level: TechnicalLevel::Basic,
            mandatory_modules: modules(&[
                "Module 1", "Module 2", "Module 3", "Module 5", "Module 10",
            ]),
            recommended_modules: modules(&["Module 4", "Module 6"]),
            scenario_focus: tags(&["office_security", "basic_awareness", "policy_compliance"]),
            description: "You handle general administrative tasks and office coordination."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::CurriculumStore;

    #[test]
    fn every_role_module_exists_in_curriculum() {
        let store = CurriculumStore::builtin();
        for profile in &RoleProfileRegistry::builtin().profiles {
            for id in profile
                .mandatory_modules
                .iter()
                .chain(&profile.recommended_modules)
            {
                assert!(
                    store.get(id).is_some(),
                    "{} references unknown {}",
                    profile.role,
                    id
                );
            }
        }
    }

    #[test]
    fn lookup_finds_listed_roles() {
        let registry = RoleProfileRegistry::builtin();
        let profile = registry.lookup("Financial Accountant").unwrap();
        assert_eq!(profile.department, "Finance");
        assert_eq!(profile.risk_level, RiskLevel::High);
        assert!(registry.lookup("Wizard").is_none());
    }

    #[test]
    fn available_roles_sorted_with_custom_marker_last() {
        let roles = RoleProfileRegistry::builtin().available_roles();
        assert_eq!(roles.last().map(String::as_str), Some(CUSTOM_ROLE_MARKER));
        let listed = &roles[..roles.len() - 1];
        let mut sorted = listed.to_vec();
        sorted.sort();
        assert_eq!(listed, sorted.as_slice());
    }

    #[test]
    fn senior_field_engineer_hits_technical_branch() {
        // "engineer" is checked before "senior", so the technical rule wins.
        let profile = RoleProfileRegistry::builtin().resolve("Senior Field Engineer");
        assert_eq!(profile.risk_level, RiskLevel::High);
        assert_eq!(profile.technical_level, TechnicalLevel::Advanced);
        assert_eq!(
            profile.mandatory_modules,
            modules(&[
                "Module 1", "Module 2", "Module 3", "Module 4", "Module 7", "Module 8",
                "Module 9"
            ])
        );
    }

    #[test]
    fn finance_keyword_synthesizes_intermediate_profile() {
        let profile = RoleProfileRegistry::builtin().synthesize("Accounting Assistant");
        assert_eq!(profile.risk_level, RiskLevel::High);
        assert_eq!(profile.technical_level, TechnicalLevel::Intermediate);
        assert_eq!(
            profile.mandatory_modules,
            modules(&["Module 1", "Module 2", "Module 3", "Module 4", "Module 5"])
        );
    }

    #[test]
    fn management_keyword_synthesizes_medium_risk() {
        let profile = RoleProfileRegistry::builtin().synthesize("Head of Procurement");
        assert_eq!(profile.risk_level, RiskLevel::Medium);
        assert_eq!(profile.technical_level, TechnicalLevel::Intermediate);
    }

    #[test]
    fn unmatched_role_defaults_to_standard() {
        let profile = RoleProfileRegistry::builtin().synthesize("Receptionist");
        assert_eq!(profile.risk_level, RiskLevel::Standard);
        assert_eq!(profile.technical_level, TechnicalLevel::Basic);
        assert_eq!(
            profile.mandatory_modules,
            modules(&["Module 1", "Module 2", "Module 3", "Module 5"])
        );
        assert_eq!(profile.department, "Custom/Other");
    }

    #[test]
    fn resolve_prefers_registry_entry_over_synthesis() {
        // "Manager IT" contains the "manager" keyword but must resolve to the
        // listed high-risk profile, not the synthesized medium-risk one.
        let profile = RoleProfileRegistry::builtin().resolve("Manager IT");
        assert_eq!(profile.risk_level, RiskLevel::High);
        assert_eq!(profile.department, "Information and Communication Technology");
    }
}
