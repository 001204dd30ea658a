//! Content personalizer - pure function from (module, profile) to a
//! role-tailored step sequence.

use crate::domain::curriculum::{Challenge, Module, Step};
use crate::domain::roles::{RiskLevel, RoleProfile, TechnicalLevel};

use super::scenarios::scenario_for;

/// Produces the personalized step sequence for a module.
///
/// Instructions get role framing appended; challenge steps are replaced with
/// a role-specific scenario when one exists (keeping the expected keyword).
/// Q&A prompts and final steps pass through unchanged.
pub fn personalize(module: &Module, profile: &RoleProfile) -> Vec<Step> {
    module
        .steps()
        .iter()
        .map(|step| match step {
            Step::Instruction { text } => Step::Instruction {
                text: frame_instruction(text, profile),
            },
            Step::Challenge(challenge) => {
                match scenario_for(module.id().as_str(), &profile.role) {
                    Some(scenario) => Step::Challenge(
                        Challenge::new(scenario.scenario, challenge.keyword.clone())
                            .with_focus(scenario.focus)
                            .with_hint(scenario.hint),
                    ),
                    None => step.clone(),
                }
            }
            other => other.clone(),
        })
        .collect()
}

/// Appends role intro, technical-level note, and risk-tier banner to
/// instruction text.
fn frame_instruction(text: &str, profile: &RoleProfile) -> String {
    let technical_note = match profile.technical_level {
        TechnicalLevel::Advanced => {
            "This module includes advanced technical concepts relevant to your technical \
             responsibilities."
        }
        TechnicalLevel::Intermediate => {
            "This module focuses on practical security measures for your daily work."
        }
        TechnicalLevel::Basic => "This module covers essential security basics for your role.",
    };

    let risk_context = match profile.risk_level {
        RiskLevel::High => {
            "\n\n⚠️ **High Risk Role**: Your position involves access to sensitive systems or data."
        }
        RiskLevel::Medium => {
            "\n\n⚡ **Medium Risk Role**: Your role involves some sensitive information access."
        }
        RiskLevel::Standard => "",
    };

    format!(
        "{}\n\n**👤 For {}s in {}:**\n*{}*\n\n{}{}",
        text, profile.role, profile.department, profile.description, technical_note, risk_context
    )
}

/// Role framing appended to a module's completion message.
pub fn completion_note(profile: &RoleProfile) -> String {
    format!(
        "\n\n**Great work, {}!** This training is specifically relevant to your role in {}.",
        profile.role, profile.department
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::CurriculumStore;
    use crate::domain::roles::RoleProfileRegistry;

    fn module_1() -> Module {
        CurriculumStore::builtin().resolve("Module 1").unwrap().clone()
    }

    fn profile(role: &str) -> RoleProfile {
        RoleProfileRegistry::builtin().resolve(role)
    }

    #[test]
    fn instructions_gain_role_framing() {
        let steps = personalize(&module_1(), &profile("IT Technician"));
        match &steps[0] {
            Step::Instruction { text } => {
                assert!(text.contains("For IT Technicians in"));
                assert!(text.contains("High Risk Role"));
                assert!(text.contains("advanced technical concepts"));
            }
            other => panic!("expected instruction, got {:?}", other),
        }
    }

    #[test]
    fn standard_risk_gets_no_risk_banner() {
        let steps = personalize(&module_1(), &profile("Administration Officer"));
        match &steps[0] {
            Step::Instruction { text } => {
                assert!(!text.contains("Risk Role"));
                assert!(text.contains("essential security basics"));
            }
            other => panic!("expected instruction, got {:?}", other),
        }
    }

    #[test]
    fn challenge_swapped_for_role_scenario_keeps_keyword() {
        let module = module_1();
        let original_keyword = module
            .steps()
            .iter()
            .find_map(Step::as_challenge)
            .unwrap()
            .keyword
            .clone();

        let steps = personalize(&module, &profile("Financial Accountant"));
        let challenge = steps.iter().find_map(Step::as_challenge).unwrap();
        assert!(challenge.prompt.contains("wire transfer"));
        assert_eq!(challenge.keyword, original_keyword);
        assert!(challenge.focus.is_some());
        assert!(challenge.hint.is_some());
    }

    #[test]
    fn challenge_unchanged_without_scenario() {
        let module = module_1();
        let steps = personalize(&module, &profile("Control Engineer"));
        let challenge = steps.iter().find_map(Step::as_challenge).unwrap();
        assert!(challenge.prompt.contains("URGENT"));
        assert!(challenge.focus.is_none());
    }

    #[test]
    fn sequence_shape_is_preserved() {
        let module = module_1();
        let steps = personalize(&module, &profile("IT Technician"));
        assert_eq!(steps.len(), module.steps().len());
        assert!(steps.last().unwrap().is_final());
    }

    #[test]
    fn completion_note_names_role_and_department() {
        let note = completion_note(&profile("Human Resource Officer"));
        assert!(note.contains("Great work, Human Resource Officer!"));
        assert!(note.contains("Human Resource and Administration"));
    }
}
