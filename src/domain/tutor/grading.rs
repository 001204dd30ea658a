//! Challenge grading primitives.
//!
//! The cheap, deterministic path is a case-insensitive literal match on the
//! expected concept keyword. When the keyword is absent, the judgment of
//! whether the answer still demonstrates understanding is not
//! rule-expressible and is delegated to the generator; its verdict is read
//! back through a fixed sentinel token. Grading never advances progression;
//! the learner still types 'continue' regardless of outcome.

use crate::domain::curriculum::Challenge;
use crate::domain::roles::RoleProfile;

/// Sentinel the evaluation prompt asks the generator to emit for a
/// semantically correct answer.
pub const CORRECT_SENTINEL: &str = "CORRECT_UNDERSTANDING";

/// Clarifying message when a challenge response arrives but the current
/// step is not actually a challenge.
pub const NO_ACTIVE_CHALLENGE: &str =
    "There's no active challenge right now. You can ask a question or type 'continue' to proceed.";

/// Action reminder appended to every grading verdict.
pub const FEEDBACK_FOOTER: &str = "\n\nYou can:\n- Ask follow-up questions about this challenge\n- \
                                   Type 'continue' to finish the module\n- Ask any other \
                                   cybersecurity questions";

/// True if the expected keyword appears verbatim (case-insensitive) in the
/// learner's answer.
pub fn literal_match(answer: &str, keyword: &str) -> bool {
    answer.to_lowercase().contains(&keyword.to_lowercase())
}

/// Builds the semantic evaluation request for the generator.
pub fn evaluation_request(challenge: &Challenge, answer: &str) -> String {
    format!(
        "Challenge: {}\nCorrect concept: {}\nUser response: {}\n\nDoes the user's response \
         demonstrate understanding of the correct concept, even if they didn't use the exact \
         keyword?\nRespond with either \"{}\" or \"NEEDS_CLARIFICATION\" followed by a brief \
         explanation.",
        challenge.prompt,
        challenge.keyword.to_lowercase(),
        answer,
        CORRECT_SENTINEL,
    )
}

/// Parses the generator's verdict for the success sentinel.
pub fn shows_understanding(evaluation: &str) -> bool {
    evaluation.contains(CORRECT_SENTINEL)
}

/// Feedback for a literal keyword match.
pub fn literal_success_feedback(challenge: &Challenge, profile: Option<&RoleProfile>) -> String {
    let mut feedback = "✅ Excellent! You got it right.".to_string();
    if let (Some(profile), Some(focus)) = (profile, &challenge.focus) {
        feedback.push_str(&format!(
            " As a {}, understanding {} is particularly important for your role.",
            profile.role, focus
        ));
    }
    feedback.push_str(FEEDBACK_FOOTER);
    feedback
}

/// Feedback when the generator judged the answer semantically correct.
pub fn semantic_success_feedback() -> String {
    format!(
        "✅ Great! You demonstrate good understanding of the concept.{}",
        FEEDBACK_FOOTER
    )
}

/// Feedback for an incorrect answer: reveals the expected keyword and the
/// role-specific hint when one exists.
pub fn failure_feedback(challenge: &Challenge, profile: Option<&RoleProfile>) -> String {
    let mut feedback = format!(
        "❌ Not quite right. Let me explain: The key concept is '{}'.",
        challenge.keyword.to_lowercase()
    );
    if let (Some(profile), Some(hint)) = (profile, &challenge.hint) {
        feedback.push_str(&format!("\n\n💡 **Hint for {}s:** {}", profile.role, hint));
    }
    feedback.push_str(FEEDBACK_FOOTER);
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roles::RoleProfileRegistry;

    fn challenge() -> Challenge {
        Challenge::new("You find a USB drive. What do you do?", "report")
            .with_focus("incident reporting")
            .with_hint("Hand it to the ICT Helpdesk untouched")
    }

    fn profile() -> RoleProfile {
        RoleProfileRegistry::builtin().resolve("IT Technician")
    }

    #[test]
    fn literal_match_is_case_insensitive() {
        assert!(literal_match("I will report it immediately", "report"));
        assert!(literal_match("REPORT it", "report"));
        assert!(literal_match("I will Report it", "REPORT"));
        assert!(!literal_match("I would ignore it", "report"));
    }

    #[test]
    fn evaluation_request_carries_prompt_concept_and_answer() {
        let request = evaluation_request(&challenge(), "hand it in to IT");
        assert!(request.contains("You find a USB drive"));
        assert!(request.contains("Correct concept: report"));
        assert!(request.contains("hand it in to IT"));
        assert!(request.contains(CORRECT_SENTINEL));
    }

    #[test]
    fn sentinel_parsing() {
        assert!(shows_understanding(
            "CORRECT_UNDERSTANDING - the user grasps the reporting duty"
        ));
        assert!(!shows_understanding(
            "NEEDS_CLARIFICATION - the user would plug the drive in"
        ));
    }

    #[test]
    fn literal_success_mentions_role_focus() {
        let feedback = literal_success_feedback(&challenge(), Some(&profile()));
        assert!(feedback.starts_with("✅ Excellent!"));
        assert!(feedback.contains("As a IT Technician, understanding incident reporting"));
        assert!(feedback.ends_with(FEEDBACK_FOOTER));
    }

    #[test]
    fn literal_success_without_profile_skips_focus() {
        let feedback = literal_success_feedback(&challenge(), None);
        assert!(!feedback.contains("As a"));
    }

    #[test]
    fn failure_reveals_keyword_and_hint() {
        let feedback = failure_feedback(&challenge(), Some(&profile()));
        assert!(feedback.contains("The key concept is 'report'"));
        assert!(feedback.contains("Hint for IT Technicians"));
        assert!(feedback.contains("ICT Helpdesk untouched"));
    }

    #[test]
    fn failure_without_hint_omits_hint_line() {
        let bare = Challenge::new("q", "report");
        let feedback = failure_feedback(&bare, Some(&profile()));
        assert!(!feedback.contains("Hint"));
    }
}
