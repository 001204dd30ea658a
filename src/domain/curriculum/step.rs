//! Module steps - the units of curriculum content.
//!
//! Each step in a training module is one of four kinds. The original system
//! distinguished these with a string `type` field; here the kinds are an
//! exhaustively matched tagged union so the progression state machine cannot
//! miss a case.

use serde::{Deserialize, Serialize};

/// An embedded comprehension challenge.
///
/// The learner answers in free text; grading first checks for the expected
/// concept keyword as a literal substring and otherwise delegates a semantic
/// judgment to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Scenario text presented to the learner.
    pub prompt: String,
    /// Expected concept keyword; always non-empty.
    pub keyword: String,
    /// Role-specific learning focus, set by the personalizer.
    pub focus: Option<String>,
    /// Role-specific hint revealed on an incorrect answer.
    pub hint: Option<String>,
}

impl Challenge {
    /// Creates a challenge with no role-specific framing.
    pub fn new(prompt: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            keyword: keyword.into(),
            focus: None,
            hint: None,
        }
    }

    /// Sets the role-specific focus.
    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }

    /// Sets the role-specific hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// One step of a training module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Teaching content shown verbatim (with role framing when personalized).
    Instruction { text: String },
    /// Invitation to ask free-form questions before advancing.
    QaPrompt { text: String },
    /// A graded comprehension challenge.
    Challenge(Challenge),
    /// Completion message; always the last step of a module.
    Final { text: String },
}

impl Step {
    /// Creates an instruction step.
    pub fn instruction(text: impl Into<String>) -> Self {
        Step::Instruction { text: text.into() }
    }

    /// Creates a Q&A prompt step.
    pub fn qa_prompt(text: impl Into<String>) -> Self {
        Step::QaPrompt { text: text.into() }
    }

    /// Creates a challenge step.
    pub fn challenge(prompt: impl Into<String>, keyword: impl Into<String>) -> Self {
        Step::Challenge(Challenge::new(prompt, keyword))
    }

    /// Creates a final step.
    pub fn final_step(text: impl Into<String>) -> Self {
        Step::Final { text: text.into() }
    }

    /// Returns true if this step is a challenge.
    pub fn is_challenge(&self) -> bool {
        matches!(self, Step::Challenge(_))
    }

    /// Returns true if this step is a final step.
    pub fn is_final(&self) -> bool {
        matches!(self, Step::Final { .. })
    }

    /// Returns the challenge if this step is one.
    pub fn as_challenge(&self) -> Option<&Challenge> {
        match self {
            Step::Challenge(challenge) => Some(challenge),
            _ => None,
        }
    }

    /// Returns the text shown to the learner when this step is reached.
    pub fn display_text(&self) -> &str {
        match self {
            Step::Instruction { text } | Step::QaPrompt { text } | Step::Final { text } => text,
            Step::Challenge(challenge) => &challenge.prompt,
        }
    }
}
