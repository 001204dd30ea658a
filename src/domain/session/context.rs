//! Session context - per-user conversational state.
//!
//! One value per user session, created at onboarding and threaded through
//! every dispatcher call. The original held this as an open-ended mapping in
//! framework-managed global state; here it is an explicit, typed record that
//! callers pass in and get back.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::curriculum::{Challenge, ModuleId, Step};
use crate::domain::roles::RoleProfile;

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One turn of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: TurnRole,
    pub content: String,
    pub at: DateTime<Utc>,
}

/// Mandatory-module completion summary for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingProgress {
    pub completed_mandatory: usize,
    pub total_mandatory: usize,
}

impl TrainingProgress {
    /// Completion as a fraction in [0, 1].
    pub fn fraction(&self) -> f32 {
        if self.total_mandatory == 0 {
            0.0
        } else {
            self.completed_mandatory as f32 / self.total_mandatory as f32
        }
    }
}

/// Mutable per-session state, owned exclusively by one session.
///
/// `completed_modules` only grows for the lifetime of the session, and the
/// step cursor never indexes past the personalized sequence; the progression
/// state machine maintains both invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_name: String,
    pub profile: Option<RoleProfile>,
    pub selected_module: Option<ModuleId>,
    pub module_step: usize,
    /// Personalized step sequence for the active module; empty when no
    /// module is selected.
    pub steps: Vec<Step>,
    pub completed_modules: BTreeSet<ModuleId>,
    pub transcript: Vec<TranscriptTurn>,
}

impl SessionContext {
    /// Creates a fresh context at onboarding time.
    pub fn new(user_name: impl Into<String>, profile: Option<RoleProfile>) -> Self {
        Self {
            user_name: user_name.into(),
            profile,
            selected_module: None,
            module_step: 0,
            steps: Vec::new(),
            completed_modules: BTreeSet::new(),
            transcript: Vec::new(),
        }
    }

    /// Returns true if a module is active.
    pub fn module_active(&self) -> bool {
        self.selected_module.is_some()
    }

    /// Returns the step the cursor currently points at.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.module_step)
    }

    /// Derived flag: true iff the current step is a challenge.
    pub fn challenge_active(&self) -> bool {
        self.current_step().is_some_and(Step::is_challenge)
    }

    /// Returns the active challenge, if the current step is one.
    pub fn current_challenge(&self) -> Option<&Challenge> {
        self.current_step().and_then(Step::as_challenge)
    }

    /// Enters a module: discards any previous personalized sequence and
    /// resets the cursor to step 0.
    pub fn enter_module(&mut self, id: ModuleId, steps: Vec<Step>) {
        self.selected_module = Some(id);
        self.steps = steps;
        self.module_step = 0;
    }

    /// Leaves the active module, returning to module-picking state.
    pub fn leave_module(&mut self) {
        self.selected_module = None;
        self.steps = Vec::new();
        self.module_step = 0;
    }

    /// Records a completed module. The set is append-only; re-inserting an
    /// already-completed module is a no-op.
    pub fn record_completion(&mut self, id: ModuleId) {
        self.completed_modules.insert(id);
    }

    /// Appends a user turn to the transcript.
    pub fn record_user_turn(&mut self, content: impl Into<String>) {
        self.transcript.push(TranscriptTurn {
            role: TurnRole::User,
            content: content.into(),
            at: Utc::now(),
        });
    }

    /// Appends an assistant turn to the transcript.
    pub fn record_assistant_turn(&mut self, content: impl Into<String>) {
        self.transcript.push(TranscriptTurn {
            role: TurnRole::Assistant,
            content: content.into(),
            at: Utc::now(),
        });
    }

    /// Mandatory-module progress for the session's profile, if any.
    pub fn progress(&self) -> Option<TrainingProgress> {
        let profile = self.profile.as_ref()?;
        let completed_mandatory = profile
            .mandatory_modules
            .iter()
            .filter(|id| self.completed_modules.contains(id))
            .count();
        Some(TrainingProgress {
            completed_mandatory,
            total_mandatory: profile.mandatory_modules.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roles::RoleProfileRegistry;

    fn context_with_profile() -> SessionContext {
        let profile = RoleProfileRegistry::builtin().resolve("Administration Officer");
        SessionContext::new("Amy", Some(profile))
    }

    #[test]
    fn fresh_context_is_in_picker_mode() {
        let ctx = context_with_profile();
        assert!(!ctx.module_active());
        assert!(!ctx.challenge_active());
        assert!(ctx.current_step().is_none());
        assert!(ctx.completed_modules.is_empty());
    }

    #[test]
    fn challenge_active_is_derived_from_current_step() {
        let mut ctx = context_with_profile();
        ctx.enter_module(
            ModuleId::new("Module 1"),
            vec![
                Step::instruction("a"),
                Step::challenge("q", "report"),
                Step::final_step("done"),
            ],
        );
        assert!(!ctx.challenge_active());
        ctx.module_step = 1;
        assert!(ctx.challenge_active());
        assert_eq!(ctx.current_challenge().unwrap().keyword, "report");
    }

    #[test]
    fn entering_a_module_resets_cursor_and_sequence() {
        let mut ctx = context_with_profile();
        ctx.enter_module(ModuleId::new("Module 1"), vec![Step::instruction("a")]);
        ctx.module_step = 3;
        ctx.enter_module(ModuleId::new("Module 2"), vec![Step::instruction("b")]);
        assert_eq!(ctx.module_step, 0);
        assert_eq!(ctx.selected_module, Some(ModuleId::new("Module 2")));
        assert_eq!(ctx.steps.len(), 1);
    }

    #[test]
    fn completion_set_only_grows() {
        let mut ctx = context_with_profile();
        ctx.record_completion(ModuleId::new("Module 1"));
        ctx.record_completion(ModuleId::new("Module 1"));
        assert_eq!(ctx.completed_modules.len(), 1);
    }

    #[test]
    fn progress_counts_only_mandatory_modules() {
        let mut ctx = context_with_profile();
        // Administration Officer: mandatory 1, 2, 3, 5, 10.
        ctx.record_completion(ModuleId::new("Module 1"));
        ctx.record_completion(ModuleId::new("Module 6")); // recommended only
        let progress = ctx.progress().unwrap();
        assert_eq!(progress.completed_mandatory, 1);
        assert_eq!(progress.total_mandatory, 5);
        assert!((progress.fraction() - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_is_none_without_profile() {
        let ctx = SessionContext::new("Amy", None);
        assert!(ctx.progress().is_none());
    }

    #[test]
    fn context_round_trips_through_serde() {
        let mut ctx = context_with_profile();
        ctx.record_user_turn("hello");
        ctx.enter_module(ModuleId::new("Module 1"), vec![Step::instruction("a")]);
        let json = serde_json::to_string(&ctx).unwrap();
        let back: SessionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
