//! DispatchHandler - the conversational dispatcher.
//!
//! Every user turn enters here: the input is classified, routed to the
//! progression state machine, the grader, or a retrieval-augmented answer,
//! and the updated context is returned alongside the response text. Routing
//! is fully deterministic; only the generator call behind the ports may
//! vary.

use std::sync::Arc;

use tracing::debug;

use crate::domain::curriculum::CurriculumStore;
use crate::domain::session::SessionContext;
use crate::domain::tutor::{classify, grading, is_help_request, progression, Intent, IntentKind};
use crate::ports::{Generator, Retriever};

use super::super::grader::ChallengeGrader;
use super::super::qa::QuestionAnswerer;

/// Command carrying one turn of user input plus the session context.
#[derive(Debug, Clone)]
pub struct DispatchCommand {
    pub text: String,
    pub context: SessionContext,
}

/// Result of dispatching one turn.
#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub response: String,
    pub context: SessionContext,
}

/// Handler orchestrating classifier, state machine, grader, and QA.
pub struct DispatchHandler {
    curriculum: Arc<CurriculumStore>,
    qa: QuestionAnswerer,
    grader: ChallengeGrader,
}

impl DispatchHandler {
    pub fn new(
        curriculum: Arc<CurriculumStore>,
        retriever: Arc<dyn Retriever>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            curriculum,
            qa: QuestionAnswerer::new(retriever.clone(), generator.clone()),
            grader: ChallengeGrader::new(retriever, generator),
        }
    }

    /// Processes one user turn end-to-end.
    ///
    /// State-machine and grading inconsistencies are recovered locally with
    /// guidance messages; this method never fails.
    pub async fn handle(&self, cmd: DispatchCommand) -> DispatchResult {
        let mut context = cmd.context;
        context.record_user_turn(&cmd.text);

        let intent = classify(&cmd.text, &context);
        debug!(
            kind = ?intent.kind,
            confidence = intent.confidence,
            module_context = intent.requires_module_context,
            "classified user turn"
        );

        let response = match intent.kind {
            IntentKind::Continue => progression::advance(&mut context),
            IntentKind::Question => self.answer_question(&cmd.text, &intent, &context).await,
            IntentKind::ChallengeResponse => match context.current_challenge().cloned() {
                Some(challenge) => {
                    self.grader
                        .grade(&cmd.text, &challenge, context.profile.as_ref())
                        .await
                }
                // Context and classifier disagree (stale challenge flag);
                // recover with a clarifying message.
                None => grading::NO_ACTIVE_CHALLENGE.to_string(),
            },
            IntentKind::GeneralChat => {
                if is_help_request(&cmd.text) {
                    self.help_menu(&context)
                } else {
                    self.qa
                        .answer_general_question(
                            &context.user_name,
                            context.profile.as_ref(),
                            &cmd.text,
                        )
                        .await
                }
            }
        };

        context.record_assistant_turn(&response);
        DispatchResult { response, context }
    }

    async fn answer_question(
        &self,
        text: &str,
        intent: &Intent,
        context: &SessionContext,
    ) -> String {
        if context.module_active() && intent.requires_module_context {
            let module_name = context
                .selected_module
                .as_ref()
                .and_then(|id| self.curriculum.get(id))
                .map(|m| m.full_name())
                .unwrap_or_default();
            self.qa
                .answer_module_question(
                    &context.user_name,
                    context.profile.as_ref(),
                    &module_name,
                    context.module_step + 1,
                    text,
                )
                .await
        } else {
            self.qa
                .answer_general_question(&context.user_name, context.profile.as_ref(), text)
                .await
        }
    }

    /// Context-sensitive menu of available actions.
    fn help_menu(&self, context: &SessionContext) -> String {
        let mut help = format!("I'm here to help, {}! ", context.user_name);
        match context
            .selected_module
            .as_ref()
            .and_then(|id| self.curriculum.get(id))
        {
            Some(module) => {
                help.push_str(&format!(
                    "You're currently in {}. You can:\n- Ask questions about the current topic\n- \
                     Type 'continue' to proceed with the module\n- Ask general cybersecurity \
                     questions\n- Switch to a different module at any time",
                    module.full_name()
                ));
            }
            None => {
                help.push_str(
                    "You can:\n- Select a training module from your personalized plan\n- Ask any \
                     cybersecurity questions\n- Ask about UETCL security policies",
                );
                if let Some(profile) = &context.profile {
                    help.push_str(&format!(
                        "\n\nAs a {}, I recommend focusing on your mandatory modules first.",
                        profile.role
                    ));
                }
            }
        }
        help
    }
}
