//! Module progression state machine.
//!
//! Three states: picking a module (none selected), in a step, and module
//! complete. Selecting a module resets the cursor to 0 and recomputes the
//! personalized sequence; `advance` walks the sequence one step per call.

use crate::domain::curriculum::{Module, Step};
use crate::domain::personalization::{completion_note, personalize};
use crate::domain::session::SessionContext;

/// Usage hint appended to the first step when a module is entered.
pub const MODULE_USAGE_HINT: &str =
    "💬 **You can ask questions anytime during this module, or type 'continue' to proceed.**";

/// Terminal message once the sequence has been fully consumed.
pub const MODULE_ALREADY_COMPLETE: &str =
    "You have completed this module! You can now select another module or ask general questions.";

/// Guidance when `continue` arrives with no module selected.
pub const NO_ACTIVE_MODULE: &str =
    "There's no module in progress. Select a training module to begin, or ask me any \
     cybersecurity question.";

/// Enters a module: personalizes its steps for the session's profile,
/// resets the cursor, and returns the first step's text with the usage hint.
pub fn select_module(context: &mut SessionContext, module: &Module) -> String {
    let steps = match &context.profile {
        Some(profile) => personalize(module, profile),
        None => module.steps().to_vec(),
    };
    let first = steps
        .first()
        .map(|s| s.display_text().to_string())
        .unwrap_or_default();
    context.enter_module(module.id().clone(), steps);
    format!("{}\n\n{}", first, MODULE_USAGE_HINT)
}

/// Advances the cursor one step and returns the text to display.
///
/// Reaching the `Final` step records the module as completed (exactly once;
/// the completion set deduplicates). A further advance past `Final` returns
/// the terminal message and resets to module-picking state.
pub fn advance(context: &mut SessionContext) -> String {
    if !context.module_active() {
        return NO_ACTIVE_MODULE.to_string();
    }

    let next = context.module_step + 1;
    if next >= context.steps.len() {
        context.leave_module();
        return MODULE_ALREADY_COMPLETE.to_string();
    }

    context.module_step = next;
    match &context.steps[next] {
        Step::Challenge(challenge) => challenge.prompt.clone(),
        Step::Final { text } => {
            let mut message = text.clone();
            if let Some(profile) = &context.profile {
                message.push_str(&completion_note(profile));
            }
            if let Some(id) = context.selected_module.clone() {
                context.record_completion(id);
            }
            message
        }
        Step::Instruction { text } | Step::QaPrompt { text } => text.clone(),
    }
}
