//! Prompt templates for retrieval-augmented question answering.
//!
//! Pure string builders; the application layer retrieves passages and calls
//! the generator.

use crate::domain::roles::RoleProfile;

fn role_sentence(profile: Option<&RoleProfile>) -> String {
    match profile {
        Some(p) => format!(" The user is a {} in {}.", p.role, p.department),
        None => String::new(),
    }
}

/// Prompt for a question asked while inside a module, scoped to the
/// module's topic.
pub fn module_question_prompt(
    user_name: &str,
    profile: Option<&RoleProfile>,
    module_name: &str,
    step_number: usize,
    context_passages: &str,
    question: &str,
) -> String {
    format!(
        "You are a UETCL cybersecurity tutor helping {user}.{role} They are currently in \
         {module}, step {step}.\n\nThey asked a question while going through their training \
         module. Answer their question based on the policy context, keeping it relevant to their \
         current module topic. Be conversational and encouraging.\n\nAfter answering, let them \
         know they can:\n- Ask more questions about this topic\n- Type 'continue' to proceed with \
         the module\n- Ask general cybersecurity questions anytime\n\nContext: {context}\nCurrent \
         Module: {module}\nUser's Question: {question}\nAnswer:",
        user = user_name,
        role = role_sentence(profile),
        module = module_name,
        step = step_number,
        context = context_passages,
        question = question,
    )
}

/// Prompt for a general cybersecurity question, with role tailoring when a
/// profile is present.
pub fn general_question_prompt(
    user_name: &str,
    profile: Option<&RoleProfile>,
    context_passages: &str,
    question: &str,
) -> String {
    let role = match profile {
        Some(p) => format!(
            " The user is a {} in {}. Tailor your response to their role and responsibilities.",
            p.role, p.department
        ),
        None => String::new(),
    };
    format!(
        "You are a UETCL AI Cybersecurity Advisor helping {user}.{role}\n\nAnswer their question \
         based on UETCL policies and cybersecurity best practices. Be conversational, helpful, \
         and specific to their role when possible.\n\nContext: {context}\nQuestion: \
         {question}\nAnswer:",
        user = user_name,
        role = role,
        context = context_passages,
        question = question,
    )
}

/// Wraps a grading evaluation request with retrieved policy grounding.
pub fn evaluation_prompt(context_passages: &str, evaluation_request: &str) -> String {
    format!(
        "Context: {}\n\nEvaluation request: {}\n\nEvaluation:",
        context_passages, evaluation_request
    )
}
