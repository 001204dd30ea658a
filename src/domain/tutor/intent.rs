//! Intent classifier - deterministic, priority-ordered rules.
//!
//! Rules are evaluated in strict order and the first match wins, so no ties
//! are possible. A message containing both a continuation token and a
//! question mark is always `Continue`; that ordering is a design decision,
//! not incidental.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::curriculum::ModuleId;
use crate::domain::session::SessionContext;

/// Tokens that signal the learner wants to advance the module.
pub const CONTINUE_TOKENS: &[&str] = &["continue", "next", "proceed", "move on", "go on"];

/// Markers that signal a question.
const QUESTION_MARKERS: &[&str] = &[
    "what", "how", "why", "when", "where", "can you", "could you", "explain", "?",
];

/// Phrases that signal the learner is lost and needs the action menu.
pub const HELP_PHRASES: &[&str] = &["help", "stuck", "confused", "what should i do", "what now"];

/// The classified purpose of one user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Continue,
    Question,
    ChallengeResponse,
    GeneralChat,
}

/// Classification result for one line of user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub kind: IntentKind,
    pub confidence: f32,
    /// Whether the turn should be answered in the active module's context.
    pub requires_module_context: bool,
    /// Topic keywords that linked the input to the active module.
    pub topic_keywords: Vec<String>,
}

/// Classifies one line of user input against the session context.
pub fn classify(text: &str, context: &SessionContext) -> Intent {
    let input = text.to_lowercase();
    let input = input.trim();
    let contains_any = |tokens: &[&str]| tokens.iter().any(|t| input.contains(t));

    if contains_any(CONTINUE_TOKENS) {
        return Intent {
            kind: IntentKind::Continue,
            confidence: 0.9,
            requires_module_context: true,
            topic_keywords: Vec::new(),
        };
    }

    if contains_any(QUESTION_MARKERS) {
        let matched: Vec<String> = context
            .selected_module
            .as_ref()
            .map(|module| {
                module_topic_keywords(module)
                    .iter()
                    .filter(|k| input.contains(*k))
                    .map(|k| k.to_string())
                    .collect()
            })
            .unwrap_or_default();

        return Intent {
            kind: IntentKind::Question,
            confidence: 0.8,
            requires_module_context: !matched.is_empty(),
            topic_keywords: matched,
        };
    }

    if context.challenge_active() {
        return Intent {
            kind: IntentKind::ChallengeResponse,
            confidence: 0.7,
            requires_module_context: true,
            topic_keywords: Vec::new(),
        };
    }

    Intent {
        kind: IntentKind::GeneralChat,
        confidence: 0.5,
        requires_module_context: false,
        topic_keywords: Vec::new(),
    }
}

/// Returns true if the input contains a help-seeking phrase.
pub fn is_help_request(text: &str) -> bool {
    let input = text.to_lowercase();
    HELP_PHRASES.iter().any(|p| input.contains(p))
}

/// Per-module topic keyword table used to scope questions to the active
/// module's retrieval context.
static TOPIC_KEYWORDS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    table.insert("Module 1", &["phishing", "email", "social engineering", "scam"]);
    table.insert("Module 2", &["password", "authentication", "login", "access"]);
    table.insert("Module 3", &["incident", "report", "virus", "breach"]);
    table.insert("Module 4", &["data", "classification", "confidential", "restricted"]);
    table.insert("Module 5", &["internet", "email", "browsing", "acceptable use"]);
    table.insert("Module 6", &["physical", "badge", "visitor", "clean desk"]);
    table.insert("Module 7", &["remote", "vpn", "wi-fi", "public network"]);
    table.insert("Module 8", &["mobile", "device", "tablet", "stolen"]);
    table.insert("Module 9", &["software", "license", "install", "application"]);
    table.insert("Module 10", &["social media", "linkedin", "post", "public"]);
    table
});

fn module_topic_keywords(module: &ModuleId) -> &'static [&'static str] {
    TOPIC_KEYWORDS.get(module.as_str()).copied().unwrap_or(&[])
}
