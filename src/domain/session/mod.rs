//! Per-session conversational state.

mod context;

pub use context::{SessionContext, TrainingProgress, TranscriptTurn, TurnRole};
