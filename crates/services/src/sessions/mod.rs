mod keys;
mod plan;
mod progress;
mod record;
mod tracker;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{BatchBuilder, BatchPlan};
pub use progress::SessionProgress;
pub use tracker::{NextQuestions, QUESTIONS_PER_SESSION, SessionTracker};
