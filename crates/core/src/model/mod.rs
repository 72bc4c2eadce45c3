mod ids;
mod progress;
mod question;

pub use ids::{IdError, InstallationId, QuestionId};
pub use progress::{QuestionProgress, SessionStage, SessionStatistics};
pub use question::{Difficulty, DifficultyParseError, Question};
