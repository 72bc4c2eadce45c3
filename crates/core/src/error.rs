use thiserror::Error;

use crate::model::{DifficultyParseError, IdError};

/// Any validation failure raised by the domain model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyParseError),
}
