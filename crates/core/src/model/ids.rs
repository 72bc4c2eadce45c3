use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when constructing a string identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdError {
    #[error("{kind} cannot be empty")]
    Empty { kind: &'static str },

    #[error("{kind} cannot contain whitespace: {raw:?}")]
    Whitespace { kind: &'static str, raw: String },
}

fn validate(kind: &'static str, raw: String) -> Result<String, IdError> {
    if raw.is_empty() {
        return Err(IdError::Empty { kind });
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(IdError::Whitespace { kind, raw });
    }
    Ok(raw)
}

/// Identifier of a question, unique within its pool (e.g. `gen_001`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new `QuestionId`
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the id is empty or contains whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        validate("QuestionId", id.into()).map(Self)
    }

    /// For ids built by the question bank, which are well-formed by construction.
    pub(crate) fn from_bank(id: String) -> Self {
        debug_assert!(!id.is_empty() && !id.chars().any(char::is_whitespace));
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stable per-installation identity that scopes persisted progress.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstallationId(String);

impl InstallationId {
    /// Creates a new `InstallationId` from a previously stored value.
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the id is empty or contains whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        validate("InstallationId", id.into()).map(Self)
    }

    /// Generates a fresh random identity of the form `user_<uuid>`.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("user_{}", Uuid::new_v4().simple()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ─── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<String> for QuestionId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl TryFrom<String> for InstallationId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InstallationId> for String {
    fn from(id: InstallationId) -> Self {
        id.0
    }
}

impl FromStr for QuestionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for InstallationId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─── Debug / Display ───────────────────────────────────────────────────────────

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Debug for InstallationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstallationId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for InstallationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_display_and_parse() {
        let id: QuestionId = "gen_001".parse().unwrap();
        assert_eq!(id.to_string(), "gen_001");
        assert_eq!(id, QuestionId::new("gen_001").unwrap());
    }

    #[test]
    fn question_id_rejects_empty_and_whitespace() {
        assert_eq!(
            QuestionId::new("").unwrap_err(),
            IdError::Empty { kind: "QuestionId" }
        );
        assert!(matches!(
            QuestionId::new("gen 001"),
            Err(IdError::Whitespace { .. })
        ));
    }

    #[test]
    fn generated_installation_ids_are_distinct() {
        let a = InstallationId::generate();
        let b = InstallationId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("user_"));
        assert!(InstallationId::new(a.as_str()).is_ok());
    }

    #[test]
    fn serde_rejects_invalid_ids() {
        let ok: QuestionId = serde_json::from_str("\"marketing_001\"").unwrap();
        assert_eq!(ok.as_str(), "marketing_001");
        assert!(serde_json::from_str::<QuestionId>("\"\"").is_err());
    }
}
