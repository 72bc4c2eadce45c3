use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use interview_core::model::{InstallationId, QuestionId, QuestionProgress};
use interview_core::time::{from_millis, to_millis};

/// Persisted JSON shape of a category's progress.
///
/// Every field is optional on read so older or partial records still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProgressRecord {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub asked_question_ids: Option<Vec<String>>,
    #[serde(default)]
    pub current_session_questions: Option<Vec<String>>,
    #[serde(default)]
    pub current_question_index: Option<usize>,
    #[serde(default)]
    pub last_updated: Option<i64>,
}

impl ProgressRecord {
    pub(crate) fn from_progress(progress: &QuestionProgress) -> Self {
        Self {
            user_id: Some(progress.installation_id().to_string()),
            category: Some(progress.category().to_owned()),
            asked_question_ids: Some(
                progress
                    .asked_question_ids()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            current_session_questions: Some(
                progress
                    .current_session_questions()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            current_question_index: Some(progress.current_question_index()),
            last_updated: Some(to_millis(progress.last_updated())),
        }
    }

    /// Convert the record back into domain progress.
    ///
    /// The installation and category come from the caller since they are
    /// already encoded in the store key. Malformed ids are dropped.
    pub(crate) fn into_progress(
        self,
        installation: InstallationId,
        category: &str,
        now: DateTime<Utc>,
    ) -> QuestionProgress {
        let asked = self
            .asked_question_ids
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| QuestionId::new(raw).ok());
        let batch = self
            .current_session_questions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| QuestionId::new(raw).ok())
            .collect();
        let last_updated = self.last_updated.and_then(from_millis).unwrap_or(now);

        QuestionProgress::from_persisted(
            installation,
            category,
            asked,
            batch,
            self.current_question_index.unwrap_or(0),
            last_updated,
        )
    }

    pub(crate) fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub(crate) fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
