use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::model::ids::{InstallationId, QuestionId};

/// Where a category currently sits in the practice state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    /// No batch drawn; the next request starts a new session.
    NoSession,
    /// A batch is in progress and can be resumed.
    Active,
    /// Every question in the batch has been answered but the session was not completed yet.
    Exhausted,
}

/// Per-installation, per-category progress through a question pool.
///
/// Invariant: `current_question_index <= current_session_questions.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionProgress {
    installation_id: InstallationId,
    category: String,
    asked_question_ids: BTreeSet<QuestionId>,
    current_session_questions: Vec<QuestionId>,
    current_question_index: usize,
    last_updated: DateTime<Utc>,
}

impl QuestionProgress {
    /// Fresh progress with nothing asked and no batch drawn.
    #[must_use]
    pub fn empty(
        installation_id: InstallationId,
        category: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            installation_id,
            category: category.into(),
            asked_question_ids: BTreeSet::new(),
            current_session_questions: Vec::new(),
            current_question_index: 0,
            last_updated: now,
        }
    }

    /// Rehydrate progress from storage.
    ///
    /// The cursor is clamped to the batch length so a corrupted record cannot
    /// point past the end of the session.
    #[must_use]
    pub fn from_persisted(
        installation_id: InstallationId,
        category: impl Into<String>,
        asked_question_ids: impl IntoIterator<Item = QuestionId>,
        current_session_questions: Vec<QuestionId>,
        current_question_index: usize,
        last_updated: DateTime<Utc>,
    ) -> Self {
        let current_question_index = current_question_index.min(current_session_questions.len());
        Self {
            installation_id,
            category: category.into(),
            asked_question_ids: asked_question_ids.into_iter().collect(),
            current_session_questions,
            current_question_index,
            last_updated,
        }
    }

    #[must_use]
    pub fn installation_id(&self) -> &InstallationId {
        &self.installation_id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn asked_question_ids(&self) -> &BTreeSet<QuestionId> {
        &self.asked_question_ids
    }

    #[must_use]
    pub fn has_asked(&self, id: &QuestionId) -> bool {
        self.asked_question_ids.contains(id)
    }

    #[must_use]
    pub fn current_session_questions(&self) -> &[QuestionId] {
        &self.current_session_questions
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// The id at the cursor, if the session is still active.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionId> {
        self.current_session_questions.get(self.current_question_index)
    }

    /// True when a batch exists and the cursor has not reached its end.
    #[must_use]
    pub fn is_resumable(&self) -> bool {
        !self.current_session_questions.is_empty()
            && self.current_question_index < self.current_session_questions.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.current_session_questions.is_empty()
            && self.current_question_index == self.current_session_questions.len()
    }

    #[must_use]
    pub fn stage(&self) -> SessionStage {
        if self.is_resumable() {
            SessionStage::Active
        } else if self.is_exhausted() {
            SessionStage::Exhausted
        } else {
            SessionStage::NoSession
        }
    }

    /// Install a freshly drawn batch at cursor 0.
    ///
    /// With `rollover` set the asked set is cleared first.
    pub fn begin_batch(&mut self, batch: Vec<QuestionId>, rollover: bool, now: DateTime<Utc>) {
        if rollover {
            self.asked_question_ids.clear();
        }
        self.current_session_questions = batch;
        self.current_question_index = 0;
        self.last_updated = now;
    }

    /// Record `id` as asked and advance the cursor by one.
    ///
    /// The id is not checked against the question at the cursor. The cursor
    /// never moves past the end of the batch.
    pub fn record_answer(&mut self, id: QuestionId, now: DateTime<Utc>) {
        self.asked_question_ids.insert(id);
        self.current_question_index =
            (self.current_question_index + 1).min(self.current_session_questions.len());
        self.last_updated = now;
    }

    /// Retire every id of the current batch and clear the session.
    pub fn retire_batch(&mut self, now: DateTime<Utc>) {
        let batch = std::mem::take(&mut self.current_session_questions);
        self.asked_question_ids.extend(batch);
        self.current_question_index = 0;
        self.last_updated = now;
    }
}

/// Completion figures for a category's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatistics {
    pub total_questions: usize,
    pub asked_questions: usize,
    pub remaining_questions: usize,
    pub percentage_complete: usize,
}

impl SessionStatistics {
    /// Percentage is rounded half up; an empty pool reports 0%.
    #[must_use]
    pub fn compute(total_questions: usize, asked_questions: usize) -> Self {
        let percentage_complete = if total_questions == 0 {
            0
        } else {
            (asked_questions * 200 + total_questions) / (total_questions * 2)
        };
        Self {
            total_questions,
            asked_questions,
            remaining_questions: total_questions.saturating_sub(asked_questions),
            percentage_complete,
        }
    }
}
