use std::fmt;
use std::sync::Arc;

use interview_core::bank::{find_question, question_bank};
use interview_core::model::{
    InstallationId, Question, QuestionId, QuestionProgress, SessionStage, SessionStatistics,
};
use storage::repository::KeyValueStore;
use tracing::{debug, error, info, warn};

use super::keys::progress_key;
use super::plan::BatchBuilder;
use super::record::ProgressRecord;
use crate::error::SessionError;
use crate::shuffle::Shuffler;
use crate::Clock;

/// Default number of questions drawn per practice session.
pub const QUESTIONS_PER_SESSION: usize = 10;

/// Result of asking for the next batch.
#[derive(Debug, Clone, PartialEq)]
pub struct NextQuestions {
    pub questions: Vec<Question>,
    pub progress: QuestionProgress,
    pub is_resuming_session: bool,
}

/// Tracks practice sessions per category for one installation.
///
/// Progress lives in the key-value store, one record per category. Storage
/// failures never reach the caller: unreadable records count as absent and
/// failed writes are logged and dropped, so the returned state may be ahead
/// of what is durable until the next successful write.
///
/// Calls are not serialized. Two overlapping `next_questions` calls for the
/// same category can both draw a batch; the later write wins.
#[derive(Clone)]
pub struct SessionTracker {
    installation: InstallationId,
    clock: Clock,
    store: Arc<dyn KeyValueStore>,
    shuffler: Arc<Shuffler>,
    batch_size: usize,
}

impl SessionTracker {
    #[must_use]
    pub fn new(
        installation: InstallationId,
        clock: Clock,
        store: Arc<dyn KeyValueStore>,
        shuffler: Arc<Shuffler>,
    ) -> Self {
        Self {
            installation,
            clock,
            store,
            shuffler,
            batch_size: QUESTIONS_PER_SESSION,
        }
    }

    /// Override the batch size (values below 1 are raised to 1).
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    #[must_use]
    pub fn installation_id(&self) -> &InstallationId {
        &self.installation
    }

    /// Resume the open batch for `category`, or draw a new one.
    ///
    /// A new batch prefers unseen questions. When fewer than `batch_size`
    /// remain unseen, the asked set is cleared and the whole pool is reused.
    pub async fn next_questions(&self, category: &str) -> NextQuestions {
        let pool = question_bank(category);
        let stored = self.load(category).await;

        if let Some(progress) = stored.as_ref().filter(|p| p.is_resumable()) {
            let questions: Vec<Question> = progress
                .current_session_questions()
                .iter()
                .filter_map(|id| find_question(&pool, id).cloned())
                .collect();
            debug!(
                category,
                index = progress.current_question_index(),
                total = questions.len(),
                "resuming interview session"
            );
            return NextQuestions {
                questions,
                progress: progress.clone(),
                is_resuming_session: true,
            };
        }

        let now = self.clock.now();
        let mut progress = stored
            .unwrap_or_else(|| QuestionProgress::empty(self.installation.clone(), category, now));

        let plan = BatchBuilder::new(&pool, self.batch_size)
            .build(progress.asked_question_ids(), &self.shuffler);
        if plan.rolled_over {
            info!(
                category,
                unseen = plan.unseen_available,
                pool = pool.len(),
                "question pool exhausted, starting over"
            );
        }

        progress.begin_batch(plan.ids(), plan.rolled_over, now);
        self.save(&progress).await;
        debug!(category, drawn = plan.len(), "started interview session");

        NextQuestions {
            questions: plan.questions,
            progress,
            is_resuming_session: false,
        }
    }

    /// Record `question_id` as asked and move the cursor forward by one.
    ///
    /// The id is trusted as given; it is not matched against the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no progress exists for the
    /// category, which means the caller skipped `next_questions`.
    pub async fn mark_question_answered(
        &self,
        category: &str,
        question_id: &QuestionId,
    ) -> Result<QuestionProgress, SessionError> {
        let Some(mut progress) = self.load(category).await else {
            return Err(SessionError::NoActiveSession {
                category: category.to_owned(),
            });
        };

        progress.record_answer(question_id.clone(), self.clock.now());
        self.save(&progress).await;
        Ok(progress)
    }

    /// Retire the whole batch, answered or not, and clear the session.
    ///
    /// Returns `None` (and writes nothing) if the category has no progress.
    pub async fn complete_session(&self, category: &str) -> Option<QuestionProgress> {
        let mut progress = self.load(category).await?;
        let retired = progress.current_session_questions().len();

        progress.retire_batch(self.clock.now());
        self.save(&progress).await;
        debug!(category, retired, "completed interview session");
        Some(progress)
    }

    /// Coverage of the category's pool. Read only.
    pub async fn statistics(&self, category: &str) -> SessionStatistics {
        let total = question_bank(category).len();
        let asked = self
            .load(category)
            .await
            .map_or(0, |p| p.asked_question_ids().len());
        SessionStatistics::compute(total, asked)
    }

    /// Overwrite the category's progress with empty defaults.
    pub async fn reset_progress(&self, category: &str) -> QuestionProgress {
        let progress =
            QuestionProgress::empty(self.installation.clone(), category, self.clock.now());
        self.save(&progress).await;
        info!(category, "interview progress reset");
        progress
    }

    /// Stored progress for the category, if any.
    pub async fn progress(&self, category: &str) -> Option<QuestionProgress> {
        self.load(category).await
    }

    pub async fn stage(&self, category: &str) -> SessionStage {
        self.load(category)
            .await
            .map_or(SessionStage::NoSession, |p| p.stage())
    }

    async fn load(&self, category: &str) -> Option<QuestionProgress> {
        let key = progress_key(&self.installation, category);
        let raw = match self.store.get(&key).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key = %key, error = %err, "failed to load interview progress");
                return None;
            }
        };

        match ProgressRecord::decode(&raw) {
            Ok(record) => {
                Some(record.into_progress(self.installation.clone(), category, self.clock.now()))
            }
            Err(err) => {
                warn!(key = %key, error = %err, "discarding unreadable interview progress");
                None
            }
        }
    }

    async fn save(&self, progress: &QuestionProgress) {
        let key = progress_key(&self.installation, progress.category());
        let encoded = match ProgressRecord::from_progress(progress).encode() {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(key = %key, error = %err, "failed to encode interview progress");
                return;
            }
        };

        if let Err(err) = self.store.set(&key, &encoded).await {
            error!(key = %key, error = %err, "failed to save interview progress");
        }
    }
}

impl fmt::Debug for SessionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTracker")
            .field("installation", &self.installation)
            .field("clock", &self.clock)
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use interview_core::time::{fixed_clock, fixed_now};
    use std::collections::HashSet;
    use storage::repository::{InMemoryStore, StorageError};

    fn installation() -> InstallationId {
        InstallationId::new("user_test").unwrap()
    }

    fn tracker(store: Arc<dyn KeyValueStore>) -> SessionTracker {
        SessionTracker::new(
            installation(),
            fixed_clock(),
            store,
            Arc::new(Shuffler::seeded(42)),
        )
    }

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    async fn seed(store: &InMemoryStore, progress: &QuestionProgress) {
        let key = progress_key(progress.installation_id(), progress.category());
        let raw = ProgressRecord::from_progress(progress).encode().unwrap();
        store.set(&key, &raw).await.unwrap();
    }

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        async fn keys_with_prefix(&self, _prefix: &str) -> Result<Vec<String>, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
    }

    #[tokio::test]
    async fn fresh_category_draws_unique_batch() {
        let tracker = tracker(Arc::new(InMemoryStore::new()));
        let next = tracker.next_questions("general").await;

        assert!(!next.is_resuming_session);
        assert_eq!(next.questions.len(), 10);
        let ids: HashSet<_> = next.questions.iter().map(Question::id).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(next.progress.current_question_index(), 0);
        assert_eq!(next.progress.current_session_questions().len(), 10);
    }

    #[tokio::test]
    async fn open_batch_is_resumed_unchanged() {
        let store = InMemoryStore::new();
        let pool = question_bank("general");
        let batch: Vec<_> = pool.iter().take(10).map(|q| q.id().clone()).collect();
        let mut progress = QuestionProgress::empty(installation(), "general", fixed_now());
        progress.begin_batch(batch.clone(), false, fixed_now());
        for id in &batch[..3] {
            progress.record_answer(id.clone(), fixed_now());
        }
        seed(&store, &progress).await;

        let next = tracker(Arc::new(store)).next_questions("general").await;
        assert!(next.is_resuming_session);
        assert_eq!(next.progress, progress);
        let resumed: Vec<_> = next.questions.iter().map(|q| q.id().clone()).collect();
        assert_eq!(resumed, batch);
    }

    #[tokio::test]
    async fn resumed_batch_drops_ids_missing_from_pool() {
        let store = InMemoryStore::new();
        let mut progress = QuestionProgress::empty(installation(), "general", fixed_now());
        progress.begin_batch(vec![qid("gen_001"), qid("gone_999")], false, fixed_now());
        seed(&store, &progress).await;

        let next = tracker(Arc::new(store)).next_questions("general").await;
        assert!(next.is_resuming_session);
        assert_eq!(next.questions.len(), 1);
        assert_eq!(next.progress.current_session_questions().len(), 2);
    }

    #[tokio::test]
    async fn exhausted_batch_is_not_resumed() {
        let store = InMemoryStore::new();
        let mut progress = QuestionProgress::empty(installation(), "general", fixed_now());
        progress.begin_batch(vec![qid("gen_001")], false, fixed_now());
        progress.record_answer(qid("gen_001"), fixed_now());
        seed(&store, &progress).await;

        let next = tracker(Arc::new(store)).next_questions("general").await;
        assert!(!next.is_resuming_session);
        assert!(next.progress.has_asked(&qid("gen_001")));
        assert!(next
            .questions
            .iter()
            .all(|q| q.id() != &qid("gen_001")));
    }

    #[tokio::test]
    async fn marking_twice_counts_once_but_advances_twice() {
        let store = Arc::new(InMemoryStore::new());
        let tracker = tracker(store);
        let next = tracker.next_questions("general").await;
        let first = next.questions[0].id().clone();

        tracker.mark_question_answered("general", &first).await.unwrap();
        let progress = tracker.mark_question_answered("general", &first).await.unwrap();

        assert_eq!(progress.current_question_index(), 2);
        assert_eq!(progress.asked_question_ids().len(), 1);
        assert!(progress.has_asked(&first));
    }

    #[tokio::test]
    async fn marking_without_progress_is_an_error() {
        let tracker = tracker(Arc::new(InMemoryStore::new()));
        let err = tracker
            .mark_question_answered("general", &qid("gen_001"))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::NoActiveSession { category } if category == "general"));
    }

    #[tokio::test]
    async fn complete_session_sweeps_unmarked_ids() {
        let store = InMemoryStore::new();
        let mut progress = QuestionProgress::empty(installation(), "general", fixed_now());
        progress.begin_batch(vec![qid("gen_001"), qid("gen_002"), qid("gen_003")], false, fixed_now());
        seed(&store, &progress).await;

        let tracker = tracker(Arc::new(store));
        tracker.mark_question_answered("general", &qid("gen_001")).await.unwrap();
        let done = tracker.complete_session("general").await.unwrap();

        for raw in ["gen_001", "gen_002", "gen_003"] {
            assert!(done.has_asked(&qid(raw)));
        }
        assert!(done.current_session_questions().is_empty());
        assert_eq!(done.current_question_index(), 0);
        assert_eq!(tracker.progress("general").await, Some(done));
    }

    #[tokio::test]
    async fn complete_session_without_progress_is_a_no_op() {
        let store = Arc::new(InMemoryStore::new());
        let tracker = tracker(store.clone());
        assert!(tracker.complete_session("Finance").await.is_none());
        assert!(store.keys_with_prefix("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn statistics_report_rounded_percentage() {
        let store = InMemoryStore::new();
        let pool = question_bank("general");
        let mut progress = QuestionProgress::empty(installation(), "general", fixed_now());
        for q in pool.iter().take(23) {
            progress.record_answer(q.id().clone(), fixed_now());
        }
        seed(&store, &progress).await;

        let stats = tracker(Arc::new(store)).statistics("general").await;
        assert_eq!(
            stats,
            SessionStatistics {
                total_questions: 60,
                asked_questions: 23,
                remaining_questions: 37,
                percentage_complete: 38,
            }
        );
    }

    #[tokio::test]
    async fn reset_overwrites_progress() {
        let store = Arc::new(InMemoryStore::new());
        let tracker = tracker(store);
        tracker.next_questions("Data Science").await;

        let reset = tracker.reset_progress("Data Science").await;
        assert!(reset.asked_question_ids().is_empty());
        assert!(reset.current_session_questions().is_empty());
        assert_eq!(tracker.stage("Data Science").await, SessionStage::NoSession);
    }

    #[tokio::test]
    async fn unreadable_record_is_treated_as_absent() {
        let store = InMemoryStore::new();
        store
            .set(&progress_key(&installation(), "general"), "{broken")
            .await
            .unwrap();

        let next = tracker(Arc::new(store)).next_questions("general").await;
        assert!(!next.is_resuming_session);
        assert_eq!(next.questions.len(), 10);
    }

    #[tokio::test]
    async fn storage_failures_are_absorbed() {
        let tracker = tracker(Arc::new(BrokenStore));

        let next = tracker.next_questions("general").await;
        assert!(!next.is_resuming_session);
        assert_eq!(next.questions.len(), 10);

        let stats = tracker.statistics("general").await;
        assert_eq!(stats.asked_questions, 0);
        assert!(tracker.complete_session("general").await.is_none());
        assert!(tracker
            .mark_question_answered("general", next.questions[0].id())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn categories_are_isolated() {
        let store = Arc::new(InMemoryStore::new());
        let tracker = tracker(store);
        tracker.next_questions("Marketing").await;

        assert_eq!(tracker.stage("Marketing").await, SessionStage::Active);
        assert_eq!(tracker.stage("Finance").await, SessionStage::NoSession);
    }

    #[tokio::test]
    async fn batch_size_is_configurable() {
        let tracker = tracker(Arc::new(InMemoryStore::new())).with_batch_size(3);
        let next = tracker.next_questions("general").await;
        assert_eq!(next.questions.len(), 3);
        assert_eq!(tracker.with_batch_size(0).batch_size(), 1);
    }
}
