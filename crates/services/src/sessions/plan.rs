use std::collections::BTreeSet;

use interview_core::model::{Question, QuestionId};

use crate::shuffle::Shuffler;

/// Selection result for a new batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlan {
    pub questions: Vec<Question>,
    /// True when too few unseen questions remained and the whole pool was reused.
    pub rolled_over: bool,
    /// Unseen questions available before any rollover.
    pub unseen_available: usize,
}

impl BatchPlan {
    #[must_use]
    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id().clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Draws a batch from a pool, preferring questions not asked yet.
pub struct BatchBuilder<'a> {
    pool: &'a [Question],
    batch_size: usize,
}

impl<'a> BatchBuilder<'a> {
    #[must_use]
    pub fn new(pool: &'a [Question], batch_size: usize) -> Self {
        Self { pool, batch_size }
    }

    /// Build a batch excluding `asked`.
    ///
    /// - If fewer than `batch_size` unseen questions remain, the pool rolls
    ///   over: the full pool is used and the caller must clear `asked`.
    /// - Candidates are shuffled and the first `batch_size` are taken, so the
    ///   batch has no duplicates and holds `min(batch_size, candidates)` items.
    pub fn build(self, asked: &BTreeSet<QuestionId>, shuffler: &Shuffler) -> BatchPlan {
        let mut candidates: Vec<&Question> = self
            .pool
            .iter()
            .filter(|q| !asked.contains(q.id()))
            .collect();
        let unseen_available = candidates.len();

        let rolled_over = unseen_available < self.batch_size;
        if rolled_over {
            candidates = self.pool.iter().collect();
        }

        shuffler.shuffle(&mut candidates);
        let questions = candidates
            .into_iter()
            .take(self.batch_size)
            .cloned()
            .collect();

        BatchPlan {
            questions,
            rolled_over,
            unseen_available,
        }
    }
}
