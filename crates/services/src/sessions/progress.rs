use interview_core::model::QuestionProgress;

/// Position within the current batch, useful for "question 4 of 10" displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn of(progress: &QuestionProgress) -> Self {
        let total = progress.current_session_questions().len();
        let answered = progress.current_question_index();
        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: progress.is_exhausted(),
        }
    }
}
