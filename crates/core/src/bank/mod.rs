//! Static question pools.
//!
//! The `general` category is a fixed list; every other category string is
//! treated as a field name and expanded from a template list.

mod general;
mod templates;

use crate::model::{Difficulty, Question, QuestionId};

use general::GENERAL_QUESTIONS;
use templates::FIELD_TEMPLATES;

/// Category name that selects the fixed general-interview pool.
pub const GENERAL_CATEGORY: &str = "general";

/// Field used when a requested field has no template list of its own.
pub const FALLBACK_FIELD: &str = "Software Engineering";

/// Returns the question pool for `category`.
///
/// Never fails: unknown field names are served from the fallback templates.
#[must_use]
pub fn question_bank(category: &str) -> Vec<Question> {
    if category == GENERAL_CATEGORY {
        return general_questions();
    }
    field_questions(category)
}

/// The fixed general-interview pool, in declaration order.
#[must_use]
pub fn general_questions() -> Vec<Question> {
    GENERAL_QUESTIONS
        .iter()
        .map(|&(id, text, topic, difficulty, tip)| {
            Question::new(
                QuestionId::from_bank(id.to_owned()),
                text,
                topic,
                difficulty,
                Some(tip.to_owned()),
            )
        })
        .collect()
}

/// Generates the pool for a free-text field name.
///
/// Lookup is exact and case-sensitive. Ids are derived from the requested
/// name even when the fallback templates are used, so distinct unknown
/// fields never share ids.
#[must_use]
pub fn field_questions(field: &str) -> Vec<Question> {
    let templates = templates_for(field).unwrap_or_else(fallback_templates);
    let prefix = id_prefix(field);

    templates
        .iter()
        .enumerate()
        .map(|(index, text)| {
            Question::new(
                QuestionId::from_bank(format!("{prefix}_{:03}", index + 1)),
                *text,
                "field-specific",
                Difficulty::for_position(index),
                Some(format!(
                    "Focus on specific examples from your experience in {field}."
                )),
            )
        })
        .collect()
}

/// Field names that have their own template list.
#[must_use]
pub fn known_fields() -> Vec<&'static str> {
    FIELD_TEMPLATES.iter().map(|(name, _)| *name).collect()
}

/// Finds a question by id within an already loaded pool.
#[must_use]
pub fn find_question<'a>(pool: &'a [Question], id: &QuestionId) -> Option<&'a Question> {
    pool.iter().find(|q| q.id() == id)
}

fn templates_for(field: &str) -> Option<&'static [&'static str; 10]> {
    FIELD_TEMPLATES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, templates)| templates)
}

fn fallback_templates() -> &'static [&'static str; 10] {
    &FIELD_TEMPLATES[0].1
}

fn id_prefix(field: &str) -> String {
    field
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
