use interview_core::model::InstallationId;

const PROGRESS_KEY_PREFIX: &str = "interview_progress_";

/// Store key for one installation's progress in one category.
pub(crate) fn progress_key(installation: &InstallationId, category: &str) -> String {
    format!(
        "{PROGRESS_KEY_PREFIX}{installation}_{}",
        sanitize_category(category)
    )
}

/// Collapses every whitespace run into a single `_`.
pub(crate) fn sanitize_category(category: &str) -> String {
    let mut out = String::with_capacity(category.len());
    let mut in_whitespace = false;
    for c in category.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}
