//! Input validation for questions, answers, and search queries.
//!
//! All checks are pure and run before any mutation is attempted, so a
//! rejected input never partially modifies state.

use crate::{QBoardError, Result};

/// Maximum length for question titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length for question and answer bodies (in characters).
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Validate the fields of a question.
///
/// Title and content must be non-empty (ignoring whitespace) and within
/// their length bounds. The category is optional and unrestricted.
pub fn validate_question(title: &str, content: &str, _category: Option<&str>) -> Result<()> {
    if title.trim().is_empty() {
        return Err(QBoardError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(QBoardError::Validation(format!(
            "title too long (max {MAX_TITLE_LENGTH} characters)"
        )));
    }
    if content.trim().is_empty() {
        return Err(QBoardError::Validation(
            "content must not be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(QBoardError::Validation(format!(
            "content too long (max {MAX_CONTENT_LENGTH} characters)"
        )));
    }
    Ok(())
}

/// Validate the content of an answer.
pub fn validate_answer(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(QBoardError::Validation(
            "answer must not be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(QBoardError::Validation(format!(
            "answer too long (max {MAX_CONTENT_LENGTH} characters)"
        )));
    }
    Ok(())
}

/// Validate a search query.
pub fn validate_search_query(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(QBoardError::Validation(
            "search text must not be empty".to_string(),
        ));
    }
    Ok(())
}
