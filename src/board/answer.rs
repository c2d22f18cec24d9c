//! Answer model for QBoard.

use super::actor::Authored;

/// Answer entity belonging to a question.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Answer {
    /// Unique answer ID.
    pub id: i64,
    /// ID of the question this answer belongs to. Immutable.
    pub question_id: i64,
    /// Answer body.
    pub content: String,
    /// User name of the author.
    pub author: String,
    /// Whether this answer is the accepted one for its question.
    pub is_accepted: bool,
    /// Creation timestamp, assigned once by the store.
    pub created_at: String,
}

impl Authored for Answer {
    fn author(&self) -> &str {
        &self.author
    }
}

/// Data for creating a new answer.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    /// ID of the question being answered.
    pub question_id: i64,
    /// Answer body.
    pub content: String,
    /// User name of the author.
    pub author: String,
}

impl NewAnswer {
    /// Create a new answer with the required fields.
    pub fn new(question_id: i64, content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            question_id,
            content: content.into(),
            author: author.into(),
        }
    }
}

/// Data for updating an existing answer.
#[derive(Debug, Clone, Default)]
pub struct AnswerUpdate {
    /// New content.
    pub content: Option<String>,
    /// New accepted flag.
    pub is_accepted: Option<bool>,
}

impl AnswerUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the accepted flag.
    pub fn is_accepted(mut self, is_accepted: bool) -> Self {
        self.is_accepted = Some(is_accepted);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.is_accepted.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_author() {
        let answer = Answer {
            id: 1,
            question_id: 7,
            content: "Try the reset link.".to_string(),
            author: "bob".to_string(),
            is_accepted: false,
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        assert_eq!(answer.author(), "bob");
    }

    #[test]
    fn test_new_answer() {
        let answer = NewAnswer::new(7, "Try the reset link.", "bob");
        assert_eq!(answer.question_id, 7);
        assert_eq!(answer.content, "Try the reset link.");
        assert_eq!(answer.author, "bob");
    }

    #[test]
    fn test_answer_update_empty() {
        let update = AnswerUpdate::new();
        assert!(update.is_empty());
    }

    #[test]
    fn test_answer_update_content() {
        let update = AnswerUpdate::new().content("Edited");
        assert_eq!(update.content, Some("Edited".to_string()));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_answer_update_accepted() {
        let update = AnswerUpdate::new().is_accepted(true);
        assert_eq!(update.is_accepted, Some(true));
        assert!(!update.is_empty());
    }
}
