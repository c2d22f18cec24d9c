//! Question model for QBoard.
//!
//! This module defines the Question struct together with the builder
//! types used for creation and partial update.

use super::actor::Authored;

/// Question entity posted to the discussion board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Question {
    /// Unique question ID, assigned by the store on creation.
    pub id: i64,
    /// Question title.
    pub title: String,
    /// Question body.
    pub content: String,
    /// User name of the author.
    pub author: String,
    /// Optional category label.
    pub category: Option<String>,
    /// Whether the question counts as answered (see the board model rules).
    pub is_answered: bool,
    /// Creation timestamp, assigned once by the store.
    pub created_at: String,
}

impl Question {
    /// Display status for question lists.
    pub fn status_label(&self) -> &'static str {
        if self.is_answered {
            "Answered"
        } else {
            "Unanswered"
        }
    }
}

impl Authored for Question {
    fn author(&self) -> &str {
        &self.author
    }
}

/// Data for creating a new question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    /// Question title.
    pub title: String,
    /// Question body.
    pub content: String,
    /// User name of the author.
    pub author: String,
    /// Optional category label.
    pub category: Option<String>,
}

impl NewQuestion {
    /// Create a new question with the required fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            category: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Data for updating an existing question.
///
/// The author, creation timestamp, and answered flag are not editable
/// through an update; the answered flag is maintained by the board model.
#[derive(Debug, Clone, Default)]
pub struct QuestionUpdate {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// New category (Some(None) clears it).
    pub category: Option<Option<String>>,
}

impl QuestionUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set new content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set new category.
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question(answered: bool) -> Question {
        Question {
            id: 1,
            title: "How do I reset my password?".to_string(),
            content: "I lost access to my account.".to_string(),
            author: "alice".to_string(),
            category: None,
            is_answered: answered,
            created_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_status_label() {
        assert_eq!(sample_question(false).status_label(), "Unanswered");
        assert_eq!(sample_question(true).status_label(), "Answered");
    }

    #[test]
    fn test_question_author() {
        let q = sample_question(false);
        assert_eq!(q.author(), "alice");
    }

    #[test]
    fn test_new_question_defaults() {
        let q = NewQuestion::new("Title", "Body", "alice");
        assert_eq!(q.title, "Title");
        assert_eq!(q.content, "Body");
        assert_eq!(q.author, "alice");
        assert_eq!(q.category, None);
    }

    #[test]
    fn test_new_question_with_category() {
        let q = NewQuestion::new("Title", "Body", "alice").with_category("homework");
        assert_eq!(q.category, Some("homework".to_string()));
    }

    #[test]
    fn test_question_update_builder() {
        let update = QuestionUpdate::new()
            .title("New Title")
            .content("New Body")
            .category(Some("general".to_string()));

        assert_eq!(update.title, Some("New Title".to_string()));
        assert_eq!(update.content, Some("New Body".to_string()));
        assert_eq!(update.category, Some(Some("general".to_string())));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_question_update_empty() {
        let update = QuestionUpdate::new();
        assert!(update.is_empty());
    }

    #[test]
    fn test_question_update_clear_category() {
        let update = QuestionUpdate::new().category(None);
        assert_eq!(update.category, Some(None));
        assert!(!update.is_empty());
    }
}
