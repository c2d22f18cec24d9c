//! Query engine for the question list.
//!
//! All functions are pure and order-preserving: the output keeps the
//! input order, which is the store's insertion order. Search and
//! filters each run against the full question set; they are not
//! composable (last action wins), matching the board's behavior.

use std::fmt;
use std::str::FromStr;

use super::types::Question;

/// Case-insensitive keyword search against title or content.
///
/// An empty result is valid, not an error.
pub fn search(questions: &[Question], keyword: &str) -> Vec<Question> {
    let needle = keyword.to_lowercase();
    questions
        .iter()
        .filter(|q| {
            q.title.to_lowercase().contains(&needle) || q.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keep questions whose answered flag matches exactly.
pub fn filter_by_answered_status(questions: &[Question], answered: bool) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| q.is_answered == answered)
        .cloned()
        .collect()
}

/// Keep questions authored by the given user name (exact match).
pub fn filter_by_author(questions: &[Question], username: &str) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| q.author == username)
        .cloned()
        .collect()
}

/// Filter selection for the question list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuestionFilter {
    /// All questions.
    #[default]
    All,
    /// Only answered questions.
    Answered,
    /// Only unanswered questions.
    Unanswered,
    /// Only questions by the given author.
    ByAuthor(String),
}

impl QuestionFilter {
    /// Apply this filter to the full question set.
    pub fn apply(&self, questions: &[Question]) -> Vec<Question> {
        match self {
            QuestionFilter::All => questions.to_vec(),
            QuestionFilter::Answered => filter_by_answered_status(questions, true),
            QuestionFilter::Unanswered => filter_by_answered_status(questions, false),
            QuestionFilter::ByAuthor(username) => filter_by_author(questions, username),
        }
    }
}

impl fmt::Display for QuestionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionFilter::All => write!(f, "all"),
            QuestionFilter::Answered => write!(f, "answered"),
            QuestionFilter::Unanswered => write!(f, "unanswered"),
            QuestionFilter::ByAuthor(username) => write!(f, "author:{username}"),
        }
    }
}

impl FromStr for QuestionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(QuestionFilter::All),
            "answered" => Ok(QuestionFilter::Answered),
            "unanswered" => Ok(QuestionFilter::Unanswered),
            other => match other.strip_prefix("author:") {
                Some(username) if !username.is_empty() => {
                    Ok(QuestionFilter::ByAuthor(username.to_string()))
                }
                _ => Err(format!("unknown filter: {s}")),
            },
        }
    }
}
