//! Board service for QBoard.
//!
//! High-level question/answer operations combining validation,
//! authorization, and persistence. Permission checks live here (and in
//! the pure model functions), not in any UI layer; a caller only
//! invokes these operations and renders the result.

use tracing::{debug, info};

use crate::db::Database;
use crate::{QBoardError, Result};

use super::actor::Actor;
use super::answer::{Answer, AnswerUpdate, NewAnswer};
use super::answer_repository::AnswerRepository;
use super::model;
use super::query::{self, QuestionFilter};
use super::question_repository::QuestionRepository;
use super::types::{NewQuestion, Question, QuestionUpdate};
use super::validation::{validate_answer, validate_question, validate_search_query};

/// Normalize an optional category: trimmed, empty becomes None.
fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// Service for board operations with validation and permission checking.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    // ========== Questions ==========

    /// List all questions in insertion order.
    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        let repo = QuestionRepository::new(self.db.pool());
        repo.list_all().await
    }

    /// Get a question by ID.
    pub async fn get_question(&self, question_id: i64) -> Result<Question> {
        let repo = QuestionRepository::new(self.db.pool());
        repo.get_by_id(question_id)
            .await?
            .ok_or_else(|| QBoardError::NotFound("question".to_string()))
    }

    /// Create a new question authored by the actor.
    pub async fn create_question(
        &self,
        actor: &Actor,
        title: &str,
        content: &str,
        category: Option<&str>,
    ) -> Result<Question> {
        validate_question(title, content, category)?;

        let mut new_question = NewQuestion::new(title.trim(), content.trim(), &actor.username);
        new_question.category = normalize_category(category);

        let repo = QuestionRepository::new(self.db.pool());
        let question = repo.create(&new_question).await?;
        info!(
            "Question {} created by {}: {}",
            question.id, actor.username, question.title
        );
        Ok(question)
    }

    /// Edit a question. Only its author or an admin may do so.
    pub async fn update_question(
        &self,
        actor: &Actor,
        question_id: i64,
        title: &str,
        content: &str,
        category: Option<&str>,
    ) -> Result<Question> {
        let question = self.get_question(question_id).await?;
        if !actor.can_modify(&question) {
            return Err(QBoardError::Authorization(
                "only the author or an admin may edit this question".to_string(),
            ));
        }
        validate_question(title, content, category)?;

        let update = QuestionUpdate::new()
            .title(title.trim())
            .content(content.trim())
            .category(normalize_category(category));

        let repo = QuestionRepository::new(self.db.pool());
        let updated = repo
            .update(question_id, &update)
            .await?
            .ok_or_else(|| QBoardError::NotFound("question".to_string()))?;
        debug!("Question {} updated by {}", question_id, actor.username);
        Ok(updated)
    }

    /// Delete a question and, by cascade, all its answers.
    /// Only its author or an admin may do so.
    pub async fn delete_question(&self, actor: &Actor, question_id: i64) -> Result<()> {
        let question = self.get_question(question_id).await?;
        if !actor.can_modify(&question) {
            return Err(QBoardError::Authorization(
                "only the author or an admin may delete this question".to_string(),
            ));
        }

        let repo = QuestionRepository::new(self.db.pool());
        if !repo.delete(question_id).await? {
            return Err(QBoardError::NotFound("question".to_string()));
        }
        info!("Question {} deleted by {}", question_id, actor.username);
        Ok(())
    }

    // ========== Answers ==========

    /// List all answers of a question in insertion order.
    pub async fn list_answers(&self, question_id: i64) -> Result<Vec<Answer>> {
        // Ensure the question exists before listing
        self.get_question(question_id).await?;
        let repo = AnswerRepository::new(self.db.pool());
        repo.list_by_question(question_id).await
    }

    /// Add an answer to a question.
    ///
    /// Marks the question answered regardless of acceptance; a new
    /// reply always counts as "answered".
    pub async fn add_answer(
        &self,
        actor: &Actor,
        question_id: i64,
        content: &str,
    ) -> Result<Answer> {
        validate_answer(content)?;
        self.get_question(question_id).await?;

        let answer_repo = AnswerRepository::new(self.db.pool());
        let answer = answer_repo
            .create(&NewAnswer::new(question_id, content.trim(), &actor.username))
            .await?;

        let question_repo = QuestionRepository::new(self.db.pool());
        question_repo.set_answered(question_id, true).await?;

        info!(
            "Answer {} added to question {} by {}",
            answer.id, question_id, actor.username
        );
        Ok(answer)
    }

    /// Edit an answer. Only its author or an admin may do so.
    pub async fn update_answer(
        &self,
        actor: &Actor,
        answer_id: i64,
        content: &str,
    ) -> Result<Answer> {
        let repo = AnswerRepository::new(self.db.pool());
        let answer = repo
            .get_by_id(answer_id)
            .await?
            .ok_or_else(|| QBoardError::NotFound("answer".to_string()))?;
        if !actor.can_modify(&answer) {
            return Err(QBoardError::Authorization(
                "only the author or an admin may edit this answer".to_string(),
            ));
        }
        validate_answer(content)?;

        let updated = repo
            .update(answer_id, &AnswerUpdate::new().content(content.trim()))
            .await?
            .ok_or_else(|| QBoardError::NotFound("answer".to_string()))?;
        debug!("Answer {} updated by {}", answer_id, actor.username);
        Ok(updated)
    }

    /// Delete an answer. Only its author or an admin may do so.
    ///
    /// The owning question's answered flag is re-derived from the
    /// remaining answers.
    pub async fn delete_answer(&self, actor: &Actor, answer_id: i64) -> Result<()> {
        let answer_repo = AnswerRepository::new(self.db.pool());
        let answer = answer_repo
            .get_by_id(answer_id)
            .await?
            .ok_or_else(|| QBoardError::NotFound("answer".to_string()))?;
        if !actor.can_modify(&answer) {
            return Err(QBoardError::Authorization(
                "only the author or an admin may delete this answer".to_string(),
            ));
        }

        answer_repo.delete(answer_id).await?;

        let remaining = answer_repo.list_by_question(answer.question_id).await?;
        let question_repo = QuestionRepository::new(self.db.pool());
        question_repo
            .set_answered(answer.question_id, model::derive_answered(&remaining))
            .await?;

        info!("Answer {} deleted by {}", answer_id, actor.username);
        Ok(())
    }

    /// Accept or un-accept an answer. Admin only.
    ///
    /// Applies the accepted-answer rules in memory, then persists every
    /// flag they changed.
    pub async fn mark_accepted(
        &self,
        actor: &Actor,
        question_id: i64,
        answer_id: i64,
        accept: bool,
    ) -> Result<()> {
        if !actor.is_admin() {
            return Err(QBoardError::Authorization(
                "only an admin may mark answers as correct".to_string(),
            ));
        }

        let mut question = self.get_question(question_id).await?;
        let answer_repo = AnswerRepository::new(self.db.pool());
        let mut answers = answer_repo.list_by_question(question_id).await?;

        let before: Vec<(i64, bool)> = answers.iter().map(|a| (a.id, a.is_accepted)).collect();
        let was_answered = question.is_answered;

        model::set_accepted(&mut question, &mut answers, answer_id, accept)?;

        for (answer, (id, old_flag)) in answers.iter().zip(before) {
            debug_assert_eq!(answer.id, id);
            if answer.is_accepted != old_flag {
                answer_repo.set_accepted(answer.id, answer.is_accepted).await?;
            }
        }

        if question.is_answered != was_answered {
            let question_repo = QuestionRepository::new(self.db.pool());
            question_repo
                .set_answered(question_id, question.is_answered)
                .await?;
        }

        info!(
            "Answer {} of question {} {} by {}",
            answer_id,
            question_id,
            if accept { "accepted" } else { "un-accepted" },
            actor.username
        );
        Ok(())
    }

    // ========== Search & filter ==========

    /// Keyword search over the full question set.
    pub async fn search_questions(&self, keyword: &str) -> Result<Vec<Question>> {
        validate_search_query(keyword)?;
        let questions = self.list_questions().await?;
        Ok(query::search(&questions, keyword))
    }

    /// Apply a filter to the full question set.
    ///
    /// Filters always run against the full set; any previous search is
    /// discarded (last action wins).
    pub async fn filter_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        let questions = self.list_questions().await?;
        Ok(filter.apply(&questions))
    }
}
