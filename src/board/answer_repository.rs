//! Answer repository for QBoard.
//!
//! This module provides CRUD operations for answers in the database.

use sqlx::{QueryBuilder, SqlitePool};

use super::answer::{Answer, AnswerUpdate, NewAnswer};
use crate::{QBoardError, Result};

/// Repository for answer CRUD operations.
pub struct AnswerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnswerRepository<'a> {
    /// Create a new AnswerRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new answer in the database.
    ///
    /// Returns the created answer with the assigned ID.
    pub async fn create(&self, new_answer: &NewAnswer) -> Result<Answer> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO answers (question_id, content, author)
             VALUES (?, ?, ?) RETURNING id",
        )
        .bind(new_answer.question_id)
        .bind(&new_answer.content)
        .bind(&new_answer.author)
        .fetch_one(self.pool)
        .await
        .map_err(|e| QBoardError::Database(e.to_string()))?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| QBoardError::NotFound("answer".to_string()))
    }

    /// Get an answer by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Answer>> {
        let result: Option<Answer> = sqlx::query_as(
            "SELECT id, question_id, content, author, is_accepted, created_at
             FROM answers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| QBoardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Update an answer by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated answer, or None if not found.
    pub async fn update(&self, id: i64, update: &AnswerUpdate) -> Result<Option<Answer>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE answers SET ");
        let mut separated = query.separated(", ");

        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content);
        }
        if let Some(is_accepted) = update.is_accepted {
            separated.push("is_accepted = ");
            separated.push_bind_unseparated(is_accepted);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| QBoardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Set the accepted flag of an answer.
    ///
    /// Returns true if the answer existed.
    pub async fn set_accepted(&self, id: i64, accepted: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE answers SET is_accepted = ? WHERE id = ?")
            .bind(accepted)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| QBoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an answer by ID.
    ///
    /// Returns true if an answer was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM answers WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| QBoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// List all answers of a question in insertion order.
    pub async fn list_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        let rows: Vec<Answer> = sqlx::query_as(
            "SELECT id, question_id, content, author, is_accepted, created_at
             FROM answers WHERE question_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(question_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| QBoardError::Database(e.to_string()))?;

        Ok(rows)
    }
}
