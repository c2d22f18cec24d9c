//! Question repository for QBoard.
//!
//! This module provides CRUD operations for questions in the database.

use sqlx::{QueryBuilder, SqlitePool};

use super::types::{NewQuestion, Question, QuestionUpdate};
use crate::{QBoardError, Result};

/// Repository for question CRUD operations.
pub struct QuestionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepository<'a> {
    /// Create a new QuestionRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new question in the database.
    ///
    /// Returns the created question with the assigned ID.
    pub async fn create(&self, new_question: &NewQuestion) -> Result<Question> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (title, content, author, category)
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_question.title)
        .bind(&new_question.content)
        .bind(&new_question.author)
        .bind(&new_question.category)
        .fetch_one(self.pool)
        .await
        .map_err(|e| QBoardError::Database(e.to_string()))?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| QBoardError::NotFound("question".to_string()))
    }

    /// Get a question by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Question>> {
        let result: Option<Question> = sqlx::query_as(
            "SELECT id, title, content, author, category, is_answered, created_at
             FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| QBoardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Update a question by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated question, or None if not found.
    pub async fn update(&self, id: i64, update: &QuestionUpdate) -> Result<Option<Question>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE questions SET ");
        let mut separated = query.separated(", ");

        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content);
        }
        if let Some(ref category) = update.category {
            separated.push("category = ");
            separated.push_bind_unseparated(category.clone());
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

    /// Set the answered flag of a question.
    ///
    /// Returns true if the question existed.
    pub async fn set_answered(&self, id: i64, answered: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE questions SET is_answered = ? WHERE id = ?")
            .bind(answered)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| QBoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a question by ID. Its answers are removed by cascade.
    ///
    /// Returns true if a question was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| QBoardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// List all questions in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Question>> {
        let rows: Vec<Question> = sqlx::query_as(
            "SELECT id, title, content, author, category, is_answered, created_at
             FROM questions ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| QBoardError::Database(e.to_string()))?;

        Ok(rows)
    }
}
