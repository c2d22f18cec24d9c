//! Database schema and migrations for QBoard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Questions table
    r#"
-- Questions posted to the discussion board
CREATE TABLE questions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    author      TEXT NOT NULL,           -- user name, not validated against a user table
    category    TEXT,
    is_answered INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_questions_author ON questions(author);
CREATE INDEX idx_questions_is_answered ON questions(is_answered);
CREATE INDEX idx_questions_created_at ON questions(created_at);
"#,
    // v2: Answers table
    r#"
-- Answers belonging to a question; deleting a question cascades here
CREATE TABLE answers (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id INTEGER NOT NULL REFERENCES questions(id) ON DELETE CASCADE,
    content     TEXT NOT NULL,
    author      TEXT NOT NULL,
    is_accepted INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_answers_question_id ON answers(question_id);
CREATE INDEX idx_answers_author ON answers(author);
CREATE INDEX idx_answers_created_at ON answers(created_at);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_questions_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE questions"));
        assert!(first.contains("title"));
        assert!(first.contains("content"));
        assert!(first.contains("is_answered"));
    }

    #[test]
    fn test_answers_migration_contains_answers_table() {
        let answers_migration = MIGRATIONS[1];
        assert!(answers_migration.contains("CREATE TABLE answers"));
        assert!(answers_migration.contains("question_id"));
        assert!(answers_migration.contains("is_accepted"));
        assert!(answers_migration.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_migrations_are_valid_sql() {
        // Each migration should be non-empty and contain SQL keywords
        for migration in MIGRATIONS {
            assert!(!migration.trim().is_empty());
            assert!(
                migration.contains("CREATE TABLE")
                    || migration.contains("ALTER TABLE")
                    || migration.contains("CREATE INDEX")
            );
        }
    }
}
