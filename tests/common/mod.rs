//! Shared helpers for integration tests.

use qboard::{Actor, BoardService, Database, Question};

/// Open a fresh in-memory database with migrations applied.
pub async fn test_db() -> Database {
    Database::connect_in_memory()
        .await
        .expect("failed to open in-memory database")
}

/// A regular member actor.
pub fn member(name: &str) -> Actor {
    Actor::member(name)
}

/// The admin actor used across tests.
pub fn admin() -> Actor {
    Actor::admin("root")
}

/// Create a question through the service and return it.
pub async fn seed_question(
    db: &Database,
    author: &str,
    title: &str,
    content: &str,
) -> Question {
    BoardService::new(db)
        .create_question(&member(author), title, content, None)
        .await
        .expect("failed to seed question")
}
