//! Discussion board module for QBoard.
//!
//! Contains the question/answer models, derived-state rules,
//! authorization, validation, the pure query engine, and the
//! repositories and service that tie them to the store.

pub mod actor;
pub mod answer;
pub mod answer_repository;
pub mod model;
pub mod query;
pub mod question_repository;
pub mod service;
pub mod types;
pub mod validation;

pub use actor::{Actor, Authored, Role};
pub use answer::{Answer, AnswerUpdate, NewAnswer};
pub use answer_repository::AnswerRepository;
pub use query::QuestionFilter;
pub use question_repository::QuestionRepository;
pub use service::BoardService;
pub use types::{NewQuestion, Question, QuestionUpdate};
pub use validation::{MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
