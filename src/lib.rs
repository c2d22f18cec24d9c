//! QBoard - Question & Answer Discussion Board core
//!
//! A library implementing the state and permission model of a Q&A
//! discussion board: role-gated CRUD for questions and answers, the
//! accepted-answer workflow, and keyword search/filtering over the
//! question list. Presentation is left to the caller.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;

pub use board::{
    Actor, Answer, AnswerRepository, AnswerUpdate, Authored, BoardService, NewAnswer, NewQuestion,
    Question, QuestionFilter, QuestionRepository, QuestionUpdate, Role, MAX_CONTENT_LENGTH,
    MAX_TITLE_LENGTH,
};
pub use config::Config;
pub use db::Database;
pub use error::{QBoardError, Result};
