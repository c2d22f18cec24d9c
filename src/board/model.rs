//! Derived-state rules for questions and answers.
//!
//! These functions operate on in-memory entities only; persisting the
//! flags they change is the caller's job. They enforce the two board
//! invariants: at most one accepted answer per question, and the
//! answered flag following the accepted answers.
//!
//! Note: adding an answer marks the question answered regardless of
//! acceptance, while accept/un-accept derives the flag from accepted
//! answers only. Both behaviors are intentional (they match the
//! observed board behavior) even though the two notions of "answered"
//! differ.

use super::answer::Answer;
use super::types::Question;
use crate::{QBoardError, Result};

/// Derive the answered flag from a question's answers.
///
/// A question is answered iff at least one of its answers is accepted.
pub fn derive_answered(answers: &[Answer]) -> bool {
    answers.iter().any(|a| a.is_accepted)
}

/// Accept or un-accept an answer of the given question.
///
/// When accepting, any previously accepted answer is cleared first so
/// that at most one answer is accepted at a time, and the question
/// becomes answered. When un-accepting, the target is cleared and the
/// answered flag is recomputed from the remaining answers.
///
/// Fails with `NotFound` if `target_answer_id` does not belong to the
/// question.
pub fn set_accepted(
    question: &mut Question,
    answers: &mut [Answer],
    target_answer_id: i64,
    accept: bool,
) -> Result<()> {
    let target = answers
        .iter()
        .position(|a| a.id == target_answer_id && a.question_id == question.id)
        .ok_or_else(|| QBoardError::NotFound("answer".to_string()))?;

    if accept {
        for answer in answers.iter_mut() {
            answer.is_accepted = false;
        }
        answers[target].is_accepted = true;
        question.is_answered = true;
    } else {
        answers[target].is_accepted = false;
        question.is_answered = derive_answered(answers);
    }

    Ok(())
}

/// Record a newly created answer against its question.
///
/// Appends the answer and marks the question answered unconditionally;
/// a new reply counts as "answered" whether or not it is accepted.
pub fn record_new_answer(question: &mut Question, answers: &mut Vec<Answer>, answer: Answer) {
    answers.push(answer);
    question.is_answered = true;
}
