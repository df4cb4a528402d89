//! Error types for bank loading, sampling, and session control.

use thiserror::Error;

use crate::quiz_engine::models::QuizState;

/// What is wrong with a single bank row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RowDefect {
    #[error("missing column `{0}`")]
    MissingField(&'static str),
    #[error("column `{0}` is empty")]
    EmptyField(&'static str),
    #[error("answer letter {0:?} is not one of A, B, C, D")]
    InvalidAnswerLetter(String),
    #[error("answer index {0} is past the last option")]
    AnswerIndexOutOfRange(usize),
    #[error("row has {found} cells but the header names {expected}")]
    ExtraFields { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: {defect}")]
pub struct MalformedRowError {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub defect: RowDefect,
}

/// The bank could not be built. Fatal: no session can start.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question source is unreachable: {0}")]
    Io(#[from] std::io::Error),
    #[error("question source is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("question source is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question source has no rows")]
    Empty,
    #[error(transparent)]
    MalformedRow(#[from] MalformedRowError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("requested {requested} questions but the bank only holds {available}")]
pub struct InsufficientPoolError {
    pub requested: usize,
    pub available: usize,
}

/// Misuse of the session API, or a session that could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot start a session of {requested} questions from a bank of {available}")]
    EmptyBank { requested: usize, available: usize },
    #[error("question {position} already has an answer")]
    AlreadyAnswered { position: usize },
    #[error("no active question (session is {state})")]
    NoActiveQuestion { state: QuizState },
    #[error("advance requires an answered question (session is {state})")]
    NotAwaitingNext { state: QuizState },
    #[error("option {index} is out of range for {option_count} options")]
    OptionOutOfRange { index: usize, option_count: usize },
    #[error("session is not completed (session is {state})")]
    NotCompleted { state: QuizState },
    #[error("question bank failed to load; no session can start")]
    BankUnavailable,
    #[error("question {question_id} has no option marked correct")]
    NoCorrectOption { question_id: usize },
}

impl From<InsufficientPoolError> for SessionError {
    fn from(e: InsufficientPoolError) -> Self {
        SessionError::EmptyBank { requested: e.requested, available: e.available }
    }
}
