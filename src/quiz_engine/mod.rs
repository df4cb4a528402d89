//! Core quiz engine: bank loading, random selection, and the session state
//! machine.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: questions, option letters, session views, results, config |
//! | `error`    | Load, sampling, and session error types |
//! | `bank`     | CSV/JSON question bank with fail-fast row validation |
//! | `helpers`  | Fisher-Yates shuffle and score/progress arithmetic |
//! | `sampler`  | Uniform draw of N distinct questions from the bank |
//! | `shuffler` | Per-session option permutation with answer remapping |
//! | `session`  | `QuizSession` lifecycle: start, answer, advance, result |
//! | `runner`   | One-shot bank load and the Start/Quiz/Result/Error screen flow |

pub mod bank;
pub mod error;
pub mod helpers;
pub mod models;
pub mod runner;
pub mod sampler;
pub mod session;
pub mod shuffler;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSession` without reaching into sub-modules.
pub use bank::{QuestionBank, RawQuestionRow};
pub use error::{
    InsufficientPoolError, LoadError, MalformedRowError, RowDefect, SessionError,
};
pub use models::{
    OptionLetter, Question, QuizConfig, QuizResult, QuizState, ResultTier,
    SessionQuestion, ShuffledOption, NUM_QUESTIONS, OPTION_COUNT,
};
pub use runner::{QuizRunner, Screen};
pub use sampler::sample;
pub use session::QuizSession;
pub use shuffler::shuffle;
