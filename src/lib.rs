//! # quiz_drill_session
//!
//! The engine behind a single-player, multiple-choice quiz: a fixed question
//! bank, a random handful of questions per session, freshly shuffled options
//! for every question, and a running score.
//!
//! Rendering is somebody else's job. This crate holds the state a renderer
//! reads every frame and the two events it pushes back in: "option selected"
//! and "advance requested".
//!
//! ## How it works
//!
//! 1. Load a [`QuestionBank`] from a CSV file with the columns
//!    `question, optionA, optionB, optionC, optionD, answerLetter`. Any bad
//!    row fails the whole load.
//! 2. Start a [`QuizSession`]: the bank is Fisher-Yates shuffled (as a copy)
//!    and the first N questions are kept; each question's options are then
//!    shuffled and the answer's new position recorded.
//! 3. Feed selections with [`QuizSession::submit_answer`], move on with
//!    [`QuizSession::advance`], and read the final [`QuizResult`].
//!
//! [`QuizRunner`] wraps these steps in the Start → Quiz → Result screen flow,
//! and [`to_view_state`] turns the runner into a JSON snapshot for a renderer.
//!
//! ## Key features
//!
//! - **Deterministic**: every random choice goes through an injected
//!   `rand::Rng`; a seeded `StdRng` reproduces a session exactly.
//! - **No repeats**: a session never shows the same bank question twice.
//! - **Checked misuse**: answering twice, advancing early, or asking for a
//!   result mid-session returns a [`SessionError`] instead of corrupting state.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_drill_session::{QuestionBank, QuizSession, QuizState};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let bank = QuestionBank::from_csv_str(
//!     "question,optionA,optionB,optionC,optionD,answerLetter\n\
//!      Which keyword declares a function?,fn,def,func,lambda,A\n\
//!      Which type owns a growable string?,&str,String,char,Box<str>,B\n",
//! )?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = QuizSession::started(&bank, 2, &mut rng)?;
//!
//! while session.state() != QuizState::Completed {
//!     let q = session.current_question()?;
//!     println!("Q: {}", q.prompt());
//!     let answer = q.correct_shuffled_index();
//!     session.submit_answer(answer)?;
//!     session.advance()?;
//! }
//!
//! assert_eq!(session.result()?.percentage, 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod quiz_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `quiz_drill_session::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    sample, shuffle, InsufficientPoolError, LoadError, MalformedRowError, OptionLetter,
    Question, QuestionBank, QuizConfig, QuizResult, QuizRunner, QuizSession, QuizState,
    RawQuestionRow, ResultTier, RowDefect, Screen, SessionError, SessionQuestion,
    ShuffledOption, NUM_QUESTIONS, OPTION_COUNT,
};
pub use view_adapter::to_view_state;

#[cfg(test)]
mod tests;
