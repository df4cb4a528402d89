//! The quiz session state machine.
//!
//! ```text
//! NotStarted --start--> InProgress --submit_answer--> AwaitingNext
//!                           ^                              |
//!                           +-------advance (not last)-----+
//!                                                          |
//!                                   advance (last) --> Completed
//! start failure --> Error
//! ```
//!
//! Calling [`QuizSession::start`] again from any state discards the current
//! run and draws a new one.

use rand::Rng;

use crate::quiz_engine::{
    bank::QuestionBank,
    error::SessionError,
    helpers::{percentage, progress_fraction},
    models::{OptionLetter, QuizResult, QuizState, ResultTier, SessionQuestion, OPTION_COUNT},
    sampler, shuffler,
};

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<SessionQuestion>,
    current_index: usize,
    /// Selected option per position, `None` until answered.
    answers: Vec<Option<usize>>,
    correct_count: usize,
    state: QuizState,
    failure: Option<SessionError>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            questions: Vec::new(),
            current_index: 0,
            answers: Vec::new(),
            correct_count: 0,
            state: QuizState::NotStarted,
            failure: None,
        }
    }

    /// Build a session and start it in one step.
    pub fn started<R: Rng + ?Sized>(
        bank: &QuestionBank,
        n: usize,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new();
        session.start(bank, n, rng)?;
        Ok(session)
    }

    /// Draw `n` questions, shuffle their options, and reset all counters.
    ///
    /// Fails with [`SessionError::EmptyBank`] when `n` is zero or larger than
    /// the bank; the session is then left in [`QuizState::Error`].
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        bank: &QuestionBank,
        n: usize,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        *self = Self::new();

        let drawn = if n == 0 {
            Err(SessionError::EmptyBank { requested: n, available: bank.len() })
        } else {
            sampler::sample(bank, n, rng).map_err(SessionError::from)
        };
        let questions = drawn.and_then(|drawn| {
            drawn
                .into_iter()
                .map(|q| shuffler::shuffle(q, rng))
                .collect::<Result<Vec<_>, _>>()
        });
        let questions = match questions {
            Ok(q) => q,
            Err(e) => {
                tracing::error!("Cannot start quiz session: {}", e);
                *self = QuizSession::new();
                self.state = QuizState::Error;
                self.failure = Some(e.clone());
                return Err(e);
            }
        };

        self.questions = questions;
        self.answers = vec![None; self.questions.len()];
        self.state = QuizState::InProgress;
        tracing::info!(
            "Started quiz session with {} of {} questions",
            self.questions.len(),
            bank.len()
        );
        Ok(())
    }

    /// Record the selection for the current question.
    ///
    /// Returns whether the selection was correct. A second submission for the
    /// same question fails with [`SessionError::AlreadyAnswered`] and leaves
    /// the recorded answer and the score unchanged.
    pub fn submit_answer(&mut self, option_index: usize) -> Result<bool, SessionError> {
        match self.state {
            QuizState::InProgress => {}
            QuizState::AwaitingNext => {
                tracing::warn!("Ignoring repeat answer for question {}", self.current_index);
                return Err(SessionError::AlreadyAnswered { position: self.current_index });
            }
            state => return Err(SessionError::NoActiveQuestion { state }),
        }
        if option_index >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange {
                index: option_index,
                option_count: OPTION_COUNT,
            });
        }
        if self.answers[self.current_index].is_some() {
            return Err(SessionError::AlreadyAnswered { position: self.current_index });
        }

        let correct = self.questions[self.current_index].is_correct(option_index);
        self.answers[self.current_index] = Some(option_index);
        if correct {
            self.correct_count += 1;
        }
        self.state = QuizState::AwaitingNext;
        tracing::debug!(
            "Question {} answered with {} ({})",
            self.current_index,
            option_index,
            if correct { "correct" } else { "wrong" }
        );
        Ok(correct)
    }

    /// Move past an answered question. Returns the state entered.
    pub fn advance(&mut self) -> Result<QuizState, SessionError> {
        if self.state != QuizState::AwaitingNext {
            tracing::warn!("Advance requested while session is {}", self.state);
            return Err(SessionError::NotAwaitingNext { state: self.state });
        }

        if self.current_index + 1 >= self.questions.len() {
            self.state = QuizState::Completed;
            tracing::info!(
                "Quiz session completed: {}/{} correct ({}%)",
                self.correct_count,
                self.questions.len(),
                percentage(self.correct_count, self.questions.len())
            );
        } else {
            self.current_index += 1;
            self.state = QuizState::InProgress;
            tracing::debug!("Advanced to question {}", self.current_index);
        }
        Ok(self.state)
    }

    pub fn current_question(&self) -> Result<&SessionQuestion, SessionError> {
        if !self.state.is_active() {
            return Err(SessionError::NoActiveQuestion { state: self.state });
        }
        self.questions
            .get(self.current_index)
            .ok_or(SessionError::NoActiveQuestion { state: self.state })
    }

    pub fn result(&self) -> Result<QuizResult, SessionError> {
        if self.state != QuizState::Completed {
            return Err(SessionError::NotCompleted { state: self.state });
        }
        let total = self.questions.len();
        Ok(QuizResult {
            correct_count: self.correct_count,
            total,
            percentage: percentage(self.correct_count, total),
            tier: ResultTier::classify(self.correct_count, total),
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// The error that put the session into [`QuizState::Error`], if any.
    pub fn failure(&self) -> Option<&SessionError> {
        self.failure.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Recorded answers as shuffled option letters.
    pub fn answer_letters(&self) -> Vec<Option<OptionLetter>> {
        self.answers
            .iter()
            .map(|a| a.and_then(OptionLetter::from_index))
            .collect()
    }

    /// Selection made for the current question while awaiting advance.
    pub fn last_selection(&self) -> Option<usize> {
        if self.state != QuizState::AwaitingNext {
            return None;
        }
        self.answers.get(self.current_index).copied().flatten()
    }

    pub fn last_answer_correct(&self) -> Option<bool> {
        let selected = self.last_selection()?;
        Some(self.questions[self.current_index].is_correct(selected))
    }

    /// `(question number starting at 1, total)`; `(0, 0)` before a
    /// successful start.
    pub fn progress(&self) -> (usize, usize) {
        if self.questions.is_empty() {
            return (0, 0);
        }
        (self.current_index + 1, self.questions.len())
    }

    pub fn progress_fraction(&self) -> f32 {
        progress_fraction(self.current_index, self.questions.len())
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 == self.questions.len()
    }
}
