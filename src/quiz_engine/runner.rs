//! Screen-level flow around one [`QuizSession`].
//!
//! The runner owns the bank (loaded exactly once), the RNG, and the single
//! live session. A renderer reads [`QuizRunner::screen`] every tick and
//! forwards clicks as [`QuizRunner::begin`], [`QuizRunner::select`],
//! [`QuizRunner::next`], and [`QuizRunner::restart`].

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    bank::QuestionBank,
    error::{LoadError, SessionError},
    models::{QuizConfig, QuizResult, QuizState},
    session::QuizSession,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Quiz,
    Result,
    Error,
}

#[derive(Debug)]
enum BankGate {
    Ready(QuestionBank),
    Failed(LoadError),
}

#[derive(Debug)]
pub struct QuizRunner {
    gate: BankGate,
    session: QuizSession,
    screen: Screen,
    num_questions: usize,
    rng: StdRng,
    error_message: Option<String>,
}

impl QuizRunner {
    /// Load the bank named by `config`. A load failure does not return an
    /// error: the runner starts on the permanent [`Screen::Error`].
    pub fn initialize(config: &QuizConfig) -> Self {
        let loaded = QuestionBank::load(&config.bank_path);
        Self::from_load_result(loaded, config)
    }

    /// Build a runner around an already loaded bank.
    pub fn with_bank(bank: QuestionBank, config: &QuizConfig) -> Self {
        Self::from_load_result(Ok(bank), config)
    }

    fn from_load_result(loaded: Result<QuestionBank, LoadError>, config: &QuizConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let (gate, screen, error_message) = match loaded {
            Ok(bank) => (BankGate::Ready(bank), Screen::Start, None),
            Err(e) => {
                tracing::error!("Question bank unavailable: {}", e);
                let message = e.to_string();
                (BankGate::Failed(e), Screen::Error, Some(message))
            }
        };
        QuizRunner {
            gate,
            session: QuizSession::new(),
            screen,
            num_questions: config.num_questions,
            rng,
            error_message,
        }
    }

    /// Start a fresh session: new sample, new option layouts. Any session in
    /// progress is discarded.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        let bank = match &self.gate {
            BankGate::Ready(bank) => bank,
            BankGate::Failed(_) => return Err(SessionError::BankUnavailable),
        };
        match self.session.start(bank, self.num_questions, &mut self.rng) {
            Ok(()) => {
                self.screen = Screen::Quiz;
                Ok(())
            }
            Err(e) => {
                self.screen = Screen::Error;
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Answer the current question. Returns whether it was correct.
    pub fn select(&mut self, option_index: usize) -> Result<bool, SessionError> {
        self.session.submit_answer(option_index)
    }

    /// Advance past the answered question; the last one leads to the result.
    pub fn next(&mut self) -> Result<QuizState, SessionError> {
        let state = self.session.advance()?;
        if state == QuizState::Completed {
            self.screen = Screen::Result;
        }
        Ok(state)
    }

    /// Leave the result screen. The following [`QuizRunner::begin`] draws a
    /// new session. Ignored on any other screen.
    pub fn restart(&mut self) {
        if self.screen == Screen::Result {
            self.session = QuizSession::new();
            self.screen = Screen::Start;
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn bank(&self) -> Option<&QuestionBank> {
        match &self.gate {
            BankGate::Ready(bank) => Some(bank),
            BankGate::Failed(_) => None,
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.gate {
            BankGate::Ready(_) => None,
            BankGate::Failed(e) => Some(e),
        }
    }

    /// Message for the error screen.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn num_questions(&self) -> usize {
        self.num_questions
    }

    pub fn result(&self) -> Result<QuizResult, SessionError> {
        self.session.result()
    }
}
