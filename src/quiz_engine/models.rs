use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::RowDefect;

/// Number of questions drawn for one session unless configured otherwise.
pub const NUM_QUESTIONS: usize = 4;

/// Every question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Option letters
// ---------------------------------------------------------------------------

/// Label of an option slot. `A` is index 0, `D` is index 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; OPTION_COUNT] =
        [OptionLetter::A, OptionLetter::B, OptionLetter::C, OptionLetter::D];

    pub fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a single-letter designator. Surrounding whitespace is ignored;
    /// lowercase letters are not accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "A" => Some(OptionLetter::A),
            "B" => Some(OptionLetter::B),
            "C" => Some(OptionLetter::C),
            "D" => Some(OptionLetter::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Bank questions
// ---------------------------------------------------------------------------

/// One validated row of the question bank. Never mutated after load.
///
/// Only [`Question::new`] builds one, so `correct_option_index` always names
/// one of the four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: usize,
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_option_index: usize,
}

impl Question {
    pub fn new(
        id: usize,
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_option_index: usize,
    ) -> Result<Self, RowDefect> {
        if correct_option_index >= OPTION_COUNT {
            return Err(RowDefect::AnswerIndexOutOfRange(correct_option_index));
        }
        Ok(Question { id, prompt: prompt.into(), options, correct_option_index })
    }

    /// Position of the row in the source, starting at 0.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    pub fn correct_option_index(&self) -> usize {
        self.correct_option_index
    }

    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_option_index]
    }

    pub fn correct_letter(&self) -> OptionLetter {
        OptionLetter::ALL[self.correct_option_index]
    }
}

// ---------------------------------------------------------------------------
// Per-session views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffledOption {
    pub text: String,
    pub is_correct: bool,
}

/// A bank question with its options permuted for one session.
///
/// `correct_shuffled_index` is the position that now holds the text that was
/// correct in the bank. Exactly one option has `is_correct == true`; only the
/// option shuffler builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionQuestion {
    source_question_id: usize,
    prompt: String,
    shuffled_options: [ShuffledOption; OPTION_COUNT],
    correct_shuffled_index: usize,
}

impl SessionQuestion {
    pub(crate) fn new(
        source_question_id: usize,
        prompt: String,
        shuffled_options: [ShuffledOption; OPTION_COUNT],
        correct_shuffled_index: usize,
    ) -> Self {
        SessionQuestion { source_question_id, prompt, shuffled_options, correct_shuffled_index }
    }

    pub fn source_question_id(&self) -> usize {
        self.source_question_id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn shuffled_options(&self) -> &[ShuffledOption; OPTION_COUNT] {
        &self.shuffled_options
    }

    pub fn correct_shuffled_index(&self) -> usize {
        self.correct_shuffled_index
    }

    pub fn correct_letter(&self) -> OptionLetter {
        OptionLetter::ALL[self.correct_shuffled_index]
    }

    pub fn option_texts(&self) -> impl Iterator<Item = &str> {
        self.shuffled_options.iter().map(|o| o.text.as_str())
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_shuffled_index
    }
}

// ---------------------------------------------------------------------------
// Session state and results
// ---------------------------------------------------------------------------

/// Lifecycle of a [`QuizSession`](crate::quiz_engine::session::QuizSession).
///
/// `AwaitingNext` is the "answered, feedback shown" half of an in-progress
/// question; [`QuizState::is_active`] is true for both halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizState {
    NotStarted,
    InProgress,
    AwaitingNext,
    Completed,
    Error,
}

impl QuizState {
    pub fn is_active(self) -> bool {
        matches!(self, QuizState::InProgress | QuizState::AwaitingNext)
    }
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizState::NotStarted   => write!(f, "not started"),
            QuizState::InProgress   => write!(f, "in progress"),
            QuizState::AwaitingNext => write!(f, "awaiting next"),
            QuizState::Completed    => write!(f, "completed"),
            QuizState::Error        => write!(f, "error"),
        }
    }
}

/// Band the final score falls into; drives the result-screen animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultTier {
    Master,
    Excellent,
    Good,
    NeedsWork,
}

impl ResultTier {
    /// Classify from the unrounded score `correct / total * 100`.
    /// Integer comparison keeps 4/5 exactly at 80.
    pub fn classify(correct: usize, total: usize) -> Self {
        let scaled = correct * 100;
        if total == 0 {
            ResultTier::NeedsWork
        } else if scaled >= 100 * total {
            ResultTier::Master
        } else if scaled >= 80 * total {
            ResultTier::Excellent
        } else if scaled >= 60 * total {
            ResultTier::Good
        } else {
            ResultTier::NeedsWork
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            ResultTier::Master    => "Perfect! Programming master!",
            ResultTier::Excellent => "Excellent work, almost perfect!",
            ResultTier::Good      => "Good job, keep improving!",
            ResultTier::NeedsWork => "Don't give up, next time will be better!",
        }
    }
}

impl fmt::Display for ResultTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultTier::Master    => write!(f, "Master"),
            ResultTier::Excellent => write!(f, "Excellent"),
            ResultTier::Good      => write!(f, "Good"),
            ResultTier::NeedsWork => write!(f, "Needs Work"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub correct_count: usize,
    pub total: usize,
    /// `correct_count / total * 100`, rounded to the nearest integer.
    pub percentage: u32,
    pub tier: ResultTier,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub num_questions: usize,
    /// `Some` makes sampling and shuffling reproducible.
    pub rng_seed: Option<u64>,
    pub bank_path: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            num_questions: NUM_QUESTIONS,
            rng_seed: None,
            bank_path: PathBuf::from("questions.csv"),
        }
    }
}

impl QuizConfig {
    /// Config for the given bank with every other field at its default.
    pub fn new(bank_path: impl Into<PathBuf>) -> Self {
        QuizConfig { bank_path: bank_path.into(), ..Default::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_num_questions(mut self, n: usize) -> Self {
        self.num_questions = n;
        self
    }

    /// Parse a JSON object; missing keys fall back to [`QuizConfig::default`].
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
