//! The question bank: loaded once, validated in full, then read-only.
//!
//! Sources are tabular with the columns
//! `question, optionA, optionB, optionC, optionD, answerLetter`.
//! CSV is the default format; a `.json` path is read as an array of objects
//! with the same keys. Loading is fail-fast: the first bad row aborts the
//! whole load so the bank never silently shrinks.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{LoadError, MalformedRowError, RowDefect},
    models::{OptionLetter, Question},
};

/// A row as it appears in the source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestionRow {
    pub question: Option<String>,
    #[serde(rename = "optionA")]
    pub option_a: Option<String>,
    #[serde(rename = "optionB")]
    pub option_b: Option<String>,
    #[serde(rename = "optionC")]
    pub option_c: Option<String>,
    #[serde(rename = "optionD")]
    pub option_d: Option<String>,
    #[serde(rename = "answerLetter")]
    pub answer_letter: Option<String>,
}

fn required(value: Option<String>, column: &'static str) -> Result<String, RowDefect> {
    let value = value.ok_or(RowDefect::MissingField(column))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RowDefect::EmptyField(column));
    }
    Ok(trimmed.to_string())
}

impl RawQuestionRow {
    /// Validate into a [`Question`] with the given id.
    pub fn validate(self, id: usize) -> Result<Question, RowDefect> {
        let prompt = required(self.question, "question")?;
        let options = [
            required(self.option_a, "optionA")?,
            required(self.option_b, "optionB")?,
            required(self.option_c, "optionC")?,
            required(self.option_d, "optionD")?,
        ];
        let letter_raw = self.answer_letter.ok_or(RowDefect::MissingField("answerLetter"))?;
        let letter = OptionLetter::parse(&letter_raw)
            .ok_or_else(|| RowDefect::InvalidAnswerLetter(letter_raw.trim().to_string()))?;

        Question::new(id, prompt, options, letter.index())
    }
}

/// Immutable, non-empty set of candidate questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load from a file. `.json` files are parsed as JSON, anything else as CSV.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let bank = if is_json {
            let raw = std::fs::read_to_string(path)?;
            Self::from_json_str(&raw)?
        } else {
            Self::from_csv_reader(File::open(path)?)?
        };
        tracing::info!("Loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Parse CSV with a header row. Cells are trimmed; short rows are
    /// reported as missing fields rather than as CSV errors, and rows with
    /// more cells than the header fail with [`RowDefect::ExtraFields`].
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);
        let columns = [
            column("question"),
            column("optionA"),
            column("optionB"),
            column("optionC"),
            column("optionD"),
            column("answerLetter"),
        ];

        let mut rows = Vec::new();
        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            // More cells than headers means an unquoted comma split a value.
            if record.len() > headers.len() {
                return Err(MalformedRowError {
                    row: row_idx + 1,
                    defect: RowDefect::ExtraFields { expected: headers.len(), found: record.len() },
                }
                .into());
            }
            // Absent and blank cells both read as missing.
            let cell = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            rows.push(RawQuestionRow {
                question: cell(columns[0]),
                option_a: cell(columns[1]),
                option_b: cell(columns[2]),
                option_c: cell(columns[3]),
                option_d: cell(columns[4]),
                answer_letter: cell(columns[5]),
            });
        }
        Self::from_rows(rows)
    }

    pub fn from_csv_str(raw: &str) -> Result<Self, LoadError> {
        Self::from_csv_reader(raw.as_bytes())
    }

    /// Parse a JSON array of row objects.
    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        let rows: Vec<RawQuestionRow> = serde_json::from_str(raw)?;
        Self::from_rows(rows)
    }

    /// Validate every row; the first malformed row fails the whole load.
    pub fn from_rows(rows: Vec<RawQuestionRow>) -> Result<Self, LoadError> {
        if rows.is_empty() {
            return Err(LoadError::Empty);
        }
        let questions = rows
            .into_iter()
            .enumerate()
            .map(|(id, row)| {
                row.validate(id)
                    .map_err(|defect| MalformedRowError { row: id + 1, defect })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QuestionBank { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: usize) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a bank built through this module's loaders.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
