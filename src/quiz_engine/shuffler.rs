//! Per-session option shuffling.
//!
//! A bank question keeps its options in source order; every session gets a
//! fresh permutation of them, and the answer's new slot is found by scanning
//! the permuted options for the one flagged correct.

use rand::Rng;

use crate::quiz_engine::{
    error::SessionError,
    helpers::fisher_yates,
    models::{Question, SessionQuestion, ShuffledOption, OPTION_COUNT},
};

/// Permute a question's options and recompute where the answer landed.
///
/// Each call builds a fresh [`SessionQuestion`]; nothing is cached, so the
/// same bank question gets a new layout every session it appears in.
/// Fails with [`SessionError::NoCorrectOption`] if no option is flagged
/// correct after the shuffle.
pub fn shuffle<R: Rng + ?Sized>(
    question: &Question,
    rng: &mut R,
) -> Result<SessionQuestion, SessionError> {
    let correct = question.correct_option_index();
    let mut pairs: [ShuffledOption; OPTION_COUNT] = std::array::from_fn(|i| ShuffledOption {
        text: question.options()[i].clone(),
        is_correct: i == correct,
    });
    fisher_yates(&mut pairs, rng);

    let correct_shuffled_index = pairs
        .iter()
        .position(|p| p.is_correct)
        .ok_or(SessionError::NoCorrectOption { question_id: question.id() })?;

    Ok(SessionQuestion::new(
        question.id(),
        question.prompt().to_string(),
        pairs,
        correct_shuffled_index,
    ))
}
