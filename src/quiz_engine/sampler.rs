//! Uniform selection of a session's questions.
//!
//! The bank is shuffled as a copy and the first `n` questions are kept, so a
//! session never repeats a question and every `n`-subset is equally likely.

use rand::Rng;

use crate::quiz_engine::{
    bank::QuestionBank,
    error::InsufficientPoolError,
    helpers::shuffled_copy,
    models::Question,
};

/// Draw `n` distinct questions, uniformly over all `n`-subsets of the bank.
///
/// The whole bank is copied and Fisher-Yates shuffled, then the first `n`
/// are kept, so the draw order is random too. The bank itself is untouched.
pub fn sample<'a, R: Rng + ?Sized>(
    bank: &'a QuestionBank,
    n: usize,
    rng: &mut R,
) -> Result<Vec<&'a Question>, InsufficientPoolError> {
    let available = bank.len();
    if n > available {
        return Err(InsufficientPoolError { requested: n, available });
    }

    let pool: Vec<&Question> = bank.questions().iter().collect();
    let mut drawn = shuffled_copy(&pool, rng);
    drawn.truncate(n);
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::bank::RawQuestionRow;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn bank(size: usize) -> QuestionBank {
        let rows = (0..size)
            .map(|i| RawQuestionRow {
                question: Some(format!("Question {i}")),
                option_a: Some("a".into()),
                option_b: Some("b".into()),
                option_c: Some("c".into()),
                option_d: Some("d".into()),
                answer_letter: Some("A".into()),
            })
            .collect();
        QuestionBank::from_rows(rows).unwrap()
    }

    #[test]
    fn draws_exactly_n_distinct_questions() {
        let bank = bank(30);
        let mut rng = StdRng::seed_from_u64(5);
        for n in [0, 1, 4, 29] {
            let drawn = sample(&bank, n, &mut rng).unwrap();
            assert_eq!(drawn.len(), n);
            let ids: HashSet<usize> = drawn.iter().map(|q| q.id()).collect();
            assert_eq!(ids.len(), n, "duplicate question drawn for n={n}");
            assert!(drawn.iter().all(|q| bank.get(q.id()) == Some(*q)));
        }
    }

    #[test]
    fn full_draw_returns_whole_bank() {
        let bank = bank(10);
        let mut rng = StdRng::seed_from_u64(11);
        let drawn = sample(&bank, 10, &mut rng).unwrap();
        let ids: HashSet<usize> = drawn.iter().map(|q| q.id()).collect();
        assert_eq!(ids, (0..10).collect::<HashSet<_>>());
    }

    #[test]
    fn oversized_request_is_rejected() {
        let bank = bank(3);
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample(&bank, 4, &mut rng).unwrap_err();
        assert_eq!(err, InsufficientPoolError { requested: 4, available: 3 });
    }

    #[test]
    fn bank_is_not_mutated() {
        let bank = bank(12);
        let before = bank.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = sample(&bank, 12, &mut rng).unwrap();
        assert_eq!(bank, before);
    }
}
