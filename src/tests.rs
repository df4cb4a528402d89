//! Crate-level tests for `quiz_drill_session`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Shipped bank | `data/questions.csv` loads 30 well-formed questions |
//! | Determinism | Same seed → identical session; different seeds → varied sessions |
//! | Sampling | No repeats; full-bank draws; roughly uniform selection over many trials |
//! | Shuffling | Options stay a permutation; answer index remapped; layouts not reused |
//! | Session flow | End-to-end walk with mixed answers; score rounding; tiers |
//! | Contract errors | Repeat answers, early advance, result before completion |

use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use crate::quiz_engine::{
    sample, shuffle, OptionLetter, QuestionBank, QuizSession, QuizState, ResultTier,
    SessionError, SessionQuestion, NUM_QUESTIONS, OPTION_COUNT,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const SHIPPED_BANK: &str = include_str!("../data/questions.csv");

fn shipped_bank() -> QuestionBank {
    QuestionBank::from_csv_str(SHIPPED_BANK).expect("shipped bank must load")
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn wrong_index(q: &SessionQuestion) -> usize {
    (q.correct_shuffled_index() + 1) % OPTION_COUNT
}

/// Answer every question, correct where `pattern[i]` is true, and finish.
fn play(session: &mut QuizSession, pattern: &[bool]) {
    for &right in pattern {
        let q = session.current_question().expect("active question");
        let pick = if right { q.correct_shuffled_index() } else { wrong_index(q) };
        session.submit_answer(pick).expect("first answer is accepted");
        session.advance().expect("answered question can advance");
    }
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── shipped bank ─────────────────────────────────────────────────────────────

#[test]
fn shipped_bank_has_thirty_questions() {
    let bank = shipped_bank();
    assert_eq!(bank.len(), 30);
    for q in bank.questions() {
        assert!(!q.prompt().is_empty());
        assert!(q.correct_option_index() < OPTION_COUNT);
        assert!(q.options().iter().all(|o| !o.is_empty()), "empty option in {:?}", q.prompt());
    }
}

#[test]
fn shipped_bank_ids_follow_row_order() {
    let bank = shipped_bank();
    for (i, q) in bank.questions().iter().enumerate() {
        assert_eq!(q.id(), i);
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_session() {
    let bank = shipped_bank();
    for seed in SEEDS {
        let a = QuizSession::started(&bank, NUM_QUESTIONS, &mut rng(seed)).unwrap();
        let b = QuizSession::started(&bank, NUM_QUESTIONS, &mut rng(seed)).unwrap();
        assert_eq!(a.questions(), b.questions(), "session mismatch for seed={seed}");
    }
}

#[test]
fn different_seeds_produce_varied_sessions() {
    // Not a hard guarantee, but two 4-of-30 draws agree in order with
    // probability well under one in a hundred thousand.
    let bank = shipped_bank();
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = QuizSession::started(&bank, NUM_QUESTIONS, &mut rng(seed)).unwrap();
        let b = QuizSession::started(&bank, NUM_QUESTIONS, &mut rng(seed + 500)).unwrap();
        if a.questions() == b.questions() {
            same += 1;
        }
    }
    assert!(same < 2, "Too many identical sessions across seeds ({same}/{pairs})");
}

// ── sampling ─────────────────────────────────────────────────────────────────

#[test]
fn sessions_never_repeat_a_question() {
    let bank = shipped_bank();
    let mut r = rng(3);
    for _ in 0..200 {
        let s = QuizSession::started(&bank, NUM_QUESTIONS, &mut r).unwrap();
        let ids: HashSet<usize> = s.questions().iter().map(|q| q.source_question_id()).collect();
        assert_eq!(ids.len(), NUM_QUESTIONS);
    }
}

#[test]
fn sampling_is_roughly_uniform() {
    let bank = shipped_bank();
    let mut r = rng(77);
    let trials = 3000;
    let mut hits = vec![0usize; bank.len()];
    for _ in 0..trials {
        for q in sample(&bank, NUM_QUESTIONS, &mut r).unwrap() {
            hits[q.id()] += 1;
        }
    }
    // Expected 400 per question; the bounds sit about five standard deviations out.
    for (id, &h) in hits.iter().enumerate() {
        assert!((300..=500).contains(&h), "question {id} drawn {h} times in {trials} trials");
    }
}

#[test]
fn consecutive_samples_differ() {
    let bank = shipped_bank();
    let mut r = rng(5);
    let mut identical = 0;
    let mut prev: Vec<usize> = sample(&bank, NUM_QUESTIONS, &mut r)
        .unwrap()
        .iter()
        .map(|q| q.id())
        .collect();
    for _ in 0..100 {
        let next: Vec<usize> = sample(&bank, NUM_QUESTIONS, &mut r)
            .unwrap()
            .iter()
            .map(|q| q.id())
            .collect();
        if next == prev {
            identical += 1;
        }
        prev = next;
    }
    assert!(identical < 3, "{identical} back-to-back identical draws");
}

#[test]
fn whole_bank_session_uses_every_question_once() {
    let bank = shipped_bank();
    let s = QuizSession::started(&bank, bank.len(), &mut rng(9)).unwrap();
    let ids: HashSet<usize> = s.questions().iter().map(|q| q.source_question_id()).collect();
    assert_eq!(ids, (0..bank.len()).collect::<HashSet<_>>());
}

// ── shuffling ────────────────────────────────────────────────────────────────

#[test]
fn session_options_match_bank_options() {
    let bank = shipped_bank();
    for seed in SEEDS {
        let s = QuizSession::started(&bank, NUM_QUESTIONS, &mut rng(seed)).unwrap();
        for sq in s.questions() {
            let source = bank.get(sq.source_question_id()).unwrap();
            let mut got: Vec<&str> = sq.option_texts().collect();
            let mut want: Vec<&str> = source.options().iter().map(String::as_str).collect();
            got.sort_unstable();
            want.sort_unstable();
            assert_eq!(got, want);
            assert_eq!(sq.shuffled_options()[sq.correct_shuffled_index()].text, source.correct_text());
            assert_eq!(sq.prompt(), source.prompt());
        }
    }
}

#[test]
fn correct_position_is_spread_evenly() {
    let bank = shipped_bank();
    let q = &bank.questions()[0];
    let mut r = rng(31);
    let mut slots = [0usize; OPTION_COUNT];
    for _ in 0..4000 {
        slots[shuffle(q, &mut r).unwrap().correct_shuffled_index()] += 1;
    }
    for (i, &n) in slots.iter().enumerate() {
        assert!((850..=1150).contains(&n), "slot {i} held the answer {n} times");
    }
}

#[test]
fn layouts_are_redrawn_every_session() {
    let bank = shipped_bank();
    let mut r = rng(13);
    let a = QuizSession::started(&bank, bank.len(), &mut r).unwrap();
    let b = QuizSession::started(&bank, bank.len(), &mut r).unwrap();
    let layout = |s: &QuizSession, id: usize| {
        s.questions()
            .iter()
            .find(|q| q.source_question_id() == id)
            .map(|q| q.shuffled_options().clone())
            .unwrap()
    };
    let differing = (0..bank.len()).filter(|&id| layout(&a, id) != layout(&b, id)).count();
    // Each layout repeats with probability 1/24.
    assert!(differing > bank.len() / 2, "only {differing} layouts changed");
}

// ── session flow ─────────────────────────────────────────────────────────────

#[test]
fn end_to_end_mixed_answers() {
    let bank = shipped_bank();
    let mut s = QuizSession::new();
    s.start(&bank, NUM_QUESTIONS, &mut rng(2024)).unwrap();
    assert_eq!(s.state(), QuizState::InProgress);
    assert_eq!(s.current_index(), 0);

    let q1 = s.current_question().unwrap().correct_shuffled_index();
    assert_eq!(s.submit_answer(q1), Ok(true));
    assert_eq!(s.correct_count(), 1);
    assert_eq!(s.state(), QuizState::AwaitingNext);

    assert_eq!(s.advance(), Ok(QuizState::InProgress));
    assert_eq!(s.current_index(), 1);

    let q2 = wrong_index(s.current_question().unwrap());
    assert_eq!(s.submit_answer(q2), Ok(false));
    assert_eq!(s.correct_count(), 1);
    s.advance().unwrap();

    for _ in 2..NUM_QUESTIONS {
        let right = s.current_question().unwrap().correct_shuffled_index();
        s.submit_answer(right).unwrap();
        s.advance().unwrap();
    }

    assert_eq!(s.state(), QuizState::Completed);
    let result = s.result().unwrap();
    assert_eq!(result.correct_count, 3);
    assert_eq!(result.total, 4);
    assert_eq!(result.percentage, 75);
    assert_eq!(result.tier, ResultTier::Good);
    assert!(s.answers().iter().all(Option::is_some));
}

#[test]
fn perfect_run_scores_one_hundred() {
    let bank = shipped_bank();
    let mut s = QuizSession::started(&bank, NUM_QUESTIONS, &mut rng(1)).unwrap();
    play(&mut s, &[true; NUM_QUESTIONS]);
    let result = s.result().unwrap();
    assert_eq!(result.percentage, 100);
    assert_eq!(result.tier, ResultTier::Master);
}

#[test]
fn scores_round_to_nearest_integer() {
    let bank = shipped_bank();
    let cases: [(&[bool], u32, ResultTier); 4] = [
        (&[true, false, false], 33, ResultTier::NeedsWork),
        (&[true, true, false], 67, ResultTier::Good),
        (&[false, false, false], 0, ResultTier::NeedsWork),
        (&[true, true, true, true, false], 80, ResultTier::Excellent),
    ];
    for (pattern, pct, tier) in cases {
        let mut s = QuizSession::started(&bank, pattern.len(), &mut rng(8)).unwrap();
        play(&mut s, pattern);
        let result = s.result().unwrap();
        assert_eq!(result.percentage, pct, "pattern {pattern:?}");
        assert_eq!(result.tier, tier, "pattern {pattern:?}");
    }
}

#[test]
fn recorded_letters_match_the_picks() {
    let bank = shipped_bank();
    let mut s = QuizSession::started(&bank, 2, &mut rng(4)).unwrap();
    s.submit_answer(3).unwrap();
    s.advance().unwrap();
    s.submit_answer(0).unwrap();
    s.advance().unwrap();
    assert_eq!(s.answer_letters(), vec![Some(OptionLetter::D), Some(OptionLetter::A)]);
}

// ── contract errors ──────────────────────────────────────────────────────────

#[test]
fn second_answer_is_rejected_without_side_effects() {
    let bank = shipped_bank();
    let mut s = QuizSession::started(&bank, NUM_QUESTIONS, &mut rng(6)).unwrap();
    let wrong = wrong_index(s.current_question().unwrap());
    s.submit_answer(wrong).unwrap();

    let right = s.current_question().unwrap().correct_shuffled_index();
    assert_eq!(s.submit_answer(right), Err(SessionError::AlreadyAnswered { position: 0 }));
    assert_eq!(s.correct_count(), 0);
    assert_eq!(s.answers()[0], Some(wrong));
}

#[test]
fn completed_session_rejects_further_input() {
    let bank = shipped_bank();
    let mut s = QuizSession::started(&bank, 1, &mut rng(6)).unwrap();
    assert!(matches!(s.result(), Err(SessionError::NotCompleted { state: QuizState::InProgress })));
    play(&mut s, &[true]);

    assert_eq!(
        s.submit_answer(0),
        Err(SessionError::NoActiveQuestion { state: QuizState::Completed })
    );
    assert_eq!(
        s.advance(),
        Err(SessionError::NotAwaitingNext { state: QuizState::Completed })
    );
    assert!(s.current_question().is_err());
    assert_eq!(s.result().unwrap().correct_count, 1);
}
