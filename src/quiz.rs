//! Quiz question selection.
//!
//! The server holds no quiz state: the caller supplies the ids it has
//! already been served and gets back one question it has not seen, drawn
//! uniformly from what remains. Exhaustion is a value (`None`), not an
//! error, since running out of questions is how a game ends.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::QuestionRecord;

/// Draw one not-yet-seen question uniformly at random from `pool`.
///
/// `pool` is the full candidate set for the round (already restricted to the
/// active category by the query layer). Every question whose id is absent
/// from `previous` has equal probability `1/|eligible|` of being returned.
pub fn draw<'a, R: Rng>(
    pool: &'a [QuestionRecord],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a QuestionRecord> {
    let eligible: Vec<&QuestionRecord> = pool
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    eligible.choose(rng).copied()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> QuestionRecord {
        QuestionRecord {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn never_returns_a_previously_seen_question() {
        let pool: Vec<_> = (1..=20).map(|id| question(id, 1)).collect();
        let previous: Vec<i64> = (1..=10).collect();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = draw(&pool, &previous, &mut rng).expect("pool not exhausted");
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(draw(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn fully_seen_pool_is_exhausted() {
        let pool = vec![question(10, 1), question(11, 1), question(12, 1)];
        let mut rng = StdRng::seed_from_u64(7);
        assert!(draw(&pool, &[10, 11, 12], &mut rng).is_none());
    }

    #[test]
    fn single_eligible_question_is_always_drawn() {
        let pool = vec![question(10, 1), question(11, 1)];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = draw(&pool, &[10], &mut rng).unwrap();
            assert_eq!(picked.id, 11);
        }
    }

    #[test]
    fn every_eligible_question_is_reachable() {
        let pool: Vec<_> = (1..=5).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(draw(&pool, &[], &mut rng).unwrap().id);
        }
        assert_eq!(seen.len(), 5);
    }
}
