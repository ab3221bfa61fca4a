//! Relevance ranking and recommended-verse selection.
//!
//! Candidates are ordered by descending relevance weight and truncated to
//! the requested limit. The *recommended* verse is a uniform-random draw
//! from the returned top set, not the argmax: always surfacing the single
//! highest-weighted verse would show the same verse for every popular
//! emotion, so the draw deliberately rotates among the best candidates.
//! The randomness source is injected so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{VerseCandidate, VerseSelection};

/// Order candidates by descending relevance weight and keep the top `limit`.
///
/// Fewer candidates than `limit` returns them all. The sort is stable, so
/// equally weighted candidates keep their pool order.
pub fn select_verses(mut candidates: Vec<VerseCandidate>, limit: usize) -> Vec<VerseCandidate> {
    candidates.sort_by(|a, b| b.relevance_weight.cmp(&a.relevance_weight));
    candidates.truncate(limit);
    candidates
}

/// Rank a candidate pool and draw one recommended verse from the top set.
///
/// The returned [`VerseSelection`] holds the full ranked top set as
/// `alternatives` and a uniform-random member of it as `recommended`. An
/// empty pool (or a zero limit) yields `recommended: None` and no
/// alternatives; this is a valid outcome, never an error.
pub fn rank_and_select<R: Rng>(
    emotion: &str,
    candidates: Vec<VerseCandidate>,
    limit: usize,
    rng: &mut R,
) -> VerseSelection {
    if candidates.is_empty() {
        tracing::debug!(emotion = %emotion, "empty candidate pool");
        return VerseSelection {
            recommended: None,
            alternatives: Vec::new(),
        };
    }

    let alternatives = select_verses(candidates, limit);
    let recommended = alternatives.choose(rng).cloned();

    tracing::debug!(
        emotion = %emotion,
        alternatives = alternatives.len(),
        recommended = recommended.as_ref().map(|v| v.reference.as_str()).unwrap_or("none"),
        "verses selected"
    );

    VerseSelection {
        recommended,
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_verse(id: u64, weight: u8) -> VerseCandidate {
        VerseCandidate {
            id,
            text: format!("Texto do versículo {id}"),
            reference: format!("Salmos {id}:1"),
            relevance_weight: weight,
        }
    }

    #[test]
    fn ordered_by_descending_weight() {
        let selected = select_verses(
            vec![make_verse(1, 3), make_verse(2, 10), make_verse(3, 7)],
            10,
        );
        let weights: Vec<u8> = selected.iter().map(|v| v.relevance_weight).collect();
        assert_eq!(weights, vec![10, 7, 3]);
    }

    #[test]
    fn limit_truncates() {
        let selected = select_verses(
            vec![make_verse(1, 3), make_verse(2, 10), make_verse(3, 7)],
            2,
        );
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, 2);
        assert_eq!(selected[1].id, 3);
    }

    #[test]
    fn limit_above_pool_size_returns_all() {
        let selected = select_verses(vec![make_verse(1, 5), make_verse(2, 8)], 10);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, 2);
    }

    #[test]
    fn equal_weights_keep_pool_order() {
        let selected = select_verses(
            vec![make_verse(1, 10), make_verse(2, 10), make_verse(3, 10)],
            3,
        );
        let ids: Vec<u64> = selected.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_pool_yields_none_and_no_alternatives() {
        let mut rng = StdRng::seed_from_u64(1);
        let selection = rank_and_select("tristeza", vec![], 3, &mut rng);
        assert!(selection.recommended.is_none());
        assert!(selection.alternatives.is_empty());
    }

    #[test]
    fn zero_limit_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let selection = rank_and_select("tristeza", vec![make_verse(1, 10)], 0, &mut rng);
        assert!(selection.recommended.is_none());
        assert!(selection.alternatives.is_empty());
    }

    #[test]
    fn recommended_is_member_of_alternatives() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pool = vec![make_verse(1, 10), make_verse(2, 10), make_verse(3, 3)];
            let selection = rank_and_select("tristeza", pool, 2, &mut rng);
            let recommended = selection.recommended.expect("non-empty pool");
            assert!(selection.alternatives.contains(&recommended));
        }
    }

    #[test]
    fn draw_confined_to_top_set() {
        // Weights [10, 10, 3] with limit 2: the weight-3 verse is never
        // recommended, across many seeds.
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pool = vec![make_verse(1, 10), make_verse(2, 10), make_verse(3, 3)];
            let selection = rank_and_select("tristeza", pool, 2, &mut rng);
            let ids: Vec<u64> = selection.alternatives.iter().map(|v| v.id).collect();
            assert_eq!(ids, vec![1, 2]);
            let recommended = selection.recommended.expect("non-empty pool");
            assert_ne!(recommended.id, 3);
        }
    }

    #[test]
    fn seeded_draw_is_deterministic() {
        let pool = || (1..=5).map(|id| make_verse(id, 10)).collect::<Vec<_>>();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = rank_and_select("alegria", pool(), 5, &mut rng_a);
        let b = rank_and_select("alegria", pool(), 5, &mut rng_b);
        assert_eq!(
            a.recommended.expect("pool").id,
            b.recommended.expect("pool").id
        );
    }

    #[test]
    fn single_candidate_always_recommended() {
        let mut rng = StdRng::seed_from_u64(7);
        let selection = rank_and_select("medo", vec![make_verse(9, 4)], 3, &mut rng);
        assert_eq!(selection.recommended.expect("pool").id, 9);
        assert_eq!(selection.alternatives.len(), 1);
    }
}
