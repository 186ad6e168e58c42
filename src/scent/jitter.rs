use super::matcher::{MatchResult, MAX_SCORE};
use rand::Rng;

/// Nudges each score up by a random amount in `0..=max_offset`, capped at
/// the maximum score. Order and membership are left as they are.
pub fn apply_jitter<R: Rng + ?Sized>(results: &mut [MatchResult<'_>], rng: &mut R, max_offset: u8) {
    if max_offset == 0 {
        return;
    }
    for result in results.iter_mut() {
        let offset: u8 = rng.random_range(0..=max_offset);
        result.score = result.score.saturating_add(offset).min(MAX_SCORE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_utils::fragrance_with_notes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keeps_order_and_bounds() {
        let a = fragrance_with_notes("a", &["Rose"], &[], &[]);
        let b = fragrance_with_notes("b", &["Lemon"], &[], &[]);
        let mut results = vec![
            MatchResult {
                fragrance: &a,
                score: 97,
                matching_notes: vec![],
                reason: String::new(),
            },
            MatchResult {
                fragrance: &b,
                score: 40,
                matching_notes: vec![],
                reason: String::new(),
            },
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            apply_jitter(&mut results, &mut rng, 5);
        }
        assert_eq!(results[0].fragrance.id, "a");
        assert_eq!(results[0].score, MAX_SCORE);
        assert!(results[1].score >= 40 && results[1].score <= MAX_SCORE);
    }

    #[test]
    fn zero_offset_changes_nothing() {
        let a = fragrance_with_notes("a", &["Rose"], &[], &[]);
        let mut results = vec![MatchResult {
            fragrance: &a,
            score: 50,
            matching_notes: vec![],
            reason: String::new(),
        }];
        apply_jitter(&mut results, &mut rand::rng(), 0);
        assert_eq!(results[0].score, 50);
    }
}
