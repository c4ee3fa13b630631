//! Word-overlap similarity (Jaccard index over normalized token sets).

use super::text::{normalize, token_set};

/// Jaccard index of the normalized token sets of `a` and `b`.
///
/// Returns 0.0 when either side has no tokens. Token order and repetition are
/// ignored, so the score is 1.0 exactly when both sides have the same word set.
pub fn similarity(a: &str, b: &str) -> f32 {
    let a = normalize(a);
    let b = normalize(b);
    let words_a = token_set(&a);
    let words_b = token_set(&b);

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_token_sets() {
        assert_eq!(similarity("track my order", "order my track"), 1.0);
        assert_eq!(similarity("order order", "order"), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {where, is, my, order} vs {track, order}: 1 shared of 5
        let score = similarity("where is my order", "track order");
        assert!((score - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_empty_sides_score_zero() {
        assert_eq!(similarity("", "anything"), 0.0);
        assert_eq!(similarity("anything", ""), 0.0);
        assert_eq!(similarity("!!!", "anything"), 0.0);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(similarity("refund", "shipping"), 0.0);
    }
}
