//! Candidate deduplication and ranking.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::candidates::{Candidate, MIN_HEADING_CHARS};

/// Longest text still considered a heading.
pub const MAX_HEADING_CHARS: usize = 200;

/// Sort by confidence, highest first, keeping insertion order for ties.
pub fn rank_by_confidence(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
}

/// Rank candidates and keep the first occurrence of each normalized text.
///
/// Texts compare lowercased and trimmed; texts outside 3..=200 characters
/// are dropped. The result stays confidence-sorted.
pub fn deduplicate(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    rank_by_confidence(&mut candidates);

    let total = candidates.len();
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(total);

    for candidate in candidates {
        let key = candidate.text.to_lowercase().trim().to_string();
        let len = key.chars().count();
        if !(MIN_HEADING_CHARS..=MAX_HEADING_CHARS).contains(&len) {
            continue;
        }
        if !seen.insert(key) {
            continue;
        }
        unique.push(candidate);
    }

    log::debug!("Deduplicated {} candidates to {}", total, unique.len());
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_highest_confidence() {
        let candidates = vec![
            Candidate::pattern("Introduction", 1.0, 1),
            Candidate::font("introduction ", 2.0, 18.0, 1),
            Candidate::pattern("Scope", 1.5, 1),
        ];
        let unique = deduplicate(candidates);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].text, "introduction ");
        assert_eq!(unique[0].confidence, 2.0);
        assert_eq!(unique[1].text, "Scope");
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let candidates = vec![
            Candidate::font("Overview", 1.5, 14.0, 1),
            Candidate::pattern("OVERVIEW", 1.5, 1),
            Candidate::pattern("Other", 1.5, 1),
        ];
        let unique = deduplicate(candidates);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].font_size, Some(14.0));
        assert_eq!(unique[1].text, "Other");
    }

    #[test]
    fn test_length_bounds() {
        let long = "x".repeat(201);
        let max = "y".repeat(200);
        let candidates = vec![
            Candidate::pattern("ab", 1.0, 1),
            Candidate::pattern(long, 1.0, 1),
            Candidate::pattern(max.clone(), 1.0, 1),
        ];
        let unique = deduplicate(candidates);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].text, max);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let candidates = vec![
            Candidate::pattern("Alpha", 1.0, 1),
            Candidate::font("Beta", 2.5, 20.0, 2),
            Candidate::pattern("alpha", 1.5, 3),
            Candidate::pattern("Gamma", 1.0, 3),
        ];
        let once = deduplicate(candidates);
        let twice = deduplicate(once.clone());
        assert_eq!(once, twice);
    }
}
