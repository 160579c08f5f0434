use std::collections::HashSet;

use crate::models::Candidate;

/// Maximum number of candidates kept in a ranked pool
pub const RANKED_POOL_SIZE: usize = 15;

/// Final ordering and deduplication of scored candidates
pub struct CandidateSelector;

impl CandidateSelector {
    /// Stable-sort by score descending, drop duplicate video ids keeping the
    /// first (highest-scored) occurrence, and cap the pool size.
    /// Ties keep their fetch order because the sort is stable.
    pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.sort_by(|a, b| {
            let score_a = a.score.unwrap_or(0.0);
            let score_b = b.score.unwrap_or(0.0);
            score_b
                .partial_cmp(&score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut seen = HashSet::new();
        let mut top = Vec::new();
        for candidate in candidates {
            if !seen.insert(candidate.video_id.clone()) {
                continue;
            }
            top.push(candidate);
            if top.len() >= RANKED_POOL_SIZE {
                break;
            }
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: &str, score: f64) -> Candidate {
        Candidate {
            video_id: id.to_string(),
            title: format!("Video {id}"),
            channel: "Test Channel".to_string(),
            thumbnail_url: None,
            duration_seconds: 200,
            view_count: 0,
            like_count: 0,
            score: Some(score),
        }
    }

    #[test]
    fn test_sorts_by_score_descending() {
        let ranked = CandidateSelector::rank(vec![
            scored("a", 1.0),
            scored("b", 3.0),
            scored("c", 2.0),
        ]);
        let ids: Vec<_> = ranked.iter().map(|c| c.video_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_removes_duplicate_ids_keeping_highest() {
        let ranked = CandidateSelector::rank(vec![
            scored("a", 1.0),
            scored("b", 5.0),
            scored("a", 4.0),
        ]);
        let ids: Vec<_> = ranked.iter().map(|c| c.video_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(ranked[1].score, Some(4.0));
    }

    #[test]
    fn test_truncates_to_pool_size() {
        let candidates: Vec<_> = (0..30).map(|i| scored(&format!("v{i}"), i as f64)).collect();
        let ranked = CandidateSelector::rank(candidates);
        assert_eq!(ranked.len(), RANKED_POOL_SIZE);
        assert_eq!(ranked[0].video_id, "v29");
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let ranked = CandidateSelector::rank(vec![
            scored("first", 2.0),
            scored("second", 2.0),
            scored("third", 2.0),
        ]);
        let ids: Vec<_> = ranked.iter().map(|c| c.video_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input_yields_empty_pool() {
        assert!(CandidateSelector::rank(Vec::new()).is_empty());
    }
}
