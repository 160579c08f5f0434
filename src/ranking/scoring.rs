use std::collections::BTreeSet;

use crate::models::Candidate;

/// Weight applied to the duration band score
const DURATION_WEIGHT: f64 = 2.0;
/// Weight applied to the title keyword match count
const MATCH_WEIGHT: f64 = 0.7;
/// Keywords shorter than this never count toward the match score
const MIN_KEYWORD_LEN: usize = 4;

/// Parse an ISO 8601 duration token ("PT3M12S") into whole seconds.
/// Missing components count as 0; malformed or empty tokens parse to 0.
pub fn iso_duration_to_seconds(token: &str) -> u64 {
    let Some(rest) = token.strip_prefix("PT") else {
        return 0;
    };

    let mut total = 0u64;
    let mut digits = String::new();
    for ch in rest.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let Ok(value) = digits.parse::<u64>() else {
            return 0;
        };
        digits.clear();
        match ch {
            'H' => total += value * 3600,
            'M' => total += value * 60,
            'S' => total += value,
            _ => return 0,
        }
    }

    // Trailing digits without a unit designator
    if !digits.is_empty() {
        return 0;
    }
    total
}

/// Candidate scoring functionality
pub struct CandidateScoring;

impl CandidateScoring {
    /// Prefer normal song-length videos (2-6 min), penalize very long / very short
    pub fn duration_score(duration_seconds: u64) -> f64 {
        if (120..=360).contains(&duration_seconds) {
            1.0
        } else if (60..=600).contains(&duration_seconds) {
            0.6
        } else {
            0.2
        }
    }

    /// Count the mood keywords appearing in the lowercased title.
    /// Each keyword counts at most once, however often it repeats in the title.
    pub fn title_match_score(title: &str, vocabulary: &BTreeSet<String>) -> f64 {
        let title_lower = title.to_lowercase();
        vocabulary
            .iter()
            .filter(|word| word.len() >= MIN_KEYWORD_LEN && title_lower.contains(word.as_str()))
            .count() as f64
    }

    /// Log-scale popularity, with likes weighted below views
    pub fn popularity_score(view_count: u64, like_count: u64) -> f64 {
        (1.0 + view_count as f64).log10() + 0.3 * (1.0 + like_count as f64).log10()
    }

    /// Combined ranking score for one candidate
    pub fn calculate_score(candidate: &Candidate, vocabulary: &BTreeSet<String>) -> f64 {
        DURATION_WEIGHT * Self::duration_score(candidate.duration_seconds)
            + MATCH_WEIGHT * Self::title_match_score(&candidate.title, vocabulary)
            + Self::popularity_score(candidate.view_count, candidate.like_count)
    }
}
