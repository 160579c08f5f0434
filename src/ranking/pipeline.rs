use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;

use super::mood::Mood;
use super::scoring::CandidateScoring;
use super::selector::CandidateSelector;
use crate::client::VideoApi;
use crate::models::Candidate;

/// Search phrase used if a mood's phrase table were ever empty
const FALLBACK_PHRASE: &str = "music playlist";

/// Builds the ranked candidate pool for a mood: search, enrich, score, select
pub struct RankingPipeline;

impl RankingPipeline {
    pub fn build_ranked_pool(
        api: &impl VideoApi,
        mood: Mood,
        max_candidates: u32,
        rng: &mut impl Rng,
    ) -> Result<Vec<Candidate>> {
        let phrase = mood
            .search_phrases()
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_PHRASE);

        let mut candidates = api.search_videos(phrase, max_candidates)?;
        if candidates.is_empty() {
            return Err(anyhow::anyhow!(
                "No candidates found for mood '{mood}' (query: '{phrase}')"
            ));
        }

        let ids: Vec<String> = candidates.iter().map(|c| c.video_id.clone()).collect();
        let stats = api.fetch_stats(&ids)?;
        for candidate in &mut candidates {
            // Ids absent from the stats response keep all-zero stats
            let video_stats = stats.get(&candidate.video_id).copied().unwrap_or_default();
            candidate.duration_seconds = video_stats.duration_seconds;
            candidate.view_count = video_stats.view_count;
            candidate.like_count = video_stats.like_count;
        }

        let vocabulary = mood.keyword_vocabulary();
        for candidate in &mut candidates {
            candidate.score = Some(CandidateScoring::calculate_score(candidate, &vocabulary));
        }

        Ok(CandidateSelector::rank(candidates))
    }
}
