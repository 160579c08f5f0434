use std::collections::HashMap;

use anyhow::Result;
use ureq::Agent;
use urlencoding::encode;

use crate::config::Config;
use crate::models::{
    Candidate, PlaylistInsertResponse, SearchResponse, VideoStats, VideosResponse,
};
use crate::ranking::iso_duration_to_seconds;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// The video-platform operations the generator depends on
#[cfg_attr(test, mockall::automock)]
pub trait VideoApi {
    /// Search for video results matching a query, with strict content filtering
    fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<Candidate>>;

    /// Fetch duration and popularity stats for a batch of video ids
    fn fetch_stats(&self, video_ids: &[String]) -> Result<HashMap<String, VideoStats>>;

    /// Create an unlisted playlist container, returning its id
    fn create_playlist(&self, title: &str, description: &str) -> Result<String>;

    /// Add one video to a playlist
    fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()>;
}

/// YouTube Data API client using API-key reads and OAuth bearer writes
pub struct YouTubeClient {
    agent: Agent,
    api_key: String,
    access_token: String,
}

impl YouTubeClient {
    pub fn new(config: &Config) -> Self {
        YouTubeClient {
            agent: Agent::new(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
        }
    }

    fn bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl VideoApi for YouTubeClient {
    fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<Candidate>> {
        let url = format!(
            "{API_BASE}/search?part=snippet&q={}&type=video&maxResults={}&safeSearch=strict&key={}",
            encode(query),
            max_results,
            encode(&self.api_key)
        );

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| anyhow::anyhow!("Video search failed: {}", e))?;
        let response_text = response.into_string()?;

        let parsed: SearchResponse = serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse search response: {}", e))?;

        let candidates = parsed
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                // Skip results that are not playable videos
                let video_id = item.id.video_id?;
                let thumbnail_url = item
                    .snippet
                    .thumbnails
                    .and_then(|t| t.medium.or(t.high))
                    .map(|t| t.url);
                Some(Candidate {
                    video_id,
                    title: item.snippet.title,
                    channel: item.snippet.channel_title,
                    thumbnail_url,
                    duration_seconds: 0,
                    view_count: 0,
                    like_count: 0,
                    score: None,
                })
            })
            .collect();

        Ok(candidates)
    }

    fn fetch_stats(&self, video_ids: &[String]) -> Result<HashMap<String, VideoStats>> {
        let url = format!(
            "{API_BASE}/videos?part=contentDetails,statistics&id={}&key={}",
            encode(&video_ids.join(",")),
            encode(&self.api_key)
        );

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| anyhow::anyhow!("Video stats request failed: {}", e))?;
        let response_text = response.into_string()?;

        let parsed: VideosResponse = serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse stats response: {}", e))?;

        let mut stats_by_id = HashMap::new();
        for item in parsed.items.unwrap_or_default() {
            let duration_seconds = item
                .content_details
                .and_then(|d| d.duration)
                .map(|token| iso_duration_to_seconds(&token))
                .unwrap_or(0);
            let (view_count, like_count) = item
                .statistics
                .map(|s| (parse_count(s.view_count), parse_count(s.like_count)))
                .unwrap_or((0, 0));

            stats_by_id.insert(
                item.id,
                VideoStats {
                    duration_seconds,
                    view_count,
                    like_count,
                },
            );
        }

        Ok(stats_by_id)
    }

    fn create_playlist(&self, title: &str, description: &str) -> Result<String> {
        let url = format!("{API_BASE}/playlists?part=snippet,status");

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &self.bearer_header())
            .send_json(serde_json::json!({
                "snippet": {
                    "title": title,
                    "description": description,
                },
                "status": {
                    "privacyStatus": "unlisted",
                },
            }))
            .map_err(|e| anyhow::anyhow!("Playlist creation failed: {}", e))?;
        let response_text = response.into_string()?;

        let parsed: PlaylistInsertResponse = serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse playlist response: {}", e))?;

        Ok(parsed.id)
    }

    fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()> {
        let url = format!("{API_BASE}/playlistItems?part=snippet");

        self.agent
            .post(&url)
            .set("Authorization", &self.bearer_header())
            .send_json(serde_json::json!({
                "snippet": {
                    "playlistId": playlist_id,
                    "resourceId": {
                        "kind": "youtube#video",
                        "videoId": video_id,
                    },
                },
            }))
            .map_err(|e| anyhow::anyhow!("Failed to insert video {}: {}", video_id, e))?;

        Ok(())
    }
}

/// The API serializes counters as decimal strings; absent or malformed → 0
fn parse_count(raw: Option<String>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_defaults_to_zero() {
        assert_eq!(parse_count(Some("1234".to_string())), 1234);
        assert_eq!(parse_count(Some("not a number".to_string())), 0);
        assert_eq!(parse_count(Some("".to_string())), 0);
        assert_eq!(parse_count(None), 0);
    }
}
