use serde::{Deserialize, Serialize};

use crate::ranking::Mood;

/// One video search result, enriched with stats before ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: u64,
    pub view_count: u64,
    pub like_count: u64,
    pub score: Option<f64>, // attached by the scorer, absent until then
}

/// Duration and popularity stats for one video id
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoStats {
    pub duration_seconds: u64,
    pub view_count: u64,
    pub like_count: u64,
}

/// The reduced candidate projection that ends up in a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub thumbnail_url: Option<String>,
}

impl PlaylistItem {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        PlaylistItem {
            video_id: candidate.video_id.clone(),
            title: candidate.title.clone(),
            channel: candidate.channel.clone(),
            thumbnail_url: candidate.thumbnail_url.clone(),
        }
    }
}

/// A playlist that was materialized on the video platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlaylist {
    pub playlist_id: String,
    pub mood: Mood,
    pub items: Vec<PlaylistItem>,
}

/// Outcome of one generation request
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub playlist: GeneratedPlaylist,
    pub reused: bool,
}

/// Response structure for the YouTube search API call
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: SearchSnippet,
}

/// Search results can reference channels or playlists, so videoId is optional
#[derive(Debug, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Response structure for the YouTube videos API call (stats + duration)
#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    pub items: Option<Vec<VideoItem>>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ContentDetails>,
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    pub duration: Option<String>, // ISO 8601 token, e.g. "PT3M12S"
}

/// The API serializes counters as decimal strings
#[derive(Debug, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
}

/// Response structure for the playlists.insert API call
#[derive(Debug, Deserialize)]
pub struct PlaylistInsertResponse {
    pub id: String,
}
