use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::client::VideoApi;
use crate::models::{Candidate, GeneratedPlaylist, GenerationResult, PlaylistItem};
use crate::ranking::{Mood, RankingPipeline};
use crate::store::{PlaylistStore, SlotDecision};

/// How many pool entries go into a created playlist
pub const PLAYLIST_SIZE: usize = 5;

/// Drives playlist generation: builds ranked pools through the video API,
/// caches them, and creates or reuses playlists through the store.
pub struct MoodPlaylistGenerator<'a, A: VideoApi> {
    api: A,
    store: &'a PlaylistStore,
    rng: Mutex<StdRng>,
    max_candidates: u32,
}

impl<'a, A: VideoApi> MoodPlaylistGenerator<'a, A> {
    /// A fixed seed makes phrase selection and playlist reuse deterministic
    pub fn new(api: A, store: &'a PlaylistStore, max_candidates: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MoodPlaylistGenerator {
            api,
            store,
            rng: Mutex::new(rng),
            max_candidates,
        }
    }

    /// The ranked candidate pool for a mood, built on first request and
    /// cached for the process lifetime. Failed builds are not cached, so a
    /// later call retries the search.
    pub fn ranked_pool(&self, mood: Mood) -> Result<Vec<Candidate>> {
        if let Some(pool) = self.store.cached_pool(mood) {
            return Ok(pool);
        }

        let pool = {
            let mut rng = self.rng.lock().unwrap();
            RankingPipeline::build_ranked_pool(&self.api, mood, self.max_candidates, &mut *rng)?
        };
        self.store.cache_pool(mood, pool.clone());
        Ok(pool)
    }

    /// Generate a playlist for a mood: create one from the top pool entries,
    /// or hand back an existing playlist once the per-mood cap is reached.
    pub fn generate(&self, mood: Mood) -> Result<GenerationResult> {
        let pool = self.ranked_pool(mood)?;
        let chosen: Vec<PlaylistItem> = pool
            .iter()
            .take(PLAYLIST_SIZE)
            .map(PlaylistItem::from_candidate)
            .collect();

        let decision = {
            let mut rng = self.rng.lock().unwrap();
            self.store.decide_slot(mood, &mut *rng)
        };

        match decision {
            SlotDecision::Reuse(playlist) => Ok(GenerationResult {
                playlist,
                reused: true,
            }),
            SlotDecision::Busy => Err(anyhow::anyhow!(
                "Playlist creation for mood '{mood}' is already in progress, try again"
            )),
            SlotDecision::Create => {
                let playlist = match self.create_playlist(mood, chosen) {
                    Ok(playlist) => playlist,
                    Err(e) => {
                        self.store.release_slot(mood);
                        return Err(e);
                    }
                };
                self.store.commit_playlist(mood, playlist.clone());
                Ok(GenerationResult {
                    playlist,
                    reused: false,
                })
            }
        }
    }

    /// Create the playlist container and insert the chosen videos one by one.
    /// Individual insert failures are logged and skipped, so the playlist
    /// can end up shorter than planned. No rollback.
    fn create_playlist(&self, mood: Mood, chosen: Vec<PlaylistItem>) -> Result<GeneratedPlaylist> {
        let title = format!(
            "Mood Mix | {} ({})",
            mood.as_str().to_uppercase(),
            Local::now().format("%Y-%m-%d")
        );
        let description = format!("Generated {mood} playlist based on your detected mood.");

        let playlist_id = self.api.create_playlist(&title, &description)?;

        let mut items = Vec::new();
        for item in chosen {
            match self.api.insert_playlist_item(&playlist_id, &item.video_id) {
                Ok(()) => items.push(item),
                Err(e) => eprintln!("Warning: skipped video {}: {e}", item.video_id),
            }
        }

        Ok(GeneratedPlaylist {
            playlist_id,
            mood,
            items,
        })
    }
}
