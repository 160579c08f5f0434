use std::collections::HashMap;
use std::sync::Mutex;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Candidate, GeneratedPlaylist};
use crate::ranking::Mood;

/// How many distinct playlists may exist per mood before reuse kicks in
pub const MAX_PLAYLISTS_PER_MOOD: usize = 2;

#[derive(Debug, Default)]
struct MoodState {
    pool: Option<Vec<Candidate>>,
    /// Creation slots handed out but not yet committed or released
    reserved: usize,
    playlists: Vec<GeneratedPlaylist>,
}

/// What a generation request may do for a mood, decided atomically
#[derive(Debug, Clone)]
pub enum SlotDecision {
    /// A creation slot was reserved; commit or release it when done
    Create,
    /// The cap is reached; return this existing playlist
    Reuse(GeneratedPlaylist),
    /// The cap is fully reserved by in-flight creations with nothing
    /// materialized yet, so there is neither a slot nor a playlist to reuse
    Busy,
}

/// Process-wide store for ranked pools and materialized playlists.
/// Constructed once at startup and shared by reference; all per-mood state
/// sits behind a single mutex so the cap check and the slot reservation are
/// one atomic step.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    moods: Mutex<HashMap<Mood, MoodState>>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached ranked pool for a mood, if one was ever built
    pub fn cached_pool(&self, mood: Mood) -> Option<Vec<Candidate>> {
        let moods = self.moods.lock().unwrap();
        moods.get(&mood).and_then(|state| state.pool.clone())
    }

    /// Cache a ranked pool. Pools are never invalidated for the process
    /// lifetime; a concurrent double-build simply replaces the whole value.
    pub fn cache_pool(&self, mood: Mood, pool: Vec<Candidate>) {
        let mut moods = self.moods.lock().unwrap();
        moods.entry(mood).or_default().pool = Some(pool);
    }

    /// Decide whether this request creates a new playlist or reuses one.
    /// Reserving counts in-flight creations toward the cap, so concurrent
    /// requests can never overrun it.
    pub fn decide_slot(&self, mood: Mood, rng: &mut impl Rng) -> SlotDecision {
        let mut moods = self.moods.lock().unwrap();
        let state = moods.entry(mood).or_default();

        if state.playlists.len() >= MAX_PLAYLISTS_PER_MOOD {
            return match state.playlists.choose(rng) {
                Some(playlist) => SlotDecision::Reuse(playlist.clone()),
                None => SlotDecision::Busy,
            };
        }
        if state.playlists.len() + state.reserved >= MAX_PLAYLISTS_PER_MOOD {
            return SlotDecision::Busy;
        }

        state.reserved += 1;
        SlotDecision::Create
    }

    /// Fill a reserved slot with the playlist that was created for it
    pub fn commit_playlist(&self, mood: Mood, playlist: GeneratedPlaylist) {
        let mut moods = self.moods.lock().unwrap();
        let state = moods.entry(mood).or_default();
        state.reserved = state.reserved.saturating_sub(1);
        state.playlists.push(playlist);
    }

    /// Give back a reserved slot after a failed creation
    pub fn release_slot(&self, mood: Mood) {
        let mut moods = self.moods.lock().unwrap();
        if let Some(state) = moods.get_mut(&mood) {
            state.reserved = state.reserved.saturating_sub(1);
        }
    }

    /// Number of materialized playlists for a mood
    pub fn playlist_count(&self, mood: Mood) -> usize {
        let moods = self.moods.lock().unwrap();
        moods.get(&mood).map_or(0, |state| state.playlists.len())
    }
}
