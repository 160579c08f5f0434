use std::collections::BTreeSet;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Mood used when the classifier returns a label outside the supported set
pub const DEFAULT_MOOD: Mood = Mood::Happy;

/// The closed set of moods a playlist can be generated for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Fearful,
    Surprised,
    Disgusted,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Fearful,
        Mood::Surprised,
        Mood::Disgusted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Fearful => "fearful",
            Mood::Surprised => "surprised",
            Mood::Disgusted => "disgusted",
        }
    }

    /// Parse a classifier label into a mood, case-insensitively.
    /// Labels outside the supported set (e.g. "neutral") return None.
    pub fn from_label(label: &str) -> Option<Mood> {
        let normalized = label.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == normalized)
    }

    /// The fixed search phrases this mood draws its candidates from
    pub fn search_phrases(&self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &[
                "feel good pop",
                "happy hits",
                "good vibes music",
                "uplifting songs",
            ],
            Mood::Sad => &[
                "sad songs",
                "emotional ballads",
                "heartbreak songs",
                "sad pop",
            ],
            Mood::Angry => &["rage music", "hard rock", "angry rap", "workout rage"],
            Mood::Fearful => &[
                "dark ambient",
                "suspense music",
                "anxiety playlist",
                "cinematic tension",
            ],
            Mood::Surprised => &[
                "viral hits",
                "wow songs",
                "unexpected drops",
                "surprise playlist",
            ],
            Mood::Disgusted => &[
                "heavy metal",
                "industrial",
                "dark rock",
                "intense alternative",
            ],
        }
    }

    /// The distinct lowercase words across all of this mood's search phrases,
    /// used for title matching during scoring
    pub fn keyword_vocabulary(&self) -> BTreeSet<String> {
        self.search_phrases()
            .iter()
            .flat_map(|phrase| phrase.split_whitespace())
            .map(|word| word.to_lowercase())
            .collect()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!(Mood::from_label("happy"), Some(Mood::Happy));
        assert_eq!(Mood::from_label("SAD"), Some(Mood::Sad));
        assert_eq!(Mood::from_label("  Fearful "), Some(Mood::Fearful));
        assert_eq!(Mood::from_label("neutral"), None);
        assert_eq!(Mood::from_label(""), None);
    }

    #[test]
    fn test_every_mood_has_phrases() {
        for mood in Mood::ALL {
            assert_eq!(
                mood.search_phrases().len(),
                4,
                "mood {mood} should have 4 search phrases"
            );
        }
    }

    #[test]
    fn test_vocabulary_is_deduplicated() {
        let vocabulary = Mood::Happy.keyword_vocabulary();
        // "good" appears in two phrases but only once in the vocabulary
        assert!(vocabulary.contains("good"));
        assert!(vocabulary.contains("happy"));
        assert!(vocabulary.contains("uplifting"));
        let words: Vec<_> = vocabulary.iter().filter(|w| *w == "good").collect();
        assert_eq!(words.len(), 1);
    }
}
