use std::path::Path;

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use ureq::Agent;

use crate::ranking::Mood;

/// Response structure for the classifier's /detect call
#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(rename = "detectedMood")]
    detected_mood: String,
    confidence: f64,
}

/// What the classifier said, with unknown labels kept explicit instead of
/// being coerced to a default mood
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    Detected { mood: Mood, confidence: f64 },
    Unrecognized { label: String, confidence: f64 },
}

impl DetectionOutcome {
    pub fn from_classifier(label: &str, confidence: f64) -> Self {
        match Mood::from_label(label) {
            Some(mood) => DetectionOutcome::Detected { mood, confidence },
            None => DetectionOutcome::Unrecognized {
                label: label.to_string(),
                confidence,
            },
        }
    }
}

/// Client for the external facial-expression classifier service
pub struct MoodDetector {
    agent: Agent,
    base_url: String,
}

impl MoodDetector {
    pub fn new(base_url: &str) -> Self {
        MoodDetector {
            agent: Agent::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check that the classifier service is reachable
    pub fn health(&self) -> Result<()> {
        self.agent
            .get(&format!("{}/health", self.base_url))
            .call()
            .map_err(|e| anyhow::anyhow!("Mood service health check failed: {}", e))?;
        Ok(())
    }

    /// Run mood detection on an image file (a captured webcam frame)
    pub fn detect_from_file(&self, path: &Path) -> Result<DetectionOutcome> {
        let image_bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read image '{}': {}", path.display(), e))?;
        let payload = STANDARD.encode(&image_bytes);

        let response = self
            .agent
            .post(&format!("{}/detect", self.base_url))
            .send_json(serde_json::json!({ "imageBase64": payload }))
            .map_err(|e| anyhow::anyhow!("Mood detection request failed: {}", e))?;
        let response_text = response.into_string()?;

        let parsed: DetectResponse = serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse detection response: {}", e))?;

        Ok(DetectionOutcome::from_classifier(
            &parsed.detected_mood,
            parsed.confidence,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_label_maps_to_mood() {
        let outcome = DetectionOutcome::from_classifier("happy", 0.92);
        assert_eq!(
            outcome,
            DetectionOutcome::Detected {
                mood: Mood::Happy,
                confidence: 0.92
            }
        );
    }

    #[test]
    fn test_unknown_label_stays_observable() {
        // The classifier reports "neutral" for undetected faces; that label
        // is outside the supported set and must not silently become a mood
        let outcome = DetectionOutcome::from_classifier("neutral", 0.4);
        assert_eq!(
            outcome,
            DetectionOutcome::Unrecognized {
                label: "neutral".to_string(),
                confidence: 0.4
            }
        );
    }

    #[test]
    fn test_label_parsing_is_case_insensitive() {
        let outcome = DetectionOutcome::from_classifier("Surprised", 0.7);
        assert!(matches!(
            outcome,
            DetectionOutcome::Detected {
                mood: Mood::Surprised,
                ..
            }
        ));
    }
}
