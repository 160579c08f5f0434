use anyhow::Result;
use clap::Parser;

mod client;
mod config;
mod detector;
mod generator;
mod models;
mod ranking;
mod store;


use crate::client::YouTubeClient;
use crate::config::load_config;
use crate::detector::{DetectionOutcome, MoodDetector};
use crate::generator::MoodPlaylistGenerator;
use crate::models::GenerationResult;
use crate::ranking::{DEFAULT_MOOD, Mood};
use crate::store::PlaylistStore;

#[derive(Parser)]
#[command(name = "mood-playlist-generator")]
#[command(about = "Mood-driven playlist generator for YouTube")]
#[command(version)]
struct Args {
    /// Mood to generate a playlist for (skips webcam detection)
    #[arg(short, long, value_enum)]
    mood: Option<Mood>,

    /// Path to a captured webcam frame to run mood detection on
    #[arg(short, long, conflicts_with = "mood")]
    image: Option<String>,

    /// Number of sequential generation rounds (demonstrates pool caching and reuse)
    #[arg(short, long, default_value_t = 1)]
    rounds: u32,

    /// Debug mode - print the ranked candidate pool instead of creating playlists
    #[arg(short, long)]
    debug: bool,

    /// Seed for the random source (deterministic phrase and reuse selection)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from .env
    let config = load_config()?;

    // Resolve the mood: manual selection, or webcam-frame detection
    let mood = match (args.mood, &args.image) {
        (Some(mood), _) => {
            println!("Using manually selected mood: {mood}");
            mood
        }
        (None, Some(image_path)) => detect_mood(&config.mood_api_base, image_path)?,
        (None, None) => {
            eprintln!("Error: provide either --mood or --image.");
            return Err(anyhow::anyhow!("No mood source given"));
        }
    };

    // Initialize API client, the process-wide store, and the generator
    let client = YouTubeClient::new(&config);
    let store = PlaylistStore::new();
    let generator = MoodPlaylistGenerator::new(client, &store, config.max_candidates, args.seed);

    if args.debug {
        // Debug mode: print the ranked pool instead of creating playlists
        println!("\nBuilding ranked candidate pool for mood: {mood}");
        let pool = generator.ranked_pool(mood)?;
        println!("Ranked pool ({} candidates):", pool.len());
        for (i, candidate) in pool.iter().enumerate() {
            println!(
                "  {}. [{:.3}] \"{}\" by {} | {}s | {} views | {} likes",
                i + 1,
                candidate.score.unwrap_or(0.0),
                candidate.title,
                candidate.channel,
                candidate.duration_seconds,
                candidate.view_count,
                candidate.like_count
            );
        }
        return Ok(());
    }

    // Generate playlists and log results
    println!("\nGenerating {} playlist(s) for mood: {mood}", args.rounds);
    let mut results: Vec<(u32, Result<GenerationResult>)> = Vec::new();
    for round in 1..=args.rounds {
        let result = generator.generate(mood);
        match &result {
            Ok(generation) => {
                let playlist = &generation.playlist;
                if generation.reused {
                    println!(
                        "\nRound {round}: reusing existing playlist {} ({} videos)",
                        playlist.playlist_id,
                        playlist.items.len()
                    );
                } else {
                    println!(
                        "\nRound {round}: created playlist {} with {} videos",
                        playlist.playlist_id,
                        playlist.items.len()
                    );
                }
                for item in &playlist.items {
                    println!("  - \"{}\" by {} [{}]", item.title, item.channel, item.video_id);
                }
            }
            Err(e) => {
                eprintln!("\nRound {round}: generation failed: {e}");
            }
        }
        results.push((round, result));
    }

    // Summary (suitable for cron job monitoring)
    println!("\n=== GENERATION SUMMARY ===");
    let created = results
        .iter()
        .filter(|(_, r)| matches!(r, Ok(g) if !g.reused))
        .count();
    let reused = results
        .iter()
        .filter(|(_, r)| matches!(r, Ok(g) if g.reused))
        .count();
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    println!(
        "Created {created} new, reused {reused}, failed {failed} (of {} rounds)",
        args.rounds
    );
    println!(
        "Mood '{mood}' now holds {} stored playlist(s)",
        store.playlist_count(mood)
    );

    if !results.is_empty() && failed == results.len() {
        return Err(anyhow::anyhow!("All generation rounds failed"));
    }

    Ok(())
}

/// Run webcam-frame mood detection, falling back to the default mood when
/// the classifier reports a label outside the supported set
fn detect_mood(mood_api_base: &str, image_path: &str) -> Result<Mood> {
    let detector = MoodDetector::new(mood_api_base);

    println!("Testing mood service connection...");
    match detector.health() {
        Ok(_) => println!("✓ Mood service reachable"),
        Err(e) => {
            eprintln!("✗ Mood service unreachable: {e}");
            return Err(e);
        }
    }

    println!("Detecting mood from: {image_path}");
    match detector.detect_from_file(std::path::Path::new(image_path))? {
        DetectionOutcome::Detected { mood, confidence } => {
            println!("Detected mood: {mood} (confidence {confidence:.2})");
            Ok(mood)
        }
        DetectionOutcome::Unrecognized { label, confidence } => {
            eprintln!(
                "Classifier returned unsupported mood '{label}' (confidence {confidence:.2}), \
                 falling back to '{DEFAULT_MOOD}'"
            );
            Ok(DEFAULT_MOOD)
        }
    }
}
