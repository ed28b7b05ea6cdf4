//! Simple test harness for the recommendation orchestrator.
//!
//! Loads the finalized dataset, builds the index and prints enriched
//! recommendations for one title.
//!
//! Usage: server [DATASET] [TITLE]

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use server::{Config, EnrichedOutcome, IndexConfig, RecommendationOrchestrator, DEFAULT_TOP_K};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,similarity=debug".into()),
        )
        .init();

    info!("Starting Cinematch server test harness");

    let mut args = std::env::args().skip(1);
    let dataset = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movie_data_with_sentiment.csv"));
    let title = args.next().unwrap_or_else(|| "The Godfather".to_string());

    let config = Config::from_env()?;
    let orchestrator =
        RecommendationOrchestrator::load(&dataset, IndexConfig::default(), config.resolver()?)
            .await?;
    info!("Index loaded: {} movies", orchestrator.index().len());

    match orchestrator.recommend(&title, DEFAULT_TOP_K).await? {
        EnrichedOutcome::NotFound { title } => {
            info!("Movie not found in dataset: {}", title);
        }
        EnrichedOutcome::Found(recommendations) => {
            info!("Received {} recommendations:", recommendations.len());
            for (i, rec) in recommendations.iter().enumerate() {
                let r = &rec.recommendation;
                info!(
                    "{}. {} - similarity {:.3} [{} {}%]",
                    i + 1,
                    r.title,
                    r.similarity,
                    r.sentiment,
                    r.sentiment_score
                );
                info!(
                    "   Director: {} | Cast: {} | Released: {} | {}",
                    rec.metadata.director,
                    rec.metadata.cast,
                    rec.metadata.release_date,
                    rec.metadata.link
                );
            }
        }
    }

    Ok(())
}
