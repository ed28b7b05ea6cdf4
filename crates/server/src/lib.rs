//! Server crate for the Cinematch recommendation engine.
//!
//! This crate holds the query side of the system:
//! - `CatalogIndex`: the catalog with its precomputed similarity state
//! - `ranker`: title to ranked recommendations, no I/O
//! - `RecommendationOrchestrator`: ranking plus concurrent metadata
//!   enrichment with placeholder fallback
//! - `Config`: enrichment settings from the environment

pub mod config;
pub mod index;
pub mod orchestrator;
pub mod ranker;

pub use config::Config;
pub use index::{CatalogIndex, IndexConfig, DEFAULT_TOP_K};
pub use orchestrator::{EnrichedOutcome, EnrichedRecommendation, RecommendationOrchestrator};
pub use ranker::{recommend, RecommendOutcome, Recommendation};
