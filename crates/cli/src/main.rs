use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::SentimentLabel;
use metadata_client::{MetadataResolver, NoopResolver};
use server::{
    CatalogIndex, Config, EnrichedOutcome, EnrichedRecommendation, IndexConfig,
    RecommendationOrchestrator,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use text_analysis::SentimentAnalyzer;
use tracing::{info, warn};

/// Cinematch - content-based movie recommendations
#[derive(Parser)]
#[command(name = "cinematch")]
#[command(about = "Movie recommendations from content similarity and review sentiment", long_about = None)]
struct Cli {
    /// Path to the finalized dataset
    #[arg(short, long, global = true, default_value = "data/movie_data_with_sentiment.csv")]
    data: PathBuf,

    /// Vocabulary bound for the TF-IDF vector spaces
    #[arg(long, global = true, default_value_t = 5000)]
    max_features: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Title to find similar movies for (case-insensitive)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Skip TMDB metadata lookups
        #[arg(long)]
        no_enrich: bool,
    },

    /// Suggest catalog titles containing a query
    Search {
        /// Case-insensitive substring to look for
        #[arg(long)]
        query: String,
    },

    /// Turn the raw scraped dataset into the finalized dataset
    Prepare {
        /// Raw dataset CSV
        #[arg(long)]
        input: PathBuf,

        /// Where to write the finalized dataset CSV
        #[arg(long)]
        output: PathBuf,
    },

    /// Score the sentiment of a piece of text
    Sentiment {
        #[arg(long)]
        text: String,
    },

    /// Measure recommendation latency over random catalog titles
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Include TMDB lookups in each request
        #[arg(long)]
        enrich: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let index_config = IndexConfig::new().with_max_features(cli.max_features);

    match cli.command {
        Commands::Recommend {
            title,
            limit,
            no_enrich,
        } => {
            let index = load_index(&cli.data, index_config).await?;
            let resolver = if no_enrich {
                Arc::new(NoopResolver) as Arc<dyn MetadataResolver>
            } else {
                Config::from_env()?.resolver()?
            };
            handle_recommend(index, resolver, &title, limit).await?
        }
        Commands::Search { query } => {
            let index = load_index(&cli.data, index_config).await?;
            handle_search(&index, &query)
        }
        Commands::Prepare { input, output } => handle_prepare(&input, &output, cli.max_features)?,
        Commands::Sentiment { text } => handle_sentiment(&text),
        Commands::Benchmark { requests, enrich } => {
            let index = load_index(&cli.data, index_config).await?;
            let resolver = if enrich {
                Config::from_env()?.resolver()?
            } else {
                Arc::new(NoopResolver) as Arc<dyn MetadataResolver>
            };
            handle_benchmark(index, resolver, requests).await?
        }
    }

    Ok(())
}

/// Load the dataset and build the similarity index (this may take a moment)
async fn load_index(data: &Path, config: IndexConfig) -> Result<Arc<CatalogIndex>> {
    println!("Loading dataset from {}...", data.display());
    let start = Instant::now();

    let path = data.to_path_buf();
    let index = tokio::task::spawn_blocking(move || CatalogIndex::load(&path, config))
        .await
        .context("Index build task panicked")?
        .context("Failed to build the recommendation index")?;
    info!(
        "Index built from {}: {} movies, {} terms",
        data.display(),
        index.len(),
        index.vector_space().vocabulary_len()
    );

    println!(
        "{} Indexed {} movies in {:?}",
        "✓".green(),
        index.len(),
        start.elapsed()
    );
    Ok(Arc::new(index))
}

/// Handle the 'recommend' command
async fn handle_recommend(
    index: Arc<CatalogIndex>,
    resolver: Arc<dyn MetadataResolver>,
    title: &str,
    limit: usize,
) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(index, resolver);

    match orchestrator.recommend(title, limit).await? {
        EnrichedOutcome::NotFound { title } => {
            warn!("No catalog entry for '{}'", title);
            println!(
                "{} Movie not found in dataset: {}",
                "✗".red(),
                title.bold()
            );
            let suggestions = orchestrator.index().search_suggestions(&title);
            if !suggestions.is_empty() {
                println!("Did you mean:");
                for suggestion in suggestions {
                    println!("  - {}", suggestion);
                }
            }
        }
        EnrichedOutcome::Found(recommendations) => {
            print_recommendations(title, &recommendations);
        }
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(index: &CatalogIndex, query: &str) {
    let suggestions = index.search_suggestions(query);
    println!("{}", format!("Titles matching '{}':", query).bold().blue());
    if suggestions.is_empty() {
        println!("  (none)");
    }
    for title in suggestions {
        println!("  - {}", title);
    }
}

/// Handle the 'prepare' command
fn handle_prepare(input: &Path, output: &Path, max_features: usize) -> Result<()> {
    println!("Preparing {} -> {}", input.display(), output.display());
    let start = Instant::now();

    let report = pipeline::prepare_file(input, output, max_features)?;
    info!("Preparation finished: {:?}", report);

    println!(
        "{} Kept {} of {} records in {:?}",
        "✓".green(),
        report.output_records,
        report.input_records,
        start.elapsed()
    );
    println!(
        "Reviews vector space: {} rows x {} terms",
        report.reviews_rows, report.reviews_terms
    );
    Ok(())
}

/// Handle the 'sentiment' command
fn handle_sentiment(text: &str) {
    let score = SentimentAnalyzer::new().score(text);
    println!(
        "{} ({}%), compound {:.4}",
        colored_label(score.label),
        score.percentage,
        score.compound
    );
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    index: Arc<CatalogIndex>,
    resolver: Arc<dyn MetadataResolver>,
    requests: usize,
) -> Result<()> {
    if index.is_empty() || requests == 0 {
        println!("Nothing to benchmark");
        return Ok(());
    }

    let orchestrator = RecommendationOrchestrator::new(index.clone(), resolver);

    // Random catalog titles
    let titles: Vec<String> = (0..requests)
        .map(|_| {
            let row = rand::random::<u64>() as usize % index.len();
            index
                .catalog()
                .get(row)
                .map(|r| r.original_title.clone())
                .unwrap_or_default()
        })
        .collect();

    // One task per request, all in flight at once
    let wall_clock = Instant::now();
    let mut handles = vec![];
    for title in titles {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            orchestrator.recommend(&title, server::DEFAULT_TOP_K).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Handles are awaited in spawn order
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = wall_clock.elapsed();
    info!("Benchmark finished: {} requests in {:?}", timings.len(), wall_time);

    timings.sort();
    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn colored_label(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green(),
        SentimentLabel::Neutral => label.as_str().yellow(),
        SentimentLabel::Negative => label.as_str().red(),
    }
}

/// Format and print enriched recommendations
fn print_recommendations(query: &str, recommendations: &[EnrichedRecommendation]) {
    println!(
        "{}",
        format!("Movies similar to '{}':", query).bold().blue()
    );
    for (i, rec) in recommendations.iter().enumerate() {
        let movie = &rec.recommendation;
        let meta = &rec.metadata;
        println!(
            "{}. {} [{}] - similarity {:.3}",
            (i + 1).to_string().green(),
            movie.title.bold(),
            movie.genres,
            movie.similarity
        );
        println!(
            "   Sentiment: {} ({}%)",
            colored_label(movie.sentiment),
            movie.sentiment_score
        );
        println!("   {}", movie.overview);
        println!(
            "   Director: {} | Cast: {}",
            meta.director, meta.cast
        );
        println!(
            "   Released: {} | Runtime: {} | Language: {}",
            meta.release_date, meta.runtime, meta.language
        );
        println!("   {}", meta.link.dimmed());
    }
}
