use anyhow::{Context, Result};
use clap::Parser;
use engine::apply_rating;
use std::path::PathBuf;
use store::{CriticId, JsonStore, MovieId, Stars};
use tracing::info;

/// ReelTrust - Critic-weighted movie rating recalculator
///
/// Records one critic's star rating for one movie, then recomputes every
/// critic's credibility weight and every movie's weighted average.
#[derive(Parser)]
#[command(name = "reel-trust")]
#[command(about = "Apply one critic rating and recompute weights and averages", long_about = None)]
struct Cli {
    /// Movie receiving the rating
    movie_id: MovieId,

    /// Critic giving the rating
    critic_id: CriticId,

    /// Star score
    #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
    stars: Stars,

    /// Path to the JSON dataset file
    #[arg(short, long, default_value = "data/reviews.json")]
    data: PathBuf,
}

fn main() {
    // Initialize tracing; diagnostics go to stderr so stdout stays reserved
    // for the summary (and for error messages)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        // Every failure ends up here: message on stdout, nonzero exit
        println!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut store = JsonStore::load(&cli.data)
        .with_context(|| format!("Failed to load dataset from {}", cli.data.display()))?;

    let (movies, critics, ratings) = store.catalog().counts();
    info!(movies, critics, ratings, "dataset loaded");

    let summary = apply_rating(&mut store, cli.movie_id, cli.critic_id, cli.stars)?;

    println!("New critic rating weight: {:.1}", summary.critic_weight);
    println!("New movie rating: {:.1}", summary.movie_average);
    Ok(())
}
