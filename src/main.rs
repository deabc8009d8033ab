//! Command-line wrapper around the similarity search and segmentation
//! engine. Listings are read from a JSON array of
//! `{ "id": <u64>, "features": [<f64>, ...] }` objects.
//!
//! ```bash
//! estate-segments nearest -l listings.json -q 1 -k 5
//! estate-segments segment -l listings.json -k 4 --seed 42 --standardize
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use estate_segments::{
    DEFAULT_MAX_ITERATIONS, FeatureScaler, KMeans, Listing, ListingId, Segment, SegmentLabel,
    catalog::{find_listing, load_listings},
    k_nearest,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Neighbors returned / segments built when `-k` is omitted
const DEFAULT_K: usize = 2;

#[derive(Parser)]
#[command(name = "estate-segments")]
#[command(version, about = "Find similar listings and group them into market segments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank listings by distance to a query listing
    Nearest {
        /// JSON listing file
        #[arg(short, long)]
        listings: PathBuf,

        /// Identifier of the query listing
        #[arg(short, long)]
        query: ListingId,

        /// Number of neighbors to return
        #[arg(short = 'k', long = "top", default_value_t = DEFAULT_K)]
        k: usize,

        /// Leave the query listing out of the candidates
        #[arg(long)]
        exclude_query: bool,

        /// Z-score every feature before measuring distance
        #[arg(long)]
        standardize: bool,
    },

    /// Partition listings into k segments
    Segment {
        /// JSON listing file
        #[arg(short, long)]
        listings: PathBuf,

        /// Number of segments
        #[arg(short = 'k', long = "segments", default_value_t = DEFAULT_K)]
        k: usize,

        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,

        /// Seed for centroid initialization (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop once an iteration changes no label
        #[arg(long)]
        stop_on_convergence: bool,

        /// Z-score every feature before clustering
        #[arg(long)]
        standardize: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Assignment {
    id: ListingId,
    label: SegmentLabel,
}

#[derive(Serialize)]
struct SegmentReport<'a> {
    seed: u64,
    iterations: usize,
    assignments: Vec<Assignment>,
    segments: &'a [Segment],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("estate_segments=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Nearest {
            listings,
            query,
            k,
            exclude_query,
            standardize,
        } => run_nearest(listings, query, k, exclude_query, standardize),
        Commands::Segment {
            listings,
            k,
            max_iterations,
            seed,
            stop_on_convergence,
            standardize,
            json,
        } => {
            let engine = KMeans::new(k)
                .max_iterations(max_iterations)
                .with_seed(seed)
                .stop_on_convergence(stop_on_convergence);
            run_segment(listings, engine, standardize, json)
        }
    }
}

fn prepare(path: &Path, standardize: bool) -> Result<Vec<Listing>> {
    let listings = load_listings(path)?;
    info!(count = listings.len(), path = %path.display(), "Loaded listings");

    if !standardize {
        return Ok(listings);
    }

    let scaler = FeatureScaler::fit(&listings).context("Failed to fit feature scaler")?;
    Ok(scaler.transform(&listings)?)
}

fn run_nearest(
    path: PathBuf,
    query_id: ListingId,
    k: usize,
    exclude_query: bool,
    standardize: bool,
) -> Result<()> {
    let listings = prepare(&path, standardize)?;

    let Some(query) = find_listing(&listings, query_id).cloned() else {
        bail!("Listing {} not found in {}", query_id, path.display());
    };

    let candidates: Vec<Listing> = if exclude_query {
        listings.into_iter().filter(|l| l.id != query_id).collect()
    } else {
        listings
    };

    let start = Instant::now();
    let neighbors = k_nearest(&query, &candidates, k)?;
    info!(
        returned = neighbors.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Search complete"
    );

    println!("{:<6} {:<12} {}", "rank", "id", "distance");
    for (rank, n) in neighbors.iter().enumerate() {
        println!("{:<6} {:<12} {:.4}", rank + 1, n.listing.id, n.distance);
    }

    Ok(())
}

fn run_segment(path: PathBuf, engine: KMeans, standardize: bool, json: bool) -> Result<()> {
    let listings = prepare(&path, standardize)?;

    let start = Instant::now();
    let result = engine.fit(&listings)?;
    info!(
        k = engine.k(),
        seed = result.seed,
        iterations = result.iterations,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Segmentation complete"
    );

    if json {
        let report = SegmentReport {
            seed: result.seed,
            iterations: result.iterations,
            assignments: listings
                .iter()
                .zip(result.labels())
                .map(|(l, &label)| Assignment { id: l.id, label })
                .collect(),
            segments: &result.segments,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{:<12} {}", "id", "segment");
    for (listing, label) in listings.iter().zip(result.labels()) {
        println!("{:<12} {}", listing.id, label);
    }

    println!("\nSegment sizes (seed {}):", result.seed);
    for segment in &result.segments {
        println!("  Segment {}: {} listings", segment.label, segment.len());
    }

    Ok(())
}
