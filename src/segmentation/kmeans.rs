use crate::error::{EngineError, Result};
use crate::features::{Listing, check_dimensions, distance_unchecked};
use crate::segmentation::{
    centroid::compute_centroid,
    types::{Segment, SegmentLabel, SegmentationResult},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Iteration budget used when the caller does not set one
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// K-means segmentation with random initialization.
///
/// Runs exactly `max_iterations` assignment/update rounds unless
/// `stop_on_convergence` is enabled, in which case it stops after the first
/// round whose assignment step changes no label. Enabling it can change the
/// output for a given seed and budget.
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    seed: Option<u64>,
    stop_on_convergence: bool,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            stop_on_convergence: false,
        }
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Pin the initialization seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Without a seed, one is drawn from the thread-local OS-seeded
    /// generator and reported in the result.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn stop_on_convergence(mut self, enabled: bool) -> Self {
        self.stop_on_convergence = enabled;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    fn validate(&self, listings: &[Listing]) -> Result<()> {
        if self.k == 0 {
            return Err(EngineError::InvalidArgument(
                "k must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(EngineError::InvalidArgument(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        let first = listings.first().ok_or_else(|| {
            EngineError::InvalidArgument("cannot cluster an empty listing set".to_string())
        })?;

        check_dimensions(
            first.dim(),
            listings.iter().map(|l| l.features.as_slice()),
        )
    }

    /// Assign every listing to one of `k` segments.
    pub fn fit(&self, listings: &[Listing]) -> Result<SegmentationResult> {
        self.validate(listings)?;

        let n = listings.len();
        let k = self.k;
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        // 1. Draw k initial centers uniformly, with replacement
        let mut centroids: Vec<Vec<f64>> = (0..k)
            .map(|_| listings[rng.random_range(0..n)].features.clone())
            .collect();

        let mut labels: Vec<SegmentLabel> = vec![0; n];
        let mut iterations = 0;

        for round in 0..self.max_iterations {
            iterations += 1;

            // 2. Assign each listing to its nearest centroid
            let next: Vec<SegmentLabel> = listings
                .par_iter()
                .map(|l| nearest_centroid(&l.features, &centroids))
                .collect();

            let changed = round == 0 || next != labels;
            labels = next;

            if self.stop_on_convergence && !changed {
                break; // converged
            }

            // 3. Recompute centroids; empty segments keep their old center
            let mut members: Vec<Vec<&[f64]>> = vec![Vec::new(); k];
            for (l, &label) in listings.iter().zip(&labels) {
                members[label].push(l.features.as_slice());
            }

            for (centroid, m) in centroids.iter_mut().zip(&members) {
                if let Some(mean) = compute_centroid(m) {
                    *centroid = mean;
                }
            }
        }

        // 4. Build result segments
        let mut segments: Vec<Segment> = centroids
            .into_iter()
            .enumerate()
            .map(|(label, centroid)| Segment {
                label,
                members: Vec::new(),
                centroid,
            })
            .collect();

        for (position, &label) in labels.iter().enumerate() {
            segments[label].members.push(position);
        }

        let empty = segments.iter().filter(|s| s.is_empty()).count();
        if empty > 0 {
            warn!(k, empty, "segmentation finished with empty segments");
        }
        debug!(listings = n, k, seed, iterations, "segmentation complete");

        Ok(SegmentationResult {
            labels,
            segments,
            iterations,
            seed,
        })
    }
}

/// Cluster `listings` into `k` segments and return only the labels.
pub fn cluster(
    listings: &[Listing],
    k: usize,
    max_iterations: usize,
    seed: Option<u64>,
) -> Result<Vec<SegmentLabel>> {
    KMeans::new(k)
        .max_iterations(max_iterations)
        .with_seed(seed)
        .fit(listings)
        .map(SegmentationResult::into_labels)
}

/// Index of the closest centroid; the lowest index wins ties.
pub(super) fn nearest_centroid(point: &[f64], centroids: &[Vec<f64>]) -> SegmentLabel {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;

    for (c, center) in centroids.iter().enumerate() {
        let d = distance_unchecked(point, center);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }

    best
}
