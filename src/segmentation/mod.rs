mod centroid;
mod kmeans;
mod types;


pub use kmeans::{DEFAULT_MAX_ITERATIONS, KMeans, cluster};
pub use types::{Segment, SegmentLabel, SegmentationResult};
