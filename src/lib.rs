// Public API exports
pub mod catalog;
pub mod error;
pub mod features;
pub mod search;
pub mod segmentation;

// Re-export main types for convenience
pub use error::{EngineError, Result};

pub use features::{FeatureScaler, Listing, ListingId, check_dimensions, euclidean_distance};

pub use search::{Neighbor, k_nearest, k_nearest_ids};

pub use segmentation::{
    DEFAULT_MAX_ITERATIONS, KMeans, Segment, SegmentLabel, SegmentationResult, cluster,
};
