use serde::{Deserialize, Serialize};

/// Caller-assigned listing identifier, unique within a working set
pub type ListingId = u64;

/// A listing and its numeric feature vector.
///
/// Feature positions carry no meaning for the engine. Which index holds the
/// price, the living area and so on is a convention owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub features: Vec<f64>,
}

impl Listing {
    pub fn new(id: ListingId, features: impl Into<Vec<f64>>) -> Self {
        Self {
            id,
            features: features.into(),
        }
    }

    /// Number of features in this listing's vector
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}
