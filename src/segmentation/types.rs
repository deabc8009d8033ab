use crate::error::{EngineError, Result};
use crate::features::{Listing, check_dimensions, distance_unchecked};
use serde::Serialize;

/// Segment index in `0..k`
pub type SegmentLabel = usize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub label: SegmentLabel,
    /// Positions in the input listing sequence
    pub members: Vec<usize>,
    pub centroid: Vec<f64>,
}

impl Segment {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

/// Outcome of one clustering run.
///
/// Labels are only meaningful within the run that produced them; another
/// seed can permute them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentationResult {
    /// One label per input listing, positionally aligned
    pub labels: Vec<SegmentLabel>,
    pub segments: Vec<Segment>,
    pub iterations: usize,
    /// Seed that initialized the centroids; pass it back to replay the run
    pub seed: u64,
}

impl SegmentationResult {
    pub fn labels(&self) -> &[SegmentLabel] {
        &self.labels
    }

    pub fn into_labels(self) -> Vec<SegmentLabel> {
        self.labels
    }

    pub fn k(&self) -> usize {
        self.segments.len()
    }

    pub fn empty_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.is_empty()).count()
    }

    /// Within-segment sum of squared distances to the final centroids.
    ///
    /// `listings` must be the sequence the run was computed on.
    pub fn inertia(&self, listings: &[Listing]) -> Result<f64> {
        if listings.len() != self.labels.len() {
            return Err(EngineError::InvalidArgument(format!(
                "expected {} listings, got {}",
                self.labels.len(),
                listings.len()
            )));
        }
        if let Some(first) = self.segments.first() {
            check_dimensions(
                first.centroid.len(),
                listings.iter().map(|l| l.features.as_slice()),
            )?;
        }

        Ok(listings
            .iter()
            .zip(&self.labels)
            .map(|(l, &label)| {
                let d = distance_unchecked(&l.features, &self.segments[label].centroid);
                d * d
            })
            .sum())
    }
}
