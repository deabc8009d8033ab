use super::distance::check_dimensions;
use super::listing::Listing;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Z-score standardization fitted on a listing set.
///
/// Raw features mix units (dollars, square feet, room counts), so the
/// largest-magnitude column dominates Euclidean distance. Callers that want
/// every column to weigh the same fit a scaler once and transform both the
/// query and the candidates with it. The engine never scales on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl FeatureScaler {
    /// Compute per-feature mean and population standard deviation
    pub fn fit(listings: &[Listing]) -> Result<Self> {
        let first = listings.first().ok_or_else(|| {
            EngineError::InvalidArgument("cannot fit a scaler on an empty listing set".to_string())
        })?;
        let dim = first.dim();
        check_dimensions(dim, listings.iter().map(|l| l.features.as_slice()))?;

        let n = listings.len() as f64;
        let mut means = vec![0.0; dim];
        for l in listings {
            for (m, x) in means.iter_mut().zip(&l.features) {
                *m += x;
            }
        }
        for m in means.iter_mut() {
            *m /= n;
        }

        let mut std_devs = vec![0.0; dim];
        for l in listings {
            for ((s, x), m) in std_devs.iter_mut().zip(&l.features).zip(&means) {
                let d = x - m;
                *s += d * d;
            }
        }
        for s in std_devs.iter_mut() {
            *s = (*s / n).sqrt();
        }

        Ok(Self { means, std_devs })
    }

    pub fn dim(&self) -> usize {
        self.means.len()
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Standardize one listing. Zero-variance features map to 0.
    pub fn transform_one(&self, listing: &Listing) -> Result<Listing> {
        check_dimensions(self.dim(), [listing.features.as_slice()])?;

        let features = listing
            .features
            .iter()
            .zip(self.means.iter().zip(&self.std_devs))
            .map(|(x, (m, s))| if *s == 0.0 { 0.0 } else { (x - m) / s })
            .collect::<Vec<_>>();

        Ok(Listing::new(listing.id, features))
    }

    pub fn transform(&self, listings: &[Listing]) -> Result<Vec<Listing>> {
        check_dimensions(self.dim(), listings.iter().map(|l| l.features.as_slice()))?;
        listings.iter().map(|l| self.transform_one(l)).collect()
    }
}
