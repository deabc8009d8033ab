mod distance;
mod listing;
mod scale;

#[cfg(test)]
mod tests;

pub use distance::{check_dimensions, euclidean_distance};
pub use listing::{Listing, ListingId};
pub use scale::FeatureScaler;

pub(crate) use distance::distance_unchecked;
