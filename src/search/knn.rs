use crate::error::Result;
use crate::features::{Listing, ListingId, check_dimensions, distance_unchecked};
use rayon::prelude::*;
use tracing::debug;

/// A candidate paired with its distance to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    pub listing: &'a Listing,
    pub distance: f64,
}

/// Return the `k` candidates closest to `query`, nearest first.
///
/// Candidates at exactly equal distance keep their relative input order.
/// When `k` exceeds the candidate count every candidate is returned.
/// Candidates whose distance is NaN come last.
///
/// # Errors
/// `DimensionMismatch` if any candidate's vector length differs from the
/// query's. Nothing is computed in that case.
pub fn k_nearest<'a>(
    query: &Listing,
    candidates: &'a [Listing],
    k: usize,
) -> Result<Vec<Neighbor<'a>>> {
    check_dimensions(
        query.dim(),
        candidates.iter().map(|c| c.features.as_slice()),
    )?;

    // Indexed collect keeps input order, so the stable sort below sees
    // candidates exactly as the caller passed them.
    let mut scored: Vec<Neighbor<'a>> = candidates
        .par_iter()
        .map(|c| Neighbor {
            listing: c,
            distance: distance_unchecked(&query.features, &c.features),
        })
        .collect();

    // NaN distances (from non-finite features) rank after every number
    scored.sort_by(|a, b| {
        a.distance
            .is_nan()
            .cmp(&b.distance.is_nan())
            .then(a.distance.total_cmp(&b.distance))
    });
    scored.truncate(k);

    debug!(
        query = query.id,
        candidates = candidates.len(),
        k,
        returned = scored.len(),
        "k-nearest search complete"
    );

    Ok(scored)
}

/// Identifier-only form of [`k_nearest`]
pub fn k_nearest_ids(query: &Listing, candidates: &[Listing], k: usize) -> Result<Vec<ListingId>> {
    Ok(k_nearest(query, candidates, k)?
        .into_iter()
        .map(|n| n.listing.id)
        .collect())
}
