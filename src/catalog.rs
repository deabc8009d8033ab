use crate::features::{Listing, ListingId};
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::path::Path;

/// Parse a JSON array of `{ "id": .., "features": [..] }` objects.
///
/// Identifiers must be unique within the set. Vector lengths are not
/// checked here; the engine rejects mismatches when the set is used.
pub fn parse_listings(json: &str) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> =
        serde_json::from_str(json).context("Failed to parse listings JSON")?;

    let mut seen = HashSet::with_capacity(listings.len());
    for listing in &listings {
        if !seen.insert(listing.id) {
            bail!("Duplicate listing id {}", listing.id);
        }
    }

    Ok(listings)
}

/// Read and parse a listing file
pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings from {}", path.display()))?;

    parse_listings(&raw).with_context(|| format!("Invalid listing file {}", path.display()))
}

pub fn find_listing(listings: &[Listing], id: ListingId) -> Option<&Listing> {
    listings.iter().find(|l| l.id == id)
}
