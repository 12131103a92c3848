//! Marketplace filtering — search text and tag selection over the listings.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::state::catalog::NftRecord;

/// Case-insensitive substring match against the NFT's name.
/// An empty search matches everything.
#[must_use]
pub fn matches_search(nft: &NftRecord, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    needle.is_empty() || nft.name.to_lowercase().contains(&needle)
}

/// True when the NFT carries at least one of the selected tags.
/// An empty selection matches everything.
#[must_use]
pub fn matches_tags(nft: &NftRecord, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|tag| nft.tags.contains(tag))
}

/// Listings passing both the search text and the tag selection.
#[must_use]
pub fn filter_listings<'a>(
    listings: &'a [NftRecord],
    search: &str,
    selected: &[String],
) -> Vec<&'a NftRecord> {
    listings
        .iter()
        .filter(|nft| matches_search(nft, search) && matches_tags(nft, selected))
        .collect()
}

/// Flip a tag in and out of the selection, preserving the order of the rest.
pub fn toggle_tag(selected: &mut Vec<String>, tag: &str) {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_owned());
    }
}
