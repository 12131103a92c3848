//! Catalog state — marketplace listings, live auctions, and the wallet's
//! owned collection.
//!
//! DESIGN
//! ======
//! One in-memory catalog backs every page. There is no backend: the catalog
//! seeds itself with demo records at startup and all mutations (bids, evolution
//! commits) apply directly to this struct inside a signal. Pages share the
//! catalog through context so a bid placed on the auctions page and an auction
//! minted from the evolution workflow land in the same list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::util::bid::bid_allowed;

/// Starting bid for an auction minted from the evolution workflow, in ETH.
pub const MINT_STARTING_BID: &str = "0.5";
/// Countdown label assigned to a freshly minted auction.
pub const MINT_TIME_LEFT: &str = "24h 0m";
/// Tag stamped onto every NFT that goes through the evolution workflow.
pub const EVOLVED_TAG: &str = "evolved";

/// Tag shortcuts surfaced as quick filters on the marketplace page.
pub const POPULAR_TAGS: [&str; 9] = [
    "cyber",
    "digital",
    "glowing",
    "ethereal",
    "neon",
    "crystal",
    "legendary",
    "rare",
    "epic",
];

/// A single NFT as rendered on cards across the app.
///
/// Marketplace listings carry `owner` and `price`; owned records carry
/// `evolution_count` instead. Auction entries embed one of these inside an
/// [`AuctionRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftRecord {
    pub id: String,
    pub name: String,
    /// Image URL, relative to the site root for the bundled demo art.
    pub image: String,
    pub tags: Vec<String>,
    /// Wallet address shown on marketplace cards.
    #[serde(default)]
    pub owner: Option<String>,
    /// Asking price in ETH, kept as entered.
    #[serde(default)]
    pub price: Option<String>,
    /// How many times this NFT has been evolved. Only meaningful for owned
    /// records.
    #[serde(default)]
    pub evolution_count: Option<u32>,
}

/// An NFT under active auction, wrapping the listing with bid state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionRecord {
    pub nft: NftRecord,
    /// Highest bid so far in ETH, kept as entered.
    pub current_bid: String,
    /// Human countdown label such as `"2h 34m"` or `"1d 12h"`.
    pub time_left: String,
    pub bid_count: u32,
}

/// The whole in-memory catalog: listings for sale, running auctions, and the
/// signed-in wallet's collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub listings: Vec<NftRecord>,
    pub auctions: Vec<AuctionRecord>,
    pub owned: Vec<NftRecord>,
}

impl CatalogState {
    /// Catalog pre-populated with the demo records every page expects.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            listings: seed_listings(),
            auctions: seed_auctions(),
            owned: seed_owned(),
        }
    }

    /// Apply a bid to an auction.
    ///
    /// The bid must parse as a number and strictly exceed the current bid,
    /// the same rule the UI uses to enable the submit button. Returns `true`
    /// when the auction was updated.
    pub fn place_bid(&mut self, auction_id: &str, amount: &str) -> bool {
        let Some(auction) = self.auctions.iter_mut().find(|a| a.nft.id == auction_id) else {
            return false;
        };
        if !bid_allowed(amount, &auction.current_bid) {
            return false;
        }
        auction.current_bid = amount.trim().to_owned();
        auction.bid_count += 1;
        true
    }

    /// Commit a kept evolution onto the owned record it came from.
    ///
    /// Swaps in the generated image, bumps the evolution counter, and merges
    /// the newly entered tags. Returns `false` when the record is gone.
    pub fn commit_kept(&mut self, nft_id: &str, image: &str, new_tags: &[String]) -> bool {
        let Some(nft) = self.owned.iter_mut().find(|n| n.id == nft_id) else {
            return false;
        };
        nft.image = image.to_owned();
        nft.evolution_count = Some(nft.evolution_count.unwrap_or(0) + 1);
        nft.tags = merge_tags(&nft.tags, new_tags);
        true
    }

    /// Mint an auction for an evolved NFT and append it to the live list.
    ///
    /// The source record stays in the collection untouched; the auction sells
    /// the evolved variant. Returns the minted auction's NFT id, or `None`
    /// when the source record is gone.
    pub fn commit_auctioned(
        &mut self,
        source_id: &str,
        image: &str,
        new_tags: &[String],
    ) -> Option<String> {
        let source = self.owned.iter().find(|n| n.id == source_id)?;

        let mut tags = merge_tags(&source.tags, new_tags);
        if !tags.iter().any(|t| t == EVOLVED_TAG) {
            tags.push(EVOLVED_TAG.to_owned());
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.auctions.push(AuctionRecord {
            nft: NftRecord {
                id: id.clone(),
                name: format!("Evolved {}", source.name),
                image: image.to_owned(),
                tags,
                owner: None,
                price: None,
                evolution_count: None,
            },
            current_bid: MINT_STARTING_BID.to_owned(),
            time_left: MINT_TIME_LEFT.to_owned(),
            bid_count: 0,
        });
        Some(id)
    }

    /// Total bids across every live auction.
    #[must_use]
    pub fn total_bids(&self) -> u32 {
        self.auctions.iter().map(|a| a.bid_count).sum()
    }

    /// Highest current bid across live auctions, if any bid parses.
    #[must_use]
    pub fn highest_bid(&self) -> Option<f64> {
        self.auctions
            .iter()
            .filter_map(|a| a.current_bid.parse::<f64>().ok())
            .fold(None, |best, bid| match best {
                Some(b) if b >= bid => Some(b),
                _ => Some(bid),
            })
    }

    /// Total evolutions recorded across the owned collection.
    #[must_use]
    pub fn total_evolutions(&self) -> u32 {
        self.owned
            .iter()
            .map(|n| n.evolution_count.unwrap_or(0))
            .sum()
    }
}

/// Append `extra` tags onto `base`, skipping duplicates, preserving order.
fn merge_tags(base: &[String], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = base.to_vec();
    for tag in extra {
        if !merged.iter().any(|t| t == tag) {
            merged.push(tag.clone());
        }
    }
    merged
}

fn listing(id: &str, name: &str, price: &str, owner: &str, tags: &[&str]) -> NftRecord {
    NftRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        image: "/placeholder.svg".to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        owner: Some(owner.to_owned()),
        price: Some(price.to_owned()),
        evolution_count: None,
    }
}

fn owned(id: &str, name: &str, evolutions: u32, tags: &[&str]) -> NftRecord {
    NftRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        image: "/placeholder.svg".to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        owner: None,
        price: None,
        evolution_count: Some(evolutions),
    }
}

fn auction(
    id: &str,
    name: &str,
    bid: &str,
    time_left: &str,
    bids: u32,
    tags: &[&str],
) -> AuctionRecord {
    AuctionRecord {
        nft: NftRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            image: "/placeholder.svg".to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            owner: None,
            price: None,
            evolution_count: None,
        },
        current_bid: bid.to_owned(),
        time_left: time_left.to_owned(),
        bid_count: bids,
    }
}

fn seed_listings() -> Vec<NftRecord> {
    vec![
        listing(
            "1",
            "Cyber Phoenix",
            "2.5",
            "0x1a2b...3c4d",
            &["cyber", "phoenix", "glowing", "rare"],
        ),
        listing("2", "Digital Dragon", "1.8", "0x5e6f...7g8h", &["dragon", "digital", "ethereal"]),
        listing("3", "Neon Wolf", "3.2", "0x9i0j...1k2l", &["wolf", "neon", "wild", "legendary"]),
        listing("4", "Crystal Cat", "1.2", "0xab1c...2d3e", &["crystal", "cat", "mystical"]),
        listing(
            "5",
            "Thunder Eagle",
            "4.1",
            "0xef4g...5h6i",
            &["thunder", "eagle", "storm", "epic"],
        ),
        listing("6", "Shadow Panther", "2.9", "0xjk7l...8m9n", &["shadow", "panther", "stealth"]),
    ]
}

fn seed_auctions() -> Vec<AuctionRecord> {
    vec![
        auction(
            "auction-1",
            "Evolved Cyber Phoenix",
            "3.2",
            "2h 34m",
            12,
            &["cyber", "phoenix", "evolved", "rare"],
        ),
        auction(
            "auction-2",
            "Mutated Digital Dragon",
            "5.8",
            "1d 12h",
            28,
            &["dragon", "mutated", "legendary"],
        ),
        auction(
            "auction-3",
            "Enhanced Neon Wolf",
            "2.1",
            "6h 18m",
            8,
            &["wolf", "enhanced", "glowing"],
        ),
        auction(
            "auction-4",
            "Transformed Crystal Cat",
            "1.9",
            "23h 45m",
            15,
            &["crystal", "transformed", "mystical"],
        ),
    ]
}

fn seed_owned() -> Vec<NftRecord> {
    vec![
        owned("owned-1", "Mystic Owl", 2, &["mystic", "owl", "wisdom"]),
        owned("owned-2", "Fire Sprite", 0, &["fire", "sprite", "magical"]),
        owned("owned-3", "Ocean Guardian", 1, &["ocean", "guardian", "blue"]),
        owned("owned-4", "Star Wanderer", 3, &["star", "cosmic", "traveler"]),
    ]
}
