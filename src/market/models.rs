//! Data models for book records and their provenance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating assigned when a source carries no usable rating.
pub const UNKNOWN_RATING: u8 = 0;

/// Highest star rating a record can carry.
pub const MAX_RATING: u8 = 5;

/// A book as produced by an acquisition strategy, before regional pricing
/// and link generation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBook {
    /// Book title
    pub title: String,
    /// Price before regional adjustment
    pub base_price: f64,
    /// Star rating if the source carried one
    pub rating: Option<u8>,
}

impl RawBook {
    pub fn new(title: impl Into<String>, base_price: f64, rating: Option<u8>) -> Self {
        Self { title: title.into(), base_price, rating }
    }
}

/// One book entry, priced and linked for a single region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title
    pub title: String,
    /// Price in the region's display currency
    pub price: f64,
    /// Star rating (0 = unknown)
    pub rating: u8,
    /// Search URL on the region's primary marketplace
    pub primary_link: String,
    /// Search URL on the region's secondary marketplace
    pub secondary_link: String,
    /// Display name of the primary marketplace
    pub primary_label: String,
    /// Display name of the secondary marketplace
    pub secondary_label: String,
}

/// Ordered records produced by exactly one strategy.
pub type RecordSet = Vec<BookRecord>;

/// Which acquisition strategy produced a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    LiveScrape,
    Ai,
    Static,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::LiveScrape => "LIVE CATALOG",
            Source::Ai => "GEMINI LIVE",
            Source::Static => "STATIC FALLBACK",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
