//! Regional markets: currency, conversion multiplier, and marketplace pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Supported book markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    In,
    Uk,
    Usa,
}

/// Marketplaces a region can link out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marketplace {
    AmazonIn,
    Flipkart,
    AmazonUk,
    EbayUk,
    AmazonUs,
    EbayUs,
}

impl Marketplace {
    /// Short display label used on buttons and in exports.
    pub fn label(&self) -> &'static str {
        match self {
            Marketplace::AmazonIn => "AMAZON.IN",
            Marketplace::Flipkart => "FLIPKART",
            Marketplace::AmazonUk => "AMAZON.CO.UK",
            Marketplace::EbayUk => "EBAY.UK",
            Marketplace::AmazonUs => "AMAZON.COM",
            Marketplace::EbayUs => "EBAY.US",
        }
    }

    /// Builds a search URL for an already-escaped query.
    pub fn search_url(&self, escaped_query: &str) -> String {
        match self {
            Marketplace::AmazonIn => format!("https://www.amazon.in/s?k={}", escaped_query),
            Marketplace::AmazonUk => format!("https://www.amazon.co.uk/s?k={}", escaped_query),
            Marketplace::AmazonUs => format!("https://www.amazon.com/s?k={}", escaped_query),
            Marketplace::Flipkart => format!("https://www.flipkart.com/search?q={}", escaped_query),
            Marketplace::EbayUk => {
                format!("https://www.ebay.co.uk/sch/i.html?_nkw={}", escaped_query)
            }
            Marketplace::EbayUs => format!("https://www.ebay.com/sch/i.html?_nkw={}", escaped_query),
        }
    }
}

impl Region {
    /// Upper-case region code used in labels and export file names.
    pub fn code(&self) -> &'static str {
        match self {
            Region::In => "IN",
            Region::Uk => "UK",
            Region::Usa => "USA",
        }
    }

    /// Human-readable node name.
    pub fn name(&self) -> &'static str {
        match self {
            Region::In => "India (Asia-South1)",
            Region::Uk => "UK (London)",
            Region::Usa => "USA (Virginia)",
        }
    }

    /// ISO currency code for this region.
    pub fn currency(&self) -> &'static str {
        match self {
            Region::In => "INR",
            Region::Uk => "GBP",
            Region::Usa => "USD",
        }
    }

    /// Currency symbol for display.
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Region::In => "₹",
            Region::Uk => "£",
            Region::Usa => "$",
        }
    }

    /// Multiplier from the reference currency (GBP) into this region's currency.
    pub fn multiplier(&self) -> f64 {
        match self {
            Region::In => 105.5,
            Region::Uk => 1.0,
            Region::Usa => 1.28,
        }
    }

    /// The (primary, secondary) marketplace pair for this region.
    pub fn marketplaces(&self) -> (Marketplace, Marketplace) {
        match self {
            Region::In => (Marketplace::AmazonIn, Marketplace::Flipkart),
            Region::Uk => (Marketplace::AmazonUk, Marketplace::EbayUk),
            Region::Usa => (Marketplace::AmazonUs, Marketplace::EbayUs),
        }
    }

    /// Parses a region label, falling back to the default region (`In`) when
    /// the label is not recognized.
    pub fn resolve(label: &str) -> Region {
        label.parse().unwrap_or_else(|e: RegionParseError| {
            warn!("{}; falling back to {}", e, Region::default().code());
            Region::default()
        })
    }

    /// Returns all supported regions.
    pub fn all() -> &'static [Region] {
        &[Region::In, Region::Uk, Region::Usa]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "ind" | "india" => Ok(Region::In),
            "uk" | "gb" | "united kingdom" | "britain" => Ok(Region::Uk),
            "us" | "usa" | "united states" | "america" => Ok(Region::Usa),
            _ => Err(RegionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegionParseError(String);

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown region '{}'. Valid regions: in, uk, usa", self.0)
    }
}

impl std::error::Error for RegionParseError {}
