//! Regional markets: pricing, marketplace links, and record assembly.

pub mod links;
pub mod models;
pub mod pricing;
pub mod regions;

pub use links::{market_links, MarketLinks};
pub use models::{BookRecord, RawBook, RecordSet, Source};
pub use pricing::{regionalize_price, PriceMode};
pub use regions::{Marketplace, Region};

use models::{MAX_RATING, UNKNOWN_RATING};
use rand::Rng;

/// Prices and links a raw book for `region`.
pub fn assemble<R: Rng + ?Sized>(
    raw: RawBook,
    region: Region,
    mode: PriceMode,
    rng: &mut R,
) -> BookRecord {
    let price = regionalize_price(raw.base_price, region, mode, rng);
    let links = market_links(&raw.title, region);

    BookRecord {
        title: raw.title,
        price,
        rating: raw.rating.unwrap_or(UNKNOWN_RATING).min(MAX_RATING),
        primary_link: links.primary_link,
        secondary_link: links.secondary_link,
        primary_label: links.primary_label.to_string(),
        secondary_label: links.secondary_label.to_string(),
    }
}
