//! CSS selectors for the catalog's category pages.
//!
//! Update this file when the catalog's HTML structure changes, and add a
//! matching fixture under `tests/fixtures/`.

use scraper::Selector;
use std::sync::LazyLock;

/// One product card.
pub static PRODUCT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.product_pod").unwrap());

/// Title link; the full title lives in its `title` attribute.
pub static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3 a").unwrap());

/// Attribute holding the untruncated title.
pub static TITLE_ATTR: &str = "title";

/// Price text, e.g. "£51.77".
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.price_color").unwrap());

/// Star rating paragraph; its second class is the rating word.
pub static STAR_RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.star-rating").unwrap());

/// Class shared by every star rating paragraph.
pub static STAR_RATING_CLASS: &str = "star-rating";
