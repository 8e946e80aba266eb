//! Region-specific marketplace search links.

use crate::market::regions::Region;

/// A pair of marketplace search links with their display labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketLinks {
    pub primary_link: String,
    pub secondary_link: String,
    pub primary_label: &'static str,
    pub secondary_label: &'static str,
}

/// Builds the two marketplace search links for `title` in `region`.
pub fn market_links(title: &str, region: Region) -> MarketLinks {
    let query = format!("{} book", title);
    let escaped = urlencoding::encode(&query);
    let (primary, secondary) = region.marketplaces();

    MarketLinks {
        primary_link: primary.search_url(&escaped),
        secondary_link: secondary.search_url(&escaped),
        primary_label: primary.label(),
        secondary_label: secondary.label(),
    }
}

/// Like [`market_links`], for a free-text region label. Unknown labels get
/// the default region's pair.
pub fn market_links_for_label(title: &str, region_label: &str) -> MarketLinks {
    market_links(title, Region::resolve(region_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_links() {
        let links = market_links("Dune", Region::In);
        assert_eq!(links.primary_link, "https://www.amazon.in/s?k=Dune%20book");
        assert_eq!(links.secondary_link, "https://www.flipkart.com/search?q=Dune%20book");
        assert_eq!(links.primary_label, "AMAZON.IN");
        assert_eq!(links.secondary_label, "FLIPKART");
    }

    #[test]
    fn test_uk_links() {
        let links = market_links("Dune", Region::Uk);
        assert_eq!(links.primary_link, "https://www.amazon.co.uk/s?k=Dune%20book");
        assert_eq!(links.secondary_link, "https://www.ebay.co.uk/sch/i.html?_nkw=Dune%20book");
        assert_eq!(links.primary_label, "AMAZON.CO.UK");
        assert_eq!(links.secondary_label, "EBAY.UK");
    }

    #[test]
    fn test_usa_links() {
        let links = market_links("Dune", Region::Usa);
        assert_eq!(links.primary_link, "https://www.amazon.com/s?k=Dune%20book");
        assert_eq!(links.secondary_link, "https://www.ebay.com/sch/i.html?_nkw=Dune%20book");
        assert_eq!(links.primary_label, "AMAZON.COM");
        assert_eq!(links.secondary_label, "EBAY.US");
    }

    #[test]
    fn test_title_is_escaped() {
        let links = market_links("Rich Dad & Poor Dad: #1?", Region::Usa);
        assert!(links.primary_link.starts_with("https://www.amazon.com/s?k="));
        let query = links.primary_link.trim_start_matches("https://www.amazon.com/s?k=");
        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
        assert!(!query.contains('?'));
        assert!(query.ends_with("%20book"));
    }

    #[test]
    fn test_every_region_yields_one_consistent_pair() {
        for region in Region::all() {
            let links = market_links("Title", *region);
            let (primary, secondary) = region.marketplaces();
            assert_eq!(links.primary_label, primary.label());
            assert_eq!(links.secondary_label, secondary.label());
            assert!(links.primary_link.starts_with("https://www."));
            assert!(links.secondary_link.starts_with("https://www."));
            assert_ne!(links.primary_link, links.secondary_link);
        }
    }

    #[test]
    fn test_unknown_label_fails_closed() {
        let links = market_links_for_label("Dune", "Narnia");
        assert_eq!(links, market_links("Dune", Region::In));

        let links = market_links_for_label("Dune", "uk");
        assert_eq!(links.primary_label, "AMAZON.CO.UK");
    }
}
