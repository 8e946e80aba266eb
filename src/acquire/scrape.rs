//! Live catalog scrape.

use super::{AcquisitionPlan, Strategy, StrategyError};
use crate::catalog::{genres, CatalogFetch, Parser};
use crate::market::{assemble, PriceMode, RecordSet, Source};
use async_trait::async_trait;
use rand::rngs::StdRng;
use tracing::info;

/// Scrapes the genre's category page from the catalog site.
pub struct ScrapeStrategy<'a> {
    client: Option<&'a dyn CatalogFetch>,
}

impl<'a> ScrapeStrategy<'a> {
    pub fn new(client: Option<&'a dyn CatalogFetch>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Strategy for ScrapeStrategy<'_> {
    fn source(&self) -> Source {
        Source::LiveScrape
    }

    async fn acquire(
        &self,
        plan: &AcquisitionPlan,
        rng: &mut StdRng,
    ) -> Result<RecordSet, StrategyError> {
        let client = self
            .client
            .ok_or_else(|| StrategyError::Network("no catalog client available".to_string()))?;

        let url = genres::category_url(client.base_url(), &plan.genre).ok_or_else(|| {
            StrategyError::Validation(format!("genre '{}' has no catalog category", plan.genre))
        })?;

        info!("Scraping catalog: {}", url);
        let html = client.fetch(&url).await.map_err(StrategyError::network)?;
        let books = Parser::new().parse_category(&html).map_err(StrategyError::parse)?;

        Ok(books.into_iter().map(|b| assemble(b, plan.region, PriceMode::Catalog, rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::Region;
    use anyhow::Result;
    use rand::SeedableRng;
    use std::sync::Mutex;

    /// Canned catalog that records requested URLs.
    struct MockCatalog {
        body: Result<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl MockCatalog {
        fn ok(body: &str) -> Self {
            Self { body: Ok(body.to_string()), requested: Mutex::new(Vec::new()) }
        }

        fn failing(msg: &str) -> Self {
            Self { body: Err(msg.to_string()), requested: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl CatalogFetch for MockCatalog {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.body.clone().map_err(|e| anyhow::anyhow!(e))
        }

        fn base_url(&self) -> &str {
            "http://catalog.test"
        }
    }

    fn plan(genre: &str, region: Region) -> AcquisitionPlan {
        AcquisitionPlan { genre: genre.to_string(), region, ..AcquisitionPlan::default() }
    }

    const PAGE: &str = r#"
        <article class="product_pod">
            <p class="star-rating Three"></p>
            <h3><a title="Sharp Objects">Sharp Objects</a></h3>
            <p class="price_color">£10.00</p>
        </article>
        <article class="product_pod">
            <p class="star-rating One"></p>
            <h3><a title="In a Dark, Dark Wood">In a Dark...</a></h3>
            <p class="price_color">£20.00</p>
        </article>
    "#;

    #[tokio::test]
    async fn test_scrape_converts_prices_and_links() {
        let catalog = MockCatalog::ok(PAGE);
        let strategy = ScrapeStrategy::new(Some(&catalog));
        let mut rng = StdRng::seed_from_u64(1);

        let records = strategy.acquire(&plan("Mystery", Region::Usa), &mut rng).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Sharp Objects");
        assert_eq!(records[0].price, 12.8);
        assert_eq!(records[0].rating, 3);
        assert_eq!(records[0].primary_label, "AMAZON.COM");
        assert_eq!(records[1].title, "In a Dark, Dark Wood");
        assert_eq!(records[1].price, 25.6);
        assert_eq!(records[1].rating, 1);

        let requested = catalog.requested.lock().unwrap();
        assert_eq!(
            requested.as_slice(),
            ["http://catalog.test/catalogue/category/books/mystery_3/index.html"]
        );
    }

    #[tokio::test]
    async fn test_network_failure() {
        let catalog = MockCatalog::failing("connection reset");
        let strategy = ScrapeStrategy::new(Some(&catalog));
        let mut rng = StdRng::seed_from_u64(1);

        let err = strategy.acquire(&plan("Mystery", Region::Uk), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Network(_)));
    }

    #[tokio::test]
    async fn test_malformed_page_is_parse_error() {
        let catalog = MockCatalog::ok(
            r#"<article class="product_pod"><h3><a title="X">X</a></h3></article>"#,
        );
        let strategy = ScrapeStrategy::new(Some(&catalog));
        let mut rng = StdRng::seed_from_u64(1);

        let err = strategy.acquire(&plan("Mystery", Region::Uk), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Parse(_)));
    }

    #[tokio::test]
    async fn test_sub_penny_price_is_parse_error() {
        let catalog = MockCatalog::ok(
            r#"<article class="product_pod">
                <p class="star-rating Two"></p>
                <h3><a title="Pamphlet">Pamphlet</a></h3>
                <p class="price_color">£0.004</p>
            </article>"#,
        );
        let strategy = ScrapeStrategy::new(Some(&catalog));
        let mut rng = StdRng::seed_from_u64(1);

        let err = strategy.acquire(&plan("Mystery", Region::Uk), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unknown_genre_does_not_fetch() {
        let catalog = MockCatalog::ok(PAGE);
        let strategy = ScrapeStrategy::new(Some(&catalog));
        let mut rng = StdRng::seed_from_u64(1);

        let err = strategy.acquire(&plan("Cooking", Region::Uk), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Validation(_)));
        assert!(catalog.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_without_client() {
        let strategy = ScrapeStrategy::new(None);
        let mut rng = StdRng::seed_from_u64(1);
        let err = strategy.acquire(&plan("Mystery", Region::Uk), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Network(_)));
        assert_eq!(strategy.source(), Source::LiveScrape);
    }
}
