//! Model-generated market prices.

use super::{AcquisitionPlan, Strategy, StrategyError};
use crate::ai::prompt::{build_prompt, parse_books};
use crate::ai::TextGenerator;
use crate::market::{assemble, PriceMode, RecordSet, Source};
use async_trait::async_trait;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Asks a text model for current books and prices in the genre.
pub struct AiStrategy<'a> {
    generator: Option<&'a dyn TextGenerator>,
}

impl<'a> AiStrategy<'a> {
    pub fn new(generator: Option<&'a dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl Strategy for AiStrategy<'_> {
    fn source(&self) -> Source {
        Source::Ai
    }

    async fn acquire(
        &self,
        plan: &AcquisitionPlan,
        rng: &mut StdRng,
    ) -> Result<RecordSet, StrategyError> {
        let generator = self.generator.ok_or_else(|| {
            StrategyError::Network("no text generator configured (is GEMINI_API_KEY set?)".into())
        })?;

        let prompt = build_prompt(&plan.genre, plan.region);
        debug!("Prompt: {}", prompt);

        let reply = generator.generate(&prompt).await.map_err(StrategyError::network)?;
        let books = parse_books(&reply, plan.region)?;
        info!("Model returned {} books", books.len());

        // Prices are already in the display currency.
        Ok(books.into_iter().map(|b| assemble(b, plan.region, PriceMode::Display, rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::Region;
    use anyhow::Result;
    use rand::SeedableRng;

    struct ScriptedModel(Result<String, String>);

    #[async_trait]
    impl TextGenerator for ScriptedModel {
        async fn generate(&self, prompt: &str) -> Result<String> {
            assert!(prompt.contains("JSON array"));
            self.0.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    fn plan(region: Region) -> AcquisitionPlan {
        AcquisitionPlan {
            genre: "Business".to_string(),
            region,
            use_ai: true,
            ..AcquisitionPlan::default()
        }
    }

    #[tokio::test]
    async fn test_reply_prices_are_not_converted() {
        let model = ScriptedModel(Ok(
            "```json\n[{\"Title\":\"The Lean Startup\",\"Price\":599,\"Rating\":4}]\n```".into(),
        ));
        let strategy = AiStrategy::new(Some(&model));
        let mut rng = StdRng::seed_from_u64(3);

        let records = strategy.acquire(&plan(Region::In), &mut rng).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, 599.0);
        assert_eq!(records[0].rating, 4);
        assert_eq!(records[0].primary_label, "AMAZON.IN");
        assert_eq!(records[0].secondary_label, "FLIPKART");
    }

    #[tokio::test]
    async fn test_missing_field_fails_whole_reply() {
        let model = ScriptedModel(Ok(r#"[
            {"Title":"Good to Great","Price":15.99,"Rating":5},
            {"Title":"Built to Last","Price":14.5}
        ]"#
        .into()));
        let strategy = AiStrategy::new(Some(&model));
        let mut rng = StdRng::seed_from_u64(3);

        let err = strategy.acquire(&plan(Region::Uk), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_price_rounding_to_zero_fails_strategy() {
        let model = ScriptedModel(Ok(r#"[{"Title":"Real Book","Price":0.004,"Rating":4}]"#.into()));
        let strategy = AiStrategy::new(Some(&model));
        let mut rng = StdRng::seed_from_u64(3);

        let err = strategy.acquire(&plan(Region::Usa), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_model_error_is_network() {
        let model = ScriptedModel(Err("quota exceeded".into()));
        let strategy = AiStrategy::new(Some(&model));
        let mut rng = StdRng::seed_from_u64(3);

        let err = strategy.acquire(&plan(Region::Usa), &mut rng).await.unwrap_err();
        assert!(matches!(err, StrategyError::Network(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_without_generator() {
        let strategy = AiStrategy::new(None);
        let mut rng = StdRng::seed_from_u64(3);

        let err = strategy.acquire(&plan(Region::Usa), &mut rng).await.unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert_eq!(strategy.source(), Source::Ai);
    }
}
