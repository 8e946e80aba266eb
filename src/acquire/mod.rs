//! Record acquisition: the three strategies and the orchestrator that
//! chooses between them.

pub mod ai;
pub mod error;
pub mod fallback;
pub mod scrape;

pub use ai::AiStrategy;
pub use error::{AcquireError, StrategyError};
pub use scrape::ScrapeStrategy;

use crate::ai::TextGenerator;
use crate::catalog::genres::DEFAULT_GENRE;
use crate::catalog::CatalogFetch;
use crate::config::Config;
use crate::market::{RecordSet, Region, Source};
use async_trait::async_trait;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One way of obtaining records.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Which source this strategy reports as.
    fn source(&self) -> Source;

    /// Produces records for the plan, or explains why it could not.
    async fn acquire(
        &self,
        plan: &AcquisitionPlan,
        rng: &mut StdRng,
    ) -> Result<RecordSet, StrategyError>;
}

/// Immutable inputs for one acquisition run.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquisitionPlan {
    pub region: Region,
    pub genre: String,
    /// Ask the text model instead of scraping.
    pub use_ai: bool,
    /// Scrape the live catalog. Ignored when `use_ai` is set.
    pub use_live_data: bool,
    /// Upper bound on the primary strategy's run time.
    pub timeout: Duration,
}

impl AcquisitionPlan {
    pub fn from_config(config: &Config) -> Self {
        Self {
            region: config.region,
            genre: config.genre.clone(),
            use_ai: config.use_ai,
            use_live_data: config.use_live_data,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// The strategy tried before the static fallback, if any.
    pub fn primary(&self) -> Option<Source> {
        if self.use_ai {
            Some(Source::Ai)
        } else if self.use_live_data {
            Some(Source::LiveScrape)
        } else {
            None
        }
    }
}

impl Default for AcquisitionPlan {
    fn default() -> Self {
        Self {
            region: Region::default(),
            genre: DEFAULT_GENRE.to_string(),
            use_ai: false,
            use_live_data: true,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Records together with the strategy that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Acquired {
    pub records: RecordSet,
    pub source: Source,
}

#[derive(Debug)]
enum Stage {
    NotStarted,
    TryPrimary,
    TryFallback,
    Done(Acquired),
}

/// Runs at most one primary strategy, then the static fallback.
///
/// Records from different strategies are never mixed and a failed strategy
/// is never retried.
#[derive(Default)]
pub struct Acquisition<'a> {
    catalog: Option<&'a dyn CatalogFetch>,
    generator: Option<&'a dyn TextGenerator>,
}

impl<'a> Acquisition<'a> {
    pub fn new() -> Self {
        Self { catalog: None, generator: None }
    }

    /// Sets the catalog client used by the scrape strategy.
    pub fn with_catalog(mut self, catalog: &'a dyn CatalogFetch) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the text model used by the AI strategy.
    pub fn with_generator(mut self, generator: &'a dyn TextGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Acquires records for `plan`.
    pub async fn run(
        &self,
        plan: &AcquisitionPlan,
        rng: &mut StdRng,
    ) -> Result<Acquired, AcquireError> {
        let mut stage = Stage::NotStarted;

        loop {
            debug!("Acquisition stage: {:?}", stage);
            stage = match stage {
                Stage::NotStarted => Stage::TryPrimary,
                Stage::TryPrimary => match self.try_primary(plan, rng).await {
                    Some(acquired) => Stage::Done(acquired),
                    None => Stage::TryFallback,
                },
                Stage::TryFallback => {
                    let records = fallback::acquire(plan, rng);
                    if records.is_empty() {
                        return Err(AcquireError::Exhausted { genre: plan.genre.clone() });
                    }
                    Stage::Done(Acquired { records, source: Source::Static })
                }
                Stage::Done(acquired) => {
                    info!("Acquired {} records from {}", acquired.records.len(), acquired.source);
                    return Ok(acquired);
                }
            };
        }
    }

    async fn try_primary(&self, plan: &AcquisitionPlan, rng: &mut StdRng) -> Option<Acquired> {
        let strategy: Box<dyn Strategy + '_> = match plan.primary()? {
            Source::Ai => Box::new(AiStrategy::new(self.generator)),
            Source::LiveScrape => Box::new(ScrapeStrategy::new(self.catalog)),
            Source::Static => return None,
        };
        let source = strategy.source();

        let result = match tokio::time::timeout(plan.timeout, strategy.acquire(plan, rng)).await {
            Ok(result) => result,
            Err(_) => Err(StrategyError::Network(format!("timed out after {:?}", plan.timeout))),
        };

        match result {
            Ok(records) if !records.is_empty() => Some(Acquired { records, source }),
            Ok(_) => {
                warn!("{} returned no records; using static catalog", source);
                None
            }
            Err(e) => {
                warn!("{} failed ({}); using static catalog", source, e);
                None
            }
        }
    }
}
