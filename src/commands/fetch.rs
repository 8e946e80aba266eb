//! Fetch command: acquire records, analyze them, print and optionally export.

use crate::acquire::{Acquisition, AcquisitionPlan};
use crate::ai::GeminiClient;
use crate::analytics::summarize;
use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::format::{export, Formatter, Report};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, warn};

/// Runs one acquisition pipeline for the configured region and genre.
pub struct FetchCommand {
    config: Config,
    export_dir: Option<PathBuf>,
}

impl FetchCommand {
    /// Creates a new fetch command.
    pub fn new(config: Config) -> Self {
        Self { config, export_dir: None }
    }

    /// Also writes the records as CSV into `dir`.
    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = Some(dir);
        self
    }

    /// Executes the fetch with live clients and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let catalog = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        let generator = if self.config.use_ai {
            match GeminiClient::new(&self.config) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("AI pricing unavailable: {:#}", e);
                    None
                }
            }
        } else {
            None
        };

        let mut acquisition = Acquisition::new().with_catalog(&catalog);
        if let Some(generator) = &generator {
            acquisition = acquisition.with_generator(generator);
        }

        let mut rng = self.rng();
        self.execute_with(&acquisition, &mut rng).await
    }

    /// Executes the fetch with the provided acquisition (for testing).
    pub async fn execute_with(
        &self,
        acquisition: &Acquisition<'_>,
        rng: &mut StdRng,
    ) -> Result<String> {
        let report = self.report_with(acquisition, rng).await?;

        if let Some(dir) = &self.export_dir {
            export::write_csv(dir, report.region, &report.genre, &report.records)?;
        }

        Ok(Formatter::new(self.config.format).format_report(&report))
    }

    /// Runs acquisition and analytics without formatting.
    pub async fn report_with(
        &self,
        acquisition: &Acquisition<'_>,
        rng: &mut StdRng,
    ) -> Result<Report> {
        let plan = AcquisitionPlan::from_config(&self.config);
        info!("Fetching {} books for {}", plan.genre, plan.region.name());

        let acquired = acquisition.run(&plan, rng).await?;
        let summary = summarize(&acquired.records, self.config.value_analysis, rng);

        Ok(Report {
            region: plan.region,
            genre: plan.genre,
            source: acquired.source,
            records: acquired.records,
            summary,
        })
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
