//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::catalog::genres::DEFAULT_GENRE;
use crate::market::Region;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Market to price and link for
    #[serde(default)]
    pub region: Region,

    /// Book genre to look up
    #[serde(default = "default_genre")]
    pub genre: String,

    /// Ask the text model for prices instead of scraping
    #[serde(default)]
    pub use_ai: bool,

    /// Scrape the live catalog (when not using the model)
    #[serde(default = "default_true")]
    pub use_live_data: bool,

    /// Compute best-value picks
    #[serde(default = "default_true")]
    pub value_analysis: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Catalog site base URL
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Gemini API key. Read from config or GEMINI_API_KEY; never written back out.
    #[serde(default, skip_serializing)]
    pub gemini_api_key: Option<String>,

    /// Network timeout in seconds for the live strategies
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Seed for reproducible ratings, prices and projections
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_catalog_url() -> String {
    "http://books.toscrape.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: Region::In,
            genre: default_genre(),
            use_ai: false,
            use_live_data: true,
            value_analysis: true,
            format: OutputFormat::Table,
            catalog_url: default_catalog_url(),
            gemini_model: default_gemini_model(),
            gemini_api_key: None,
            timeout_secs: default_timeout_secs(),
            seed: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("bookscope.toml");
        if local_config.exists() {
            debug!("Found bookscope.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("bookscope").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides. Unknown region labels fall
    /// back to the default region; unparseable numbers are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(region) = std::env::var("BOOKSCOPE_REGION") {
            self.region = Region::resolve(&region);
        }

        if let Ok(genre) = std::env::var("BOOKSCOPE_GENRE") {
            if !genre.trim().is_empty() {
                self.genre = genre;
            }
        }

        if let Ok(timeout) = std::env::var("BOOKSCOPE_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Ok(url) = std::env::var("BOOKSCOPE_CATALOG_URL") {
            self.catalog_url = url;
        }

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }

        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            self.gemini_model = model;
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
