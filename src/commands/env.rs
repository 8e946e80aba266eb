//! Env command: reports whether the runtime environment is ready for a fetch.

use crate::config::Config;
use std::path::Path;

/// Characters of the API key shown in the report.
const KEY_PREVIEW_CHARS: usize = 4;

/// Checks credentials and configuration without touching the network.
pub struct EnvCommand {
    config: Config,
}

impl EnvCommand {
    /// Creates a new env command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the report. Never prints more than the first few key characters.
    pub fn execute(&self) -> String {
        let mut lines = Vec::new();

        match std::env::current_dir() {
            Ok(dir) => lines.push(format!("Current directory: {}", dir.display())),
            Err(e) => lines.push(format!("Current directory: unavailable ({})", e)),
        }

        let local = Path::new("bookscope.toml");
        if local.exists() {
            lines.push("Config file:       bookscope.toml found".to_string());
        } else {
            lines.push("Config file:       no bookscope.toml in this directory".to_string());
        }

        lines.push(key_status(self.config.gemini_api_key.as_deref()));
        lines.push(format!("Gemini model:      {}", self.config.gemini_model));
        lines.push(format!("Catalog URL:       {}", self.config.catalog_url));
        lines.push(format!("Default region:    {}", self.config.region.name()));

        lines.join("\n")
    }
}

fn key_status(key: Option<&str>) -> String {
    match key.map(str::trim).filter(|k| !k.is_empty()) {
        Some(key) => {
            let preview: String = key.chars().take(KEY_PREVIEW_CHARS).collect();
            format!("GEMINI_API_KEY:    set (starts with {}...)", preview)
        }
        None => "GEMINI_API_KEY:    missing; AI pricing will fall back to the static catalog"
            .to_string(),
    }
}
