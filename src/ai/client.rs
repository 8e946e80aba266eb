//! Text generation client for the Gemini `generateContent` API.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com";

/// Generates free text from a prompt - a trait so tests can script replies.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the model's raw completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini REST client. The API key comes from configuration, never source.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Creates a client from configuration. Fails when no API key is set.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, GEMINI_BASE.to_string())
    }

    /// Creates a client against a custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self> {
        let api_key = config
            .gemini_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .context("GEMINI_API_KEY is not set")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build Gemini HTTP client")?;

        Ok(Self { client, base_url, model: config.gemini_model.clone(), api_key })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = serde_json::to_string(&GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
        })?;

        info!("Querying {} for market prices", self.model);
        debug!("POST {}", self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.api_key.as_str())
            .body(body)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Gemini returned status: {}", status);
        }

        let text = response.text().await.context("Failed to read response body")?;
        extract_text(&text)
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String> {
    let response: GenerateResponse =
        serde_json::from_str(body).context("Unexpected Gemini response shape")?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        anyhow::bail!("Gemini response contained no text");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_test_config() -> Config {
        Config {
            gemini_api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..Config::default()
        }
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"[{\"Title\""},{"text":":\"X\"}]"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), r#"[{"Title":"X"}]"#);
    }

    #[test]
    fn test_extract_text_no_candidates() {
        assert!(extract_text(r#"{"candidates":[]}"#).is_err());
        assert!(extract_text(r#"{}"#).is_err());
        assert!(extract_text("not json").is_err());
    }

    #[tokio::test]
    async fn test_new_requires_api_key() {
        let config = Config::default();
        let err = GeminiClient::new(&config).err().unwrap();
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        let config = Config { gemini_api_key: Some("  ".to_string()), ..Config::default() };
        assert!(GeminiClient::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_string_contains("list books"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"candidates":[{"content":{"parts":[{"text":"hello"}],"role":"model"}}]}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&make_test_config(), mock_server.uri()).unwrap();
        let text = client.generate("please list books").await.unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_generate_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url(&make_test_config(), mock_server.uri()).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("403"));
    }
}
