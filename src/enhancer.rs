// src/enhancer.rs
//! AI content enhancement via the Gemini generateContent endpoint.
//!
//! Enhancement is strictly best-effort: whatever goes wrong (no credential,
//! transport error, bad status, unusable response body) the caller gets the
//! original text back and the pipeline carries on.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for the content enhancer, loaded once by the entry point
/// and injected. A missing API key is not an error: the enhancer then
/// degrades to pass-through.
#[derive(Debug, Clone)]
pub struct EnhancerConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl EnhancerConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let api_url =
            std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            api_url,
            model,
        }
    }
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Which field is being rewritten; only used for the diagnostic logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    ProfessionalSummary,
    JobDescription,
    Skills,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::ProfessionalSummary => "professional_summary",
            ContentType::JobDescription => "job_description",
            ContentType::Skills => "skills",
        }
    }
}

/// Outcome of one enhancement attempt.
///
/// `Original` keeps the reason the text came back untouched, so callers can
/// tell "the AI failed" apart from "the AI returned the same text".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enhancement {
    Enhanced(String),
    Original { text: String, reason: String },
}

impl Enhancement {
    pub fn into_text(self) -> String {
        match self {
            Enhancement::Enhanced(text) => text,
            Enhancement::Original { text, .. } => text,
        }
    }

    pub fn is_enhanced(&self) -> bool {
        matches!(self, Enhancement::Enhanced(_))
    }
}

/// Seam for substituting the enhancer in tests.
#[async_trait]
pub trait Enhance: Send + Sync {
    async fn enhance(&self, text: &str, content_type: ContentType) -> Enhancement;
}

pub struct ContentEnhancer {
    client: reqwest::Client,
    config: EnhancerConfig,
}

impl ContentEnhancer {
    pub fn new(config: EnhancerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    async fn request_completion(&self, api_key: &str, content: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: build_prompt(content),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned error {}: {}", status, error_text);
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = first_candidate_text(&completion)
            .context("Gemini API response contained no text candidate")?;

        Ok(text)
    }
}

#[async_trait]
impl Enhance for ContentEnhancer {
    async fn enhance(&self, text: &str, content_type: ContentType) -> Enhancement {
        if text.trim().is_empty() {
            return Enhancement::Original {
                text: text.to_string(),
                reason: "empty input".to_string(),
            };
        }

        let Some(api_key) = self.config.api_key.as_deref() else {
            info!(
                "No API key configured, skipping enhancement for {}",
                content_type.as_str()
            );
            return Enhancement::Original {
                text: text.to_string(),
                reason: "no API key configured".to_string(),
            };
        };

        match self.request_completion(api_key, text).await {
            Ok(enhanced) if !enhanced.trim().is_empty() => {
                info!("Enhanced {} content", content_type.as_str());
                Enhancement::Enhanced(enhanced.trim().to_string())
            }
            Ok(_) => {
                warn!(
                    "Empty completion for {}, keeping original text",
                    content_type.as_str()
                );
                Enhancement::Original {
                    text: text.to_string(),
                    reason: "empty completion".to_string(),
                }
            }
            Err(e) => {
                warn!(
                    "Enhancement failed for {}, keeping original text: {}",
                    content_type.as_str(),
                    e
                );
                Enhancement::Original {
                    text: text.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn build_prompt(content: &str) -> String {
    format!(
        "Improve this text by fixing spelling errors and making it more professional: {}",
        content
    )
}

// ===== Gemini generateContent wire types =====

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn first_candidate_text(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .as_ref()?
        .iter()
        .find_map(|part| part.text.clone())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passthrough_enhancer() -> ContentEnhancer {
        ContentEnhancer::new(EnhancerConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_input_short_circuits() {
        let enhancer = passthrough_enhancer();
        let outcome = enhancer.enhance("   ", ContentType::Skills).await;
        assert_eq!(
            outcome,
            Enhancement::Original {
                text: "   ".to_string(),
                reason: "empty input".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_returns_original() {
        let enhancer = passthrough_enhancer();
        let text = "I have experiance in Python programming";
        let outcome = enhancer
            .enhance(text, ContentType::ProfessionalSummary)
            .await;
        assert!(!outcome.is_enhanced());
        assert_eq!(outcome.into_text(), text);
    }

    #[test]
    fn test_prompt_embeds_content() {
        let prompt = build_prompt("my summary");
        assert!(prompt.ends_with("my summary"));
        assert!(prompt.starts_with("Improve this text"));
    }

    #[test]
    fn test_first_candidate_text_extraction() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Polished text."}]}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            first_candidate_text(&response),
            Some("Polished text.".to_string())
        );
    }

    #[test]
    fn test_first_candidate_text_handles_empty_response() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(first_candidate_text(&empty), None);

        let no_parts: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {}}]}"#).unwrap();
        assert_eq!(first_candidate_text(&no_parts), None);
    }
}
