//! Short creative "muse" replies generated by Gemini.
//!
//! Failures never surface as errors: every path ends in some text the page
//! can show.

use serde::{Deserialize, Serialize};

use crate::config::MuseConfig;

pub const MISSING_KEY_TEXT: &str = "Please configure your API Key to hear the muse's whispers.";
pub const SILENT_TEXT: &str = "The muse is silent at the moment. Try again.";
pub const API_ERROR_TEXT: &str = "The wind is too strong to hear the muse right now. (API Error)";

#[derive(Debug, Clone)]
pub struct MuseClient {
    http: reqwest::Client,
    config: MuseConfig,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [GenerateContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct GenerateContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

fn build_prompt(topic: &str) -> String {
    format!(
        "You are a digital muse for a creative developer named \"Eververdants\".\nThe user has \
         given you a topic: \"{topic}\".\n\nGenerate a short, poetic, and inspiring thought (max \
         50 words) that connects this topic to nature, growth, coding, or creativity.\nThe tone \
         should be ethereal, encouraging, and wise.\nDo not use markdown formatting. Just plain \
         text."
    )
}

impl MuseClient {
    pub fn new(config: MuseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Returns a short thought about `topic`.
    pub async fn inspire(&self, topic: &str) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return MISSING_KEY_TEXT.to_string();
        };

        match self.generate(api_key, topic).await {
            Ok(Some(text)) => text,
            Ok(None) => SILENT_TEXT.to_string(),
            Err(err) => {
                tracing::error!(error = %err, "muse generation failed");
                API_ERROR_TEXT.to_string()
            },
        }
    }

    async fn generate(&self, api_key: &str, topic: &str) -> reqwest::Result<Option<String>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        );
        let prompt = build_prompt(topic);
        let request = GenerateRequest {
            contents: [GenerateContent {
                parts: [RequestPart {
                    text: &prompt,
                }],
            }],
        };

        let response: GenerateResponse = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.text())
    }
}
