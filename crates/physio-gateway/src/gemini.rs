//! Google Generative Language API backend.
//!
//! Calls `POST {base}/v1beta/models/{model}:generateContent` with the prompt
//! (and optional inline audio) as the parts of a single user turn. `ureq` is
//! blocking, so each call runs on the blocking thread pool. The agent carries
//! its own global timeout so a stalled call cannot pin a blocking thread.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::GatewayError;
use crate::gateway::DEFAULT_TIMEOUT;
use crate::model::{GenerateRequest, GenerativeModel};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct GeminiModel {
    agent: ureq::Agent,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiModel {
    pub fn new(model: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            agent: agent_with_timeout(DEFAULT_TIMEOUT),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Point at a different endpoint (e.g. a local proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bound each HTTP call, connect through body read, by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = agent_with_timeout(timeout);
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn agent_with_timeout(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

/// Build the `generateContent` request body.
pub fn request_body(request: &GenerateRequest) -> serde_json::Value {
    let mut parts = Vec::new();
    if let Some(inline) = &request.inline_data {
        parts.push(json!({
            "inlineData": { "mimeType": inline.mime_type, "data": inline.data }
        }));
    }
    parts.push(json!({ "text": request.prompt }));

    let mut body = json!({ "contents": [{ "role": "user", "parts": parts }] });
    if let Some(temperature) = request.temperature {
        body["generationConfig"] = json!({ "temperature": temperature });
    }
    body
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate. Empty when the model
    /// returned no text.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

impl GenerativeModel for GeminiModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| GatewayError::Config("API Key not found".to_string()))?;
        let agent = self.agent.clone();
        let url = self.endpoint();
        let body = request_body(request);

        debug!(model = %self.model, has_audio = request.inline_data.is_some(), "calling generateContent");

        let text = tokio::task::spawn_blocking(move || -> Result<String, GatewayError> {
            let mut response = agent
                .post(&url)
                .header("x-goog-api-key", api_key.as_str())
                .send_json(&body)
                .map_err(|e| GatewayError::Invocation(e.to_string()))?;
            let parsed: GenerateContentResponse = response
                .body_mut()
                .read_json()
                .map_err(|e| GatewayError::ResponseParse(e.to_string()))?;
            Ok(parsed.text())
        })
        .await
        .map_err(|e| GatewayError::Invocation(e.to_string()))??;

        info!(model = %self.model, chars = text.len(), "generateContent complete");
        Ok(text)
    }
}
