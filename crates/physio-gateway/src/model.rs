use std::future::Future;

use crate::bedrock::BedrockModel;
use crate::error::GatewayError;
use crate::gemini::GeminiModel;

/// Base64 media sent alongside the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 payload with no `data:` prefix.
    pub data: String,
}

/// One single-turn generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub inline_data: Option<InlineData>,
    /// `None` leaves the model's default in place.
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    pub fn text(prompt: String, temperature: f32) -> Self {
        Self {
            prompt,
            inline_data: None,
            temperature: Some(temperature),
        }
    }
}

/// A hosted model that turns a prompt into free text.
///
/// Implementations make exactly one attempt per call. Timeouts and fallbacks
/// belong to [`crate::gateway::AiGateway`].
pub trait GenerativeModel: Send + Sync {
    fn model_id(&self) -> &str;

    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// Backend chosen at runtime from configuration.
pub enum AnyModel {
    Gemini(GeminiModel),
    Bedrock(BedrockModel),
}

impl GenerativeModel for AnyModel {
    fn model_id(&self) -> &str {
        match self {
            AnyModel::Gemini(m) => m.model_id(),
            AnyModel::Bedrock(m) => m.model_id(),
        }
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        match self {
            AnyModel::Gemini(m) => m.generate(request).await,
            AnyModel::Bedrock(m) => m.generate(request).await,
        }
    }
}
