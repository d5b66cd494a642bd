//! AWS Bedrock backend via the Converse API.
//!
//! Converse carries text and documents but not audio, so requests with
//! inline audio are rejected before any call is made.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};
use tracing::info;

use crate::error::GatewayError;
use crate::model::{GenerateRequest, GenerativeModel};

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

pub struct BedrockModel {
    client: Client,
    model_id: String,
}

impl BedrockModel {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Build a client from the default credential chain for `region`.
    pub async fn from_region(region: &str, model_id: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&config), model_id)
    }
}

impl GenerativeModel for BedrockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        if let Some(inline) = &request.inline_data {
            return Err(GatewayError::UnsupportedContent {
                model: self.model_id.clone(),
                reason: format!("inline {} is not accepted by Converse", inline.mime_type),
            });
        }

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.prompt.clone()))
            .build()
            .map_err(|e| GatewayError::Invocation(e.to_string()))?;

        let mut converse = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message);
        if let Some(temperature) = request.temperature {
            converse = converse
                .inference_config(InferenceConfiguration::builder().temperature(temperature).build());
        }

        let response = converse
            .send()
            .await
            .map_err(|e| GatewayError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| GatewayError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        info!(model = %self.model_id, chars = text.len(), "converse complete");
        Ok(text)
    }
}
