use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("content not supported by {model}: {reason}")]
    UnsupportedContent { model: String, reason: String },

    #[error("gateway config error: {0}")]
    Config(String),
}
