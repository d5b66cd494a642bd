//! physio-gateway
//!
//! The External AI Gateway: prompt templates over patient data, a
//! [`model::GenerativeModel`] seam with Gemini and Bedrock backends, and
//! [`gateway::AiGateway`], which turns every model failure into a fixed
//! fallback string.

pub mod bedrock;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod model;
pub mod prompts;
