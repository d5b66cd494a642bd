//! Capability methods over a [`GenerativeModel`].
//!
//! Every method returns display-ready text. A model error, an empty
//! response or a timeout each map to a fixed string, so callers never see a
//! [`GatewayError`].

use std::time::Duration;

use physio_core::audio::{DEFAULT_AUDIO_MIME, strip_audio_prefix};
use physio_core::models::injury::InjuryProfile;
use physio_core::models::patient::Patient;
use tracing::{error, info, warn};

use crate::error::GatewayError;
use crate::model::{GenerateRequest, GenerativeModel, InlineData};
use crate::prompts;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The five things the gateway can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ProgressSummary,
    RecoveryPrediction,
    Motivation,
    DischargeReport,
    VoiceNote,
}

impl Capability {
    pub fn name(self) -> &'static str {
        match self {
            Capability::ProgressSummary => "progress_summary",
            Capability::RecoveryPrediction => "recovery_prediction",
            Capability::Motivation => "motivation",
            Capability::DischargeReport => "discharge_report",
            Capability::VoiceNote => "voice_note",
        }
    }

    /// Sampling temperature; `None` keeps the model default.
    pub fn temperature(self) -> Option<f32> {
        match self {
            Capability::ProgressSummary => Some(0.3),
            Capability::RecoveryPrediction => Some(0.4),
            Capability::Motivation | Capability::DischargeReport => Some(0.7),
            Capability::VoiceNote => None,
        }
    }

    /// Shown when the model answers with no text.
    pub fn empty_fallback(self) -> &'static str {
        match self {
            Capability::ProgressSummary => "Unable to generate analysis at this time.",
            Capability::RecoveryPrediction => "Prediction unavailable.",
            Capability::Motivation => "Keep pushing forward! Consistency is key to recovery.",
            Capability::DischargeReport => "Discharge summary generated.",
            Capability::VoiceNote => "Audio analysis unavailable.",
        }
    }

    /// Shown when the call fails or times out.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Capability::ProgressSummary => "Error generating analysis.",
            Capability::RecoveryPrediction => "System error: Unable to compute prediction.",
            Capability::Motivation => {
                "Recovery takes time, but every rep counts. You're doing great!"
            }
            Capability::DischargeReport => "Error generating discharge report.",
            Capability::VoiceNote => "Error analyzing voice note.",
        }
    }
}

pub struct AiGateway<M> {
    model: M,
    timeout: Duration,
}

impl<M: GenerativeModel> AiGateway<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub async fn summarize_progress(&self, patient: &Patient) -> String {
        let prompt = prompts::progress_summary(patient);
        self.complete(Capability::ProgressSummary, prompt, None).await
    }

    pub async fn predict_recovery(&self, patient: &Patient, profile: &InjuryProfile) -> String {
        let prompt = prompts::recovery_prediction(patient, profile);
        self.complete(Capability::RecoveryPrediction, prompt, None)
            .await
    }

    pub async fn compose_motivation(&self, patient: &Patient) -> String {
        let prompt = prompts::motivation(patient);
        self.complete(Capability::Motivation, prompt, None).await
    }

    pub async fn compose_discharge_report(&self, patient: &Patient) -> String {
        let prompt = prompts::discharge_report(patient);
        self.complete(Capability::DischargeReport, prompt, None).await
    }

    /// Transcribe a recorded voice note given as a base64 `data:` URI (or a
    /// bare base64 payload).
    pub async fn transcribe_voice_note(&self, audio: &str) -> String {
        let inline = InlineData {
            mime_type: DEFAULT_AUDIO_MIME.to_string(),
            data: strip_audio_prefix(audio).to_string(),
        };
        self.complete(
            Capability::VoiceNote,
            prompts::VOICE_NOTE_INSTRUCTIONS.to_string(),
            Some(inline),
        )
        .await
    }

    async fn complete(
        &self,
        capability: Capability,
        prompt: String,
        inline_data: Option<InlineData>,
    ) -> String {
        let request = GenerateRequest {
            prompt,
            inline_data,
            temperature: capability.temperature(),
        };
        let model = self.model.model_id();

        match tokio::time::timeout(self.timeout, self.model.generate(&request)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                info!(capability = capability.name(), model, "model response received");
                text
            }
            Ok(Ok(_)) => {
                warn!(capability = capability.name(), model, "model returned no text");
                capability.empty_fallback().to_string()
            }
            Ok(Err(e)) => {
                error!(capability = capability.name(), model, error = %e, "model call failed");
                capability.failure_fallback().to_string()
            }
            Err(_) => {
                let e = GatewayError::Timeout(self.timeout);
                error!(capability = capability.name(), model, error = %e, "model call failed");
                capability.failure_fallback().to_string()
            }
        }
    }
}
