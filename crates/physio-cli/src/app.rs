//! Application state and the user-facing flows.
//!
//! [`App`] owns the roster and the current screen. Every mutation builds the
//! next roster and screen, persists both in full, then swaps them in.

use eyre::{Result, eyre};
use jiff::Zoned;
use jiff::civil::Date;
use physio_core::audio;
use physio_core::models::clinician::Clinician;
use physio_core::models::log::{LogEdit, PainScore, SessionLog};
use physio_core::models::patient::Patient;
use physio_core::models::report::WeeklyReport;
use physio_core::progress::{self, ChartPoint};
use physio_core::roster::Roster;
use physio_core::router::Screen;
use physio_gateway::bedrock::BedrockModel;
use physio_gateway::gateway::AiGateway;
use physio_gateway::gemini::GeminiModel;
use physio_gateway::model::{AnyModel, GenerativeModel};
use physio_protocols::onboarding::{NewCaseDetails, OnboardingWizard};
use physio_protocols::registration::{self, RegistrationDetails, RegistrationOutcome};
use physio_protocols::{get_protocol, registry, seed};
use physio_sensor::feed::SessionSummary;
use physio_storage::backend::StorageBackend;
use physio_storage::client::build_client;
use physio_storage::store::SessionStore;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{PhysioConfig, ProviderConfig, StorageConfig};

/// Author used for reports when no clinician name is known.
pub const DEFAULT_REPORT_AUTHOR: &str = "Physiotherapist";
/// Author used for new cases when no clinician name is known.
pub const DEFAULT_CASE_CLINICIAN: &str = "Clinician";
pub const DEFAULT_LOG_NOTE: &str = "Patient self-logged session via mobile app";
pub const UNKNOWN_PROTOCOL_MESSAGE: &str =
    "Error: Selected injury protocol configuration not found.";
/// How much of the discharge report goes into the email preview.
pub const DISCHARGE_PREVIEW_CHARS: usize = 150;

/// Placeholder clip and transcript for machines without a microphone.
pub const DEMO_VOICE_NOTE: &str =
    "data:audio/wav;base64,UklGRiQAAABXQVZFZm10IBAAAAABAAEAQB8AAEAfAAABAAgAZGF0YQAAAAA=";
pub const DEMO_VOICE_ANALYSIS: &str = "Transcription: [Demo Audio] I felt a slight twinge in my \
     wrist today, but overall mobility is better. | Keywords: twinge, better, mobility";

pub struct App<M> {
    store: SessionStore,
    gateway: AiGateway<M>,
    roster: Roster,
    screen: Screen,
}

/// A voice note attached to a log entry.
#[derive(Debug, Clone)]
pub enum VoiceNote {
    /// Raw audio to encode and transcribe.
    Recording { mime: String, bytes: Vec<u8> },
    /// The canned demo clip with its canned transcript.
    Demo,
}

#[derive(Debug, Clone)]
pub struct LogSubmission {
    pub pain_score: PainScore,
    pub note: Option<String>,
    pub voice_note: Option<VoiceNote>,
}

#[derive(Debug, Clone)]
pub struct Discharge {
    pub email: String,
    pub report: String,
}

impl Discharge {
    /// The first characters of the report, as sent in the notification email.
    pub fn preview(&self) -> String {
        self.report.chars().take(DISCHARGE_PREVIEW_CHARS).collect()
    }
}

impl App<AnyModel> {
    /// Build storage and the model backend from configuration, then load state.
    pub async fn open(config: &PhysioConfig) -> Result<Self> {
        let backend = match &config.storage {
            StorageConfig::Local { dir } => StorageBackend::local(dir),
            StorageConfig::Session => StorageBackend::session(),
            StorageConfig::S3 {
                region,
                bucket,
                prefix,
            } => StorageBackend::s3(build_client(region).await, bucket, prefix),
        };

        let model = match &config.provider {
            ProviderConfig::Gemini { model, .. } => AnyModel::Gemini(
                GeminiModel::new(model, config.gemini_api_key()).with_timeout(config.timeout()),
            ),
            ProviderConfig::Bedrock { region, model_id } => {
                AnyModel::Bedrock(BedrockModel::from_region(region, model_id).await)
            }
        };

        let gateway = AiGateway::new(model).with_timeout(config.timeout());
        Ok(Self::load(SessionStore::new(backend), gateway).await)
    }
}

impl<M: GenerativeModel> App<M> {
    /// Load the roster (seeding it if nothing usable is stored) and the screen.
    pub async fn load(store: SessionStore, gateway: AiGateway<M>) -> Self {
        let roster = store.load_roster(seed::seed_roster).await;
        let mut screen = store.load_screen().await;

        // A screen pointing at a patient who no longer exists is stale.
        let dangling = screen
            .patient_id()
            .or(screen.selected_patient_id())
            .is_some_and(|id| roster.get(id).is_none());
        if dangling {
            warn!(screen = screen.name(), "stored screen references a missing patient");
            screen = screen.reset();
        }

        Self {
            store,
            gateway,
            roster,
            screen,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn gateway(&self) -> &AiGateway<M> {
        &self.gateway
    }

    /// Persist, then adopt, each half in turn; a failed write leaves that
    /// half as it was.
    async fn commit(&mut self, roster: Roster, screen: Screen) -> Result<()> {
        self.store.save_roster(&roster).await?;
        self.roster = roster;
        self.store.save_screen(&screen).await?;
        self.screen = screen;
        Ok(())
    }

    // -- View routing ------------------------------------------------------

    pub async fn register(&mut self, details: RegistrationDetails) -> Result<RegistrationOutcome> {
        let screen = self.screen.clone().begin_registration()?;
        let (roster, screen, outcome) =
            registration::register_patient(self.roster.clone(), screen, details)?;
        self.commit(roster, screen).await?;
        Ok(outcome)
    }

    pub async fn login(&mut self, license_id: &str) -> Result<Clinician> {
        let screen = self.screen.clone().begin_clinician_login()?;
        let clinician = registry::verify_license(license_id)?;
        let first = self.roster.first().map(|p| p.id.clone());
        let screen = screen.enter_clinician_view(clinician.clone(), first)?;
        self.commit(self.roster.clone(), screen).await?;
        info!(clinician_id = %clinician.id, "clinician signed in");
        Ok(clinician)
    }

    pub async fn logout(&mut self) -> Result<()> {
        let screen = self.screen.clone().reset();
        self.commit(self.roster.clone(), screen).await
    }

    /// Wipe stored state; the next load starts from the seed roster.
    pub async fn reset_storage(&mut self) -> Result<()> {
        self.store.clear().await?;
        self.roster = seed::seed_roster();
        self.screen = Screen::default();
        info!("stored state cleared");
        Ok(())
    }

    // -- Patient view ------------------------------------------------------

    pub fn current_patient(&self) -> Result<&Patient> {
        let id = self
            .screen
            .patient_id()
            .ok_or_else(|| eyre!("not signed in as a patient (run `physio register`)"))?;
        Ok(self.roster.require(id)?)
    }

    pub async fn motivation(&self) -> Result<String> {
        let patient = self.current_patient()?;
        Ok(self.gateway.compose_motivation(patient).await)
    }

    /// Append a log for the finished session. Never replaces existing logs.
    pub async fn submit_log(
        &mut self,
        session: &SessionSummary,
        submission: LogSubmission,
        today: Date,
    ) -> Result<SessionLog> {
        let patient_id = self.current_patient()?.id.clone();

        let (voice_note, voice_analysis) = match submission.voice_note {
            Some(VoiceNote::Recording { mime, bytes }) => {
                let uri = audio::to_data_uri(&mime, &bytes);
                let analysis = self.gateway.transcribe_voice_note(&uri).await;
                (Some(uri), Some(analysis))
            }
            Some(VoiceNote::Demo) => (
                Some(DEMO_VOICE_NOTE.to_string()),
                Some(DEMO_VOICE_ANALYSIS.to_string()),
            ),
            None => (None, None),
        };

        let log = SessionLog {
            id: format!("l{}", Uuid::new_v4().simple()),
            date: today,
            pain_score: submission.pain_score,
            max_rom: session.peak_rom,
            reps_completed: session.reps,
            notes: submission.note.filter(|n| !n.trim().is_empty()),
            voice_note,
            voice_analysis,
        };

        let roster = self.roster.clone().with_log_appended(&patient_id, log.clone())?;
        self.commit(roster, self.screen.clone()).await?;
        Ok(log)
    }

    /// Produce the discharge report, clear the case and sign out.
    pub async fn discharge(&mut self) -> Result<Discharge> {
        let patient = self.current_patient()?;
        let patient_id = patient.id.clone();
        let email = patient.email.clone();

        let report = self.gateway.compose_discharge_report(patient).await;
        info!(patient_id = %patient_id, email = %email, "discharge report emailed");
        debug!(report = %report, "full discharge report");

        let roster = self.roster.clone().with_patient_discharged(&patient_id)?;
        let screen = self.screen.clone().reset();
        self.commit(roster, screen).await?;

        Ok(Discharge { email, report })
    }

    // -- Clinician console -------------------------------------------------

    pub fn current_clinician(&self) -> Result<&Clinician> {
        self.screen
            .clinician()
            .ok_or_else(|| eyre!("not signed in as a clinician (run `physio login`)"))
    }

    pub fn selected_patient(&self) -> Result<&Patient> {
        self.current_clinician()?;
        let id = self
            .screen
            .selected_patient_id()
            .ok_or_else(|| eyre!("no patient selected"))?;
        Ok(self.roster.require(id)?)
    }

    pub async fn select_patient(&mut self, patient_id: &str) -> Result<&Patient> {
        self.roster.require(patient_id)?;
        let screen = self.screen.clone().select_patient(patient_id)?;
        self.commit(self.roster.clone(), screen).await?;
        self.selected_patient()
    }

    pub fn chart(&self) -> Result<Vec<ChartPoint>> {
        Ok(progress::chart_points(self.selected_patient()?))
    }

    pub async fn edit_log(&mut self, log_id: &str, edit: LogEdit) -> Result<()> {
        let patient_id = self.selected_patient()?.id.clone();
        let roster = self.roster.clone().with_log_edited(&patient_id, log_id, edit)?;
        self.commit(roster, self.screen.clone()).await
    }

    pub fn suggested_report_title(&self) -> Result<String> {
        Ok(progress::suggested_report_title(self.selected_patient()?))
    }

    pub async fn add_report(
        &mut self,
        title: Option<String>,
        content: &str,
        today: Date,
    ) -> Result<WeeklyReport> {
        let patient = self.selected_patient()?;
        let patient_id = patient.id.clone();
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| progress::suggested_report_title(patient));
        let physio_name = self
            .screen
            .clinician()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| DEFAULT_REPORT_AUTHOR.to_string());

        let report = WeeklyReport {
            id: format!("r{}", Uuid::new_v4().simple()),
            date: today,
            title,
            content: content.to_string(),
            physio_name,
        };
        let roster = self
            .roster
            .clone()
            .with_report_appended(&patient_id, report.clone())?;
        self.commit(roster, self.screen.clone()).await?;
        Ok(report)
    }

    pub async fn analyze(&self) -> Result<String> {
        let patient = self.selected_patient()?;
        Ok(self.gateway.summarize_progress(patient).await)
    }

    /// Predict recovery against `protocol_id`, or the patient's own protocol.
    pub async fn predict(&self, protocol_id: Option<&str>) -> Result<String> {
        let patient = self.selected_patient()?;
        let protocol_id = protocol_id.unwrap_or(&patient.injury_type);
        match get_protocol(protocol_id) {
            Some(protocol) => Ok(self
                .gateway
                .predict_recovery(patient, protocol.profile())
                .await),
            None => {
                warn!(protocol_id, "prediction requested for unknown protocol");
                Ok(UNKNOWN_PROTOCOL_MESSAGE.to_string())
            }
        }
    }

    /// Run the onboarding wizard end to end and select the new case.
    pub async fn create_case(
        &mut self,
        phone: &str,
        otp: &str,
        details: NewCaseDetails,
        today: Date,
    ) -> Result<Patient> {
        let clinician_name = self.current_clinician()?.name.clone();
        let clinician_name = if clinician_name.trim().is_empty() {
            DEFAULT_CASE_CLINICIAN.to_string()
        } else {
            clinician_name
        };

        let patient = OnboardingWizard::default()
            .send_otp(phone)?
            .verify_otp(otp)?
            .create_case(details, &clinician_name, today)?;

        let roster = self.roster.clone().with_new_patient(patient.clone())?;
        let screen = self.screen.clone().select_patient(patient.id.clone())?;
        self.commit(roster, screen).await?;
        Ok(patient)
    }
}

/// Today in the local time zone.
pub fn today() -> Date {
    Zoned::now().date()
}
