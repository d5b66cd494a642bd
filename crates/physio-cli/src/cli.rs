use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `physio` binary.
#[derive(Debug, Parser)]
#[command(
    name = "physio",
    version,
    about = "Physiotherapy recovery tracking with AI-assisted progress reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register as a patient, or sign in if the email is already known.
    Register(RegisterArgs),
    /// Sign in as a clinician with a medical licence id.
    Login(LoginArgs),
    /// Sign out and return to the landing screen.
    Logout,
    /// Show who is signed in.
    Whoami,
    /// List the available injury protocols.
    Protocols,
    /// Patient portal.
    Patient {
        #[command(subcommand)]
        action: PatientCommands,
    },
    /// Clinician console.
    Clinician {
        #[command(subcommand)]
        action: ClinicianCommands,
    },
    /// Inspect or write the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Delete all stored data; the next run starts from the demo roster.
    Reset {
        /// Confirm the wipe.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Age in years.
    #[arg(long, default_value = "")]
    pub age: String,
    /// Name of the treating physiotherapist.
    #[arg(long)]
    pub physio: String,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Medical licence id, e.g. PT-88321.
    #[arg(long)]
    pub license: String,
}

#[derive(Debug, Subcommand)]
pub enum PatientCommands {
    /// Show the prescribed exercise plan.
    Exercises,
    /// Show a personalised motivation message.
    Motivate,
    /// Run a tracked exercise session and log it.
    Session(SessionArgs),
    /// Show clinician reports, newest first.
    Reports,
    /// Finish the recovery journey: email the discharge report and clear logs.
    Discharge {
        /// Confirm the discharge.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Exercise id; defaults to the first prescribed exercise.
    #[arg(long)]
    pub exercise: Option<String>,
    /// Pain score for the session, 0-10.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub pain: u8,
    /// Free-text note for the clinician.
    #[arg(long)]
    pub note: Option<String>,
    /// Audio file to attach and transcribe.
    #[arg(long, conflicts_with = "demo_voice")]
    pub voice_note: Option<PathBuf>,
    /// Attach the built-in demo voice note instead of a recording.
    #[arg(long)]
    pub demo_voice: bool,
    /// Milliseconds between sensor ticks.
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
}

#[derive(Debug, Subcommand)]
pub enum ClinicianCommands {
    /// List patients on the roster.
    Patients,
    /// Select the patient the other commands act on.
    Select {
        patient_id: String,
    },
    /// Show the selected patient's profile and recent logs.
    Show,
    /// Print logged ROM against the weekly benchmark.
    Chart,
    /// Correct ROM and pain on one log entry.
    EditLog(EditLogArgs),
    /// Add a weekly report for the selected patient.
    Report(ReportArgs),
    /// AI analysis of the selected patient's recent progress.
    Analyze,
    /// AI recovery prediction against a protocol.
    Predict {
        /// Protocol id; defaults to the patient's own.
        #[arg(long)]
        protocol: Option<String>,
    },
    /// Onboard a new patient case.
    NewCase(NewCaseArgs),
}

#[derive(Debug, Args)]
pub struct EditLogArgs {
    pub log_id: String,
    /// Peak range of motion in degrees.
    #[arg(long)]
    pub rom: u32,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub pain: u8,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report body.
    pub content: String,
    /// Defaults to "Week N Update".
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Args)]
pub struct NewCaseArgs {
    /// Patient mobile number.
    #[arg(long)]
    pub phone: String,
    /// One-time password sent to the phone.
    #[arg(long)]
    pub otp: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub age: String,
    /// Injury protocol id, e.g. acl_rehab.
    #[arg(long, default_value = "wrist_post_cast")]
    pub injury: String,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration with secrets redacted.
    Show,
    /// Print the config file path.
    Path,
    /// Write a config file.
    Init(ConfigInitArgs),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StorageKind {
    Local,
    S3,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ProviderKind {
    Gemini,
    Bedrock,
}

#[derive(Debug, Args)]
pub struct ConfigInitArgs {
    #[arg(long, value_enum, default_value = "local")]
    pub storage: StorageKind,
    /// Directory for local storage.
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Bucket for S3 storage.
    #[arg(long, required_if_eq("storage", "s3"))]
    pub bucket: Option<String>,
    #[arg(long, default_value = "")]
    pub prefix: String,
    /// AWS region for S3 and Bedrock.
    #[arg(long, default_value = "us-east-1")]
    pub region: String,
    #[arg(long, value_enum, default_value = "gemini")]
    pub provider: ProviderKind,
    /// Model name (Gemini) or model id (Bedrock).
    #[arg(long)]
    pub model: Option<String>,
    /// Gemini API key to store; GEMINI_API_KEY takes precedence at runtime.
    #[arg(long)]
    pub api_key: Option<String>,
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// Overwrite an existing config.
    #[arg(long)]
    pub force: bool,
}
