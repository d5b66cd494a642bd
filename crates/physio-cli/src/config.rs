use std::path::{Path, PathBuf};
use std::time::Duration;

use physio_gateway::bedrock;
use physio_gateway::gateway::DEFAULT_TIMEOUT;
use physio_gateway::gemini::{self, API_KEY_ENV};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.physio.tracker";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysioConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub storage: StorageConfig,
    pub provider: ProviderConfig,
    /// Upper bound on a single AI request.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageConfig {
    Local {
        dir: PathBuf,
    },
    /// In-memory; nothing outlives the process. Only reachable from a
    /// hand-written config, never from `config init`.
    Session,
    S3 {
        region: String,
        bucket: String,
        #[serde(default)]
        prefix: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    Gemini {
        model: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        api_key: Option<String>,
    },
    Bedrock {
        region: String,
        model_id: String,
    },
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub path: String,
    pub config_version: u32,
    pub storage: String,
    pub provider: String,
    pub model: String,
    pub api_key_source: Option<String>,
    pub api_key_hint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PhysioConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            storage: StorageConfig::Local {
                dir: default_data_dir(),
            },
            provider: ProviderConfig::Gemini {
                model: gemini::DEFAULT_MODEL.to_string(),
                api_key: None,
            },
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl PhysioConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The Gemini key to use: `GEMINI_API_KEY` wins over the stored key.
    pub fn gemini_api_key(&self) -> Option<String> {
        resolve_api_key(self, std::env::var(API_KEY_ENV).ok())
    }
}

fn resolve_api_key(config: &PhysioConfig, from_env: Option<String>) -> Option<String> {
    let stored = match &config.provider {
        ProviderConfig::Gemini { api_key, .. } => api_key.clone(),
        ProviderConfig::Bedrock { .. } => return None,
    };
    from_env
        .filter(|k| !k.trim().is_empty())
        .or(stored.filter(|k| !k.trim().is_empty()))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from the standard location, or defaults if none exists.
pub fn load_config() -> eyre::Result<PhysioConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<PhysioConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PhysioConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: PhysioConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update physio."
        ));
    }

    // v0 → v1: pre-versioned configs only knew about storage.
    if from_version < 1 {
        let defaults = serde_json::to_value(PhysioConfig::default())?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        for field in ["storage", "provider", "timeout_secs"] {
            if !obj.contains_key(field) {
                obj.insert(field.to_string(), defaults[field].clone());
            }
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added provider and timeout)");
    }

    Ok(json)
}

pub fn save_config(config: &PhysioConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &PhysioConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The file may hold an API key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(config: &PhysioConfig, path: &Path) -> ConfigInfo {
    config_info_with_env(config, path, std::env::var(API_KEY_ENV).ok())
}

pub fn config_info_with_env(
    config: &PhysioConfig,
    path: &Path,
    env_key: Option<String>,
) -> ConfigInfo {
    let storage = match &config.storage {
        StorageConfig::Local { dir } => format!("local ({})", dir.display()),
        StorageConfig::Session => "session (in-memory)".to_string(),
        StorageConfig::S3 {
            region,
            bucket,
            prefix,
        } => format!("s3 (s3://{bucket}/{prefix} in {region})"),
    };

    let (provider, model, api_key_source) = match &config.provider {
        ProviderConfig::Gemini { model, api_key } => {
            let source = if env_key.as_deref().is_some_and(|k| !k.trim().is_empty()) {
                "env"
            } else if api_key.as_deref().is_some_and(|k| !k.trim().is_empty()) {
                "config"
            } else {
                "none"
            };
            ("gemini", model.clone(), Some(source.to_string()))
        }
        ProviderConfig::Bedrock { region, model_id } => {
            ("bedrock", format!("{model_id} ({region})"), None)
        }
    };

    ConfigInfo {
        path: path.display().to_string(),
        config_version: config.config_version,
        storage,
        provider: provider.to_string(),
        model,
        api_key_source,
        api_key_hint: resolve_api_key(config, env_key).map(|k| redact_key(&k)),
        timeout_secs: config.timeout_secs,
    }
}

fn redact_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}

/// Bedrock in `region`, with the default model unless one is given.
pub fn bedrock_provider(region: impl Into<String>, model_id: Option<String>) -> ProviderConfig {
    ProviderConfig::Bedrock {
        region: region.into(),
        model_id: model_id.unwrap_or_else(|| bedrock::DEFAULT_MODEL_ID.to_string()),
    }
}
