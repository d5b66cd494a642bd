use eyre::{Result, bail};
use physio_gateway::gemini;

use crate::cli::{ConfigCommands, ConfigInitArgs, ProviderKind, StorageKind};
use crate::config::{
    self, PhysioConfig, ProviderConfig, StorageConfig, bedrock_provider, config_info,
    config_path,
};

pub fn handle(action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let path = config_path()?;
            let info = config_info(&config::load_config_from(&path)?, &path);
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigCommands::Init(args) => init(args),
    }
}

fn init(args: ConfigInitArgs) -> Result<()> {
    let path = config_path()?;
    if path.exists() && !args.force {
        bail!("{} already exists; pass --force to overwrite", path.display());
    }
    let config = build_config(args)?;
    let written = config::save_config(&config)?;
    println!("Wrote {}", written.display());
    Ok(())
}

/// Turn `config init` flags into a config.
pub fn build_config(args: ConfigInitArgs) -> Result<PhysioConfig> {
    let defaults = PhysioConfig::default();

    let storage = match args.storage {
        StorageKind::Local => match args.dir {
            Some(dir) => StorageConfig::Local { dir },
            None => defaults.storage,
        },
        StorageKind::S3 => {
            let Some(bucket) = args.bucket else {
                bail!("--bucket is required for s3 storage");
            };
            StorageConfig::S3 {
                region: args.region.clone(),
                bucket,
                prefix: args.prefix,
            }
        }
    };

    let provider = match args.provider {
        ProviderKind::Gemini => ProviderConfig::Gemini {
            model: args.model.unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            api_key: args.api_key.filter(|k| !k.trim().is_empty()),
        },
        ProviderKind::Bedrock => bedrock_provider(args.region, args.model),
    };

    Ok(PhysioConfig {
        config_version: config::CURRENT_VERSION,
        storage,
        provider,
        timeout_secs: args.timeout_secs,
    })
}
