//! Configuration loading from the environment and disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{
    Bundle, Credentials, ObservabilityConfig, RelayConfig, SubmitterConfig,
};
use crate::config::validation::{validate_bundle, validate_config, ValidationError};

/// Environment variable holding the relay authentication key.
pub const SIGNING_KEY_ENV_VAR: &str = "FLASHBOTS_SIGNING_KEY";

/// Environment variable holding the identity's private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "BOT_PRIVATE_KEY";

/// Environment variable holding the node JSON-RPC URL.
pub const PROVIDER_URL_ENV_VAR: &str = "PROVIDER_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variables not set: {}", .0.join(", "))]
    MissingEnv(Vec<&'static str>),

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line that replace configured ones.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub relay_url: Option<String>,
    pub block_number: Option<u64>,
    pub state_block_number: Option<String>,
    pub simulate_only: bool,
    pub observability: ObservabilityConfig,
}

/// Load variables from a dotenv file into the process environment.
///
/// Variables already present in the environment win. Returns whether the
/// file was found and read.
pub fn load_dotenv(path: &Path) -> bool {
    match dotenv::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Loaded dotenv file");
            true
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No dotenv file loaded");
            false
        }
    }
}

/// Read the three required credentials through `lookup`.
///
/// A variable that is unset or empty counts as missing. Every missing name is
/// reported, not just the first.
pub fn credentials_from_lookup<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = Vec::new();
    let mut read = |name: &'static str| match lookup(name) {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    };

    let private_key = read(PRIVATE_KEY_ENV_VAR);
    let signing_key = read(SIGNING_KEY_ENV_VAR);
    let provider_url = read(PROVIDER_URL_ENV_VAR);

    if !missing.is_empty() {
        return Err(ConfigError::MissingEnv(missing));
    }

    Ok(Credentials {
        signing_key,
        private_key,
        provider_url,
    })
}

/// Load and validate a bundle from a TOML file.
pub fn load_bundle(path: &Path) -> Result<Bundle, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle: Bundle = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut errors = Vec::new();
    validate_bundle(&bundle, &mut errors);
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(bundle)
}

/// Assemble and validate the full configuration.
///
/// Credentials are checked first so a missing variable is reported before the
/// bundle file is even opened.
pub fn load_config<F>(
    lookup: F,
    bundle_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<SubmitterConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let credentials = credentials_from_lookup(lookup)?;

    let mut bundle = match bundle_path {
        Some(path) => load_bundle(path)?,
        None => Bundle::default(),
    };
    if let Some(block_number) = overrides.block_number {
        bundle.block_number = block_number;
    }
    if let Some(state_block_number) = overrides.state_block_number {
        bundle.state_block_number = state_block_number;
    }

    let mut relay = RelayConfig::default();
    if let Some(url) = overrides.relay_url {
        relay.url = url;
    }
    relay.simulate_only = overrides.simulate_only;

    let config = SubmitterConfig {
        credentials,
        relay,
        bundle,
        observability: overrides.observability,
    };
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
