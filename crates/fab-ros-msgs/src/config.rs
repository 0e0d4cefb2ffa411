//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Codec settings loaded from TOML, with an environment override for the path.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::WireFormat;
use crate::wire::FieldPolicy;

fn default_log_payloads() -> bool {
    false
}

/// Codec settings, usually read from a small TOML file.
///
/// ```toml
/// policy = "strict_present"
/// format = "cbor"
/// log_payloads = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Policy applied to absent keys during decode.
    #[serde(default)]
    pub policy: FieldPolicy,
    /// Byte format for encode and decode.
    #[serde(default)]
    pub format: WireFormat,
    /// Log every flattened/parsed payload at debug level.
    #[serde(default = "default_log_payloads")]
    pub log_payloads: bool,
}

/// Metadata describing where a [`CodecConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedCodecConfig {
    /// Parsed settings.
    pub config: CodecConfig,
    /// File the settings were read from.
    pub source: PathBuf,
}

impl CodecConfig {
    /// Environment variable naming a config file to load instead of the candidates.
    pub const ENV_CONFIG_PATH: &'static str = "FAB_ROS_MSGS_CONFIG";

    /// Load configuration from disk, respecting the `FAB_ROS_MSGS_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration together with the path it came from.
    ///
    /// The environment override wins; otherwise the first existing candidate is used.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedCodecConfig> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedCodecConfig {
                    config,
                    source: path,
                });
            }
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(LoadedCodecConfig {
                    config,
                    source: path.to_path_buf(),
                });
            }
        }

        Err(anyhow!(
            "no codec configuration found. inspected: {}",
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading codec configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        contents
            .parse::<Self>()
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            policy: FieldPolicy::default(),
            format: WireFormat::default(),
            log_payloads: default_log_payloads(),
        }
    }
}

impl std::str::FromStr for CodecConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str::<Self>(content).with_context(|| "failed to parse codec configuration")
    }
}
