//! Harness config.

//---------------------------------------------------------------------------------------------------- Use
use std::{fs::read_to_string, io, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::{harness::DEFAULT_TIMEOUT, rpc::LOCALHOST_RPC_URL};

//---------------------------------------------------------------------------------------------------- ConfigError
/// Errors when reading a [`HarnessConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// The file is not a valid config.
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

//---------------------------------------------------------------------------------------------------- HarnessConfig
/// The config of one wallet node's harness.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct HarnessConfig {
    /// The node name, used in failure messages.
    ///
    /// Type         | String
    /// Examples     | "alice", "bob"
    pub name: String,

    /// The URL of the wallet's RPC server, without the `/json_rpc` path.
    ///
    /// Type         | String
    /// Examples     | "http://127.0.0.1:10009"
    pub rpc_url: String,

    /// The timeout of a single RPC call, in seconds.
    ///
    /// Type         | Number
    /// Valid values | >= 0
    pub timeout: u64,

    /// Configuration for the harness's logging system, tracing.
    pub tracing: TracingConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            name: "alice".to_string(),
            rpc_url: LOCALHOST_RPC_URL.to_string(),
            timeout: DEFAULT_TIMEOUT.as_secs(),
            tracing: TracingConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// The timeout of a single RPC call.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Parse a config in [`toml`] format.
    ///
    /// Missing fields are set to their default.
    ///
    /// # Errors
    /// Will return an [`Err`] if `s` is not a valid [`toml`] config.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Attempts to read a config file in [`toml`] format from the given [`Path`].
    ///
    /// # Errors
    /// Will return an [`Err`] if the file cannot be read or if the file is not a valid [`toml`] config.
    pub fn read_from_path(file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file_text = read_to_string(file.as_ref())?;

        Self::from_toml(&file_text).inspect_err(|e| {
            tracing::warn!("failed to parse config file at {}: {e}", file.as_ref().display());
        })
    }
}

//---------------------------------------------------------------------------------------------------- TracingConfig
/// [`tracing`] config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct TracingConfig {
    /// The minimum log level.
    ///
    /// Levels below this one will not be shown.
    /// "error" is the highest level only showing errors,
    /// "trace" is the lowest showing as much as possible.
    ///
    /// Type         | Level
    /// Valid values | "error", "warn", "info", "debug", "trace"
    #[serde(with = "level_filter_serde")]
    pub level: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
        }
    }
}

mod level_filter_serde {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::level_filters::LevelFilter;

    #[expect(clippy::trivially_copy_pass_by_ref, reason = "serde")]
    pub(super) fn serialize<S>(level_filter: &LevelFilter, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&level_filter.to_string())
    }

    pub(super) fn deserialize<'de, D>(d: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        LevelFilter::from_str(&s).map_err(serde::de::Error::custom)
    }
}
