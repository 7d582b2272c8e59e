//! Environment configuration.
//!
//! - `VALREC_CODEC`: `json` (default) or `postcard`
//! - `VALREC_LOG_FORMAT`: `json` (default) or `text`
//! - `RUST_LOG`: tracing filter (read by the observability crate)

use thiserror::Error;

use valrec_codec::{CodecError, CodecKind};
use valrec_observability::{LogFormat, ParseLogFormatError};

pub const CODEC_VAR: &str = "VALREC_CODEC";
pub const LOG_FORMAT_VAR: &str = "VALREC_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("VALREC_CODEC: {0}")]
    Codec(#[source] CodecError),

    #[error("VALREC_LOG_FORMAT: {0}")]
    LogFormat(#[source] ParseLogFormatError),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub codec: CodecKind,
    pub log_format: LogFormat,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let codec = match lookup(CODEC_VAR) {
            Some(raw) => raw.parse().map_err(ConfigError::Codec)?,
            None => CodecKind::default(),
        };
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(ConfigError::LogFormat)?,
            None => LogFormat::default(),
        };
        Ok(Self { codec, log_format })
    }
}
