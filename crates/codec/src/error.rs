//! Codec error model.

use thiserror::Error;

use valrec_core::DomainError;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("encode failed: {0}")]
    Encode(String),

    #[error("decode failed: {0}")]
    Decode(String),

    /// The decoded bytes produced a record its own rules reject.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Decoding succeeded but the result differs from what was encoded.
    #[error("round trip mismatch: sent {sent}, received {received}")]
    Mismatch { sent: String, received: String },

    #[error("unknown codec `{0}` (expected `json` or `postcard`)")]
    UnknownCodec(String),
}

impl CodecError {
    pub fn encode(err: impl core::fmt::Display) -> Self {
        Self::Encode(err.to_string())
    }

    pub fn decode(err: impl core::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}
