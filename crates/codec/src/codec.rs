//! The encoder/decoder seam.

use core::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use valrec_core::Record;

use crate::error::{CodecError, CodecResult};
use crate::formats::{JsonCodec, PostcardCodec};

/// Encodes records of type `R` to bytes and decodes them back.
pub trait Codec<R> {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn encode(&self, value: &R) -> CodecResult<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> CodecResult<R>;
}

/// A codec assembled from a pre-built encoder/decoder pair.
///
/// Decoded values still go through [`Record::validate`].
pub struct CodecPair<E, D> {
    name: &'static str,
    encoder: E,
    decoder: D,
}

impl<E, D> CodecPair<E, D> {
    pub fn new(name: &'static str, encoder: E, decoder: D) -> Self {
        Self {
            name,
            encoder,
            decoder,
        }
    }
}

impl<R, E, D> Codec<R> for CodecPair<E, D>
where
    R: Record,
    E: Fn(&R) -> CodecResult<Vec<u8>>,
    D: Fn(&[u8]) -> CodecResult<R>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn encode(&self, value: &R) -> CodecResult<Vec<u8>> {
        (self.encoder)(value)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<R> {
        let value = (self.decoder)(bytes)?;
        value.validate()?;
        Ok(value)
    }
}

/// Built-in codec selection, e.g. from configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CodecKind {
    #[default]
    Json,
    Postcard,
}

impl FromStr for CodecKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(CodecKind::Json),
            "postcard" | "binary" => Ok(CodecKind::Postcard),
            other => Err(CodecError::UnknownCodec(other.to_string())),
        }
    }
}

impl<R> Codec<R> for CodecKind
where
    R: Record + Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        match self {
            CodecKind::Json => Codec::<R>::name(&JsonCodec),
            CodecKind::Postcard => Codec::<R>::name(&PostcardCodec),
        }
    }

    fn encode(&self, value: &R) -> CodecResult<Vec<u8>> {
        match self {
            CodecKind::Json => JsonCodec.encode(value),
            CodecKind::Postcard => PostcardCodec.encode(value),
        }
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<R> {
        match self {
            CodecKind::Json => JsonCodec.decode(bytes),
            CodecKind::Postcard => PostcardCodec.decode(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codec_names() {
        assert_eq!("json".parse::<CodecKind>(), Ok(CodecKind::Json));
        assert_eq!("Postcard".parse::<CodecKind>(), Ok(CodecKind::Postcard));
        assert_eq!("binary".parse::<CodecKind>(), Ok(CodecKind::Postcard));
        assert_eq!(
            "protobuf".parse::<CodecKind>(),
            Err(CodecError::UnknownCodec("protobuf".to_string()))
        );
    }
}
