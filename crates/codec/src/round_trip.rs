//! Encode-then-decode check.

use valrec_core::Record;

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};

/// Outcome of a successful round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip<R> {
    pub codec: &'static str,
    /// Size of the transmitted bytes.
    pub encoded_len: usize,
    /// The received value, structurally equal to the sent one.
    pub decoded: R,
}

/// Encode `value`, decode the bytes, and require structural equality.
pub fn round_trip<R, C>(codec: &C, value: &R) -> CodecResult<RoundTrip<R>>
where
    R: Record,
    C: Codec<R> + ?Sized,
{
    let bytes = codec.encode(value)?;
    tracing::debug!(
        codec = codec.name(),
        record = R::TYPE_NAME,
        bytes = bytes.len(),
        "encoded"
    );

    let decoded = codec.decode(&bytes)?;
    if decoded != *value {
        tracing::warn!(
            codec = codec.name(),
            sent = %value,
            received = %decoded,
            "round trip mismatch"
        );
        return Err(CodecError::Mismatch {
            sent: value.to_string(),
            received: decoded.to_string(),
        });
    }

    Ok(RoundTrip {
        codec: codec.name(),
        encoded_len: bytes.len(),
        decoded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecPair;
    use crate::formats::{JsonCodec, PostcardCodec};
    use serde::{Deserialize, Serialize};
    use valrec_core::{DomainError, DomainResult, Real, value_record};

    fn non_negative(m: &Measurement) -> DomainResult<()> {
        if m.reading.get() < 0.0 {
            return Err(DomainError::validation("reading cannot be negative"));
        }
        Ok(())
    }

    value_record! {
        #[derive(Serialize, Deserialize)]
        pub struct Measurement {
            label: String,
            reading: Real,
        }
        validate = non_negative;
    }

    fn sample() -> Measurement {
        Measurement::new("temp", 21.5).unwrap()
    }

    #[test]
    fn json_round_trip_is_structurally_equal() {
        let outcome = round_trip(&JsonCodec, &sample()).unwrap();
        assert_eq!(outcome.decoded, sample());
        assert_eq!(outcome.codec, "json");
    }

    #[test]
    fn postcard_is_smaller_than_json() {
        let json = round_trip(&JsonCodec, &sample()).unwrap();
        let binary = round_trip(&PostcardCodec, &sample()).unwrap();
        assert_eq!(binary.decoded, json.decoded);
        assert!(binary.encoded_len < json.encoded_len);
    }

    #[test]
    fn faulty_codec_reports_mismatch() {
        let lossy = CodecPair::new(
            "lossy",
            |m: &Measurement| -> CodecResult<Vec<u8>> { Ok(m.label().as_bytes().to_vec()) },
            |bytes: &[u8]| -> CodecResult<Measurement> {
                let label = String::from_utf8(bytes.to_vec()).map_err(CodecError::decode)?;
                Ok(Measurement::new(label, 0.0)?)
            },
        );

        let err = round_trip(&lossy, &sample()).unwrap_err();
        assert_eq!(
            err,
            CodecError::Mismatch {
                sent: "Measurement(label=temp, reading=21.5)".to_string(),
                received: "Measurement(label=temp, reading=0.0)".to_string(),
            }
        );
    }

    #[test]
    fn decode_enforces_record_rules() {
        let bytes = br#"{"label":"temp","reading":-3.0}"#;
        let err = Codec::<Measurement>::decode(&JsonCodec, bytes).unwrap_err();
        assert!(matches!(err, CodecError::Domain(DomainError::Validation(_))));
    }

    #[test]
    fn decode_reports_malformed_bytes() {
        let err = Codec::<Measurement>::decode(&JsonCodec, b"not json").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }
}
