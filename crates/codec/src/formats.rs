//! Codecs backed by serde formats.

use serde::Serialize;
use serde::de::DeserializeOwned;

use valrec_core::{FieldValue, Record};

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};

/// JSON via `serde_json`. Human-readable; reals keep full precision.
///
/// JSON has no representation for NaN or infinities, so records holding a
/// non-finite real fail at encode time with [`CodecError::Encode`]. Use
/// [`PostcardCodec`] for those.
#[derive(Debug, Copy, Clone, Default)]
pub struct JsonCodec;

/// Compact binary via `postcard`.
#[derive(Debug, Copy, Clone, Default)]
pub struct PostcardCodec;

// serde_json writes non-finite floats as `null`, which then fails to decode.
fn reject_non_finite<R: Record>(value: &R) -> CodecResult<()> {
    let non_finite = value.field_values().into_iter().find(|(_, v)| {
        matches!(v, FieldValue::Real(r) if !r.get().is_finite())
    });
    match non_finite {
        Some((field, v)) => Err(CodecError::Encode(format!(
            "{}: field `{field}` is {v}, which JSON cannot represent",
            R::TYPE_NAME
        ))),
        None => Ok(()),
    }
}

impl<R> Codec<R> for JsonCodec
where
    R: Record + Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, value: &R) -> CodecResult<Vec<u8>> {
        reject_non_finite(value)?;
        serde_json::to_vec(value).map_err(CodecError::encode)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<R> {
        let value: R = serde_json::from_slice(bytes).map_err(CodecError::decode)?;
        value.validate()?;
        Ok(value)
    }
}

impl<R> Codec<R> for PostcardCodec
where
    R: Record + Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        "postcard"
    }

    fn encode(&self, value: &R) -> CodecResult<Vec<u8>> {
        postcard::to_allocvec(value).map_err(CodecError::encode)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<R> {
        let value: R = postcard::from_bytes(bytes).map_err(CodecError::decode)?;
        value.validate()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round_trip::round_trip;
    use serde::Deserialize;
    use valrec_core::{Real, value_record};

    value_record! {
        #[derive(Serialize, Deserialize)]
        pub struct Plane {
            x: Real = 0.0,
            y: Real = 0.0,
        }
    }

    #[test]
    fn json_rejects_non_finite_reals_at_encode() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let p = Plane::new(x, 1.0);
            let err = Codec::<Plane>::encode(&JsonCodec, &p).unwrap_err();
            assert!(matches!(err, CodecError::Encode(_)), "{err}");
            assert!(err.to_string().contains("field `x`"), "{err}");

            let err = round_trip(&JsonCodec, &p).unwrap_err();
            assert!(matches!(err, CodecError::Encode(_)));
        }
    }

    #[test]
    fn postcard_round_trips_non_finite_reals() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let p = Plane::new(x, 1.0);
            assert_eq!(round_trip(&PostcardCodec, &p).unwrap().decoded, p);
        }
    }

    #[test]
    fn json_accepts_finite_reals() {
        let p = Plane::new(-0.5, 1e300);
        assert_eq!(round_trip(&JsonCodec, &p).unwrap().decoded, p);
    }
}
