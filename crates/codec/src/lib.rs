//! Serialization collaborators for value records.
//!
//! Records do not define a wire format of their own. A [`Codec`] turns a
//! record into bytes and back; [`round_trip`] checks that the decoded value
//! is structurally equal to the original. The check is only as good as the
//! codec: a faulty codec yields [`CodecError::Mismatch`].

pub mod codec;
pub mod error;
pub mod formats;
pub mod round_trip;

pub use codec::{Codec, CodecKind, CodecPair};
pub use error::{CodecError, CodecResult};
pub use formats::{JsonCodec, PostcardCodec};
pub use round_trip::{RoundTrip, round_trip};
