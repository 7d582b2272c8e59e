//! `valrec-core` — immutable value records.
//!
//! This crate holds the **pure** record contract (no IO, no serialization
//! formats): structural equality, hashing, display, named construction with
//! defaults and non-destructive copies.

pub mod error;
pub mod field;
pub mod fields;
mod macros;
pub mod record;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use field::{FieldKind, FieldType, FieldValue, Real};
pub use fields::Fields;
pub use record::{DynRecord, FieldSpec, Record};
pub use value_object::ValueObject;

#[doc(hidden)]
pub mod __private {
    pub use paste;
}
