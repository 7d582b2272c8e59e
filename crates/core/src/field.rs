//! Field model: the dynamically typed view of record fields.
//!
//! Typed records store plain Rust values. `FieldValue` is what named
//! construction, overrides and display go through, and `FieldType` is the
//! bridge between the two.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Kind of value a field holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Int,
    Real,
    Bool,
    Uuid,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Int => "int",
            FieldKind::Real => "real",
            FieldKind::Bool => "bool",
            FieldKind::Uuid => "uuid",
        };
        f.write_str(name)
    }
}

/// Floating-point field value with total equality.
///
/// Equality compares bit patterns after collapsing every NaN to one canonical
/// NaN, so `NaN == NaN` and `0.0 != -0.0`. Hashing uses the same bits, which
/// keeps `Hash` consistent with `Eq`.
#[derive(Copy, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Real(f64);

impl Real {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    fn canonical_bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Real {}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

// `{:?}` on f64 always keeps a fractional part (`42.0`), which reads as a
// real in display strings.
impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Real> for f64 {
    fn from(value: Real) -> Self {
        value.0
    }
}

/// A single field value, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Real(Real),
    Bool(bool),
    Uuid(Uuid),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Real(_) => FieldKind::Real,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Uuid(_) => FieldKind::Uuid,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Real(r) => write!(f, "{r}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Uuid(u) => write!(f, "{}", u.hyphenated()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(Real(value))
    }
}

impl From<Real> for FieldValue {
    fn from(value: Real) -> Self {
        FieldValue::Real(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

/// Conversion between a Rust field type and [`FieldValue`].
pub trait FieldType: Sized {
    const KIND: FieldKind;

    fn to_value(&self) -> FieldValue;

    /// Convert back, reporting `record`/`field` on a kind mismatch.
    fn from_value(record: &'static str, field: &str, value: FieldValue) -> DomainResult<Self>;
}

fn mismatch(record: &'static str, field: &str, expected: FieldKind, value: &FieldValue) -> DomainError {
    DomainError::field_type(record, field, expected.to_string(), value.kind().to_string())
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_value(record: &'static str, field: &str, value: FieldValue) -> DomainResult<Self> {
        match value {
            FieldValue::Text(s) => Ok(s),
            other => Err(mismatch(record, field, Self::KIND, &other)),
        }
    }
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn to_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }

    fn from_value(record: &'static str, field: &str, value: FieldValue) -> DomainResult<Self> {
        match value {
            FieldValue::Int(n) => Ok(n),
            other => Err(mismatch(record, field, Self::KIND, &other)),
        }
    }
}

impl FieldType for i32 {
    const KIND: FieldKind = FieldKind::Int;

    fn to_value(&self) -> FieldValue {
        FieldValue::Int(i64::from(*self))
    }

    fn from_value(record: &'static str, field: &str, value: FieldValue) -> DomainResult<Self> {
        match value {
            FieldValue::Int(n) => i32::try_from(n).map_err(|_| {
                DomainError::field_type(record, field, "32-bit int", format!("int {n}"))
            }),
            other => Err(mismatch(record, field, Self::KIND, &other)),
        }
    }
}

impl FieldType for Real {
    const KIND: FieldKind = FieldKind::Real;

    fn to_value(&self) -> FieldValue {
        FieldValue::Real(*self)
    }

    // Ints widen to reals, mirroring numeric literals like `x = 3`, as long as
    // the widening is exact.
    fn from_value(record: &'static str, field: &str, value: FieldValue) -> DomainResult<Self> {
        match value {
            FieldValue::Real(r) => Ok(r),
            FieldValue::Int(n) => {
                let widened = n as f64;
                if widened as i128 == i128::from(n) {
                    Ok(Real(widened))
                } else {
                    Err(DomainError::field_type(
                        record,
                        field,
                        Self::KIND.to_string(),
                        format!("int {n}"),
                    ))
                }
            }
            other => Err(mismatch(record, field, Self::KIND, &other)),
        }
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }

    fn from_value(record: &'static str, field: &str, value: FieldValue) -> DomainResult<Self> {
        match value {
            FieldValue::Bool(b) => Ok(b),
            other => Err(mismatch(record, field, Self::KIND, &other)),
        }
    }
}

impl FieldType for Uuid {
    const KIND: FieldKind = FieldKind::Uuid;

    fn to_value(&self) -> FieldValue {
        FieldValue::Uuid(*self)
    }

    fn from_value(record: &'static str, field: &str, value: FieldValue) -> DomainResult<Self> {
        match value {
            FieldValue::Uuid(u) => Ok(u),
            other => Err(mismatch(record, field, Self::KIND, &other)),
        }
    }
}
