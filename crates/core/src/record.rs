//! Record contract: schema-described value objects.
//!
//! A [`Record`] is a [`ValueObject`] whose fields are declared up front. The
//! declaration gives named construction with defaults, copy-with-overrides and
//! the canonical display form. Concrete records are normally generated with
//! [`crate::value_record!`], which implements everything below.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

use crate::error::{DomainError, DomainResult};
use crate::field::{FieldKind, FieldValue};
use crate::fields::Fields;
use crate::value_object::ValueObject;

/// Declaration of one record field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// `false` when the field declares a default.
    pub required: bool,
}

/// A value object with a declared, ordered field schema.
pub trait Record: ValueObject + 'static {
    /// Type name used in display strings and errors.
    const TYPE_NAME: &'static str;

    /// Declared fields, in declaration order.
    fn schema() -> &'static [FieldSpec];

    /// Current field values, in declaration order.
    fn field_values(&self) -> Vec<(&'static str, FieldValue)>;

    /// Build an instance from a field set.
    ///
    /// Missing fields take their declared default or fail with
    /// [`DomainError::Arity`]. Extra names are ignored and no validation runs;
    /// use [`Record::construct`] for the checked path.
    fn from_fields(fields: Fields) -> DomainResult<Self>;

    /// Record-specific rules. Runs after every construction and copy.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }

    fn has_field(name: &str) -> bool {
        Self::schema().iter().any(|spec| spec.name == name)
    }

    /// Named construction.
    fn construct(fields: Fields) -> DomainResult<Self> {
        build_validated(fields).inspect_err(|err| {
            tracing::debug!(record = Self::TYPE_NAME, error = %err, "construction rejected");
        })
    }

    /// Non-destructive update: a new instance equal to `self` except for the
    /// fields named in `overrides`.
    fn copy_with(&self, overrides: Fields) -> DomainResult<Self> {
        let mut merged: Fields = self.field_values().into_iter().collect();
        merged.merge(overrides);
        build_validated(merged).inspect_err(|err| {
            tracing::debug!(record = Self::TYPE_NAME, error = %err, "copy rejected");
        })
    }

    fn display_string(&self) -> String {
        self.to_string()
    }

    fn structural_hash(&self) -> u64 {
        hash_of(self)
    }
}

// Overrides are merged over declared names only, so an undeclared name in the
// merged set came from the caller.
fn build_validated<R: Record>(fields: Fields) -> DomainResult<R> {
    reject_unknown::<R>(&fields)?;
    let instance = R::from_fields(fields)?;
    instance.validate()?;
    Ok(instance)
}

fn reject_unknown<R: Record>(fields: &Fields) -> DomainResult<()> {
    match fields.names().find(|name| !R::has_field(name)) {
        Some(name) => {
            tracing::debug!(record = R::TYPE_NAME, field = name, "undeclared field");
            Err(DomainError::unknown_field(R::TYPE_NAME, name))
        }
        None => Ok(()),
    }
}

/// Hash a value with a fixed-key hasher.
///
/// The result is stable for the lifetime of the process (and across runs of
/// the same build), and equal values always produce equal hashes.
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Write the canonical `TypeName(field=value, ...)` form.
pub fn fmt_record(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    values: &[(&'static str, FieldValue)],
) -> fmt::Result {
    write!(f, "{type_name}(")?;
    for (i, (name, value)) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}={value}")?;
    }
    f.write_str(")")
}

/// Object-safe view over any [`Record`], for comparing records whose concrete
/// type is only known at runtime.
pub trait DynRecord: Send + Sync + 'static {
    fn record_name(&self) -> &'static str;
    fn dyn_fields(&self) -> Vec<(&'static str, FieldValue)>;
    fn as_any(&self) -> &dyn Any;
    /// `false` whenever `other` has a different concrete type.
    fn dyn_eq(&self, other: &dyn DynRecord) -> bool;
    fn dyn_hash(&self) -> u64;
    fn dyn_display(&self) -> String;
}

impl<R: Record> DynRecord for R {
    fn record_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    fn dyn_fields(&self) -> Vec<(&'static str, FieldValue)> {
        self.field_values()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynRecord) -> bool {
        other
            .as_any()
            .downcast_ref::<R>()
            .is_some_and(|other| self == other)
    }

    fn dyn_hash(&self) -> u64 {
        hash_of(self)
    }

    fn dyn_display(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for dyn DynRecord {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl fmt::Debug for dyn DynRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dyn_display())
    }
}

/// Structural equality across record types.
pub fn equals(a: &dyn DynRecord, b: &dyn DynRecord) -> bool {
    a.dyn_eq(b)
}
