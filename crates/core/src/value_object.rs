//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! field values. Two value objects with the same values are equal, however
//! and wherever they were constructed.

/// Marker trait for value objects.
///
/// ## Immutability
///
/// A value object never changes after construction. To "modify" one, build a
/// new instance with some fields replaced (see [`crate::Record::copy_with`]
/// and the generated `with_<field>` methods). Since nothing can mutate an
/// instance, it can be shared across threads without locking, hence the
/// `Send + Sync` bound.
///
/// ## Required behaviour
///
/// - **Eq**: structural, field by field.
/// - **Hash**: consistent with `Eq`; equal values hash identically.
/// - **Display**: deterministic `TypeName(field=value, ...)` rendering.
/// - **Debug/Clone**: for tests, logging and non-destructive updates.
///
/// ## Usage Pattern
///
/// Implement it through [`crate::value_record!`] rather than by hand:
///
/// ```ignore
/// value_record! {
///     pub struct Money {
///         amount: i64,
///         currency: String,
///     }
/// }
///
/// let m1 = Money::new(100, "USD");
/// let m2 = Money::new(100, "USD");
/// assert_eq!(m1, m2);  // equal by value, not identity
/// ```
pub trait ValueObject:
    Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display + Send + Sync
{
}
