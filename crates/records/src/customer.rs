//! Customer record and its factory functions.
//!
//! Factories are plain functions: there is no shared service state, only a
//! fresh id when the caller does not supply one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use valrec_core::{DomainError, DomainResult, Real, value_record};

/// Upper bound for a discount, in percent.
pub const MAX_DISCOUNT: f64 = 100.0;

fn validate_customer(customer: &Customer) -> DomainResult<()> {
    if customer.name.trim().is_empty() {
        return Err(DomainError::validation("customer name cannot be empty"));
    }
    let discount = customer.discount.get();
    if !discount.is_finite() || !(0.0..=MAX_DISCOUNT).contains(&discount) {
        return Err(DomainError::validation(format!(
            "discount must be within 0..={MAX_DISCOUNT} percent (got {discount})"
        )));
    }
    Ok(())
}

value_record! {
    /// A customer. `discount` is a percentage and defaults to `0.0`.
    #[derive(Serialize, Deserialize)]
    pub struct Customer {
        id: Uuid,
        name: String,
        discount: Real = 0.0,
    }
    validate = validate_customer;
}

/// Create a customer with a fresh time-ordered id and no discount.
pub fn create(name: impl Into<String>) -> DomainResult<Customer> {
    create_with_discount(name, None, 0.0)
}

pub fn create_with_id(name: impl Into<String>, id: Uuid) -> DomainResult<Customer> {
    create_with_discount(name, Some(id), 0.0)
}

/// Create a customer; `id` defaults to a fresh UUIDv7.
pub fn create_with_discount(
    name: impl Into<String>,
    id: Option<Uuid>,
    discount: f64,
) -> DomainResult<Customer> {
    Customer::new(id.unwrap_or_else(Uuid::now_v7), name, discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valrec_core::{Fields, Record};

    #[test]
    fn create_generates_distinct_ids() {
        let a = create("John").unwrap();
        let b = create("John").unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a.discount().get(), 0.0);
    }

    #[test]
    fn create_with_id_is_deterministic() {
        let id = Uuid::from_u64_pair(10, 15);
        let c = create_with_id("Sarah", id).unwrap();
        assert_eq!(
            c.to_string(),
            "Customer(id=00000000-0000-000a-0000-00000000000f, name=Sarah, discount=0.0)"
        );
        assert_eq!(c, create_with_id("Sarah", id).unwrap());
    }

    #[test]
    fn create_with_discount_defaults_id() {
        let c = create_with_discount("Chris", None, 50.0).unwrap();
        assert_eq!(c.discount().get(), 50.0);
        assert_eq!(c.id().get_version_num(), 7);
    }

    #[test]
    fn construct_requires_id_but_defaults_discount() {
        let err = Customer::construct(Fields::new().with("name", "Lucy")).unwrap_err();
        assert_eq!(err, DomainError::arity("Customer", "id"));

        let id = Uuid::from_u64_pair(1, 1);
        let lucy = Customer::construct(Fields::new().with("name", "Lucy").with("id", id)).unwrap();
        assert_eq!(lucy, create_with_id("Lucy", id).unwrap());
    }

    #[test]
    fn rejects_out_of_range_discount() {
        let id = Uuid::from_u64_pair(1, 1);
        assert!(matches!(
            create_with_discount("Chris", Some(id), 150.0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            create_with_discount("Chris", Some(id), f64::NAN),
            Err(DomainError::Validation(_))
        ));

        let c = create_with_id("Chris", id).unwrap();
        assert!(matches!(
            c.copy_with(Fields::new().with("discount", -1.0)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(c.with_name(""), Err(DomainError::Validation(_))));
    }
}
