//! Concrete value records.
//!
//! Each record is declared with `valrec_core::value_record!` and layers its
//! own validation (if any) on top of the shared contract.

pub mod customer;
pub mod person;
pub mod point;

pub use customer::Customer;
pub use person::Person;
pub use point::Point2D;
