use core::str::FromStr;

use serde::{Deserialize, Serialize};

use valrec_core::{DomainError, DomainResult, value_record};

fn validate_person(person: &Person) -> DomainResult<()> {
    if person.name.trim().is_empty() {
        return Err(DomainError::validation("person name cannot be empty"));
    }
    if person.age < 0 {
        return Err(DomainError::validation(format!(
            "person age cannot be negative (got {})",
            person.age
        )));
    }
    Ok(())
}

value_record! {
    /// A named person with an age in whole years.
    #[derive(Serialize, Deserialize)]
    pub struct Person {
        name: String,
        age: i32,
    }
    validate = validate_person;
}

/// Parses the compact `name:age` form, e.g. `"Al Lansley:45"`.
///
/// The name is everything before the first `:`.
impl FromStr for Person {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, age) = s
            .split_once(':')
            .ok_or_else(|| DomainError::validation(format!("expected `name:age`, got `{s}`")))?;
        let age: i32 = age
            .trim()
            .parse()
            .map_err(|e| DomainError::validation(format!("invalid age `{age}`: {e}")))?;
        Person::new(name, age)
    }
}
