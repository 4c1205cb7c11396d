use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::consts::{Age, ADULT_AGE};

#[derive(Error, Debug, PartialEq)]
pub enum PersonValidationError {
    #[error("Invalid record, age cannot be negative: {0}")]
    NegativeAge(Age),

    #[error("Invalid record, email cannot be empty")]
    EmptyEmail,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub age: Age,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Age) -> Self {
        Person {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn new_test() -> Self {
        Person {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 25,
        }
    }

    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    /// The boundary is inclusive, someone turning 18 today is an adult
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Records are not validated on construction, this is an opt-in check (see `DirectoryOptions`)
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.age < 0 {
            return Err(PersonValidationError::NegativeAge(self.age));
        }

        if self.email.is_empty() {
            return Err(PersonValidationError::EmptyEmail);
        }

        Ok(())
    }
}
