use thiserror::Error;

use crate::{
    consts::consts::{DirectoryId, RecordHandle},
    model::person::{Person, PersonValidationError},
    stats::average::{average, AverageError},
};

use super::options::DirectoryOptions;

#[derive(Error, Debug, PartialEq)]
pub enum DirectoryError {
    #[error("Record does not exist at handle: {0}")]
    InvalidHandle(RecordHandle),

    // Constraints
    #[error("Cannot add record as a person already exists with this email: {0}")]
    UniqueConstraintViolation(String),

    #[error("Cannot add record: {0}")]
    InvalidRecord(#[from] PersonValidationError),
}

/// Append-only list of people. Insertion order is preserved and is the order every lookup scans in.
#[derive(Debug)]
pub struct Directory {
    id: DirectoryId,
    people: Vec<Person>,
    options: DirectoryOptions,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::with_options(DirectoryOptions::default())
    }

    pub fn with_options(options: DirectoryOptions) -> Self {
        Self {
            id: DirectoryId::new(),
            people: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &DirectoryOptions {
        &self.options
    }

    /// Appends unconditionally, duplicates included. Use `try_add` to apply the configured constraints.
    pub fn add(&mut self, person: Person) -> RecordHandle {
        let handle = RecordHandle::new(self.id, self.people.len());

        log::debug!("Adding person {}: {}", handle, person.email);

        self.people.push(person);

        handle
    }

    // Each constrained add can be broken up into 2 steps
    //  - Verifying validity / constraints (uniqueness)
    //  - Applying
    pub fn try_add(&mut self, person: Person) -> Result<RecordHandle, DirectoryError> {
        if let Err(err) = self.check_constraints(&person) {
            log::warn!("Rejected person: {}", err);
            return Err(err);
        }

        Ok(self.add(person))
    }

    fn check_constraints(&self, person: &Person) -> Result<(), DirectoryError> {
        if self.options.validate_records {
            person.validate()?;
        }

        if self.options.unique_email && self.find_handle_by_email(&person.email).is_some() {
            return Err(DirectoryError::UniqueConstraintViolation(
                person.email.clone(),
            ));
        }

        Ok(())
    }

    /// Exact, case-sensitive match. With duplicate emails the earliest inserted record wins.
    #[tracing::instrument(skip(self))]
    pub fn find_by_email(&self, email: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.email == email)
    }

    #[tracing::instrument(skip(self))]
    pub fn find_handle_by_email(&self, email: &str) -> Option<RecordHandle> {
        self.people
            .iter()
            .position(|person| person.email == email)
            .map(|index| RecordHandle::new(self.id, index))
    }

    /// `None` for a handle issued by another directory
    pub fn get(&self, handle: RecordHandle) -> Option<&Person> {
        if !handle.issued_by(self.id) {
            return None;
        }

        self.people.get(handle.to_number())
    }

    /// Edits a stored record in place. Constraints are not re-checked after `mutator` runs.
    pub fn update_at<F>(&mut self, handle: RecordHandle, mutator: F) -> Result<&Person, DirectoryError>
    where
        F: FnOnce(&mut Person),
    {
        if !handle.issued_by(self.id) {
            return Err(DirectoryError::InvalidHandle(handle));
        }

        let person = self
            .people
            .get_mut(handle.to_number())
            .ok_or(DirectoryError::InvalidHandle(handle))?;

        mutator(person);

        log::debug!("Updated person {}: {}", handle, person.email);

        Ok(person)
    }

    pub fn count(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn adults(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|person| person.is_adult())
    }

    pub fn average_age(&self) -> Result<f64, AverageError> {
        let ages: Vec<f64> = self.people.iter().map(|person| person.age as f64).collect();

        average(&ages)
    }
}
