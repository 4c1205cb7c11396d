#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryOptions {
    pub unique_email: bool,
    pub validate_records: bool,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DirectoryOptions {
    /// Defines whether `Directory::try_add` rejects a record whose email is already stored.
    /// `Directory::add` never checks this.
    pub fn set_unique_email(mut self, unique_email: bool) -> Self {
        self.unique_email = unique_email;
        self
    }

    /// Defines whether `Directory::try_add` runs `Person::validate` before appending
    pub fn set_validate_records(mut self, validate_records: bool) -> Self {
        self.validate_records = validate_records;
        self
    }

    pub fn new_strict() -> Self {
        DirectoryOptions::default()
            .set_unique_email(true)
            .set_validate_records(true)
    }
}
