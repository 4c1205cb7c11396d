use uuid::Uuid;

// Types
pub type Age = i32;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectoryId(Uuid);

impl DirectoryId {
    pub(crate) fn new() -> DirectoryId {
        DirectoryId(Uuid::new_v4())
    }
}

/// Position of a record inside the directory that issued it. Only a directory can create one, and
/// since directories are append-only a handle never goes stale for its issuer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordHandle {
    directory: DirectoryId,
    index: usize,
}

impl RecordHandle {
    pub(crate) fn new(directory: DirectoryId, index: usize) -> RecordHandle {
        RecordHandle { directory, index }
    }

    pub fn to_number(self) -> usize {
        self.index
    }

    pub fn issued_by(&self, directory: DirectoryId) -> bool {
        self.directory == directory
    }
}

impl std::fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index)
    }
}

// Values
/// Inclusive lower bound for `Person::is_adult`
pub const ADULT_AGE: Age = 18;
