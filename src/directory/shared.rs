use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{consts::consts::RecordHandle, model::person::Person};

use super::{
    directory::{Directory, DirectoryError},
    options::DirectoryOptions,
};

/// Cloneable handle to a directory shared between threads. Lookups take the read lock, appends
/// and updates take the write lock.
#[derive(Clone, Debug, Default)]
pub struct SharedDirectory {
    inner: Arc<RwLock<Directory>>,
}

impl SharedDirectory {
    pub fn new() -> Self {
        Self::from(Directory::new())
    }

    pub fn with_options(options: DirectoryOptions) -> Self {
        Self::from(Directory::with_options(options))
    }

    // Every write is a single push or a caller closure, a poisoned lock still holds a usable list
    fn read(&self) -> RwLockReadGuard<'_, Directory> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, person: Person) -> RecordHandle {
        self.write().add(person)
    }

    pub fn try_add(&self, person: Person) -> Result<RecordHandle, DirectoryError> {
        self.write().try_add(person)
    }

    /// Returns a copy, the record can change once the lock is released
    pub fn find_by_email(&self, email: &str) -> Option<Person> {
        self.read().find_by_email(email).cloned()
    }

    pub fn find_handle_by_email(&self, email: &str) -> Option<RecordHandle> {
        self.read().find_handle_by_email(email)
    }

    pub fn update_at<F>(&self, handle: RecordHandle, mutator: F) -> Result<Person, DirectoryError>
    where
        F: FnOnce(&mut Person),
    {
        self.write().update_at(handle, mutator).cloned()
    }

    pub fn count(&self) -> usize {
        self.read().count()
    }
}

impl From<Directory> for SharedDirectory {
    fn from(directory: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }
}
