//! Key-value storage abstraction used to persist registrations.
//!
//! The application only ever talks to a [`StorageService`], so the backing
//! store can be a file on disk ([`file::FileStorage`]) or a throwaway
//! in-memory map ([`memory::MemoryStorage`]).

#[cfg(test)]
use mockall::automock;

use std::rc::Rc;

use crate::error::StorageError;

pub mod file;
pub mod memory;

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// String key to string value store with explicit get / set / remove
#[cfg_attr(test, automock)]
pub trait StorageService {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removes `key` from the store. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Shared handles delegate to the underlying store.
impl<T: StorageService + ?Sized> StorageService for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
