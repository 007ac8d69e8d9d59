//! Ordered registration collection persisted under a single storage key.

use crate::{
    registration::Registration,
    storage::{Result, StorageService},
};

/// Storage key holding the serialized registration list.
pub const REGISTRATIONS_KEY: &str = "norbert-registrations";

/// Reads and writes the registration list through a [`StorageService`].
pub struct RegistrationRepository {
    storage: Box<dyn StorageService>,
}

impl RegistrationRepository {
    /// Creates a repository backed by the given storage.
    pub fn new(storage: Box<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// Returns the stored registrations in insertion order. Unreadable or
    /// malformed data is logged and treated as an empty list.
    pub fn load(&self) -> Vec<Registration> {
        let stored = match self.storage.get(REGISTRATIONS_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("failed to read stored registrations: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Registration>>(&stored) {
            Ok(registrations) => registrations,
            Err(e) => {
                log::error!("error parsing stored registrations: {e}");
                Vec::new()
            }
        }
    }

    /// Appends one registration and returns the updated list.
    pub fn append(
        &self,
        registration: Registration,
    ) -> Result<Vec<Registration>> {
        let mut registrations = self.load();
        log::info!("saving registration {}", registration.id);
        registrations.push(registration);
        self.save(&registrations)?;
        Ok(registrations)
    }

    /// Removes the registration with the given id and returns the updated
    /// list. Remaining entries keep their order.
    pub fn delete(&self, id: &str) -> Result<Vec<Registration>> {
        let registrations = self
            .load()
            .into_iter()
            .filter(|r| r.id != id)
            .collect::<Vec<_>>();
        log::info!("deleting registration {id}");
        self.save(&registrations)?;
        Ok(registrations)
    }

    /// Removes every stored registration.
    pub fn clear(&self) -> Result<()> {
        log::info!("clearing all registrations");
        self.storage.remove(REGISTRATIONS_KEY)
    }

    fn save(&self, registrations: &[Registration]) -> Result<()> {
        let serialized = serde_json::to_string(registrations)?;
        self.storage.set(REGISTRATIONS_KEY, &serialized)
    }
}

#[cfg(test)]
#[path = "./repository_tests.rs"]
mod tests;
