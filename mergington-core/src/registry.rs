//! In-memory activity registry.
//!
//! Holds the seeded roster behind a lock. Enroll and withdraw keep the write
//! lock across their membership check and mutation, so two identical requests
//! can never both succeed.

use std::sync::RwLock;

use tracing::{debug, info};

use crate::activity::{Participant, Roster};
use crate::error::RegistryError;
use crate::seed::seed_roster;

/// Thread-safe table of activities and their participants.
#[derive(Debug)]
pub struct ActivityRegistry {
    roster: RwLock<Roster>,
}

impl ActivityRegistry {
    /// Create a registry over an explicit roster.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self { roster: RwLock::new(roster) }
    }

    /// Create a registry holding the canonical seeded activities.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_roster())
    }

    /// Snapshot of every activity and its current participants.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread panicked
    /// while holding the write lock).
    #[must_use]
    pub fn list(&self) -> Roster {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.roster
            .read()
            .expect("activity registry read lock poisoned")
            .clone()
    }

    /// Append `email` to the participants of `activity`.
    ///
    /// Capacity is not checked; an enrollment past `max_participants` succeeds.
    ///
    /// # Errors
    /// Returns [`RegistryError::ActivityNotFound`] if `activity` was never seeded, or
    /// [`RegistryError::AlreadySignedUp`] if `email` is already enrolled.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn enroll(&self, activity: &str, email: &str) -> Result<String, RegistryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut roster = self
            .roster
            .write()
            .expect("activity registry write lock poisoned");

        let entry = roster.get_mut(activity).ok_or(RegistryError::ActivityNotFound)?;
        if entry.is_enrolled(email) {
            return Err(RegistryError::AlreadySignedUp {
                email: email.to_owned(),
                activity: activity.to_owned(),
            });
        }
        entry.participants.push(Participant::new(email));

        let overflow = entry.overflow();
        if overflow > 0 {
            info!(activity, overflow, "activity enrolled past advertised capacity");
        }
        debug!(activity, email, count = entry.participants.len(), "participant enrolled");

        Ok(format!("Signed up {email} for {activity}"))
    }

    /// Remove `email` from the participants of `activity`.
    ///
    /// # Errors
    /// Returns [`RegistryError::ActivityNotFound`] if `activity` was never seeded, or
    /// [`RegistryError::NotSignedUp`] if `email` is not enrolled.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn withdraw(&self, activity: &str, email: &str) -> Result<String, RegistryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut roster = self
            .roster
            .write()
            .expect("activity registry write lock poisoned");

        let entry = roster.get_mut(activity).ok_or(RegistryError::ActivityNotFound)?;
        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotSignedUp {
                email: email.to_owned(),
                activity: activity.to_owned(),
            });
        };
        // `remove`, not `swap_remove`: the rest keep signup order.
        entry.participants.remove(pos);
        debug!(activity, email, count = entry.participants.len(), "participant withdrawn");

        Ok(format!("Unregistered {email} from {activity}"))
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
