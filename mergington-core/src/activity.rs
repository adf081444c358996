use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The activity table, keyed by activity name in seed order.
pub type Roster = IndexMap<String, Activity>;

/// A student signed up for an activity, identified by email.
///
/// The email is stored verbatim; no format validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Participant(pub String);

impl Participant {
    /// Creates a `Participant` from any string-like value.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Participant {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Participant {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Participant {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An extracurricular offering and its current sign-ups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Activity {
    /// Free-text summary shown to students.
    pub description: String,
    /// Human-readable meeting time.
    pub schedule: String,
    /// Advertised capacity. Informational only; enrollment does not check it.
    pub max_participants: u32,
    /// Signed-up students in signup order. Each email appears at most once.
    pub participants: Vec<Participant>,
}

impl Activity {
    /// Creates an activity with no participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replaces the participant list, dropping repeated emails after their first occurrence.
    #[must_use]
    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.clear();
        for email in emails {
            let participant = Participant::new(email);
            if !self.participants.contains(&participant) {
                self.participants.push(participant);
            }
        }
        self
    }

    /// Returns `true` if `email` is in the participant list (exact match).
    #[must_use]
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of participants beyond the advertised capacity, if any.
    #[must_use]
    pub fn overflow(&self) -> usize {
        let cap = usize::try_from(self.max_participants).unwrap_or(usize::MAX);
        self.participants.len().saturating_sub(cap)
    }
}
