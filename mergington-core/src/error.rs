/// Broad classification of a registry failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The activity, or the participant within it, does not exist.
    NotFound,
    /// The participant is already enrolled.
    Conflict,
}

/// Errors produced by the `mergington-core` crate.
///
/// The `Display` text of every variant is the exact message reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No activity with the requested name was seeded.
    #[error("Activity not found")]
    ActivityNotFound,

    /// The email is already in the activity's participant list.
    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },

    /// The email is not in the activity's participant list.
    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },
}

impl RegistryError {
    /// Returns the taxonomy bucket for this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound | Self::NotSignedUp { .. } => ErrorKind::NotFound,
            Self::AlreadySignedUp { .. } => ErrorKind::Conflict,
        }
    }
}
