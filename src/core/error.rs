//! Registry Errors
//!
//! Failure outcomes of registry calls. Every error is returned before any
//! change is made.

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Blank participant name or out-of-range score.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Participant is already playing in a live match.
    #[error("Participant already in a match: {0}")]
    ParticipantBusy(String),

    /// No live match for the pair.
    #[error("No live match between {home} and {guest}")]
    MatchNotFound {
        /// Home name as given by the caller.
        home: String,
        /// Guest name as given by the caller.
        guest: String,
    },
}

impl RegistryError {
    pub(crate) fn not_found(home: &str, guest: &str) -> Self {
        Self::MatchNotFound {
            home: home.to_string(),
            guest: guest.to_string(),
        }
    }
}
