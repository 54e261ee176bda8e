//! Core primitives.
//!
//! Participant identity, start-time stamping and the error type shared by
//! the board and the console.

pub mod clock;
pub mod error;
pub mod name;

// Re-export core types
pub use clock::{Clock, ManualClock, StartStamp, SystemClock};
pub use error::RegistryError;
pub use name::ParticipantName;
