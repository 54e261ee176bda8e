//! Scoreboard Module
//!
//! Live match tracking.
//!
//! ## Module Structure
//!
//! - `score`: (home, guest) tally value
//! - `matches`: immutable match value and pair keys
//! - `ranking`: score-ordered index
//! - `events`: change notifications
//! - `registry`: thread-safe registry tying the views together

pub mod events;
pub mod matches;
pub mod ranking;
pub mod registry;
pub mod score;

// Re-export key types
pub use events::ScoreboardEvent;
pub use matches::{Match, PairKey, PairPolicy};
pub use ranking::{rank_order, Ranking};
pub use registry::{MatchRegistry, RegistryConfig, RegistryError};
pub use score::Score;
