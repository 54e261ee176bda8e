//! # Live Scoreboard
//!
//! In-memory registry of live matches with a score-ordered scoreboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     LIVE SCOREBOARD                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Shared primitives                         │
//! │  ├── name.rs     - Validated participant names               │
//! │  └── clock.rs    - Strictly increasing start stamps          │
//! │                                                              │
//! │  board/          - Match tracking (thread-safe)              │
//! │  ├── score.rs    - (home, guest) tally                       │
//! │  ├── matches.rs  - Immutable match values, pair keys         │
//! │  ├── ranking.rs  - Score-ordered index                       │
//! │  ├── events.rs   - Change notifications                      │
//! │  └── registry.rs - Registry keeping the views in step        │
//! │                                                              │
//! │  console/        - Line-oriented front end                   │
//! │  ├── command.rs  - Command parsing                           │
//! │  └── render.rs   - Text / JSON output                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//!
//! The scoreboard lists matches by total score, highest first. Among equal
//! totals the most recently started match comes first. Start stamps are
//! strictly increasing, so the order is total.
//!
//! ```
//! use live_scoreboard::{MatchRegistry, Score};
//!
//! let registry = MatchRegistry::default();
//! registry.create_match("Mexico", "Canada").unwrap();
//! registry.create_match("Spain", "Brazil").unwrap();
//! registry.update_match("Mexico", "Canada", Score::new(0, 5)).unwrap();
//!
//! let board = registry.scoreboard();
//! assert_eq!(board[0].home().as_str(), "Mexico");
//! assert_eq!(board[1].home().as_str(), "Spain");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod board;
pub mod console;
pub mod core;

// Re-export commonly used types
pub use board::{
    Match, MatchRegistry, PairPolicy, RegistryConfig, RegistryError, Score, ScoreboardEvent,
};
pub use console::{Console, ConsoleConfig, OutputFormat};
pub use crate::core::{Clock, ManualClock, ParticipantName, SystemClock};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
