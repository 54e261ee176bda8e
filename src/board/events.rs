//! Scoreboard Events
//!
//! Change notifications published by the registry after each committed
//! mutation. Live feed only: nothing is retained once delivered.

use serde::{Deserialize, Serialize};

use crate::board::matches::Match;

/// A committed change to the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoreboardEvent {
    /// A match was created at 0 - 0.
    MatchStarted {
        /// The new match.
        entry: Match,
    },

    /// A match's score was replaced.
    ScoreUpdated {
        /// Value before the update.
        previous: Match,
        /// Value after the update.
        current: Match,
    },

    /// A match was removed from the board.
    MatchFinished {
        /// Final value of the match.
        entry: Match,
    },
}
