//! Match Values and Pair Keys
//!
//! A [`Match`] is an immutable snapshot of one contest. Score changes build a
//! new value; nothing is mutated in place, so a value sitting in the ranking
//! index never has its sort key change underneath it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::score::Score;
use crate::core::name::ParticipantName;

// =============================================================================
// MATCH
// =============================================================================

/// One live contest between a home and a guest participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    started_at: DateTime<Utc>,
    home: ParticipantName,
    guest: ParticipantName,
    score: Score,
}

impl Match {
    /// Create a match value.
    pub fn new(
        started_at: DateTime<Utc>,
        home: ParticipantName,
        guest: ParticipantName,
        score: Score,
    ) -> Self {
        Self {
            started_at,
            home,
            guest,
            score,
        }
    }

    /// Create a match at 0 - 0.
    pub fn started(started_at: DateTime<Utc>, home: ParticipantName, guest: ParticipantName) -> Self {
        Self::new(started_at, home, guest, Score::EMPTY)
    }

    /// Same match with a different score.
    #[must_use]
    pub fn with_score(&self, score: Score) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }

    /// When the match started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Home participant.
    pub fn home(&self) -> &ParticipantName {
        &self.home
    }

    /// Guest participant.
    pub fn guest(&self) -> &ParticipantName {
        &self.guest
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Total score (ranking key).
    pub fn total(&self) -> u64 {
        self.score.total()
    }
}

// =============================================================================
// PAIR KEY
// =============================================================================

/// How `(home, guest)` maps to a lookup key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPolicy {
    /// `(A, B)` and `(B, A)` address the same match.
    #[default]
    Unordered,
    /// Home and guest roles are part of the key.
    Ordered,
}

impl PairPolicy {
    /// Parse a policy name (`ordered` / `unordered`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unordered" => Some(Self::Unordered),
            "ordered" => Some(Self::Ordered),
            _ => None,
        }
    }

    /// Canonical key for a pair of names.
    pub fn key(self, home: &str, guest: &str) -> PairKey {
        match self {
            Self::Unordered if guest < home => PairKey::new(guest, home),
            _ => PairKey::new(home, guest),
        }
    }
}

/// Lookup key for a pair of participants.
///
/// Holds both names as separate fields, so no pair of names can collide the
/// way joined strings would (`"a_a" + "b"` vs `"a" + "a_b"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}
