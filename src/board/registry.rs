//! Match Registry
//!
//! Tracks live matches and serves the scoreboard. Three views of the same
//! data are kept in step:
//!
//! - `matches`: pair key -> current [`Match`] (source of truth)
//! - `active`: names currently playing
//! - `ranking`: score-ordered index read by [`MatchRegistry::scoreboard`]
//!
//! All three sit in one [`Board`] behind a single `RwLock`. Every mutation
//! checks all of its preconditions, then applies all of its changes, inside
//! one write-lock critical section, so readers never see the views disagree
//! and two overlapping creates cannot both pass the busy check.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;
use tracing::debug;

use crate::board::events::ScoreboardEvent;
use crate::board::matches::{Match, PairKey, PairPolicy};
use crate::board::ranking::Ranking;
use crate::board::score::Score;
use crate::core::clock::{Clock, StartStamp, SystemClock};
pub use crate::core::error::RegistryError;
use crate::core::name::ParticipantName;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// How `(home, guest)` is matched against stored pairs.
    pub pair_policy: PairPolicy,
    /// Buffered events per subscriber before the slowest one starts lagging.
    pub event_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            pair_policy: PairPolicy::Unordered,
            event_capacity: 256,
        }
    }
}

impl RegistryConfig {
    /// Create config from environment variables.
    ///
    /// - `SCOREBOARD_PAIR_POLICY`: `ordered` or `unordered`
    /// - `SCOREBOARD_EVENT_CAPACITY`: positive integer
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup. Unset or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            pair_policy: lookup("SCOREBOARD_PAIR_POLICY")
                .and_then(|v| PairPolicy::parse(&v))
                .unwrap_or(defaults.pair_policy),
            event_capacity: lookup("SCOREBOARD_EVENT_CAPACITY")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(defaults.event_capacity),
        }
    }
}

// =============================================================================
// BOARD
// =============================================================================

/// The three synchronized views plus the start-stamp generator.
#[derive(Debug, Default)]
struct Board {
    matches: BTreeMap<PairKey, Match>,
    active: BTreeSet<ParticipantName>,
    ranking: Ranking,
    stamps: StartStamp,
}

impl Board {
    /// First name of the pair that is already playing.
    fn busy<'a>(&self, names: [&'a ParticipantName; 2]) -> Option<&'a ParticipantName> {
        names.into_iter().find(|name| self.active.contains(*name))
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Thread-safe registry of live matches.
///
/// Share it across threads with `Arc<MatchRegistry>`.
pub struct MatchRegistry {
    config: RegistryConfig,
    clock: Arc<dyn Clock>,
    board: RwLock<Board>,
    events: broadcast::Sender<ScoreboardEvent>,
}

impl MatchRegistry {
    /// Create a registry on the system clock.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a registry stamping start times from `clock`.
    pub fn with_clock(config: RegistryConfig, clock: Arc<dyn Clock>) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        Self {
            config,
            clock,
            board: RwLock::new(Board::default()),
            events,
        }
    }

    /// Registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Start a match between two idle participants at 0 - 0.
    pub fn create_match(&self, home: &str, guest: &str) -> Result<Match, RegistryError> {
        let home = ParticipantName::parse(home)?;
        let guest = ParticipantName::parse(guest)?;

        let mut board = self.write();

        if let Some(name) = board.busy([&home, &guest]) {
            return Err(RegistryError::ParticipantBusy(name.to_string()));
        }

        let key = self.config.pair_policy.key(home.as_str(), guest.as_str());
        let started_at = board.stamps.issue(self.clock.as_ref());
        let entry = Match::started(started_at, home.clone(), guest.clone());

        board.matches.insert(key, entry.clone());
        board.active.insert(home);
        board.active.insert(guest);
        board.ranking.insert(&entry);

        debug!(home = %entry.home(), guest = %entry.guest(), started_at = %started_at, "match started");
        self.publish(ScoreboardEvent::MatchStarted {
            entry: entry.clone(),
        });

        Ok(entry)
    }

    /// Replace the score of a live match.
    ///
    /// `score` is read in the caller's argument order. If the pair is
    /// addressed as `(guest, home)` under [`PairPolicy::Unordered`], it is
    /// swapped into the match's own orientation before storing.
    pub fn update_match(
        &self,
        home: &str,
        guest: &str,
        score: Score,
    ) -> Result<Match, RegistryError> {
        let key = self.config.pair_policy.key(home, guest);

        let mut board = self.write();

        let previous = board
            .matches
            .get(&key)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(home, guest))?;

        let oriented = if previous.home().as_str() == home {
            score
        } else {
            score.swapped()
        };
        let current = previous.with_score(oriented);

        // Stamps are unique, so the move cannot clash. If it ever did, the
        // lookup keeps `previous` to stay in step with the ranking.
        let moved = board.ranking.replace(&previous, &current);
        debug_assert!(moved, "ranking out of step with match lookup");
        if moved {
            board.matches.insert(key, current.clone());
        }

        debug!(
            home = %current.home(),
            guest = %current.guest(),
            score = %current.score(),
            total = current.total(),
            "score updated"
        );
        self.publish(ScoreboardEvent::ScoreUpdated {
            previous,
            current: current.clone(),
        });

        Ok(current)
    }

    /// Remove a live match. Both participants become free to play again.
    ///
    /// Returns the final value of the match.
    pub fn finish_match(&self, home: &str, guest: &str) -> Result<Match, RegistryError> {
        let key = self.config.pair_policy.key(home, guest);

        let mut board = self.write();

        let entry = board
            .matches
            .remove(&key)
            .ok_or_else(|| RegistryError::not_found(home, guest))?;

        let removed = board.ranking.remove(&entry);
        debug_assert!(removed, "ranking out of step with match lookup");
        board.active.remove(entry.home());
        board.active.remove(entry.guest());

        debug!(home = %entry.home(), guest = %entry.guest(), score = %entry.score(), "match finished");
        self.publish(ScoreboardEvent::MatchFinished {
            entry: entry.clone(),
        });

        Ok(entry)
    }

    /// Owned snapshot of all live matches, highest total first, most
    /// recently started first among equal totals.
    pub fn scoreboard(&self) -> Vec<Match> {
        self.read().ranking.snapshot()
    }

    /// Current value of a live match.
    pub fn get_match(&self, home: &str, guest: &str) -> Option<Match> {
        let key = self.config.pair_policy.key(home, guest);
        self.read().matches.get(&key).cloned()
    }

    /// Is the participant playing in a live match.
    pub fn is_engaged(&self, name: &str) -> bool {
        self.read().active.contains(name)
    }

    /// Number of live matches.
    pub fn len(&self) -> usize {
        self.read().matches.len()
    }

    /// Are there no live matches.
    pub fn is_empty(&self) -> bool {
        self.read().matches.is_empty()
    }

    /// Subscribe to change events committed from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ScoreboardEvent> {
        self.events.subscribe()
    }

    /// Called with the write lock held, so events go out in commit order.
    fn publish(&self, event: ScoreboardEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    // The board is consistent whenever a lock is released (no operation
    // panics between its first and last change), so a poisoned lock is
    // still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Board> {
        self.board.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Board> {
        self.board.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
