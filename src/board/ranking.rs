//! Ranking Index
//!
//! Live matches sorted by total score descending, then start time descending
//! (most recently started first). Backed by a BTreeMap so the order is kept
//! on insert and iteration is always sorted.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::board::matches::Match;
use crate::core::name::ParticipantName;

/// Scoreboard order between two matches.
///
/// `Less` means `a` ranks above `b`.
pub fn rank_order(a: &Match, b: &Match) -> Ordering {
    b.total()
        .cmp(&a.total())
        .then_with(|| b.started_at().cmp(&a.started_at()))
}

/// Sort key of a match inside the index.
///
/// Ascending key order is the reverse of scoreboard order. The home name only
/// separates matches whose total and start time are both equal; it never
/// affects the documented order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct RankKey {
    total: u64,
    started_at: DateTime<Utc>,
    home: ParticipantName,
}

impl RankKey {
    fn of(m: &Match) -> Self {
        Self {
            total: m.total(),
            started_at: m.started_at(),
            home: m.home().clone(),
        }
    }
}

/// Score-ordered view of live matches.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Keys ascend; the scoreboard is read back to front.
    entries: BTreeMap<RankKey, Match>,
}

impl Ranking {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a match.
    ///
    /// Returns false if an entry with the same key was already present; the
    /// existing entry is left untouched.
    pub fn insert(&mut self, m: &Match) -> bool {
        let key = RankKey::of(m);
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, m.clone());
        true
    }

    /// Remove a match.
    ///
    /// Returns true if this exact value was present and removed.
    pub fn remove(&mut self, m: &Match) -> bool {
        let key = RankKey::of(m);
        if self.entries.get(&key) != Some(m) {
            return false;
        }
        self.entries.remove(&key);
        true
    }

    /// Swap `old` for `new`.
    ///
    /// The old entry is removed under its own key before the new one is
    /// inserted under the new key, so a score change moves the match.
    /// Returns false and leaves the index untouched if `old` is not present
    /// or another entry already holds the new key.
    pub fn replace(&mut self, old: &Match, new: &Match) -> bool {
        let old_key = RankKey::of(old);
        let new_key = RankKey::of(new);
        if self.entries.get(&old_key) != Some(old) {
            return false;
        }
        if new_key != old_key && self.entries.contains_key(&new_key) {
            return false;
        }
        self.entries.remove(&old_key);
        self.entries.insert(new_key, new.clone());
        true
    }

    /// Does the index hold this exact value.
    pub fn contains(&self, m: &Match) -> bool {
        self.entries.get(&RankKey::of(m)) == Some(m)
    }

    /// Matches in scoreboard order.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.entries.values().rev()
    }

    /// Owned copy of the scoreboard.
    pub fn snapshot(&self) -> Vec<Match> {
        self.iter().cloned().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the index empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::score::Score;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 19, 0, 0).unwrap()
    }

    fn game(home: &str, guest: &str, minute: i64, score: (u32, u32)) -> Match {
        Match::new(
            kickoff() + Duration::minutes(minute),
            ParticipantName::parse(home).unwrap(),
            ParticipantName::parse(guest).unwrap(),
            Score::new(score.0, score.1),
        )
    }

    fn homes(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.home().as_str()).collect()
    }

    #[test]
    fn test_orders_by_total_descending() {
        let mut ranking = Ranking::new();
        ranking.insert(&game("A", "a", 0, (3, 2)));
        ranking.insert(&game("B", "b", 1, (6, 4)));
        ranking.insert(&game("C", "c", 2, (1, 1)));

        assert_eq!(homes(&ranking.snapshot()), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_equal_totals_most_recent_first() {
        let mut ranking = Ranking::new();
        ranking.insert(&game("Uruguay", "Italy", 0, (6, 6)));
        ranking.insert(&game("Spain", "Brazil", 5, (10, 2)));
        ranking.insert(&game("Mexico", "Canada", 10, (0, 5)));

        assert_eq!(homes(&ranking.snapshot()), vec!["Spain", "Uruguay", "Mexico"]);
    }

    #[test]
    fn test_replace_moves_entry() {
        let mut ranking = Ranking::new();
        let first = game("A", "a", 0, (0, 0));
        let second = game("B", "b", 1, (0, 0));
        ranking.insert(&first);
        ranking.insert(&second);
        assert_eq!(homes(&ranking.snapshot()), vec!["B", "A"]);

        let scored = first.with_score(Score::new(1, 0));
        assert!(ranking.replace(&first, &scored));

        assert_eq!(homes(&ranking.snapshot()), vec!["A", "B"]);
        assert!(ranking.contains(&scored));
        assert!(!ranking.contains(&first));
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn test_remove_requires_exact_value() {
        let mut ranking = Ranking::new();
        let live = game("A", "a", 0, (2, 1));
        ranking.insert(&live);

        // Same key fields, different guest: not the stored value.
        let impostor = game("A", "z", 0, (2, 1));
        assert!(!ranking.remove(&impostor));
        assert_eq!(ranking.len(), 1);

        assert!(ranking.remove(&live));
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_replace_onto_taken_key_changes_nothing() {
        let mut ranking = Ranking::new();
        let blocker = game("A", "a", 0, (3, 0));
        let mover = game("A", "b", 5, (0, 0));
        ranking.insert(&blocker);
        ranking.insert(&mover);

        // Same home, total and start time as `blocker`.
        let clash = Match::new(
            blocker.started_at(),
            mover.home().clone(),
            mover.guest().clone(),
            Score::new(2, 1),
        );
        assert!(!ranking.replace(&mover, &clash));

        assert!(ranking.contains(&mover));
        assert!(ranking.contains(&blocker));
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn test_replace_with_same_key() {
        let mut ranking = Ranking::new();
        let m = game("A", "a", 0, (2, 1));
        ranking.insert(&m);

        // 2 - 1 to 1 - 2 keeps the total, so the key is unchanged.
        let flipped = m.with_score(Score::new(1, 2));
        assert!(ranking.replace(&m, &flipped));
        assert!(ranking.contains(&flipped));
        assert_eq!(ranking.len(), 1);
    }

    #[test]
    fn test_replace_missing_old_changes_nothing() {
        let mut ranking = Ranking::new();
        let live = game("A", "a", 0, (0, 0));
        ranking.insert(&live);

        let stranger = game("B", "b", 1, (0, 0));
        assert!(!ranking.replace(&stranger, &stranger.with_score(Score::new(1, 0))));
        assert_eq!(ranking.snapshot(), vec![live]);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut ranking = Ranking::new();
        let m = game("A", "a", 0, (0, 0));
        assert!(ranking.insert(&m));
        assert!(!ranking.insert(&m));
        assert_eq!(ranking.len(), 1);
    }

    #[test]
    fn test_rank_order_contract() {
        let low = game("A", "a", 5, (1, 0));
        let high = game("B", "b", 0, (2, 0));
        let older = game("C", "c", 0, (1, 0));

        assert_eq!(rank_order(&high, &low), Ordering::Less);
        assert_eq!(rank_order(&low, &high), Ordering::Greater);
        assert_eq!(rank_order(&low, &older), Ordering::Less);
    }

    proptest! {
        #[test]
        fn prop_snapshot_is_sorted(
            entries in prop::collection::vec((0u32..20, 0u32..20, 0i64..1000), 0..40)
        ) {
            let mut ranking = Ranking::new();
            for (i, (home, guest, minute)) in entries.iter().enumerate() {
                ranking.insert(&game(&format!("H{i}"), &format!("G{i}"), *minute, (*home, *guest)));
            }

            let snapshot = ranking.snapshot();
            prop_assert_eq!(snapshot.len(), entries.len());
            for pair in snapshot.windows(2) {
                prop_assert_ne!(rank_order(&pair[0], &pair[1]), Ordering::Greater);
            }
        }
    }
}
