//! Match Score
//!
//! Immutable (home, guest) tally pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::RegistryError;

/// Score of a match: goals (or points) for each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Home side tally.
    pub home: u32,
    /// Guest side tally.
    pub guest: u32,
}

impl Score {
    /// Score of a freshly started match.
    pub const EMPTY: Score = Score { home: 0, guest: 0 };

    /// Create a score.
    pub const fn new(home: u32, guest: u32) -> Self {
        Self { home, guest }
    }

    /// Sum of both tallies. Primary ranking key.
    #[inline]
    pub fn total(self) -> u64 {
        u64::from(self.home) + u64::from(self.guest)
    }

    /// The same score seen from the other side.
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            home: self.guest,
            guest: self.home,
        }
    }
}

/// Build a score from raw signed input, rejecting negative components.
impl TryFrom<(i64, i64)> for Score {
    type Error = RegistryError;

    fn try_from((home, guest): (i64, i64)) -> Result<Self, Self::Error> {
        let component = |value: i64| {
            u32::try_from(value).map_err(|_| {
                RegistryError::InvalidArgument(format!(
                    "score component {value} is out of range (must be between 0 and {})",
                    u32::MAX
                ))
            })
        };
        Ok(Self::new(component(home)?, component(guest)?))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        assert_eq!(Score::EMPTY.total(), 0);
        assert_eq!(Score::new(3, 1).total(), 4);
        assert_eq!(Score::new(u32::MAX, u32::MAX).total(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_swapped() {
        assert_eq!(Score::new(3, 1).swapped(), Score::new(1, 3));
        assert_eq!(Score::new(2, 2).swapped(), Score::new(2, 2));
    }

    #[test]
    fn test_try_from_rejects_negative() {
        assert!(matches!(
            Score::try_from((-1, 0)),
            Err(RegistryError::InvalidArgument(_))
        ));
        assert!(matches!(
            Score::try_from((0, -5)),
            Err(RegistryError::InvalidArgument(_))
        ));
        assert!(matches!(
            Score::try_from((i64::from(u32::MAX) + 1, 0)),
            Err(RegistryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_try_from_accepts_non_negative() {
        assert_eq!(Score::try_from((0, 0)).unwrap(), Score::EMPTY);
        assert_eq!(Score::try_from((5, 2)).unwrap(), Score::new(5, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(10, 2).to_string(), "10 - 2");
    }
}
