//! Run-length policies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from building or parsing a [`RunPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Runs must cover at least one cell.
    #[error("policy: minimum run length must be at least 1")]
    ZeroMinimum,
    /// The maximum run is shorter than the minimum.
    #[error("policy: maximum run length {max} is below minimum {min}")]
    MaxBelowMin { min: u32, max: u32 },
    /// Text that is not of the form `MIN,MAX`.
    #[error("policy: expected MIN,MAX, got {0:?}")]
    Syntax(String),
}

/// Bounds on the length of a straight run before a mandatory turn.
///
/// Always satisfies `1 <= min_move <= max_move`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(u32, u32)", into = "(u32, u32)")
)]
pub struct RunPolicy {
    min_move: u32,
    max_move: u32,
}

impl RunPolicy {
    /// Between one and three cells per run.
    pub const CRUCIBLE: Self = Self {
        min_move: 1,
        max_move: 3,
    };

    /// Between four and ten cells per run.
    pub const ULTRA_CRUCIBLE: Self = Self {
        min_move: 4,
        max_move: 10,
    };

    /// Create a policy, checking `1 <= min_move <= max_move`.
    pub fn new(min_move: u32, max_move: u32) -> Result<Self, PolicyError> {
        if min_move == 0 {
            return Err(PolicyError::ZeroMinimum);
        }
        if max_move < min_move {
            return Err(PolicyError::MaxBelowMin {
                min: min_move,
                max: max_move,
            });
        }
        Ok(Self { min_move, max_move })
    }

    /// Shortest legal run.
    #[inline]
    pub fn min_move(self) -> u32 {
        self.min_move
    }

    /// Longest legal run.
    #[inline]
    pub fn max_move(self) -> u32 {
        self.max_move
    }

    /// Whether a run of `k` cells is legal.
    #[inline]
    pub fn allows(self, k: u32) -> bool {
        (self.min_move..=self.max_move).contains(&k)
    }
}

impl TryFrom<(u32, u32)> for RunPolicy {
    type Error = PolicyError;

    fn try_from((min, max): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<RunPolicy> for (u32, u32) {
    fn from(p: RunPolicy) -> Self {
        (p.min_move, p.max_move)
    }
}

impl FromStr for RunPolicy {
    type Err = PolicyError;

    /// Parse `MIN,MAX`, e.g. `"4,10"`. Whitespace around either number is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || PolicyError::Syntax(s.to_string());
        let (min, max) = s.split_once(',').ok_or_else(syntax)?;
        let min = min.trim().parse().map_err(|_| syntax())?;
        let max = max.trim().parse().map_err(|_| syntax())?;
        Self::new(min, max)
    }
}

impl fmt::Display for RunPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min_move, self.max_move)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn policy_round_trip() {
        let json = serde_json::to_string(&RunPolicy::ULTRA_CRUCIBLE).unwrap();
        assert_eq!(json, "[4,10]");
        let back: RunPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RunPolicy::ULTRA_CRUCIBLE);
    }

    #[test]
    fn invalid_policy_rejected() {
        assert!(serde_json::from_str::<RunPolicy>("[3,1]").is_err());
    }
}
