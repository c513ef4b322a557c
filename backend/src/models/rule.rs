//! Collatz-type iteration rules.
//!
//! Binary rule (classic):
//!
//! ```text
//! n -> n/2        if n ≡ 0 (mod 2)
//! n -> 3n + 1     if n ≡ 1 (mod 2)
//! ```
//!
//! Ternary rule (experimental, not proven to converge):
//!
//! ```text
//! n -> n/3            if n ≡ 0 (mod 3)
//! n -> (4n + 1)/3     if n ≡ 1 (mod 3)
//! n -> (2n + 1)/3     if n ≡ 2 (mod 3)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ShrubError, ShrubResult};

/// Smallest start whose binary orbit climbs past `u64::MAX` (peak ~2.1e19).
///
/// Every start below it reaches 1 without overflowing, so this is the largest
/// exclusive sampling bound a render can use.
pub const MAX_SAFE_START: u64 = 12_327_829_503;

/// Iteration scheme selected in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Binary,
    Ternary,
}

impl Scheme {
    /// Successor of `n` under this rule.
    ///
    /// Returns `None` when the successor does not fit in a `u64`.
    /// `n = 0` maps to 0 under both rules; callers reject it before iterating.
    pub fn checked_next(self, n: u64) -> Option<u64> {
        match self {
            Scheme::Binary => {
                if n % 2 == 0 {
                    Some(n / 2)
                } else {
                    n.checked_mul(3)?.checked_add(1)
                }
            }
            Scheme::Ternary => match n % 3 {
                0 => Some(n / 3),
                1 => Some(n.checked_mul(4)?.checked_add(1)? / 3),
                _ => Some(n.checked_mul(2)?.checked_add(1)? / 3),
            },
        }
    }

    /// Successor of `n`, failing on zero and on overflow.
    pub fn next(self, n: u64) -> ShrubResult<u64> {
        if n == 0 {
            return Err(ShrubError::InvalidStart(0));
        }
        self.checked_next(n).ok_or(ShrubError::Overflow {
            start: n,
            step: 0,
            value: n,
        })
    }

    /// Heading change (radians) applied when leaving `n`.
    ///
    /// The turn is keyed on the current value, not on its successor.
    pub fn turn(self, n: u64, left_rad: f64, right_rad: f64) -> f64 {
        match self {
            Scheme::Binary => {
                if n % 2 == 0 {
                    left_rad
                } else {
                    -right_rad
                }
            }
            Scheme::Ternary => match n % 3 {
                0 => left_rad,
                1 => -right_rad,
                _ => 0.5 * left_rad,
            },
        }
    }

    /// Record-long reference trajectory drawn in black.
    pub fn hero(self) -> u64 {
        match self {
            Scheme::Binary => 837_799,
            Scheme::Ternary => 91,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Binary => "binary",
            Scheme::Ternary => "ternary",
        }
    }

    /// Label used by the dashboard dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Scheme::Binary => "Binary 3n+1",
            Scheme::Ternary => "Ternary variant",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ShrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Scheme::Binary),
            "ternary" => Ok(Scheme::Ternary),
            _ => Err(ShrubError::InvalidScheme(s.to_string())),
        }
    }
}

/// Number of iterations needed to reach 1, or `None` if `max_steps` is hit first.
pub fn stopping_time(start: u64, scheme: Scheme, max_steps: usize) -> ShrubResult<Option<usize>> {
    if start == 0 {
        return Err(ShrubError::InvalidStart(start));
    }

    let mut n = start;
    let mut steps = 0;
    while n != 1 {
        if steps >= max_steps {
            return Ok(None);
        }
        n = scheme.checked_next(n).ok_or(ShrubError::Overflow {
            start,
            step: steps,
            value: n,
        })?;
        steps += 1;
    }
    Ok(Some(steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_next() {
        assert_eq!(Scheme::Binary.next(10).unwrap(), 5);
        assert_eq!(Scheme::Binary.next(5).unwrap(), 16);
        assert_eq!(Scheme::Binary.next(1).unwrap(), 4);
    }

    #[test]
    fn test_ternary_next_each_residue() {
        assert_eq!(Scheme::Ternary.next(9).unwrap(), 3);
        // 4 ≡ 1 (mod 3): (16 + 1) / 3 = 5
        assert_eq!(Scheme::Ternary.next(4).unwrap(), 5);
        // 5 ≡ 2 (mod 3): (10 + 1) / 3 = 3
        assert_eq!(Scheme::Ternary.next(5).unwrap(), 3);
        assert_eq!(Scheme::Ternary.next(2).unwrap(), 1);
    }

    #[test]
    fn test_next_zero_rejected() {
        assert_eq!(Scheme::Binary.next(0), Err(ShrubError::InvalidStart(0)));
        assert_eq!(Scheme::Ternary.next(0), Err(ShrubError::InvalidStart(0)));
    }

    #[test]
    fn test_next_overflow() {
        let odd = u64::MAX;
        assert!(Scheme::Binary.checked_next(odd).is_none());
        assert!(matches!(
            Scheme::Binary.next(odd),
            Err(ShrubError::Overflow { .. })
        ));
    }

    #[test]
    fn test_first_unsafe_start_overflows() {
        assert!(matches!(
            stopping_time(MAX_SAFE_START, Scheme::Binary, 100_000),
            Err(ShrubError::Overflow { start: MAX_SAFE_START, .. })
        ));
        // Below the bound the orbit stays inside u64.
        assert!(stopping_time(MAX_SAFE_START - 1, Scheme::Binary, 100_000)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_turn_binary() {
        assert_eq!(Scheme::Binary.turn(4, 0.1, 0.3), 0.1);
        assert_eq!(Scheme::Binary.turn(7, 0.1, 0.3), -0.3);
    }

    #[test]
    fn test_turn_ternary() {
        assert_eq!(Scheme::Ternary.turn(6, 0.2, 0.3), 0.2);
        assert_eq!(Scheme::Ternary.turn(7, 0.2, 0.3), -0.3);
        assert_eq!(Scheme::Ternary.turn(8, 0.2, 0.3), 0.1);
    }

    #[test]
    fn test_hero_values() {
        assert_eq!(Scheme::Binary.hero(), 837_799);
        assert_eq!(Scheme::Ternary.hero(), 91);
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!("binary".parse::<Scheme>().unwrap(), Scheme::Binary);
        assert_eq!(" Ternary ".parse::<Scheme>().unwrap(), Scheme::Ternary);
        assert!(matches!(
            "quinary".parse::<Scheme>(),
            Err(ShrubError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_scheme_serde_lowercase() {
        let json = serde_json::to_string(&Scheme::Ternary).unwrap();
        assert_eq!(json, "\"ternary\"");
        let parsed: Scheme = serde_json::from_str("\"binary\"").unwrap();
        assert_eq!(parsed, Scheme::Binary);
    }

    #[test]
    fn test_stopping_time_known_values() {
        assert_eq!(stopping_time(1, Scheme::Binary, 1000).unwrap(), Some(0));
        assert_eq!(stopping_time(27, Scheme::Binary, 1000).unwrap(), Some(111));
        assert_eq!(stopping_time(837_799, Scheme::Binary, 1000).unwrap(), Some(524));
    }

    #[test]
    fn test_stopping_time_cap() {
        assert_eq!(stopping_time(27, Scheme::Binary, 10).unwrap(), None);
    }

    #[test]
    fn test_stopping_time_ternary_small() {
        // 5 -> 3 -> 1
        assert_eq!(stopping_time(5, Scheme::Ternary, 100).unwrap(), Some(2));
    }
}
