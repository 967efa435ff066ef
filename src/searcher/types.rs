use super::bracket::integer_root;
use crate::error::{InputError, NearMissError, NmResult};
use crate::prompt::{parse_exponent_value, parse_limit_value};
use serde::{Deserialize, Serialize};

/// Smallest value scanned for both x and y.
pub const DOMAIN_START: u64 = 10;

pub const MIN_EXPONENT: u32 = 3;
pub const MAX_EXPONENT: u32 = 11;

/// The user-facing bound must be strictly greater than this.
pub const MIN_LIMIT_EXCLUSIVE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Exponent n.
    pub n: u32,
    /// Inclusive upper bound k for x and y.
    pub k: u64,
}

impl SearchParameters {
    /// Builds parameters that satisfy the interactive rules (3 <= n <= 11, k > 10).
    ///
    /// The fields stay public so tests can describe degenerate domains
    /// (e.g. `k = 10`) that the prompts would refuse.
    pub fn validated(n: i128, k: i128) -> Result<Self, InputError> {
        Ok(Self {
            n: parse_exponent_value(n)?,
            k: parse_limit_value(k)?,
        })
    }

    /// Number of (x, y) pairs in `[10, k] x [10, k]`.
    pub fn pair_count(&self) -> u128 {
        if self.k < DOMAIN_START {
            0
        } else {
            let side = (self.k - DOMAIN_START + 1) as u128;
            side * side
        }
    }

    /// Checks that every power the scan touches fits in a `u128`.
    ///
    /// The largest sum is `2 * k^n`; its bracketing upper bound is `(r + 1)^n`
    /// where `r` is the integer n-th root of that sum.
    pub fn check_capacity(&self) -> NmResult<()> {
        let fits = (self.k as u128)
            .checked_pow(self.n)
            .and_then(|p| p.checked_mul(2))
            .and_then(|max_sum| (integer_root(max_sum, self.n) + 1).checked_pow(self.n))
            .is_some();

        if fits {
            Ok(())
        } else {
            Err(NearMissError::Overflow {
                n: self.n,
                k: self.k,
            })
        }
    }
}

/// One evaluated (x, y) pair together with its closest n-th power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub x: u64,
    pub y: u64,
    pub z: u128,
    pub n: u32,
    pub sum_powers: u128,
    pub closest_power: u128,
    pub miss: u128,
    pub relative_miss: f64,
}

impl Candidate {
    pub fn relative_miss_percent(&self) -> f64 {
        self.relative_miss * 100.0
    }
}

/// Result of one scan. `complete` is false when the observer stopped it early.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best: Candidate,
    pub pairs_scanned: u128,
    pub pairs_total: u128,
    pub complete: bool,
}
