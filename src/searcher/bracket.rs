use super::types::Candidate;

/// Consecutive n-th powers around a sum: `lower_power <= sum <= upper_power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub z: u128,
    pub lower_power: u128,
    pub upper_power: u128,
}

impl Bracket {
    /// Picks the side closer to `s` as `(z, power, miss)`. Ties go to the lower side.
    #[inline(always)]
    pub fn closest(&self, s: u128) -> (u128, u128, u128) {
        let miss_from_lower = s - self.lower_power;
        let miss_from_upper = self.upper_power - s;

        if miss_from_lower <= miss_from_upper {
            (self.z, self.lower_power, miss_from_lower)
        } else {
            (self.z + 1, self.upper_power, miss_from_upper)
        }
    }
}

#[inline(always)]
fn power_exceeds(base: u128, n: u32, s: u128) -> bool {
    base.checked_pow(n).map_or(true, |p| p > s)
}

/// Largest `z >= 1` with `z^n <= s` (clamped to 1 for `s < 1`).
///
/// The float estimate only picks the starting point; the two correction loops
/// make the result exact regardless of rounding in `powf`.
pub fn integer_root(s: u128, n: u32) -> u128 {
    let mut z = ((s as f64).powf(1.0 / n as f64) as u128).max(1);

    while !power_exceeds(z + 1, n, s) {
        z += 1;
    }
    while z > 1 && power_exceeds(z, n, s) {
        z -= 1;
    }
    z
}

/// Brackets `s` between `z^n` and `(z+1)^n`.
///
/// Callers must have checked capacity for `s` (see `SearchParameters::check_capacity`).
pub fn bracket(s: u128, n: u32) -> Bracket {
    let z = integer_root(s, n);
    Bracket {
        z,
        lower_power: z.pow(n),
        upper_power: (z + 1).pow(n),
    }
}

/// Evaluates a single pair: closest n-th power to `x^n + y^n` and its relative miss.
pub fn evaluate_pair(x: u64, y: u64, n: u32) -> Candidate {
    let sum_powers = (x as u128).pow(n) + (y as u128).pow(n);
    let (z, closest_power, miss) = bracket(sum_powers, n).closest(sum_powers);

    Candidate {
        x,
        y,
        z,
        n,
        sum_powers,
        closest_power,
        miss,
        relative_miss: miss as f64 / sum_powers as f64,
    }
}
