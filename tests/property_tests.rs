use near_miss::searcher::{bracket, evaluate_pair, integer_root, SearchParameters};
use proptest::prelude::*;

// --- STRATEGIES ---

// Pairs inside the domain the exponent can hold without overflow.
prop_compose! {
    fn arb_pair()(n in 3u32..=11)(
        n in Just(n),
        x in 10u64..=max_limit(n),
        y in 10u64..=max_limit(n)
    ) -> (u64, u64, u32) {
        (x, y, n)
    }
}

fn max_limit(n: u32) -> u64 {
    // Largest k whose scan fits in 128 bits, rounded down for speed.
    match n {
        3 => 1_000_000,
        4..=5 => 100_000,
        6..=8 => 10_000,
        _ => 2_988,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_bracketing_holds((x, y, n) in arb_pair()) {
        let c = evaluate_pair(x, y, n);
        let b = bracket(c.sum_powers, n);

        prop_assert!(b.lower_power <= c.sum_powers);
        prop_assert!(c.sum_powers <= b.upper_power);
        prop_assert!(c.z == b.z || c.z == b.z + 1);
        prop_assert_eq!(c.closest_power, c.z.pow(n));

        let other = if c.z == b.z { b.upper_power } else { b.lower_power };
        prop_assert!(c.miss <= c.sum_powers.abs_diff(other));
    }

    #[test]
    fn test_relative_miss_is_exact_fraction((x, y, n) in arb_pair()) {
        let c = evaluate_pair(x, y, n);
        prop_assert_eq!(c.sum_powers, (x as u128).pow(n) + (y as u128).pow(n));
        prop_assert_eq!(c.miss, c.sum_powers.abs_diff(c.closest_power));
        prop_assert_eq!(c.relative_miss, c.miss as f64 / c.sum_powers as f64);
        prop_assert!(c.relative_miss >= 0.0 && c.relative_miss < 1.0);
    }

    #[test]
    fn test_pair_is_symmetric((x, y, n) in arb_pair()) {
        prop_assert_eq!(evaluate_pair(x, y, n).relative_miss, evaluate_pair(y, x, n).relative_miss);
    }

    #[test]
    fn test_integer_root_is_floor(s in 1u128..=u128::MAX / 2, n in 3u32..=11) {
        let z = integer_root(s, n);
        prop_assert!(z.pow(n) <= s);
        prop_assert!((z + 1).checked_pow(n).map_or(true, |p| p > s));
    }

    #[test]
    fn test_capacity_accepts_reachable_limits(n in 3u32..=11, k in 10u64..=2_988) {
        let params = SearchParameters { n, k };
        prop_assert!(params.check_capacity().is_ok());
    }
}
