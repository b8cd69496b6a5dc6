//! Property-based tests for the shared toolbox.

use proptest::prelude::*;

use euler::memo::KeyLayout;
use euler::monte_carlo::{SplitMix64, TrialStats};
use euler::number_theory::*;
use euler::recurrence::{LinearRecurrence, ModMatrix};

fn naive_pow_mod(base: u64, exp: u64, m: u64) -> u64 {
    let mut r = 1 % m;
    for _ in 0..exp {
        r = mul_mod(r, base, m);
    }
    r
}

/// Strategy: a layout of 1..=8 fields with widths summing to at most 64,
/// paired with in-range values for each field.
fn layout_and_values() -> impl Strategy<Value = (Vec<u8>, Vec<u64>)> {
    prop::collection::vec(1u8..=8, 1..=8).prop_flat_map(|widths| {
        let values: Vec<_> = widths.iter().map(|&w| 0..(1u64 << w)).collect();
        (Just(widths), values)
    })
}

proptest! {
    // 1. Square-and-multiply agrees with repeated multiplication
    #[test]
    fn pow_mod_matches_naive(base in any::<u64>(), exp in 0u64..200, m in 1u64..u64::MAX) {
        prop_assert_eq!(pow_mod(base, exp, m), naive_pow_mod(base % m, exp, m));
    }

    // 2. gcd divides both arguments and lcm is a common multiple
    #[test]
    fn gcd_lcm_relations(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        let g = gcd(a, b);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
        prop_assert_eq!(lcm(a, b) * g, a * b);
    }

    // 3. Inverses exist exactly for coprime arguments
    #[test]
    fn mod_inverse_inverts(a in 0u64..100_000, m in 2u64..100_000) {
        match mod_inverse(a, m) {
            Some(inv) => prop_assert_eq!(mul_mod(a, inv, m), 1),
            None => prop_assert_ne!(gcd(a, m), 1),
        }
    }

    // 4. Factorization multiplies back and only contains primes
    #[test]
    fn factorize_roundtrip(n in 1u64..10_000_000_000) {
        let f = factorize(n);
        prop_assert_eq!(f.iter().fold(1u64, |acc, &(p, e)| acc * p.pow(e)), n);
        prop_assert!(f.windows(2).all(|w| w[0].0 < w[1].0));
        prop_assert!(f.iter().all(|&(p, _)| is_prime(p)));
    }

    // 5. Integer roots bracket their argument
    #[test]
    fn roots_bracket(n in any::<u64>()) {
        let r = isqrt(n) as u128;
        prop_assert!(r * r <= n as u128 && (r + 1) * (r + 1) > n as u128);
        let c = icbrt(n) as u128;
        prop_assert!(c * c * c <= n as u128 && (c + 1) * (c + 1) * (c + 1) > n as u128);
    }

    // 6. Multiplicative order is minimal
    #[test]
    fn order_is_minimal(a in 2u64..1000, m in 2u64..5000) {
        if let Some(k) = multiplicative_order(a, m) {
            prop_assert_eq!(pow_mod(a, k, m), 1);
            prop_assert!((1..k).all(|j| pow_mod(a, j, m) != 1));
        } else {
            prop_assert_ne!(gcd(a, m), 1);
        }
    }

    // 7. Packed keys unpack to the packed values
    #[test]
    fn key_layout_roundtrip((widths, values) in layout_and_values()) {
        let layout = KeyLayout::new(&widths);
        let key = layout.pack(&values);
        prop_assert_eq!(layout.unpack(key), values.clone());
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(layout.field(key, i), v);
        }
    }

    // 8. Kitamasa agrees with stepping the recurrence
    #[test]
    fn recurrence_nth_matches_terms(
        coefficients in prop::collection::vec(0u64..50, 1..6),
        seed in prop::collection::vec(0u64..50, 6),
        n in 0u64..300,
        m in 2u64..1_000_000_007,
    ) {
        let d = coefficients.len();
        let rec = LinearRecurrence::new(coefficients, seed[..d].to_vec(), m);
        let terms = rec.terms(n as usize + 1);
        prop_assert_eq!(rec.nth(n), terms[n as usize]);
    }

    // 9. Matrix powers add exponents
    #[test]
    fn matrix_power_exponents_add(
        entries in prop::collection::vec(0u64..1000, 9),
        a in 0u64..40,
        b in 0u64..40,
    ) {
        let rows: Vec<Vec<u64>> = entries.chunks(3).map(|r| r.to_vec()).collect();
        let m = ModMatrix::from_rows(&rows, 1_000_000_007);
        prop_assert_eq!(m.pow(a).mul(&m.pow(b)), m.pow(a + b));
    }

    // 10. Bounded draws stay in range and shuffles permute
    #[test]
    fn splitmix_draws_in_range(seed in any::<u64>(), n in 1u64..1000) {
        let mut rng = SplitMix64::new(seed);
        for _ in 0..100 {
            prop_assert!(rng.next_below(n) < n);
        }
        let mut items: Vec<u64> = (0..n).collect();
        rng.shuffle(&mut items);
        items.sort_unstable();
        prop_assert_eq!(items, (0..n).collect::<Vec<_>>());
    }

    // 11. Merged statistics equal statistics over the concatenation
    #[test]
    fn trial_stats_merge(xs in prop::collection::vec(-100.0f64..100.0, 1..50), split in 0usize..50) {
        let split = split.min(xs.len());
        let mut whole = TrialStats::default();
        xs.iter().for_each(|&x| whole.record(x));
        let (mut left, mut right) = (TrialStats::default(), TrialStats::default());
        xs[..split].iter().for_each(|&x| left.record(x));
        xs[split..].iter().for_each(|&x| right.record(x));
        left.merge(&right);
        prop_assert_eq!(left.count, whole.count);
        prop_assert!((left.mean() - whole.mean()).abs() < 1e-9);
    }

    // 12. A recurrence recovered from 2d terms reproduces the sequence
    #[test]
    fn recurrence_discovered_from_prefix(
        coefficients in prop::collection::vec(0u64..1000, 1..6),
        seed in prop::collection::vec(0u64..1000, 6),
    ) {
        let m = 1_000_000_007;
        let d = coefficients.len();
        let rec = LinearRecurrence::new(coefficients, seed[..d].to_vec(), m);
        let terms = rec.terms(4 * d + 10);
        let found = LinearRecurrence::discover(&terms[..2 * d], m);
        prop_assert!(found.is_some());
        if let Some(found) = found {
            prop_assert!(found.order() <= d);
            prop_assert_eq!(found.terms(terms.len()), terms);
        }
    }
}
