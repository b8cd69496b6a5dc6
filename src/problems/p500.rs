//! Problem 500!!!: the least number with 2⁵⁰⁰⁵⁰⁰ divisors, mod 500500507.
//!
//! A number with 2^k divisors is a product of factors p^(2^j − 1), and going
//! from p^(2^j − 1) to p^(2^(j+1) − 1) multiplies it by p^(2^j) while doubling
//! the divisor count. Greedily taking the smallest available multiplier k
//! times gives the minimum.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::answer::Answer;
use crate::number_theory::{mul_mod, primes};

/// Upper bound for the `k`-th prime (Rosser).
fn nth_prime_bound(k: usize) -> usize {
    if k < 6 {
        return 15;
    }
    let n = k as f64;
    (n * (n.ln() + n.ln().ln())) as usize + 1
}

/// Least number with 2^`k` divisors, mod `modulus`.
pub fn least_with_power_of_two_divisors(k: usize, modulus: u64) -> u64 {
    let candidates = primes(nth_prime_bound(k));
    let mut heap: BinaryHeap<Reverse<u64>> = candidates.into_iter().take(k).map(Reverse).collect();
    let mut result = 1 % modulus;
    for _ in 0..k {
        let Some(Reverse(v)) = heap.pop() else {
            break;
        };
        result = mul_mod(result, v, modulus);
        if let Some(sq) = v.checked_mul(v) {
            heap.push(Reverse(sq));
        }
    }
    result
}

pub fn solve() -> Answer {
    Answer::from(least_with_power_of_two_divisors(500_500, 500_500_507))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number_theory::divisors;

    #[test]
    fn test_small_exponents() {
        let m = u64::MAX >> 1;
        assert_eq!(least_with_power_of_two_divisors(1, m), 2);
        assert_eq!(least_with_power_of_two_divisors(2, m), 6);
        assert_eq!(least_with_power_of_two_divisors(3, m), 24);
        assert_eq!(least_with_power_of_two_divisors(4, m), 120);
    }

    #[test]
    fn test_is_least() {
        for k in 1..=5 {
            let v = least_with_power_of_two_divisors(k, u64::MAX >> 1);
            let first = (1..).find(|&n| divisors(n).len() == 1 << k);
            assert_eq!(first, Some(v), "k={}", k);
        }
    }
}
