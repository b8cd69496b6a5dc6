//! RSA encryption: sum of exponents e minimizing unconcealed messages.
//!
//! For n = pq the number of messages m with m^e ≡ m (mod n) is
//! (1 + gcd(e − 1, p − 1)) · (1 + gcd(e − 1, q − 1)).

use crate::answer::Answer;
use crate::number_theory::gcd;

/// Unconcealed messages for exponent `e` and primes `p`, `q`.
pub fn unconcealed(e: u64, p: u64, q: u64) -> u64 {
    (1 + gcd(e - 1, p - 1)) * (1 + gcd(e - 1, q - 1))
}

/// Minimum unconcealed count over valid exponents and the sum of the
/// exponents reaching it.
pub fn minimal_exponents(p: u64, q: u64) -> (u64, u64) {
    let phi = (p - 1) * (q - 1);
    let mut best = u64::MAX;
    let mut sum = 0;
    for e in (2..phi).filter(|&e| gcd(e, phi) == 1) {
        let u = unconcealed(e, p, q);
        if u < best {
            best = u;
            sum = e;
        } else if u == best {
            sum += e;
        }
    }
    (best, sum)
}

pub fn solve() -> Answer {
    Answer::from(minimal_exponents(1009, 3643).1)
}
