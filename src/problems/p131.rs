//! Prime cube partnership: primes p for which n³ + n²p is a perfect cube.
//!
//! The cube condition forces p to be a difference of consecutive cubes,
//! p = (k+1)³ − k³ = 3k² + 3k + 1, so it suffices to walk k and test
//! primality.

use crate::answer::Answer;
use crate::number_theory::sieve;

/// Number of primes below `limit` with the cube property.
pub fn count_below(limit: u64) -> u64 {
    let is_prime = sieve(limit as usize);
    (1u64..)
        .map(|k| 3 * k * k + 3 * k + 1)
        .take_while(|&d| d < limit)
        .filter(|&d| is_prime[d as usize])
        .count() as u64
}

pub fn solve() -> Answer {
    Answer::from(count_below(1_000_000))
}
