//! Reversible prime squares: Σ of the first 50 squares of primes whose digit
//! reversal is a different square of a prime.

use crate::answer::Answer;
use crate::number_theory::{is_prime, isqrt, sieve};

fn reverse_digits(mut n: u64) -> u64 {
    let mut r = 0;
    while n > 0 {
        r = r * 10 + n % 10;
        n /= 10;
    }
    r
}

/// The first `count` reversible prime squares p² with p < `prime_limit`.
pub fn reversible_prime_squares(count: usize, prime_limit: usize) -> Vec<u64> {
    let flags = sieve(prime_limit);
    let mut found = Vec::with_capacity(count);
    for p in (2..prime_limit).filter(|&p| flags[p]) {
        let sq = (p as u64) * (p as u64);
        let rev = reverse_digits(sq);
        if rev == sq {
            continue;
        }
        let root = isqrt(rev);
        if root * root == rev && is_prime(root) {
            found.push(sq);
            if found.len() == count {
                break;
            }
        }
    }
    found
}

pub fn solve() -> Answer {
    let squares = reversible_prime_squares(50, 32_000_000);
    if squares.len() < 50 {
        eprintln!("Problem 808: only {} reversible prime squares found", squares.len());
    }
    Answer::from(squares.iter().sum::<u64>())
}
