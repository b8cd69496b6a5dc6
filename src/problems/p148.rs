//! Entries of Pascal's triangle not divisible by 7.
//!
//! By Lucas' theorem row n has Π(dᵢ + 1) such entries, where dᵢ are the base-7
//! digits of n. Summed over a full block of 7^k rows that is 28^k, so the
//! first N rows split by the leading base-7 digit q of N:
//! f(N) = (q(q+1)/2)·28^k + (q+1)·f(N mod 7^k).

use crate::answer::Answer;

/// Entries of row `n` not divisible by 7.
pub fn row_count(mut n: u64) -> u64 {
    let mut q = 1;
    while n > 0 {
        q *= n % 7 + 1;
        n /= 7;
    }
    q
}

/// Entries not divisible by 7 in rows `0..rows`.
pub fn count_rows(rows: u64) -> u128 {
    if rows == 0 {
        return 0;
    }
    let mut block = 1u64;
    let mut block_total = 1u128;
    while block * 7 <= rows {
        block *= 7;
        block_total *= 28;
    }
    let q = (rows / block) as u128;
    q * (q + 1) / 2 * block_total + (q + 1) * count_rows(rows % block)
}

pub fn solve() -> Answer {
    Answer::Integer(count_rows(1_000_000_000) as i128)
}
