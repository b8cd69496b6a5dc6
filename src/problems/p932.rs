//! 2025: T(16), the sum of all n = s² with at most 16 digits that split into
//! a and b (b without a leading zero) with a + b = s.

use crate::answer::Answer;
use crate::parallel::{par_sum_range, par_sum_range_with_progress, DEFAULT_CHUNK};

/// Whether `s²` splits into two parts summing to `s`.
pub fn is_split_square(s: u64) -> bool {
    let n = s * s;
    let mut low = 10u64;
    while low <= n {
        let (a, b) = (n / low, n % low);
        if b >= low / 10 && a + b == s {
            return true;
        }
        low *= 10;
    }
    false
}

/// T(`digits`).
pub fn split_square_sum(digits: u32, verbose: bool) -> u128 {
    let limit = 10u64.pow(digits);
    let max_root = crate::number_theory::isqrt(limit - 1);
    let chunk_sum = |r: std::ops::Range<u64>| -> u128 {
        r.filter(|&s| is_split_square(s)).map(|s| (s * s) as u128).sum()
    };
    if verbose {
        par_sum_range_with_progress("Problem 932", 1..max_root + 1, DEFAULT_CHUNK, chunk_sum)
    } else {
        par_sum_range(1..max_root + 1, DEFAULT_CHUNK, chunk_sum)
    }
}

pub fn solve() -> Answer {
    Answer::Integer(split_square_sum(16, true) as i128)
}
