//! Digital signatures: how many n < 10¹⁸ have the same digit sum as 137n.
//!
//! The product is built from the least significant digit of n upwards. The
//! state after `pos` digits is the pending carry and the difference between
//! the digit sum of n so far and the emitted digits of 137n; the carry left at
//! the end is emitted in full.

use crate::answer::Answer;
use crate::memo::{KeyLayout, Memo};

const DIFF_OFFSET: i64 = 512;

struct SignatureDp {
    digits: u32,
    factor: u64,
    layout: KeyLayout,
    memo: Memo<u64>,
}

fn digit_sum(mut n: u64) -> i64 {
    let mut s = 0;
    while n > 0 {
        s += (n % 10) as i64;
        n /= 10;
    }
    s
}

impl SignatureDp {
    fn new(digits: u32, factor: u64) -> Self {
        assert!(digits <= 40 && factor < 1 << 16);
        SignatureDp {
            digits,
            factor,
            layout: KeyLayout::new(&[6, 16, 10]),
            memo: Memo::new(),
        }
    }

    fn count(&mut self, pos: u32, carry: u64, diff: i64) -> u64 {
        if pos == self.digits {
            return (diff == digit_sum(carry)) as u64;
        }
        let key = self
            .layout
            .pack(&[pos as u64, carry, (diff + DIFF_OFFSET) as u64]);
        if let Some(v) = self.memo.get(key) {
            return v;
        }
        let mut total = 0;
        for d in 0..10 {
            let v = d * self.factor + carry;
            total += self.count(pos + 1, v / 10, diff + d as i64 - (v % 10) as i64);
        }
        self.memo.insert(key, total)
    }
}

/// How many `0 <= n < 10^digits` satisfy digitsum(n) = digitsum(factor·n).
pub fn count_matching(digits: u32, factor: u64) -> u64 {
    SignatureDp::new(digits, factor).count(0, 0, 0)
}

pub fn solve() -> Answer {
    Answer::from(count_matching(18, 137))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_brute_force() {
        let brute = (0..10_000u64)
            .filter(|&n| digit_sum(n) == digit_sum(137 * n))
            .count() as u64;
        assert_eq!(count_matching(4, 137), brute);
        assert_eq!(count_matching(4, 137), 306);
    }

    #[test]
    fn test_factor_one_matches_everything() {
        assert_eq!(count_matching(3, 1), 1000);
    }
}
