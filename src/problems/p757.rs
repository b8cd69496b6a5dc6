//! Stealthy numbers ≤ 10¹⁴: N = ab = cd with a + b = c + d + 1.
//!
//! These are exactly the products x(x+1)·y(y+1) with x ≤ y. Different pairs
//! collide, so the values are collected and deduplicated. The value range is
//! cut into buckets of equal width in √N (the pair count grows like √N) and
//! each bucket is handled independently on the rayon pool.

use rayon::prelude::*;

use crate::answer::Answer;
use crate::number_theory::isqrt;

const BUCKETS: u64 = 256;

/// Least y with y(y+1) >= q.
fn least_pronic_root(q: u64) -> u64 {
    let mut y = isqrt(q);
    while y * (y + 1) < q {
        y += 1;
    }
    while y > 0 && (y - 1) * y >= q {
        y -= 1;
    }
    y
}

/// Distinct stealthy numbers in `lo..hi`.
fn count_in(lo: u64, hi: u64) -> u64 {
    let mut values = Vec::new();
    let mut x = 1u64;
    loop {
        let t = x * (x + 1);
        if t.saturating_mul(t) >= hi {
            break;
        }
        let mut y = least_pronic_root(lo.div_ceil(t)).max(x);
        loop {
            let v = t * y * (y + 1);
            if v >= hi {
                break;
            }
            values.push(v);
            y += 1;
        }
        x += 1;
    }
    values.sort_unstable();
    values.dedup();
    values.len() as u64
}

/// Stealthy numbers `N <= limit`.
pub fn count_stealthy(limit: u64) -> u64 {
    let root = isqrt(limit) + 1;
    let bounds: Vec<u64> = (0..=BUCKETS)
        .map(|b| {
            let r = root * b / BUCKETS;
            (r * r).min(limit + 1)
        })
        .collect();
    bounds
        .par_windows(2)
        .map(|w| if w[0] < w[1] { count_in(w[0], w[1]) } else { 0 })
        .sum()
}

pub fn solve() -> Answer {
    Answer::from(count_stealthy(100_000_000_000_000))
}
