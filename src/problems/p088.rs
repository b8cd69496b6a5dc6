//! Product-sum numbers.
//!
//! A product-sum number N for set size k satisfies N = a₁·…·a_k = a₁+…+a_k.
//! Any factorization of N into m factors > 1 with sum s is padded with
//! k = N − s + m ones, so a depth-first walk over non-decreasing factor lists
//! with product ≤ 2·k_max visits every candidate (2k is always achievable via
//! 2·k·1·…·1).

use std::collections::BTreeSet;

use crate::answer::Answer;

fn walk(best: &mut [u64], k_max: u64, limit: u64, product: u64, sum: u64, count: u64, start: u64) {
    let k = product - sum + count;
    if k > k_max {
        return;
    }
    if product < best[k as usize] {
        best[k as usize] = product;
    }
    let mut f = start;
    while product * f <= limit {
        walk(best, k_max, limit, product * f, sum + f, count + 1, f);
        f += 1;
    }
}

/// Minimal product-sum number for every `2 <= k <= k_max` (index k).
pub fn minimal_product_sums(k_max: u64) -> Vec<u64> {
    let limit = 2 * k_max;
    let mut best = vec![u64::MAX; (k_max + 1) as usize];
    for f in 2..=limit {
        walk(&mut best, k_max, limit, f, f, 1, f);
    }
    best
}

/// Sum of the distinct minimal product-sum numbers for `2 <= k <= k_max`.
pub fn distinct_sum(k_max: u64) -> u64 {
    let best = minimal_product_sums(k_max);
    let distinct: BTreeSet<u64> = best[2..].iter().copied().collect();
    distinct.iter().sum()
}

pub fn solve() -> Answer {
    Answer::from(distinct_sum(12_000))
}
