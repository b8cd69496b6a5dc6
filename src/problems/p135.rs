//! Same differences: x² − y² − z² = n with x, y, z consecutive terms of an
//! arithmetic progression.
//!
//! With y = a and common difference d, n = a(4d − a). Writing u = a and
//! v = 4d − a, every solution is a factor pair n = u·v with u + v ≡ 0 (mod 4)
//! and v < 3u (so that z = a − d > 0). Counting over all pairs is a harmonic
//! sum, O(N log N).

use crate::answer::Answer;

/// `counts[n]` = number of solutions for each `n < limit`.
pub fn solution_counts(limit: u64) -> Vec<u32> {
    let mut counts = vec![0u32; limit as usize];
    for u in 1..limit {
        let v_max = (3 * u - 1).min((limit - 1) / u);
        // first v >= 1 with u + v ≡ 0 (mod 4)
        let mut v = (4 - u % 4) % 4;
        if v == 0 {
            v = 4;
        }
        while v <= v_max {
            counts[(u * v) as usize] += 1;
            v += 4;
        }
    }
    counts
}

/// How many `n < limit` have exactly `target` solutions.
pub fn count_with_exactly(limit: u64, target: u32) -> u64 {
    solution_counts(limit)
        .iter()
        .filter(|&&c| c == target)
        .count() as u64
}

pub fn solve() -> Answer {
    Answer::from(count_with_exactly(1_000_000, 10))
}
