//! Square on the inside: quadrilaterals with vertices (a,0), (0,b), (−c,0),
//! (0,−d), 1 ≤ a,b,c,d ≤ m, strictly containing a square number of lattice
//! points.
//!
//! By Pick's theorem 2A = 2I + B − 2, where 2A = (a + c)(b + d) and each edge
//! contributes gcd of its legs to the boundary count B.

use rayon::prelude::*;

use crate::answer::Answer;
use crate::number_theory::{gcd, isqrt};

/// Quadrilaterals for `1 <= a, b, c, d <= m` with a square interior count.
pub fn count_square_interiors(m: usize) -> u64 {
    let g: Vec<Vec<usize>> = (0..=m)
        .map(|a| (0..=m).map(|b| gcd(a as u64, b as u64) as usize).collect())
        .collect();
    let max_interior = 2 * m * m + 1;
    let is_square: Vec<bool> = (0..=max_interior)
        .map(|i| {
            let r = isqrt(i as u64);
            r * r == i as u64
        })
        .collect();

    (1..=m)
        .into_par_iter()
        .map(|a| {
            let mut count = 0u64;
            for b in 1..=m {
                for c in 1..=m {
                    for d in 1..=m {
                        let twice_area = (a + c) * (b + d);
                        let boundary = g[a][b] + g[b][c] + g[c][d] + g[d][a];
                        let interior = (twice_area - boundary + 2) / 2;
                        count += is_square[interior] as u64;
                    }
                }
            }
            count
        })
        .sum()
}

pub fn solve() -> Answer {
    Answer::from(count_square_interiors(100))
}
