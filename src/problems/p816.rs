//! Shortest distance among 2 000 000 generated points.
//!
//! s₀ = 290797, s_{n+1} = s_n² mod 50515093, P_n = (s_{2n}, s_{2n+1}).
//! Sorted by x, a sweep compares each point only with successors closer in x
//! than the best distance so far; on pseudo-random input that is near linear.

use crate::answer::Answer;

const SEED: u64 = 290_797;
const MODULUS: u64 = 50_515_093;

/// The first `count` points.
pub fn generate_points(count: usize) -> Vec<(i64, i64)> {
    let mut s = SEED;
    let mut next = || {
        let v = s;
        s = s * s % MODULUS;
        v as i64
    };
    (0..count).map(|_| (next(), next())).collect()
}

/// Smallest distance between two of the first `count` points.
pub fn closest_pair_distance(count: usize) -> f64 {
    let mut pts = generate_points(count);
    pts.sort_unstable();
    let mut best = i64::MAX;
    for i in 0..pts.len() {
        for j in i + 1..pts.len() {
            let dx = pts[j].0 - pts[i].0;
            if dx * dx >= best {
                break;
            }
            let dy = pts[j].1 - pts[i].1;
            best = best.min(dx * dx + dy * dy);
        }
    }
    (best as f64).sqrt()
}

pub fn solve() -> Answer {
    Answer::decimal(closest_pair_distance(2_000_000), 9)
}
