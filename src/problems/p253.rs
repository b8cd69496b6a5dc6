//! Tidying up: expected maximum number of segments while a 40-piece
//! caterpillar is assembled in uniformly random order.
//!
//! Exact DP over the unplaced gaps. Interior gaps sit between two segments;
//! the two end gaps touch one segment and an end of the caterpillar. There is
//! always one more segment than interior gaps, so a state is the multiset of
//! interior gap lengths, the unordered pair of end gaps and the maximum seen
//! so far. The multiset is packed in unary (gap g as g−1 zeros and a one,
//! shortest first), which needs one bit per unplaced piece.
//!
//! Placing piece x joins it to placed neighbours, so the segment count
//! changes by 1 − [x−1 placed] − [x+1 placed]; the simulation below uses that
//! directly and is kept as a cross-check.

use crate::answer::Answer;
use crate::memo::{KeyLayout, Memo};
use crate::monte_carlo::{run_trials, MonteCarloConfig, MonteCarloResult, SplitMix64};

/// Largest caterpillar the packed key can hold.
pub const MAX_PIECES: usize = 40;

fn with(base: &[u8], extra: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(base.len() + extra.len());
    v.extend_from_slice(base);
    v.extend_from_slice(extra);
    v.sort_unstable();
    v
}

fn without(base: &[u8], index: usize) -> Vec<u8> {
    let mut v = base.to_vec();
    v.remove(index);
    v
}

fn end_pair(a: u8, b: u8) -> (u8, u8) {
    (a.min(b), a.max(b))
}

pub struct Tidying {
    layout: KeyLayout,
    memo: Memo<f64>,
}

impl Tidying {
    pub fn new() -> Self {
        Tidying {
            // unary gap code, two end gaps, running maximum
            layout: KeyLayout::new(&[MAX_PIECES as u8, 6, 6, 6]),
            memo: Memo::new(),
        }
    }

    fn key(&self, inner: &[u8], ends: (u8, u8), best: u32) -> u64 {
        let mut code = 0u64;
        let mut bit = 0u32;
        for &g in inner {
            bit += g as u32;
            code |= 1 << (bit - 1);
        }
        self.layout
            .pack(&[code, ends.0 as u64, ends.1 as u64, best as u64])
    }

    /// Expected final maximum from a state with at least one segment placed.
    /// `inner` is sorted ascending.
    fn expected(&mut self, inner: &[u8], ends: (u8, u8), best: u32) -> f64 {
        let remaining: u32 =
            inner.iter().map(|&g| g as u32).sum::<u32>() + ends.0 as u32 + ends.1 as u32;
        if remaining == 0 {
            return best as f64;
        }
        let key = self.key(inner, ends, best);
        if let Some(v) = self.memo.get(key) {
            return v;
        }
        let segments = inner.len() as u32 + 1;
        let split_best = best.max(segments + 1);
        let mut total = 0.0;

        let mut i = 0;
        while i < inner.len() {
            let g = inner[i];
            let copies = inner[i..].iter().take_while(|&&h| h == g).count();
            let weight = copies as f64;
            let rest = without(inner, i);
            if g == 1 {
                // closes the gap, merging two segments
                total += weight * self.expected(&rest, ends, best);
            } else {
                total += weight * 2.0 * self.expected(&with(&rest, &[g - 1]), ends, best);
                for k in 2..g {
                    total += weight * self.expected(&with(&rest, &[k - 1, g - k]), ends, split_best);
                }
            }
            i += copies;
        }

        let sides: &[(u8, u8)] = if ends.0 == ends.1 {
            &[(ends.0, ends.1)]
        } else {
            &[(ends.0, ends.1), (ends.1, ends.0)]
        };
        let weight = if ends.0 == ends.1 { 2.0 } else { 1.0 };
        for &(g, other) in sides {
            if g == 0 {
                continue;
            }
            let mut side = self.expected(inner, end_pair(g - 1, other), best);
            for k in 2..=g {
                side += self.expected(&with(inner, &[k - 1]), end_pair(g - k, other), split_best);
            }
            total += weight * side;
        }

        let v = total / remaining as f64;
        self.memo.insert(key, v)
    }

    /// Expected maximum segment count for a caterpillar of `pieces`.
    pub fn expected_max(&mut self, pieces: usize) -> f64 {
        assert!(pieces <= MAX_PIECES, "at most {} pieces", MAX_PIECES);
        if pieces == 0 {
            return 0.0;
        }
        let n = pieces as u8;
        let total: f64 = (1..=n)
            .map(|x| self.expected(&[], end_pair(x - 1, n - x), 1))
            .sum();
        total / pieces as f64
    }

    pub fn states(&self) -> usize {
        self.memo.len()
    }
}

impl Default for Tidying {
    fn default() -> Self {
        Self::new()
    }
}

/// Maximum segment count seen while placing `pieces` in random order.
pub fn max_segments(pieces: usize, rng: &mut SplitMix64) -> u32 {
    let mut order: Vec<usize> = (0..pieces).collect();
    rng.shuffle(&mut order);
    let mut placed = vec![false; pieces + 2];
    let mut segments = 0i32;
    let mut best = 0i32;
    for x in order {
        segments += 1 - placed[x] as i32 - placed[x + 2] as i32;
        placed[x + 1] = true;
        best = best.max(segments);
    }
    best as u32
}

/// Monte-Carlo estimate of the expected maximum.
pub fn simulate_max_segments(pieces: usize, config: &MonteCarloConfig) -> MonteCarloResult {
    run_trials(config, |rng| max_segments(pieces, rng) as f64)
}

/// Full-size simulation for `--simulate`.
pub fn simulate(config: &MonteCarloConfig) -> MonteCarloResult {
    simulate_max_segments(40, config)
}

pub fn solve() -> Answer {
    let mut tidying = Tidying::new();
    let expected = tidying.expected_max(40);
    eprintln!("Problem 253: {} packed states", tidying.states());
    Answer::decimal(expected, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enumerate(pieces: usize) -> f64 {
        // average over every placement order
        fn walk(placed: &mut Vec<bool>, left: usize, seg: i32, best: i32, acc: &mut (u64, u64)) {
            if left == 0 {
                acc.0 += best as u64;
                acc.1 += 1;
                return;
            }
            for x in 0..placed.len() - 2 {
                if placed[x + 1] {
                    continue;
                }
                let s = seg + 1 - placed[x] as i32 - placed[x + 2] as i32;
                placed[x + 1] = true;
                walk(placed, left - 1, s, best.max(s), acc);
                placed[x + 1] = false;
            }
        }
        let mut placed = vec![false; pieces + 2];
        let mut acc = (0, 0);
        walk(&mut placed, pieces, 0, 0, &mut acc);
        acc.0 as f64 / acc.1 as f64
    }

    #[test]
    fn test_enumeration_small() {
        // only the two orders placing both ends first reach two segments
        assert!((enumerate(3) - 8.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_dp_matches_enumeration() {
        let mut tidying = Tidying::new();
        for pieces in 1..=8 {
            let exact = tidying.expected_max(pieces);
            assert!((exact - enumerate(pieces)).abs() < 1e-12, "pieces={}", pieces);
        }
    }

    #[test]
    fn test_ten_pieces() {
        let exact = Tidying::new().expected_max(10);
        assert!((exact - 385643.0 / 113400.0).abs() < 1e-12);
        assert_eq!(Answer::decimal(exact, 6).to_string(), "3.400732");
    }

    #[test]
    fn test_trivial_caterpillars() {
        let mut rng = SplitMix64::new(3);
        for _ in 0..100 {
            assert_eq!(max_segments(1, &mut rng), 1);
            assert_eq!(max_segments(2, &mut rng), 1);
        }
        assert_eq!(Tidying::new().expected_max(2), 1.0);
    }

    #[test]
    fn test_simulation_agrees_with_dp() {
        let config = MonteCarloConfig {
            seed: 11,
            max_trials: 200_000,
            min_trials: 200_000,
            verbose: false,
            ..Default::default()
        };
        let result = simulate_max_segments(12, &config);
        assert_eq!(result.stats.count, 200_000);
        let exact = Tidying::new().expected_max(12);
        assert!((result.stats.mean() - exact).abs() < 4.0 * result.stats.half_width().max(1e-3));
    }
}
