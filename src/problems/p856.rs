//! Waiting for a pair: expected number of cards drawn from a shuffled 52-card
//! deck until two consecutive cards share a rank (all 52 if that never
//! happens).
//!
//! Only the shape of the undrawn deck matters: how many ranks have i cards
//! left, for each i, and how many cards remain of the rank just drawn. The
//! expectation is memoized over that shape; [`simulate_draws`] shuffles real
//! decks through the Monte-Carlo driver as a cross-check.

use crate::answer::Answer;
use crate::memo::{KeyLayout, Memo};
use crate::monte_carlo::{run_trials, MonteCarloConfig, MonteCarloResult, SplitMix64};

pub const MAX_SUITS: usize = 7;
pub const MAX_RANKS: usize = 15;

pub struct PairWait {
    suits: usize,
    layout: KeyLayout,
    memo: Memo<f64>,
}

impl PairWait {
    pub fn new(suits: usize) -> Self {
        assert!((1..=MAX_SUITS).contains(&suits), "suits {} out of range", suits);
        // ranks with 1..=suits cards left, then cards left of the last rank drawn
        let mut widths = vec![4u8; suits];
        widths.push(3);
        PairWait {
            suits,
            layout: KeyLayout::new(&widths),
            memo: Memo::new(),
        }
    }

    fn key(&self, groups: &[u8], last: u8) -> u64 {
        let mut values = [0u64; MAX_SUITS + 1];
        for (v, &g) in values.iter_mut().zip(groups) {
            *v = g as u64;
        }
        values[self.suits] = last as u64;
        self.layout.pack(&values[..=self.suits])
    }

    /// Expected further draws. `groups[i]` counts other ranks with i+1 cards
    /// left; `last` cards of the previous card's rank remain.
    fn expected(&mut self, groups: &mut [u8; MAX_SUITS], last: u8) -> f64 {
        let remaining: u32 = last as u32
            + groups[..self.suits]
                .iter()
                .enumerate()
                .map(|(i, &g)| (i as u32 + 1) * g as u32)
                .sum::<u32>();
        if remaining == 0 {
            return 0.0;
        }
        let key = self.key(&groups[..self.suits], last);
        if let Some(v) = self.memo.get(key) {
            return v;
        }
        // a matching card ends the wait, so it adds the draw and nothing more
        let mut total = 1.0;
        for i in 0..self.suits {
            let g = groups[i];
            if g == 0 {
                continue;
            }
            let cards = (i + 1) as f64 * g as f64;
            groups[i] -= 1;
            if last > 0 {
                groups[last as usize - 1] += 1;
            }
            total += cards / remaining as f64 * self.expected(groups, i as u8);
            if last > 0 {
                groups[last as usize - 1] -= 1;
            }
            groups[i] += 1;
        }
        self.memo.insert(key, total)
    }

    /// Expected draws until a pair for a deck of `ranks` × suits.
    pub fn expected_draws(&mut self, ranks: usize) -> f64 {
        assert!((1..=MAX_RANKS).contains(&ranks), "ranks {} out of range", ranks);
        let mut groups = [0u8; MAX_SUITS];
        groups[self.suits - 1] = ranks as u8 - 1;
        1.0 + self.expected(&mut groups, self.suits as u8 - 1)
    }

    pub fn states(&self) -> usize {
        self.memo.len()
    }
}

/// Draws until two consecutive cards match in one shuffled deck.
pub fn draws_until_pair(deck: &mut [u8], rng: &mut SplitMix64) -> u32 {
    rng.shuffle(deck);
    deck.windows(2)
        .position(|w| w[0] == w[1])
        .map_or(deck.len() as u32, |i| i as u32 + 2)
}

pub fn simulate_draws(ranks: usize, suits: usize, config: &MonteCarloConfig) -> MonteCarloResult {
    let deck: Vec<u8> = (0..ranks as u8)
        .flat_map(|r| std::iter::repeat(r).take(suits))
        .collect();
    run_trials(config, |rng| {
        let mut deck = deck.clone();
        draws_until_pair(&mut deck, rng) as f64
    })
}

pub fn simulate(config: &MonteCarloConfig) -> MonteCarloResult {
    simulate_draws(13, 4, config)
}

pub fn solve() -> Answer {
    let mut wait = PairWait::new(4);
    let expected = wait.expected_draws(13);
    eprintln!("Problem 856: {} deck shapes", wait.states());
    Answer::decimal(expected, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Average over every distinct ordering of a small deck.
    fn enumerate(ranks: usize, suits: usize) -> f64 {
        fn walk(left: &mut [usize], last: Option<usize>, drawn: u32, weight: f64, acc: &mut f64) {
            let remaining: usize = left.iter().sum();
            if remaining == 0 {
                *acc += weight * drawn as f64;
                return;
            }
            for r in 0..left.len() {
                if left[r] == 0 {
                    continue;
                }
                let p = weight * left[r] as f64 / remaining as f64;
                if last == Some(r) {
                    *acc += p * (drawn + 1) as f64;
                    continue;
                }
                left[r] -= 1;
                walk(left, Some(r), drawn + 1, p, acc);
                left[r] += 1;
            }
        }
        let mut left = vec![suits; ranks];
        let mut acc = 0.0;
        walk(&mut left, None, 0, 1.0, &mut acc);
        acc
    }

    #[test]
    fn test_small_decks() {
        assert!((PairWait::new(2).expected_draws(3) - 64.0 / 15.0).abs() < 1e-12);
        assert!((PairWait::new(3).expected_draws(2) - 3.2).abs() < 1e-12);
        for (ranks, suits) in [(2, 2), (4, 2), (3, 3), (2, 4), (4, 3)] {
            let exact = PairWait::new(suits).expected_draws(ranks);
            assert!((exact - enumerate(ranks, suits)).abs() < 1e-12, "{}x{}", ranks, suits);
        }
    }

    #[test]
    fn test_single_suit_never_pairs() {
        assert_eq!(PairWait::new(1).expected_draws(5), 5.0);
        let mut deck = [0, 1, 2, 3];
        assert_eq!(draws_until_pair(&mut deck, &mut SplitMix64::new(1)), 4);
    }

    #[test]
    fn test_full_deck() {
        let expected = PairWait::new(4).expected_draws(13);
        assert_eq!(Answer::decimal(expected, 8).to_string(), "17.09661501");
    }

    #[test]
    fn test_simulation_agrees() {
        let config = MonteCarloConfig {
            seed: 5,
            min_trials: 400_000,
            max_trials: 400_000,
            verbose: false,
            ..Default::default()
        };
        let result = simulate_draws(13, 4, &config);
        assert_eq!(result.stats.count, 400_000);
        let exact = PairWait::new(4).expected_draws(13);
        assert!((result.stats.mean() - exact).abs() < 5.0 * result.stats.half_width());
    }
}
