//! Selective amnesia: Larry (least recently used) and Robin (first in, first
//! out) each remember five of the numbers 1..10 called over 50 turns; find the
//! expected |L − R| of their scores.
//!
//! The exact answer comes from a distribution DP over game states. Symbols
//! never seen or already forgotten by both players are interchangeable, so
//! states are relabelled by first appearance in Larry's then Robin's memory
//! and packed together with the score difference into one key.

use crate::answer::Answer;
use crate::memo::{KeyLayout, StateDistribution};
use crate::monte_carlo::{run_trials, MonteCarloConfig, MonteCarloResult, SplitMix64};

const MAX_CAPACITY: usize = 6;
const DIFF_OFFSET: i64 = 128;

/// A player's memory, most recent first.
#[derive(Debug, Clone, Copy, Default)]
struct Recall {
    items: [u8; MAX_CAPACITY],
    len: usize,
}

impl Recall {
    fn contains(&self, x: u8) -> bool {
        self.items[..self.len].contains(&x)
    }

    fn push_front(&mut self, x: u8, capacity: usize) {
        let keep = self.len.min(capacity - 1);
        self.items.copy_within(0..keep, 1);
        self.items[0] = x;
        self.len = keep + 1;
    }

    /// Larry: a called number moves to the front, the stalest is dropped.
    fn call_lru(&mut self, x: u8, capacity: usize) {
        if let Some(i) = self.items[..self.len].iter().position(|&y| y == x) {
            self.items.copy_within(0..i, 1);
            self.items[0] = x;
        } else {
            self.push_front(x, capacity);
        }
    }

    /// Robin: a known number changes nothing, the oldest entry is dropped.
    fn call_fifo(&mut self, x: u8, capacity: usize) {
        if !self.contains(x) {
            self.push_front(x, capacity);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct GameState {
    larry: Recall,
    robin: Recall,
    diff: i64,
}

impl GameState {
    fn call(&mut self, x: u8, capacity: usize) {
        self.diff += self.larry.contains(x) as i64 - self.robin.contains(x) as i64;
        self.larry.call_lru(x, capacity);
        self.robin.call_fifo(x, capacity);
    }

    /// Relabel symbols by first appearance; returns the number of distinct
    /// symbols remembered.
    fn canonicalize(&mut self) -> u8 {
        let mut map = [u8::MAX; 256];
        let mut next = 0u8;
        for recall in [&mut self.larry, &mut self.robin] {
            for item in recall.items[..recall.len].iter_mut() {
                if map[*item as usize] == u8::MAX {
                    map[*item as usize] = next;
                    next += 1;
                }
                *item = map[*item as usize];
            }
        }
        next
    }
}

/// Exact distribution of game states after each turn.
pub struct AmnesiaGame {
    capacity: usize,
    symbols: u8,
    layout: KeyLayout,
}

impl AmnesiaGame {
    pub fn new(capacity: usize, symbols: u8) -> Self {
        assert!((1..=MAX_CAPACITY).contains(&capacity), "capacity {} out of range", capacity);
        assert!((1..=16).contains(&symbols), "symbols {} out of range", symbols);
        let mut widths = vec![3u8, 3];
        widths.extend(std::iter::repeat(4).take(2 * capacity));
        widths.push(8);
        AmnesiaGame {
            capacity,
            symbols,
            layout: KeyLayout::new(&widths),
        }
    }

    fn encode(&self, state: &GameState) -> u64 {
        let c = self.capacity;
        let mut fields = vec![0u64; 2 * c + 3];
        fields[0] = state.larry.len as u64;
        fields[1] = state.robin.len as u64;
        for i in 0..state.larry.len {
            fields[2 + i] = state.larry.items[i] as u64;
        }
        for i in 0..state.robin.len {
            fields[2 + c + i] = state.robin.items[i] as u64;
        }
        fields[2 * c + 2] = (state.diff + DIFF_OFFSET) as u64;
        self.layout.pack(&fields)
    }

    fn decode(&self, key: u64) -> GameState {
        let c = self.capacity;
        let fields = self.layout.unpack(key);
        let mut state = GameState {
            diff: fields[2 * c + 2] as i64 - DIFF_OFFSET,
            ..Default::default()
        };
        state.larry.len = fields[0] as usize;
        state.robin.len = fields[1] as usize;
        for i in 0..state.larry.len {
            state.larry.items[i] = fields[2 + i] as u8;
        }
        for i in 0..state.robin.len {
            state.robin.items[i] = fields[2 + c + i] as u8;
        }
        state
    }

    /// Advance the distribution by one call.
    pub fn step(&self, dist: &StateDistribution) -> StateDistribution {
        let mut next = StateDistribution::new();
        let n = self.symbols as f64;
        for (key, p) in dist.iter() {
            let mut base = self.decode(key);
            let known = base.canonicalize();
            for x in 0..=known {
                let weight = if x < known {
                    1.0 / n
                } else if known < self.symbols {
                    (self.symbols - known) as f64 / n
                } else {
                    continue;
                };
                let mut s = base;
                s.call(x, self.capacity);
                s.canonicalize();
                next.add(self.encode(&s), p * weight);
            }
        }
        next
    }

    /// Distribution after `turns` calls.
    pub fn play(&self, turns: u32) -> StateDistribution {
        assert!(turns < DIFF_OFFSET as u32, "too many turns: {}", turns);
        let mut dist = StateDistribution::point(self.encode(&GameState::default()));
        for _ in 0..turns {
            dist = self.step(&dist);
        }
        dist
    }

    /// Expected |L − R| after `turns` calls.
    pub fn expected_gap(&self, turns: u32) -> f64 {
        let c = self.capacity;
        let dist = self.play(turns);
        dist.expectation(|key| (self.layout.field(key, 2 * c + 2) as i64 - DIFF_OFFSET).abs() as f64)
    }
}

/// Monte-Carlo estimate of the expected |L − R|, for cross-checking.
pub fn simulate_score_gap(
    turns: u32,
    capacity: usize,
    symbols: u8,
    config: &MonteCarloConfig,
) -> MonteCarloResult {
    run_trials(config, |rng: &mut SplitMix64| {
        let mut state = GameState::default();
        for _ in 0..turns {
            let x = rng.next_below(symbols as u64) as u8;
            state.call(x, capacity);
        }
        state.diff.abs() as f64
    })
}

pub fn simulate(config: &MonteCarloConfig) -> MonteCarloResult {
    simulate_score_gap(50, 5, 10, config)
}

pub fn solve() -> Answer {
    Answer::decimal(AmnesiaGame::new(5, 10).expected_gap(50), 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recall_policies() {
        let mut larry = Recall::default();
        let mut robin = Recall::default();
        for x in [1, 2, 3, 1, 4] {
            larry.call_lru(x, 3);
            robin.call_fifo(x, 3);
        }
        assert_eq!(&larry.items[..larry.len], &[4, 1, 3]);
        assert_eq!(&robin.items[..robin.len], &[4, 3, 2]);
    }

    #[test]
    fn test_no_gap_in_first_seven_turns() {
        let game = AmnesiaGame::new(5, 10);
        for turns in 0..=7 {
            assert!(game.expected_gap(turns).abs() < 1e-15, "turns={}", turns);
        }
    }

    #[test]
    fn test_short_games() {
        let game = AmnesiaGame::new(5, 10);
        assert!((game.expected_gap(8) - 0.012096).abs() < 1e-12);
        assert!((game.expected_gap(9) - 0.0447552).abs() < 1e-12);
    }

    #[test]
    fn test_mass_is_conserved() {
        let game = AmnesiaGame::new(5, 10);
        assert!((game.play(12).total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_simulation_agrees() {
        let config = MonteCarloConfig {
            seed: 7,
            max_trials: 200_000,
            min_trials: 200_000,
            verbose: false,
            ..Default::default()
        };
        let result = simulate_score_gap(9, 5, 10, &config);
        assert!((result.stats.mean() - 0.0447552).abs() < 0.01);
    }
}
