//! Monte-Carlo trials with a confidence-interval stop rule.
//!
//! Trials run in rounds of fixed-size batches on the rayon pool. Each batch
//! owns a [`SplitMix64`] seeded from `(seed, batch index)` and the batch
//! stats are merged in index order, so a run is reproducible regardless of
//! thread count. After every round the merged
//! [`TrialStats`] are checked: once `min_trials` have run and the 95%
//! half-width drops to `target_half_width`, the run stops; otherwise it stops at
//! `max_trials`.

use std::time::Instant;

use rayon::prelude::*;

/// SplitMix64 PRNG with a single u64 of state.
#[derive(Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create from seed.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..n` (Lemire's multiply-shift with rejection, no bias).
    #[inline(always)]
    pub fn next_below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0);
        let threshold = n.wrapping_neg() % n;
        loop {
            let m = self.next_u64() as u128 * n as u128;
            if (m as u64) >= threshold {
                return (m >> 64) as u64;
            }
        }
    }

    /// Uniform f64 in [0, 1).
    #[inline(always)]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

/// Running sums for a sample mean and its standard error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrialStats {
    pub count: u64,
    pub sum: f64,
    pub sum_sq: f64,
}

impl TrialStats {
    #[inline(always)]
    pub fn record(&mut self, x: f64) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    pub fn merge(&mut self, other: &TrialStats) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// Population variance of the recorded trials.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        (self.sum_sq / self.count as f64 - mean * mean).max(0.0)
    }

    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            return f64::INFINITY;
        }
        (self.variance() / self.count as f64).sqrt()
    }

    /// Half-width of the 95% confidence interval (normal approximation).
    pub fn half_width(&self) -> f64 {
        1.96 * self.std_error()
    }
}

/// Stop rule and batching for [`run_trials`].
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloConfig {
    pub seed: u64,
    pub batch_size: u64,
    pub batches_per_round: u64,
    pub min_trials: u64,
    pub max_trials: u64,
    pub target_half_width: f64,
    pub verbose: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        MonteCarloConfig {
            seed: crate::env_config::DEFAULT_SEED,
            batch_size: 1000,
            batches_per_round: 64,
            min_trials: 10_000,
            max_trials: crate::env_config::DEFAULT_MC_TRIALS,
            target_half_width: 1e-6,
            verbose: true,
        }
    }
}

impl MonteCarloConfig {
    /// Config with seed and trial cap taken from the environment.
    pub fn from_env() -> Self {
        MonteCarloConfig {
            seed: crate::env_config::seed(),
            max_trials: crate::env_config::monte_carlo_trials(),
            ..Default::default()
        }
    }
}

/// Result of a Monte-Carlo run.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloResult {
    pub stats: TrialStats,
    pub converged: bool,
}

/// Seed for batch `index`: decorrelated by one SplitMix64 step.
fn batch_seed(seed: u64, index: u64) -> u64 {
    SplitMix64::new(seed ^ index.wrapping_mul(0xd1b54a32d192ed03)).next_u64()
}

/// Run `trial` until the stop rule in `config` fires.
pub fn run_trials<F>(config: &MonteCarloConfig, trial: F) -> MonteCarloResult
where
    F: Fn(&mut SplitMix64) -> f64 + Sync + Send,
{
    let start = Instant::now();
    let batch_size = config.batch_size.max(1);
    let mut stats = TrialStats::default();
    let mut next_batch = 0u64;
    let mut converged = false;

    if config.verbose {
        eprintln!(
            "Monte Carlo: batch {} x {} per round, max {} trials, target ±{:.2e}",
            batch_size, config.batches_per_round, config.max_trials, config.target_half_width
        );
    }

    while stats.count < config.max_trials {
        let remaining = config.max_trials - stats.count;
        let batches = config
            .batches_per_round
            .max(1)
            .min(remaining.div_ceil(batch_size));
        let round_start = Instant::now();

        let batch_stats: Vec<TrialStats> = (next_batch..next_batch + batches)
            .into_par_iter()
            .map(|b| {
                let mut rng = SplitMix64::new(batch_seed(config.seed, b));
                let trials = batch_size.min(remaining - (b - next_batch) * batch_size);
                let mut local = TrialStats::default();
                for _ in 0..trials {
                    local.record(trial(&mut rng));
                }
                local
            })
            .collect();
        let mut round = TrialStats::default();
        for b in &batch_stats {
            round.merge(b);
        }
        next_batch += batches;
        let round_runs = round.count;
        stats.merge(&round);

        if config.verbose {
            eprintln!(
                "Runs: {:>12} | Mean: {:.6} | 95% CI: ±{:.2e} | Rate: {:.0} runs/sec",
                stats.count,
                stats.mean(),
                stats.half_width(),
                round_runs as f64 / round_start.elapsed().as_secs_f64().max(1e-9)
            );
        }

        if stats.count >= config.min_trials && stats.half_width() <= config.target_half_width {
            converged = true;
            break;
        }
    }

    if config.verbose {
        let hw = stats.half_width();
        if converged {
            eprintln!(
                "*** CONVERGED *** after {} runs ({:.2} s)",
                stats.count,
                start.elapsed().as_secs_f64()
            );
        } else {
            eprintln!(
                "Trial cap reached after {} runs ({:.2} s)",
                stats.count,
                start.elapsed().as_secs_f64()
            );
        }
        eprintln!(
            "95% Confidence interval: [{:.6}, {:.6}]",
            stats.mean() - hw,
            stats.mean() + hw
        );
    }

    MonteCarloResult { stats, converged }
}
