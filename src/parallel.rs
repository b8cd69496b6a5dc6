//! Data-parallel loops over integer ranges.
//!
//! Brute-force solvers split a `u64` range into fixed-size chunks and reduce
//! them on the rayon pool. Chunks are processed in no particular order; the
//! reduction is a sum, so the result is deterministic.
//!
//! [`ComputeProgress`] gives long loops a throttled single-line progress
//! report on stderr, updated from worker threads through an atomic counter.

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;

/// Default chunk size for range reductions.
pub const DEFAULT_CHUNK: u64 = 1 << 16;

/// Progress tracker shared by worker threads.
pub struct ComputeProgress {
    label: String,
    total: u64,
    completed: AtomicU64,
    start_time: Instant,
    last_report_time: Mutex<Instant>,
    quiet: bool,
}

impl ComputeProgress {
    pub fn new(label: &str, total: u64) -> Self {
        let now = Instant::now();
        ComputeProgress {
            label: label.to_string(),
            total,
            completed: AtomicU64::new(0),
            start_time: now,
            last_report_time: Mutex::new(now),
            quiet: false,
        }
    }

    /// Tracker that counts but never prints.
    pub fn silent(total: u64) -> Self {
        let mut p = Self::new("", total);
        p.quiet = true;
        p
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Record `n` finished units; prints at most every 0.5 s.
    pub fn advance(&self, n: u64) {
        let done = self.completed.fetch_add(n, Ordering::Relaxed) + n;
        if self.quiet {
            return;
        }
        let now = Instant::now();
        let Ok(mut last) = self.last_report_time.try_lock() else {
            return;
        };
        if done < self.total && now.duration_since(*last).as_secs_f64() < 0.5 {
            return;
        }
        *last = now;

        let elapsed = now.duration_since(self.start_time).as_secs_f64();
        let pct = done as f64 / self.total.max(1) as f64 * 100.0;
        let rate = done as f64 / elapsed.max(1e-9);
        let eta = self.total.saturating_sub(done) as f64 / rate.max(1e-9);
        eprint!(
            "\r{}: {}/{} ({:.1}%) | Elapsed: {:.1}s | Rate: {:.0}/s | ETA: {:.1}s     ",
            self.label, done, self.total, pct, elapsed, rate, eta
        );
    }

    /// Print the final line with total time.
    pub fn finish(&self) {
        if self.quiet {
            return;
        }
        eprintln!(
            "\n{} complete: {} units in {:.2} seconds",
            self.label,
            self.completed(),
            self.start_time.elapsed().as_secs_f64()
        );
    }
}

/// Split `range` into consecutive chunks of at most `chunk` values.
pub fn chunks(range: Range<u64>, chunk: u64) -> Vec<Range<u64>> {
    let chunk = chunk.max(1);
    let mut out = Vec::new();
    let mut lo = range.start;
    while lo < range.end {
        let hi = range.end.min(lo.saturating_add(chunk));
        out.push(lo..hi);
        lo = hi;
    }
    out
}

/// Σ f(chunk) over `range` split into chunks, evaluated in parallel.
pub fn par_sum_range<F>(range: Range<u64>, chunk: u64, f: F) -> u128
where
    F: Fn(Range<u64>) -> u128 + Sync + Send,
{
    chunks(range, chunk).into_par_iter().map(f).sum()
}

/// Like [`par_sum_range`] with progress reporting under `label`.
pub fn par_sum_range_with_progress<F>(label: &str, range: Range<u64>, chunk: u64, f: F) -> u128
where
    F: Fn(Range<u64>) -> u128 + Sync + Send,
{
    let total = range.end.saturating_sub(range.start);
    let progress = ComputeProgress::new(label, total);
    let sum = chunks(range, chunk)
        .into_par_iter()
        .map(|r| {
            let len = r.end - r.start;
            let v = f(r);
            progress.advance(len);
            v
        })
        .sum();
    progress.finish();
    sum
}
