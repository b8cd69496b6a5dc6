//! Shared environment configuration for the solver binary and heavy tests.
//!
//! Consolidates `RAYON_NUM_THREADS`, `EULER_MC_TRIALS` and `EULER_SEED` reads.
//! The `*_from` functions take the raw variable values so the fallback rules
//! can be checked without touching the process environment.

/// Default cap on Monte-Carlo trials when `EULER_MC_TRIALS` is unset.
pub const DEFAULT_MC_TRIALS: u64 = 20_000_000;

/// Default Monte-Carlo seed when `EULER_SEED` is unset.
pub const DEFAULT_SEED: u64 = 42;

fn parse_value<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|s| s.trim().parse().ok())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Thread count from raw `RAYON_NUM_THREADS` / `OMP_NUM_THREADS` values.
/// A missing, unparsable or zero value falls through to the next source.
pub fn threads_from(rayon: Option<&str>, omp: Option<&str>) -> Option<usize> {
    parse_value(rayon)
        .filter(|&n: &usize| n > 0)
        .or_else(|| parse_value(omp).filter(|&n: &usize| n > 0))
}

/// Trial cap from a raw `EULER_MC_TRIALS` value; zero means the default.
pub fn trials_from(value: Option<&str>) -> u64 {
    parse_value(value)
        .filter(|&n: &u64| n > 0)
        .unwrap_or(DEFAULT_MC_TRIALS)
}

pub fn seed_from(value: Option<&str>) -> u64 {
    parse_value(value).unwrap_or(DEFAULT_SEED)
}

/// Thread count from `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`,
/// default: available parallelism).
pub fn thread_count() -> usize {
    let rayon = env_value("RAYON_NUM_THREADS");
    let omp = env_value("OMP_NUM_THREADS");
    threads_from(rayon.as_deref(), omp.as_deref()).unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(8)
    })
}

/// Build the rayon global pool with [`thread_count`] threads. Tolerates an
/// already-initialized pool. Returns thread count.
pub fn init_rayon_threads_lenient() -> usize {
    let num_threads = thread_count();
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok(); // May fail if already initialized
    eprintln!("Rayon threads: {}", num_threads);
    num_threads
}

/// Read `EULER_MC_TRIALS` (default [`DEFAULT_MC_TRIALS`]).
pub fn monte_carlo_trials() -> u64 {
    trials_from(env_value("EULER_MC_TRIALS").as_deref())
}

/// Read `EULER_SEED` (default [`DEFAULT_SEED`]).
pub fn seed() -> u64 {
    seed_from(env_value("EULER_SEED").as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rayon_threads_take_precedence() {
        assert_eq!(threads_from(Some("6"), Some("2")), Some(6));
        assert_eq!(threads_from(Some(" 3 "), None), Some(3));
    }

    #[test]
    fn test_omp_fallback() {
        assert_eq!(threads_from(None, Some("2")), Some(2));
        assert_eq!(threads_from(Some("0"), Some("2")), Some(2));
        assert_eq!(threads_from(Some("many"), Some("4")), Some(4));
        assert_eq!(threads_from(None, None), None);
        assert_eq!(threads_from(Some("0"), Some("0")), None);
    }

    #[test]
    fn test_trials_default() {
        assert_eq!(trials_from(None), DEFAULT_MC_TRIALS);
        assert_eq!(trials_from(Some("0")), DEFAULT_MC_TRIALS);
        assert_eq!(trials_from(Some("-5")), DEFAULT_MC_TRIALS);
        assert_eq!(trials_from(Some("5000")), 5000);
    }

    #[test]
    fn test_seed() {
        assert_eq!(seed_from(None), DEFAULT_SEED);
        assert_eq!(seed_from(Some("x")), DEFAULT_SEED);
        assert_eq!(seed_from(Some("0")), 0);
        assert_eq!(seed_from(Some("7")), 7);
    }
}
