//! A lagged Fibonacci sequence: g_k = 1 for k < 2000,
//! g_k = g_{k−2000} + g_{k−1999}; find g_{10¹⁸} mod 20092010.

use crate::answer::Answer;
use crate::recurrence::LinearRecurrence;

/// The recurrence g_k = g_{k−lag} + g_{k−lag+1} with all-ones seed.
pub fn lagged_fibonacci(lag: usize, modulus: u64) -> LinearRecurrence {
    let mut coefficients = vec![0; lag];
    coefficients[lag - 2] = 1;
    coefficients[lag - 1] = 1;
    LinearRecurrence::new(coefficients, vec![1; lag], modulus)
}

pub fn solve() -> Answer {
    Answer::from(lagged_fibonacci(2000, 20_092_010).nth(1_000_000_000_000_000_000))
}
