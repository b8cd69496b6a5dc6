//! Powers of two: p(123, 678910), the 678910th j such that 2^j starts with
//! the digits 123.
//!
//! 2^j starts with L (D + 1 digits) iff the fractional part of j·log₁₀2 plus
//! D lies in [log₁₀ L, log₁₀(L + 1)).

use crate::answer::Answer;

/// The `n`-th exponent j >= 1 such that 2^j starts with the digits of `lead`.
pub fn nth_power_with_prefix(lead: u64, n: u64) -> u64 {
    let shift = (lead.ilog10()) as f64;
    let lo = (lead as f64).log10() - shift;
    let hi = ((lead + 1) as f64).log10() - shift;
    let step = 2f64.log10();
    let mut found = 0;
    let mut j = 0u64;
    loop {
        j += 1;
        let f = (j as f64 * step).fract();
        if f >= lo && f < hi {
            found += 1;
            if found == n {
                return j;
            }
        }
    }
}

pub fn solve() -> Answer {
    Answer::from(nth_power_with_prefix(123, 678_910))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_values() {
        assert_eq!(nth_power_with_prefix(12, 1), 7);
        assert_eq!(nth_power_with_prefix(12, 2), 80);
        assert_eq!(nth_power_with_prefix(123, 45), 12710);
    }

    #[test]
    fn test_small_exponents_exact() {
        // 2^j for j < 64 fits a u64
        for j in 1..64u32 {
            let v = 1u64 << j;
            let lead = v / 10u64.pow(v.ilog10().saturating_sub(1));
            if lead >= 10 {
                let expected = (1..=j).filter(|&i| {
                    let w = 1u64 << i;
                    w >= 10 && w / 10u64.pow(w.ilog10() - 1) == lead
                });
                assert_eq!(nth_power_with_prefix(lead, expected.count() as u64), j as u64);
            }
        }
    }
}
