//! Double pandigital numbers divisible by 11.
//!
//! A 20-digit number uses each digit twice. Split it into the ten odd
//! positions (leading digit included) and the ten even ones; choosing how many
//! copies c_d ∈ {0, 1, 2} of each digit go to the odd positions fixes the
//! alternating digit sum. Each admissible split contributes the arrangements
//! of both halves, minus those with a leading zero.

use crate::answer::Answer;

fn factorial(n: usize) -> u128 {
    (1..=n as u128).product()
}

fn arrangements(counts: &[usize]) -> u128 {
    let n = counts.iter().sum();
    counts.iter().fold(factorial(n), |acc, &c| acc / factorial(c))
}

/// Numbers using each of the digits `0..k` exactly twice (no leading zero)
/// that are divisible by 11.
pub fn count_double_pandigital(k: usize) -> u128 {
    assert!((1..=10).contains(&k), "k={} out of range", k);
    let digit_total: usize = 2 * (0..k).sum::<usize>();
    let mut total = 0u128;
    let mut counts = vec![0usize; k];
    for code in 0..3usize.pow(k as u32) {
        let mut x = code;
        for c in counts.iter_mut() {
            *c = x % 3;
            x /= 3;
        }
        if counts.iter().sum::<usize>() != k {
            continue;
        }
        let odd: usize = counts.iter().enumerate().map(|(d, &c)| d * c).sum();
        let even = digit_total - odd;
        if (odd as i64 - even as i64) % 11 != 0 {
            continue;
        }
        let mut odd_ways = arrangements(&counts);
        if counts[0] > 0 {
            let mut lead_zero = counts.clone();
            lead_zero[0] -= 1;
            odd_ways -= arrangements(&lead_zero);
        }
        let rest: Vec<usize> = counts.iter().map(|&c| 2 - c).collect();
        total += odd_ways * arrangements(&rest);
    }
    total
}

pub fn solve() -> Answer {
    Answer::Integer(count_double_pandigital(10) as i128)
}
