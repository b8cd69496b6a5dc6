//! Even-sized bag packings: f(24680) mod 1020202009.
//!
//! The packings are counted by the Euler zigzag numbers (f(4) = 5, f(8) = 1385),
//! evaluated with the Seidel–Entringer boustrophedon in O(n²) additions.

use crate::answer::Answer;

/// Zigzag number A_n mod `modulus`.
pub fn zigzag(n: usize, modulus: u64) -> u64 {
    let mut row = vec![1 % modulus];
    let mut next = Vec::with_capacity(n + 1);
    for k in 1..=n {
        next.clear();
        next.push(0);
        for i in 0..k {
            let v = (next[i] + row[k - 1 - i]) % modulus;
            next.push(v);
        }
        std::mem::swap(&mut row, &mut next);
    }
    row[n]
}

pub fn solve() -> Answer {
    Answer::from(zigzag(24_680, 1_020_202_009))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let m = u64::MAX >> 1;
        let values: Vec<u64> = (0..=10).map(|n| zigzag(n, m)).collect();
        assert_eq!(values, vec![1, 1, 1, 2, 5, 16, 61, 272, 1385, 7936, 50521]);
    }
}
