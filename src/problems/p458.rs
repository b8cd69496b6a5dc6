//! Permutations of "project": words of length 10¹² over a 7-letter alphabet
//! with no window containing all 7 letters, mod 10⁹.
//!
//! A word is tracked by the length of its longest suffix of distinct letters
//! (1..6). Appending a letter either extends that suffix (a − k choices) or
//! repeats one of its letters, cutting the suffix back to 1..k.

use crate::answer::Answer;
use crate::recurrence::ModMatrix;

/// Transition matrix over suffix lengths 1..a−1; column `k − 1` is the state
/// before appending.
pub fn transition(alphabet: usize, modulus: u64) -> ModMatrix {
    let states = alphabet - 1;
    let mut t = ModMatrix::zeros(states, modulus);
    for k in 1..=states {
        if k < states {
            t.add(k, k - 1, (alphabet - k) as u64);
        }
        for i in 1..=k {
            t.add(i - 1, k - 1, 1);
        }
    }
    t
}

/// Words of `length >= 1` over `alphabet >= 2` letters avoiding a window of
/// all letters, mod `modulus`.
pub fn count_words(alphabet: usize, length: u64, modulus: u64) -> u64 {
    let mut start = vec![0u64; alphabet - 1];
    start[0] = alphabet as u64 % modulus;
    transition(alphabet, modulus)
        .pow(length - 1)
        .apply(&start)
        .iter()
        .fold(0, |acc, &v| (acc + v) % modulus)
}

pub fn solve() -> Answer {
    Answer::from(count_words(7, 1_000_000_000_000, 1_000_000_000))
}
