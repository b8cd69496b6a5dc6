//! Number Mind: the unique 16-digit secret consistent with 22 guesses and
//! their counts of correctly placed digits.
//!
//! Meet in the middle. Every first-half prefix whose per-guess match counts
//! stay within the targets is stored under its packed count vector; every
//! second-half suffix then looks up the prefixes carrying the complementary
//! counts. Both halves are depth-first searches that backtrack as soon as a
//! guess has more matches than allowed. Suffixes are searched in parallel,
//! one task per leading digit.

use rayon::prelude::*;

use crate::answer::Answer;
use crate::memo::{KeyLayout, MAX_FIELDS};

const GUESSES: [(&str, u8); 22] = [
    ("5616185650518293", 2),
    ("3847439647293047", 1),
    ("5855462940810587", 3),
    ("9742855507068353", 3),
    ("4296849643607543", 3),
    ("3174248439465858", 1),
    ("4513559094146117", 2),
    ("7890971548908067", 3),
    ("8157356344118483", 1),
    ("2615250744386899", 2),
    ("8690095851526254", 3),
    ("6375711915077050", 1),
    ("6913859173121360", 1),
    ("6442889055042768", 2),
    ("2321386104303845", 0),
    ("2326509471271448", 2),
    ("5251583379644322", 2),
    ("1748270476758276", 3),
    ("4895722652190306", 1),
    ("3041631117224635", 3),
    ("1841236454324589", 3),
    ("2659862637316867", 2),
];

struct Guess {
    digits: Vec<u8>,
    correct: u8,
}

pub struct NumberMind {
    guesses: Vec<Guess>,
    length: usize,
    layout: KeyLayout,
}

impl NumberMind {
    /// Panics on an empty guess list, more than [`MAX_FIELDS`] guesses,
    /// non-digit characters or guesses of differing lengths.
    pub fn new(guesses: &[(&str, u8)]) -> Self {
        assert!(!guesses.is_empty(), "no guesses");
        assert!(guesses.len() <= MAX_FIELDS, "{} guesses exceed key fields", guesses.len());
        let length = guesses[0].0.len();
        assert!((1..=18).contains(&length), "secret length {} out of range", length);
        let guesses: Vec<Guess> = guesses
            .iter()
            .map(|&(s, correct)| {
                assert_eq!(s.len(), length, "guess {} has the wrong length", s);
                assert!(s.bytes().all(|b| b.is_ascii_digit()), "guess {} is not numeric", s);
                Guess {
                    digits: s.bytes().map(|b| b - b'0').collect(),
                    correct,
                }
            })
            .collect();
        // each count needs room for values up to its target
        let widths: Vec<u8> = guesses
            .iter()
            .map(|g| (8 - g.correct.leading_zeros() as u8).max(1))
            .collect();
        NumberMind {
            guesses,
            length,
            layout: KeyLayout::new(&widths),
        }
    }

    fn key(&self, counts: &[u8]) -> u64 {
        let mut values = [0u64; MAX_FIELDS];
        for (v, &c) in values.iter_mut().zip(counts) {
            *v = c as u64;
        }
        self.layout.pack(&values[..counts.len()])
    }

    fn remaining_key(&self, counts: &[u8]) -> u64 {
        let mut values = [0u64; MAX_FIELDS];
        for ((v, &c), g) in values.iter_mut().zip(counts).zip(&self.guesses) {
            *v = (g.correct - c) as u64;
        }
        self.layout.pack(&values[..counts.len()])
    }

    /// Count digit `d` at `pos`; false when some guess overshoots its target.
    fn apply(&self, pos: usize, d: u8, counts: &mut [u8]) -> bool {
        let mut ok = true;
        for (c, g) in counts.iter_mut().zip(&self.guesses) {
            if g.digits[pos] == d {
                *c += 1;
                ok &= *c <= g.correct;
            }
        }
        ok
    }

    fn undo(&self, pos: usize, d: u8, counts: &mut [u8]) {
        for (c, g) in counts.iter_mut().zip(&self.guesses) {
            if g.digits[pos] == d {
                *c -= 1;
            }
        }
    }

    fn walk<F>(&self, pos: usize, end: usize, counts: &mut [u8], value: u64, leaf: &mut F)
    where
        F: FnMut(&[u8], u64),
    {
        if pos == end {
            leaf(counts, value);
            return;
        }
        for d in 0..10u8 {
            if self.apply(pos, d, counts) {
                self.walk(pos + 1, end, counts, value * 10 + d as u64, leaf);
            }
            self.undo(pos, d, counts);
        }
    }

    /// Every secret consistent with all guesses, ascending.
    pub fn solutions(&self) -> Vec<u64> {
        let half = self.length / 2;
        let scale = 10u64.pow((self.length - half) as u32);
        let n = self.guesses.len();

        let mut prefixes: Vec<(u64, u64)> = Vec::new();
        let mut counts = vec![0u8; n];
        self.walk(0, half, &mut counts, 0, &mut |counts: &[u8], prefix: u64| {
            prefixes.push((self.key(counts), prefix));
        });
        prefixes.sort_unstable();

        let mut found: Vec<u64> = (0..10u8)
            .into_par_iter()
            .map(|d| {
                let mut found = Vec::new();
                let mut counts = vec![0u8; n];
                if self.apply(half, d, &mut counts) {
                    self.walk(half + 1, self.length, &mut counts, d as u64, &mut |counts: &[u8], suffix: u64| {
                        let key = self.remaining_key(counts);
                        let lo = prefixes.partition_point(|e| e.0 < key);
                        for &(_, prefix) in prefixes[lo..].iter().take_while(|e| e.0 == key) {
                            found.push(prefix * scale + suffix);
                        }
                    });
                }
                found
            })
            .reduce(Vec::new, |mut a, b| {
                a.extend(b);
                a
            });
        found.sort_unstable();
        found
    }
}

pub fn solve() -> Answer {
    let solutions = NumberMind::new(&GUESSES).solutions();
    if solutions.len() != 1 {
        eprintln!("Problem 185: expected one secret, found {}", solutions.len());
    }
    Answer::from(solutions.first().copied().unwrap_or(0))
}
