//! Protein folding: the average, over all 2¹⁵ H/P proteins of length 15, of
//! the most H-H contacts any self-avoiding fold on the square lattice gives.
//!
//! A fold matters only through which residue pairs end up adjacent. On the
//! square lattice only pairs at odd index distance can touch, and for
//! lengths up to 16 those pairs fit one `u64` mask. Folds are enumerated once
//! (first step to the right, first turn upward), their contact masks are
//! deduplicated and pruned to the maximal ones, and then every protein is
//! scored in parallel with a popcount per mask.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::answer::Answer;
use crate::parallel::ComputeProgress;

pub const MAX_LENGTH: usize = 16;

const STEPS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Bit assignment for residue pairs at odd distance.
pub struct ContactPairs {
    length: usize,
    bits: Vec<Option<u8>>,
}

impl ContactPairs {
    pub fn new(length: usize) -> Self {
        assert!(length <= MAX_LENGTH, "length {} exceeds {}", length, MAX_LENGTH);
        let mut bits = vec![None; length * length];
        let mut next = 0u8;
        for i in 0..length {
            for j in (i + 1..length).step_by(2) {
                bits[i * length + j] = Some(next);
                bits[j * length + i] = Some(next);
                next += 1;
            }
        }
        ContactPairs { length, bits }
    }

    #[inline]
    fn bit(&self, i: usize, j: usize) -> Option<u8> {
        self.bits[i * self.length + j]
    }

    /// Pairs whose residues are both H in `protein` (bit i set = residue i is H).
    pub fn hydrophobic_mask(&self, protein: u32) -> u64 {
        let mut mask = 0u64;
        for i in 0..self.length {
            if protein >> i & 1 == 0 {
                continue;
            }
            for j in (i + 1..self.length).step_by(2) {
                if protein >> j & 1 == 1 {
                    if let Some(b) = self.bit(i, j) {
                        mask |= 1 << b;
                    }
                }
            }
        }
        mask
    }
}

struct FoldSearch<'a> {
    pairs: &'a ContactPairs,
    length: usize,
    side: usize,
    grid: Vec<u8>,
    path: Vec<(usize, usize)>,
    maps: HashSet<u64>,
}

const EMPTY: u8 = u8::MAX;

impl FoldSearch<'_> {
    fn cell(&self, x: usize, y: usize) -> u8 {
        self.grid[y * self.side + x]
    }

    fn place(&mut self, x: usize, y: usize) {
        let index = self.path.len() as u8;
        self.grid[y * self.side + x] = index;
        self.path.push((x, y));
    }

    fn unplace(&mut self) {
        if let Some((x, y)) = self.path.pop() {
            self.grid[y * self.side + x] = EMPTY;
        }
    }

    fn record(&mut self) {
        let mut mask = 0u64;
        for (a, &(x, y)) in self.path.iter().enumerate() {
            for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                let b = self.cell(nx, ny);
                if b != EMPTY {
                    if let Some(bit) = self.pairs.bit(a, b as usize) {
                        mask |= 1 << bit;
                    }
                }
            }
        }
        self.maps.insert(mask);
    }

    fn extend(&mut self, turned: bool) {
        if self.path.len() == self.length {
            self.record();
            return;
        }
        let (x, y) = self.path[self.path.len() - 1];
        for (dx, dy) in STEPS {
            // mirror images: the first step off the axis goes up
            if !turned && dy < 0 {
                continue;
            }
            let nx = (x as i32 + dx) as usize;
            let ny = (y as i32 + dy) as usize;
            if self.cell(nx, ny) != EMPTY {
                continue;
            }
            self.place(nx, ny);
            self.extend(turned || dy != 0);
            self.unplace();
        }
    }
}

/// Maximal contact masks over all folds of `length` residues.
pub fn contact_maps(pairs: &ContactPairs) -> Vec<u64> {
    let length = pairs.length;
    if length < 2 {
        return vec![0];
    }
    let side = 2 * length + 1;
    let mut search = FoldSearch {
        pairs,
        length,
        side,
        grid: vec![EMPTY; side * side],
        path: Vec::with_capacity(length),
        maps: HashSet::new(),
    };
    search.place(length, length);
    search.place(length + 1, length);
    search.extend(false);

    let mut maps: Vec<u64> = search.maps.into_iter().collect();
    maps.sort_unstable_by_key(|m| (std::cmp::Reverse(m.count_ones()), *m));
    let mut maximal: Vec<u64> = Vec::new();
    for m in maps {
        if !maximal.iter().any(|&k| m & k == m) {
            maximal.push(m);
        }
    }
    maximal
}

/// Σ over all 2^`length` proteins of the best contact count.
pub fn total_best_contacts(length: usize, verbose: bool) -> u64 {
    let pairs = ContactPairs::new(length);
    let maps = contact_maps(&pairs);
    let proteins = 1u64 << length;
    let progress = if verbose {
        eprintln!("Length {}: {} maximal contact maps", length, maps.len());
        ComputeProgress::new("Problem 300", proteins)
    } else {
        ComputeProgress::silent(proteins)
    };
    let total = (0..proteins as u32)
        .into_par_iter()
        .map(|protein| {
            let h = pairs.hydrophobic_mask(protein);
            let best = maps.iter().map(|&m| (m & h).count_ones()).max().unwrap_or(0);
            progress.advance(1);
            best as u64
        })
        .sum();
    progress.finish();
    total
}

/// Average best contact count over all proteins of `length`.
pub fn average_best_contacts(length: usize, verbose: bool) -> f64 {
    total_best_contacts(length, verbose) as f64 / (1u64 << length) as f64
}

pub fn solve() -> Answer {
    Answer::decimal(average_best_contacts(15, true), 13)
}
