//! Triomino tilings of a 9×12 grid.
//!
//! Broken-profile DP: the grid is filled row by row, always covering the
//! lowest free cell `f` of the current row. Since a triomino spans at most
//! three rows, the state is the row index plus occupancy masks of the current
//! row and the two rows below it, packed into one key.
//!
//! The six placements anchored at `f` (its lowest free cell):
//!
//! ```text
//!   ##    ##    #.    .#    #    ###
//!   #.    .#    ##    ##    #
//!                           #
//! ```

use crate::answer::Answer;
use crate::memo::{KeyLayout, Memo};

struct TilingDp {
    width: u32,
    height: u32,
    full: u64,
    layout: KeyLayout,
    memo: Memo<u64>,
}

#[inline(always)]
fn taken(row: u64, pos: u32) -> bool {
    row & (1 << pos) != 0
}

impl TilingDp {
    fn new(width: u32, height: u32) -> Self {
        assert!((1..=20).contains(&width), "width {} out of range", width);
        let w = width as u8;
        TilingDp {
            width,
            height,
            full: (1u64 << width) - 1,
            layout: KeyLayout::new(&[8, w, w, w]),
            memo: Memo::new(),
        }
    }

    fn count(&mut self, row: u32, r1: u64, r2: u64, r3: u64) -> u64 {
        if row >= self.height {
            return 1;
        }
        if r1 == self.full {
            return self.count(row + 1, r2, r3, 0);
        }
        let key = self.layout.pack(&[row as u64, r1, r2, r3]);
        if let Some(v) = self.memo.get(key) {
            return v;
        }

        let w = self.width;
        let f = (!r1).trailing_zeros();
        let bit = |p: u32| 1u64 << p;
        let mut total = 0u64;

        if row + 1 < self.height {
            if f + 1 < w && !taken(r1, f + 1) && !taken(r2, f) {
                total += self.count(row, r1 | bit(f) | bit(f + 1), r2 | bit(f), r3);
            }
            if f + 1 < w && !taken(r1, f + 1) && !taken(r2, f + 1) {
                total += self.count(row, r1 | bit(f) | bit(f + 1), r2 | bit(f + 1), r3);
            }
            if f + 1 < w && !taken(r2, f) && !taken(r2, f + 1) {
                total += self.count(row, r1 | bit(f), r2 | bit(f) | bit(f + 1), r3);
            }
            if f >= 1 && !taken(r2, f) && !taken(r2, f - 1) {
                total += self.count(row, r1 | bit(f), r2 | bit(f) | bit(f - 1), r3);
            }
        }
        if row + 2 < self.height && !taken(r2, f) && !taken(r3, f) {
            total += self.count(row, r1 | bit(f), r2 | bit(f), r3 | bit(f));
        }
        if f + 2 < w && !taken(r1, f + 1) && !taken(r1, f + 2) {
            total += self.count(row, r1 | (0b111 << f), r2, r3);
        }

        self.memo.insert(key, total)
    }
}

/// Number of triomino tilings of a `width` × `height` grid.
pub fn count_tilings(width: u32, height: u32) -> u64 {
    let mut dp = TilingDp::new(width, height);
    dp.count(0, 0, 0, 0)
}

pub fn solve() -> Answer {
    Answer::from(count_tilings(9, 12))
}
