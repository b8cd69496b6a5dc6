//! Tri-colouring a triangular grid: proper 3-colourings of the 64 unit
//! triangles of a side-8 triangle, adjacent triangles differing.
//!
//! Row r (from the apex, 0-based) holds r+1 upward triangles and r downward
//! ones between them. The k-th downward triangle touches upward k and k+1 of
//! its own row and upward k of the row above, and nothing else. So the row
//! transfer only needs the colours of the upward triangles (two bits each),
//! and once the next row's upward colours are fixed each downward triangle
//! independently takes any colour its three neighbours leave free.

use crate::answer::Answer;
use crate::memo::{KeyLayout, StateCounts};

const COLOURS: u64 = 3;

/// Largest side whose row fits a packed key.
pub const MAX_ROWS: usize = 32;

fn free_colours(a: u64, b: u64, c: u64) -> u64 {
    let used = (1u32 << a) | (1 << b) | (1 << c);
    COLOURS - used.count_ones() as u64
}

struct RowTransfer<'a> {
    above: &'a [u64],
    layout: KeyLayout,
    ups: Vec<u64>,
}

impl RowTransfer<'_> {
    fn extend(&mut self, ways: u128, next: &mut StateCounts) {
        let k = self.ups.len();
        if k == self.above.len() + 1 {
            next.add(self.layout.pack(&self.ups), ways);
            return;
        }
        for c in 0..COLOURS {
            let mut w = ways;
            if k > 0 {
                let free = free_colours(self.ups[k - 1], c, self.above[k - 1]);
                if free == 0 {
                    continue;
                }
                w *= free as u128;
            }
            self.ups.push(c);
            self.extend(w, next);
            self.ups.pop();
        }
    }
}

/// Proper 3-colourings of a triangle with `rows` rows of unit triangles.
pub fn count_colourings(rows: usize) -> u128 {
    assert!((1..=MAX_ROWS).contains(&rows), "rows {} out of range", rows);
    let mut frontier = StateCounts::new();
    let apex = KeyLayout::new(&[2]);
    for c in 0..COLOURS {
        frontier.add(apex.pack(&[c]), 1);
    }
    for r in 1..rows {
        let previous = KeyLayout::new(&vec![2; r]);
        let layout = KeyLayout::new(&vec![2; r + 1]);
        let mut next = StateCounts::new();
        for (key, ways) in frontier.iter() {
            let above = previous.unpack(key);
            let mut transfer = RowTransfer {
                above: &above,
                layout,
                ups: Vec::with_capacity(r + 1),
            };
            transfer.extend(ways, &mut next);
        }
        frontier = next;
    }
    frontier.total()
}

pub fn solve() -> Answer {
    Answer::Integer(count_colourings(8) as i128)
}
