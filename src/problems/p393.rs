//! Migrating ants: on an n×n grid with one ant per square, every ant moves
//! to an adjacent square at once. Count the moves where no square receives
//! two ants and no two ants cross the same edge, for n = 10.
//!
//! Each square loses one ant and gains one, over two different edges, and
//! each edge carries at most one ant. Squares are processed in row-major
//! order. The frontier holds the n vertical edges below the last n squares
//! plus the horizontal edge right of the last square, each empty, forward
//! (right or down) or backward (left or up).

use crate::answer::Answer;
use crate::memo::{KeyLayout, StateCounts};

const EMPTY: u64 = 0;
const FORWARD: u64 = 1;
const BACKWARD: u64 = 2;

/// Largest grid side whose frontier fits a packed key.
pub const MAX_SIDE: usize = 31;

/// Ant movements on an `n`×`n` grid.
pub fn count_migrations(n: usize) -> u128 {
    assert!((1..=MAX_SIDE).contains(&n), "side {} out of range", n);
    // fields 0..n: edge below each column; field n: edge left of the next square
    let layout = KeyLayout::new(&vec![2; n + 1]);
    let mut frontier = StateCounts::point(0);
    for row in 0..n {
        for col in 0..n {
            let mut next = StateCounts::new();
            for (key, ways) in frontier.iter() {
                let top = layout.field(key, col);
                let left = layout.field(key, n);
                for right in [EMPTY, FORWARD, BACKWARD] {
                    if col == n - 1 && right != EMPTY {
                        continue;
                    }
                    for bottom in [EMPTY, FORWARD, BACKWARD] {
                        if row == n - 1 && bottom != EMPTY {
                            continue;
                        }
                        let arriving = (top == FORWARD) as u8
                            + (left == FORWARD) as u8
                            + (right == BACKWARD) as u8
                            + (bottom == BACKWARD) as u8;
                        let leaving = (top == BACKWARD) as u8
                            + (left == BACKWARD) as u8
                            + (right == FORWARD) as u8
                            + (bottom == FORWARD) as u8;
                        if arriving != 1 || leaving != 1 {
                            continue;
                        }
                        let key = layout.replace(layout.replace(key, col, bottom), n, right);
                        next.add(key, ways);
                    }
                }
            }
            frontier = next;
        }
    }
    frontier.total()
}

pub fn solve() -> Answer {
    Answer::Integer(count_migrations(10) as i128)
}
