//! Ways to group 60 black and 40 white objects.
//!
//! Partitions of the pair (60, 40) into non-zero parts: an unbounded knapsack
//! over every possible group (b, w), processed in a fixed order so that each
//! multiset of groups is counted once.

use crate::answer::Answer;

/// Number of ways to split `black` black and `white` white objects into
/// unordered non-empty groups.
pub fn groupings(black: usize, white: usize) -> u128 {
    let mut ways = vec![vec![0u128; white + 1]; black + 1];
    ways[0][0] = 1;
    for b in 0..=black {
        for w in 0..=white {
            if b == 0 && w == 0 {
                continue;
            }
            for i in b..=black {
                for j in w..=white {
                    ways[i][j] += ways[i - b][j - w];
                }
            }
        }
    }
    ways[black][white]
}

pub fn solve() -> Answer {
    Answer::Integer(groupings(60, 40) as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_black_one_white() {
        assert_eq!(groupings(3, 1), 7);
    }

    #[test]
    fn test_single_colour_is_integer_partition() {
        // p(10) = 42
        assert_eq!(groupings(10, 0), 42);
        assert_eq!(groupings(0, 10), 42);
    }
}
