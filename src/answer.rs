//! The value a solver produces.

use std::fmt;

use serde::Serialize;

/// A puzzle answer: an exact integer, or a decimal rounded to a fixed number
/// of places when printed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Integer(i128),
    Decimal { value: f64, places: u32 },
}

impl Answer {
    pub fn decimal(value: f64, places: u32) -> Self {
        Answer::Decimal { value, places }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Answer::Integer(v) => write!(f, "{}", v),
            Answer::Decimal { value, places } => write!(f, "{:.*}", places as usize, value),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(v: $t) -> Self {
                    Answer::Integer(v as i128)
                }
            }
        )*
    };
}

impl_from_int!(u32, u64, usize, i32, i64, i128);
