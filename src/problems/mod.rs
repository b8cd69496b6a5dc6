//! Problem registry.
//!
//! Each `pNNN` module exposes a parameterized function for the puzzle's
//! small instances plus `solve()` for the full one. `PROBLEMS` lists them in
//! ascending id.

use serde::Serialize;

use crate::answer::Answer;
use crate::error::{Result, SolveError};
use crate::monte_carlo::{MonteCarloConfig, MonteCarloResult};

pub mod p088;
pub mod p131;
pub mod p135;
pub mod p144;
pub mod p148;
pub mod p161;
pub mod p171;
pub mod p181;
pub mod p182;
pub mod p183;
pub mod p185;
pub mod p189;
pub mod p193;
pub mod p217;
pub mod p234;
pub mod p253;
pub mod p258;
pub mod p274;
pub mod p290;
pub mod p298;
pub mod p300;
pub mod p351;
pub mod p357;
pub mod p393;
pub mod p417;
pub mod p458;
pub mod p491;
pub mod p500;
pub mod p504;
pub mod p518;
pub mod p549;
pub mod p601;
pub mod p622;
pub mod p686;
pub mod p694;
pub mod p709;
pub mod p745;
pub mod p757;
pub mod p800;
pub mod p808;
pub mod p816;
pub mod p820;
pub mod p856;
pub mod p918;
pub mod p932;

/// Solution technique, for listing and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    NumberTheory,
    DigitDp,
    BitmaskDp,
    MarkovDp,
    Recurrence,
    Geometry,
    Search,
}

impl Technique {
    pub fn name(self) -> &'static str {
        match self {
            Technique::NumberTheory => "number theory",
            Technique::DigitDp => "digit DP",
            Technique::BitmaskDp => "bitmask DP",
            Technique::MarkovDp => "Markov DP",
            Technique::Recurrence => "recurrence",
            Technique::Geometry => "geometry",
            Technique::Search => "search",
        }
    }
}

pub struct Problem {
    pub id: u32,
    pub title: &'static str,
    pub technique: Technique,
    pub solve: fn() -> Answer,
    /// Monte-Carlo estimate of the same quantity, for probability puzzles.
    pub simulate: Option<fn(&MonteCarloConfig) -> MonteCarloResult>,
}

macro_rules! problem {
    ($id:expr, $module:ident, $title:expr, $technique:ident) => {
        Problem {
            id: $id,
            title: $title,
            technique: Technique::$technique,
            solve: $module::solve,
            simulate: None,
        }
    };
    ($id:expr, $module:ident, $title:expr, $technique:ident, simulated) => {
        Problem {
            id: $id,
            title: $title,
            technique: Technique::$technique,
            solve: $module::solve,
            simulate: Some($module::simulate),
        }
    };
}

pub static PROBLEMS: &[Problem] = &[
    problem!(88, p088, "Product-sum numbers", Search),
    problem!(131, p131, "Prime cube partnership", NumberTheory),
    problem!(135, p135, "Same differences", NumberTheory),
    problem!(144, p144, "Laser beam reflections", Geometry),
    problem!(148, p148, "Exploring Pascal's triangle", NumberTheory),
    problem!(161, p161, "Triominoes", BitmaskDp),
    problem!(171, p171, "Square sum of the digital squares", DigitDp),
    problem!(181, p181, "Grouping objects of two colours", Search),
    problem!(182, p182, "RSA encryption", NumberTheory),
    problem!(183, p183, "Maximum product of parts", NumberTheory),
    problem!(185, p185, "Number Mind", Search),
    problem!(189, p189, "Tri-colouring a triangular grid", BitmaskDp),
    problem!(193, p193, "Squarefree numbers", NumberTheory),
    problem!(217, p217, "Balanced numbers", DigitDp),
    problem!(234, p234, "Semidivisible numbers", NumberTheory),
    problem!(253, p253, "Tidying up", MarkovDp, simulated),
    problem!(258, p258, "A lagged Fibonacci sequence", Recurrence),
    problem!(274, p274, "Divisibility multipliers", NumberTheory),
    problem!(290, p290, "Digital signature", DigitDp),
    problem!(298, p298, "Selective amnesia", MarkovDp, simulated),
    problem!(300, p300, "Protein folding", Search),
    problem!(351, p351, "Hexagonal orchards", NumberTheory),
    problem!(357, p357, "Prime generating integers", NumberTheory),
    problem!(393, p393, "Migrating ants", BitmaskDp),
    problem!(417, p417, "Reciprocal cycles II", NumberTheory),
    problem!(458, p458, "Permutations of project", Recurrence),
    problem!(491, p491, "Double pandigital number divisible by 11", Search),
    problem!(500, p500, "Problem 500!!!", NumberTheory),
    problem!(504, p504, "Square on the inside", Geometry),
    problem!(518, p518, "Prime triples and geometric sequences", NumberTheory),
    problem!(549, p549, "Divisibility of factorials", NumberTheory),
    problem!(601, p601, "Divisibility streaks", NumberTheory),
    problem!(622, p622, "Riffle shuffles", NumberTheory),
    problem!(686, p686, "Powers of two", Search),
    problem!(694, p694, "Cube-full divisors", NumberTheory),
    problem!(709, p709, "Even stevens", Recurrence),
    problem!(745, p745, "Sum of squares II", NumberTheory),
    problem!(757, p757, "Stealthy numbers", Search),
    problem!(800, p800, "Hybrid integers", NumberTheory),
    problem!(808, p808, "Reversible prime squares", NumberTheory),
    problem!(816, p816, "Shortest distance among points", Geometry),
    problem!(820, p820, "Nth digit of reciprocals", NumberTheory),
    problem!(856, p856, "Waiting for a pair", MarkovDp, simulated),
    problem!(918, p918, "Recursive sequence summation", Recurrence),
    problem!(932, p932, "2025", Search),
];

/// Look up a problem by id.
pub fn find(id: u32) -> Result<&'static Problem> {
    PROBLEMS
        .binary_search_by_key(&id, |p| p.id)
        .map(|i| &PROBLEMS[i])
        .map_err(|_| SolveError::UnknownProblem(id))
}
