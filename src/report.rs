//! Solve reports: run a registered problem, time it, print the outcome.

use std::io::Write;
use std::time::Instant;

use serde::Serialize;

use crate::answer::Answer;
use crate::error::Result;
use crate::problems::{Problem, Technique};

/// Outcome of one solver run.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub id: u32,
    pub title: &'static str,
    pub technique: Technique,
    pub answer: Answer,
    /// Answer formatted the way the puzzle expects it.
    pub display: String,
    pub elapsed_ms: f64,
}

/// Run `problem` and time it.
pub fn run(problem: &Problem) -> SolveReport {
    let start = Instant::now();
    let answer = (problem.solve)();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    SolveReport {
        id: problem.id,
        title: problem.title,
        technique: problem.technique,
        answer,
        display: answer.to_string(),
        elapsed_ms,
    }
}

/// Write one report line: JSON object, or `Problem N: answer (t ms)`.
pub fn write_report<W: Write>(out: &mut W, report: &SolveReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "Problem {}: {} ({:.1} ms) [{}]",
            report.id, report.display, report.elapsed_ms, report.title
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolveReport {
        SolveReport {
            id: 7,
            title: "Sample",
            technique: Technique::NumberTheory,
            answer: Answer::from(104_743u64),
            display: "104743".to_string(),
            elapsed_ms: 1.5,
        }
    }

    #[test]
    fn test_text_report() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), false).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line, "Problem 7: 104743 (1.5 ms) [Sample]\n");
    }

    #[test]
    fn test_json_report() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), true).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["id"], 7);
        assert_eq!(v["answer"], 104_743);
        assert_eq!(v["technique"], "number_theory");
        assert_eq!(v["display"], "104743");
    }
}
