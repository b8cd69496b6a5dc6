//! The `euler-solve` binary: argument handling, exit codes and the thread
//! count it reports from the environment.

use std::process::{Command, Output};

use euler::problems::PROBLEMS;

fn solver() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_euler-solve"));
    cmd.env_remove("RAYON_NUM_THREADS").env_remove("OMP_NUM_THREADS");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("spawn euler-solve")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── Arguments ────────────────────────────────────────────────────────

#[test]
fn no_selection_prints_usage() {
    let out = run(&mut solver());
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("Usage: euler-solve"));
}

#[test]
fn unknown_argument_exits_with_error() {
    let out = run(solver().arg("--bogus"));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Unknown argument: --bogus"));
}

#[test]
fn unknown_problem_exits_with_error() {
    let out = run(solver().args(["-p", "9999"]));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Unknown problem: 9999"));
}

#[test]
fn problem_flag_needs_a_number() {
    let out = run(solver().arg("--problem"));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("--problem needs a value"));

    let out = run(solver().args(["--problem", "abc"]));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid --problem value: abc"));
}

#[test]
fn list_shows_every_problem() {
    let out = run(solver().arg("--list"));
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(text.lines().count(), PROBLEMS.len());
    assert!(text.lines().any(|l| l.contains("Waiting for a pair")));
}

// ── Solving ──────────────────────────────────────────────────────────

#[test]
fn json_report_for_one_problem() {
    let out = run(solver().args(["--json", "-p", "144"]));
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    let line = text.lines().next().expect("one report line");
    let v: serde_json::Value = serde_json::from_str(line).expect("valid json");
    assert_eq!(v["id"], 144);
    assert_eq!(v["display"], "354");
}

#[test]
fn text_report_has_header() {
    let out = run(solver().args(["-p", "182"]));
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("=== Problem 182 (RSA encryption"));
    assert!(text.contains("Problem 182: 399788195976"));
}

// ── Environment ──────────────────────────────────────────────────────

#[test]
fn rayon_threads_from_environment() {
    let out = run(solver().env("RAYON_NUM_THREADS", "3").args(["-p", "144"]));
    assert!(out.status.success());
    assert!(stderr(&out).contains("Rayon threads: 3"));
}

#[test]
fn omp_threads_used_as_fallback() {
    let out = run(solver().env("OMP_NUM_THREADS", "2").args(["-p", "144"]));
    assert!(out.status.success());
    assert!(stderr(&out).contains("Rayon threads: 2"));

    let out = run(
        solver()
            .env("RAYON_NUM_THREADS", "0")
            .env("OMP_NUM_THREADS", "2")
            .args(["-p", "144"]),
    );
    assert!(stderr(&out).contains("Rayon threads: 2"));
}

// ── Simulation cross-check ───────────────────────────────────────────

fn simulation_line(out: &Output, id: u32) -> String {
    let prefix = format!("Problem {} simulation:", id);
    stderr(out)
        .lines()
        .find(|l| l.starts_with(&prefix))
        .map(str::to_string)
        .unwrap_or_default()
}

#[test]
fn simulate_uses_trial_cap_from_environment() {
    let out = run(
        solver()
            .env("EULER_MC_TRIALS", "20000")
            .args(["-p", "856", "--simulate"]),
    );
    assert!(out.status.success());
    let line = simulation_line(&out, 856);
    assert!(line.contains("over 20000 trials"), "line: {:?}", line);
    assert!(stdout(&out).contains("Problem 856: 17.09661501"));
}

#[test]
fn simulate_is_reproducible_across_thread_counts() {
    let sim = |threads: &str| {
        let out = run(
            solver()
                .env("RAYON_NUM_THREADS", threads)
                .env("EULER_MC_TRIALS", "30000")
                .env("EULER_SEED", "7")
                .args(["-p", "856", "--simulate"]),
        );
        simulation_line(&out, 856)
    };
    let one = sim("1");
    assert!(!one.is_empty());
    assert_eq!(one, sim("4"));
}

#[test]
fn simulate_skips_exact_only_problems() {
    let out = run(solver().env("EULER_MC_TRIALS", "1000").args(["-p", "144", "--simulate"]));
    assert!(out.status.success());
    assert!(simulation_line(&out, 144).is_empty());
}

