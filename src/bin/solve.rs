use std::io::Write;
use std::time::Instant;

use euler::env_config::init_rayon_threads_lenient;
use euler::error::{Result, SolveError};
use euler::monte_carlo::{MonteCarloConfig, MonteCarloResult};
use euler::problems::{find, Problem, PROBLEMS};
use euler::report::{run, write_report};

const USAGE: &str = "Usage: euler-solve [--problem N]... [--all] [--list] [--json] [--simulate]";

struct Args {
    ids: Vec<u32>,
    all: bool,
    list: bool,
    json: bool,
    simulate: bool,
}

fn parse_id(value: Option<&String>) -> Result<u32> {
    let value = value.ok_or_else(|| SolveError::InvalidArgument {
        message: "--problem needs a value".to_string(),
    })?;
    value.parse().map_err(|_| SolveError::InvalidArgument {
        message: format!("invalid --problem value: {}", value),
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut ids = Vec::new();
    let mut all = false;
    let mut list = false;
    let mut json = false;
    let mut simulate = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--problem" | "-p" => {
                i += 1;
                match parse_id(args.get(i)) {
                    Ok(id) => ids.push(id),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--all" => {
                all = true;
            }
            "--list" => {
                list = true;
            }
            "--json" => {
                json = true;
            }
            "--simulate" => {
                simulate = true;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --problem N   Solve problem N (repeatable)");
                println!("  --all         Solve every registered problem");
                println!("  --list        List registered problems and exit");
                println!("  --json        One JSON object per solved problem");
                println!("  --simulate    Also run the Monte-Carlo cross-check where one exists");
                println!();
                println!("Environment:");
                println!("  RAYON_NUM_THREADS   Worker threads (fallback OMP_NUM_THREADS)");
                println!("  EULER_MC_TRIALS     Monte-Carlo trial cap (default 20000000)");
                println!("  EULER_SEED          Monte-Carlo seed (default 42)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        ids,
        all,
        list,
        json,
        simulate,
    }
}

fn selected(args: &Args) -> Result<Vec<&'static Problem>> {
    if args.all {
        return Ok(PROBLEMS.iter().collect());
    }
    args.ids.iter().map(|&id| find(id)).collect()
}

/// Run the problem's simulation with the environment's seed and trial cap.
/// The summary goes to stderr beside the trial rounds.
fn cross_check(id: u32, simulate: fn(&MonteCarloConfig) -> MonteCarloResult) {
    let config = MonteCarloConfig::from_env();
    let result = simulate(&config);
    eprintln!(
        "Problem {} simulation: {:.6} ± {:.2e} over {} trials ({})",
        id,
        result.stats.mean(),
        result.stats.half_width(),
        result.stats.count,
        if result.converged { "converged" } else { "trial cap" }
    );
}

fn main() {
    let args = parse_args();

    if args.list {
        for p in PROBLEMS {
            println!("{:>4}  {:<14} {}", p.id, p.technique.name(), p.title);
        }
        return;
    }

    let problems = match selected(&args) {
        Ok(p) if !p.is_empty() => p,
        Ok(_) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let threads = init_rayon_threads_lenient();
    let total_start = Instant::now();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for problem in &problems {
        if !args.json {
            println!("=== Problem {} ({}, {} threads) ===", problem.id, problem.title, threads);
        }
        let report = run(problem);
        if let Err(e) = write_report(&mut out, &report, args.json).and_then(|_| Ok(out.flush()?)) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        if args.simulate {
            if let Some(simulate) = problem.simulate {
                cross_check(problem.id, simulate);
            }
        }
    }

    if !args.json && problems.len() > 1 {
        println!(
            "Solved {} problems in {:.2} s",
            problems.len(),
            total_start.elapsed().as_secs_f64()
        );
    }
}
