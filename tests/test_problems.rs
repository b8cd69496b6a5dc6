//! Small instances quoted in the puzzle statements, checked through the
//! public solver functions, plus registry and report plumbing.

use euler::answer::Answer;
use euler::error::SolveError;
use euler::monte_carlo::MonteCarloConfig;
use euler::problems::*;
use euler::report::write_report;

fn quiet_config(seed: u64, trials: u64) -> MonteCarloConfig {
    MonteCarloConfig {
        seed,
        max_trials: trials,
        min_trials: trials,
        verbose: false,
        ..Default::default()
    }
}

// ── Registry ─────────────────────────────────────────────────────────

#[test]
fn registry_is_sorted_and_complete() {
    assert_eq!(PROBLEMS.len(), 45);
    assert!(PROBLEMS.windows(2).all(|w| w[0].id < w[1].id));
    for p in PROBLEMS {
        assert_eq!(find(p.id).map(|q| q.id).ok(), Some(p.id));
        assert!(!p.title.is_empty());
    }
}

#[test]
fn unknown_problem_is_an_error() {
    let err = find(9999).err();
    assert!(matches!(err, Some(SolveError::UnknownProblem(9999))));
    assert_eq!(err.map(|e| e.to_string()).as_deref(), Some("Unknown problem: 9999"));
}

#[test]
fn cheap_problems_run_through_report() {
    // full instances that finish in well under a second
    for id in [144, 182, 183, 601, 622] {
        let problem = find(id).expect("registered");
        let report = euler::report::run(problem);
        let mut buf = Vec::new();
        write_report(&mut buf, &report, true).expect("json report");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(v["id"], id);
    }
    assert_eq!((find(144).expect("registered").solve)(), Answer::Integer(354));
}

// ── Number theory ────────────────────────────────────────────────────

#[test]
fn statement_examples_number_theory() {
    assert_eq!(p131::count_below(100), 4);
    assert_eq!(p135::solution_counts(28)[27], 2);
    assert_eq!(p135::solution_counts(1156)[1155], 10);
    assert_eq!(p148::count_rows(100), 2361);
    assert_eq!(p182::minimal_exponents(19, 37).0, 9);
    assert_eq!(p183::sum_d(5, 100), 2438);
    assert_eq!(p193::count_squarefree(100), 61);
    assert_eq!(p234::semidivisible_sum(15), 30);
    assert_eq!(p274::multiplier_sum(1000), 39517);
    assert_eq!(p351::hidden_points(1000), 1177848);
    assert_eq!(p357::prime_generating_sum(1000, false), 8427);
    assert_eq!(p417::CycleLengths::new(1000).sum(false), 94288);
    assert_eq!(p500::least_with_power_of_two_divisors(4, 1_000_000_007), 120);
    assert_eq!(p518::triple_sum(100), 1035);
    assert_eq!(p549::kempner_sum(100), 2012);
    assert_eq!(p601::streak_count(6, 1_000_000), 14286);
    assert_eq!(p622::riffle_sum(8), 412);
    assert_eq!(p694::cube_full_divisor_sum(100), 126);
    assert_eq!(p745::square_divisor_sum(100, 1_000_000_007), 767);
    assert_eq!(p800::count_hybrid(800, 800), 10790);
    assert_eq!(p808::reversible_prime_squares(2, 100), vec![169, 961]);
    assert_eq!(p820::digit_sum(100), 418);
}

// ── Dynamic programming and recurrences ──────────────────────────────

#[test]
fn statement_examples_dp() {
    assert_eq!(p088::distinct_sum(6), 30);
    assert_eq!(p088::distinct_sum(12), 61);
    assert_eq!(p161::count_tilings(9, 2), 41);
    assert_eq!(p181::groupings(3, 1), 7);
    assert_eq!(p217::balanced_sum(2, u64::MAX >> 1), 540);
    assert_eq!(p290::count_matching(4, 137), 306);
    assert_eq!(p458::count_words(7, 7, 1_000_000_000), 818503);
    assert_eq!(p709::zigzag(8, 1_020_202_009), 1385);
    assert_eq!(p918::Sequence::new().prefix_sum(10), -13);
    assert_eq!(p189::count_colourings(2), 24);
    assert_eq!(p393::count_migrations(4), 88);
}

#[test]
fn amnesia_game_eight_turns() {
    let gap = p298::AmnesiaGame::new(5, 10).expected_gap(8);
    assert!((gap - 0.012096).abs() < 1e-12, "gap={}", gap);
}

#[test]
fn caterpillar_of_ten_pieces() {
    let exact = p253::Tidying::new().expected_max(10);
    assert_eq!(Answer::decimal(exact, 6).to_string(), "3.400732");
}

// ── Search, geometry, simulation ─────────────────────────────────────

#[test]
fn statement_examples_search_and_geometry() {
    assert_eq!(p504::count_square_interiors(4), 42);
    assert_eq!(p686::nth_power_with_prefix(12, 2), 80);
    assert_eq!(p686::nth_power_with_prefix(123, 45), 12710);
    assert_eq!(p757::count_stealthy(1_000_000), 2851);
    assert_eq!(p932::split_square_sum(4, false), 5131);
    assert_eq!(p300::average_best_contacts(8, false), 3.3203125);
    let mind = p185::NumberMind::new(&[
        ("90342", 2),
        ("70794", 0),
        ("39458", 2),
        ("34109", 1),
        ("51545", 2),
        ("12531", 1),
    ]);
    assert_eq!(mind.solutions(), vec![39542]);
    let d = p816::closest_pair_distance(14);
    assert_eq!(Answer::decimal(d, 9).to_string(), "546446.466846479");
}

#[test]
fn caterpillar_simulation_is_reproducible() {
    let a = p253::simulate_max_segments(10, &quiet_config(99, 50_000));
    let b = p253::simulate_max_segments(10, &quiet_config(99, 50_000));
    assert_eq!(a.stats, b.stats);
    assert!((a.stats.mean() - 385643.0 / 113400.0).abs() < 0.03);
}

#[test]
fn card_pair_simulation_tracks_exact_value() {
    let result = p856::simulate_draws(13, 4, &quiet_config(17, 200_000));
    let exact = p856::PairWait::new(4).expected_draws(13);
    let error = (result.stats.mean() - exact).abs();
    assert!(error < 5.0 * result.stats.half_width(), "mean={}", result.stats.mean());
}
