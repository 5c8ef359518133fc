//! minimax CLI - Command-line interface for the minimax solver
//!
//! Reads a payoff matrix from a file, stdin, or the game catalog, solves it
//! and prints the value and both players' equilibrium strategies.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use minimax_engine::{
    solve, EnteringRule, Matrix, Outcome, PivotStep, Report, Solution, SolverConfig, Variable,
};
use minimax_games::{auto_shift, read_matrix, Game, CATALOG};

#[derive(Parser)]
#[command(name = "minimax", version, about = "Solve two-player zero-sum matrix games")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    options: SolveOptions,

    /// Raise log level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a whitespace-separated payoff matrix read from FILE or stdin
    Solve { file: Option<PathBuf> },
    /// Solve a game from the catalog
    Game {
        name: String,
        /// Game parameters, e.g. `blotto 5 3`
        params: Vec<usize>,
    },
    /// List catalog games
    List,
}

#[derive(Args)]
struct SolveOptions {
    /// Constant added to every payoff, or `auto` to lift the minimum to 1
    #[arg(long, default_value = "auto", global = true)]
    shift: Shift,

    /// Seed for the random entering rule
    #[arg(long, default_value_t = 0, global = true)]
    seed: u64,

    #[arg(long, default_value_t = 10_000, global = true)]
    max_iterations: u64,

    /// Entering rule: random, dantzig or bland
    #[arg(long, default_value = "random", global = true)]
    rule: EnteringRule,

    /// Print every pivot with labels and tableau
    #[arg(long, global = true)]
    trace: bool,

    /// Emit the report as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Clone, Copy, Debug)]
enum Shift {
    Auto,
    Fixed(f64),
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Shift::Auto);
        }
        s.parse::<f64>()
            .map(Shift::Fixed)
            .map_err(|_| format!("expected a number or 'auto', got '{}'", s))
    }
}

/// Probabilities at or below this are left out of the support.
const SUPPORT_TOLERANCE: f64 = 1e-9;

/// A matrix ready to solve plus what to call its strategies.
struct Problem {
    title: String,
    payoffs: Matrix,
    row_names: Vec<String>,
    column_names: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let problem = match cli.command {
        Command::List => {
            println!("Available games:");
            for (name, description) in CATALOG {
                println!("  {:<12} {}", name, description);
            }
            return Ok(ExitCode::SUCCESS);
        }
        Command::Solve { file: Some(path) } => {
            let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
            let payoffs = read_matrix(file).with_context(|| format!("parsing {}", path.display()))?;
            unnamed(path.display().to_string(), payoffs)
        }
        Command::Solve { file: None } => {
            let payoffs = read_matrix(io::stdin().lock()).context("parsing stdin")?;
            unnamed("stdin".to_string(), payoffs)
        }
        Command::Game { name, params } => {
            let game = Game::lookup(&name, &params)?;
            Problem {
                title: game.name().to_string(),
                payoffs: game.payoffs()?,
                row_names: game.row_names(),
                column_names: game.column_names(),
            }
        }
    };

    let options = cli.options;
    let shift = match options.shift {
        Shift::Auto => auto_shift(&problem.payoffs),
        Shift::Fixed(c) => c,
    };
    let config = SolverConfig::default()
        .with_seed(options.seed)
        .with_max_iterations(options.max_iterations)
        .with_entering(options.rule)
        .with_trace(options.trace);
    log::info!(
        "solving {} ({}x{}) with shift {} and {} rule",
        problem.title,
        problem.payoffs.rows(),
        problem.payoffs.cols(),
        shift,
        options.rule
    );
    let report = solve(&problem.payoffs, shift, config.clone())
        .with_context(|| format!("solving {}", problem.title))?;

    if options.json {
        let doc = serde_json::json!({
            "game": problem.title,
            "shift": shift,
            "config": config,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_report(&problem, shift, &report);
    }

    Ok(if report.outcome.is_optimal() { ExitCode::SUCCESS } else { ExitCode::from(2) })
}

fn unnamed(title: String, payoffs: Matrix) -> Problem {
    let row_names = (1..=payoffs.rows()).map(|i| format!("row {}", i)).collect();
    let column_names = (1..=payoffs.cols()).map(|j| format!("col {}", j)).collect();
    Problem { title, payoffs, row_names, column_names }
}

fn print_report(problem: &Problem, shift: f64, report: &Report) {
    println!(
        "{} ({}x{}), shift {}",
        problem.title,
        problem.payoffs.rows(),
        problem.payoffs.cols(),
        shift
    );
    for step in &report.trace {
        print_step(step);
    }
    println!("Outcome: {} after {} pivots", report.outcome.label(), report.iterations);
    match &report.outcome {
        Outcome::Optimal(solution) => print_solution(problem, solution),
        Outcome::Unbounded { column } => {
            println!("Column {} is unbounded; try a larger --shift", column + 1)
        }
        Outcome::Infeasible => println!("Starting basis is infeasible"),
        Outcome::IterationLimit { .. } => {
            println!("Raise --max-iterations or use --rule bland")
        }
    }
}

fn names(vars: &[Variable]) -> String {
    vars.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

fn print_step(step: &PivotStep) {
    println!("Pivot: ({}, {})", step.pivot.row, step.pivot.column);
    println!("Iteration: {}", step.iteration);
    println!("  primal basic    [{}]", names(&step.labels.primal_basic));
    println!("  primal nonbasic [{}]", names(&step.labels.primal_nonbasic));
    println!("  dual basic      [{}]", names(&step.labels.dual_basic));
    println!("  dual nonbasic   [{}]", names(&step.labels.dual_nonbasic));
    print!("{}", step.tableau);
}

fn print_solution(problem: &Problem, solution: &Solution) {
    println!("Value: {:.6}", solution.value);
    println!("Row player:");
    for (i, (p, name)) in solution.row_strategy.iter().zip(&problem.row_names).enumerate() {
        println!("  p_{:<3} {:<24} {:.6}", i + 1, name, p);
    }
    println!("Column player:");
    for (j, (q, name)) in solution.column_strategy.iter().zip(&problem.column_names).enumerate() {
        println!("  q_{:<3} {:<24} {:.6}", j + 1, name, q);
    }
    let (rows, columns) = solution.support(SUPPORT_TOLERANCE);
    println!("Support: {} rows, {} columns", rows.len(), columns.len());
    println!(
        "Guarantees: row {:.6}, column {:.6}, exploitability {:.2e}",
        solution.row_guarantee,
        solution.column_guarantee,
        solution.exploitability()
    );
}
