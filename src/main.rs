// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]

use std::process;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use pointer_solver::config::{Method, SearchLimits};
use pointer_solver::{replay, PointerPuzzle, Problem, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("pointer-solver")
        .author("martin-t")
        .version("0.1")
        .about("Aligns all pointers on a grid using A* search")
        .arg(
            Arg::with_name("state")
                .short("s")
                .long("state")
                .takes_value(true)
                .value_name("R,C,P...")
                .help("initial state: agent row, agent col, then pointers row by row (0-3)"),
        )
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .takes_value(true)
                .default_value("2")
                .help("number of grid rows"),
        )
        .arg(
            Arg::with_name("cols")
                .long("cols")
                .takes_value(true)
                .default_value("2")
                .help("number of grid columns"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("0")
                .help("seed for the random initial state (ignored with --state)"),
        )
        .arg(
            Arg::with_name("uninformed")
                .short("u")
                .long("uninformed")
                .help("search without the heuristic (uniform-cost)"),
        )
        .arg(
            Arg::with_name("max-expanded")
                .long("max-expanded")
                .takes_value(true)
                .help("give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print search progress and stats"),
        )
        .get_matches();

    let rows: u8 = parse_arg(&matches, "rows");
    let cols: u8 = parse_arg(&matches, "cols");

    let puzzle = match matches.value_of("state") {
        Some(state) => PointerPuzzle::parse_grid(state, rows, cols).unwrap_or_else(|err| {
            eprintln!("Failed to parse state: {}", err);
            process::exit(1);
        }),
        None => {
            let seed: u64 = parse_arg(&matches, "seed");
            debug!("Generating random puzzle with seed {}", seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            PointerPuzzle::random(rows, cols, &mut rng).unwrap_or_else(|err| {
                eprintln!("Can't create puzzle: {}", err);
                process::exit(1);
            })
        }
    };

    let method = if matches.is_present("uninformed") {
        Method::Uninformed
    } else {
        Method::AStar
    };
    let limits = match matches.value_of("max-expanded") {
        Some(_) => SearchLimits::max_expanded(parse_arg(&matches, "max-expanded")),
        None => SearchLimits::unlimited(),
    };
    let quiet = matches.is_present("quiet");

    println!("Initial state:");
    print!("{}", puzzle);
    println!("Solving using {}...", method);

    let outcome = puzzle.solve(method, limits, !quiet);
    if !quiet {
        println!("{}", outcome.stats);
    }

    let plan = match outcome.plan() {
        Some(plan) => plan,
        None => {
            if let Err(err) = outcome.result {
                println!("No solution: {}", err);
            }
            return;
        }
    };

    println!("Found solution!");
    println!("Actions: {}", plan);
    println!("Steps: {}", plan.len());
    println!();
    println!("Executing...");

    let states = replay(&puzzle, plan.as_slice());
    for (action, state) in plan.iter().zip(&states[1..]) {
        println!("Action: {}", action);
        print!("{}", puzzle.format(state));
    }

    match states.last() {
        Some(last) if puzzle.is_goal(last) => println!("Goal reached!"),
        _ => println!("Goal not reached."),
    }
}

fn parse_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &str) -> T {
    let value = matches.value_of(name).unwrap_or_default();
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for --{}: '{}'", name, value);
        process::exit(1);
    })
}
