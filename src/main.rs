use std::io::{self, Read};
use std::process;

use clap::{App, AppSettings, Arg, ErrorKind};

use sokosolver::config::{Heuristic, RelaxPolicy};
use sokosolver::level::Level;
use sokosolver::parser;
use sokosolver::Solve;

fn main() {
    env_logger::init();

    let app = App::new("sokosolver")
        .about("Simple Sokoban puzzle solver\nPuzzle is read from stdin")
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("silent")
                .long("silent")
                .help("Don't print intermediary states"),
        )
        .arg(
            Arg::with_name("reinsert")
                .long("reinsert")
                .help("Re-insert cost-relaxed states into the frontier (corrected relaxation)"),
        )
        .arg(
            Arg::with_name("heuristic")
                .possible_values(&Heuristic::NAMES)
                .default_value("fixed_penalty")
                .help("Heuristic algorithm"),
        );

    // --help and bad arguments both exit with status 1
    let matches = app.get_matches_safe().unwrap_or_else(|err| {
        if err.kind == ErrorKind::HelpDisplayed {
            println!("{}", err.message);
        } else {
            eprintln!("{}", err.message);
        }
        process::exit(1);
    });

    let silent = matches.is_present("silent");
    let relax = if matches.is_present("reinsert") {
        RelaxPolicy::Reinsert
    } else {
        RelaxPolicy::InPlace
    };
    // possible_values already rejected anything unknown
    let heuristic: Heuristic = matches.value_of("heuristic").unwrap().parse().unwrap();

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("Can't read puzzle from stdin: {}", err);
        process::exit(1);
    }

    let level: Level = parser::parse(&input).unwrap_or_else(|err| {
        eprintln!("Failed to parse: {}", err);
        process::exit(1);
    });

    let solver_ok = level.solve(heuristic, relax, !silent).unwrap_or_else(|err| {
        eprintln!("Can't solve level: {}", err);
        process::exit(1);
    });

    if !silent {
        print!("{}", solver_ok.stats);
    }

    match solver_ok.moves {
        Some(moves) => {
            let end = level.replay(&moves);
            print!("{}", level.map.format_with_state(&end));
            println!("{}", moves);
        }
        None => {
            eprintln!("No solution");
            process::exit(1);
        }
    }
}
