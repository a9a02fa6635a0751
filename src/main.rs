// vim: set ai et ts=4 sts=4 sw=4:
#[macro_use]
extern crate clap;
use std::io;
use std::path::Path;
use std::process;
use std::time::Duration;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info, LevelFilter};

use nonolabel::{catalog, picture};
use nonolabel::brute::placement_grid;
use nonolabel::clues::format_clue_list;
use nonolabel::util::is_a_tty;
use nonolabel::{Deadline, Error, Grid, Limits, Puzzle, Solver};

fn build_cli() -> App<'static, 'static> {
    let file_arg = || Arg::with_name("FILE")
                          .help("catalog of literal clue lists, or a .yaml puzzle")
                          .required(true)
                          .index(1);

    App::new("nonolabel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Label-propagation nonogram solver")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("more logging on stderr (repeat for debug/trace)"))
        .arg(Arg::with_name("max-rounds")
                 .long("max-rounds")
                 .takes_value(true)
                 .value_name("N")
                 .help("puzzle-level propagation rounds before giving up"))
        .arg(Arg::with_name("timeout")
                 .long("timeout")
                 .takes_value(true)
                 .value_name("SECONDS")
                 .help("time budget for every deadline-guarded operation"))
        .subcommand(SubCommand::with_name("solve")
                        .about("propagate each puzzle and print the board")
                        .arg(file_arg()))
        .subcommand(SubCommand::with_name("full")
                        .about("solve, forcing a hint square when propagation alone is not enough")
                        .arg(file_arg()))
        .subcommand(SubCommand::with_name("check")
                        .about("report whether propagation alone solves each puzzle")
                        .arg(file_arg()))
        .subcommand(SubCommand::with_name("hint")
                        .about("find a square that makes each puzzle uniquely solvable")
                        .arg(file_arg()))
        .subcommand(SubCommand::with_name("brute")
                        .about("enumerate every filling that matches the clues")
                        .arg(file_arg()))
        .subcommand(SubCommand::with_name("classify")
                        .about("sort puzzles into unique, non-unique and hard")
                        .arg(file_arg())
                        .arg(Arg::with_name("save")
                                 .long("save")
                                 .takes_value(true)
                                 .value_name("DIR")
                                 .help("write unique.txt, non_unique.txt and hard.txt into DIR")))
        .subcommand(SubCommand::with_name("picture")
                        .about("turn an image into clues")
                        .arg(Arg::with_name("IMAGE").required(true).index(1))
                        .arg(Arg::with_name("rows").long("rows").takes_value(true).required(true))
                        .arg(Arg::with_name("cols").long("cols").takes_value(true).required(true)))
}

fn setup_logger(verbosity: u64) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

fn limits_from(matches: &ArgMatches) -> Limits {
    let mut limits = Limits::default();
    if matches.is_present("max-rounds") {
        let n = clap::value_t!(matches, "max-rounds", usize).unwrap_or_else(|e| e.exit());
        limits = limits.with_max_rounds(n);
    }
    if matches.is_present("timeout") {
        let secs = clap::value_t!(matches, "timeout", u64).unwrap_or_else(|e| e.exit());
        limits = limits.with_timeout(Duration::from_secs(secs));
    }
    limits
}

fn print_grid(grid: &Grid, emit_color: bool) {
    for line in grid.render_colored(emit_color) {
        println!("|{}|", line);
    }
}

fn load(matches: &ArgMatches) -> Result<Vec<Puzzle>, Error> {
    // FILE is required by every subcommand that calls this
    let path = matches.value_of("FILE").unwrap_or_default();
    let puzzles = catalog::load_file(path)?;
    info!("loaded {} puzzle(s) from {}", puzzles.len(), path);
    Ok(puzzles)
}

fn run(matches: &ArgMatches, solver: &Solver, emit_color: bool) -> Result<(), Error> {
    match matches.subcommand() {
        ("solve", Some(sub)) => {
            for (i, mut puzzle) in load(sub)?.into_iter().enumerate() {
                let outcome = puzzle.solve_before(solver.limits.max_rounds, &Deadline::never("solve"))?;
                println!("puzzle {}: {} round(s){}", i+1, outcome.rounds,
                         if outcome.converged { "" } else { ", round cap reached" });
                println!("{}", puzzle);
            }
        },
        ("full", Some(sub)) => {
            for (i, puzzle) in load(sub)?.iter().enumerate() {
                let (matrix, hint) = solver.full_solve(puzzle.row_clues(), puzzle.col_clues())?;
                println!("puzzle {}: {}", i+1, hint);
                print_grid(&Grid::from_matrix(&matrix)?, emit_color);
                println!();
            }
        },
        ("check", Some(sub)) => {
            for (i, puzzle) in load(sub)?.iter().enumerate() {
                let verdict = match solver.check_uniqueness(puzzle.row_clues(), puzzle.col_clues()) {
                    Ok(true)                     => String::from("unique"),
                    Ok(false)                    => String::from("not unique"),
                    Err(ref e) if e.is_timeout() => e.to_string(),
                    Err(e)                       => return Err(e),
                };
                println!("puzzle {}: {}", i+1, verdict);
            }
        },
        ("hint", Some(sub)) => {
            for (i, puzzle) in load(sub)?.iter().enumerate() {
                let hint = solver.uniquisation(puzzle.row_clues(), puzzle.col_clues())?;
                let (row, col) = hint.as_pair();
                println!("puzzle {}: ({}, {}) {}", i+1, row, col, hint);
            }
        },
        ("brute", Some(sub)) => {
            for (i, puzzle) in load(sub)?.iter().enumerate() {
                let solutions = solver.brute_force(puzzle)?;
                println!("puzzle {}: {} solution(s)", i+1, solutions.len());
                for placement in &solutions {
                    print_grid(&placement_grid(puzzle.width(), puzzle.height(), placement), emit_color);
                    println!();
                }
            }
        },
        ("classify", Some(sub)) => {
            let found = catalog::classify(load(sub)?, solver)?;
            println!("unique: {}, non-unique: {}, hard: {}",
                     found.unique.len(), found.non_unique.len(), found.hard.len());
            if let Some(dir) = sub.value_of("save") {
                let dir = Path::new(dir);
                catalog::save_file(dir.join("unique.txt"), &found.unique)?;
                catalog::save_file(dir.join("non_unique.txt"), &found.non_unique)?;
                catalog::save_file(dir.join("hard.txt"), &found.hard)?;
            }
        },
        ("picture", Some(sub)) => {
            let rows = clap::value_t!(sub, "rows", u32).unwrap_or_else(|e| e.exit());
            let cols = clap::value_t!(sub, "cols", u32).unwrap_or_else(|e| e.exit());
            let path = sub.value_of("IMAGE").unwrap_or_default();
            let (row_clues, col_clues) = picture::import_picture(path, rows, cols,
                                                                 &solver.limits.picture_deadline())?;
            println!("{}", format_clue_list(&row_clues));
            println!("{}", format_clue_list(&col_clues));
        },
        _ => unreachable!(),
    }
    Ok(())
}

fn main() {
    let matches = build_cli().get_matches();
    if let Err(e) = setup_logger(matches.occurrences_of("verbose")) {
        eprintln!("failed to set up logging: {}", e);
        process::exit(2);
    }
    let solver = Solver::new(limits_from(&matches));
    let emit_color = is_a_tty(io::stdout());

    if let Err(e) = run(&matches, &solver, emit_color) {
        error!("{}", e);
        process::exit(1);
    }
}
