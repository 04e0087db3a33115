use clap::{value_t, App, Arg};

use anyhow::Error;

use puzzlet::{Board, HeuristicKind, Path, PuzzleError, SearchOptions, Searcher};

fn main() {
    match driver() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn driver() -> Result<(), Error> {
    let matches = App::new("puzzlet")
        .version("1.0")
        .about("Solve the 8-puzzle with A* search")
        .arg(
            Arg::with_name("board")
                .value_name("BOARD")
                .help("Nine digits 0-8 in row order, 0 for the blank, e.g. '1 2 3 4 0 5 6 7 8' or 123405678")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .short("H")
                .value_name("NAME")
                .help("Estimator driving the search: hamming or manhattan")
                .default_value("manhattan")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("N")
                .help("Give up after N board expansions")
                .required(false)
                .takes_value(true),
        )
        .get_matches();

    let start: Board = match matches.value_of("board") {
        Some(text) => text.parse()?,
        None => Board::new([[1, 2, 3], [4, 0, 5], [6, 7, 8]])?,
    };
    let goal = Board::goal();

    let heuristic = value_t!(matches, "heuristic", HeuristicKind)?;
    let options = SearchOptions {
        step_limit: if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        },
    };

    println!("start ({} heuristic):", heuristic);
    println!("{}", start);

    if !start.is_solvable() {
        println!("no solution: board is not in the goal's parity class");
        return Ok(());
    }

    let outcome = Searcher::new(start, goal, heuristic.function())
        .with_options(options)
        .run();

    match outcome {
        Ok(tables) => {
            let path = Path::reconstruct(&tables, goal)?;
            println!("{}", path);
            let slides: Vec<String> = path.slides().iter().map(|s| s.to_string()).collect();
            println!("moves: {}", slides.join(" "));
            println!(
                "solved in {} moves, {} boards discovered",
                path.moves(),
                tables.discovered()
            );
            Ok(())
        }
        Err(PuzzleError::NoSolution) => {
            println!("no solution: search space exhausted");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
