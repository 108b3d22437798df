mod advent;
mod shared;

use argparse::{ArgumentParser, StoreOption};
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let mut day: Option<usize> = None;
    let mut input: Option<String> = None;
    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Advent of Code 2019, days 1-3");
        parser.refer(&mut day)
              .add_option(&["-d", "--day"], StoreOption,
                          "number of challenge to run");
        parser.refer(&mut input)
              .add_option(&["-i", "--input"], StoreOption,
                          "puzzle input file (default: input/dayNN.txt)");
        parser.parse_args_or_exit();
    }
    let day = match day {
        Some(day) => day,
        None => {
            eprintln!("--day is required");
            process::exit(2);
        },
    };
    let config = advent::Config { day, input: input.map(PathBuf::from) };
    if let Err(e) = advent::solve(&config) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
