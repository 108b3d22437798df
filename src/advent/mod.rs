mod day01;
mod day02;
mod day03;

use anyhow::{format_err, Error};
use std::path::{Path, PathBuf};

pub trait AdventSolver {
    fn solve(&mut self, path: &Path) -> Result<(), Error>;
}

// Options chosen on the command line.
pub struct Config {
    pub day: usize,
    pub input: Option<PathBuf>,
}

impl Config {
    // Without an explicit input, day N reads input/dayNN.txt.
    pub fn input_path(&self) -> PathBuf {
        match self.input {
            Some(ref path) => path.clone(),
            None => PathBuf::from(format!("input/day{:02}.txt", self.day)),
        }
    }
}

fn solver_for(day: usize) -> Option<Box<dyn AdventSolver>> {
    match day {
        1 => Some(Box::new(day01::Solver::default())),
        2 => Some(Box::new(day02::Solver::default())),
        3 => Some(Box::new(day03::Solver::default())),
        _ => None,
    }
}

pub fn solve(config: &Config) -> Result<(), Error> {
    let mut solver = solver_for(config.day)
        .ok_or_else(|| format_err!("no solver for day {}", config.day))?;
    let path = config.input_path();
    log::info!("solving day {} with input {}", config.day, path.display());
    solver.solve(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_path() {
        let config = Config { day: 2, input: None };
        assert_eq!(PathBuf::from("input/day02.txt"), config.input_path());
    }

    #[test]
    fn test_explicit_input_path() {
        let config = Config { day: 3, input: Some(PathBuf::from("wires.txt")) };
        assert_eq!(PathBuf::from("wires.txt"), config.input_path());
    }

    #[test]
    fn test_unknown_day() {
        let config = Config { day: 26, input: None };
        assert!(solve(&config).is_err());
    }

    #[test]
    fn test_missing_input() {
        let config = Config {
            day: 1,
            input: Some(PathBuf::from("does/not/exist.txt")),
        };
        assert!(solve(&config).is_err());
    }
}
