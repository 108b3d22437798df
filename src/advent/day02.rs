use crate::advent::AdventSolver;
use crate::shared::intcode::{IntcodeError, Program, Simulator};
use anyhow::Error;
use std::ops::RangeInclusive;
use std::path::Path;

// Program layout for the gravity assist: inputs go to addresses 1 & 2, the
// output is read from address 0.
const OUTPUT_ADDR: isize = 0;
const NOUN_ADDR: isize = 1;
const VERB_ADDR: isize = 2;
const INPUT_RANGE: RangeInclusive<isize> = 0..=99;

const ALARM_NOUN: isize = 12;
const ALARM_VERB: isize = 2;
const TARGET_OUTPUT: isize = 19690720;

#[derive(Debug,thiserror::Error,PartialEq)]
pub enum DriverError {
    #[error("input {value} outside of 0..=99")]
    InvalidInput { value: isize },

    #[error("no noun/verb pair produces output {target}")]
    SearchExhausted { target: isize },

    #[error(transparent)]
    Intcode(#[from] IntcodeError),
}

#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Inputs {
    pub noun: isize,
    pub verb: isize,
}

impl Inputs {
    pub fn checksum(&self) -> isize {
        100 * self.noun + self.verb
    }
}

#[derive(Default)]
pub struct Solver;

impl AdventSolver for Solver {
    fn solve(&mut self, path: &Path) -> Result<(), Error> {
        let program = Program::from_path(path)?;

        println!("Output for 1202 input: {}",
                 Self::run(&program, ALARM_NOUN, ALARM_VERB)?);

        let found = Self::find_inputs(&program, TARGET_OUTPUT)?;
        println!("Inputs {} and {} produce output {} (checksum {}).",
                 found.noun, found.verb, TARGET_OUTPUT, found.checksum());
        Ok(())
    }
}

impl Solver {
    fn check_input(value: isize) -> Result<(), DriverError> {
        if INPUT_RANGE.contains(&value) {
            Ok(())
        } else {
            Err(DriverError::InvalidInput { value })
        }
    }

    // Run a copy of the given program with the specified input values,
    // returns output. The template itself is never modified.
    fn run(program: &Program, noun: isize,
           verb: isize) -> Result<isize, DriverError> {
        Self::check_input(noun)?;
        Self::check_input(verb)?;
        let mut sim = Simulator::with_program(program);
        sim.poke(NOUN_ADDR, noun)?;
        sim.poke(VERB_ADDR, verb)?;
        sim.run()?;
        Ok(sim.peek(OUTPUT_ADDR)?)
    }

    // Tries every noun/verb pair, noun-major, and returns the first one that
    // produces the target. A pair whose run fails is logged and skipped.
    fn find_inputs(program: &Program,
                   target: isize) -> Result<Inputs, DriverError> {
        let mut failed = 0;
        for noun in INPUT_RANGE {
            for verb in INPUT_RANGE {
                match Self::run(program, noun, verb) {
                    Ok(output) if output == target => {
                        log::info!("found noun={} verb={} after {} failed trials",
                                   noun, verb, failed);
                        return Ok(Inputs { noun, verb });
                    },
                    Ok(_) => {},
                    Err(e) => {
                        log::debug!("trial noun={} verb={} failed: {}",
                                    noun, verb, e);
                        failed += 1;
                    },
                }
            }
        }
        log::warn!("search exhausted, {} trials failed", failed);
        Err(DriverError::SearchExhausted { target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // out = mem[noun] + mem[verb]; the cells past the halt hold 1000 plus
    // their own address.
    fn adder() -> Program {
        let mut cells = vec![1, 0, 0, 0, 99];
        cells.extend((5..=104).map(|addr| 1000 + addr));
        Program::from(cells)
    }

    #[test]
    fn test_run_matches_direct_poke() {
        let program = Program::from_string(
            "1,0,0,3,1,1,2,3,1,3,4,3,1,5,0,3,2,1,10,19,99,0,0,0").unwrap();
        let mut sim = Simulator::with_program(&program);
        sim.poke(1, 12).unwrap();
        sim.poke(2, 2).unwrap();
        sim.run().unwrap();
        let direct = sim.peek(0).unwrap();
        assert_eq!(direct, Solver::run(&program, 12, 2).unwrap());
    }

    #[test]
    fn test_run_uses_copy() {
        let program = Program::from(vec![1, 0, 0, 0, 99]);
        assert_eq!(2, Solver::run(&program, 0, 0).unwrap());
        assert_eq!(198, Solver::run(&program, 4, 4).unwrap());
        assert_eq!(&[1, 0, 0, 0, 99], program.cells());
    }

    #[test]
    fn test_invalid_input() {
        let program = adder();
        let before = program.clone();
        assert_eq!(DriverError::InvalidInput { value: 100 },
                   Solver::run(&program, 100, 0).unwrap_err());
        assert_eq!(DriverError::InvalidInput { value: -1 },
                   Solver::run(&program, 0, -1).unwrap_err());
        assert!(before == program);
    }

    #[test]
    fn test_run_propagates_interpreter_error() {
        let program = Program::from(vec![1, 0, 0, 0, 3]);
        assert_eq!(
            DriverError::Intcode(IntcodeError::Decode { ip: 4, needed: 4, available: 1 }),
            Solver::run(&program, 0, 0).unwrap_err());
    }

    #[test]
    fn test_find_inputs_first_pair() {
        // Nouns 0 to 4 point into the code cells and can't reach 2100.
        let found = Solver::find_inputs(&adder(), 2100).unwrap();
        assert_eq!(Inputs { noun: 5, verb: 95 }, found);
        assert_eq!(595, found.checksum());
    }

    #[test]
    fn test_find_inputs_skips_failed_trials() {
        // Every verb >= 10 reads past the end. With noun = 2 the output is
        // verb + mem[verb], which first hits 14 at verb = 7.
        let program = Program::from(vec![1, 0, 0, 0, 99, 5, 6, 7, 8, 9]);
        let found = Solver::find_inputs(&program, 14).unwrap();
        assert_eq!(Inputs { noun: 2, verb: 7 }, found);
        assert_eq!(207, found.checksum());
    }

    #[test]
    fn test_search_exhausted() {
        assert_eq!(DriverError::SearchExhausted { target: -5 },
                   Solver::find_inputs(&adder(), -5).unwrap_err());
    }

    #[test]
    fn test_search_exhausted_when_every_trial_fails() {
        // Reads from addresses noun and verb beyond a 5-cell program fail for
        // most pairs and the rest never reach the target.
        let program = Program::from(vec![1, 0, 0, 0, 99]);
        assert_eq!(DriverError::SearchExhausted { target: 1_000_000 },
                   Solver::find_inputs(&program, 1_000_000).unwrap_err());
    }
}
