use crate::advent::AdventSolver;
use crate::shared::input;
use anyhow::{format_err, Error};
use std::iter::successors;
use std::path::Path;

#[derive(Default)]
pub struct Solver;

impl AdventSolver for Solver {
    fn solve(&mut self, path: &Path) -> Result<(), Error> {
        let masses: Vec<u64> =
            input::parse_whitespace_separated(&input::read_file(path)?)?;
        log::debug!("read {} module masses", masses.len());

        println!("Total fuel estimate (part 1): {}",
                 Self::total(&masses, Self::fuel_for_mass)?);
        println!("Total fuel estimate (part 2): {}",
                 Self::total(&masses, Self::fuel_for_module)?);
        Ok(())
    }
}

impl Solver {
    fn total<F>(masses: &[u64], fuel: F) -> Result<u64, Error>
        where F: Fn(u64) -> u64
    {
        masses.iter()
              .try_fold(0u64, |sum, &m| sum.checked_add(fuel(m)))
              .ok_or_else(|| format_err!("total fuel overflows a u64"))
    }

    // Floors at zero instead of going negative.
    fn fuel_for_mass(mass: u64) -> u64 {
        (mass / 3).saturating_sub(2)
    }

    // Fuel for the module plus the fuel needed to carry that fuel, and so on.
    fn fuel_for_module(mass: u64) -> u64 {
        successors(Some(Self::fuel_for_mass(mass)), |&fuel| {
            Some(Self::fuel_for_mass(fuel)).filter(|&f| f > 0)
        })
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;

    #[test]
    fn test_fuel_for_mass() {
        assert_eq!(2, Solver::fuel_for_mass(12));
        assert_eq!(2, Solver::fuel_for_mass(14));
        assert_eq!(654, Solver::fuel_for_mass(1969));
        assert_eq!(33583, Solver::fuel_for_mass(100756));
    }

    #[test]
    fn test_fuel_for_mass_never_negative() {
        assert_eq!(0, Solver::fuel_for_mass(0));
        assert_eq!(0, Solver::fuel_for_mass(6));
        assert_eq!(0, Solver::fuel_for_mass(8));
        assert_eq!(1, Solver::fuel_for_mass(9));
    }

    #[test]
    fn test_fuel_for_module() {
        assert_eq!(2, Solver::fuel_for_module(14));
        assert_eq!(966, Solver::fuel_for_module(1969));
        assert_eq!(50346, Solver::fuel_for_module(100756));
        assert_eq!(0, Solver::fuel_for_module(2));
    }

    #[test]
    fn test_total() {
        assert_eq!(34241, Solver::total(&[12, 14, 1969, 100756],
                                        Solver::fuel_for_mass).unwrap());
        assert_eq!(0, Solver::total(&[], Solver::fuel_for_module).unwrap());
    }

    #[test]
    fn test_total_overflow() {
        let huge = u64::max_value();
        assert!(Solver::total(&[huge, huge, huge, huge],
                              Solver::fuel_for_mass).is_err());
    }
}
