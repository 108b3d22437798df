pub mod grid;
pub mod input;
pub mod intcode;
