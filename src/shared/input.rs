// Reading and splitting puzzle input files.

use anyhow::{Context, Error};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("failed to read input {}", path.display()))
}

fn parse_each<'a, T, I>(tokens: I) -> Result<Vec<T>, Error>
    where T: FromStr,
          T::Err: Display,
          I: Iterator<Item = &'a str>
{
    tokens.map(|s| {
              s.trim().parse::<T>()
               .map_err(|e| anyhow::format_err!("invalid value {:?}: {}", s, e))
          })
          .collect()
}

// "1,2,3\n" -> [1, 2, 3]
pub fn parse_comma_separated<T>(text: &str) -> Result<Vec<T>, Error>
    where T: FromStr, T::Err: Display
{
    parse_each(text.trim().split(','))
}

pub fn parse_whitespace_separated<T>(text: &str) -> Result<Vec<T>, Error>
    where T: FromStr, T::Err: Display
{
    parse_each(text.split_whitespace())
}

pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect()
}
