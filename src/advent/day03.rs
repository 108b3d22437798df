use crate::advent::AdventSolver;
use crate::shared::grid::{Dir, Point};
use crate::shared::input;
use anyhow::{format_err, Error};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::{max, min};
use std::ops::RangeInclusive;
use std::path::Path;

lazy_static! {
    static ref MOVE_REGEX: Regex =
        Regex::new(r"^(?P<dir>[UDLR])(?P<amount>\d+)$").unwrap();
}

// One straight run of a wire. `steps` is how far the wire has already
// travelled when it reaches `start`.
#[derive(Clone,Copy,Debug,PartialEq)]
struct Segment {
    start: Point,
    end: Point,
    dir: Dir,
    steps: usize,
}

fn span(a: isize, b: isize) -> RangeInclusive<isize> {
    min(a, b)..=max(a, b)
}

impl Segment {
    fn xs(&self) -> RangeInclusive<isize> {
        span(self.start.x, self.end.x)
    }

    fn ys(&self) -> RangeInclusive<isize> {
        span(self.start.y, self.end.y)
    }

    fn steps_to(&self, point: Point) -> usize {
        self.steps + self.start.manhattan_distance(&point)
    }

    // Every lattice point shared by the two segments.
    fn crossings(&self, other: &Segment) -> Vec<Point> {
        match (self.dir.is_horizontal(), other.dir.is_horizontal()) {
            (true, false) => Self::perpendicular(self, other),
            (false, true) => Self::perpendicular(other, self),
            (true, true) if self.start.y == other.start.y => {
                let (lo, hi) = Self::overlap(self.xs(), other.xs());
                (lo..=hi).map(|x| Point::new(x, self.start.y)).collect()
            },
            (false, false) if self.start.x == other.start.x => {
                let (lo, hi) = Self::overlap(self.ys(), other.ys());
                (lo..=hi).map(|y| Point::new(self.start.x, y)).collect()
            },
            _ => Vec::new(),
        }
    }

    fn perpendicular(horz: &Segment, vert: &Segment) -> Vec<Point> {
        if horz.xs().contains(&vert.start.x) && vert.ys().contains(&horz.start.y) {
            vec![Point::new(vert.start.x, horz.start.y)]
        } else {
            Vec::new()
        }
    }

    // An empty overlap comes back with lo > hi.
    fn overlap(a: RangeInclusive<isize>,
               b: RangeInclusive<isize>) -> (isize, isize) {
        (max(*a.start(), *b.start()), min(*a.end(), *b.end()))
    }
}

#[derive(Clone,Copy,Debug,PartialEq)]
struct Crossing {
    point: Point,
    steps: usize,
}

#[derive(Default)]
pub struct Solver;

impl AdventSolver for Solver {
    fn solve(&mut self, path: &Path) -> Result<(), Error> {
        let text = input::read_file(path)?;
        let lines = input::non_empty_lines(&text);
        if lines.len() != 2 {
            return Err(format_err!("expected 2 wires, found {}", lines.len()));
        }
        let wire1 = Self::parse_wire(lines[0])?;
        let wire2 = Self::parse_wire(lines[1])?;
        let crossings = Self::crossings(&wire1, &wire2);
        log::debug!("{} crossings between wires of {} and {} segments",
                    crossings.len(), wire1.len(), wire2.len());

        // Part 1
        match Self::closest_distance(&crossings) {
            Some(dist) => println!("Closest intersection distance: {}", dist),
            None => println!("No intersections found."),
        }

        // Part 2
        match Self::fewest_steps(&crossings) {
            Some(steps) => println!("Minimum steps to an intersection: {}", steps),
            None => println!("No intersections found."),
        }
        Ok(())
    }
}

impl Solver {
    fn parse_wire(text: &str) -> Result<Vec<Segment>, Error> {
        let mut segments = Vec::new();
        let mut pos = Point::origin();
        let mut steps: isize = 0;
        for token in text.trim().split(',') {
            let caps = MOVE_REGEX.captures(token)
                .ok_or_else(|| format_err!("Invalid wire move: {:?}", token))?;
            let dir = caps["dir"].chars().next()
                .and_then(Dir::from_char)
                .ok_or_else(|| format_err!("Invalid direction: {}", token))?;
            let amount = caps["amount"].parse::<isize>()?;
            // The step total bounds every coordinate and distance.
            let total = steps.checked_add(amount)
                .ok_or_else(|| format_err!("wire move overflows: {:?}", token))?;
            let end = pos.moved(dir, amount)
                .ok_or_else(|| format_err!("wire move overflows: {:?}", token))?;
            segments.push(Segment { start: pos, end, dir, steps: steps as usize });
            steps = total;
            pos = end;
        }
        Ok(segments)
    }

    // Crossings between the two wires, not counting the shared origin.
    fn crossings(wire1: &[Segment], wire2: &[Segment]) -> Vec<Crossing> {
        let mut result = Vec::new();
        for a in wire1 {
            for b in wire2 {
                for point in a.crossings(b) {
                    if point == Point::origin() {
                        continue;
                    }
                    result.push(Crossing {
                        point,
                        steps: a.steps_to(point) + b.steps_to(point),
                    });
                }
            }
        }
        result
    }

    fn closest_distance(crossings: &[Crossing]) -> Option<usize> {
        crossings.iter()
                 .map(|c| c.point.manhattan_distance(&Point::origin()))
                 .min()
    }

    fn fewest_steps(crossings: &[Crossing]) -> Option<usize> {
        crossings.iter().map(|c| c.steps).min()
    }
}
