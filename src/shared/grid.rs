// Cartesian grid structures. x grows to the right, y grows upward.

#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    pub fn from_char(c: char) -> Option<Dir> {
        match c {
            'U' => Some(Dir::Up),
            'R' => Some(Dir::Right),
            'D' => Some(Dir::Down),
            'L' => Some(Dir::Left),
            _   => None,
        }
    }

    // Unit step (dx, dy) in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up    => (0, 1),
            Dir::Right => (1, 0),
            Dir::Down  => (0, -1),
            Dir::Left  => (-1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Dir::Left || self == Dir::Right
    }
}

#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

macro_rules! point {
    ($x:expr,$y:expr) => (
        Point::new($x, $y)
    )
}

impl Point {
    pub fn new(x: isize, y: isize) -> Self {
        Point { x, y }
    }

    pub fn origin() -> Self {
        point!(0, 0)
    }

    pub fn manhattan_distance(&self, other: &Point) -> usize {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as usize
    }

    // None if the new position doesn't fit in an isize.
    pub fn moved(&self, dir: Dir, amount: isize) -> Option<Point> {
        let (dx, dy) = dir.delta();
        let x = dx.checked_mul(amount)?.checked_add(self.x)?;
        let y = dy.checked_mul(amount)?.checked_add(self.y)?;
        Some(point!(x, y))
    }
}
