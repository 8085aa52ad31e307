//! Axis-aligned directions: horizontal or vertical.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An enumeration of axis-aligned directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Dir {
    /// The horizontal, or x-aligned, direction.
    Horiz,
    /// The vertical, or y-aligned, direction.
    Vert,
}

impl Dir {
    /// Returns the direction of the line running from `p1` to `p2`.
    ///
    /// Points sharing a y-coordinate are horizontal; otherwise points sharing an
    /// x-coordinate are vertical. Coincident points satisfy both tests and are
    /// reported as [`Dir::Horiz`]. Diagonal lines have no direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert_eq!(Dir::between(Point::new(0, 3), Point::new(8, 3)), Some(Dir::Horiz));
    /// assert_eq!(Dir::between(Point::new(2, 0), Point::new(2, 9)), Some(Dir::Vert));
    /// assert_eq!(Dir::between(Point::new(4, 4), Point::new(4, 4)), Some(Dir::Horiz));
    /// assert_eq!(Dir::between(Point::new(0, 0), Point::new(5, 5)), None);
    /// ```
    pub fn between(p1: Point, p2: Point) -> Option<Self> {
        if p1.y == p2.y {
            Some(Self::Horiz)
        } else if p1.x == p2.x {
            Some(Self::Vert)
        } else {
            None
        }
    }

    /// Returns the other direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert_eq!(Dir::Vert.other(), Dir::Horiz);
    /// assert_eq!(Dir::Horiz.other(), Dir::Vert);
    /// ```
    pub const fn other(&self) -> Self {
        match *self {
            Self::Horiz => Self::Vert,
            Self::Vert => Self::Horiz,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Horiz => write!(f, "horizontal"),
            Self::Vert => write!(f, "vertical"),
        }
    }
}

impl std::ops::Not for Dir {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.other()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn direction_between_points() {
        let p = Point::new(-3, 7);
        assert_eq!(Dir::between(p, Point::new(12, 7)), Some(Dir::Horiz));
        assert_eq!(Dir::between(Point::new(12, 7), p), Some(Dir::Horiz));
        assert_eq!(Dir::between(p, Point::new(-3, -20)), Some(Dir::Vert));
        assert_eq!(Dir::between(p, p), Some(Dir::Horiz));
        assert_eq!(Dir::between(p, Point::new(0, 0)), None);
    }

    #[test]
    fn dirs_display_and_negate() {
        assert_eq!(Dir::Horiz.to_string(), "horizontal");
        assert_eq!(!Dir::Vert, Dir::Horiz);
        assert_eq!(!!Dir::Vert, Dir::Vert);
    }
}
