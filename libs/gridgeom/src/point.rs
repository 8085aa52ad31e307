//! 2-D integer points.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::contains::Contains;
use crate::dir::Dir;
use crate::segment::Segment;
use crate::translate::TranslateMut;

/// A location on an integer grid.
///
/// Any pair of coordinates is a valid point. Points display in their canonical
/// form, `(x,y)`:
///
/// ```
/// # use gridgeom::prelude::*;
/// assert_eq!(Point::new(3, -4).to_string(), "(3,-4)");
/// ```
#[derive(
    Debug, Copy, Clone, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: i64,
    /// The y-coordinate of the point.
    pub y: i64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0, 0));
    /// assert_eq!(origin, Point::default());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Gets the coordinate associated with direction `dir`.
    pub const fn coord(&self, dir: Dir) -> i64 {
        match dir {
            Dir::Horiz => self.x,
            Dir::Vert => self.y,
        }
    }

    /// Returns true if this point lies on the line from `p1` to `p2`.
    ///
    /// Either endpoint may be absent (`None`), in which case the point is not on
    /// the line. Otherwise this behaves like [`Point::is_on_segment`].
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let p = Point::new(0, 5);
    /// assert!(p.is_on_line(Point::new(0, 0), Point::new(0, 10)));
    /// assert!(!p.is_on_line(None, Point::new(0, 10)));
    /// assert!(!p.is_on_line(Some(Point::new(0, 0)), None));
    /// ```
    pub fn is_on_line(&self, p1: impl Into<Option<Point>>, p2: impl Into<Option<Point>>) -> bool {
        match (p1.into(), p2.into()) {
            (Some(p1), Some(p2)) => self.is_on_segment(p1, p2),
            _ => false,
        }
    }

    /// Returns true if this point lies on the closed, axis-aligned segment from `p1` to `p2`.
    ///
    /// Segments must be horizontal or vertical; no point lies on a diagonal segment,
    /// even if it is geometrically colinear. See [`Dir::between`] for how the
    /// segment's direction is determined.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let (p1, p2) = (Point::new(10, 10), Point::new(0, 10));
    /// assert!(Point::new(5, 10).is_on_segment(p1, p2));
    /// assert!(Point::new(0, 10).is_on_segment(p1, p2));
    /// assert!(!Point::new(11, 10).is_on_segment(p1, p2));
    ///
    /// // Diagonals contain nothing.
    /// assert!(!Point::new(1, 1).is_on_segment(Point::new(0, 0), Point::new(2, 2)));
    /// ```
    pub fn is_on_segment(&self, p1: Point, p2: Point) -> bool {
        Segment::from_endpoints(p1, p2).is_some_and(|segment| segment.encloses(self))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl TranslateMut for Point {
    fn translate_mut(&mut self, p: Point) {
        self.x += p.x;
        self.y += p.y;
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign<Point> for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign<Point> for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl From<(i64, i64)> for Point {
    fn from(value: (i64, i64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    use test_log::test;

    use super::*;

    fn hash_of(p: &Point) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn not_on_line() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 10);
        assert!(!Point::new(5, 5).is_on_line(p1, p2));
        assert!(!Point::new(0, 15).is_on_line(p1, p2));
        assert!(!Point::new(0, -1).is_on_line(p1, p2));
    }

    #[test]
    fn on_line_along_y_axis() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 10);
        assert!(Point::new(0, 5).is_on_line(p1, p2));
        assert!(Point::new(0, 0).is_on_line(p1, p2));
        assert!(Point::new(0, 10).is_on_line(p2, p1));
    }

    #[test]
    fn on_line_along_x_axis() {
        let p1 = Point::new(0, 10);
        let p2 = Point::new(10, 10);
        assert!(Point::new(5, 10).is_on_line(p1, p2));
        assert!(Point::new(5, 10).is_on_line(p2, p1));
        assert!(!Point::new(5, 11).is_on_line(p1, p2));
    }

    #[test]
    fn absent_endpoints_are_never_on_line() {
        let p = Point::new(1, 1);
        assert!(!p.is_on_line(None, None));
        assert!(!p.is_on_line(None, Point::new(1, 1)));
        assert!(!p.is_on_line(Point::new(1, 1), None));
    }

    #[test]
    fn diagonal_lines_contain_nothing() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(10, 10);
        assert!(!Point::new(5, 5).is_on_line(p1, p2));
        assert!(!p1.is_on_line(p1, p2));
        assert!(!p2.is_on_line(p1, p2));
    }

    #[test]
    fn degenerate_line_contains_only_its_point() {
        let p = Point::new(4, -2);
        assert!(p.is_on_line(p, p));
        assert!(!Point::new(4, -1).is_on_line(p, p));
        assert!(!Point::new(5, -2).is_on_line(p, p));
    }

    #[test]
    fn canonical_form() {
        assert_eq!(Point::default().to_string(), "(0,0)");
        assert_eq!(Point::new(-12, 340).to_string(), "(-12,340)");
    }

    #[test]
    fn equal_points_hash_equally() {
        let a = Point::new(7, 9);
        let b = Point::from((7, 9));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let set: HashSet<Point> = [a, b, Point::new(9, 7)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn coordinates_are_mutable() {
        let mut p = Point::zero();
        p.x = 3;
        p.y = -8;
        assert_eq!(p, Point::new(3, -8));
        p += Point::new(1, 1);
        assert_eq!(p, Point::new(4, -7));
        p -= Point::new(4, -7);
        assert_eq!(p, Point::zero());
        assert_eq!(Point::new(1, 2) + Point::new(3, 4) - Point::new(1, 1), Point::new(3, 5));
    }
}
