//! Closed, axis-aligned line segments.
//!
//! Segments back both [`Point::is_on_segment`] and the edges of a
//! [`Rect`](crate::rect::Rect).

use serde::{Deserialize, Serialize};

use crate::contains::{Containment, Contains};
use crate::dir::Dir;
use crate::point::Point;
use crate::span::Span;
use crate::translate::TranslateMut;

/// A horizontal or vertical line segment, including both endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Segment {
    /// The direction in which the segment runs.
    dir: Dir,
    /// The fixed coordinate of the segment.
    coord: i64,
    /// The coordinates covered along `dir`.
    span: Span,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// // The horizontal segment from (2, 7) to (9, 7).
    /// let segment = Segment::new(Dir::Horiz, 7, Span::new(2, 9));
    /// assert_eq!(segment.endpoints(), (Point::new(2, 7), Point::new(9, 7)));
    /// ```
    pub fn new(dir: Dir, coord: i64, span: Span) -> Self {
        Self { dir, coord, span }
    }

    /// Creates the segment running between two points.
    ///
    /// Returns [`None`] if the points do not share an x or y coordinate.
    /// Coincident points produce a single-point horizontal segment.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let segment = Segment::from_endpoints(Point::new(4, 10), Point::new(4, 0)).unwrap();
    /// assert_eq!(segment.dir(), Dir::Vert);
    /// assert_eq!(segment.coord(), 4);
    /// assert_eq!(segment.span(), Span::new(0, 10));
    ///
    /// assert_eq!(Segment::from_endpoints(Point::new(0, 0), Point::new(1, 1)), None);
    /// ```
    pub fn from_endpoints(p1: Point, p2: Point) -> Option<Self> {
        let dir = Dir::between(p1, p2)?;
        Some(Self::new(
            dir,
            p1.coord(!dir),
            Span::new(p1.coord(dir), p2.coord(dir)),
        ))
    }

    /// The direction in which the segment runs.
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// The fixed coordinate of the segment.
    ///
    /// For horizontal segments, this is the y-coordinate shared by every point.
    /// For vertical segments, this is the shared x-coordinate.
    pub fn coord(&self) -> i64 {
        self.coord
    }

    /// The range of coordinates covered along the segment's direction.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the endpoints of the segment, lowest coordinate first.
    pub fn endpoints(&self) -> (Point, Point) {
        let point = |along: i64| match self.dir {
            Dir::Horiz => Point::new(along, self.coord),
            Dir::Vert => Point::new(self.coord, along),
        };
        (point(self.span.start()), point(self.span.stop()))
    }

    /// Returns true if the two segments share at least one point.
    ///
    /// The segments touch if an endpoint of either segment lies on the other.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let a = Segment::new(Dir::Vert, 10, Span::new(0, 10));
    /// let b = Segment::new(Dir::Vert, 10, Span::new(3, 6));
    /// let c = Segment::new(Dir::Vert, 10, Span::new(11, 20));
    /// assert!(a.touches(&b));
    /// assert!(b.touches(&a));
    /// assert!(!a.touches(&c));
    /// ```
    pub fn touches(&self, other: &Segment) -> bool {
        let (a0, a1) = self.endpoints();
        let (b0, b1) = other.endpoints();
        b0.is_on_segment(a0, a1)
            || b1.is_on_segment(a0, a1)
            || a0.is_on_segment(b0, b1)
            || a1.is_on_segment(b0, b1)
    }
}

impl Contains<Point> for Segment {
    fn contains(&self, other: &Point) -> Containment {
        if other.coord(!self.dir) == self.coord {
            self.span.contains(&other.coord(self.dir))
        } else {
            Containment::None
        }
    }
}

impl TranslateMut for Segment {
    fn translate_mut(&mut self, p: Point) {
        self.coord += p.coord(!self.dir);
        self.span = self.span.translate(p.coord(self.dir));
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::translate::Translate;

    #[test]
    fn horizontal_takes_precedence_for_single_points() {
        let p = Point::new(3, 3);
        let segment = Segment::from_endpoints(p, p).unwrap();
        assert_eq!(segment.dir(), Dir::Horiz);
        assert_eq!(segment.endpoints(), (p, p));
        assert!(segment.encloses(&p));
        assert!(!segment.encloses(&Point::new(3, 4)));
    }

    #[test]
    fn segments_contain_their_endpoints() {
        let segment = Segment::from_endpoints(Point::new(8, -1), Point::new(2, -1)).unwrap();
        assert_eq!(segment.endpoints(), (Point::new(2, -1), Point::new(8, -1)));
        assert!(segment.encloses(&Point::new(2, -1)));
        assert!(segment.encloses(&Point::new(8, -1)));
        assert!(!segment.encloses(&Point::new(9, -1)));
        assert!(!segment.encloses(&Point::new(5, 0)));
    }

    #[test]
    fn perpendicular_segments_touch_at_a_shared_endpoint() {
        let horiz = Segment::new(Dir::Horiz, 0, Span::new(0, 5));
        let vert = Segment::new(Dir::Vert, 5, Span::new(0, 5));
        assert!(horiz.touches(&vert));

        let crossing = Segment::new(Dir::Vert, 2, Span::new(-2, 2));
        // Crossing interiors share no endpoint.
        assert!(!horiz.touches(&crossing));
    }

    #[test]
    fn translating_a_segment() {
        let segment = Segment::new(Dir::Vert, 4, Span::new(0, 3));
        assert_eq!(
            segment.translate(Point::new(2, 10)),
            Segment::new(Dir::Vert, 6, Span::new(10, 13))
        );
    }
}
