//! Axis-aligned rectangles.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::contains::{Containment, Contains};
use crate::corner::Corner;
use crate::dims::Dims;
use crate::dir::Dir;
use crate::error::{Error, Result};
use crate::intersect::Intersect;
use crate::point::Point;
use crate::segment::Segment;
use crate::side::{Side, Sides};
use crate::span::Span;
use crate::translate::TranslateMut;

/// The edge pairings tested by [`Rect::adjacent`], in priority order.
///
/// Each entry is a side of `self`; it is paired with the opposite side of the other rectangle.
const ADJACENCY_ORDER: [Side; 4] = [Side::Bot, Side::Top, Side::Right, Side::Left];

/// An axis-aligned rectangle, specified by upper-left and lower-right corners.
///
/// A rectangle covers grid cells inclusively, so both corners belong to it.
/// The lower-right corner always strictly exceeds the upper-left corner on both axes;
/// every constructor and mutator enforces this, which means a rectangle is always at
/// least two cells wide and two cells tall.
///
/// Coordinates may take any `i64` value, but the cell counts returned by
/// [`Rect::width`], [`Rect::height`] and [`Rect::area`] must also fit in an `i64`.
///
/// Rectangles display in their canonical form, `(ulx,uly,lrx,lry)`:
///
/// ```
/// # use gridgeom::prelude::*;
/// let rect = Rect::from_sides(1, 2, 30, 40)?;
/// assert_eq!(rect.to_string(), "(1,2,30,40)");
/// # Ok::<(), gridgeom::error::Error>(())
/// ```
#[derive(Debug, Copy, Clone, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "RawRect", into = "RawRect")]
pub struct Rect {
    /// The upper-left corner.
    ul: Point,
    /// The lower-right corner.
    lr: Point,
}

/// The unvalidated serialized form of a [`Rect`].
#[derive(Serialize, Deserialize)]
struct RawRect {
    upper_left: Point,
    lower_right: Point,
}

impl TryFrom<RawRect> for Rect {
    type Error = Error;

    fn try_from(value: RawRect) -> Result<Self> {
        Rect::new(value.upper_left, value.lower_right)
    }
}

impl From<Rect> for RawRect {
    fn from(value: Rect) -> Self {
        Self {
            upper_left: value.ul,
            lower_right: value.lr,
        }
    }
}

/// Counts the cells in `start..=stop`, where `start < stop`.
const fn cell_count(start: i64, stop: i64) -> i64 {
    match stop.checked_sub(start) {
        Some(diff) if diff < i64::MAX => diff + 1,
        _ => panic!("rectangle cell count overflows i64"),
    }
}

/// Checks that `lower_right` strictly exceeds `upper_left` on both axes.
fn check_corners(upper_left: Point, lower_right: Point) -> Result<()> {
    if lower_right.x <= upper_left.x || lower_right.y <= upper_left.y {
        tracing::debug!(%upper_left, %lower_right, "rejected rectangle corners");
        return Err(Error::UnorderedCorners {
            upper_left,
            lower_right,
        });
    }
    Ok(())
}

impl Rect {
    /// Creates a new rectangle from its upper-left and lower-right corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedCorners`] unless `lower_right` is strictly greater than
    /// `upper_left` in both x and y.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let rect = Rect::new(Point::new(15, 20), Point::new(30, 40))?;
    /// assert_eq!(rect.left(), 15);
    /// assert_eq!(rect.top(), 20);
    /// assert_eq!(rect.right(), 30);
    /// assert_eq!(rect.bot(), 40);
    ///
    /// assert!(Rect::new(Point::new(10, 10), Point::new(5, 5)).is_err());
    /// assert!(Rect::new(Point::new(10, 10), Point::new(10, 20)).is_err());
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn new(upper_left: Point, lower_right: Point) -> Result<Self> {
        check_corners(upper_left, lower_right)?;
        Ok(Self {
            ul: upper_left,
            lr: lower_right,
        })
    }

    /// Creates a rectangle from all 4 sides (left, top, right, bottom).
    ///
    /// This is the upper-left corner `(left, top)` followed by the lower-right
    /// corner `(right, bot)`; see [`Rect::new`] for the errors returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let rect = Rect::from_sides(15, 20, 30, 40)?;
    /// assert_eq!(rect.upper_left(), Point::new(15, 20));
    /// assert_eq!(rect.lower_right(), Point::new(30, 40));
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    #[inline]
    pub fn from_sides(left: i64, top: i64, right: i64, bot: i64) -> Result<Self> {
        Self::new(Point::new(left, top), Point::new(right, bot))
    }

    /// Creates a rectangle from corners that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCorner`] naming the first absent corner,
    /// or any error returned by [`Rect::new`].
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let rect = Rect::try_from_corners(Some(Point::new(0, 0)), Some(Point::new(4, 4)))?;
    /// assert_eq!(rect, Rect::from_sides(0, 0, 4, 4)?);
    ///
    /// assert_eq!(
    ///     Rect::try_from_corners(Some(Point::new(0, 0)), None),
    ///     Err(Error::MissingCorner(Corner::LowerRight)),
    /// );
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn try_from_corners(upper_left: Option<Point>, lower_right: Option<Point>) -> Result<Self> {
        let upper_left = upper_left.ok_or(Error::MissingCorner(Corner::UpperLeft))?;
        let lower_right = lower_right.ok_or(Error::MissingCorner(Corner::LowerRight))?;
        Self::new(upper_left, lower_right)
    }

    /// Creates a rectangle from its upper-left corner and its size in cells.
    ///
    /// The lower-right corner is `(x + width - 1, y + height - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveDims`] if the width or height is not positive.
    /// A width or height of exactly 1 describes a single row or column of cells,
    /// which the corner ordering invariant rejects with [`Error::UnorderedCorners`].
    /// Returns [`Error::Overflow`] if the lower-right corner is not representable.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let rect = Rect::build(2, 3, 10, 5)?;
    /// assert_eq!(rect, Rect::from_sides(2, 3, 11, 7)?);
    /// assert_eq!(rect.width(), 10);
    /// assert_eq!(rect.height(), 5);
    ///
    /// assert_eq!(Rect::build(0, 0, 0, 5), Err(Error::NonPositiveDims(Dims::new(0, 5))));
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn build(x: i64, y: i64, width: i64, height: i64) -> Result<Self> {
        Self::from_origin_and_dims(Point::new(x, y), Dims::new(width, height))
    }

    /// Creates a rectangle with upper-left corner `origin` covering `dims` cells.
    ///
    /// Equivalent to [`Rect::build`].
    pub fn from_origin_and_dims(origin: Point, dims: Dims) -> Result<Self> {
        if !dims.is_positive() {
            return Err(Error::NonPositiveDims(dims));
        }
        let far = |start: i64, len: i64| start.checked_add(len - 1);
        match (far(origin.x, dims.w()), far(origin.y, dims.h())) {
            (Some(x), Some(y)) => Self::new(origin, Point::new(x, y)),
            _ => {
                tracing::debug!(%origin, %dims, "rectangle corner overflows");
                Err(Error::Overflow { origin, dims })
            }
        }
    }

    /// Returns the upper-left corner.
    #[inline]
    pub const fn upper_left(&self) -> Point {
        self.ul
    }

    /// Returns the lower-right corner.
    #[inline]
    pub const fn lower_right(&self) -> Point {
        self.lr
    }

    /// Returns the upper-right corner.
    #[inline]
    pub const fn upper_right(&self) -> Point {
        Point::new(self.lr.x, self.ul.y)
    }

    /// Returns the lower-left corner.
    #[inline]
    pub const fn lower_left(&self) -> Point {
        Point::new(self.ul.x, self.lr.y)
    }

    /// Returns the desired corner.
    pub const fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::UpperLeft => self.upper_left(),
            Corner::UpperRight => self.upper_right(),
            Corner::LowerLeft => self.lower_left(),
            Corner::LowerRight => self.lower_right(),
        }
    }

    /// Replaces the upper-left corner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedCorners`] if `upper_left` does not lie strictly
    /// above and to the left of the current lower-right corner. The rectangle is left
    /// unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let mut rect = Rect::from_sides(10, 10, 20, 20)?;
    /// rect.set_upper_left(Point::new(0, 5))?;
    /// assert_eq!(rect, Rect::from_sides(0, 5, 20, 20)?);
    ///
    /// assert!(rect.set_upper_left(Point::new(25, 0)).is_err());
    /// assert_eq!(rect, Rect::from_sides(0, 5, 20, 20)?);
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn set_upper_left(&mut self, upper_left: Point) -> Result<()> {
        check_corners(upper_left, self.lr)?;
        self.ul = upper_left;
        Ok(())
    }

    /// Replaces the lower-right corner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedCorners`] if `lower_right` does not lie strictly
    /// below and to the right of the current upper-left corner. The rectangle is left
    /// unchanged on error.
    pub fn set_lower_right(&mut self, lower_right: Point) -> Result<()> {
        check_corners(self.ul, lower_right)?;
        self.lr = lower_right;
        Ok(())
    }

    /// Returns the left x-coordinate of the rectangle.
    #[inline]
    pub const fn left(&self) -> i64 {
        self.ul.x
    }

    /// Returns the top y-coordinate of the rectangle.
    #[inline]
    pub const fn top(&self) -> i64 {
        self.ul.y
    }

    /// Returns the right x-coordinate of the rectangle.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.lr.x
    }

    /// Returns the bottom y-coordinate of the rectangle.
    #[inline]
    pub const fn bot(&self) -> i64 {
        self.lr.y
    }

    /// Returns the coordinate of the given side.
    pub const fn side(&self, side: Side) -> i64 {
        match side {
            Side::Left => self.left(),
            Side::Top => self.top(),
            Side::Right => self.right(),
            Side::Bot => self.bot(),
        }
    }

    /// Returns the horizontal [`Span`] of the rectangle.
    pub fn hspan(&self) -> Span {
        Span::new(self.left(), self.right())
    }

    /// Returns the vertical [`Span`] of the rectangle.
    pub fn vspan(&self) -> Span {
        Span::new(self.top(), self.bot())
    }

    /// Returns the span of the rectangle in the given direction.
    pub fn span(&self, dir: Dir) -> Span {
        match dir {
            Dir::Horiz => self.hspan(),
            Dir::Vert => self.vspan(),
        }
    }

    /// Returns the number of columns covered, including both the left and right columns.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let rect = Rect::from_sides(10, 20, 30, 50)?;
    /// assert_eq!(rect.width(), 21);
    /// assert_eq!(rect.height(), 31);
    /// assert_eq!(rect.area(), 21 * 31);
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the number of columns exceeds `i64::MAX`.
    #[inline]
    pub const fn width(&self) -> i64 {
        cell_count(self.ul.x, self.lr.x)
    }

    /// Returns the number of rows covered, including both the top and bottom rows.
    ///
    /// # Panics
    ///
    /// Panics if the number of rows exceeds `i64::MAX`.
    #[inline]
    pub const fn height(&self) -> i64 {
        cell_count(self.ul.y, self.lr.y)
    }

    /// Returns the width and height of the rectangle.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Rect::width`] and [`Rect::height`].
    #[inline]
    pub const fn dims(&self) -> Dims {
        Dims::new(self.width(), self.height())
    }

    /// Returns the number of cells covered by the rectangle.
    ///
    /// # Panics
    ///
    /// Panics if the number of cells exceeds `i64::MAX`.
    #[inline]
    pub const fn area(&self) -> i64 {
        match self.width().checked_mul(self.height()) {
            Some(area) => area,
            None => panic!("rectangle area overflows i64"),
        }
    }

    /// Returns the desired edge of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let rect = Rect::from_sides(20, 20, 100, 200)?;
    /// assert_eq!(rect.edge(Side::Top), Segment::new(Dir::Horiz, 20, Span::new(20, 100)));
    /// assert_eq!(rect.edge(Side::Bot), Segment::new(Dir::Horiz, 200, Span::new(20, 100)));
    /// assert_eq!(rect.edge(Side::Left), Segment::new(Dir::Vert, 20, Span::new(20, 200)));
    /// assert_eq!(rect.edge(Side::Right), Segment::new(Dir::Vert, 100, Span::new(20, 200)));
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn edge(&self, side: Side) -> Segment {
        let dir = side.edge_dir();
        Segment::new(dir, self.side(side), self.span(dir))
    }

    /// Returns all four edges of the rectangle.
    pub fn edges(&self) -> Sides<Segment> {
        Sides::new(
            self.edge(Side::Left),
            self.edge(Side::Top),
            self.edge(Side::Right),
            self.edge(Side::Bot),
        )
    }

    /// Returns true if the rectangles overlap without either enclosing the other.
    ///
    /// Rectangles that merely share an edge or a corner overlap. A rectangle
    /// that is entirely enclosed by the other (including an equal rectangle)
    /// does **not** intersect it; use [`Contains::encloses`] to test for that.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let r1 = Rect::from_sides(0, 0, 10, 10)?;
    /// let r2 = Rect::from_sides(5, 5, 8, 12)?;
    /// let r3 = Rect::from_sides(1, 1, 2, 2)?;
    /// let r4 = Rect::from_sides(11, 11, 21, 21)?;
    /// assert!(r1.intersects(&r2));
    /// assert!(!r1.intersects(&r3));
    /// assert!(!r1.intersects(&r4));
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        self.contains(other).only_partially_intersects() && !other.encloses(self)
    }

    /// Returns the region shared by two intersecting rectangles.
    ///
    /// Returns [`None`] whenever [`Rect::intersects`] is false, including when one
    /// rectangle encloses the other. Also returns [`None`] when the shared region is a
    /// single row or column of cells, as no [`Rect`] can represent it.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let r1 = Rect::from_sides(0, 0, 4, 4)?;
    /// let r2 = Rect::from_sides(2, 2, 6, 6)?;
    /// assert_eq!(r1.intersection(&r2), Some(Rect::from_sides(2, 2, 4, 4)?));
    ///
    /// let r3 = Rect::from_sides(5, 5, 9, 9)?;
    /// assert_eq!(r1.intersection(&r3), None);
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }

        let upper_left = Point::new(
            std::cmp::max(self.left(), other.left()),
            std::cmp::max(self.top(), other.top()),
        );
        let lower_right = Point::new(
            std::cmp::min(self.right(), other.right()),
            std::cmp::min(self.bot(), other.bot()),
        );

        match Rect::new(upper_left, lower_right) {
            Ok(rect) => Some(rect),
            Err(error) => {
                tracing::trace!(rect = %self, other = %other, %error, "overlap cannot be represented");
                None
            }
        }
    }

    /// Returns true if the rectangles touch along an edge.
    ///
    /// Edges are paired in a fixed order: this rectangle's bottom with the other's top,
    /// then top with bottom, right with left and finally left with right. Only the first
    /// pairing whose edges lie on the same line is considered; the rectangles are
    /// adjacent if those edges share at least one point.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let r1 = Rect::from_sides(0, 0, 10, 10)?;
    /// assert!(r1.adjacent(&Rect::from_sides(10, 0, 20, 10)?));
    /// assert!(r1.adjacent(&Rect::from_sides(10, 3, 20, 6)?));
    /// assert!(r1.adjacent(&Rect::from_sides(5, 10, 15, 15)?));
    /// assert!(!r1.adjacent(&Rect::from_sides(12, 12, 20, 20)?));
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    pub fn adjacent(&self, other: &Rect) -> bool {
        let (ours, theirs) = (self.edges(), other.edges());
        ADJACENCY_ORDER
            .iter()
            .map(|&side| (ours[side], theirs[!side]))
            .find(|(ours, theirs)| ours.coord() == theirs.coord())
            .is_some_and(|(ours, theirs)| ours.touches(&theirs))
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{},{})",
            self.ul.x, self.ul.y, self.lr.x, self.lr.y
        )
    }
}

impl Intersect<Rect> for Rect {
    type Output = Self;

    fn intersect(&self, other: &Rect) -> Option<Self::Output> {
        self.intersection(other)
    }
}

impl TranslateMut for Rect {
    fn translate_mut(&mut self, p: Point) {
        self.ul.translate_mut(p);
        self.lr.translate_mut(p);
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, other: &Point) -> Containment {
        if other.x >= self.ul.x
            && other.x <= self.lr.x
            && other.y >= self.ul.y
            && other.y <= self.lr.y
        {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

impl Contains<Rect> for Rect {
    /// Returns [`Containment::Full`] if both corners of `other` lie in this rectangle,
    /// [`Containment::None`] if the rectangles are separated along either axis, and
    /// [`Containment::Partial`] otherwise.
    fn contains(&self, other: &Rect) -> Containment {
        self.hspan()
            .contains(&other.hspan())
            .and(self.vspan().contains(&other.vspan()))
    }
}
