//! A one-dimensional span.
//!
//! A span represents the closed interval `[start, stop]`.
use serde::{Deserialize, Serialize};

use crate::contains::{Containment, Contains};
use crate::intersect::Intersect;

/// A closed interval of coordinates in one dimension.
///
/// Represents the range `[start, stop]`; both endpoints belong to the span.
#[derive(
    Debug, Default, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize, PartialEq, Eq,
)]
pub struct Span {
    start: i64,
    stop: i64,
}

impl Span {
    /// Creates a new [`Span`] between two integers, in either order.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert_eq!(Span::new(10, 4), Span::new(4, 10));
    /// assert_eq!(Span::new(10, 4).start(), 4);
    /// ```
    pub fn new(start: i64, stop: i64) -> Self {
        use std::cmp::{max, min};
        Self {
            start: min(start, stop),
            stop: max(start, stop),
        }
    }

    /// Creates a span of zero length encompassing the given coordinate.
    pub const fn from_point(x: i64) -> Self {
        Self { start: x, stop: x }
    }

    /// The lower endpoint of the span.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// The upper endpoint of the span.
    #[inline]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    /// The distance between the endpoints.
    ///
    /// Note that this is one less than the number of integer coordinates in the span.
    #[inline]
    pub const fn length(&self) -> i64 {
        self.stop - self.start
    }

    /// Returns true if the two spans share at least one coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert!(Span::new(0, 10).intersects(&Span::new(10, 20)));
    /// assert!(!Span::new(0, 10).intersects(&Span::new(11, 20)));
    /// ```
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        !(other.stop < self.start || self.stop < other.start)
    }

    /// Returns the coordinates shared by both spans, or [`None`] if they are disjoint.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert_eq!(Span::new(0, 10).intersection(Span::new(5, 20)), Some(Span::new(5, 10)));
    /// assert_eq!(Span::new(0, 10).intersection(Span::new(11, 20)), None);
    /// ```
    pub fn intersection(self, other: Self) -> Option<Self> {
        let start = std::cmp::max(self.start(), other.start());
        let stop = std::cmp::min(self.stop(), other.stop());
        if start > stop {
            None
        } else {
            Some(Self { start, stop })
        }
    }

    /// Shifts both endpoints by `amount`.
    pub const fn translate(self, amount: i64) -> Self {
        Self {
            start: self.start + amount,
            stop: self.stop + amount,
        }
    }
}

impl Intersect<Span> for Span {
    type Output = Self;
    fn intersect(&self, other: &Span) -> Option<Self::Output> {
        self.intersection(*other)
    }
}

impl Contains<i64> for Span {
    fn contains(&self, other: &i64) -> Containment {
        if (self.start..=self.stop).contains(other) {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

impl Contains<Span> for Span {
    fn contains(&self, other: &Span) -> Containment {
        if other.start() >= self.start() && other.stop() <= self.stop() {
            Containment::Full
        } else if self.intersects(other) {
            Containment::Partial
        } else {
            Containment::None
        }
    }
}

impl From<(i64, i64)> for Span {
    #[inline]
    fn from(tup: (i64, i64)) -> Self {
        Self::new(tup.0, tup.1)
    }
}
