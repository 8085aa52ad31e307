//! A width and height with no specified location.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::dir::Dir;

/// A width and height, counted in grid cells, with no specified location.
///
/// `Dims` itself is unvalidated; [`Rect::from_origin_and_dims`](crate::rect::Rect::from_origin_and_dims)
/// rejects non-positive values.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct Dims {
    w: i64,
    h: i64,
}

impl Dims {
    /// Creates a new [`Dims`] from a width and height.
    pub const fn new(w: i64, h: i64) -> Self {
        Self { w, h }
    }

    /// Creates a new [`Dims`] with width and height equal to `value`.
    pub const fn square(value: i64) -> Self {
        Self { w: value, h: value }
    }

    /// The width.
    #[inline]
    pub const fn w(&self) -> i64 {
        self.w
    }

    /// The height.
    #[inline]
    pub const fn h(&self) -> i64 {
        self.h
    }

    /// Returns the dimension in the specified direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let dims = Dims::new(100, 200);
    /// assert_eq!(dims.dim(Dir::Vert), 200);
    /// assert_eq!(dims.dim(Dir::Horiz), 100);
    /// ```
    pub const fn dim(&self, dir: Dir) -> i64 {
        match dir {
            Dir::Horiz => self.w,
            Dir::Vert => self.h,
        }
    }

    /// Returns true if both the width and height are strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// The number of cells covered, `w * h`.
    #[inline]
    pub const fn area(&self) -> i64 {
        self.w * self.h
    }
}

impl Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn dims_queries() {
        let dims = Dims::new(3, 4);
        assert_eq!(dims.area(), 12);
        assert!(dims.is_positive());
        assert!(!Dims::new(0, 4).is_positive());
        assert!(!Dims::new(4, -1).is_positive());
        assert_eq!(Dims::square(5), Dims::new(5, 5));
        assert_eq!(dims.to_string(), "3x4");
    }
}
