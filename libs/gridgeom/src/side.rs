//! The sides of an axis-aligned rectangle.

use array_map::{ArrayMap, Indexable};
use serde::{Deserialize, Serialize};

use crate::dir::Dir;

/// An enumeration of the sides of an axis-aligned rectangle.
///
/// With `y` growing downward, [`Side::Top`] is the side with the smaller
/// y-coordinate and [`Side::Bot`] the side with the larger one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[repr(u8)]
#[derive(Indexable)]
pub enum Side {
    /// The left side.
    Left,
    /// The top side.
    Top,
    /// The right side.
    Right,
    /// The bottom side.
    Bot,
}

impl Side {
    /// Gets the direction of the coordinate corresponding to this side.
    ///
    /// Top and bottom edges sit at a y-coordinate, so they are on the **vertical** axis.
    /// Left and right edges sit at an x-coordinate, so they are on the **horizontal** axis.
    pub fn coord_dir(&self) -> Dir {
        use Dir::*;
        use Side::*;
        match self {
            Top | Bot => Vert,
            Left | Right => Horiz,
        }
    }

    /// Gets the direction in which the edge on this side runs.
    ///
    /// Top and bottom edges are **horizontal** line segments;
    /// left and right edges are **vertical** line segments.
    pub fn edge_dir(&self) -> Dir {
        self.coord_dir().other()
    }

    /// Returns the opposite side.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert_eq!(Side::Top.other(), Side::Bot);
    /// assert_eq!(!Side::Left, Side::Right);
    /// ```
    pub fn other(&self) -> Self {
        match self {
            Side::Top => Side::Bot,
            Side::Right => Side::Left,
            Side::Bot => Side::Top,
            Side::Left => Side::Right,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.other()
    }
}

/// An association of a value with type `T` to each of the four [`Side`]s.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Sides<T> {
    inner: ArrayMap<Side, T, 4>,
}

impl<T> Sides<T> {
    /// Creates a new [`Sides`] with the provided values for each side.
    pub const fn new(left: T, top: T, right: T, bot: T) -> Self {
        // Must match the declaration order of the variants of [`Side`].
        Self {
            inner: ArrayMap::new([left, top, right, bot]),
        }
    }
}

impl<T> std::ops::Index<Side> for Sides<T> {
    type Output = T;
    fn index(&self, index: Side) -> &Self::Output {
        &self.inner[index]
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn sides_are_indexed_in_declaration_order() {
        let sides = Sides::new(1, 2, 3, 4);
        assert_eq!(sides[Side::Left], 1);
        assert_eq!(sides[Side::Top], 2);
        assert_eq!(sides[Side::Right], 3);
        assert_eq!(sides[Side::Bot], 4);
        assert_eq!(sides[!Side::Bot], 2);
    }

    #[test]
    fn side_directions() {
        assert_eq!(Side::Top.edge_dir(), Dir::Horiz);
        assert_eq!(Side::Bot.coord_dir(), Dir::Vert);
        assert_eq!(Side::Left.edge_dir(), Dir::Vert);
        assert_eq!(Side::Right.coord_dir(), Dir::Horiz);
    }
}
