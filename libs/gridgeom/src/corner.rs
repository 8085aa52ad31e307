//! Describes the corners of axis-aligned rectangles.
//!
//! A [`Rect`](crate::rect::Rect) stores its upper-left and lower-right corners;
//! the other two are derived from them:
//!
//! ```
//! # use gridgeom::prelude::*;
//! let rect = Rect::from_sides(10, 20, 30, 40)?;
//! assert_eq!(rect.corner(Corner::UpperRight), Point::new(30, 20));
//! assert_eq!(rect.corner(Corner::LowerLeft), Point::new(10, 40));
//! # Ok::<(), gridgeom::error::Error>(())
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::side::Side;

/// An enumeration of the corners of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Corner {
    /// The upper-left corner (smallest x and y).
    UpperLeft,
    /// The upper-right corner.
    UpperRight,
    /// The lower-left corner.
    LowerLeft,
    /// The lower-right corner (largest x and y).
    LowerRight,
}

impl Corner {
    /// Gets the [`Side`] corresponding to the given [`Dir`] for this corner.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert_eq!(Corner::UpperLeft.side(Dir::Horiz), Side::Left);
    /// assert_eq!(Corner::UpperLeft.side(Dir::Vert), Side::Top);
    /// assert_eq!(Corner::LowerRight.side(Dir::Horiz), Side::Right);
    /// assert_eq!(Corner::LowerRight.side(Dir::Vert), Side::Bot);
    /// ```
    pub fn side(&self, dir: Dir) -> Side {
        use Corner::*;
        use Dir::*;
        use Side::*;
        match dir {
            Horiz => match self {
                LowerLeft | UpperLeft => Left,
                LowerRight | UpperRight => Right,
            },
            Vert => match self {
                UpperLeft | UpperRight => Top,
                LowerLeft | LowerRight => Bot,
            },
        }
    }
}

impl Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UpperLeft => "upper left",
            Self::UpperRight => "upper right",
            Self::LowerLeft => "lower left",
            Self::LowerRight => "lower right",
        };
        write!(f, "{name}")
    }
}
