//! Exact 2-D integer geometry for grids and matrices.
//!
//! Coordinates follow the matrix convention: `x` grows to the right and `y` grows
//! downward, so the upper-left corner of a [`Rect`](crate::rect::Rect) holds its
//! smallest coordinates. Rectangles cover cells inclusively; a rectangle from
//! `(0, 0)` to `(4, 4)` is 5 cells wide.
//!
//! # Examples
//!
//! Create a [rectangle](crate::rect::Rect) and query it:
//!
//! ```
//! # use gridgeom::prelude::*;
//! let rect = Rect::from_sides(0, 0, 10, 10)?;
//! assert_eq!(rect.width(), 11);
//! assert!(rect.contains(&Point::new(3, 7)).is_full());
//! # Ok::<(), gridgeom::error::Error>(())
//! ```
#![warn(missing_docs)]

extern crate self as gridgeom;

pub mod contains;
pub mod corner;
pub mod dims;
pub mod dir;
pub mod error;
pub mod intersect;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod segment;
pub mod side;
pub mod span;
pub mod translate;
