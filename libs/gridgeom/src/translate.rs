//! Translation of geometry by an integer offset.
//!
//! Translation moves every coordinate of a shape by the same amount, so it never
//! changes a shape's dimensions and cannot break a rectangle's corner ordering.
//!
//! ```
//! # use gridgeom::prelude::*;
//! let rect = Rect::from_sides(0, 0, 4, 4)?;
//! let moved = rect.translate(Point::new(10, -2));
//! assert_eq!(moved, Rect::from_sides(10, -2, 14, 2)?);
//! assert_eq!(moved.dims(), rect.dims());
//! # Ok::<(), gridgeom::error::Error>(())
//! ```

use crate::point::Point;

/// A shape that can be translated in place.
pub trait TranslateMut {
    /// Translates the shape by a [`Point`] through mutation.
    fn translate_mut(&mut self, p: Point);
}

/// A shape that can be translated by value.
///
/// Implemented for every [`TranslateMut`] shape.
pub trait Translate: TranslateMut + Sized {
    /// Translates the shape by [`Point`], consuming it and returning the moved shape.
    #[inline]
    fn translate(mut self, p: Point) -> Self {
        self.translate_mut(p);
        self
    }
}

impl<T: TranslateMut + Sized> Translate for T {}
