//! Traits for checking whether a shape contains another shape.

use serde::{Deserialize, Serialize};

/// Ways in which an inner shape can be contained within an enclosing shape.
#[derive(
    Debug, Default, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, Ord, PartialOrd,
)]
pub enum Containment {
    /// The shapes share no coordinate.
    #[default]
    None,
    /// The shapes overlap, but the inner shape is not entirely enclosed.
    Partial,
    /// Every coordinate of the inner shape lies within the enclosing shape.
    Full,
}

/// Provides information on whether a shape contains another shape.
///
/// Containment is inclusive: coordinates on a shape's boundary belong to the shape.
pub trait Contains<T: ?Sized> {
    /// Returns a [`Containment`] indicating how `other` is enclosed within this shape.
    fn contains(&self, other: &T) -> Containment;

    /// Returns true if `other` is fully enclosed in this shape.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// let outer = Rect::from_sides(0, 0, 10, 10)?;
    /// let inner = Rect::from_sides(1, 1, 2, 2)?;
    /// assert!(outer.encloses(&inner));
    /// assert!(!inner.encloses(&outer));
    /// # Ok::<(), gridgeom::error::Error>(())
    /// ```
    #[inline]
    fn encloses(&self, other: &T) -> bool {
        self.contains(other).is_full()
    }

    /// Returns true if `other` is fully or partially enclosed in this shape.
    #[inline]
    fn partially_intersects(&self, other: &T) -> bool {
        self.contains(other).intersects()
    }
}

impl Containment {
    /// Combines the containment along two independent axes.
    ///
    /// A shape is only as contained as its least-contained axis: containment is
    /// full only if it is full on both axes, and none if either axis is disjoint.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridgeom::prelude::*;
    /// assert_eq!(Containment::Full.and(Containment::Partial), Containment::Partial);
    /// assert_eq!(Containment::Partial.and(Containment::None), Containment::None);
    /// assert_eq!(Containment::Full.and(Containment::Full), Containment::Full);
    /// ```
    #[inline]
    pub fn and(self, other: Self) -> Self {
        std::cmp::min(self, other)
    }

    /// Returns true when fully contained.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// Returns true if there is **at least** partial containment.
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(self, Self::Full | Self::Partial)
    }

    /// Returns true if there is **only** partial containment.
    #[inline]
    pub fn only_partially_intersects(&self) -> bool {
        matches!(self, Self::Partial)
    }

    /// Returns true if there is no containment.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn containment_predicates() {
        assert!(Containment::Full.is_full());
        assert!(Containment::Full.intersects());
        assert!(!Containment::Full.only_partially_intersects());
        assert!(Containment::Partial.intersects());
        assert!(Containment::Partial.only_partially_intersects());
        assert!(!Containment::None.intersects());
        assert!(Containment::default().is_none());
    }

    #[test]
    fn combining_axes_keeps_the_weakest_containment() {
        use Containment::*;
        for c in [None, Partial, Full] {
            assert_eq!(c.and(Full), c);
            assert_eq!(Full.and(c), c);
            assert_eq!(c.and(None), None);
        }
        assert_eq!(Partial.and(Partial), Partial);
    }
}
