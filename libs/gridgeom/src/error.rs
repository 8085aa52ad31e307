//! Errors raised when constructing or mutating geometry.

use crate::corner::Corner;
use crate::dims::Dims;
use crate::point::Point;

/// A result type with [`Error`] as the error.
pub type Result<T> = std::result::Result<T, Error>;

/// An invalid argument passed to a rectangle constructor or mutator.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required corner was not provided.
    #[error("{0} corner may not be absent")]
    MissingCorner(Corner),
    /// The lower-right corner does not strictly exceed the upper-left corner on both axes.
    #[error("lower right corner {lower_right} must exceed upper left corner {upper_left} on both axes")]
    UnorderedCorners {
        /// The requested upper-left corner.
        upper_left: Point,
        /// The requested lower-right corner.
        lower_right: Point,
    },
    /// A width or height that is zero or negative.
    #[error("rectangle dimensions must be positive, got {0}")]
    NonPositiveDims(Dims),
    /// The far corner of a rectangle lies outside the range of `i64`.
    #[error("a rectangle at {origin} with dimensions {dims} does not fit in i64 coordinates")]
    Overflow {
        /// The requested upper-left corner.
        origin: Point,
        /// The requested dimensions.
        dims: Dims,
    },
}
