use core::fmt;
use core::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A span's lower bound exceeds its upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSpan;

impl fmt::Display for InvalidSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("span bounds are not ordered (lo > hi), cannot compute intersection")
    }
}

impl core::error::Error for InvalidSpan {}

/// A rectangle's corners are not ordered on at least one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRect;

impl fmt::Display for InvalidRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rectangle corners are not ordered, cannot compute intersection")
    }
}

impl core::error::Error for InvalidRect {}

impl From<InvalidSpan> for InvalidRect {
    fn from(_: InvalidSpan) -> Self {
        Self
    }
}

/// 1-D closed interval `[lo, hi]`.
///
/// Ordering of the bounds is not enforced at construction; a span with
/// `lo > hi` can be built and is only rejected when [`Span::intersection`]
/// checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: Copy + PartialOrd> Span<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Span { lo, hi }
    }

    /// Returns whether `lo <= hi`. A single point is ordered.
    pub fn is_ordered(&self) -> bool {
        self.lo <= self.hi
    }

    /// Computes the intersection of two spans.
    ///
    /// Returns `Ok(None)` if the spans do not overlap. Spans are closed, so
    /// two spans touching at an endpoint intersect in that single point.
    /// Fails with [`InvalidSpan`] if either span is not ordered; bounds are
    /// never silently reordered.
    pub fn intersection(self, other: Span<T>) -> Result<Option<Span<T>>, InvalidSpan> {
        if !(self.is_ordered() && other.is_ordered()) {
            return Err(InvalidSpan);
        }

        if self.hi < other.lo || other.hi < self.lo {
            return Ok(None);
        }

        let lo = if other.lo > self.lo { other.lo } else { self.lo };
        let hi = if other.hi < self.hi { other.hi } else { self.hi };

        Ok(Some(Span { lo, hi }))
    }
}

impl<T: Sub<Output = T>> Span<T> {
    /// Returns the size of the span, calculated as `hi - lo`.
    pub fn size(self) -> T {
        self.hi - self.lo
    }
}

/// Axis-aligned rectangle given by its lower-left corner `(x1, y1)` and
/// upper-right corner `(x2, y2)`.
///
/// A rectangle collapsed to a line segment or a single point is still a
/// valid rectangle. As with [`Span`], nothing is enforced at construction:
/// [`Rect::is_valid`] reports whether the corners are ordered, and
/// [`Rect::intersection`] rejects rectangles that are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect<T> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Rect { x1, y1, x2, y2 }
    }

    /// The rectangle's extent along the X axis, as a [`Span`].
    pub fn x_span(&self) -> Span<T> {
        Span {
            lo: self.x1,
            hi: self.x2,
        }
    }

    /// The rectangle's extent along the Y axis, as a [`Span`].
    pub fn y_span(&self) -> Span<T> {
        Span {
            lo: self.y1,
            hi: self.y2,
        }
    }

    /// Returns whether the corners are ordered on both axes
    /// (`x1 <= x2 && y1 <= y2`).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Computes the intersection of two rectangles.
    ///
    /// Returns `Ok(None)` if the rectangles do not overlap on at least one
    /// axis. Edges and corners count: rectangles sharing only a boundary
    /// intersect in that degenerate rectangle. Fails with [`InvalidRect`]
    /// if either input is not [valid](Rect::is_valid); both inputs are
    /// checked here, before any axis work.
    pub fn intersection(self, other: Rect<T>) -> Result<Option<Rect<T>>, InvalidRect> {
        if !(self.is_valid() && other.is_valid()) {
            return Err(InvalidRect);
        }

        let x = match self.x_span().intersection(other.x_span())? {
            Some(x) => x,
            None => return Ok(None),
        };
        let y = match self.y_span().intersection(other.y_span())? {
            Some(y) => y,
            None => return Ok(None),
        };

        Ok(Some(Rect {
            x1: x.lo,
            y1: y.lo,
            x2: x.hi,
            y2: y.hi,
        }))
    }

    /// Returns whether the two rectangles overlap, touching edges and
    /// corners included. Rectangles that are not valid overlap nothing.
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.x1 <= other.x2
            && other.x1 <= self.x2
            && self.y1 <= other.y2
            && other.y1 <= self.y2
    }
}
