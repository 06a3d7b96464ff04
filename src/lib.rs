#![no_std]

//! Intersection of axis-aligned rectangles.
//!
//! A [`Rect`] is given by its lower-left and upper-right corners; each axis
//! of it is a closed [`Span`]. [`Rect::intersection`] intersects the two
//! rectangles' spans axis by axis and reassembles the overlapping region,
//! if there is one:
//!
//! ```
//! use aarect::Rect;
//!
//! let a = Rect::new(0, 0, 2, 2);
//! let b = Rect::new(1, 1, 3, 3);
//! assert_eq!(a.intersection(b), Ok(Some(Rect::new(1, 1, 2, 2))));
//!
//! let far = Rect::new(5, 5, 6, 6);
//! assert_eq!(a.intersection(far), Ok(None));
//! ```
//!
//! Disjoint geometry is `Ok(None)`; an input whose corners are out of order
//! is an error, never silently repaired. Comparisons are exact, with no
//! epsilon tolerance.

mod geometry;

#[cfg(feature = "embedded-graphics")]
mod embedded_graphics;

pub use geometry::*;
