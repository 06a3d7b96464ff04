use embedded_graphics_core::geometry::{Point, Size};
use embedded_graphics_core::primitives::Rectangle;

use crate::Rect;

/// Maps the lower-left corner to `top_left` and the extents to `size`.
///
/// `embedded-graphics` describes a rectangle as a corner plus a size, so the
/// closed span `[x1, x2]` becomes a width of `x2 - x1`. Negative extents
/// (an invalid [`Rect`]) clamp to zero size.
impl From<Rect<i32>> for Rectangle {
    fn from(rect: Rect<i32>) -> Self {
        Rectangle {
            top_left: Point {
                x: rect.x1,
                y: rect.y1,
            },
            size: Size {
                width: (rect.x2 - rect.x1).max(0) as u32,
                height: (rect.y2 - rect.y1).max(0) as u32,
            },
        }
    }
}

/// Inverse of the conversion above: `x2 = x1 + width`, `y2 = y1 + height`.
/// The result is always valid since sizes are unsigned.
impl From<Rectangle> for Rect<i32> {
    fn from(rect: Rectangle) -> Self {
        Rect {
            x1: rect.top_left.x,
            y1: rect.top_left.y,
            x2: rect.top_left.x + rect.size.width as i32,
            y2: rect.top_left.y + rect.size.height as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_to_rectangle() {
        let converted = Rectangle::from(Rect::new(1, 2, 4, 7));
        assert_eq!(converted.top_left, Point { x: 1, y: 2 });
        assert_eq!(
            converted.size,
            Size {
                width: 3,
                height: 5
            }
        );
    }

    #[test]
    fn invalid_rect_clamps_to_zero_size() {
        let converted = Rectangle::from(Rect::new(4, 2, 1, 7));
        assert_eq!(
            converted.size,
            Size {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn rectangle_to_rect() {
        let rectangle = Rectangle {
            top_left: Point { x: 1, y: 2 },
            size: Size {
                width: 3,
                height: 5,
            },
        };
        let rect = Rect::from(rectangle);
        assert_eq!(rect, Rect::new(1, 2, 4, 7));
        assert!(rect.is_valid());
    }
}
