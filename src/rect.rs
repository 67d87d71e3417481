use crate::units::*;

/// A rectangle on a page, specified by two opposite corners. Page coordinates
/// have their origin at the top-left corner, so `(x1, y1)` is the top-left and
/// `(x2, y2)` the bottom-right corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Mm,
    /// The y-coordinate of the top edge.
    pub y1: Mm,
    /// The x-coordinate of the right edge.
    pub x2: Mm,
    /// The y-coordinate of the bottom edge.
    pub y2: Mm,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn from_origin_size(x: Mm, y: Mm, width: Mm, height: Mm) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Mm {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Mm {
        self.y2 - self.y1
    }
}
