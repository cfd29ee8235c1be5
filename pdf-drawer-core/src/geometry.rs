//! Basic geometric types for page-relative drawing
//!
//! Coordinates are page-relative with the origin at the top-left corner of
//! the visible page box and y growing downward.

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page space
///
/// `top_left` always holds the smaller coordinates and `bottom_right` the
/// larger ones; constructors normalise reversed corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Top-left corner (minimum x, minimum y)
    pub top_left: Point,
    /// Bottom-right corner (maximum x, maximum y)
    pub bottom_right: Point,
}

impl Rectangle {
    /// Create a rectangle from two opposite corners, in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a rectangle from raw corner coordinates `(x0, y0)` and `(x1, y1)`
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::from_corners(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the width
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    /// True when the rectangle covers no area
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Clamp every corner into `[0, width] × [0, height]`
    ///
    /// A rectangle lying entirely outside the bounds collapses to a
    /// zero-area rectangle on the nearest edge.
    pub fn clamp_to(&self, width: f64, height: f64) -> Self {
        let clamp_x = |x: f64| x.clamp(0.0, width.max(0.0));
        let clamp_y = |y: f64| y.clamp(0.0, height.max(0.0));
        Self {
            top_left: Point::new(clamp_x(self.top_left.x), clamp_y(self.top_left.y)),
            bottom_right: Point::new(clamp_x(self.bottom_right.x), clamp_y(self.bottom_right.y)),
        }
    }
}

/// Width and height of a page in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// US Letter (612 x 792)
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// A4 (595 x 842)
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }
}
