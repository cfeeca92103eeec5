//! Screen-space geometry for search inputs and results.

use serde::{Deserialize, Serialize};

/// Integer pixel location on screen.
///
/// `(-1, -1)` is the sentinel for "no acceptable match"; any real match has
/// non-negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Sentinel returned when nothing on screen passed the threshold.
    pub const NOT_FOUND: Point = Point { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True for any real match location.
    pub fn is_found(&self) -> bool {
        self.x != -1 && self.y != -1
    }
}

/// A screen-absolute search region; `None` at the call sites means the
/// entire screen. Width and height are expected to be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// (width, height) in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether a point lies inside this region.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x as i32
            && point.x < (self.x + self.width) as i32
            && point.y >= self.y as i32
            && point.y < (self.y + self.height) as i32
    }

    /// Center point, e.g. as a click target for a matched element.
    pub fn center(&self) -> Point {
        Point::new(
            (self.x + self.width / 2) as i32,
            (self.y + self.height / 2) as i32,
        )
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_found() {
        assert!(!Point::NOT_FOUND.is_found());
        assert!(Point::new(0, 0).is_found());
        assert!(Point::new(100, 50).is_found());
    }

    #[test]
    fn contains_is_half_open() {
        let region = Rectangle::new(10, 20, 30, 40);
        assert!(region.contains(Point::new(10, 20)));
        assert!(region.contains(Point::new(39, 59)));
        assert!(!region.contains(Point::new(40, 20)));
        assert!(!region.contains(Point::new(10, 60)));
        assert!(!region.contains(Point::new(9, 20)));
    }

    #[test]
    fn center_of_region() {
        assert_eq!(Rectangle::new(0, 0, 200, 100).center(), Point::new(100, 50));
        assert_eq!(Rectangle::new(10, 10, 5, 5).center(), Point::new(12, 12));
    }

    #[test]
    fn zero_sized_region_is_invalid() {
        assert!(!Rectangle::new(0, 0, 0, 10).is_valid());
        assert!(!Rectangle::new(0, 0, 10, 0).is_valid());
        assert!(Rectangle::new(0, 0, 1, 1).is_valid());
    }
}
