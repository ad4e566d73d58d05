use serde::{Deserialize, Serialize};

/// Point in page coordinates, or container-relative coordinates depending on
/// context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point shifted by the given deltas.
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned rectangle described by its top-left corner and extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Translates a page-coordinate point into this rectangle's local space.
    pub fn relative(&self, point: Point) -> Point {
        Point {
            x: point.x - self.x,
            y: point.y - self.y,
        }
    }

    /// Fraction of this rectangle's area that overlaps `other`, in [0, 1].
    /// A degenerate rectangle has no visible area and yields 0.
    pub fn visible_fraction(&self, other: &Rect) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }

        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);

        let overlap = (right - left).max(0.0) * (bottom - top).max(0.0);
        (overlap / area).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_offsets_against_container_origin() {
        let bounds = Rect::new(100.0, 50.0, 400.0, 300.0);
        let local = bounds.relative(Point::new(150.0, 80.0));

        assert_eq!(local, Point::new(50.0, 30.0));
    }

    #[test]
    fn fraction_covers_full_and_partial_overlap() {
        let element = Rect::new(0.0, 0.0, 100.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!(element.visible_fraction(&viewport), 1.0);

        let half_out = Rect::new(0.0, -50.0, 100.0, 100.0);
        let fraction = half_out.visible_fraction(&viewport);
        assert!((fraction - 0.5).abs() < 1e-6);
    }

    #[test]
    fn disjoint_rectangles_have_zero_fraction() {
        let element = Rect::new(0.0, 2000.0, 100.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);

        assert_eq!(element.visible_fraction(&viewport), 0.0);
    }

    #[test]
    fn degenerate_rectangle_is_never_visible() {
        let element = Rect::new(10.0, 10.0, 0.0, 100.0);
        let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);

        assert_eq!(element.visible_fraction(&viewport), 0.0);
    }
}
