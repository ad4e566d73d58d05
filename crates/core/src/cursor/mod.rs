use crate::geometry::{Point, Rect};

/// Offset of the cursor-following tooltip from the pointer, in pixels.
pub const TOOLTIP_OFFSET_X: f32 = -200.0;
pub const TOOLTIP_OFFSET_Y: f32 = -20.0;

/// Tracks the pointer relative to a bound container for cursor-following
/// overlays. Unbound, it reports the origin; while the pointer is outside
/// the container the last inside position goes stale rather than updating.
#[derive(Debug, Default, Clone)]
pub struct CursorTracker {
    bounds: Option<Rect>,
    position: Point,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    /// Releases the container; the position degrades back to the origin.
    pub fn unbind(&mut self) {
        self.bounds = None;
        self.position = Point::ORIGIN;
    }

    pub fn is_bound(&self) -> bool {
        self.bounds.is_some()
    }

    /// Feeds a pointer movement in page coordinates and returns the current
    /// container-relative position.
    pub fn pointer_move(&mut self, absolute: Point) -> Point {
        if let Some(bounds) = self.bounds {
            if bounds.contains(absolute) {
                self.position = bounds.relative(absolute);
            }
        }
        self.position
    }

    /// Container-relative pointer position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Anchor for the overlay that trails the pointer.
    pub fn tooltip_anchor(&self) -> Point {
        self.position.offset(TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound_tracker() -> CursorTracker {
        let mut tracker = CursorTracker::new();
        tracker.bind(Rect::new(100.0, 200.0, 800.0, 240.0));
        tracker
    }

    #[test]
    fn reports_positions_relative_to_the_container() {
        let mut tracker = bound_tracker();
        let position = tracker.pointer_move(Point::new(350.0, 260.0));

        assert_eq!(position, Point::new(250.0, 60.0));
        assert_eq!(tracker.position(), position);
    }

    #[test]
    fn movement_outside_the_container_goes_stale() {
        let mut tracker = bound_tracker();
        tracker.pointer_move(Point::new(350.0, 260.0));
        let position = tracker.pointer_move(Point::new(5000.0, 5000.0));

        assert_eq!(position, Point::new(250.0, 60.0));
    }

    #[test]
    fn unbound_tracker_degrades_to_the_origin() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.pointer_move(Point::new(40.0, 40.0)), Point::ORIGIN);

        let mut released = bound_tracker();
        released.pointer_move(Point::new(350.0, 260.0));
        released.unbind();
        assert_eq!(released.position(), Point::ORIGIN);
    }

    #[test]
    fn tooltip_anchor_trails_the_pointer() {
        let mut tracker = bound_tracker();
        tracker.pointer_move(Point::new(400.0, 300.0));

        assert_eq!(tracker.tooltip_anchor(), Point::new(100.0, 80.0));
    }
}
