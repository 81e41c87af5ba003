//! Screen geometry of the params panel and its toggle
//!
//! The panel is anchored to the top-left corner of its host. Outside-click
//! dismissal needs to know where both pieces are without querying the widget
//! tree, so their sizes are fixed here and the view uses the same constants.

use iced::{Point, Rectangle, Size};

pub const PANEL_WIDTH: f32 = 616.0;
pub const PANEL_PADDING: u16 = 48;

pub const TOGGLE_SIZE: f32 = 52.0;
pub const TOGGLE_MARGIN: f32 = 16.0;

/// Area covered by the open panel, full height
pub fn panel_bounds() -> Rectangle {
    Rectangle::new(Point::ORIGIN, Size::new(PANEL_WIDTH, f32::INFINITY))
}

/// Slot holding the toggle, next to the panel when open and at the left edge when closed
pub fn toggle_bounds(is_open: bool) -> Rectangle {
    let x = if is_open { PANEL_WIDTH } else { 0.0 };
    let side = TOGGLE_SIZE + 2.0 * TOGGLE_MARGIN;
    Rectangle::new(Point::new(x, 0.0), Size::new(side, side))
}

/// Whether a press at `point` belongs to the panel or its toggle
pub fn hits_panel(point: Point, is_open: bool) -> bool {
    (is_open && panel_bounds().contains(point)) || toggle_bounds(is_open).contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_panel_hits() {
        assert!(hits_panel(Point::new(10.0, 900.0), true));
        assert!(hits_panel(Point::new(PANEL_WIDTH + 20.0, 20.0), true));
        assert!(!hits_panel(Point::new(PANEL_WIDTH + 20.0, 200.0), true));
        assert!(!hits_panel(Point::new(1000.0, 10.0), true));
    }

    #[test]
    fn test_closed_panel_only_covers_toggle() {
        assert!(hits_panel(Point::new(20.0, 20.0), false));
        assert!(!hits_panel(Point::new(20.0, 400.0), false));
        assert!(!hits_panel(Point::new(PANEL_WIDTH + 20.0, 20.0), false));
    }
}
