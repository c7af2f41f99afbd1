//! Vertical scroll state for a scrolling grid.
//!
//! The grid only scrolls vertically: rows extend downwards while the cell
//! width always fits the available width.

use crate::geometry::{Region, Size};

/// Scroll position of a grid inside its viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Current scroll offset from the top of the content.
    pub offset: f32,
    /// Height of the scrolled content.
    pub content_height: f32,
    /// Size of the visible viewport.
    pub viewport: Size,
}

impl ScrollState {
    pub fn new(content_height: f32, viewport: Size) -> Self {
        Self {
            offset: 0.0,
            content_height,
            viewport,
        }
    }

    /// Maximum scroll offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    /// Whether the content overflows the viewport.
    pub fn can_scroll(&self) -> bool {
        self.content_height > self.viewport.height
    }

    /// Current position as a 0.0-1.0 fraction.
    pub fn scroll_percent(&self) -> f32 {
        let max = self.max_offset();
        if max == 0.0 { 0.0 } else { self.offset / max }
    }

    /// Scroll up by the given amount (clamped to bounds).
    pub fn scroll_up(&mut self, amount: f32) {
        self.scroll_to(self.offset - amount);
    }

    /// Scroll down by the given amount (clamped to bounds).
    pub fn scroll_down(&mut self, amount: f32) {
        self.scroll_to(self.offset + amount);
    }

    /// Scroll to an absolute offset (clamped to bounds).
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// Scroll just far enough that `region` (in content coordinates) is
    /// fully visible, preferring its top edge when it is taller than the
    /// viewport.
    pub fn scroll_into_view(&mut self, region: Region) {
        if region.y < self.offset || region.height > self.viewport.height {
            self.scroll_to(region.y);
        } else if region.bottom() > self.offset + self.viewport.height {
            self.scroll_to(region.bottom() - self.viewport.height);
        }
    }

    /// Update the viewport, keeping the offset in bounds.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll_to(self.offset);
    }

    /// Update the content height, keeping the offset in bounds.
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        self.scroll_to(self.offset);
    }

    /// The visible window in content coordinates.
    pub fn visible_region(&self) -> Region {
        Region::new(0.0, self.offset, self.viewport.width, self.viewport.height)
    }

    /// Whether a scroll indicator should be drawn.
    pub fn shows_indicator(&self, enabled: bool) -> bool {
        enabled && self.can_scroll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(content: f32, viewport: f32) -> ScrollState {
        ScrollState::new(content, Size::new(100.0, viewport))
    }

    #[test]
    fn max_offset_is_overflow() {
        assert_eq!(state(300.0, 100.0).max_offset(), 200.0);
        assert_eq!(state(50.0, 100.0).max_offset(), 0.0);
    }

    #[test]
    fn scroll_down_clamps_to_max() {
        let mut s = state(200.0, 100.0);
        s.scroll_down(25.0);
        assert_eq!(s.offset, 25.0);
        s.scroll_down(100.0);
        assert_eq!(s.offset, 100.0);
    }

    #[test]
    fn scroll_up_clamps_to_zero() {
        let mut s = state(200.0, 100.0);
        s.offset = 50.0;
        s.scroll_up(25.0);
        assert_eq!(s.offset, 25.0);
        s.scroll_up(100.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn scroll_percent_without_overflow_is_zero() {
        let mut s = state(50.0, 100.0);
        s.scroll_down(10.0);
        assert_eq!(s.scroll_percent(), 0.0);
    }

    #[test]
    fn scroll_into_view_reveals_lower_region() {
        let mut s = state(500.0, 100.0);
        s.scroll_into_view(Region::new(0.0, 150.0, 100.0, 30.0));
        assert_eq!(s.offset, 80.0);
        s.scroll_into_view(Region::new(0.0, 20.0, 100.0, 30.0));
        assert_eq!(s.offset, 20.0);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut s = state(300.0, 100.0);
        s.scroll_to(200.0);
        s.set_content_height(150.0);
        assert_eq!(s.offset, 50.0);
    }

    #[test]
    fn indicator_needs_overflow_and_flag() {
        assert!(state(300.0, 100.0).shows_indicator(true));
        assert!(!state(300.0, 100.0).shows_indicator(false));
        assert!(!state(80.0, 100.0).shows_indicator(true));
    }

    #[test]
    fn viewport_changes_keep_offset_in_bounds() {
        let mut s = ScrollState::new(400.0, Size::new(390.0, 300.0));
        s.scroll_to(100.0);
        assert_eq!(s.offset, 100.0);

        // Growing the viewport shrinks the overflow below the current offset.
        s.set_viewport(Size::new(844.0, 350.0));
        assert_eq!(s.offset, 50.0);
        assert_eq!(s.visible_region(), Region::new(0.0, 50.0, 844.0, 350.0));

        s.set_viewport(Size::new(390.0, 100.0));
        assert_eq!(s.offset, 50.0);
        s.scroll_down(1000.0);
        assert_eq!(s.offset, 300.0);
        assert_eq!(s.scroll_percent(), 1.0);
    }
}
