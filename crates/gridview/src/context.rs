//! The render-time layout context.
//!
//! Orientation and viewport size are host state. They are passed in
//! explicitly on every compose so layout never queries global device state.

use crate::geometry::Size;

/// Device or window orientation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
    /// Targets with no meaningful orientation (desktop windows, fixed
    /// layouts). Grids treat this like landscape.
    Fixed,
}

impl Orientation {
    /// Derive the orientation of a viewport: wider than tall is landscape.
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Snapshot of the host state a grid reads while composing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub orientation: Orientation,
    pub viewport: Size,
}

impl LayoutContext {
    pub fn new(orientation: Orientation, viewport: Size) -> Self {
        Self {
            orientation,
            viewport,
        }
    }

    /// Build a context whose orientation follows the viewport's aspect.
    pub fn from_viewport(viewport: Size) -> Self {
        Self::new(Orientation::from_size(viewport), viewport)
    }

    /// Build a context for a target without orientation.
    pub fn fixed(viewport: Size) -> Self {
        Self::new(Orientation::Fixed, viewport)
    }

    pub fn portrait(width: f32, height: f32) -> Self {
        Self::new(Orientation::Portrait, Size::new(width, height))
    }

    pub fn landscape(width: f32, height: f32) -> Self {
        Self::new(Orientation::Landscape, Size::new(width, height))
    }

    /// Whether the landscape column count applies.
    pub fn uses_landscape_columns(&self) -> bool {
        matches!(
            self.orientation,
            Orientation::Landscape | Orientation::Fixed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_from_wide_viewport_is_landscape() {
        assert_eq!(
            Orientation::from_size(Size::new(844.0, 390.0)),
            Orientation::Landscape
        );
    }

    #[test]
    fn orientation_from_square_viewport_is_portrait() {
        assert_eq!(
            Orientation::from_size(Size::new(500.0, 500.0)),
            Orientation::Portrait
        );
    }

    #[test]
    fn fixed_context_uses_landscape_columns() {
        let ctx = LayoutContext::fixed(Size::new(300.0, 900.0));
        assert!(ctx.uses_landscape_columns());
        assert!(!LayoutContext::portrait(390.0, 844.0).uses_landscape_columns());
    }
}
