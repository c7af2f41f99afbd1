//! Geometry primitives in device-independent length units.

/// The dimensions of a viewport, a cell or a composed view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new Size with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangular region for layout and clipping.
///
/// Width and height are clamped to be non-negative; a configuration that
/// produces a negative cell width ends up as an empty region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    /// Create a new region, clamping width and height to be non-negative.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Region at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the intersection of this region with another.
    /// If there is no overlap, returns an empty region.
    pub fn intersection(&self, other: &Region) -> Region {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Region {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            }
        } else {
            Region::default()
        }
    }

    /// Returns true if the region has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrink the region by `insets` on every side.
    pub fn inset(&self, insets: Spacing) -> Region {
        Region::new(
            self.x + insets.horizontal,
            self.y + insets.vertical,
            self.width - 2.0 * insets.horizontal,
            self.height - 2.0 * insets.vertical,
        )
    }

    /// Move the region by the given offsets.
    pub fn translate(&self, dx: f32, dy: f32) -> Region {
        Region {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// A pair of vertical and horizontal lengths.
///
/// Used both for the gaps between rows/cells and for the padding around
/// the whole grid. Values are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Spacing {
    pub fn new(vertical: f32, horizontal: f32) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Same length on both axes.
    pub fn all(value: f32) -> Self {
        Self::new(value, value)
    }
}
