//! Test utilities for snapshot testing grid layouts.
//!
//! `TestCanvas` paints an [`Arrangement`] into a grid of characters, one
//! character per length unit, so layouts can be compared as plain text.
//!
//! # Example
//!
//! ```ignore
//! use gridview::testing::{TestCanvas, index_label};
//!
//! let arrangement = grid.arrange(&ctx, &|_: &Tile, _| 2.0);
//! let mut canvas = TestCanvas::fit(&arrangement);
//! canvas.paint_arrangement(&arrangement, |p| index_label(p.index));
//! insta::assert_snapshot!(canvas.to_text_trimmed());
//! ```

use crate::geometry::Region;
use crate::layout::{Arrangement, Placement};

/// Glyph used for the scroll indicator thumb.
pub const INDICATOR: char = '┃';

/// A character grid for rendering arrangements in tests and demos.
pub struct TestCanvas {
    cells: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

/// Label for the item at `index`: `0`-`9`, then `a`-`z`, then wrapping.
pub fn index_label(index: usize) -> char {
    char::from_digit((index % 36) as u32, 36).unwrap_or('?')
}

impl TestCanvas {
    /// Create a blank canvas with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
            width,
            height,
        }
    }

    /// Create a canvas large enough for the arrangement's full content.
    pub fn fit<Id>(arrangement: &Arrangement<Id>) -> Self {
        let size = arrangement.content_size;
        Self::new(
            size.width.max(0.0).ceil() as usize,
            size.height.max(0.0).ceil() as usize,
        )
    }

    /// Returns the canvas dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Character at (x, y), if on the canvas.
    pub fn symbol_at(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Fill a region with `symbol`, clipped to the canvas.
    ///
    /// Edges are rounded to the nearest unit.
    pub fn paint(&mut self, region: Region, symbol: char) {
        let clip = |v: f32, max: usize| (v.round().max(0.0) as usize).min(max);
        let x0 = clip(region.x, self.width);
        let x1 = clip(region.right(), self.width);
        let y0 = clip(region.y, self.height);
        let y1 = clip(region.bottom(), self.height);

        for row in &mut self.cells[y0..y1.max(y0)] {
            for cell in &mut row[x0..x1.max(x0)] {
                *cell = symbol;
            }
        }
    }

    /// Paint every placement at its unscrolled position.
    pub fn paint_arrangement<Id>(
        &mut self,
        arrangement: &Arrangement<Id>,
        label: impl Fn(&Placement<Id>) -> char,
    ) {
        for placement in &arrangement.placements {
            self.paint(placement.region, label(placement));
        }
    }

    /// Paint what is visible through the scroll viewport, plus the scroll
    /// indicator when it is enabled and the content overflows.
    pub fn paint_visible<Id: Clone>(
        &mut self,
        arrangement: &Arrangement<Id>,
        label: impl Fn(&Placement<Id>) -> char,
    ) {
        let frame = arrangement.scroll_frame;
        for placement in arrangement.visible() {
            let region = match frame {
                Some(frame) => placement.region.intersection(&frame),
                None => placement.region,
            };
            self.paint(region, label(&placement));
        }

        if let (Some(scroll), Some(frame)) = (arrangement.scroll, frame) {
            if arrangement.shows_indicator() {
                let view = frame.height;
                let thumb = (view * view / scroll.content_height).max(1.0);
                let top = frame.y + scroll.scroll_percent() * (view - thumb);
                self.paint(Region::new(frame.right() - 1.0, top, 1.0, thumb), INDICATOR);
            }
        }
    }

    /// Convert to plain text, trimming trailing whitespace on each line and
    /// trailing blank lines.
    pub fn to_text_trimmed(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string()
    }
}
