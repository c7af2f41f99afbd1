//! Layout pass: turns a composed [`View`] into concrete cell placements.
//!
//! ## Rules
//!
//! - A vertical stack places children top to bottom with its spacing between
//!   them; each child is as tall as its measured height.
//! - A horizontal stack (a row) is as tall as its tallest child. Cells keep
//!   their composed width; flexible children (spacers) share the leftover
//!   width equally.
//! - `Stretch` cells take the full row height, `Natural` cells keep the
//!   height reported by the [`Measure`] implementation.
//! - A scroll container lays its content out at full content height and
//!   records a [`ScrollState`] for its viewport.

use crate::geometry::{Region, Size};
use crate::scroll::ScrollState;
use crate::view::{Cell, CellSizing, View};

/// Per-cell width for `columns` equal columns:
/// `(available - spacing * (columns - 1) - 2 * padding) / columns`.
///
/// Not clamped; a configuration that leaves no room yields a negative width.
pub fn cell_width(available: f32, spacing: f32, padding: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    (available - spacing * (columns - 1.0) - 2.0 * padding) / columns
}

/// Supplies the natural (intrinsic) height of rendered cell content.
pub trait Measure<V> {
    fn natural_height(&self, content: &V, width: f32) -> f32;
}

impl<V, F> Measure<V> for F
where
    F: Fn(&V, f32) -> f32,
{
    fn natural_height(&self, content: &V, width: f32) -> f32 {
        self(content, width)
    }
}

/// Where a single item ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<Id> {
    /// Flat index of the item.
    pub index: usize,
    pub id: Id,
    pub row: usize,
    pub column: usize,
    /// Region in content coordinates (before scrolling).
    pub region: Region,
}

/// Result of laying out a composed view.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement<Id> {
    pub placements: Vec<Placement<Id>>,
    /// Size of the whole composed structure, padding included.
    pub content_size: Size,
    /// Scroll state of the scroll container, if there is one.
    pub scroll: Option<ScrollState>,
    /// Frame of the scroll container's viewport.
    pub scroll_frame: Option<Region>,
    pub show_indicators: bool,
}

impl<Id> Default for Arrangement<Id> {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
            content_size: Size::default(),
            scroll: None,
            scroll_frame: None,
            show_indicators: false,
        }
    }
}

impl<Id: Clone> Arrangement<Id> {
    /// The placement of the item at `index`.
    pub fn placement(&self, index: usize) -> Option<&Placement<Id>> {
        self.placements.iter().find(|p| p.index == index)
    }

    /// Number of laid-out rows.
    pub fn row_count(&self) -> usize {
        self.placements.iter().map(|p| p.row + 1).max().unwrap_or(0)
    }

    /// Placements that intersect the scrolled viewport, with regions shifted
    /// by the current scroll offset. Without a scroll container every
    /// placement is returned unchanged.
    pub fn visible(&self) -> impl Iterator<Item = Placement<Id>> + '_ {
        let window = self.scroll.zip(self.scroll_frame).map(|(scroll, frame)| {
            let window = scroll.visible_region().translate(frame.x, frame.y);
            (window, scroll.offset)
        });
        self.placements.iter().filter_map(move |p| match window {
            Some((window, offset)) => (!p.region.intersection(&window).is_empty()).then(|| Placement {
                region: p.region.translate(0.0, -offset),
                ..p.clone()
            }),
            None => Some(p.clone()),
        })
    }

    /// Scroll so the item at `index` is fully visible. Returns false when
    /// there is no scroll container or no such item.
    pub fn scroll_to_item(&mut self, index: usize) -> bool {
        let target = self.placement(index).map(|p| p.region);
        match (target, self.scroll_frame, self.scroll.as_mut()) {
            (Some(region), Some(frame), Some(scroll)) => {
                scroll.scroll_into_view(region.translate(0.0, -frame.y));
                true
            }
            _ => false,
        }
    }

    /// Whether a scroll indicator should currently be shown.
    pub fn shows_indicator(&self) -> bool {
        self.scroll
            .is_some_and(|scroll| scroll.shows_indicator(self.show_indicators))
    }
}

/// Lays out composed grid views.
pub struct GridLayout<'a, M> {
    measure: &'a M,
}

struct Walk<Id> {
    arrangement: Arrangement<Id>,
    row: usize,
}

impl<'a, M> GridLayout<'a, M> {
    pub fn new(measure: &'a M) -> Self {
        Self { measure }
    }

    /// Arrange `view` inside `available`.
    ///
    /// `available.width` is the width the grid was composed for;
    /// `available.height` is the viewport height used for scrolling.
    pub fn arrange<Id, V>(&self, view: &View<Id, V>, available: Region) -> Arrangement<Id>
    where
        Id: Clone,
        M: Measure<V>,
    {
        let mut walk = Walk {
            arrangement: Arrangement::default(),
            row: 0,
        };
        let height = self.measure_height(view, available.width);
        walk.arrangement.content_size = Size::new(available.width, height);
        self.place(view, available, &mut walk);

        log::debug!(
            "arranged {} cells in {} rows, content {}x{}",
            walk.arrangement.placements.len(),
            walk.row,
            available.width,
            height
        );
        walk.arrangement
    }

    fn natural_height<Id, V>(&self, cell: &Cell<Id, V>) -> f32
    where
        M: Measure<V>,
    {
        self.measure
            .natural_height(&cell.content, cell.width.max(0.0))
            .max(0.0)
    }

    /// Widths of the children of a horizontal stack.
    fn row_widths<Id, V>(children: &[View<Id, V>], spacing: f32, width: f32) -> Vec<f32> {
        let gaps = spacing * children.len().saturating_sub(1) as f32;
        let fixed: f32 = children
            .iter()
            .filter_map(|c| match c {
                View::Cell(cell) => Some(cell.width.max(0.0)),
                _ => None,
            })
            .sum();
        let flexible = children
            .iter()
            .filter(|c| !matches!(c, View::Cell(_)))
            .count();
        let share = if flexible == 0 {
            0.0
        } else {
            (width - fixed - gaps).max(0.0) / flexible as f32
        };

        children
            .iter()
            .map(|c| match c {
                View::Cell(cell) => cell.width.max(0.0),
                _ => share,
            })
            .collect()
    }

    fn measure_height<Id, V>(&self, view: &View<Id, V>, width: f32) -> f32
    where
        M: Measure<V>,
    {
        match view {
            View::Empty | View::Spacer => 0.0,
            View::Cell(cell) => self.natural_height(cell),
            View::Padding { insets, content } => {
                self.measure_height(&**content, width - 2.0 * insets.horizontal)
                    + 2.0 * insets.vertical
            }
            View::Scroll { content, .. } => self.measure_height(&**content, width),
            View::VStack { spacing, children } => {
                let gaps = spacing * children.len().saturating_sub(1) as f32;
                children
                    .iter()
                    .map(|c| self.measure_height(c, width))
                    .sum::<f32>()
                    + gaps
            }
            View::HStack { spacing, children } => Self::row_widths(children, *spacing, width)
                .into_iter()
                .zip(children)
                .map(|(w, c)| self.measure_height(c, w))
                .fold(0.0, f32::max),
        }
    }

    fn place<Id, V>(&self, view: &View<Id, V>, region: Region, walk: &mut Walk<Id>)
    where
        Id: Clone,
        M: Measure<V>,
    {
        match view {
            View::Empty | View::Spacer => {}
            View::Padding { insets, content } => self.place(&**content, region.inset(*insets), walk),
            View::Scroll {
                show_indicators,
                content,
            } => {
                let content_height = self.measure_height(&**content, region.width);
                if walk.arrangement.scroll.is_none() {
                    walk.arrangement.scroll = Some(ScrollState::new(content_height, region.size()));
                    walk.arrangement.scroll_frame = Some(region);
                    walk.arrangement.show_indicators = *show_indicators;
                }
                let content_region = Region::new(region.x, region.y, region.width, content_height);
                self.place(&**content, content_region, walk);
            }
            View::VStack { spacing, children } => {
                let mut y = region.y;
                for child in children {
                    let height = self.measure_height(child, region.width);
                    self.place(child, Region::new(region.x, y, region.width, height), walk);
                    y += height + spacing;
                }
            }
            View::HStack { spacing, children } => {
                let widths = Self::row_widths(children, *spacing, region.width);
                log::trace!("row {} at y={} height={}", walk.row, region.y, region.height);

                let mut x = region.x;
                let mut column = 0;
                for (child, width) in children.iter().zip(widths) {
                    let child_region = Region::new(x, region.y, width, region.height);
                    match child {
                        View::Cell(cell) => {
                            self.place_cell(cell, child_region, column, walk);
                            column += 1;
                        }
                        other => self.place(other, child_region, walk),
                    }
                    x += width + spacing;
                }
                walk.row += 1;
            }
            View::Cell(cell) => {
                let height = self.natural_height(cell);
                let cell_region = Region::new(region.x, region.y, cell.width, height);
                self.place_cell(cell, cell_region, 0, walk);
                walk.row += 1;
            }
        }
    }

    fn place_cell<Id, V>(&self, cell: &Cell<Id, V>, slot: Region, column: usize, walk: &mut Walk<Id>)
    where
        Id: Clone,
        M: Measure<V>,
    {
        let height = match cell.sizing {
            CellSizing::Stretch => slot.height,
            CellSizing::Natural => self.natural_height(cell),
        };
        walk.arrangement.placements.push(Placement {
            index: cell.index,
            id: cell.id.clone(),
            row: walk.row,
            column,
            region: Region::new(slot.x, slot.y, slot.width, height),
        });
    }
}
