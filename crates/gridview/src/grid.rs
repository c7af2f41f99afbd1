//! GridView - a responsive grid of identified items.
//!
//! The grid owns a snapshot of its items and a render function. Each call
//! to [`GridView::compose`] resolves the column count for the current
//! orientation, partitions the items into rows and builds the view tree:
//!
//! ```text
//! Padding
//! └── Scroll (when scrollable)
//!     └── VStack (vertical spacing)
//!         ├── HStack (horizontal spacing): Cell Cell Cell
//!         └── HStack: Cell Spacer          (trailing partial row)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gridview::{GridView, LayoutContext};
//!
//! let grid = GridView::new(0..10u32, 3, |n: &u32| format!("#{n}"))
//!     .with_landscape_columns(5);
//!
//! let portrait = grid.compose(&LayoutContext::portrait(390.0, 844.0));
//! assert_eq!(portrait.rows().len(), 4);
//!
//! let landscape = grid.compose(&LayoutContext::landscape(844.0, 390.0));
//! assert_eq!(landscape.rows().len(), 2);
//! ```

use std::marker::PhantomData;

use crate::config::{AvailableWidth, GridConfig};
use crate::context::LayoutContext;
use crate::error::Result;
use crate::geometry::{Region, Size};
use crate::identity::{Identifiable, duplicate_ids};
use crate::layout::{Arrangement, GridLayout, Measure, cell_width};
use crate::partition::{RowPartition, RowSpan};
use crate::view::{Cell, CellSizing, View};

/// A grid of items rendered through a caller-supplied function.
pub struct GridView<T, V, F> {
    items: Vec<T>,
    config: GridConfig,
    render: F,
    _content: PhantomData<fn() -> V>,
}

impl<T, V, F> GridView<T, V, F>
where
    T: Identifiable,
    F: Fn(&T) -> V,
{
    /// Create a grid over a snapshot of `items` with `columns` columns in
    /// portrait orientation. Column counts below one are clamped.
    pub fn new(items: impl IntoIterator<Item = T>, columns: i64, render: F) -> Self {
        let items: Vec<T> = items.into_iter().collect();

        let duplicates = duplicate_ids(&items);
        if !duplicates.is_empty() {
            log::warn!(
                "grid items share {} identities: {:?}",
                duplicates.len(),
                duplicates
            );
        }

        Self {
            items,
            config: GridConfig::new(columns),
            render,
            _content: PhantomData,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply style declarations on top of the current configuration.
    pub fn with_style(mut self, source: &str) -> Result<Self> {
        self.config.apply_style(source)?;
        Ok(self)
    }

    /// Set the column count for landscape and fixed-layout targets.
    pub fn with_landscape_columns(mut self, columns: i64) -> Self {
        self.config.set_landscape_columns(columns);
        self
    }

    /// Use a fixed available width instead of following the viewport.
    pub fn with_width(mut self, width: f32) -> Self {
        self.config.width = AvailableWidth::Fixed(width);
        self
    }

    /// Follow the viewport width, minus `margin`.
    pub fn with_width_margin(mut self, margin: f32) -> Self {
        self.config.width = AvailableWidth::Viewport { margin };
        self
    }

    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.config.spacing.vertical = spacing;
        self
    }

    pub fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.config.spacing.horizontal = spacing;
        self
    }

    pub fn with_vertical_padding(mut self, padding: f32) -> Self {
        self.config.padding.vertical = padding;
        self
    }

    pub fn with_horizontal_padding(mut self, padding: f32) -> Self {
        self.config.padding.horizontal = padding;
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.config.scrollable = scrollable;
        self
    }

    pub fn with_scroll_indicators(mut self, show: bool) -> Self {
        self.config.show_indicators = show;
        self
    }

    /// Let each cell keep its natural height instead of stretching to the
    /// tallest cell in its row.
    pub fn with_auto_expand(mut self, auto_expand: bool) -> Self {
        self.config.auto_expand = auto_expand;
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flat index of the item with the given identity.
    pub fn index_of(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == *id)
    }

    /// Column count for the current render.
    pub fn effective_columns(&self, ctx: &LayoutContext) -> usize {
        self.config.effective_columns(ctx)
    }

    /// Row structure for the current render.
    pub fn partition(&self, ctx: &LayoutContext) -> RowPartition {
        RowPartition::new(self.items.len(), self.effective_columns(ctx))
    }

    /// Width of every cell for the current render.
    pub fn cell_width(&self, ctx: &LayoutContext) -> f32 {
        cell_width(
            self.config.available_width(ctx),
            self.config.spacing.horizontal,
            self.config.padding.horizontal,
            self.effective_columns(ctx),
        )
    }

    /// Build the view tree for the current render.
    ///
    /// Pure: the same items, configuration and context always produce an
    /// equal tree.
    pub fn compose(&self, ctx: &LayoutContext) -> View<T::Id, V> {
        let partition = self.partition(ctx);
        if partition.is_empty() {
            log::debug!("grid is empty, composing padding only");
            return View::padded(self.config.padding, View::Empty);
        }

        let width = self.cell_width(ctx);
        let sizing = if self.config.auto_expand {
            CellSizing::Natural
        } else {
            CellSizing::Stretch
        };

        log::debug!(
            "composing {} items: {:?} orientation, {} columns, {} rows, cell width {}",
            partition.item_count(),
            ctx.orientation,
            partition.columns(),
            partition.row_count(),
            width
        );

        let rows = partition
            .rows()
            .map(|row| self.compose_row(&row, width, sizing))
            .collect();
        let stack = View::VStack {
            spacing: self.config.spacing.vertical,
            children: rows,
        };

        let body = if self.config.scrollable {
            View::scroll(self.config.show_indicators, stack)
        } else {
            stack
        };
        View::padded(self.config.padding, body)
    }

    fn compose_row(&self, row: &RowSpan, width: f32, sizing: CellSizing) -> View<T::Id, V> {
        log::trace!("row {}: items {:?}", row.index, row.range);

        let mut children: Vec<View<T::Id, V>> = self.items[row.range.clone()]
            .iter()
            .zip(row.range.clone())
            .map(|(item, index)| {
                View::Cell(Cell {
                    index,
                    id: item.id(),
                    width,
                    sizing,
                    content: (self.render)(item),
                })
            })
            .collect();

        // Keep a partial row left-aligned.
        if row.trailing {
            children.push(View::Spacer);
        }

        View::HStack {
            spacing: self.config.spacing.horizontal,
            children,
        }
    }

    /// Compose and lay out the grid for the current render.
    ///
    /// The grid is laid out at its available width; the viewport height
    /// bounds the scroll container.
    pub fn arrange<M>(&self, ctx: &LayoutContext, measure: &M) -> Arrangement<T::Id>
    where
        M: Measure<V>,
    {
        let view = self.compose(ctx);
        let region = Region::from_size(Size::new(
            self.config.available_width(ctx),
            ctx.viewport.height,
        ));
        GridLayout::new(measure).arrange(&view, region)
    }
}

impl<T, V, F> std::fmt::Debug for GridView<T, V, F>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridView")
            .field("items", &self.items)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Orientation;
    use crate::geometry::{Size, Spacing};

    fn numbers(n: u32, columns: i64) -> GridView<u32, u32, impl Fn(&u32) -> u32> {
        GridView::new(0..n, columns, |n: &u32| *n).with_width(312.0)
    }

    fn portrait() -> LayoutContext {
        LayoutContext::portrait(390.0, 844.0)
    }

    fn row_indices(view: &View<u32, u32>) -> Vec<Vec<usize>> {
        view.rows()
            .iter()
            .map(|row| {
                row.children()
                    .iter()
                    .filter_map(|c| match c {
                        View::Cell(cell) => Some(cell.index),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn ten_items_in_three_columns() {
        let view = numbers(10, 3).compose(&portrait());
        assert_eq!(
            row_indices(&view),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
        );

        // Only the trailing row gets a spacer.
        let rows = view.rows();
        assert!(matches!(rows[3].children().last(), Some(View::Spacer)));
        assert!(!rows[..3]
            .iter()
            .any(|r| r.children().iter().any(|c| matches!(c, View::Spacer))));
    }

    #[test]
    fn nine_items_fill_three_rows_exactly() {
        let view = numbers(9, 3).compose(&portrait());
        assert_eq!(row_indices(&view).len(), 3);
        assert!(view.rows().iter().all(|r| r.children().len() == 3));
    }

    #[test]
    fn empty_grid_is_padding_without_scroll() {
        let view = numbers(0, 3).compose(&portrait());
        assert_eq!(view, View::padded(Spacing::all(10.0), View::Empty));
        assert!(!view.has_scroll());
    }

    #[test]
    fn cells_use_computed_width() {
        let view = numbers(4, 3).compose(&portrait());
        let expected = 272.0 / 3.0;
        assert!(view.cells().iter().all(|c| c.width == expected));
    }

    #[test]
    fn scrollable_wraps_rows_in_scroll() {
        let view = numbers(4, 2).with_scroll_indicators(true).compose(&portrait());
        match view {
            View::Padding { content, .. } => match *content {
                View::Scroll {
                    show_indicators, ..
                } => assert!(show_indicators),
                other => panic!("expected scroll, got {other:?}"),
            },
            other => panic!("expected padding, got {other:?}"),
        }
    }

    #[test]
    fn non_scrollable_puts_stack_under_padding() {
        let view = numbers(4, 2).with_scrollable(false).compose(&portrait());
        assert!(!view.has_scroll());
        assert!(matches!(
            view.children().first(),
            Some(View::VStack { .. })
        ));
    }

    #[test]
    fn auto_expand_switches_cells_to_natural() {
        let stretch = numbers(3, 3).compose(&portrait());
        assert!(stretch.cells().iter().all(|c| c.sizing == CellSizing::Stretch));

        let natural = numbers(3, 3).with_auto_expand(true).compose(&portrait());
        assert!(natural.cells().iter().all(|c| c.sizing == CellSizing::Natural));
    }

    #[test]
    fn orientation_switches_columns() {
        let grid = numbers(12, 2).with_landscape_columns(4);
        let landscape = LayoutContext::new(Orientation::Landscape, Size::new(844.0, 390.0));
        let fixed = LayoutContext::fixed(Size::new(800.0, 600.0));

        assert_eq!(grid.partition(&portrait()).row_count(), 6);
        assert_eq!(grid.partition(&landscape).row_count(), 3);
        assert_eq!(grid.partition(&fixed).row_count(), 3);
    }

    #[test]
    fn clamped_columns_still_compose() {
        let view = numbers(3, 0).compose(&portrait());
        assert_eq!(row_indices(&view), vec![vec![0], vec![1], vec![2]]);
        let view = numbers(3, -5).with_landscape_columns(-1).compose(&portrait());
        assert_eq!(view.rows().len(), 3);
    }

    #[test]
    fn compose_is_idempotent() {
        let grid = numbers(10, 3);
        assert_eq!(grid.compose(&portrait()), grid.compose(&portrait()));
    }

    #[test]
    fn snapshot_is_independent_of_source() {
        let mut source = vec![1u32, 2, 3];
        let grid = GridView::new(source.clone(), 3, |n: &u32| *n);
        source.push(4);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn viewport_width_feeds_cell_width() {
        let grid = GridView::new(0..3u32, 3, |n: &u32| *n);
        // (390 - 20) - 2 * 10 spacing - 2 * 10 padding
        assert_eq!(grid.cell_width(&portrait()), 330.0 / 3.0);
    }

    #[test]
    fn index_of_finds_item_by_identity() {
        let grid = numbers(5, 2);
        assert_eq!(grid.index_of(&3), Some(3));
        assert_eq!(grid.index_of(&42), None);
    }
}
