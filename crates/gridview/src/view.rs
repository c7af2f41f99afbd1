//! The composed view tree.
//!
//! A grid composes into nested containers that a host toolkit maps onto its
//! own primitives: padding, an optional scroll container, a vertical stack of
//! rows, and a horizontal stack of cells per row. Cell content is whatever
//! the caller's render function produced.

use crate::geometry::Spacing;

/// How a cell's height relates to the height of its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSizing {
    /// Fill the row height (the tallest cell in the row).
    Stretch,
    /// Keep the content's own height.
    Natural,
}

/// A single grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<Id, V> {
    /// Flat index of the item in the grid's snapshot.
    pub index: usize,
    /// Identity of the item, for host-side diffing.
    pub id: Id,
    pub width: f32,
    pub sizing: CellSizing,
    pub content: V,
}

/// A node in the composed view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum View<Id, V> {
    /// Nothing to show.
    Empty,
    /// Insets applied around the content.
    Padding {
        insets: Spacing,
        content: Box<View<Id, V>>,
    },
    /// A vertically scrolling container.
    Scroll {
        show_indicators: bool,
        content: Box<View<Id, V>>,
    },
    /// Children stacked top to bottom.
    VStack {
        spacing: f32,
        children: Vec<View<Id, V>>,
    },
    /// Children laid out left to right.
    HStack {
        spacing: f32,
        children: Vec<View<Id, V>>,
    },
    Cell(Cell<Id, V>),
    /// Flexible space that absorbs leftover width in a row.
    Spacer,
}

impl<Id, V> View<Id, V> {
    pub fn padded(insets: Spacing, content: View<Id, V>) -> Self {
        View::Padding {
            insets,
            content: Box::new(content),
        }
    }

    pub fn scroll(show_indicators: bool, content: View<Id, V>) -> Self {
        View::Scroll {
            show_indicators,
            content: Box::new(content),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, View::Empty)
    }

    pub fn children(&self) -> &[View<Id, V>] {
        match self {
            View::VStack { children, .. } | View::HStack { children, .. } => children,
            View::Padding { content, .. } | View::Scroll { content, .. } => {
                std::slice::from_ref(&**content)
            }
            View::Empty | View::Cell(_) | View::Spacer => &[],
        }
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a View<Id, V>)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// All cells in the tree, in visual order.
    pub fn cells(&self) -> Vec<&Cell<Id, V>> {
        let mut cells = Vec::new();
        self.walk(&mut |node| {
            if let View::Cell(cell) = node {
                cells.push(cell);
            }
        });
        cells
    }

    /// Whether the tree contains a scroll container.
    pub fn has_scroll(&self) -> bool {
        let mut found = false;
        self.walk(&mut |node| found |= matches!(node, View::Scroll { .. }));
        found
    }

    /// The row stacks (horizontal stacks) in top-to-bottom order.
    pub fn rows(&self) -> Vec<&View<Id, V>> {
        let mut rows = Vec::new();
        self.walk(&mut |node| {
            if matches!(node, View::HStack { .. }) {
                rows.push(node);
            }
        });
        rows
    }
}
