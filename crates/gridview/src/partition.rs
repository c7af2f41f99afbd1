//! Row partitioning of a flat item sequence.
//!
//! Items are assigned row-major: item `i` lands in row `i / C`, column
//! `i % C`. The final row holds `N % C` items when the count does not divide
//! evenly; it is never padded or stretched.

use std::ops::Range;

/// The row structure of `item_count` items laid out in `columns` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPartition {
    item_count: usize,
    columns: usize,
}

/// One row of a partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpan {
    /// Row index, top to bottom.
    pub index: usize,
    /// Flat item indices in this row, left to right.
    pub range: Range<usize>,
    /// Whether this is the trailing partial row.
    pub trailing: bool,
}

impl RowSpan {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl RowPartition {
    /// Partition `item_count` items. A column count of zero is treated as one.
    pub fn new(item_count: usize, columns: usize) -> Self {
        Self {
            item_count,
            columns: columns.max(1),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of rows holding exactly `columns` items.
    pub fn full_rows(&self) -> usize {
        self.item_count / self.columns
    }

    /// Number of items in the trailing partial row (zero when there is none).
    pub fn trailing_len(&self) -> usize {
        self.item_count % self.columns
    }

    pub fn has_trailing(&self) -> bool {
        self.trailing_len() > 0
    }

    /// Total rows, `ceil(item_count / columns)`.
    pub fn row_count(&self) -> usize {
        self.full_rows() + usize::from(self.has_trailing())
    }

    /// The row at `index`, if it exists.
    pub fn row(&self, index: usize) -> Option<RowSpan> {
        if index >= self.row_count() {
            return None;
        }
        let start = index * self.columns;
        let end = (start + self.columns).min(self.item_count);
        Some(RowSpan {
            index,
            range: start..end,
            trailing: index == self.full_rows(),
        })
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> Rows {
        Rows {
            partition: *self,
            next: 0,
        }
    }

    /// `(row, column)` of a flat item index.
    pub fn position_of(&self, item: usize) -> Option<(usize, usize)> {
        (item < self.item_count).then(|| (item / self.columns, item % self.columns))
    }
}

/// Iterator over the rows of a [`RowPartition`].
#[derive(Debug, Clone)]
pub struct Rows {
    partition: RowPartition,
    next: usize,
}

impl Iterator for Rows {
    type Item = RowSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.partition.row(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.partition.row_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}
