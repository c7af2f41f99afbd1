//! # gridview
//!
//! A responsive grid for identified items. The grid partitions its items
//! into rows, picks its column count from the current orientation, sizes
//! every cell from the available width, and composes a view tree that a host
//! toolkit maps onto its own stacks and scroll containers.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridview::{GridView, Identifiable, LayoutContext, View};
//!
//! #[derive(Identifiable)]
//! struct Photo {
//!     id: u64,
//!     title: String,
//! }
//!
//! let photos = (0..7).map(|id| Photo { id, title: format!("photo {id}") });
//! let grid = GridView::new(photos, 3, |photo: &Photo| photo.title.clone())
//!     .with_landscape_columns(4)
//!     .with_auto_expand(true);
//!
//! let view = grid.compose(&LayoutContext::portrait(390.0, 844.0));
//! assert_eq!(view.rows().len(), 3);
//! assert!(matches!(view.rows()[2].children(), [View::Cell(_), View::Spacer]));
//! ```
//!
//! ## Layout context
//!
//! Orientation and viewport size are host state. They are passed in as a
//! [`LayoutContext`] on every compose, so the same grid can be rendered for
//! any device without touching global state.

extern crate self as gridview;

pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod identity;
pub mod layout;
mod log_init;
pub mod partition;
pub mod scroll;
pub mod style;
pub mod testing;
pub mod view;

pub use config::{AvailableWidth, GridConfig};
pub use context::{LayoutContext, Orientation};
pub use error::{GridError, Result};
pub use geometry::{Region, Size, Spacing};
pub use grid::GridView;
pub use identity::Identifiable;
pub use layout::{Arrangement, GridLayout, Measure, Placement, cell_width};
pub use log_init::{init_logger, init_logger_with_level};
pub use partition::{RowPartition, RowSpan};
pub use scroll::ScrollState;
pub use view::{Cell, CellSizing, View};

// Re-export the log crate so users can use gridview::log::info!, etc.
pub use log;
pub use gridview_macros::Identifiable;
