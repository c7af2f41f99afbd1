//! Convenience re-export of the `gridview` crate.

pub use gridview::*;
