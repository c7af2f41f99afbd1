//! Error types for gridview.
//!
//! Layout itself never fails: column counts are clamped and degenerate
//! geometry degrades visually. Errors only come from the ambient layers,
//! style parsing and logger installation.

use thiserror::Error;

/// Errors that can occur while configuring a grid.
///
/// # Examples
///
/// ```rust
/// use gridview::{GridConfig, GridError};
///
/// let err = GridConfig::from_style("columns: three;").unwrap_err();
/// assert!(matches!(err, GridError::InvalidValue { .. }));
/// ```
#[derive(Error, Debug)]
pub enum GridError {
    /// The style text is not a sequence of `property: value;` declarations.
    #[error("style syntax error: {0}")]
    InvalidSyntax(String),

    /// A declaration names a property the grid does not know.
    #[error("unknown style property: {0}")]
    UnknownProperty(String),

    /// A known property was given a value that does not parse.
    #[error("invalid value for `{property}`: {value}")]
    InvalidValue { property: String, value: String },

    /// An I/O error occurred while reading a style file.
    #[error("I/O error reading style")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, GridError>;
