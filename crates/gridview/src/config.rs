//! Grid layout configuration.
//!
//! Every parameter has a default; only the portrait column count is required.
//! Column counts are clamped to at least one. Spacing and padding are taken
//! as given.

use std::path::Path;

use crate::context::LayoutContext;
use crate::error::Result;
use crate::geometry::Spacing;

/// Default gap between rows and between cells.
pub const DEFAULT_SPACING: f32 = 10.0;
/// Default padding around the whole grid.
pub const DEFAULT_PADDING: f32 = 10.0;
/// Margin subtracted from the viewport width when no width is configured.
pub const DEFAULT_WIDTH_MARGIN: f32 = 20.0;

/// Where the grid's available width comes from.
///
/// This is the only source of the width used for cell sizing; it is
/// resolved against the layout context on every compose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvailableWidth {
    /// The host viewport width minus a margin.
    Viewport { margin: f32 },
    /// An explicit width, independent of the viewport.
    Fixed(f32),
}

impl AvailableWidth {
    pub fn resolve(&self, ctx: &LayoutContext) -> f32 {
        match *self {
            AvailableWidth::Viewport { margin } => ctx.viewport.width - margin,
            AvailableWidth::Fixed(width) => width,
        }
    }
}

impl Default for AvailableWidth {
    fn default() -> Self {
        AvailableWidth::Viewport {
            margin: DEFAULT_WIDTH_MARGIN,
        }
    }
}

/// Clamp a caller-supplied column count to the valid range.
pub(crate) fn clamp_columns(columns: i64) -> usize {
    if columns < 1 {
        log::warn!("column count {columns} clamped to 1");
        1
    } else {
        usize::try_from(columns).unwrap_or(usize::MAX)
    }
}

/// Layout parameters for a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    columns_portrait: usize,
    columns_landscape: Option<usize>,
    pub width: AvailableWidth,
    pub spacing: Spacing,
    pub padding: Spacing,
    pub scrollable: bool,
    pub show_indicators: bool,
    /// Let cells keep their natural height instead of stretching to the
    /// tallest cell in the row.
    pub auto_expand: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GridConfig {
    /// Create a configuration with the given portrait column count and
    /// defaults for everything else.
    pub fn new(columns: i64) -> Self {
        Self {
            columns_portrait: clamp_columns(columns),
            columns_landscape: None,
            width: AvailableWidth::default(),
            spacing: Spacing::all(DEFAULT_SPACING),
            padding: Spacing::all(DEFAULT_PADDING),
            scrollable: true,
            show_indicators: false,
            auto_expand: false,
        }
    }

    /// Parse a configuration from style declarations, starting from the
    /// defaults. The declarations must include `columns` or the portrait
    /// count stays at one.
    pub fn from_style(source: &str) -> Result<Self> {
        let mut config = Self::default();
        config.apply_style(source)?;
        Ok(config)
    }

    /// Read and apply a style file on top of this configuration.
    pub fn load_style(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let source = std::fs::read_to_string(path)?;
        self.apply_style(&source)
    }

    /// Apply style declarations on top of this configuration.
    ///
    /// Declarations are applied in order, so later ones win. Nothing is
    /// changed if any declaration fails to parse.
    pub fn apply_style(&mut self, source: &str) -> Result<()> {
        let declarations = crate::style::parse_declarations(source)?;
        let mut updated = self.clone();
        for declaration in &declarations {
            declaration.apply(&mut updated);
        }
        log::debug!("applied {} style declarations", declarations.len());
        *self = updated;
        Ok(())
    }

    pub fn with_columns(mut self, columns: i64) -> Self {
        self.set_columns(columns);
        self
    }

    pub fn with_landscape_columns(mut self, columns: i64) -> Self {
        self.set_landscape_columns(columns);
        self
    }

    pub fn with_width(mut self, width: AvailableWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn with_scroll_indicators(mut self, show: bool) -> Self {
        self.show_indicators = show;
        self
    }

    pub fn with_auto_expand(mut self, auto_expand: bool) -> Self {
        self.auto_expand = auto_expand;
        self
    }

    pub fn set_columns(&mut self, columns: i64) {
        self.columns_portrait = clamp_columns(columns);
    }

    pub fn set_landscape_columns(&mut self, columns: i64) {
        self.columns_landscape = Some(clamp_columns(columns));
    }

    /// Columns used in portrait orientation.
    pub fn portrait_columns(&self) -> usize {
        self.columns_portrait
    }

    /// Columns used in landscape orientation and on fixed-layout targets.
    /// Falls back to the portrait count when not configured.
    pub fn landscape_columns(&self) -> usize {
        self.columns_landscape.unwrap_or(self.columns_portrait)
    }

    /// The column count for the current render.
    pub fn effective_columns(&self, ctx: &LayoutContext) -> usize {
        if ctx.uses_landscape_columns() {
            self.landscape_columns()
        } else {
            self.portrait_columns()
        }
    }

    /// The available width for the current render.
    pub fn available_width(&self, ctx: &LayoutContext) -> f32 {
        self.width.resolve(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Orientation;
    use crate::geometry::Size;

    #[test]
    fn defaults_match_documented_values() {
        let config = GridConfig::new(3);
        assert_eq!(config.portrait_columns(), 3);
        assert_eq!(config.landscape_columns(), 3);
        assert_eq!(config.spacing, Spacing::all(10.0));
        assert_eq!(config.padding, Spacing::all(10.0));
        assert!(config.scrollable);
        assert!(!config.show_indicators);
        assert!(!config.auto_expand);
        assert_eq!(config.width, AvailableWidth::Viewport { margin: 20.0 });
    }

    #[test]
    fn zero_and_negative_columns_clamp_to_one() {
        assert_eq!(GridConfig::new(0).portrait_columns(), 1);
        assert_eq!(GridConfig::new(-4).portrait_columns(), 1);
        assert_eq!(
            GridConfig::new(2).with_landscape_columns(-1).landscape_columns(),
            1
        );
    }

    #[test]
    fn landscape_defaults_to_clamped_portrait() {
        let config = GridConfig::new(0);
        assert_eq!(config.landscape_columns(), 1);
    }

    #[test]
    fn effective_columns_follow_orientation() {
        let config = GridConfig::new(2).with_landscape_columns(4);
        let viewport = Size::new(400.0, 800.0);
        assert_eq!(
            config.effective_columns(&LayoutContext::new(Orientation::Portrait, viewport)),
            2
        );
        assert_eq!(
            config.effective_columns(&LayoutContext::new(Orientation::Landscape, viewport)),
            4
        );
        assert_eq!(
            config.effective_columns(&LayoutContext::new(Orientation::Fixed, viewport)),
            4
        );
    }

    #[test]
    fn available_width_resolves_once_from_context() {
        let ctx = LayoutContext::portrait(390.0, 844.0);
        assert_eq!(GridConfig::new(2).available_width(&ctx), 370.0);
        let fixed = GridConfig::new(2).with_width(AvailableWidth::Fixed(312.0));
        assert_eq!(fixed.available_width(&ctx), 312.0);
    }
}
