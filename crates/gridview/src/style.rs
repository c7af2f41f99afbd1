//! Declarative grid style parsing.
//!
//! Grids can be configured from a small CSS-like declaration list:
//!
//! ```text
//! /* phone layout */
//! columns: 2;
//! columns-landscape: 4;
//! width: auto;          /* viewport width minus width-margin */
//! width-margin: 24;
//! spacing: 8 12;        /* vertical horizontal */
//! padding: 10;
//! scrollable: true;
//! scroll-indicators: false;
//! auto-expand: true;
//! ```
//!
//! Block comments are allowed anywhere whitespace is, including inside a
//! value, and may contain `;`. The trailing `;` on the last declaration is
//! optional.
//!
//! Numbers are plain decimals with an optional leading `-`: `12`, `-3`,
//! `0.5`. A leading `+` or a bare fraction such as `.5` is rejected.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, tag, take_until, take_while1},
    character::complete::{char, digit1, multispace1},
    combinator::{all_consuming, map, map_res, not, opt, recognize, value},
    multi::{fold_many0, many0},
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::config::{AvailableWidth, DEFAULT_WIDTH_MARGIN, GridConfig};
use crate::error::{GridError, Result};
use crate::geometry::Spacing;

/// A single parsed style declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration {
    Columns(i64),
    LandscapeColumns(i64),
    /// `width: auto` - follow the viewport.
    WidthAuto,
    /// `width: <number>` - fixed available width.
    Width(f32),
    WidthMargin(f32),
    Spacing(Spacing),
    Padding(Spacing),
    Scrollable(bool),
    ScrollIndicators(bool),
    AutoExpand(bool),
}

impl Declaration {
    /// Parse the value of `property` into a declaration.
    pub fn parse(property: &str, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let parsed = match property {
            "columns" => value_of(parse_integer, raw).map(Declaration::Columns),
            "columns-landscape" => value_of(parse_integer, raw).map(Declaration::LandscapeColumns),
            "width" => value_of(parse_width, raw),
            "width-margin" => value_of(parse_number, raw).map(Declaration::WidthMargin),
            "spacing" => value_of(parse_spacing, raw).map(Declaration::Spacing),
            "padding" => value_of(parse_spacing, raw).map(Declaration::Padding),
            "scrollable" => value_of(parse_bool, raw).map(Declaration::Scrollable),
            "scroll-indicators" => value_of(parse_bool, raw).map(Declaration::ScrollIndicators),
            "auto-expand" => value_of(parse_bool, raw).map(Declaration::AutoExpand),
            _ => return Err(GridError::UnknownProperty(property.to_string())),
        };
        parsed.ok_or_else(|| GridError::InvalidValue {
            property: property.to_string(),
            value: raw.to_string(),
        })
    }

    /// Apply this declaration to a configuration.
    pub fn apply(&self, config: &mut GridConfig) {
        match *self {
            Declaration::Columns(columns) => config.set_columns(columns),
            Declaration::LandscapeColumns(columns) => config.set_landscape_columns(columns),
            Declaration::WidthAuto => {
                if let AvailableWidth::Fixed(_) = config.width {
                    config.width = AvailableWidth::Viewport {
                        margin: DEFAULT_WIDTH_MARGIN,
                    };
                }
            }
            Declaration::Width(width) => config.width = AvailableWidth::Fixed(width),
            Declaration::WidthMargin(margin) => config.width = AvailableWidth::Viewport { margin },
            Declaration::Spacing(spacing) => config.spacing = spacing,
            Declaration::Padding(padding) => config.padding = padding,
            Declaration::Scrollable(scrollable) => config.scrollable = scrollable,
            Declaration::ScrollIndicators(show) => config.show_indicators = show,
            Declaration::AutoExpand(auto_expand) => config.auto_expand = auto_expand,
        }
    }
}

/// Parse a declaration list.
pub fn parse_declarations(source: &str) -> Result<Vec<Declaration>> {
    let (rest, raw) = many0(parse_raw_declaration)(source)
        .map_err(|e| GridError::InvalidSyntax(e.to_string()))?;
    let (rest, _) = skip(rest).map_err(|e| GridError::InvalidSyntax(e.to_string()))?;

    if !rest.is_empty() {
        let snippet: String = rest.chars().take(24).collect();
        return Err(GridError::InvalidSyntax(format!("unexpected input near `{snippet}`")));
    }

    raw.into_iter()
        .map(|(property, value)| Declaration::parse(property, &value))
        .collect()
}

/// Run a value parser over the whole raw value.
fn value_of<'a, T>(parser: impl FnMut(&'a str) -> IResult<&'a str, T>, raw: &'a str) -> Option<T> {
    all_consuming(parser)(raw).ok().map(|(_, v)| v)
}

fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Skip whitespace and block comments.
fn skip(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((multispace1, comment))))(input)
}

/// Parses a property name (alphanumeric characters, dashes, and underscores).
fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Value text up to the terminating `;`, with comments replaced by a space.
fn parse_value(input: &str) -> IResult<&str, String> {
    fold_many0(
        alt((
            value(" ", comment),
            is_not(";/"),
            recognize(terminated(char('/'), not(char('*')))),
        )),
        String::new,
        |mut raw, piece| {
            raw.push_str(piece);
            raw
        },
    )(input)
}

/// Parse `name: value;`, returning the name and the raw value text.
fn parse_raw_declaration(input: &str) -> IResult<&str, (&str, String)> {
    let (input, _) = skip(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = tuple((skip, char(':')))(input)?;
    let (input, raw) = parse_value(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((input, (name, raw)))
}

fn parse_integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f32>(),
    )(input)
}

fn parse_bool(input: &str) -> IResult<&str, bool> {
    alt((value(true, tag("true")), value(false, tag("false"))))(input)
}

fn parse_width(input: &str) -> IResult<&str, Declaration> {
    alt((
        value(Declaration::WidthAuto, tag("auto")),
        map(parse_number, Declaration::Width),
    ))(input)
}

/// One value for both axes, or `vertical horizontal`.
fn parse_spacing(input: &str) -> IResult<&str, Spacing> {
    let (input, first) = parse_number(input)?;
    let (input, second) = opt(preceded(multispace1, parse_number))(input)?;
    Ok((input, Spacing::new(first, second.unwrap_or(first))))
}
