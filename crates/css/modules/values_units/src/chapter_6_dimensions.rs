//! CSS Values & Units Level 4 — §6 Distance units (lengths).
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>

use core::fmt;
use core::str::FromStr;

use cssparser::{Parser, ParserInput, Token};

use crate::ParseError;

/// CSS reference pixels per inch.
const PX_PER_IN: f32 = 96.0;

/// Supported `<length>` units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Pixels,
    Points,
    Picas,
    Inches,
    Centimeters,
    Millimeters,
    QuarterMillimeters,
    /// Relative to the box's own font size.
    Ems,
    /// Relative to the root box's font size.
    RootEms,
    /// Relative to the advance of `0` in the box's font.
    ZeroAdvances,
    ViewportWidth,
    ViewportHeight,
    ViewportMin,
    ViewportMax,
}

impl LengthUnit {
    /// Unit for a CSS unit identifier, matched ASCII case-insensitively.
    pub fn from_css(unit: &str) -> Option<Self> {
        Some(match unit.to_ascii_lowercase().as_str() {
            "px" => Self::Pixels,
            "pt" => Self::Points,
            "pc" => Self::Picas,
            "in" => Self::Inches,
            "cm" => Self::Centimeters,
            "mm" => Self::Millimeters,
            "q" => Self::QuarterMillimeters,
            "em" => Self::Ems,
            "rem" => Self::RootEms,
            "ch" => Self::ZeroAdvances,
            "vw" => Self::ViewportWidth,
            "vh" => Self::ViewportHeight,
            "vmin" => Self::ViewportMin,
            "vmax" => Self::ViewportMax,
            _ => return None,
        })
    }

    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Points => "pt",
            Self::Picas => "pc",
            Self::Inches => "in",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::QuarterMillimeters => "Q",
            Self::Ems => "em",
            Self::RootEms => "rem",
            Self::ZeroAdvances => "ch",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
            Self::ViewportMin => "vmin",
            Self::ViewportMax => "vmax",
        }
    }

    /// Pixels per unit for the absolute units (§6.2).
    const fn absolute_scale(self) -> Option<f32> {
        match self {
            Self::Pixels => Some(1.0),
            Self::Points => Some(PX_PER_IN / 72.0),
            Self::Picas => Some(PX_PER_IN / 6.0),
            Self::Inches => Some(PX_PER_IN),
            Self::Centimeters => Some(PX_PER_IN / 2.54),
            Self::Millimeters => Some(PX_PER_IN / 25.4),
            Self::QuarterMillimeters => Some(PX_PER_IN / 101.6),
            Self::Ems
            | Self::RootEms
            | Self::ZeroAdvances
            | Self::ViewportWidth
            | Self::ViewportHeight
            | Self::ViewportMin
            | Self::ViewportMax => None,
        }
    }
}

/// A CSS `<length>` value with unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const ZERO: Self = Self::px(0.0);

    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Pixels)
    }

    pub const fn pt(value: f32) -> Self {
        Self::new(value, LengthUnit::Points)
    }

    pub const fn em(value: f32) -> Self {
        Self::new(value, LengthUnit::Ems)
    }

    pub const fn rem(value: f32) -> Self {
        Self::new(value, LengthUnit::RootEms)
    }

    pub const fn ch(value: f32) -> Self {
        Self::new(value, LengthUnit::ZeroAdvances)
    }

    pub const fn vw(value: f32) -> Self {
        Self::new(value, LengthUnit::ViewportWidth)
    }

    pub const fn vh(value: f32) -> Self {
        Self::new(value, LengthUnit::ViewportHeight)
    }

    pub const fn vmin(value: f32) -> Self {
        Self::new(value, LengthUnit::ViewportMin)
    }

    pub const fn vmax(value: f32) -> Self {
        Self::new(value, LengthUnit::ViewportMax)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}", self.value, self.unit.as_css())
    }
}

impl FromStr for Length {
    type Err = ParseError;

    /// Parse a whole string as one `<length>`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parser_input = ParserInput::new(text);
        let mut parser = Parser::new(&mut parser_input);
        let length = parse_length(&mut parser)?;
        parser
            .expect_exhausted()
            .map_err(|_| ParseError::UnexpectedToken)?;
        Ok(length)
    }
}

/// Viewport metrics used to evaluate viewport-relative units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width_px: f32,
    pub height_px: f32,
}

/// Everything relative units resolve against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthBasis {
    pub font_size_px: f32,
    pub root_font_size_px: f32,
    /// Advance of `0` in the box's font, for `ch`.
    pub zero_advance_px: f32,
    pub viewport: Option<Viewport>,
}

/// Compute the pixel value of `length`.
///
/// Returns `None` for non-finite values, and for viewport units when no viewport is
/// known.
pub fn compute_length_px(length: Length, basis: &LengthBasis) -> Option<f32> {
    if !length.value.is_finite() {
        return None;
    }
    if let Some(scale) = length.unit.absolute_scale() {
        return Some(length.value * scale);
    }
    let percent = |reference: f32| length.value * reference / 100.0;
    let resolved = match length.unit {
        LengthUnit::Ems => length.value * basis.font_size_px,
        LengthUnit::RootEms => length.value * basis.root_font_size_px,
        LengthUnit::ZeroAdvances => length.value * basis.zero_advance_px,
        LengthUnit::ViewportWidth => percent(basis.viewport?.width_px),
        LengthUnit::ViewportHeight => percent(basis.viewport?.height_px),
        LengthUnit::ViewportMin => {
            let viewport = basis.viewport?;
            percent(viewport.width_px.min(viewport.height_px))
        }
        LengthUnit::ViewportMax => {
            let viewport = basis.viewport?;
            percent(viewport.width_px.max(viewport.height_px))
        }
        LengthUnit::Pixels
        | LengthUnit::Points
        | LengthUnit::Picas
        | LengthUnit::Inches
        | LengthUnit::Centimeters
        | LengthUnit::Millimeters
        | LengthUnit::QuarterMillimeters => length.value,
    };
    resolved.is_finite().then_some(resolved)
}

/// Parse a CSS `<length>` (§6). Unitless zero is accepted as `0px`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a dimension or a
/// zero, and `ParseError::UnknownUnit` for dimensions in an unsupported unit.
pub fn parse_length(input: &mut Parser<'_, '_>) -> Result<Length, ParseError> {
    let token = input.next().map_err(|_| ParseError::UnexpectedToken)?;
    match *token {
        Token::Dimension {
            value, ref unit, ..
        } => LengthUnit::from_css(unit)
            .map(|unit_kind| Length::new(value, unit_kind))
            .ok_or(ParseError::UnknownUnit),
        Token::Number { value: 0.0, .. } => Ok(Length::ZERO),
        _ => Err(ParseError::UnexpectedToken),
    }
}
