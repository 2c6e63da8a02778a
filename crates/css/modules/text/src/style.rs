//! Text-related computed values.
//! Spec: <https://www.w3.org/TR/css-text-3/#property-index>

use crate::measure::MeasureStyle;

/// UA default font size in CSS px.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Multiplier used for `line-height: normal`.
pub const NORMAL_LINE_HEIGHT_FACTOR: f32 = 1.2;

/// `line-height`, tagged by unit.
/// Spec: <https://www.w3.org/TR/css-inline-3/#line-height-property>
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum LineHeight {
    #[default]
    Normal,
    /// Unitless number multiplied by the font size.
    Multiplier(f32),
    /// Absolute length in px.
    Length(f32),
}

impl LineHeight {
    /// Resolve to px. Non-positive or non-finite values behave as `normal`.
    pub fn resolve(self, font_size: f32) -> f32 {
        let normal = font_size * NORMAL_LINE_HEIGHT_FACTOR;
        match self {
            Self::Normal => normal,
            Self::Multiplier(factor) if factor.is_finite() && factor > 0.0 => font_size * factor,
            Self::Length(length) if length.is_finite() && length > 0.0 => length,
            Self::Multiplier(_) | Self::Length(_) => normal,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-text-3/#text-align-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
    Justify,
}

/// Spec: <https://www.w3.org/TR/css-text-3/#text-align-last-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextAlignLast {
    #[default]
    Auto,
    Start,
    End,
    Left,
    Right,
    Center,
    Justify,
}

/// Spec: <https://www.w3.org/TR/css-text-3/#text-justify-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextJustify {
    /// Inter-word for the scripts this engine handles.
    #[default]
    Auto,
    InterWord,
    InterCharacter,
    /// Legacy alias of `inter-character`.
    Distribute,
    None,
}

/// Spec: <https://www.w3.org/TR/css-text-3/#white-space-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WhiteSpace {
    #[default]
    Normal,
    Nowrap,
    Pre,
    PreWrap,
    PreLine,
}

impl WhiteSpace {
    /// Spaces and tabs survive normalization.
    pub const fn preserves_spaces(self) -> bool {
        matches!(self, Self::Pre | Self::PreWrap)
    }

    /// Newlines survive normalization as forced breaks.
    pub const fn preserves_newlines(self) -> bool {
        matches!(self, Self::Pre | Self::PreWrap | Self::PreLine)
    }

    /// Soft wrap opportunities may be taken.
    pub const fn wraps(self) -> bool {
        !matches!(self, Self::Nowrap | Self::Pre)
    }
}

/// Spec: <https://www.w3.org/TR/css-text-3/#text-transform-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Spec: <https://www.w3.org/TR/css-text-3/#hyphens-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Hyphens {
    /// No breaks at hard or soft hyphens.
    None,
    /// Breaks only at soft hyphens (U+00AD).
    #[default]
    Manual,
    /// Breaks at soft and hard hyphens. No dictionary hyphenation.
    Auto,
}

/// Spec: <https://www.w3.org/TR/css-text-3/#overflow-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum OverflowWrap {
    #[default]
    Normal,
    BreakWord,
    Anywhere,
}

/// Spec: <https://www.w3.org/TR/css-text-3/#word-break-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WordBreak {
    #[default]
    Normal,
    BreakAll,
    KeepAll,
}

/// Spec: <https://www.w3.org/TR/css-overflow-3/#text-overflow>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextOverflow {
    #[default]
    Clip,
    Ellipsis,
}

/// Text properties of one text leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: u16,
    pub font_family: Option<String>,
    pub line_height: LineHeight,
    pub text_align: TextAlign,
    pub text_align_last: TextAlignLast,
    pub text_justify: TextJustify,
    /// First-line indent in px; negative values hang.
    pub text_indent: f32,
    pub letter_spacing: f32,
    pub word_spacing: f32,
    pub white_space: WhiteSpace,
    /// Tab stop interval in space widths.
    pub tab_size: u32,
    pub text_transform: TextTransform,
    pub hyphens: Hyphens,
    pub overflow_wrap: OverflowWrap,
    pub word_break: WordBreak,
    pub text_overflow: TextOverflow,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_weight: 400,
            font_family: None,
            line_height: LineHeight::Normal,
            text_align: TextAlign::Start,
            text_align_last: TextAlignLast::Auto,
            text_justify: TextJustify::Auto,
            text_indent: 0.0,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            white_space: WhiteSpace::Normal,
            tab_size: 8,
            text_transform: TextTransform::None,
            hyphens: Hyphens::Manual,
            overflow_wrap: OverflowWrap::Normal,
            word_break: WordBreak::Normal,
            text_overflow: TextOverflow::Clip,
        }
    }
}

impl TextStyle {
    /// Font size, falling back to the UA default for non-positive values.
    pub fn effective_font_size(&self) -> f32 {
        if self.font_size.is_finite() && self.font_size > 0.0 {
            self.font_size
        } else {
            DEFAULT_FONT_SIZE
        }
    }

    pub fn resolved_line_height(&self) -> f32 {
        self.line_height.resolve(self.effective_font_size())
    }

    /// The subset handed to a [`crate::TextMeasurer`].
    pub fn measure_style(&self) -> MeasureStyle {
        MeasureStyle {
            font_size: self.effective_font_size(),
            font_weight: self.font_weight,
            font_family: self.font_family.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if line-height units do not resolve independently of magnitude.
    fn line_height_units_are_explicit() {
        assert!((LineHeight::Normal.resolve(16.0) - 19.2).abs() < 0.001);
        assert!((LineHeight::Multiplier(1.5).resolve(16.0) - 24.0).abs() < 0.001);
        // A small absolute length stays a length.
        assert!((LineHeight::Length(8.0).resolve(16.0) - 8.0).abs() < 0.001);
        // A large multiplier stays a multiplier.
        assert!((LineHeight::Multiplier(12.0).resolve(2.0) - 24.0).abs() < 0.001);
        assert!((LineHeight::Length(-3.0).resolve(10.0) - 12.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if white-space mode predicates disagree with the property table.
    fn white_space_mode_table() {
        assert!(WhiteSpace::PreWrap.preserves_spaces());
        assert!(WhiteSpace::PreWrap.wraps());
        assert!(!WhiteSpace::PreLine.preserves_spaces());
        assert!(WhiteSpace::PreLine.preserves_newlines());
        assert!(!WhiteSpace::Nowrap.wraps());
        assert!(!WhiteSpace::Pre.wraps());
    }

    #[test]
    /// # Panics
    /// Panics if a zero font size does not fall back to the UA default.
    fn font_size_fallback() {
        let style = TextStyle {
            font_size: 0.0,
            ..TextStyle::default()
        };
        assert!((style.effective_font_size() - DEFAULT_FONT_SIZE).abs() < f32::EPSILON);
    }
}
