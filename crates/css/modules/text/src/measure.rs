//! Text measurement seam.
//!
//! Layout never looks at font files. Callers hand in a [`TextMeasurer`] that answers
//! "how wide is this run"; the crate ships two deterministic implementations.

/// Font-related inputs a measurer needs.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureStyle {
    pub font_size: f32,
    pub font_weight: u16,
    pub font_family: Option<String>,
}

impl Default for MeasureStyle {
    fn default() -> Self {
        Self {
            font_size: crate::style::DEFAULT_FONT_SIZE,
            font_weight: 400,
            font_family: None,
        }
    }
}

/// Result of measuring one run of text.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width in px, letter and word spacing excluded.
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

/// Measures runs of text. Implementations must be deterministic for a given input.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &MeasureStyle) -> TextMetrics;
}

/// Ascent share of the font size used by the bundled measurers.
const ASCENT_FACTOR: f32 = 0.8;
/// Descent share of the font size used by the bundled measurers.
const DESCENT_FACTOR: f32 = 0.2;

/// Crude proportional fallback: every character is 0.6em wide.
#[derive(Copy, Clone, Debug, Default)]
pub struct ApproxMeasurer;

impl ApproxMeasurer {
    pub const CHAR_WIDTH_FACTOR: f32 = 0.6;
}

impl TextMeasurer for ApproxMeasurer {
    fn measure(&self, text: &str, style: &MeasureStyle) -> TextMetrics {
        let chars = text.chars().count() as f32;
        TextMetrics {
            advance: chars * style.font_size * Self::CHAR_WIDTH_FACTOR,
            ascent: style.font_size * ASCENT_FACTOR,
            descent: style.font_size * DESCENT_FACTOR,
        }
    }
}

/// Fixed advance per character, independent of font size. Terminal cells and tests.
#[derive(Copy, Clone, Debug)]
pub struct MonospaceMeasurer {
    pub advance_per_char: f32,
}

impl MonospaceMeasurer {
    pub const fn new(advance_per_char: f32) -> Self {
        Self { advance_per_char }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &MeasureStyle) -> TextMetrics {
        TextMetrics {
            advance: text.chars().count() as f32 * self.advance_per_char,
            ascent: style.font_size * ASCENT_FACTOR,
            descent: style.font_size * DESCENT_FACTOR,
        }
    }
}

impl<Measurer: TextMeasurer + ?Sized> TextMeasurer for &Measurer {
    fn measure(&self, text: &str, style: &MeasureStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the approximate measurer deviates from 0.6em per character.
    fn approx_is_point_six_em() {
        let metrics = ApproxMeasurer.measure("abcd", &MeasureStyle::default());
        assert!((metrics.advance - 38.4).abs() < 0.001);
        assert!((metrics.ascent - 12.8).abs() < 0.001);
        assert!((metrics.descent - 3.2).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if monospace widths count bytes instead of characters.
    fn monospace_counts_chars() {
        let measurer = MonospaceMeasurer::new(10.0);
        let metrics = measurer.measure("héllo", &MeasureStyle::default());
        assert!((metrics.advance - 50.0).abs() < 0.001);
    }
}
