//! Paragraph layout: the full text pipeline for one text leaf.
//!
//! White space, transform, break opportunities, packing, ellipsis, alignment, line
//! stacking and the final writing-mode remap run in that order. Everything before the
//! remap is computed in logical (inline, block) coordinates.

use css_box::{Rect, Size};
use css_writing_modes::{
    Direction, LogicalRect, LogicalSize, WritingMode, logical_to_physical_rect,
};
use log::debug;

use crate::align::{AlignContext, align_lines, is_left_aligned};
use crate::line_break::{BreakRules, break_opportunities};
use crate::lines::{PackingInput, RunMeasure, TextLine, apply_ellipsis, pack_lines};
use crate::measure::TextMeasurer;
use crate::style::{OverflowWrap, TextOverflow, TextStyle};
use crate::transform::apply_text_transform;
use crate::whitespace::process_white_space;

/// Inputs for one paragraph.
#[derive(Copy, Clone, Debug)]
pub struct ParagraphInput<'input> {
    pub text: &'input str,
    pub style: &'input TextStyle,
    pub direction: Direction,
    pub writing_mode: WritingMode,
    /// Inline size lines wrap against. `f32::INFINITY` for max-content.
    pub available_inline: f32,
    /// Floor for the paragraph's inline size, e.g. an explicit width.
    pub min_inline: f32,
}

/// Result of laying out a paragraph. Sizes are logical.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    pub lines: Vec<TextLine>,
    pub line_height: f32,
    pub inline_size: f32,
    pub block_size: f32,
    /// Widest line plus indent before clamping to the available size.
    pub natural_inline: f32,
    /// Offset of the first line's baseline from the block-start edge.
    pub first_baseline: f32,
}

impl Paragraph {
    /// Physical size of the content box.
    pub fn physical_size(&self, writing_mode: WritingMode) -> Size {
        LogicalSize::new(self.inline_size, self.block_size).to_physical(writing_mode)
    }
}

/// Lay out `input.text` into lines.
pub fn layout_paragraph(input: &ParagraphInput<'_>, measurer: &dyn TextMeasurer) -> Paragraph {
    let style = input.style;
    let processed = process_white_space(input.text, style.white_space, style.tab_size);
    let transformed = apply_text_transform(&processed, style.text_transform);

    let allow_wrap = style.white_space.wraps();
    let rules = BreakRules {
        allow_wrap,
        hyphens: style.hyphens,
        word_break: style.word_break,
    };
    let breaks = break_opportunities(&transformed, rules);
    let measure = RunMeasure::new(
        measurer,
        style.measure_style(),
        style.letter_spacing,
        style.word_spacing,
    );
    let available = if input.available_inline.is_nan() {
        0.0
    } else {
        input.available_inline.max(0.0)
    };
    let packing = PackingInput {
        text: &transformed,
        breaks: &breaks,
        available,
        text_indent: style.text_indent,
        allow_wrap,
        char_break: matches!(
            style.overflow_wrap,
            OverflowWrap::BreakWord | OverflowWrap::Anywhere
        ),
    };
    let mut lines = pack_lines(&packing, &measure);

    if !allow_wrap && style.text_overflow == TextOverflow::Ellipsis && available.is_finite() {
        for (index, line) in lines.iter_mut().enumerate() {
            let indent = if index == 0 { style.text_indent } else { 0.0 };
            apply_ellipsis(line, (available - indent).max(0.0), &measure);
        }
    }

    let natural_inline = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let indent = if index == 0 { style.text_indent } else { 0.0 };
            (line.width + indent).max(0.0)
        })
        .fold(0.0f32, f32::max);
    let mut align = AlignContext {
        inline_size: 0.0,
        text_indent: style.text_indent,
        direction: input.direction,
        text_align: style.text_align,
        text_align_last: style.text_align_last,
        text_justify: style.text_justify,
    };
    let floor = input.min_inline.max(0.0);
    let inline_size = if !available.is_finite() {
        natural_inline.max(floor)
    } else if is_left_aligned(&align) {
        natural_inline.clamp(floor, available.max(floor))
    } else {
        // Centered, right-aligned and justified lines position against the full room.
        available.max(floor)
    };
    align.inline_size = inline_size;
    align_lines(&mut lines, &align);

    let line_height = style.resolved_line_height();
    let (first_ascent, first_descent) = lines.first().map_or_else(
        || measure.vertical_metrics(""),
        |line| (line.ascent, line.descent),
    );
    let half_leading = (line_height - (first_ascent + first_descent)) / 2.0;
    let first_baseline = half_leading + first_ascent;
    let block_size = lines.len().max(1) as f32 * line_height;

    let container = LogicalSize::new(inline_size, block_size);
    for (index, line) in lines.iter_mut().enumerate() {
        line.block_offset = index as f32 * line_height;
        let logical = LogicalRect {
            inline_start: line.inline_offset,
            block_start: line.block_offset,
            inline_size: line.justified_width(),
            block_size: line_height,
        };
        line.rect = logical_to_physical_rect(logical, input.writing_mode, container);
    }

    debug!(
        target: "css::text::paragraph",
        "[PARAGRAPH] chars={} lines={} inline={inline_size:.3} block={block_size:.3} available={available:.3}",
        transformed.chars().count(),
        lines.len()
    );

    Paragraph {
        lines,
        line_height,
        inline_size,
        block_size,
        natural_inline,
        first_baseline,
    }
}

/// Min-content and max-content inline sizes of `text`.
///
/// Min-content wraps at every opportunity; `overflow-wrap: break-word` does not lower
/// it, `anywhere` does.
pub fn intrinsic_inline_sizes(
    text: &str,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
) -> (f32, f32) {
    let min_style;
    let min_style_ref = if style.overflow_wrap == OverflowWrap::BreakWord {
        min_style = TextStyle {
            overflow_wrap: OverflowWrap::Normal,
            ..style.clone()
        };
        &min_style
    } else {
        style
    };
    let sized = |candidate: &TextStyle, available_inline: f32| {
        layout_paragraph(
            &ParagraphInput {
                text,
                style: candidate,
                direction: Direction::Ltr,
                writing_mode: WritingMode::HorizontalTb,
                available_inline,
                min_inline: 0.0,
            },
            measurer,
        )
        .natural_inline
    };
    let max_content = sized(style, f32::INFINITY);
    let min_content = sized(min_style_ref, 0.0).min(max_content);
    (min_content, max_content)
}

/// Physical rect of the `index`th line relative to the content box.
pub fn line_rect(paragraph: &Paragraph, index: usize) -> Option<Rect> {
    paragraph.lines.get(index).map(|line| line.rect)
}
