//! Line alignment and justification.
//! Spec: <https://www.w3.org/TR/css-text-3/#text-align-property>
//! Spec: <https://www.w3.org/TR/css-text-3/#justification>

use css_writing_modes::Direction;
use log::debug;

use crate::lines::TextLine;
use crate::style::{TextAlign, TextAlignLast, TextJustify};

/// Physical alignment of one line after resolving start/end and last-line rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineAlign {
    Left,
    Right,
    Center,
    Justify,
}

/// Where justification space goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JustifyMode {
    InterWord,
    InterCharacter,
}

impl JustifyMode {
    /// `None` when justification is disabled.
    pub const fn from_text_justify(value: TextJustify) -> Option<Self> {
        match value {
            TextJustify::Auto | TextJustify::InterWord => Some(Self::InterWord),
            TextJustify::InterCharacter | TextJustify::Distribute => Some(Self::InterCharacter),
            TextJustify::None => None,
        }
    }
}

/// Paragraph-level alignment inputs.
#[derive(Copy, Clone, Debug)]
pub struct AlignContext {
    /// Inline size of the content box lines are aligned within.
    pub inline_size: f32,
    pub text_indent: f32,
    pub direction: Direction,
    pub text_align: TextAlign,
    pub text_align_last: TextAlignLast,
    pub text_justify: TextJustify,
}

const fn start_side(direction: Direction) -> LineAlign {
    match direction {
        Direction::Ltr => LineAlign::Left,
        Direction::Rtl => LineAlign::Right,
    }
}

const fn end_side(direction: Direction) -> LineAlign {
    match direction {
        Direction::Ltr => LineAlign::Right,
        Direction::Rtl => LineAlign::Left,
    }
}

const fn resolve_text_align(value: TextAlign, direction: Direction) -> LineAlign {
    match value {
        TextAlign::Start => start_side(direction),
        TextAlign::End => end_side(direction),
        TextAlign::Left => LineAlign::Left,
        TextAlign::Right => LineAlign::Right,
        TextAlign::Center => LineAlign::Center,
        TextAlign::Justify => LineAlign::Justify,
    }
}

/// Alignment for one line. `is_last` covers the paragraph's last line and any line
/// ending in a forced break.
pub const fn resolve_line_align(context: &AlignContext, is_last: bool) -> LineAlign {
    let direction = context.direction;
    let resolved = if is_last {
        match context.text_align_last {
            TextAlignLast::Auto => match context.text_align {
                TextAlign::Justify => start_side(direction),
                other => resolve_text_align(other, direction),
            },
            TextAlignLast::Start => start_side(direction),
            TextAlignLast::End => end_side(direction),
            TextAlignLast::Left => LineAlign::Left,
            TextAlignLast::Right => LineAlign::Right,
            TextAlignLast::Center => LineAlign::Center,
            TextAlignLast::Justify => LineAlign::Justify,
        }
    } else {
        resolve_text_align(context.text_align, direction)
    };
    match (resolved, context.text_justify) {
        (LineAlign::Justify, TextJustify::None) => start_side(direction),
        (other, _) => other,
    }
}

/// Every line sits on the left edge, so the paragraph may shrink to its widest line.
/// Any other alignment positions lines against the full inline size.
pub const fn is_left_aligned(context: &AlignContext) -> bool {
    matches!(
        (resolve_line_align(context, false), resolve_line_align(context, true)),
        (LineAlign::Left, LineAlign::Left)
    )
}

/// Justification opportunities on `line`.
///
/// Inter-word: white space between two runs. Inter-character: every boundary between
/// two visible characters.
pub fn count_gaps(line: &TextLine, mode: JustifyMode) -> usize {
    let last_index = line.boxes.len().saturating_sub(1);
    match mode {
        JustifyMode::InterWord => line
            .boxes
            .iter()
            .take(last_index)
            .filter(|inline_box| !inline_box.trailing.is_empty())
            .count(),
        JustifyMode::InterCharacter => {
            let chars: usize = line
                .boxes
                .iter()
                .enumerate()
                .map(|(index, inline_box)| {
                    let trailing = if index < last_index {
                        inline_box.trailing.chars().count()
                    } else {
                        0
                    };
                    inline_box.text.chars().count() + trailing
                })
                .sum();
            chars.saturating_sub(1)
        }
    }
}

/// Spread `adjustment` px into each opportunity, shifting boxes along the line.
fn apply_justification(line: &mut TextLine, adjustment: f32, mode: JustifyMode) {
    let last_index = line.boxes.len().saturating_sub(1);
    let mut opportunities_before = 0usize;
    for (index, inline_box) in line.boxes.iter_mut().enumerate() {
        inline_box.inline_offset += adjustment * opportunities_before as f32;
        match mode {
            JustifyMode::InterWord => {
                if index < last_index && !inline_box.trailing.is_empty() {
                    opportunities_before += 1;
                }
            }
            JustifyMode::InterCharacter => {
                let chars = inline_box.text.chars().count();
                inline_box.width += adjustment * chars.saturating_sub(1) as f32;
                opportunities_before += chars;
                if index < last_index {
                    opportunities_before += inline_box.trailing.chars().count();
                }
            }
        }
    }
}

/// Set each line's alignment offset and justify where requested.
pub fn align_lines(lines: &mut [TextLine], context: &AlignContext) {
    let count = lines.len();
    let justify_mode = JustifyMode::from_text_justify(context.text_justify);
    for (index, line) in lines.iter_mut().enumerate() {
        let is_last = index + 1 == count || line.hard_break;
        let indent = if index == 0 { context.text_indent } else { 0.0 };
        let lead = match context.direction {
            Direction::Ltr => indent,
            Direction::Rtl => 0.0,
        };
        let slack = context.inline_size - indent - line.width;
        let mut align = resolve_line_align(context, is_last);
        // Overflowing lines align to the start edge.
        if slack < 0.0 {
            align = start_side(context.direction);
        }
        if align == LineAlign::Justify {
            align = start_side(context.direction);
            if let Some(mode) = justify_mode {
                let gaps = count_gaps(line, mode);
                if gaps > 0 && slack > 0.0 {
                    let adjustment = slack / gaps as f32;
                    apply_justification(line, adjustment, mode);
                    line.gap_count = gaps;
                    line.gap_adjustment = adjustment;
                    line.inline_offset = lead;
                    debug!(
                        target: "css::text::align",
                        "[JUSTIFY] line={index} mode={mode:?} gaps={gaps} adjustment={adjustment:.3}"
                    );
                    continue;
                }
            }
        }
        line.inline_offset = match align {
            LineAlign::Left | LineAlign::Justify => lead,
            LineAlign::Right => lead + slack,
            LineAlign::Center => lead + slack / 2.0,
        };
    }
}
