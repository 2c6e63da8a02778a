//! CSS Text Module Level 3: white space, transforms, line breaking, justification.
//! Spec: <https://www.w3.org/TR/css-text-3/>
//!
//! The entry point is [`layout_paragraph`], which turns one text leaf into positioned
//! lines. Glyph metrics come from a caller-supplied [`TextMeasurer`].

pub mod align;
pub mod line_break;
pub mod lines;
pub mod measure;
pub mod paragraph;
pub mod style;
pub mod transform;
pub mod whitespace;

pub use align::{
    AlignContext, JustifyMode, LineAlign, align_lines, is_left_aligned, resolve_line_align,
};
pub use line_break::{BreakOpportunity, BreakRules, BreakType, SOFT_HYPHEN, break_opportunities};
pub use lines::{ELLIPSIS, InlineBox, TextLine};
pub use measure::{ApproxMeasurer, MeasureStyle, MonospaceMeasurer, TextMeasurer, TextMetrics};
pub use paragraph::{Paragraph, ParagraphInput, intrinsic_inline_sizes, layout_paragraph};
pub use style::{
    DEFAULT_FONT_SIZE, Hyphens, LineHeight, OverflowWrap, TextAlign, TextAlignLast,
    TextJustify, TextOverflow, TextStyle, TextTransform, WhiteSpace, WordBreak,
};
pub use transform::apply_text_transform;
pub use whitespace::{collapse_whitespace, process_white_space};
