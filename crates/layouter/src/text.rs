//! Text leaves: run the paragraph pipeline inside the node's content box.

use css_box::{Constraints, Size};
use css_text::{ParagraphInput, TextStyle, intrinsic_inline_sizes, layout_paragraph};
use css_writing_modes::WritingMode;
use log::debug;

use crate::context::LayoutContext;
use crate::node::Node;
use crate::sizing::{LogicalBox, finish_size, physical_size};

/// The node's text style with the configured default font size filled in.
pub fn effective_text_style(node: &Node, ctx: &LayoutContext<'_>) -> TextStyle {
    let mut style = node.style.text.clone();
    if !(style.font_size.is_finite() && style.font_size > 0.0) {
        style.font_size = ctx.config.default_font_size;
    }
    style
}

/// Min-content and max-content content-box widths of a horizontal text leaf.
pub fn text_intrinsic_widths(node: &Node, ctx: &LayoutContext<'_>) -> (f32, f32) {
    let style = effective_text_style(node, ctx);
    intrinsic_inline_sizes(node.text.as_deref().unwrap_or_default(), &style, ctx.measurer)
}

/// Lay out a text leaf.
///
/// Lines wrap against the inline room (the height in vertical modes); an explicit
/// inline size both caps and floors the paragraph. Line rects end up relative to the
/// node's border box.
pub fn layout_text(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    let writing_mode = node.style.writing_mode;
    let padding_border = node.style.padding_border();
    let logical = LogicalBox::new(&node.style, constraints);
    let limits = logical.inline_limits;
    let (available_inline, min_inline) = limits.specified.map_or_else(
        || {
            let room = limits.max.map_or(logical.inline_room, |max| logical.inline_room.min(max));
            let floor_room = if writing_mode.is_vertical() {
                constraints.min_height
            } else {
                constraints.min_width
            };
            (room, limits.min.max(floor_room - logical.inline_pb))
        },
        |specified| {
            let used = limits.clamp(specified);
            (used, used)
        },
    );
    let text_style = effective_text_style(node, ctx);
    let paragraph = layout_paragraph(
        &ParagraphInput {
            text: node.text.as_deref().unwrap_or_default(),
            style: &text_style,
            direction: node.style.direction,
            writing_mode,
            available_inline,
            min_inline: min_inline.max(0.0),
        },
        ctx.measurer,
    );
    let content_block = logical.block_limits.resolve(paragraph.block_size);
    let size = finish_size(
        physical_size(paragraph.inline_size, content_block, writing_mode),
        padding_border,
        constraints,
    );

    // vertical-rl lines hang from the right edge of the final content box.
    let shift_x = match writing_mode {
        WritingMode::VerticalRl => size.width - logical.block_pb - paragraph.block_size,
        WritingMode::HorizontalTb | WritingMode::VerticalLr => 0.0,
    };
    let first_baseline = paragraph.first_baseline;
    node.text_lines = paragraph.lines;
    for line in &mut node.text_lines {
        line.rect.x += padding_border.left + shift_x;
        line.rect.y += padding_border.top;
    }
    node.baseline = (!writing_mode.is_vertical()).then_some(padding_border.top + first_baseline);

    debug!(
        target: "layout::text",
        "[TEXT] lines={} size={:.2}x{:.2} available={available_inline:.2}",
        node.text_lines.len(),
        size.width,
        size.height
    );
    size
}
