//! Block layout: in-flow children stack along the block axis.
//!
//! Adjacent sibling margins collapse through a [`MarginStrut`]. Margins do not
//! collapse through the parent's own edges. Inline `auto` margins center a child or
//! push it to the end edge.
//!
//! Spec: <https://www.w3.org/TR/CSS22/visuren.html#block-formatting>
//! Spec: <https://www.w3.org/TR/CSS22/box.html#collapsing-margins>

use css_box::{Constraints, MarginStrut, Size};
use log::debug;

use crate::context::LayoutContext;
use crate::dispatch::{layout, place};
use crate::node::Node;
use crate::sizing::{
    AxisMarginValues, LogicalBox, finish_size, inline_constraints, logical_margins,
    physical_offset, physical_size,
};

/// A laid out child waiting for its final position.
struct Stacked {
    index: usize,
    inline_size: f32,
    inline_margins: AxisMarginValues,
    block_offset: f32,
    block_size: f32,
}

/// Inline offset of a child's border box, resolving `auto` margins against the
/// free space.
fn inline_offset(child: &Stacked, content_inline: f32) -> f32 {
    let margins = child.inline_margins;
    let free = (content_inline - child.inline_size - margins.fixed_total()).max(0.0);
    match (margins.start.is_auto(), margins.end.is_auto()) {
        (true, true) => free / 2.0,
        (true, false) => free,
        (false, _) => margins.start.or_zero(),
    }
}

/// Lay out a block container.
pub fn layout_block(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    let writing_mode = node.style.writing_mode;
    let padding_border = node.style.padding_border();
    let logical = LogicalBox::new(&node.style, constraints);
    let definite_inline = logical.definite_inline();
    let child_room = definite_inline.unwrap_or(f32::INFINITY);
    let nested = ctx.nested();

    let mut strut = MarginStrut::new();
    let mut cursor = 0.0f32;
    let mut widest = 0.0f32;
    let mut stacked: Vec<Stacked> = Vec::with_capacity(node.children.len());
    for (index, child) in node.children.iter_mut().enumerate() {
        if !child.is_in_flow() {
            if !child.is_displayed() {
                child.clear_layout();
            }
            continue;
        }
        let (inline_margins, block_margins) = logical_margins(&child.style, writing_mode);
        let room = (child_room - inline_margins.fixed_total()).max(0.0);
        let size = layout(child, inline_constraints(room, writing_mode), &nested);
        let (inline_size, block_size) = if writing_mode.is_vertical() {
            (size.height, size.width)
        } else {
            (size.width, size.height)
        };
        strut.append(block_margins.start.or_zero());
        let block_offset = cursor + strut.collapse();
        cursor = block_offset + block_size;
        strut = MarginStrut::new();
        strut.append(block_margins.end.or_zero());
        widest = widest.max(inline_size + inline_margins.fixed_total());
        stacked.push(Stacked {
            index,
            inline_size,
            inline_margins,
            block_offset,
            block_size,
        });
    }
    let stacked_extent = (cursor + strut.collapse()).max(0.0);

    let content_inline = definite_inline.unwrap_or_else(|| logical.inline_limits.clamp(widest));
    let auto_block = if writing_mode.is_vertical() {
        stacked_extent
    } else {
        // The ratio is a preferred size; content may still make the box taller.
        node.style
            .height_for_width(content_inline)
            .map_or(stacked_extent, |height| height.max(stacked_extent))
    };
    let content_block = logical.block_limits.resolve(auto_block);
    let size = finish_size(
        physical_size(content_inline, content_block, writing_mode),
        padding_border,
        constraints,
    );
    let final_block = if writing_mode.is_vertical() {
        size.width - logical.block_pb
    } else {
        size.height - logical.block_pb
    };

    let mut baseline = None;
    for entry in &stacked {
        let Some(child) = node.children.get_mut(entry.index) else {
            continue;
        };
        let (x, y) = physical_offset(
            inline_offset(entry, content_inline),
            entry.block_offset,
            entry.block_size,
            final_block,
            writing_mode,
        );
        place(child, padding_border.left + x, padding_border.top + y);
        if baseline.is_none() && !writing_mode.is_vertical() {
            baseline = child.baseline.map(|offset| child.rect.y + offset);
        }
    }
    node.baseline = baseline;

    debug!(
        target: "layout::block",
        "[BLOCK] children={} inline={content_inline:.2} block={content_block:.2} depth={}",
        stacked.len(),
        ctx.depth()
    );
    size
}
