//! Shared box-model arithmetic for the layout algorithms.

use css_box::{Constraints, Edges, Size};
use css_writing_modes::WritingMode;

use crate::style::{AxisLimits, MarginValue, Style};

/// Margins of a child along one axis of its parent, `start` first.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisMarginValues {
    pub start: MarginValue,
    pub end: MarginValue,
}

impl AxisMarginValues {
    #[inline]
    pub fn fixed_total(&self) -> f32 {
        self.start.or_zero() + self.end.or_zero()
    }
}

/// A style's logical view for a container in `writing_mode`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogicalBox {
    pub inline_limits: AxisLimits,
    pub block_limits: AxisLimits,
    pub inline_pb: f32,
    pub block_pb: f32,
    /// Content-box room along the inline axis, `INFINITY` when unbounded.
    pub inline_room: f32,
    pub block_room: f32,
    pub block_tight: bool,
}

impl LogicalBox {
    pub fn new(style: &Style, constraints: Constraints) -> Self {
        let pb = style.padding_border();
        let content = constraints.deflate(pb);
        let width = style.width_limits();
        let height = style.height_limits();
        if style.writing_mode.is_vertical() {
            Self {
                inline_limits: height,
                block_limits: width,
                inline_pb: pb.vertical(),
                block_pb: pb.horizontal(),
                inline_room: content.max_height,
                block_room: content.max_width,
                block_tight: constraints.is_tight_width(),
            }
        } else {
            Self {
                inline_limits: width,
                block_limits: height,
                inline_pb: pb.horizontal(),
                block_pb: pb.vertical(),
                inline_room: content.max_width,
                block_room: content.max_height,
                block_tight: constraints.is_tight_height(),
            }
        }
    }

    /// Definite inline content size: the specified size, else all available room.
    pub fn definite_inline(&self) -> Option<f32> {
        self.inline_limits
            .specified
            .or_else(|| self.inline_room.is_finite().then_some(self.inline_room))
            .map(|size| self.inline_limits.clamp(size))
    }

    /// Definite block content size: the specified size, else a tight constraint.
    pub fn definite_block(&self) -> Option<f32> {
        self.block_limits
            .specified
            .or_else(|| self.block_tight.then_some(self.block_room))
            .map(|size| self.block_limits.clamp(size))
    }
}

/// Inline and block margins of a child inside a container in `writing_mode`.
///
/// Inline start is the top edge in vertical modes; block start is the right edge in
/// `vertical-rl`.
pub fn logical_margins(style: &Style, writing_mode: WritingMode) -> (AxisMarginValues, AxisMarginValues) {
    let margin = style.margin;
    let horizontal = AxisMarginValues {
        start: margin.left,
        end: margin.right,
    };
    let vertical = AxisMarginValues {
        start: margin.top,
        end: margin.bottom,
    };
    match writing_mode {
        WritingMode::HorizontalTb => (horizontal, vertical),
        WritingMode::VerticalLr => (vertical, horizontal),
        WritingMode::VerticalRl => (
            vertical,
            AxisMarginValues {
                start: margin.right,
                end: margin.left,
            },
        ),
    }
}

/// Physical size from logical extents.
#[inline]
pub const fn physical_size(inline: f32, block: f32, writing_mode: WritingMode) -> Size {
    if writing_mode.is_vertical() {
        Size::new(block, inline)
    } else {
        Size::new(inline, block)
    }
}

/// Constraints for a child: up to `inline` along the inline axis, unbounded along the
/// block axis.
#[inline]
pub const fn inline_constraints(inline: f32, writing_mode: WritingMode) -> Constraints {
    if writing_mode.is_vertical() {
        Constraints::new(0.0, f32::INFINITY, 0.0, inline)
    } else {
        Constraints::new(0.0, inline, 0.0, f32::INFINITY)
    }
}

/// Content size plus padding and border, clamped into `constraints`.
#[inline]
pub fn finish_size(content: Size, padding_border: Edges, constraints: Constraints) -> Size {
    constraints.constrain(content.inflate(padding_border))
}

/// Border-box offset of a child inside a content box, from logical offsets.
///
/// `content_block` is the container's content block size; `vertical-rl` positions
/// from the right edge.
pub fn physical_offset(
    inline_offset: f32,
    block_offset: f32,
    block_size: f32,
    content_block: f32,
    writing_mode: WritingMode,
) -> (f32, f32) {
    match writing_mode {
        WritingMode::HorizontalTb => (inline_offset, block_offset),
        WritingMode::VerticalLr => (block_offset, inline_offset),
        WritingMode::VerticalRl => (content_block - block_offset - block_size, inline_offset),
    }
}
