//! CSS Writing Modes Level 3 — block/inline flow directions and logical↔physical mapping.
//! Spec: <https://www.w3.org/TR/css-writing-modes-3/>
//!
//! Layout algorithms compute in logical coordinates (inline = along a line, block = the
//! direction lines and blocks stack) and convert to physical `x`/`y` only when writing
//! results, through the helpers in this crate.

use css_box::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Writing mode determines the block and inline flow directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WritingMode {
    /// Horizontal top-to-bottom.
    /// - Block flow: top to bottom
    /// - Inline flow: left to right (or right to left with `direction: rtl`)
    #[default]
    HorizontalTb,

    /// Vertical right-to-left.
    /// - Block flow: right to left
    /// - Inline flow: top to bottom
    VerticalRl,

    /// Vertical left-to-right.
    /// - Block flow: left to right
    /// - Inline flow: top to bottom
    VerticalLr,
}

impl WritingMode {
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::VerticalRl | Self::VerticalLr)
    }
}

/// Inline base direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Physical axis in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalAxis {
    Horizontal,
    Vertical,
}

/// Physical edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalEdge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Map the logical block axis to a physical axis.
///
/// - horizontal-tb: vertical
/// - vertical-rl / vertical-lr: horizontal
pub const fn block_axis_to_physical(writing_mode: WritingMode) -> PhysicalAxis {
    match writing_mode {
        WritingMode::HorizontalTb => PhysicalAxis::Vertical,
        WritingMode::VerticalRl | WritingMode::VerticalLr => PhysicalAxis::Horizontal,
    }
}

/// Map the logical inline axis to a physical axis.
pub const fn inline_axis_to_physical(writing_mode: WritingMode) -> PhysicalAxis {
    match writing_mode {
        WritingMode::HorizontalTb => PhysicalAxis::Horizontal,
        WritingMode::VerticalRl | WritingMode::VerticalLr => PhysicalAxis::Vertical,
    }
}

/// The physical edge where block-level boxes begin stacking.
pub const fn block_start_edge(writing_mode: WritingMode) -> PhysicalEdge {
    match writing_mode {
        WritingMode::HorizontalTb => PhysicalEdge::Top,
        WritingMode::VerticalRl => PhysicalEdge::Right,
        WritingMode::VerticalLr => PhysicalEdge::Left,
    }
}

/// The physical edge where a line starts. Direction only matters for horizontal modes.
pub const fn inline_start_edge(writing_mode: WritingMode, direction: Direction) -> PhysicalEdge {
    match (writing_mode, direction) {
        (WritingMode::HorizontalTb, Direction::Ltr) => PhysicalEdge::Left,
        (WritingMode::HorizontalTb, Direction::Rtl) => PhysicalEdge::Right,
        (WritingMode::VerticalRl | WritingMode::VerticalLr, _) => PhysicalEdge::Top,
    }
}

/// Inline/block extent pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogicalSize {
    pub inline: f32,
    pub block: f32,
}

impl LogicalSize {
    pub const fn new(inline: f32, block: f32) -> Self {
        Self { inline, block }
    }

    /// Read a physical size in the given writing mode.
    pub const fn from_physical(size: Size, writing_mode: WritingMode) -> Self {
        match inline_axis_to_physical(writing_mode) {
            PhysicalAxis::Horizontal => Self::new(size.width, size.height),
            PhysicalAxis::Vertical => Self::new(size.height, size.width),
        }
    }

    /// Write back as a physical size.
    pub const fn to_physical(self, writing_mode: WritingMode) -> Size {
        match inline_axis_to_physical(writing_mode) {
            PhysicalAxis::Horizontal => Size::new(self.inline, self.block),
            PhysicalAxis::Vertical => Size::new(self.block, self.inline),
        }
    }
}

/// A rectangle in logical coordinates, offsets measured from the inline-start and
/// block-start edges of the containing box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogicalRect {
    pub inline_start: f32,
    pub block_start: f32,
    pub inline_size: f32,
    pub block_size: f32,
}

impl LogicalRect {
    pub const fn new(inline_start: f32, block_start: f32, inline_size: f32, block_size: f32) -> Self {
        Self {
            inline_start,
            block_start,
            inline_size,
            block_size,
        }
    }
}

/// Convert a logical rectangle into physical coordinates inside a container.
///
/// `container` is the logical size of the containing box; it is needed because
/// `vertical-rl` stacks blocks from the right edge, so the physical `x` depends on the
/// container's block size.
pub fn logical_to_physical_rect(
    rect: LogicalRect,
    writing_mode: WritingMode,
    container: LogicalSize,
) -> Rect {
    match writing_mode {
        WritingMode::HorizontalTb => Rect::new(
            rect.inline_start,
            rect.block_start,
            rect.inline_size,
            rect.block_size,
        ),
        WritingMode::VerticalLr => Rect::new(
            rect.block_start,
            rect.inline_start,
            rect.block_size,
            rect.inline_size,
        ),
        WritingMode::VerticalRl => Rect::new(
            container.block - rect.block_start - rect.block_size,
            rect.inline_start,
            rect.block_size,
            rect.inline_size,
        ),
    }
}
