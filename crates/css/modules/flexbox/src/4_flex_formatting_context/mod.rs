//! Flex Formatting Context (FFC): container inputs and layout results
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use css_writing_modes::{Direction, WritingMode};

use crate::chapter5::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};
use crate::chapter6::ItemRef;
use crate::chapter7::{Axes, resolve_axes};

/// Container inputs for one flex layout. Sizes refer to the content box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexContainerInputs {
    pub flex_direction: FlexDirection,
    pub wrap: FlexWrap,
    pub writing_mode: WritingMode,
    pub direction: Direction,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Definite main size. `None` sizes the main axis to its content and disables flexing.
    pub main_size: Option<f32>,
    /// Limit that lines wrap against when `main_size` is indefinite.
    pub available_main: f32,
    /// Definite cross size.
    pub cross_size: Option<f32>,
    /// Gap between adjacent items on a line.
    pub main_gap: f32,
    /// Gap between adjacent lines.
    pub cross_gap: f32,
}

impl Default for FlexContainerInputs {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            wrap: FlexWrap::Nowrap,
            writing_mode: WritingMode::HorizontalTb,
            direction: Direction::Ltr,
            justify_content: JustifyContent::Start,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            main_size: None,
            available_main: f32::INFINITY,
            cross_size: None,
            main_gap: 0.0,
            cross_gap: 0.0,
        }
    }
}

impl FlexContainerInputs {
    #[inline]
    pub const fn axes(&self) -> Axes {
        resolve_axes(
            self.flex_direction,
            self.wrap,
            self.writing_mode,
            self.direction,
        )
    }

    /// Main size lines break against.
    #[inline]
    pub fn line_limit(&self) -> f32 {
        self.main_size.unwrap_or(self.available_main).max(0.0)
    }

    #[inline]
    pub fn main_gap(&self) -> f32 {
        sanitize_gap(self.main_gap)
    }

    #[inline]
    pub fn cross_gap(&self) -> f32 {
        sanitize_gap(self.cross_gap)
    }
}

#[inline]
fn sanitize_gap(gap: f32) -> f32 {
    if gap.is_finite() { gap.max(0.0) } else { 0.0 }
}

/// Final border-box placement of one item, relative to the container's content box.
///
/// Offsets are physical: `main_offset` runs from the left (or top) content edge,
/// `cross_offset` likewise along the cross axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItemPlacement {
    pub handle: ItemRef,
    pub main_offset: f32,
    pub main_size: f32,
    pub cross_offset: f32,
    pub cross_size: f32,
}

/// One flex line: items `start..end` in the input order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexLine {
    pub start: usize,
    pub end: usize,
    /// Physical offset of the line from the cross-axis content edge.
    pub cross_offset: f32,
    pub cross_size: f32,
}

/// Output of [`crate::layout_flex`].
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLayout {
    /// Placements in input order.
    pub items: Vec<FlexItemPlacement>,
    pub lines: Vec<FlexLine>,
    pub axes: Axes,
    /// Used content main size.
    pub main_extent: f32,
    /// Used content cross size.
    pub cross_extent: f32,
    /// First baseline of the container, measured from the content box's top edge.
    pub first_baseline: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the wrap limit ignores a definite main size or bad gaps are not clamped.
    fn line_limit_prefers_definite_main_size() {
        let container = FlexContainerInputs {
            main_size: Some(300.0),
            available_main: 900.0,
            main_gap: -4.0,
            cross_gap: f32::NAN,
            ..FlexContainerInputs::default()
        };
        assert!((container.line_limit() - 300.0).abs() < f32::EPSILON);
        assert!(container.main_gap().abs() < f32::EPSILON);
        assert!(container.cross_gap().abs() < f32::EPSILON);
        let indefinite = FlexContainerInputs {
            available_main: 900.0,
            ..FlexContainerInputs::default()
        };
        assert!((indefinite.line_limit() - 900.0).abs() < f32::EPSILON);
    }
}
