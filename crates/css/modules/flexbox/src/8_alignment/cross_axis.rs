//! Cross-axis alignment of items within a line, including baseline alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#baseline-participation>

use crate::chapter5::AlignItems;
use crate::chapter6::{AxisMargins, FlexChild, clamp_size};

/// Cross-axis placement of an item inside its line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossPlacement {
    pub cross_size: f32,
    /// Offset of the border box from the line's cross-start edge.
    pub cross_offset: f32,
}

/// Shared baseline of a line: the tallest extents above and below it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineBaseline {
    /// Distance from the line's cross-start edge to the shared baseline.
    pub ascent: f32,
    pub descent: f32,
}

impl LineBaseline {
    #[inline]
    pub fn extent(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Per-line alignment inputs.
#[derive(Copy, Clone, Debug)]
pub struct LineAlignContext {
    /// Container `align-items`.
    pub align_items: AlignItems,
    /// Baseline alignment is possible in this container.
    pub baselines_enabled: bool,
    /// Cross-start runs from the right or bottom edge.
    pub cross_reverse: bool,
}

impl LineAlignContext {
    /// Effective alignment for `child`; baseline falls back to start where unsupported.
    pub fn align_for(&self, child: &FlexChild) -> AlignItems {
        match child.align_self.unwrap_or(self.align_items) {
            AlignItems::Baseline if !self.baselines_enabled => AlignItems::Start,
            other => other,
        }
    }

    /// Cross margins in line-relative order.
    pub const fn margins_for(&self, child: &FlexChild) -> AxisMargins {
        if self.cross_reverse {
            child.cross_margins.flipped()
        } else {
            child.cross_margins
        }
    }
}

/// Baseline of `child` measured from its cross-start margin edge.
#[inline]
pub fn item_baseline_from_margin_edge(child: &FlexChild, margins: AxisMargins) -> f32 {
    let cross = child.hypothetical_cross();
    margins.start + child.baseline.unwrap_or(cross).clamp(0.0, cross)
}

/// Shared baseline of the baseline-aligned items in a line.
pub fn line_baseline(context: &LineAlignContext, line_items: &[FlexChild]) -> LineBaseline {
    line_items
        .iter()
        .filter(|child| context.align_for(child) == AlignItems::Baseline)
        .fold(LineBaseline::default(), |acc, child| {
            let margins = context.margins_for(child);
            let outer = child.hypothetical_cross() + margins.start + margins.end;
            let ascent = item_baseline_from_margin_edge(child, margins);
            LineBaseline {
                ascent: acc.ascent.max(ascent),
                descent: acc.descent.max(outer - ascent),
            }
        })
}

/// Line cross size: the largest outer hypothetical cross size, or the baseline extent
/// when that is larger.
pub fn line_cross_size(context: &LineAlignContext, line_items: &[FlexChild]) -> f32 {
    let max_outer = line_items
        .iter()
        .filter(|child| context.align_for(child) != AlignItems::Baseline)
        .map(|child| {
            let margins = child.cross_margins;
            child.hypothetical_cross() + margins.start + margins.end
        })
        .fold(0.0f32, f32::max);
    max_outer.max(line_baseline(context, line_items).extent())
}

/// Place `child` on the cross axis of a line of size `line_cross`.
///
/// Auto cross margins take precedence over `align-self`. `stretch` applies only to
/// items whose cross size is auto.
pub fn align_item_in_line(
    context: &LineAlignContext,
    child: &FlexChild,
    line_cross: f32,
    baseline: LineBaseline,
) -> CrossPlacement {
    let margins = context.margins_for(child);
    let align = context.align_for(child);
    let hypothetical = child.hypothetical_cross();
    let fixed = margins.fixed_total();
    let auto_slots = margins.auto_slots();
    if auto_slots > 0 {
        let free = (line_cross - hypothetical - fixed).max(0.0);
        let each = free / auto_slots as f32;
        let start = if margins.start_auto { each } else { margins.start };
        return CrossPlacement {
            cross_size: hypothetical,
            cross_offset: start,
        };
    }
    let outer = hypothetical + fixed;
    match align {
        AlignItems::Stretch if child.cross_size_auto => CrossPlacement {
            cross_size: clamp_size(line_cross - fixed, child.min_cross, child.max_cross),
            cross_offset: margins.start,
        },
        AlignItems::Stretch | AlignItems::Start => CrossPlacement {
            cross_size: hypothetical,
            cross_offset: margins.start,
        },
        AlignItems::End => CrossPlacement {
            cross_size: hypothetical,
            cross_offset: line_cross - hypothetical - margins.end,
        },
        AlignItems::Center => CrossPlacement {
            cross_size: hypothetical,
            cross_offset: margins.start + (line_cross - outer) * 0.5,
        },
        AlignItems::Baseline => {
            let own = item_baseline_from_margin_edge(child, margins);
            CrossPlacement {
                cross_size: hypothetical,
                cross_offset: baseline.ascent - own + margins.start,
            }
        }
    }
}
