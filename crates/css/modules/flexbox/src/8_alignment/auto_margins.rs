//! Auto margin resolution along the main axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

use crate::chapter6::FlexChild;

/// Resolved main-axis margins for one line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedMainMargins {
    /// Outer size (size plus resolved margins) per item.
    pub outer_sizes: Vec<f32>,
    /// Resolved margin on the left (or top) side per item.
    pub start_margins: Vec<f32>,
    /// Number of auto margins on the line.
    pub auto_slots: usize,
    pub sum_outer: f32,
}

/// Share positive free space equally among the line's auto margins.
///
/// Auto margins resolve to zero when the line has no positive free space.
pub fn resolve_auto_margins_and_outer(
    items: &[FlexChild],
    main_sizes: &[f32],
    line_main_size: f32,
    gaps_total: f32,
) -> ResolvedMainMargins {
    let auto_slots: usize = items
        .iter()
        .map(|child| child.main_margins.auto_slots())
        .sum();
    let fixed_margins: f32 = items
        .iter()
        .map(|child| child.main_margins.fixed_total())
        .sum();
    let sum_sizes: f32 = main_sizes.iter().copied().sum();
    let remaining = (line_main_size - sum_sizes - fixed_margins - gaps_total).max(0.0);
    let auto_each = if auto_slots > 0 && remaining.is_finite() {
        remaining / auto_slots as f32
    } else {
        0.0
    };
    let mut outer_sizes = Vec::with_capacity(items.len());
    let mut start_margins = Vec::with_capacity(items.len());
    for (child, size) in items.iter().zip(main_sizes.iter().copied()) {
        let margins = child.main_margins;
        let start = if margins.start_auto { auto_each } else { margins.start };
        let end = if margins.end_auto { auto_each } else { margins.end };
        start_margins.push(start);
        outer_sizes.push(size + start + end);
    }
    let sum_outer = outer_sizes.iter().copied().sum();
    ResolvedMainMargins {
        outer_sizes,
        start_margins,
        auto_slots,
        sum_outer,
    }
}
