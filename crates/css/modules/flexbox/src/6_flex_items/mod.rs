//! Flex Items — identification and per-item inputs
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use crate::chapter5::AlignItems;
use crate::chapter7::sort_items_by_order_stable;

/// Opaque handle for an item. The caller maps it back to its own tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemRef(pub u64);

/// Style subset needed for item collection.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ItemStyle {
    /// `display: none`; the child is not a flex item.
    pub is_none: bool,
    /// Absolutely positioned; the child is not a flex item.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>
    pub is_out_of_flow: bool,
    /// The `order` property.
    pub order: i32,
}

/// Collect flex items in `order`-modified document order.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-modified-document-order>
pub fn collect_flex_items(children: &[(ItemRef, ItemStyle)]) -> Vec<ItemRef> {
    let in_flow: Vec<(ItemRef, i32)> = children
        .iter()
        .filter(|(_, style)| is_flex_item(*style))
        .map(|(handle, style)| (*handle, style.order))
        .collect();
    sort_items_by_order_stable(&in_flow)
}

#[inline]
pub const fn is_flex_item(style: ItemStyle) -> bool {
    !style.is_none && !style.is_out_of_flow
}

/// Margins along one axis, physical: `start` is the left or top side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisMargins {
    pub start: f32,
    pub end: f32,
    pub start_auto: bool,
    pub end_auto: bool,
}

impl AxisMargins {
    pub const fn new(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            start_auto: false,
            end_auto: false,
        }
    }

    /// Sum of the non-auto margins.
    #[inline]
    pub fn fixed_total(&self) -> f32 {
        let start = if self.start_auto { 0.0 } else { self.start };
        let end = if self.end_auto { 0.0 } else { self.end };
        start + end
    }

    /// Swap sides, for axes that run from the right or bottom edge.
    #[inline]
    pub const fn flipped(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            start_auto: self.end_auto,
            end_auto: self.start_auto,
        }
    }

    #[inline]
    pub fn auto_slots(&self) -> usize {
        usize::from(self.start_auto) + usize::from(self.end_auto)
    }
}

/// Inputs for one flex item. Sizes are border-box sizes in px.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    pub handle: ItemRef,
    /// Flex base size.
    pub flex_basis: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub min_main: f32,
    /// `f32::INFINITY` when unbounded.
    pub max_main: f32,
    pub main_margins: AxisMargins,
    /// Hypothetical cross size.
    pub cross_size: f32,
    /// The cross size is `auto`, so `stretch` may change it.
    pub cross_size_auto: bool,
    pub min_cross: f32,
    pub max_cross: f32,
    pub cross_margins: AxisMargins,
    /// `align-self`; `None` defers to the container's `align-items`.
    pub align_self: Option<AlignItems>,
    /// First baseline measured from the item's top border edge.
    pub baseline: Option<f32>,
}

impl FlexChild {
    /// An item with the given basis and cross size, no flexing, no margins.
    pub const fn new(handle: ItemRef, flex_basis: f32, cross_size: f32) -> Self {
        Self {
            handle,
            flex_basis,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            min_main: 0.0,
            max_main: f32::INFINITY,
            main_margins: AxisMargins::new(0.0, 0.0),
            cross_size,
            cross_size_auto: false,
            min_cross: 0.0,
            max_cross: f32::INFINITY,
            cross_margins: AxisMargins::new(0.0, 0.0),
            align_self: None,
            baseline: None,
        }
    }

    /// Base size clamped by the main min/max; min wins over max.
    #[inline]
    pub fn hypothetical_main(&self) -> f32 {
        clamp_size(self.flex_basis, self.min_main, self.max_main)
    }

    /// Hypothetical main size plus non-auto main margins.
    #[inline]
    pub fn outer_hypothetical_main(&self) -> f32 {
        self.hypothetical_main() + self.main_margins.fixed_total()
    }

    #[inline]
    pub fn hypothetical_cross(&self) -> f32 {
        clamp_size(self.cross_size, self.min_cross, self.max_cross)
    }
}

/// Clamp into `[min, max]` with min winning, treating malformed values as zero.
#[inline]
pub fn clamp_size(value: f32, min: f32, max: f32) -> f32 {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    let min = if min.is_finite() { min.max(0.0) } else { 0.0 };
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if `display:none` or out-of-flow children are kept, or `order` ties lose
    /// source order.
    fn collects_in_order_modified_document_order() {
        let item = |order| ItemStyle {
            order,
            ..ItemStyle::default()
        };
        let children = [
            (ItemRef(1), item(1)),
            (ItemRef(2), ItemStyle { is_none: true, ..item(0) }),
            (ItemRef(3), item(0)),
            (ItemRef(4), item(-1)),
            (ItemRef(5), item(0)),
            (ItemRef(6), ItemStyle { is_out_of_flow: true, ..item(-2) }),
        ];
        let handles: Vec<u64> = collect_flex_items(&children)
            .iter()
            .map(|handle| handle.0)
            .collect();
        assert_eq!(handles, vec![4, 3, 5, 1]);
    }

    #[test]
    /// # Panics
    /// Panics if min does not win over max or negative sizes are not clamped.
    fn clamp_prefers_min() {
        assert!((clamp_size(50.0, 80.0, 60.0) - 80.0).abs() < f32::EPSILON);
        assert!(clamp_size(-5.0, 0.0, f32::INFINITY).abs() < f32::EPSILON);
        assert!(clamp_size(f32::NAN, 0.0, 10.0).abs() < f32::EPSILON);
    }
}
