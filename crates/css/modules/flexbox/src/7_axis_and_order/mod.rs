//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use css_writing_modes::{Direction, WritingMode};

use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter6::ItemRef;

/// Physical mapping of a flex container's axes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// Main axis runs along x.
    pub main_is_horizontal: bool,
    /// Main-start is the right (or bottom) edge.
    pub main_reverse: bool,
    /// Cross-start is the right (or bottom) edge, including `wrap-reverse`.
    pub cross_reverse: bool,
}

/// Resolve the physical axes from flex-direction, flex-wrap and the writing mode.
///
/// Row follows the inline axis, column the block axis. The inline axis runs backwards
/// under `direction: rtl`; the block axis runs right-to-left in `vertical-rl`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(
    flex_direction: FlexDirection,
    wrap: FlexWrap,
    writing_mode: WritingMode,
    direction: Direction,
) -> Axes {
    let is_row = flex_direction.is_row();
    let vertical = writing_mode.is_vertical();
    let inline_reversed = matches!(direction, Direction::Rtl);
    let block_reversed = matches!(writing_mode, WritingMode::VerticalRl);
    let (main_base, cross_base) = if is_row {
        (inline_reversed, block_reversed)
    } else {
        (block_reversed, inline_reversed)
    };
    Axes {
        main_is_horizontal: is_row != vertical,
        main_reverse: main_base != flex_direction.is_reverse(),
        cross_reverse: cross_base != matches!(wrap, FlexWrap::WrapReverse),
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so a stable sort by this key respects DOM order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

type OrderKey = (i32, usize);

/// Stable sort of items by order, preserving input order for ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable(items: &[(ItemRef, i32)]) -> Vec<ItemRef> {
    let mut with_index: Vec<(OrderKey, ItemRef)> = items
        .iter()
        .enumerate()
        .map(|(original_index, &(handle, order))| (order_key(order, original_index), handle))
        .collect();
    with_index.sort_by(|key_a, key_b| key_a.0.cmp(&key_b.0));
    with_index.into_iter().map(|(_, handle)| handle).collect()
}
