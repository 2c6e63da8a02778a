//! CSS Flexible Box Layout Module Level 1: flex formatting context.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! The crate is tree-agnostic: callers resolve each item's flex base size, hypothetical
//! cross size, margins and constraints into a [`FlexChild`], and read back physical
//! placements relative to the container's content box.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §4 — Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5 — Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 — Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 — Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8 — Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9 — Flex Layout Algorithm
#[path = "9_flex_layout_algorithm/mod.rs"]
mod chapter9;

pub use chapter4::{FlexContainerInputs, FlexItemPlacement, FlexLayout, FlexLine};
pub use chapter5::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};
pub use chapter6::{AxisMargins, FlexChild, ItemRef, ItemStyle, clamp_size, collect_flex_items};
pub use chapter7::{Axes, order_key, resolve_axes, sort_items_by_order_stable};
pub use chapter8::{align_content_params, justify_params};
pub use chapter9::flexible_lengths::resolve_flexible_lengths;
pub use chapter9::layout_flex;
