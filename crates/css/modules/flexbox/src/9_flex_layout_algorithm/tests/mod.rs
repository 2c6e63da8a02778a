//! Tests for the flex layout algorithm.

use super::*;
use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter6::{AxisMargins, ItemRef};

mod cross_alignment_tests;
mod flex_distribution_tests;
mod gap_tests;

/// Helper to create a `FlexChild` with zero margins, the given basis and a 20px cross size.
#[inline]
pub fn item(handle: u64, basis: f32) -> FlexChild {
    FlexChild::new(ItemRef(handle), basis, 20.0)
}

/// Helper to create three items with basis 100.
#[inline]
pub fn three_items_100() -> Vec<FlexChild> {
    vec![item(1, 100.0), item(2, 100.0), item(3, 100.0)]
}

/// A row container with a definite main size.
#[inline]
pub fn row(main_size: f32) -> FlexContainerInputs {
    FlexContainerInputs {
        main_size: Some(main_size),
        ..FlexContainerInputs::default()
    }
}

pub fn main_offsets(layout: &FlexLayout) -> Vec<f32> {
    layout.items.iter().map(|placement| placement.main_offset).collect()
}

pub fn main_sizes(layout: &FlexLayout) -> Vec<f32> {
    layout.items.iter().map(|placement| placement.main_size).collect()
}

pub fn cross_offsets(layout: &FlexLayout) -> Vec<f32> {
    layout.items.iter().map(|placement| placement.cross_offset).collect()
}

/// Element-wise comparison with a small tolerance.
pub fn assert_close(got: &[f32], expected: &[f32]) {
    assert_eq!(got.len(), expected.len(), "got {got:?}, expected {expected:?}");
    for (value, want) in got.iter().zip(expected) {
        assert!((value - want).abs() < 0.001, "got {got:?}, expected {expected:?}");
    }
}
