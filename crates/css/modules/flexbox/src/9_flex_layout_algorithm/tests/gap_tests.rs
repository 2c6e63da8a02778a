//! Tests for CSS gap behavior in flexbox.

use super::*;

#[test]
/// # Panics
/// Panics if offsets are not separated by the specified gap in a simple start layout.
fn main_gap_affects_between_offsets() {
    let container = FlexContainerInputs {
        main_gap: 20.0,
        ..row(400.0)
    };
    let out = layout_flex(&container, &three_items_100());
    assert_close(&main_offsets(&out), &[0.0, 120.0, 240.0]);
}

#[test]
/// # Panics
/// Panics if gaps are not subtracted before distributing free space.
fn gap_reduces_free_space() {
    let mut items = vec![item(1, 0.0), item(2, 0.0)];
    for child in &mut items {
        child.flex_grow = 1.0;
    }
    let container = FlexContainerInputs {
        main_gap: 20.0,
        ..row(220.0)
    };
    let out = layout_flex(&container, &items);
    assert_close(&main_sizes(&out), &[100.0, 100.0]);
    assert_close(&main_offsets(&out), &[0.0, 120.0]);
}

#[test]
/// # Panics
/// Panics if the cross gap is not inserted between wrapped lines.
fn cross_gap_between_lines() {
    let container = FlexContainerInputs {
        wrap: FlexWrap::Wrap,
        cross_gap: 10.0,
        ..row(250.0)
    };
    let out = layout_flex(&container, &three_items_100());
    assert_eq!(out.lines.len(), 2);
    assert_close(&cross_offsets(&out), &[0.0, 0.0, 30.0]);
    assert!((out.cross_extent - 50.0).abs() < 0.001);
}
