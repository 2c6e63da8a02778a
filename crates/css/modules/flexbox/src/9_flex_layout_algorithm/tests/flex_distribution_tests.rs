//! Tests for flex-grow and flex-shrink distribution.

use super::*;

#[test]
/// # Panics
/// Panics if space-between does not push the outer items to the edges.
fn space_between_three_items() {
    let container = FlexContainerInputs {
        justify_content: JustifyContent::SpaceBetween,
        ..row(600.0)
    };
    let out = layout_flex(&container, &three_items_100());
    assert_close(&main_offsets(&out), &[0.0, 250.0, 500.0]);
    assert_close(&main_sizes(&out), &[100.0, 100.0, 100.0]);
}

#[test]
/// # Panics
/// Panics if positive free space is not shared in proportion to flex-grow.
fn grow_is_proportional() {
    let mut items = vec![item(1, 100.0), item(2, 100.0)];
    if let Some(first) = items.get_mut(0) {
        first.flex_grow = 1.0;
    }
    if let Some(second) = items.get_mut(1) {
        second.flex_grow = 2.0;
    }
    let out = layout_flex(&row(500.0), &items);
    assert_close(&main_sizes(&out), &[200.0, 300.0]);
    assert_close(&main_offsets(&out), &[0.0, 200.0]);
}

#[test]
/// # Panics
/// Panics if an item clamped at its max size does not hand its share to the others.
fn grow_freezes_at_max() {
    let mut items = vec![item(1, 100.0), item(2, 100.0)];
    for child in &mut items {
        child.flex_grow = 1.0;
    }
    if let Some(first) = items.get_mut(0) {
        first.max_main = 150.0;
    }
    let out = layout_flex(&row(400.0), &items);
    assert_close(&main_sizes(&out), &[150.0, 250.0]);
}

#[test]
/// # Panics
/// Panics if a grow sum below one distributes more than its fraction of the free space.
fn fractional_grow_leaves_space() {
    let mut items = vec![item(1, 100.0)];
    if let Some(first) = items.get_mut(0) {
        first.flex_grow = 0.5;
    }
    let out = layout_flex(&row(300.0), &items);
    assert_close(&main_sizes(&out), &[200.0]);
}

#[test]
/// # Panics
/// Panics if shrinking is not weighted by flex-shrink times base size or ignores min sizes.
fn shrink_weighted_and_clamped() {
    let items = vec![item(1, 200.0), item(2, 100.0)];
    let out = layout_flex(&row(150.0), &items);
    assert_close(&main_sizes(&out), &[100.0, 50.0]);

    let mut clamped = items;
    if let Some(second) = clamped.get_mut(1) {
        second.min_main = 80.0;
    }
    let out = layout_flex(&row(150.0), &clamped);
    assert_close(&main_sizes(&out), &[70.0, 80.0]);
}

#[test]
/// # Panics
/// Panics if items with flex-shrink 0 are shrunk.
fn zero_shrink_overflows() {
    let mut items = vec![item(1, 200.0), item(2, 200.0)];
    for child in &mut items {
        child.flex_shrink = 0.0;
    }
    let out = layout_flex(&row(300.0), &items);
    assert_close(&main_sizes(&out), &[200.0, 200.0]);
    assert_close(&main_offsets(&out), &[0.0, 200.0]);
}

#[test]
/// # Panics
/// Panics if an indefinite main size flexes items or fails to size to content.
fn indefinite_main_size_does_not_flex() {
    let mut items = three_items_100();
    for child in &mut items {
        child.flex_grow = 1.0;
    }
    let out = layout_flex(&FlexContainerInputs::default(), &items);
    assert_close(&main_sizes(&out), &[100.0, 100.0, 100.0]);
    assert!((out.main_extent - 300.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if justify-content keywords place items incorrectly.
fn justify_keywords() {
    let cases = [
        (JustifyContent::Start, [0.0, 100.0, 200.0]),
        (JustifyContent::End, [300.0, 400.0, 500.0]),
        (JustifyContent::Center, [150.0, 250.0, 350.0]),
        (JustifyContent::SpaceAround, [50.0, 250.0, 450.0]),
        (JustifyContent::SpaceEvenly, [75.0, 250.0, 425.0]),
    ];
    for (justify, expected) in cases {
        let container = FlexContainerInputs {
            justify_content: justify,
            ..row(600.0)
        };
        let out = layout_flex(&container, &three_items_100());
        assert_close(&main_offsets(&out), &expected);
    }
}

#[test]
/// # Panics
/// Panics if an empty container produces lines or a baseline.
fn empty_container() {
    let out = layout_flex(&row(100.0), &[]);
    assert!(out.items.is_empty());
    assert!(out.lines.is_empty());
    assert!(out.first_baseline.is_none());
    assert!(out.cross_extent.abs() < 0.001);
}
