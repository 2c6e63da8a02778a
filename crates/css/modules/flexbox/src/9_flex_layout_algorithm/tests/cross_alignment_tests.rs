//! Tests for align-items and align-self within a line.

use super::*;

fn mixed_items() -> Vec<FlexChild> {
    let mut tall = FlexChild::new(ItemRef(1), 50.0, 60.0);
    tall.cross_size_auto = false;
    let mut short = FlexChild::new(ItemRef(2), 50.0, 20.0);
    short.cross_size_auto = true;
    vec![tall, short]
}

#[test]
/// # Panics
/// Panics if stretch does not fill the line or touches items with a definite cross size.
fn stretch_fills_line() {
    let out = layout_flex(&row(200.0), &mixed_items());
    let crosses: Vec<f32> = out.items.iter().map(|placement| placement.cross_size).collect();
    assert_close(&crosses, &[60.0, 60.0]);
    assert!((out.cross_extent - 60.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if stretch ignores max-cross or margins.
fn stretch_respects_max_and_margins() {
    let mut items = mixed_items();
    if let Some(short) = items.get_mut(1) {
        short.max_cross = 45.0;
        short.cross_margins = AxisMargins::new(5.0, 5.0);
    }
    let out = layout_flex(&row(200.0), &items);
    let short = out.items.get(1).copied();
    assert!((short.map_or(0.0, |placement| placement.cross_size) - 45.0).abs() < 0.001);
    assert!((short.map_or(0.0, |placement| placement.cross_offset) - 5.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if start/end/center offsets are wrong.
fn align_keywords() {
    for (align, expected) in [
        (AlignItems::Start, 0.0),
        (AlignItems::End, 40.0),
        (AlignItems::Center, 20.0),
    ] {
        let container = FlexContainerInputs {
            align_items: align,
            ..row(200.0)
        };
        let out = layout_flex(&container, &mixed_items());
        assert_close(&cross_offsets(&out), &[0.0, expected]);
    }
}

#[test]
/// # Panics
/// Panics if align-self does not override align-items.
fn align_self_overrides() {
    let mut items = mixed_items();
    if let Some(short) = items.get_mut(1) {
        short.align_self = Some(AlignItems::End);
    }
    let out = layout_flex(&row(200.0), &items);
    assert_close(&cross_offsets(&out), &[0.0, 40.0]);
}

#[test]
/// # Panics
/// Panics if a single nowrap line ignores the container's definite cross size.
fn single_line_uses_definite_cross_size() {
    let container = FlexContainerInputs {
        cross_size: Some(100.0),
        align_items: AlignItems::Center,
        ..row(200.0)
    };
    let out = layout_flex(&container, &mixed_items());
    assert_close(&cross_offsets(&out), &[20.0, 40.0]);
    assert!((out.lines.first().map_or(0.0, |line| line.cross_size) - 100.0).abs() < 0.001);
}
