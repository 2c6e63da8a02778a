//! Box-sizing conversions and length sanitizing.
//! Spec: <https://www.w3.org/TR/css-sizing-3/#box-sizing>

use serde::{Deserialize, Serialize};

/// Which box `width`/`height` refer to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// Convert a specified length to a content-box length.
///
/// `padding_border` is the sum of padding and border along the same axis.
/// A border-box length smaller than its padding and border yields zero.
#[inline]
pub fn content_box_size(specified: f32, sizing: BoxSizing, padding_border: f32) -> f32 {
    let specified = sanitize_length(specified);
    match sizing {
        BoxSizing::ContentBox => specified,
        BoxSizing::BorderBox => (specified - padding_border).max(0.0),
    }
}

/// Negative, NaN and infinite lengths become zero.
#[inline]
pub fn sanitize_length(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Clamp `value` by a minimum and an optional maximum. The minimum wins on conflict.
#[inline]
pub fn clamp_between(value: f32, min_v: f32, max_v: Option<f32>) -> f32 {
    let capped = max_v.map_or(value, |max_value| value.min(max_value));
    capped.max(min_v)
}
