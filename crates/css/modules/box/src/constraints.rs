//! Min/max sizing range handed from a parent to a child.

use serde::{Deserialize, Serialize};

use crate::geometry::{Edges, Size};

/// A min/max width and height range. `f32::INFINITY` as a maximum means unbounded.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exactly `size`, nothing else.
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Anything from zero up to `size`.
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Zero up to `width` wide, any height.
    pub const fn loose_width(width: f32) -> Self {
        Self::new(0.0, width, 0.0, f32::INFINITY)
    }

    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    pub fn is_tight_width(&self) -> bool {
        self.has_bounded_width() && (self.max_width - self.min_width).abs() < f32::EPSILON
    }

    pub fn is_tight_height(&self) -> bool {
        self.has_bounded_height() && (self.max_height - self.min_height).abs() < f32::EPSILON
    }

    /// Clamp `size` into the range. Minimums win over maximums when they conflict.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp_axis(size.width, self.min_width, self.max_width),
            clamp_axis(size.height, self.min_height, self.max_height),
        )
    }

    /// Shrink the range by `edges` (padding + border), never below zero.
    pub fn deflate(&self, edges: Edges) -> Self {
        let horizontal = edges.horizontal();
        let vertical = edges.vertical();
        Self::new(
            (self.min_width - horizontal).max(0.0),
            (self.max_width - horizontal).max(0.0),
            (self.min_height - vertical).max(0.0),
            (self.max_height - vertical).max(0.0),
        )
    }

    /// Keep the maximums but drop the minimums.
    pub const fn loosen(&self) -> Self {
        Self::new(0.0, self.max_width, 0.0, self.max_height)
    }

    /// Replace the width range with exactly `width`.
    pub const fn with_tight_width(&self, width: f32) -> Self {
        Self::new(width, width, self.min_height, self.max_height)
    }

    /// Replace the height range with exactly `height`.
    pub const fn with_tight_height(&self, height: f32) -> Self {
        Self::new(self.min_width, self.max_width, height, height)
    }
}

#[inline]
fn clamp_axis(value: f32, min_v: f32, max_v: f32) -> f32 {
    let value = if value.is_nan() { 0.0 } else { value };
    value.min(max_v).max(min_v).max(0.0)
}
