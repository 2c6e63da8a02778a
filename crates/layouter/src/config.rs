//! Engine configuration.
//!
//! Values can be constructed directly or read from the environment:
//! - `LAYOUT_VIEWPORT_WIDTH` / `LAYOUT_VIEWPORT_HEIGHT`: root constraints (default 800×600)
//! - `LAYOUT_DEFAULT_FONT_SIZE`: font size for text without a usable one (default 16)
//! - `LAYOUT_MAX_DEPTH`: recursion bound (default 256)

use std::env;

use css_box::{Constraints, Size};
use css_text::DEFAULT_FONT_SIZE;

/// Default bound on nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Runtime configuration for a layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub default_font_size: f32,
    /// Deepest box that is laid out. Anything below gets zero rects and a warning.
    ///
    /// Each level costs a handful of stack frames (dispatcher, algorithm, intrinsic
    /// measurement). Real UI trees rarely pass 64 levels; the default leaves headroom
    /// on a 2 MiB thread stack.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            default_font_size: DEFAULT_FONT_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LayoutConfig {
    /// Load configuration from environment variables, keeping defaults for absent
    /// or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`.
    pub fn from_lookup<Lookup>(lookup: Lookup) -> Self
    where
        Lookup: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let length = |key: &str, fallback: f32| {
            lookup(key)
                .and_then(|val| val.trim().parse::<f32>().ok())
                .filter(|value| value.is_finite() && *value > 0.0)
                .unwrap_or(fallback)
        };
        let max_depth = lookup("LAYOUT_MAX_DEPTH")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .filter(|depth| *depth > 0)
            .unwrap_or(defaults.max_depth);
        Self {
            viewport_width: length("LAYOUT_VIEWPORT_WIDTH", defaults.viewport_width),
            viewport_height: length("LAYOUT_VIEWPORT_HEIGHT", defaults.viewport_height),
            default_font_size: length("LAYOUT_DEFAULT_FONT_SIZE", defaults.default_font_size),
            max_depth,
        }
    }

    #[inline]
    pub const fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    /// Constraints for a root laid out in the viewport: fixed width, any height.
    #[inline]
    pub const fn viewport_constraints(&self) -> Constraints {
        Constraints::new(self.viewport_width, self.viewport_width, 0.0, f32::INFINITY)
    }
}
