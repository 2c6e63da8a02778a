//! Computed values: unit-tagged lengths resolved to px at the start of a pass.
//!
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>

use css_values_units::{LengthBasis, Viewport};
use log::{debug, warn};

use crate::context::LayoutContext;
use crate::node::Node;
use crate::style::Style;

/// Font size a box's `em` and `ch` lengths resolve against.
fn font_size(style: &Style, ctx: &LayoutContext<'_>) -> f32 {
    let size = style.text.font_size;
    if size.is_finite() && size > 0.0 {
        size
    } else {
        ctx.config.default_font_size
    }
}

/// Resolve every box's [`SpecifiedLengths`] into its px fields. `rem` resolves
/// against `root`'s font size and viewport units against the configured viewport.
///
/// [`SpecifiedLengths`]: crate::style::SpecifiedLengths
pub fn resolve_lengths(root: &mut Node, ctx: &LayoutContext<'_>) {
    let root_font_size = font_size(&root.style, ctx);
    let viewport = Viewport {
        width_px: ctx.config.viewport_width,
        height_px: ctx.config.viewport_height,
    };
    let mut resolved = 0usize;
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if !node.style.lengths.is_empty() {
            let mut measure_style = node.style.text.measure_style();
            measure_style.font_size = font_size(&node.style, ctx);
            let basis = LengthBasis {
                font_size_px: measure_style.font_size,
                root_font_size_px: root_font_size,
                zero_advance_px: ctx.measurer.measure("0", &measure_style).advance,
                viewport: Some(viewport),
            };
            let unresolved = node.style.apply_lengths(&basis);
            if unresolved > 0 {
                warn!(
                    target: "layout::values",
                    "[UNITS] {unresolved} non-finite lengths left at their px values"
                );
            }
            resolved += 1;
        }
        pending.extend(node.children.iter_mut());
    }
    if resolved > 0 {
        debug!(target: "layout::values", "[UNITS] resolved lengths on {resolved} boxes");
    }
}
