//! Min-content and max-content widths, used for shrink-to-fit sizing and grid track
//! contributions.
//!
//! Spec: <https://www.w3.org/TR/css-sizing-3/#intrinsic-sizes>

use css_box::Constraints;
use log::trace;

use crate::context::LayoutContext;
use crate::dispatch::{begin_pass, measure};
use crate::flex::row_intrinsic_widths;
use crate::grid::grid_intrinsic_widths;
use crate::node::Node;
use crate::style::Display;
use crate::text::text_intrinsic_widths;

/// Intrinsic border-box widths of one box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IntrinsicSizes {
    pub min_content: f32,
    pub max_content: f32,
}

impl IntrinsicSizes {
    #[inline]
    pub const fn fixed(width: f32) -> Self {
        Self {
            min_content: width,
            max_content: width,
        }
    }
}

/// Intrinsic border-box widths of `node`.
///
/// Boxes in a vertical writing mode have no wrapping along the width, so both sizes
/// come from an unconstrained layout. May write layout output into the subtree; a
/// later [`layout`] overwrites it. Results are memoized for the rest of the pass.
///
/// [`layout`]: crate::dispatch::layout
pub fn intrinsic_widths(node: &mut Node, ctx: &LayoutContext<'_>) -> IntrinsicSizes {
    if ctx.starts_pass() {
        begin_pass(node, ctx);
    }
    if !node.is_displayed() || ctx.too_deep() {
        return IntrinsicSizes::default();
    }
    if let Some(sizes) = node.cache.intrinsic() {
        return sizes;
    }
    let sizes = compute_intrinsic_widths(node, ctx);
    // Measuring may have laid descendants out under other constraints.
    node.cache.forget_layout();
    node.cache.set_intrinsic(sizes);
    sizes
}

fn compute_intrinsic_widths(node: &mut Node, ctx: &LayoutContext<'_>) -> IntrinsicSizes {
    if let Some(width) = node.style.border_box_width() {
        return IntrinsicSizes::fixed(width);
    }
    if node.style.writing_mode.is_vertical() {
        return IntrinsicSizes::fixed(measure(node, Constraints::unbounded(), ctx).size.width);
    }

    let (min_content, max_content) = match node.style.display {
        Display::None => (0.0, 0.0),
        Display::Text => text_intrinsic_widths(node, ctx),
        Display::Block => {
            let nested = ctx.nested();
            node.children
                .iter_mut()
                .filter(|child| child.is_in_flow())
                .fold((0.0f32, 0.0f32), |(min, max), child| {
                    let margins =
                        child.style.margin.left.or_zero() + child.style.margin.right.or_zero();
                    let sizes = intrinsic_widths(child, &nested);
                    (
                        min.max(sizes.min_content + margins),
                        max.max(sizes.max_content + margins),
                    )
                })
        }
        Display::Flex => row_intrinsic_widths(node, ctx, |child, nested| {
            let sizes = intrinsic_widths(child, nested);
            (sizes.min_content, sizes.max_content)
        }),
        Display::Grid => grid_intrinsic_widths(node, ctx),
    };

    let limits = node.style.width_limits();
    let extra = node.style.padding_border().horizontal();
    let sizes = IntrinsicSizes {
        min_content: limits.clamp(min_content) + extra,
        max_content: limits.clamp(max_content.max(min_content)) + extra,
    };
    trace!(
        target: "layout::intrinsic",
        "[INTRINSIC] display={:?} min={:.2} max={:.2}",
        node.style.display,
        sizes.min_content,
        sizes.max_content
    );
    sizes
}
