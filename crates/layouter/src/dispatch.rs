//! The layout entry point: one exhaustive match on [`Display`], behind the per-pass
//! memo in [`crate::cache`].

use css_box::{Constraints, Point, Rect, Size};
use log::{trace, warn};

use crate::block::layout_block;
use crate::cache::Measured;
use crate::context::LayoutContext;
use crate::flex::layout_flex_container;
use crate::grid::layout_grid_container;
use crate::node::Node;
use crate::positioned::layout_out_of_flow;
use crate::style::Display;
use crate::text::layout_text;
use crate::values::resolve_lengths;

/// Lay out `node` within `constraints` and return its border-box size.
///
/// Writes `node.rect`'s size and every descendant's rect; the caller positions the
/// node itself. The result satisfies the constraints except where content cannot
/// shrink further. A call at depth zero starts a new pass; see [`begin_pass`].
pub fn layout(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    if ctx.starts_pass() {
        begin_pass(node, ctx);
    }
    layout_memoized(node, constraints, ctx).size
}

/// Size and first baseline of `node` under `constraints`, reusing any result computed
/// earlier in the pass.
///
/// Unlike [`layout`] this may leave the subtree holding output for other constraints,
/// so anything that will be placed must still go through [`layout`].
pub fn measure(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Measured {
    if ctx.starts_pass() {
        begin_pass(node, ctx);
    }
    if let Some(hit) = node.cache.measured_for(constraints) {
        return hit;
    }
    layout_memoized(node, constraints, ctx)
}

/// Drop results memoized by earlier passes and compute unit-tagged lengths.
pub fn begin_pass(root: &mut Node, ctx: &LayoutContext<'_>) {
    root.reset_cache();
    resolve_lengths(root, ctx);
}

fn layout_memoized(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Measured {
    if let Some(hit) = node.cache.layout_for(constraints) {
        trace!(
            target: "layout::dispatch",
            "[CACHE] depth={} display={:?} reusing {:.2}x{:.2}",
            ctx.depth(),
            node.style.display,
            hit.size.width,
            hit.size.height
        );
        node.rect.width = hit.size.width;
        node.rect.height = hit.size.height;
        return hit;
    }
    let size = run(node, constraints, ctx);
    let entry = Measured {
        constraints,
        size,
        baseline: node.baseline,
    };
    if node.is_displayed() && !ctx.too_deep() {
        node.cache.record(entry);
    }
    entry
}

fn run(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    if ctx.too_deep() {
        warn!(
            target: "layout::dispatch",
            "[DEPTH] depth {} exceeds max_depth {}, laying out subtree as empty",
            ctx.depth(),
            ctx.config.max_depth
        );
        node.clear_layout();
        return Size::ZERO;
    }
    let size = match node.style.display {
        Display::None => {
            node.clear_layout();
            return Size::ZERO;
        }
        Display::Block => layout_block(node, constraints, ctx),
        Display::Flex => layout_flex_container(node, constraints, ctx),
        Display::Grid => layout_grid_container(node, constraints, ctx),
        Display::Text => layout_text(node, constraints, ctx),
    };
    debug_assert!(
        size.width >= 0.0 && size.height >= 0.0,
        "negative layout size {size:?}"
    );
    node.rect.width = size.width;
    node.rect.height = size.height;
    layout_out_of_flow(node, ctx);
    trace!(
        target: "layout::dispatch",
        "[LAYOUT] depth={} display={:?} size={:.2}x{:.2}",
        ctx.depth(),
        node.style.display,
        size.width,
        size.height
    );
    size
}

/// Lay out a root box and place it at the origin.
pub fn layout_root(root: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    let size = layout(root, constraints, ctx);
    root.rect = Rect::new(0.0, 0.0, size.width, size.height);
    size
}

/// Lay out a root box at the configured viewport width.
pub fn layout_in_viewport(root: &mut Node, ctx: &LayoutContext<'_>) -> Size {
    layout_root(root, ctx.config.viewport_constraints(), ctx)
}

/// Move an already laid out child to `(x, y)` in its parent, plus its relative offset.
#[inline]
pub fn place(child: &mut Node, x: f32, y: f32) {
    let shift = if child.style.position.is_offset_in_flow() {
        child.style.inset.relative_offset()
    } else {
        Point::ZERO
    };
    child.rect.x = x + shift.x;
    child.rect.y = y + shift.y;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use css_text::MonospaceMeasurer;

    const TEN: MonospaceMeasurer = MonospaceMeasurer::new(10.0);

    #[test]
    /// # Panics
    /// Panics if a repeated request within a pass walks the subtree again, or if a new
    /// pass reuses stale results.
    fn results_are_reused_within_a_pass() {
        let ctx = LayoutContext::new(&TEN);
        let nested = ctx.nested();
        let mut node = Node::fixed(30.0, 10.0);
        let constraints = Constraints::loose_width(100.0);

        assert_eq!(layout(&mut node, constraints, &nested), Size::new(30.0, 10.0));
        node.style.width = Some(50.0);
        assert_eq!(layout(&mut node, constraints, &nested), Size::new(30.0, 10.0));
        assert_eq!(measure(&mut node, constraints, &nested).size, Size::new(30.0, 10.0));

        assert_eq!(layout(&mut node, constraints, &ctx), Size::new(50.0, 10.0));
        assert!((node.rect.width - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if a measurement under other constraints is reported as the subtree output.
    fn measuring_elsewhere_forces_a_fresh_layout() {
        let ctx = LayoutContext::new(&TEN);
        let nested = ctx.nested();
        let mut node = Node::with_children(Style::default(), vec![Node::fixed(30.0, 10.0)]);

        layout(&mut node, Constraints::loose_width(100.0), &nested);
        measure(&mut node, Constraints::tight(Size::new(60.0, 40.0)), &nested);
        assert!((node.rect.width - 60.0).abs() < f32::EPSILON);

        let size = layout(&mut node, Constraints::loose_width(100.0), &nested);
        assert!((size.width - 100.0).abs() < f32::EPSILON);
        assert!((node.rect.width - 100.0).abs() < f32::EPSILON);
    }
}
