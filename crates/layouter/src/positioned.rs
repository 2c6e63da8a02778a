//! Out-of-flow boxes: `position: absolute` and `position: fixed`.
//!
//! Flow algorithms skip these boxes. Once a positioned box has its size, it sizes and
//! places the absolute descendants it contains, reaching through static boxes in
//! between. The pass root does the same for fixed descendants against the viewport,
//! and for absolute ones that have no positioned ancestor.
//!
//! Spec: <https://www.w3.org/TR/css-position-3/#abspos-layout>

use css_box::{Constraints, Point, Rect};
use css_position::Position;
use log::{debug, trace};

use crate::context::LayoutContext;
use crate::dispatch::{layout, place};
use crate::intrinsic::intrinsic_widths;
use crate::node::Node;

/// Which out-of-flow descendants a walk lays out.
#[derive(Copy, Clone, Debug)]
struct Scope {
    /// Containing block of absolute boxes, in the container's coordinates.
    absolute: Option<Rect>,
    /// The viewport, in the pass root's coordinates.
    fixed: Option<Rect>,
}

/// Lay out the out-of-flow descendants `node` is the containing block for.
///
/// `node` must already have its size. A positioned box contains absolute descendants;
/// the pass root also contains fixed ones, and absolute ones without a positioned
/// ancestor.
pub fn layout_out_of_flow(node: &mut Node, ctx: &LayoutContext<'_>) {
    let is_root = ctx.starts_pass();
    if !is_root && !node.style.position.is_positioned() {
        return;
    }
    let border = node.style.border.non_negative();
    let padding_box = Rect::new(
        border.left,
        border.top,
        (node.rect.width - border.horizontal()).max(0.0),
        (node.rect.height - border.vertical()).max(0.0),
    );
    let viewport = ctx.config.viewport();
    let scope = Scope {
        absolute: Some(padding_box),
        fixed: is_root.then_some(Rect::new(0.0, 0.0, viewport.width, viewport.height)),
    };
    let placed = walk(&mut node.children, Point::ZERO, scope, &ctx.nested());
    if placed > 0 {
        debug!(
            target: "layout::positioned",
            "[OUT-OF-FLOW] placed={placed} depth={} root={is_root}",
            ctx.depth()
        );
    }
}

/// Visit `children` of a box whose border-box origin is `origin` in the container's
/// coordinates. Returns how many boxes were placed.
fn walk(children: &mut [Node], origin: Point, scope: Scope, ctx: &LayoutContext<'_>) -> usize {
    if ctx.too_deep() {
        return 0;
    }
    let mut placed = 0usize;
    for child in children.iter_mut().filter(|child| child.is_displayed()) {
        let position = child.style.position;
        let containing = match position {
            Position::Absolute => scope.absolute,
            Position::Fixed => scope.fixed,
            Position::Static | Position::Relative | Position::Sticky => None,
        };
        if let Some(containing) = containing {
            place_out_of_flow(child, containing, origin, ctx);
            placed += 1;
        }
        // A positioned box handles absolute boxes below it; fixed ones stay with the root.
        let inner = Scope {
            absolute: scope.absolute.filter(|_| !position.is_positioned()),
            fixed: scope.fixed,
        };
        if inner.absolute.is_some() || inner.fixed.is_some() {
            let child_origin = Point::new(origin.x + child.rect.x, origin.y + child.rect.y);
            placed += walk(&mut child.children, child_origin, inner, &ctx.nested());
        }
    }
    placed
}

/// Size `child` against `containing` and place it. `origin` is the child's parent
/// border-box origin in the same coordinates as `containing`.
fn place_out_of_flow(child: &mut Node, containing: Rect, origin: Point, ctx: &LayoutContext<'_>) {
    let style = &child.style;
    let margins = style.margin.fixed();
    let horizontal = style.inset.horizontal();
    let vertical = style.inset.vertical();
    let (min_width, max_width) = style.border_box_width_range();
    let (min_height, max_height) = style.border_box_height_range();

    let stretched_width = horizontal.stretch_size(margins.horizontal(), containing.width);
    let width = match (style.border_box_width(), stretched_width) {
        (Some(width), _) => width,
        (None, Some(stretched)) => stretched,
        (None, None) => {
            let available = horizontal.available_size(margins.horizontal(), containing.width);
            let sizes = intrinsic_widths(child, ctx);
            sizes.max_content.min(available.max(sizes.min_content))
        }
    }
    .clamp(min_width, max_width.max(min_width));
    let height = child
        .style
        .border_box_height()
        .or_else(|| vertical.stretch_size(margins.vertical(), containing.height))
        .map(|height| height.clamp(min_height, max_height.max(min_height)));

    let constraints = match height {
        Some(height) => Constraints::new(width, width, height, height),
        None => Constraints::new(width, width, 0.0, f32::INFINITY),
    };
    let size = layout(child, constraints, ctx);
    let x = containing.x
        + horizontal.offset(size.width, margins.left, margins.right, containing.width);
    let y = containing.y
        + vertical.offset(size.height, margins.top, margins.bottom, containing.height);
    place(child, x - origin.x, y - origin.y);
    trace!(
        target: "layout::positioned",
        "[PLACE] {:?} at {:.2},{:.2} size={:.2}x{:.2}",
        child.style.position,
        child.rect.x,
        child.rect.y,
        size.width,
        size.height
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::layout_root;
    use crate::style::Style;
    use css_box::{Edges, Size};
    use css_position::Insets;
    use css_text::MonospaceMeasurer;

    const TEN: MonospaceMeasurer = MonospaceMeasurer::new(10.0);

    fn absolute(width: f32, height: f32, inset: Insets) -> Node {
        Node::fixed(width, height).with_position(Position::Absolute, inset)
    }

    #[test]
    /// # Panics
    /// Panics if an absolute box takes space in flow or misses its insets.
    fn absolute_boxes_leave_the_flow() {
        let inset = Insets {
            top: Some(5.0),
            left: Some(10.0),
            ..Insets::AUTO
        };
        let mut root = Node::with_children(
            Style::default(),
            vec![absolute(40.0, 20.0, inset), Node::fixed(30.0, 30.0)],
        );
        root.style.position = Position::Relative;
        let size = layout_root(&mut root, Constraints::loose_width(200.0), &LayoutContext::new(&TEN));
        assert_eq!(size, Size::new(200.0, 30.0));
        assert_eq!(root.rect_at(&[0]), Some(Rect::new(10.0, 5.0, 40.0, 20.0)));
        assert_eq!(root.rect_at(&[1]), Some(Rect::new(0.0, 0.0, 30.0, 30.0)));
    }

    #[test]
    /// # Panics
    /// Panics if insets on both sides do not stretch an auto-sized box.
    fn pinned_boxes_stretch_inside_the_padding_box() {
        let stretched = Node::new(Style::default()).with_position(Position::Absolute, Insets::all(10.0));
        let mut root = Node::fixed(200.0, 100.0).with_padding(Edges::uniform(5.0));
        root.style.border = Edges::uniform(2.0);
        root.style.position = Position::Relative;
        root.children.push(stretched);
        layout_root(&mut root, Constraints::unbounded(), &LayoutContext::new(&TEN));
        // Border box 214x114; padding box 210x110 starting at the border.
        assert_eq!(root.rect_at(&[0]), Some(Rect::new(12.0, 12.0, 190.0, 90.0)));
    }

    #[test]
    /// # Panics
    /// Panics if an absolute box skips a static parent to reach its containing block.
    fn static_parents_are_skipped() {
        let inset = Insets {
            right: Some(0.0),
            bottom: Some(0.0),
            ..Insets::AUTO
        };
        let inner = Node::with_children(Style::default(), vec![absolute(20.0, 10.0, inset)])
            .with_padding(Edges::uniform(7.0));
        let mut root = Node::fixed(100.0, 80.0).with_position(Position::Relative, Insets::AUTO);
        root.children.push(inner);
        layout_root(&mut root, Constraints::unbounded(), &LayoutContext::new(&TEN));
        let parent = root.rect_at(&[0]).unwrap_or_default();
        let child = root.rect_at(&[0, 0]).unwrap_or_default();
        assert!((parent.x + child.x - 80.0).abs() < 0.001);
        assert!((parent.y + child.y - 70.0).abs() < 0.001);
    }
}
