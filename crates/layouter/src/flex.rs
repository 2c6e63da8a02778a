//! Flex containers: resolve each child into a [`FlexChild`], run the flex algorithm,
//! then lay the children out again at their final sizes.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

use css_box::{Constraints, Size, content_box_size};
use css_flexbox::{
    AxisMargins, FlexChild, FlexContainerInputs, ItemRef, ItemStyle, collect_flex_items,
    layout_flex, resolve_axes,
};
use log::debug;

use crate::context::LayoutContext;
use crate::dispatch::{layout, measure, place};
use crate::node::Node;
use crate::sizing::{LogicalBox, finish_size};
use crate::style::{MarginValue, Style};

/// Physical margins along one axis, `start` on the left or top.
fn axis_margins(start: MarginValue, end: MarginValue) -> AxisMargins {
    AxisMargins {
        start: start.or_zero(),
        end: end.or_zero(),
        start_auto: start.is_auto(),
        end_auto: end.is_auto(),
    }
}

/// A child's border-box limits along one physical axis.
#[derive(Copy, Clone, Debug)]
struct ChildAxis {
    specified: Option<f32>,
    min: f32,
    max: f32,
    margins: AxisMargins,
}

impl ChildAxis {
    fn horizontal(style: &Style) -> Self {
        let (min, max) = style.border_box_width_range();
        Self {
            specified: style.border_box_width(),
            min,
            max,
            margins: axis_margins(style.margin.left, style.margin.right),
        }
    }

    fn vertical(style: &Style) -> Self {
        let (min, max) = style.border_box_height_range();
        Self {
            specified: style.border_box_height(),
            min,
            max,
            margins: axis_margins(style.margin.top, style.margin.bottom),
        }
    }

    #[inline]
    fn clamp(&self, value: f32) -> f32 {
        value.min(self.max).max(self.min).max(0.0)
    }
}

/// Constraints with `main` and `cross` mapped onto physical axes.
fn axis_constraints(
    main: (f32, f32),
    cross: (f32, f32),
    main_is_horizontal: bool,
) -> Constraints {
    if main_is_horizontal {
        Constraints::new(main.0, main.1, cross.0, cross.1)
    } else {
        Constraints::new(cross.0, cross.1, main.0, main.1)
    }
}

#[inline]
const fn split(size: Size, main_is_horizontal: bool) -> (f32, f32) {
    if main_is_horizontal {
        (size.width, size.height)
    } else {
        (size.height, size.width)
    }
}

/// `flex-basis` as a border-box length, honouring `box-sizing`.
fn border_box_basis(style: &Style, basis: f32, main_is_horizontal: bool) -> f32 {
    let padding_border = style.padding_border();
    let extra = if main_is_horizontal {
        padding_border.horizontal()
    } else {
        padding_border.vertical()
    };
    content_box_size(basis, style.box_sizing, extra) + extra
}

/// Lay out a flex container.
pub fn layout_flex_container(
    node: &mut Node,
    constraints: Constraints,
    ctx: &LayoutContext<'_>,
) -> Size {
    let style = &node.style;
    let flex = style.flex;
    let writing_mode = style.writing_mode;
    let padding_border = style.padding_border();
    let axes = resolve_axes(flex.direction, flex.wrap, writing_mode, style.direction);
    let main_is_horizontal = axes.main_is_horizontal;

    let logical = LogicalBox::new(style, constraints);
    let (definite_width, definite_height) = if writing_mode.is_vertical() {
        (logical.definite_block(), logical.definite_inline())
    } else {
        (logical.definite_inline(), logical.definite_block())
    };
    let width_limits = style.width_limits();
    let height_limits = style.height_limits();
    let content_room = constraints.deflate(padding_border);
    let width_room = width_limits
        .max
        .map_or(content_room.max_width, |max| content_room.max_width.min(max));
    let height_room = height_limits
        .max
        .map_or(content_room.max_height, |max| content_room.max_height.min(max));

    let (main_size, cross_size, main_room, cross_room) = if main_is_horizontal {
        (definite_width, definite_height, width_room, height_room)
    } else {
        (definite_height, definite_width, height_room, width_room)
    };
    let (main_gap, cross_gap) = if flex.direction.is_row() {
        (style.column_gap(), style.row_gap())
    } else {
        (style.row_gap(), style.column_gap())
    };
    let inputs = FlexContainerInputs {
        flex_direction: flex.direction,
        wrap: flex.wrap,
        writing_mode,
        direction: style.direction,
        justify_content: flex.justify_content,
        align_items: flex.align_items,
        align_content: flex.align_content,
        main_size,
        available_main: main_room,
        cross_size,
        main_gap,
        cross_gap,
    };

    let handles: Vec<(ItemRef, ItemStyle)> = node
        .children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            (
                ItemRef(index as u64),
                ItemStyle {
                    is_none: !child.is_displayed(),
                    is_out_of_flow: child.style.position.is_out_of_flow(),
                    order: child.style.flex.order,
                },
            )
        })
        .collect();
    let ordered = collect_flex_items(&handles);
    for child in node.children.iter_mut().filter(|child| !child.is_displayed()) {
        child.clear_layout();
    }

    let nested = ctx.nested();
    let cross_limit = cross_size.unwrap_or(cross_room);
    let mut items = Vec::with_capacity(ordered.len());
    for handle in ordered {
        let Some(child) = usize::try_from(handle.0)
            .ok()
            .and_then(|index| node.children.get_mut(index))
        else {
            continue;
        };
        let (main_axis, cross_axis) = if main_is_horizontal {
            (ChildAxis::horizontal(&child.style), ChildAxis::vertical(&child.style))
        } else {
            (ChildAxis::vertical(&child.style), ChildAxis::horizontal(&child.style))
        };
        let cross_fit = (cross_limit - cross_axis.margins.fixed_total()).max(0.0);
        let cross_bounds = cross_axis
            .specified
            .map_or((0.0, cross_fit), |size| {
                let size = cross_axis.clamp(size);
                (size, size)
            });

        // flex-basis: explicit length, else the main size, else max-content.
        let basis = match (child.style.flex.basis, main_axis.specified) {
            (Some(basis), _) => border_box_basis(&child.style, basis, main_is_horizontal),
            (None, Some(size)) => size,
            (None, None) => {
                let content_sized = axis_constraints((0.0, f32::INFINITY), cross_bounds, main_is_horizontal);
                split(measure(child, content_sized, &nested).size, main_is_horizontal).0
            }
        };

        // Hypothetical cross size at the hypothetical main size.
        let hypothetical_main = main_axis.clamp(basis);
        let hypothetical = axis_constraints(
            (hypothetical_main, hypothetical_main),
            cross_bounds,
            main_is_horizontal,
        );
        let measured = measure(child, hypothetical, &nested);
        let (_, measured_cross) = split(measured.size, main_is_horizontal);

        items.push(FlexChild {
            flex_grow: child.style.flex.grow.max(0.0),
            flex_shrink: child.style.flex.shrink.max(0.0),
            min_main: main_axis.min,
            max_main: main_axis.max,
            main_margins: main_axis.margins,
            cross_size_auto: cross_axis.specified.is_none(),
            min_cross: cross_axis.min,
            max_cross: cross_axis.max,
            cross_margins: cross_axis.margins,
            align_self: child.style.flex.align_self,
            baseline: measured.baseline,
            ..FlexChild::new(handle, basis, measured_cross)
        });
    }

    let result = layout_flex(&inputs, &items);
    for placement in &result.items {
        let Some(child) = usize::try_from(placement.handle.0)
            .ok()
            .and_then(|index| node.children.get_mut(index))
        else {
            continue;
        };
        let (width, height, x, y) = if main_is_horizontal {
            (
                placement.main_size,
                placement.cross_size,
                placement.main_offset,
                placement.cross_offset,
            )
        } else {
            (
                placement.cross_size,
                placement.main_size,
                placement.cross_offset,
                placement.main_offset,
            )
        };
        layout(child, Constraints::tight(Size::new(width, height)), &nested);
        place(child, padding_border.left + x, padding_border.top + y);
    }

    let (extent_width, extent_height) = if main_is_horizontal {
        (result.main_extent, result.cross_extent)
    } else {
        (result.cross_extent, result.main_extent)
    };
    let content = Size::new(
        definite_width.unwrap_or_else(|| width_limits.clamp(extent_width)),
        definite_height.unwrap_or_else(|| height_limits.clamp(extent_height)),
    );
    let size = finish_size(content, padding_border, constraints);
    node.baseline = result
        .first_baseline
        .map(|baseline| baseline + padding_border.top);

    debug!(
        target: "layout::flex",
        "[FLEX] items={} lines={} size={:.2}x{:.2} main_horizontal={main_is_horizontal}",
        result.items.len(),
        result.lines.len(),
        size.width,
        size.height
    );
    size
}

/// Min-content and max-content border-box widths of a horizontal-axis flex row's
/// items, summed (or maxed) the way the row lays them out.
pub fn row_intrinsic_widths(
    node: &mut Node,
    ctx: &LayoutContext<'_>,
    item_widths: impl Fn(&mut Node, &LayoutContext<'_>) -> (f32, f32),
) -> (f32, f32) {
    let style = &node.style;
    let gap = style.column_gap();
    let wraps = style.flex.wrap.is_wrapping();
    let is_row = !style.writing_mode.is_vertical() && style.flex.direction.is_row();
    let nested = ctx.nested();
    let mut count = 0usize;
    let (mut min_total, mut max_total) = (0.0f32, 0.0f32);
    for child in node.children.iter_mut().filter(|child| child.is_in_flow()) {
        let margins = child.style.margin.left.or_zero() + child.style.margin.right.or_zero();
        let (min, max) = item_widths(child, &nested);
        let (min, max) = (min + margins, max + margins);
        count += 1;
        if is_row {
            min_total = if wraps { min_total.max(min) } else { min_total + min };
            max_total += max;
        } else {
            min_total = min_total.max(min);
            max_total = max_total.max(max);
        }
    }
    if is_row && count > 1 {
        let gaps = gap * (count - 1) as f32;
        max_total += gaps;
        if !wraps {
            min_total += gaps;
        }
    }
    (min_total, max_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Display, FlexStyle};
    use css_flexbox::{AlignContent, AlignItems, FlexWrap, JustifyContent};

    fn row(style: FlexStyle, width: Option<f32>, children: Vec<Node>) -> Node {
        Node::with_children(
            Style {
                display: Display::Flex,
                width,
                flex: style,
                ..Style::default()
            },
            children,
        )
    }

    fn xs(node: &Node) -> Vec<f32> {
        node.children.iter().map(|child| child.rect.x).collect()
    }

    #[test]
    /// # Panics
    /// Panics if space-between does not push the outer items to the edges.
    fn space_between_spreads_items() {
        let mut container = row(
            FlexStyle {
                justify_content: JustifyContent::SpaceBetween,
                ..FlexStyle::default()
            },
            Some(600.0),
            vec![Node::fixed(100.0, 20.0), Node::fixed(100.0, 20.0), Node::fixed(100.0, 20.0)],
        );
        let size = layout_flex_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        assert_eq!(xs(&container), vec![0.0, 250.0, 500.0]);
        assert!((size.width - 600.0).abs() < f32::EPSILON);
        assert!((size.height - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if free space is not shared by grow factors.
    fn grow_shares_free_space() {
        let mut grow_one = Node::fixed(0.0, 10.0);
        grow_one.style.width = None;
        grow_one.style.flex.grow = 1.0;
        let mut grow_three = grow_one.clone();
        grow_three.style.flex.grow = 3.0;
        let mut container = row(FlexStyle::default(), Some(400.0), vec![grow_one, grow_three]);
        layout_flex_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        let widths: Vec<f32> = container.children.iter().map(|child| child.rect.width).collect();
        assert_eq!(widths, vec![100.0, 300.0]);
    }

    #[test]
    /// # Panics
    /// Panics if auto-height items are not stretched to the line.
    fn items_stretch_across() {
        let mut short = Node::fixed(50.0, 10.0);
        short.style.height = None;
        let tall = Node::fixed(50.0, 40.0);
        let mut container = row(FlexStyle::default(), Some(200.0), vec![short, tall]);
        layout_flex_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        let stretched = container.rect_at(&[0]).unwrap_or_default();
        assert!((stretched.height - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if the order property or display: none are ignored.
    fn order_and_hidden_items() {
        let mut last = Node::fixed(10.0, 10.0);
        last.style.flex.order = 1;
        let mut hidden = Node::fixed(30.0, 10.0);
        hidden.style.display = Display::None;
        let mut container = row(
            FlexStyle {
                align_items: AlignItems::Start,
                ..FlexStyle::default()
            },
            Some(100.0),
            vec![last, hidden, Node::fixed(20.0, 10.0)],
        );
        layout_flex_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        assert_eq!(xs(&container), vec![20.0, 0.0, 0.0]);
        assert!(container.rect_at(&[1]).unwrap_or_default().width.abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if a wrapping row does not start a second line.
    fn wrap_starts_new_line() {
        let mut container = row(
            FlexStyle {
                wrap: FlexWrap::Wrap,
                align_content: AlignContent::Start,
                row_gap: 5.0,
                ..FlexStyle::default()
            },
            Some(100.0),
            vec![Node::fixed(60.0, 10.0), Node::fixed(60.0, 20.0)],
        );
        let size = layout_flex_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        let second = container.rect_at(&[1]).unwrap_or_default();
        assert!(second.x.abs() < f32::EPSILON);
        assert!((second.y - 15.0).abs() < f32::EPSILON);
        assert!((size.height - 35.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if a column does not stack items and fill the available width.
    fn column_stacks_vertically() {
        let mut container = Node::vstack(vec![Node::fixed(30.0, 10.0), Node::fixed(30.0, 15.0)]);
        container.style.flex.row_gap = 4.0;
        let size = layout_flex_container(&mut container, Constraints::loose_width(120.0), &LayoutContext::default());
        let second = container.rect_at(&[1]).unwrap_or_default();
        assert!((second.y - 14.0).abs() < f32::EPSILON);
        assert!((size.width - 120.0).abs() < f32::EPSILON);
        assert!((size.height - 29.0).abs() < f32::EPSILON);
    }
}
