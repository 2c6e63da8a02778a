//! Grid containers: translate the box tree into [`GridItem`]s, size tracks with the
//! grid crate, then lay each child out inside its area.
//!
//! Columns follow the container's inline axis and rows its block axis, so vertical
//! writing modes swap them onto the physical axes.

use css_box::{Constraints, Size};
use css_grid::{
    ContentSizes, GridAxisTracks, GridContainerInputs, GridItem, GridItemAxis, GridPlacement,
    GridTrack, GridTrackSize, MAX_GRID_TRACKS, TrackRepeat, layout_grid, layout_grid_with,
};
use css_writing_modes::WritingMode;
use log::{debug, warn};

use crate::context::LayoutContext;
use crate::dispatch::{layout, measure, place};
use crate::intrinsic::intrinsic_widths;
use crate::node::Node;
use crate::sizing::{LogicalBox, finish_size, logical_margins, physical_offset, physical_size};
use crate::style::{Style, TrackDef};

/// Flatten a track list. Fixed repeats expand in place; one `auto-fill`/`auto-fit`
/// repeat may close the list.
fn axis_tracks(defs: &[TrackDef], auto_tracks: &[GridTrackSize], gap: f32) -> GridAxisTracks {
    let mut axis = GridAxisTracks {
        auto_tracks: auto_tracks.to_vec(),
        ..GridAxisTracks::new(Vec::new(), gap)
    };
    for def in defs {
        if axis.auto_repeat.is_some() {
            warn!(
                target: "layout::grid",
                "[TRACKS] ignoring {def:?} after an auto repeat"
            );
            continue;
        }
        match def {
            TrackDef::Track(size) => axis.tracks.push(GridTrack::explicit(*size)),
            TrackDef::Repeat(TrackRepeat::Count(count, pattern)) => {
                let room = MAX_GRID_TRACKS.saturating_sub(axis.tracks.len()) / pattern.len().max(1);
                if *count > room {
                    warn!(
                        target: "layout::grid",
                        "[TRACKS] repeat({count}) clamped to {room} to stay within {MAX_GRID_TRACKS} tracks"
                    );
                }
                for _ in 0..(*count).min(room) {
                    axis.tracks
                        .extend(pattern.iter().copied().map(GridTrack::explicit));
                }
            }
            TrackDef::Repeat(repeat) => axis.auto_repeat = Some(repeat.clone()),
        }
    }
    axis
}

/// Container-level inputs for content-box sizes `inline_size` and `block_size`.
fn container_inputs(
    style: &Style,
    inline_size: Option<f32>,
    block_size: Option<f32>,
) -> GridContainerInputs {
    let grid = &style.grid;
    GridContainerInputs {
        row_tracks: axis_tracks(&grid.template_rows, &grid.auto_rows, style.row_gap()),
        col_tracks: axis_tracks(&grid.template_columns, &grid.auto_columns, style.column_gap()),
        areas: grid.template_areas.clone(),
        auto_flow: grid.auto_flow,
        inline_size,
        block_size,
        justify_items: grid.justify_items,
        align_items: grid.align_items,
        justify_content: grid.justify_content,
        align_content: grid.align_content,
    }
}

/// Border-box limits of `style` along the width or height.
fn item_axis(style: &Style, horizontal: bool) -> GridItemAxis {
    let (size, (min_size, max_size)) = if horizontal {
        (style.border_box_width(), style.border_box_width_range())
    } else {
        (style.border_box_height(), style.border_box_height_range())
    };
    GridItemAxis {
        size,
        min_size,
        max_size,
        ..GridItemAxis::default()
    }
}

/// One grid item per displayed child, with inline contributions measured.
fn collect_items(node: &mut Node, ctx: &LayoutContext<'_>) -> Vec<GridItem<usize>> {
    let writing_mode = node.style.writing_mode;
    let vertical = writing_mode.is_vertical();
    let mut items = Vec::with_capacity(node.children.len());
    for (index, child) in node.children.iter_mut().enumerate() {
        if !child.is_in_flow() {
            if !child.is_displayed() {
                child.clear_layout();
            }
            continue;
        }
        let (inline_margins, block_margins) = logical_margins(&child.style, writing_mode);
        let grid = &child.style.grid;
        let placement = GridPlacement {
            row_start: grid.row_start,
            row_end: grid.row_end,
            column_start: grid.column_start,
            column_end: grid.column_end,
            area: grid.area.clone(),
        };
        let mut inline = GridItemAxis {
            margin_start: inline_margins.start.or_zero(),
            margin_end: inline_margins.end.or_zero(),
            align_self: grid.justify_self,
            ..item_axis(&child.style, !vertical)
        };
        let block = GridItemAxis {
            margin_start: block_margins.start.or_zero(),
            margin_end: block_margins.end.or_zero(),
            align_self: grid.align_self,
            ..item_axis(&child.style, vertical)
        };
        let has_aspect_ratio = child.style.ratio().is_some();
        inline.contribution = if vertical {
            ContentSizes::fixed(measure(child, Constraints::unbounded(), ctx).size.height)
        } else {
            let widths = intrinsic_widths(child, ctx);
            ContentSizes::new(widths.min_content, widths.max_content)
        };
        items.push(GridItem {
            inline,
            block,
            has_aspect_ratio,
            ..GridItem::new(index).with_placement(placement)
        });
    }
    items
}

/// Constraints fixing a child's inline border-box size.
#[inline]
const fn inline_tight(inline_size: f32, writing_mode: WritingMode) -> Constraints {
    if writing_mode.is_vertical() {
        Constraints::new(0.0, f32::INFINITY, inline_size, inline_size)
    } else {
        Constraints::new(inline_size, inline_size, 0.0, f32::INFINITY)
    }
}

/// Lay out a grid container.
pub fn layout_grid_container(
    node: &mut Node,
    constraints: Constraints,
    ctx: &LayoutContext<'_>,
) -> Size {
    let writing_mode = node.style.writing_mode;
    let padding_border = node.style.padding_border();
    let logical = LogicalBox::new(&node.style, constraints);
    let inline_size = logical.definite_inline();
    let block_size = logical.definite_block();
    let inputs = container_inputs(&node.style, inline_size, block_size);
    let nested = ctx.nested();

    let items = collect_items(node, &nested);
    let children = &mut node.children;
    let result = layout_grid_with(&items, &inputs, |index, item_inline| {
        let Some(child) = items
            .get(index)
            .and_then(|item| children.get_mut(item.node_id))
        else {
            return ContentSizes::default();
        };
        let size = measure(child, inline_tight(item_inline, writing_mode), &nested).size;
        ContentSizes::fixed(if writing_mode.is_vertical() {
            size.width
        } else {
            size.height
        })
    });

    let content_inline =
        inline_size.unwrap_or_else(|| logical.inline_limits.clamp(result.total_inline));
    let content_block =
        block_size.unwrap_or_else(|| logical.block_limits.clamp(result.total_block));
    let size = finish_size(
        physical_size(content_inline, content_block, writing_mode),
        padding_border,
        constraints,
    );
    let final_block = if writing_mode.is_vertical() {
        size.width - logical.block_pb
    } else {
        size.height - logical.block_pb
    };

    let mut baseline = None;
    for placed in &result.items {
        let Some(child) = node.children.get_mut(placed.node_id) else {
            continue;
        };
        let child_size = physical_size(placed.inline_size, placed.block_size, writing_mode);
        layout(child, Constraints::tight(child_size), &nested);
        let (x, y) = physical_offset(
            placed.inline_offset,
            placed.block_offset,
            placed.block_size,
            final_block,
            writing_mode,
        );
        place(child, padding_border.left + x, padding_border.top + y);
        if baseline.is_none() && placed.area.row_start == 1 && !writing_mode.is_vertical() {
            baseline = child.baseline.map(|offset| child.rect.y + offset);
        }
    }
    node.baseline = baseline;

    debug!(
        target: "layout::grid",
        "[GRID] items={} columns={} rows={} size={:.2}x{:.2}",
        result.items.len(),
        result.col_sizes.base_sizes.len(),
        result.row_sizes.base_sizes.len(),
        size.width,
        size.height
    );
    size
}

/// Min-content and max-content content-box widths of a horizontal grid: the column
/// track totals when every item contributes its minimum, then its maximum.
pub fn grid_intrinsic_widths(node: &mut Node, ctx: &LayoutContext<'_>) -> (f32, f32) {
    let inputs = container_inputs(&node.style, None, None);
    let mut items = collect_items(node, &ctx.nested());
    let max_content = layout_grid(&items, &inputs).total_inline;
    for item in &mut items {
        let min = item.inline.contribution.min_content;
        item.inline.contribution = ContentSizes::fixed(min);
    }
    let min_content = layout_grid(&items, &inputs).total_inline;
    (min_content.min(max_content), max_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Display, GridStyle};
    use css_grid::{GridContentAlignment, GridLine};

    fn grid(grid: GridStyle, width: Option<f32>, children: Vec<Node>) -> Node {
        Node::with_children(
            Style {
                display: Display::Grid,
                width,
                grid,
                ..Style::default()
            },
            children,
        )
    }

    fn px(sizes: &[f32]) -> Vec<TrackDef> {
        sizes
            .iter()
            .map(|size| TrackDef::Track(GridTrackSize::px(*size)))
            .collect()
    }

    fn spanning(rows: u16) -> Node {
        let mut child = Node::default();
        child.style.grid.row_end = GridLine::Span(rows);
        child
    }

    #[test]
    /// # Panics
    /// Panics if a two-row span does not cover both tracks and the gap.
    fn span_covers_tracks_and_gap() {
        let mut container = grid(
            GridStyle {
                template_rows: px(&[100.0, 100.0]),
                template_columns: px(&[100.0]),
                row_gap: 10.0,
                ..GridStyle::default()
            },
            None,
            vec![spanning(2)],
        );
        let size = layout_grid_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        assert!((size.height - 210.0).abs() < f32::EPSILON);
        let rect = container.rect_at(&[0]).unwrap_or_default();
        assert!((rect.height - 210.0).abs() < f32::EPSILON);
        assert!((rect.width - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if fr columns do not split the definite width.
    fn fr_columns_share_width() {
        let mut container = grid(
            GridStyle {
                template_columns: vec![
                    TrackDef::Track(GridTrackSize::fr(1.0)),
                    TrackDef::Track(GridTrackSize::fr(3.0)),
                ],
                column_gap: 20.0,
                ..GridStyle::default()
            },
            Some(420.0),
            vec![Node::fixed(10.0, 30.0), Node::default()],
        );
        layout_grid_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        let second = container.rect_at(&[1]).unwrap_or_default();
        assert!((second.x - 120.0).abs() < 0.001);
        assert!((second.width - 300.0).abs() < 0.001);
        assert!((second.height - 30.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if count repeats do not expand or tracks after an auto repeat survive.
    fn track_lists_flatten() {
        let defs = vec![
            TrackDef::Repeat(TrackRepeat::Count(2, vec![GridTrackSize::px(10.0)])),
            TrackDef::Repeat(TrackRepeat::AutoFill(vec![GridTrackSize::px(50.0)])),
            TrackDef::Track(GridTrackSize::px(5.0)),
        ];
        let axis = axis_tracks(&defs, &[], 0.0);
        assert_eq!(axis.tracks.len(), 2);
        assert!(axis.auto_repeat.is_some());
    }

    #[test]
    /// # Panics
    /// Panics if an out-of-range line or repeat count is not clamped to the track limit.
    fn huge_lines_and_repeats_are_clamped() {
        let repeated = axis_tracks(
            &[TrackDef::Repeat(TrackRepeat::Count(
                usize::MAX,
                vec![GridTrackSize::px(1.0)],
            ))],
            &[],
            0.0,
        );
        assert_eq!(repeated.tracks.len(), MAX_GRID_TRACKS);

        let mut far = Node::fixed(10.0, 10.0);
        far.style.grid.row_start = GridLine::Line(i32::MAX);
        let mut container = grid(
            GridStyle {
                template_columns: px(&[50.0]),
                ..GridStyle::default()
            },
            None,
            vec![far],
        );
        let size = layout_grid_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        // Empty auto rows collapse to zero; the item sits in the last allowed row.
        assert!((size.height - 10.0).abs() < 0.001);
        let rect = container.rect_at(&[0]).unwrap_or_default();
        assert!(rect.y.abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if centered content distribution does not offset the only column.
    fn justify_content_centers_tracks() {
        let mut container = grid(
            GridStyle {
                template_columns: px(&[100.0]),
                justify_content: GridContentAlignment::Center,
                ..GridStyle::default()
            },
            Some(300.0),
            vec![Node::fixed(100.0, 10.0)],
        );
        layout_grid_container(&mut container, Constraints::unbounded(), &LayoutContext::default());
        let rect = container.rect_at(&[0]).unwrap_or_default();
        assert!((rect.x - 100.0).abs() < 0.001);
    }
}
