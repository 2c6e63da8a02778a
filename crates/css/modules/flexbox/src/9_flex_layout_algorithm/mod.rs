//! Flex layout algorithm: line collection, flexible lengths, main-axis placement,
//! line cross sizes, `align-content` and item cross alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

pub mod flexible_lengths;
pub mod line_breaking;

#[cfg(test)]
mod tests;

use log::debug;

use crate::chapter4::{FlexContainerInputs, FlexItemPlacement, FlexLayout, FlexLine};
use crate::chapter5::{AlignContent, AlignItems, JustifyContent};
use crate::chapter6::FlexChild;
use crate::chapter7::Axes;
use crate::chapter8::auto_margins::{ResolvedMainMargins, resolve_auto_margins_and_outer};
use crate::chapter8::cross_axis::{
    LineAlignContext, LineBaseline, align_item_in_line, line_baseline, line_cross_size,
};
use crate::chapter8::{align_content_params, gaps_total, justify_params};
use flexible_lengths::resolve_flexible_lengths;
use line_breaking::{LineRange, break_into_lines};

/// Main-axis result for one line.
#[derive(Clone, Debug, Default)]
struct PerLineMain {
    /// Used main sizes, one per item on the line.
    sizes: Vec<f32>,
    margins: ResolvedMainMargins,
}

/// Inputs for placing a line's items along the main axis.
#[derive(Copy, Clone)]
struct MainPlacement<'line> {
    line: &'line PerLineMain,
    start_offset: f32,
    between: f32,
    gap: f32,
    main_extent: f32,
    reverse: bool,
}

/// Physical main offsets of a line's border boxes.
///
/// In reverse mode items are laid out from the right (or bottom) edge backwards.
fn accumulate_main_offsets(placement: MainPlacement<'_>) -> Vec<f32> {
    let line = placement.line;
    let mut offsets = Vec::with_capacity(line.sizes.len());
    if placement.reverse {
        let mut cursor = placement.main_extent - placement.start_offset;
        for (outer, start_margin) in line
            .margins
            .outer_sizes
            .iter()
            .zip(line.margins.start_margins.iter())
        {
            cursor -= outer;
            offsets.push(cursor + start_margin);
            cursor -= placement.gap + placement.between;
        }
    } else {
        let mut cursor = placement.start_offset;
        for (outer, start_margin) in line
            .margins
            .outer_sizes
            .iter()
            .zip(line.margins.start_margins.iter())
        {
            offsets.push(cursor + start_margin);
            cursor += outer + placement.gap + placement.between;
        }
    }
    offsets
}

/// Used main sizes for one line: flexed against the definite main size, otherwise
/// the hypothetical sizes.
fn resolve_line_main(
    container: &FlexContainerInputs,
    line_items: &[FlexChild],
    main_gap: f32,
) -> Vec<f32> {
    let fixed_margins: f32 = line_items
        .iter()
        .map(|child| child.main_margins.fixed_total())
        .sum();
    let gaps = gaps_total(line_items.len(), main_gap);
    container.main_size.map_or_else(
        || line_items.iter().map(FlexChild::hypothetical_main).collect(),
        |main_size| resolve_flexible_lengths(line_items, main_size - fixed_margins - gaps),
    )
}

/// Grow lines by an equal share of positive free cross space (`align-content: stretch`).
fn stretch_line_crosses(line_crosses: &mut [f32], free_space: f32) {
    if free_space <= 0.0 || line_crosses.is_empty() {
        return;
    }
    let add_each = free_space / line_crosses.len() as f32;
    debug!(
        target: "css::flexbox",
        "[ALIGN-CONTENT] stretch: remaining={free_space:.3} add_each={add_each:.3}"
    );
    for cross in line_crosses {
        *cross += add_each;
    }
}

/// Logical cross offsets of lines from the cross-start edge, after `align-content`.
fn pack_lines(
    container: &FlexContainerInputs,
    line_crosses: &mut [f32],
    cross_gap: f32,
) -> Vec<f32> {
    let used: f32 = line_crosses.iter().sum::<f32>() + gaps_total(line_crosses.len(), cross_gap);
    let free = container
        .cross_size
        .filter(|_| container.wrap.is_wrapping())
        .map_or(0.0, |cross_size| cross_size - used);
    if container.align_content == AlignContent::Stretch {
        stretch_line_crosses(line_crosses, free);
    }
    let (start, between) = align_content_params(container.align_content, free, line_crosses.len());
    let mut cursor = start;
    line_crosses
        .iter()
        .map(|cross| {
            let offset = cursor;
            cursor += cross + cross_gap + between;
            offset
        })
        .collect()
}

/// Lay out `items` (already in order-modified document order) inside `container`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
pub fn layout_flex(container: &FlexContainerInputs, items: &[FlexChild]) -> FlexLayout {
    let axes = container.axes();
    let main_gap = container.main_gap();
    let cross_gap = container.cross_gap();
    let line_ranges: Vec<LineRange> = if container.wrap.is_wrapping() {
        break_into_lines(container.line_limit(), main_gap, items)
    } else if items.is_empty() {
        Vec::new()
    } else {
        vec![(0, items.len())]
    };

    let line_sizes: Vec<Vec<f32>> = line_ranges
        .iter()
        .map(|&(start, end)| resolve_line_main(container, items.get(start..end).unwrap_or(&[]), main_gap))
        .collect();
    let main_extent = container.main_size.map_or_else(
        || {
            line_ranges
                .iter()
                .zip(line_sizes.iter())
                .map(|(&(start, end), sizes)| {
                    let line_items = items.get(start..end).unwrap_or(&[]);
                    let margins: f32 = line_items
                        .iter()
                        .map(|child| child.main_margins.fixed_total())
                        .sum();
                    sizes.iter().sum::<f32>() + margins + gaps_total(line_items.len(), main_gap)
                })
                .fold(0.0f32, f32::max)
        },
        |main_size| main_size.max(0.0),
    );

    let per_line_main: Vec<PerLineMain> = line_ranges
        .iter()
        .zip(line_sizes)
        .map(|(&(start, end), sizes)| {
            let line_items = items.get(start..end).unwrap_or(&[]);
            let gaps = gaps_total(line_items.len(), main_gap);
            let margins = resolve_auto_margins_and_outer(line_items, &sizes, main_extent, gaps);
            PerLineMain { sizes, margins }
        })
        .collect();

    let context = LineAlignContext {
        align_items: container.align_items,
        baselines_enabled: axes.main_is_horizontal && !axes.cross_reverse,
        cross_reverse: axes.cross_reverse,
    };
    let single_definite = !container.wrap.is_wrapping() && container.cross_size.is_some();
    let mut line_crosses: Vec<f32> = line_ranges
        .iter()
        .map(|&(start, end)| {
            let line_items = items.get(start..end).unwrap_or(&[]);
            match container.cross_size {
                Some(cross_size) if single_definite => cross_size.max(0.0),
                _ => line_cross_size(&context, line_items),
            }
        })
        .collect();
    let logical_line_offsets = pack_lines(container, &mut line_crosses, cross_gap);
    let cross_extent = container.cross_size.map_or_else(
        || line_crosses.iter().sum::<f32>() + gaps_total(line_crosses.len(), cross_gap),
        |cross_size| cross_size.max(0.0),
    );

    let mut placements: Vec<FlexItemPlacement> = Vec::with_capacity(items.len());
    let mut lines: Vec<FlexLine> = Vec::with_capacity(line_ranges.len());
    for (line_idx, &(start, end)) in line_ranges.iter().enumerate() {
        let line_items = items.get(start..end).unwrap_or(&[]);
        let Some(line_main) = per_line_main.get(line_idx) else {
            continue;
        };
        let line_cross = line_crosses.get(line_idx).copied().unwrap_or(0.0);
        let logical_offset = logical_line_offsets.get(line_idx).copied().unwrap_or(0.0);
        let line_offset = if axes.cross_reverse {
            cross_extent - logical_offset - line_cross
        } else {
            logical_offset
        };
        let gaps = gaps_total(line_items.len(), main_gap);
        let free = main_extent - line_main.margins.sum_outer - gaps;
        let justify = if line_main.margins.auto_slots > 0 {
            JustifyContent::Start
        } else {
            container.justify_content
        };
        let (start_offset, between) = justify_params(justify, free, line_items.len());
        let main_offsets = accumulate_main_offsets(MainPlacement {
            line: line_main,
            start_offset,
            between,
            gap: main_gap,
            main_extent,
            reverse: axes.main_reverse,
        });
        let baseline: LineBaseline = line_baseline(&context, line_items);
        debug!(
            target: "css::flexbox",
            "[FLEX-LINE] line={line_idx} items={} cross={line_cross:.1} offset={line_offset:.1} free_main={free:.1}",
            line_items.len()
        );
        for ((child, main_size), main_offset) in line_items
            .iter()
            .zip(line_main.sizes.iter().copied())
            .zip(main_offsets)
        {
            let cross = align_item_in_line(&context, child, line_cross, baseline);
            let cross_offset = if axes.cross_reverse {
                line_offset + line_cross - cross.cross_offset - cross.cross_size
            } else {
                line_offset + cross.cross_offset
            };
            placements.push(FlexItemPlacement {
                handle: child.handle,
                main_offset,
                main_size,
                cross_offset,
                cross_size: cross.cross_size,
            });
        }
        lines.push(FlexLine {
            start,
            end,
            cross_offset: line_offset,
            cross_size: line_cross,
        });
    }

    let first_baseline = container_first_baseline(&context, axes, items, &placements, &lines);
    FlexLayout {
        items: placements,
        lines,
        axes,
        main_extent,
        cross_extent,
        first_baseline,
    }
}

/// First baseline of the container, measured from the top content edge.
///
/// Rows take it from the first line's first baseline-aligned item (or its first item,
/// synthesizing from the border-box bottom). Columns use the first item's own baseline.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-baselines>
fn container_first_baseline(
    context: &LineAlignContext,
    axes: Axes,
    items: &[FlexChild],
    placements: &[FlexItemPlacement],
    lines: &[FlexLine],
) -> Option<f32> {
    let first_line = lines.first()?;
    if axes.main_is_horizontal {
        let range = first_line.start..first_line.end;
        let chosen = range
            .clone()
            .find(|&index| {
                items
                    .get(index)
                    .is_some_and(|child| context.align_for(child) == AlignItems::Baseline)
            })
            .or_else(|| range.clone().next())?;
        let child = items.get(chosen)?;
        let placement = placements.get(chosen)?;
        Some(placement.cross_offset + child.baseline.unwrap_or(placement.cross_size))
    } else {
        let child = items.first()?;
        let placement = placements.first()?;
        child
            .baseline
            .map(|baseline| placement.main_offset + baseline)
    }
}
