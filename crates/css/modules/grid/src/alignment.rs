//! Content distribution across tracks and self alignment inside grid areas.
//!
//! Spec: §11 Alignment and Spacing
//! <https://www.w3.org/TR/css-grid-2/#alignment>

use crate::types::{GridAlignment, GridContentAlignment, GridItemAxis, sanitize};

/// Start offset and extra space between tracks for `justify-content`/`align-content`.
///
/// `Stretch` has already grown `auto` tracks during sizing, so it packs at the start.
pub fn content_distribution(align: GridContentAlignment, free_space: f32, track_count: usize) -> (f32, f32) {
    let remaining = free_space.max(0.0);
    match (align, track_count) {
        (GridContentAlignment::End, _) => (remaining, 0.0),
        (GridContentAlignment::Center, _) => (remaining * 0.5, 0.0),
        (GridContentAlignment::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (GridContentAlignment::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        (GridContentAlignment::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        _ => (0.0, 0.0),
    }
}

/// Offsets of each track's start edge.
pub fn track_positions(sizes: &[f32], gap: f32, start: f32, between: f32) -> Vec<f32> {
    let mut cursor = start;
    sizes
        .iter()
        .map(|size| {
            let position = cursor;
            cursor += size + gap + between;
            position
        })
        .collect()
}

/// Offset and size of the area covering zero-based tracks `start..end`:
/// the spanned tracks plus every gap strictly between them.
pub fn area_extent(positions: &[f32], sizes: &[f32], start: usize, end: usize) -> (f32, f32) {
    let Some(&offset) = positions.get(start) else {
        let last_end = positions
            .last()
            .zip(sizes.last())
            .map_or(0.0, |(position, size)| position + size);
        return (last_end, 0.0);
    };
    let last = end.saturating_sub(1).max(start);
    let far_edge = positions
        .get(last)
        .zip(sizes.get(last))
        .map_or(offset, |(position, size)| position + size);
    (offset, (far_edge - offset).max(0.0))
}

/// Effective self alignment. Items with an aspect ratio fall back to `start`
/// where the container would stretch them.
pub fn effective_alignment(axis: &GridItemAxis, container: GridAlignment, has_aspect_ratio: bool) -> GridAlignment {
    match axis.align_self {
        Some(own) => own,
        None if has_aspect_ratio && container == GridAlignment::Stretch => GridAlignment::Start,
        None => container,
    }
}

/// Size of the item's border box inside an area of `area_size`.
///
/// The margins are taken out of the area once, however many tracks it spans.
pub fn item_size_in_area(axis: &GridItemAxis, align: GridAlignment, area_size: f32) -> f32 {
    let available = sanitize(area_size - axis.margins());
    match (axis.size, align) {
        (Some(size), _) => axis.clamp(size),
        (None, GridAlignment::Stretch) => axis.clamp(available),
        (None, _) => {
            let fit = axis
                .contribution
                .max_content
                .min(available.max(axis.contribution.min_content));
            axis.clamp(fit)
        }
    }
}

/// Position and size of an item along one axis within its area.
pub fn align_in_area(axis: &GridItemAxis, align: GridAlignment, area_offset: f32, area_size: f32) -> (f32, f32) {
    let size = item_size_in_area(axis, align, area_size);
    let margin_start = sanitize(axis.margin_start);
    let margin_end = sanitize(axis.margin_end);
    let offset = match align {
        GridAlignment::Start | GridAlignment::Stretch => area_offset + margin_start,
        GridAlignment::End => area_offset + area_size - margin_end - size,
        GridAlignment::Center => {
            area_offset + margin_start + (area_size - margin_start - margin_end - size) * 0.5
        }
    };
    (offset, size)
}
