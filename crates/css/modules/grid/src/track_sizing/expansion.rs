//! Track expansion logic for repeat(), implicit tracks and auto-fit collapsing.

use crate::placement::{GridArea, MAX_GRID_TRACKS};
use crate::types::{GridTrack, GridTrackSize, TrackBreadth, TrackListType, TrackRepeat, sanitize};

use super::{GridAxis, GridAxisTracks};

/// Size one repetition needs: fixed min breadths, else fixed max breadths.
fn pattern_track_size(track: &GridTrackSize, available: Option<f32>) -> Option<f32> {
    track
        .min_breadth()
        .fixed(available)
        .filter(|size| *size > 0.0)
        .or_else(|| track.max_breadth().fixed(available))
}

/// Number of `auto-fill`/`auto-fit` repetitions that fit the axis, at least one.
///
/// Spec: §7.2.3.2 Repeat-to-fill: auto-fill and auto-fit repetitions
pub fn auto_repeat_count(axis_tracks: &GridAxisTracks, pattern: &[GridTrackSize], available: Option<f32>) -> usize {
    let Some(available) = available else {
        return 1;
    };
    let gap = sanitize(axis_tracks.gap);
    let sizes: Option<Vec<f32>> = pattern
        .iter()
        .map(|track| pattern_track_size(track, Some(available)))
        .collect();
    let Some(sizes) = sizes else {
        return 1;
    };
    let pattern_size: f32 = sizes.iter().sum::<f32>() + pattern.len() as f32 * gap;
    if pattern_size <= 0.0 {
        return 1;
    }
    // Space taken by the non-repeated tracks, each followed by a gap.
    let fixed_other: f32 = axis_tracks
        .tracks
        .iter()
        .map(|track| track.size.min_breadth().fixed(Some(available)).unwrap_or(0.0) + gap)
        .sum();
    let adjusted_space = available - fixed_other + gap;
    ((adjusted_space / pattern_size).floor() as usize).max(1)
}

/// Explicit tracks: the template list followed by its `repeat()` expansion.
pub fn expand_auto_repeat_tracks(axis_tracks: &GridAxisTracks, available: Option<f32>) -> Vec<GridTrack> {
    let mut expanded = axis_tracks.tracks.clone();
    let Some(repeat) = &axis_tracks.auto_repeat else {
        return expanded;
    };
    let (pattern, repetitions, track_type) = match repeat {
        TrackRepeat::Count(count, pattern) => (pattern, *count, TrackListType::Explicit),
        TrackRepeat::AutoFill(pattern) => (
            pattern,
            auto_repeat_count(axis_tracks, pattern, available),
            TrackListType::Explicit,
        ),
        TrackRepeat::AutoFit(pattern) => (
            pattern,
            auto_repeat_count(axis_tracks, pattern, available),
            TrackListType::AutoFit,
        ),
    };
    let room = MAX_GRID_TRACKS.saturating_sub(expanded.len()) / pattern.len().max(1);
    for _ in 0..repetitions.min(room) {
        expanded.extend(pattern.iter().map(|size| GridTrack {
            size: *size,
            track_type,
        }));
    }
    expanded
}

/// Append implicit tracks up to `count`, cycling through the auto track pattern.
pub fn add_implicit_tracks(mut tracks: Vec<GridTrack>, count: usize, auto_tracks: &[GridTrackSize]) -> Vec<GridTrack> {
    let mut pattern_index = 0usize;
    while tracks.len() < count {
        let size = auto_tracks
            .get(pattern_index % auto_tracks.len().max(1))
            .copied()
            .unwrap_or(GridTrackSize::Breadth(TrackBreadth::Auto));
        tracks.push(GridTrack {
            size,
            track_type: TrackListType::Implicit,
        });
        pattern_index += 1;
    }
    tracks
}

/// Check if a track has any items placed in or spanning across it.
fn track_has_items(track_idx: usize, areas: &[GridArea], axis: GridAxis) -> bool {
    let track_line = track_idx + 1; // Convert to 1-indexed line
    areas.iter().any(|area| match axis {
        GridAxis::Row => area.row_start <= track_line && area.row_end > track_line,
        GridAxis::Column => area.col_start <= track_line && area.col_end > track_line,
    })
}

/// Remove empty `auto-fit` tracks and remap item areas onto the remaining tracks.
///
/// Spec: §7.2.3.2 - The auto-fit keyword collapses empty repeated tracks.
/// An empty track is one with no in-flow grid items placed into or spanning across it.
pub fn collapse_auto_fit_tracks(tracks: Vec<GridTrack>, areas: &mut [GridArea], axis: GridAxis) -> Vec<GridTrack> {
    let keep: Vec<bool> = tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| track.track_type != TrackListType::AutoFit || track_has_items(idx, areas, axis))
        .collect();
    if keep.iter().all(|kept| *kept) {
        return tracks;
    }
    // new_line[line - 1] = 1-based line after removing collapsed tracks
    let mut new_line = Vec::with_capacity(keep.len() + 1);
    let mut kept_before = 0usize;
    new_line.push(1);
    for kept in &keep {
        kept_before += usize::from(*kept);
        new_line.push(kept_before + 1);
    }
    let remap = |line: usize| new_line.get(line.saturating_sub(1)).copied().unwrap_or(line);
    for area in areas.iter_mut() {
        match axis {
            GridAxis::Row => {
                area.row_start = remap(area.row_start);
                area.row_end = remap(area.row_end);
            }
            GridAxis::Column => {
                area.col_start = remap(area.col_start);
                area.col_end = remap(area.col_end);
            }
        }
    }
    tracks
        .into_iter()
        .zip(keep)
        .filter_map(|(track, kept)| kept.then_some(track))
        .collect()
}
