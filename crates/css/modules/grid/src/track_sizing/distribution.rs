//! Free space distribution: maximizing tracks, expanding flexible tracks and
//! stretching `auto` tracks.
//!
//! Spec: §12.6 Maximize Tracks, §12.7 Expand Flexible Tracks, §12.8 Stretch auto Tracks
//! <https://www.w3.org/TR/css-grid-2/#algo-grow-tracks>

use crate::types::GridTrack;

use super::helpers::{Sizing, flex_factor, inner_gaps, spanned, track_sizing};
use super::{ItemContribution, ResolvedTrackSizes};

/// Free space left in a definite axis after the base sizes and gaps.
#[inline]
pub fn free_space(resolved: &ResolvedTrackSizes, gap: f32, available: f32) -> f32 {
    available - resolved.base_sizes.iter().sum::<f32>() - inner_gaps(resolved.base_sizes.len(), gap)
}

/// Grow non-flexible tracks toward their growth limits.
///
/// A definite axis shares its free space equally, freezing tracks that reach their
/// limit. An indefinite axis takes every finite limit.
pub fn maximize_tracks(resolved: &mut ResolvedTrackSizes, gap: f32, available: Option<f32>) {
    let Some(available) = available else {
        for (base, limit) in resolved
            .base_sizes
            .iter_mut()
            .zip(resolved.growth_limits.iter())
        {
            if limit.is_finite() {
                *base = base.max(*limit);
            }
        }
        return;
    };
    let mut remaining = free_space(resolved, gap, available);
    for _ in 0..resolved.base_sizes.len() {
        if remaining <= f32::EPSILON {
            break;
        }
        let growable: Vec<usize> = resolved
            .base_sizes
            .iter()
            .zip(resolved.growth_limits.iter())
            .enumerate()
            .filter(|(_, (base, limit))| limit.is_finite() && *base < *limit)
            .map(|(idx, _)| idx)
            .collect();
        if growable.is_empty() {
            break;
        }
        let share = remaining / growable.len() as f32;
        for idx in growable {
            let limit = resolved.growth_limits.get(idx).copied().unwrap_or(0.0);
            if let Some(base) = resolved.base_sizes.get_mut(idx) {
                let grown = (*base + share).min(limit);
                remaining -= grown - *base;
                *base = grown;
            }
        }
    }
}

/// Size of one `fr` given the space left for `flexible` tracks.
///
/// Tracks whose base exceeds their flexible share are treated as inflexible and the
/// fraction is recomputed without them.
///
/// Spec: §12.7.1 Find the Size of an fr
fn find_fr_size(space: f32, factors: &[(usize, f32)], bases: &[f32]) -> f32 {
    let mut flexible: Vec<(usize, f32)> = factors.to_vec();
    let mut leftover = space;
    loop {
        let flex_sum: f32 = flexible.iter().map(|(_, factor)| factor).sum();
        let hypothetical = leftover.max(0.0) / flex_sum.max(1.0);
        let (inflexible, still_flexible): (Vec<(usize, f32)>, Vec<(usize, f32)>) = flexible
            .iter()
            .copied()
            .partition(|(idx, factor)| factor * hypothetical < bases.get(*idx).copied().unwrap_or(0.0));
        if inflexible.is_empty() {
            return hypothetical;
        }
        leftover -= inflexible
            .iter()
            .map(|(idx, _)| bases.get(*idx).copied().unwrap_or(0.0))
            .sum::<f32>();
        flexible = still_flexible;
        if flexible.is_empty() {
            return 0.0;
        }
    }
}

/// Expand `fr` tracks.
///
/// With a definite axis the leftover space after non-flexible tracks and gaps is
/// shared by flex factor. With an indefinite axis each flexible track sizes to the
/// largest max-content share of the items crossing it.
pub fn expand_flexible_tracks(
    resolved: &mut ResolvedTrackSizes,
    tracks: &[GridTrack],
    contributions: &[ItemContribution],
    gap: f32,
    available: Option<f32>,
) {
    let factors: Vec<(usize, f32)> = tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| (idx, flex_factor(track, available)))
        .filter(|(_, factor)| *factor > 0.0)
        .collect();
    if factors.is_empty() {
        return;
    }
    let count = tracks.len();
    let fr = if let Some(available) = available {
        let non_flex: f32 = resolved
            .base_sizes
            .iter()
            .enumerate()
            .filter(|(idx, _)| !factors.iter().any(|(flex_idx, _)| flex_idx == idx))
            .map(|(_, base)| base)
            .sum();
        let space = available - non_flex - inner_gaps(count, gap);
        find_fr_size(space, &factors, &resolved.base_sizes)
    } else {
        let from_tracks = factors
            .iter()
            .map(|(idx, factor)| {
                let base = resolved.base_sizes.get(*idx).copied().unwrap_or(0.0);
                if *factor > 1.0 { base / factor } else { base }
            })
            .fold(0.0f32, f32::max);
        let from_items = contributions
            .iter()
            .filter_map(|item| {
                let range = spanned(item, count);
                let spanned_factors: Vec<(usize, f32)> = factors
                    .iter()
                    .copied()
                    .filter(|(idx, _)| range.contains(idx))
                    .collect();
                if spanned_factors.is_empty() {
                    return None;
                }
                let fixed: f32 = range
                    .clone()
                    .filter(|idx| !spanned_factors.iter().any(|(flex_idx, _)| flex_idx == idx))
                    .map(|idx| resolved.base_sizes.get(idx).copied().unwrap_or(0.0))
                    .sum();
                let space = item.sizes.max_content - fixed - inner_gaps(range.len(), gap);
                Some(find_fr_size(space, &spanned_factors, &resolved.base_sizes))
            })
            .fold(0.0f32, f32::max);
        from_tracks.max(from_items)
    };
    tracing::debug!("expand_flexible_tracks: fr={fr}, flex_tracks={}", factors.len());
    for (idx, factor) in factors {
        let flexed = fr * factor;
        if let Some(base) = resolved.base_sizes.get_mut(idx) {
            *base = base.max(flexed);
            if let Some(limit) = resolved.growth_limits.get_mut(idx) {
                *limit = *base;
            }
        }
    }
}

/// Share positive free space equally among tracks with an `auto` max sizing function.
pub fn stretch_auto_tracks(
    resolved: &mut ResolvedTrackSizes,
    tracks: &[GridTrack],
    gap: f32,
    available: f32,
) {
    let remaining = free_space(resolved, gap, available);
    if remaining <= 0.0 {
        return;
    }
    let auto_tracks: Vec<usize> = tracks
        .iter()
        .enumerate()
        .filter(|(_, track)| track_sizing(track, Some(available)).1 == Sizing::Auto)
        .map(|(idx, _)| idx)
        .collect();
    if auto_tracks.is_empty() {
        return;
    }
    let space_per_track = remaining / auto_tracks.len() as f32;
    for idx in auto_tracks {
        if let Some(base) = resolved.base_sizes.get_mut(idx) {
            *base += space_per_track;
        }
        if let Some(limit) = resolved.growth_limits.get_mut(idx) {
            *limit = limit.max(resolved.base_sizes.get(idx).copied().unwrap_or(0.0));
        }
    }
}
