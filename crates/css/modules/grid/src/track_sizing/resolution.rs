//! Track initialization and intrinsic contribution resolution.
//!
//! Spec: §12.4 Initialize Track Sizes, §12.5 Resolve Intrinsic Track Sizes
//! <https://www.w3.org/TR/css-grid-2/#algo-content>

use crate::types::GridTrack;

use super::helpers::{Sizing, flex_factor, inner_gaps, spanned, track_sizing};
use super::{ItemContribution, ResolvedTrackSizes};

/// Base sizes from fixed min breadths, growth limits from fixed max breadths.
/// Intrinsic limits start unset (infinite); flexible limits start at the base.
pub fn initialize_tracks(tracks: &[GridTrack], available: Option<f32>) -> ResolvedTrackSizes {
    let mut resolved = ResolvedTrackSizes::new(tracks.len());
    for ((track, base), limit) in tracks
        .iter()
        .zip(resolved.base_sizes.iter_mut())
        .zip(resolved.growth_limits.iter_mut())
    {
        let (min, max) = track_sizing(track, available);
        *base = match min {
            Sizing::Fixed(size) => size,
            _ => 0.0,
        };
        *limit = match max {
            Sizing::Fixed(size) => size.max(*base),
            Sizing::Flex(_) => *base,
            _ => f32::INFINITY,
        };
    }
    resolved
}

/// Size intrinsic tracks from the items they contain.
///
/// Single-span items raise intrinsic minimums and maximums directly. Spanning items that
/// cross no flexible track then distribute what the spanned tracks still lack, after
/// the (span − 1) gaps between them, equally over the spanned intrinsic tracks.
pub fn resolve_intrinsic_tracks(
    resolved: &mut ResolvedTrackSizes,
    tracks: &[GridTrack],
    contributions: &[ItemContribution],
    gap: f32,
    available: Option<f32>,
) {
    let count = tracks.len();
    let sizing: Vec<(Sizing, Sizing)> = tracks
        .iter()
        .map(|track| track_sizing(track, available))
        .collect();
    let mut content_limits: Vec<Option<f32>> = vec![None; count];

    for contribution in contributions.iter().filter(|item| item.span == 1) {
        let idx = contribution.start;
        let Some(&(min, max)) = sizing.get(idx) else {
            continue;
        };
        let sizes = contribution.sizes;
        if let Some(base) = resolved.base_sizes.get_mut(idx) {
            match min {
                Sizing::MinContent | Sizing::Auto => *base = base.max(sizes.min_content),
                Sizing::MaxContent => *base = base.max(sizes.max_content),
                Sizing::Fixed(_) | Sizing::Flex(_) => {}
            }
        }
        if let Some(limit) = content_limits.get_mut(idx) {
            let wanted = match max {
                Sizing::MinContent => Some(sizes.min_content),
                Sizing::MaxContent | Sizing::Auto => Some(sizes.max_content),
                Sizing::Fixed(_) | Sizing::Flex(_) => None,
            };
            if let Some(wanted) = wanted {
                *limit = Some(limit.map_or(wanted, |current| current.max(wanted)));
            }
        }
    }

    for (idx, track) in tracks.iter().enumerate() {
        let Some(&(_, max)) = sizing.get(idx) else {
            continue;
        };
        if !max.is_intrinsic() {
            continue;
        }
        let base = resolved.base_sizes.get(idx).copied().unwrap_or(0.0);
        let mut limit = content_limits.get(idx).copied().flatten().unwrap_or(base);
        if let Some(fit_limit) = track.size.fit_content_limit(available) {
            limit = limit.min(fit_limit);
        }
        if let Some(slot) = resolved.growth_limits.get_mut(idx) {
            *slot = limit.max(base);
        }
    }

    let mut spanning: Vec<&ItemContribution> = contributions
        .iter()
        .filter(|item| item.span > 1)
        .filter(|item| {
            spanned(item, count).all(|idx| {
                tracks
                    .get(idx)
                    .is_none_or(|track| flex_factor(track, available) <= 0.0)
            })
        })
        .collect();
    spanning.sort_by_key(|item| item.span);
    for contribution in spanning {
        let range = spanned(contribution, count);
        let span = range.len();
        let gaps = inner_gaps(span, gap);

        let intrinsic_min: Vec<usize> = range
            .clone()
            .filter(|idx| sizing.get(*idx).is_some_and(|(min, _)| min.is_intrinsic()))
            .collect();
        let current: f32 = range
            .clone()
            .map(|idx| resolved.base_sizes.get(idx).copied().unwrap_or(0.0))
            .sum();
        let needed = contribution.sizes.min_content - current - gaps;
        if needed > 0.0 && !intrinsic_min.is_empty() {
            let share = needed / intrinsic_min.len() as f32;
            for idx in &intrinsic_min {
                if let Some(base) = resolved.base_sizes.get_mut(*idx) {
                    *base += share;
                }
            }
        }

        let intrinsic_max: Vec<usize> = range
            .clone()
            .filter(|idx| sizing.get(*idx).is_some_and(|(_, max)| max.is_intrinsic()))
            .collect();
        let current_limits: f32 = range
            .clone()
            .map(|idx| resolved.final_limit(idx))
            .sum();
        let wanted = contribution.sizes.max_content - current_limits - gaps;
        if wanted > 0.0 && !intrinsic_max.is_empty() {
            let share = wanted / intrinsic_max.len() as f32;
            for idx in &intrinsic_max {
                let floor = resolved.final_limit(*idx);
                if let Some(limit) = resolved.growth_limits.get_mut(*idx) {
                    *limit = floor + share;
                }
            }
        }
    }

    for (base, limit) in resolved
        .base_sizes
        .iter()
        .zip(resolved.growth_limits.iter_mut())
    {
        if limit.is_finite() {
            *limit = limit.max(*base);
        }
    }
}
