//! Helper functions for track sizing.

use std::ops::Range;

use crate::types::{GridTrack, TrackBreadth, sanitize};

use super::ItemContribution;

/// A breadth after resolving percentages against the axis size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    Fixed(f32),
    Flex(f32),
    MinContent,
    MaxContent,
    /// `auto`, and percentages of an indefinite axis.
    Auto,
}

impl Sizing {
    pub const fn is_intrinsic(self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent | Self::Auto)
    }
}

/// Resolve a breadth for this sizing pass.
pub fn resolve_breadth(breadth: TrackBreadth, available: Option<f32>) -> Sizing {
    match breadth {
        TrackBreadth::Length(len) => Sizing::Fixed(sanitize(len)),
        TrackBreadth::Percentage(_) => breadth.fixed(available).map_or(Sizing::Auto, Sizing::Fixed),
        TrackBreadth::Flex(_) => Sizing::Flex(breadth.flex_factor()),
        TrackBreadth::MinContent => Sizing::MinContent,
        TrackBreadth::MaxContent => Sizing::MaxContent,
        TrackBreadth::Auto => Sizing::Auto,
    }
}

/// Min and max sizing of a track.
pub fn track_sizing(track: &GridTrack, available: Option<f32>) -> (Sizing, Sizing) {
    (
        resolve_breadth(track.size.min_breadth(), available),
        resolve_breadth(track.size.max_breadth(), available),
    )
}

/// Flex factor of a track's max sizing function, 0 when not flexible.
pub fn flex_factor(track: &GridTrack, available: Option<f32>) -> f32 {
    match track_sizing(track, available).1 {
        Sizing::Flex(factor) => factor,
        _ => 0.0,
    }
}

/// Total gap space strictly between `span` adjacent tracks.
#[inline]
pub fn inner_gaps(span: usize, gap: f32) -> f32 {
    span.saturating_sub(1) as f32 * gap
}

/// Track indices covered by a contribution, bounded by the track count.
#[inline]
pub fn spanned(contribution: &ItemContribution, track_count: usize) -> Range<usize> {
    let start = contribution.start.min(track_count);
    let end = (contribution.start + contribution.span).min(track_count);
    start..end
}
