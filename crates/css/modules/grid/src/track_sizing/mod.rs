//! Grid track sizing algorithm.
//!
//! Spec: §12 Grid Sizing
//! <https://www.w3.org/TR/css-grid-2/#algo-track-sizing>

mod distribution;
mod expansion;
mod helpers;
mod resolution;

use crate::types::{ContentSizes, GridTrack, GridTrackSize, TrackRepeat, sanitize};

pub use distribution::{expand_flexible_tracks, maximize_tracks, stretch_auto_tracks};
pub use expansion::{
    add_implicit_tracks, auto_repeat_count, collapse_auto_fit_tracks, expand_auto_repeat_tracks,
};
pub use helpers::inner_gaps;
pub use resolution::{initialize_tracks, resolve_intrinsic_tracks};

/// Axis identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Row tracks, stacked along the block axis
    Row,
    /// Column tracks, laid out along the inline axis
    Column,
}

/// Track definitions for one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridAxisTracks {
    /// Explicit track definitions (`grid-template-rows/columns`)
    pub tracks: Vec<GridTrack>,
    /// Gap between tracks
    pub gap: f32,
    /// Optional repeat pattern following `tracks`
    pub auto_repeat: Option<TrackRepeat>,
    /// Sizes of implicit tracks (`grid-auto-rows/columns`), cycled; empty means `auto`
    pub auto_tracks: Vec<GridTrackSize>,
}

impl GridAxisTracks {
    /// Create a new axis tracks definition.
    pub fn new(tracks: Vec<GridTrack>, gap: f32) -> Self {
        Self {
            tracks,
            gap,
            auto_repeat: None,
            auto_tracks: Vec::new(),
        }
    }

    /// Explicit tracks from plain sizing functions.
    pub fn from_sizes(sizes: &[GridTrackSize], gap: f32) -> Self {
        Self::new(sizes.iter().copied().map(GridTrack::explicit).collect(), gap)
    }

    /// Create a new axis tracks definition with auto-repeat pattern.
    pub fn with_auto_repeat(tracks: Vec<GridTrack>, gap: f32, auto_repeat: TrackRepeat) -> Self {
        Self {
            auto_repeat: Some(auto_repeat),
            ..Self::new(tracks, gap)
        }
    }

    /// Gap with malformed values clamped to zero.
    #[inline]
    pub fn gap(&self) -> f32 {
        sanitize(self.gap)
    }
}

/// Resolved track sizes after running the track sizing algorithm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTrackSizes {
    /// Base sizes for each track
    pub base_sizes: Vec<f32>,
    /// Growth limits for each track
    pub growth_limits: Vec<f32>,
}

impl ResolvedTrackSizes {
    /// Create a new resolved track sizes with the given count.
    pub fn new(count: usize) -> Self {
        Self {
            base_sizes: vec![0.0; count],
            growth_limits: vec![f32::INFINITY; count],
        }
    }

    /// Final size of a track: its base size.
    pub fn final_size(&self, index: usize) -> f32 {
        self.base_sizes.get(index).copied().unwrap_or(0.0)
    }

    /// Growth limit, or the base size while the limit is still infinite.
    pub fn final_limit(&self, index: usize) -> f32 {
        match self.growth_limits.get(index).copied() {
            Some(limit) if limit.is_finite() => limit,
            _ => self.final_size(index),
        }
    }

    /// Σ tracks + gaps between them.
    pub fn total(&self, gap: f32) -> f32 {
        self.base_sizes.iter().sum::<f32>() + inner_gaps(self.base_sizes.len(), gap)
    }
}

/// An item's outer contribution to the tracks it spans on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemContribution {
    /// Zero-based first track
    pub start: usize,
    pub span: usize,
    /// Outer sizes: border box plus margins.
    pub sizes: ContentSizes,
}

/// Parameters for track sizing.
#[derive(Debug, Clone, Copy)]
pub struct TrackSizingParams<'params> {
    /// Final track list for this axis (explicit and implicit)
    pub tracks: &'params [GridTrack],
    pub gap: f32,
    /// Definite content size of this axis
    pub available_size: Option<f32>,
    pub contributions: &'params [ItemContribution],
    /// Axis being sized
    pub axis: GridAxis,
    /// Grow `auto` tracks into leftover space (`*-content: stretch`)
    pub stretch_auto: bool,
}

/// Resolve track sizes according to the grid sizing algorithm.
///
/// Spec: §12.3 Track Sizing Algorithm
/// <https://www.w3.org/TR/css-grid-2/#algo-track-sizing>
pub fn resolve_track_sizes(params: &TrackSizingParams<'_>) -> ResolvedTrackSizes {
    let available = params
        .available_size
        .filter(|size| size.is_finite())
        .map(sanitize);
    let gap = sanitize(params.gap);
    tracing::debug!(
        "resolve_track_sizes: axis={:?}, available_size={:?}, tracks={}, items={}",
        params.axis,
        available,
        params.tracks.len(),
        params.contributions.len()
    );

    let mut resolved = initialize_tracks(params.tracks, available);
    resolve_intrinsic_tracks(
        &mut resolved,
        params.tracks,
        params.contributions,
        gap,
        available,
    );
    maximize_tracks(&mut resolved, gap, available);
    expand_flexible_tracks(
        &mut resolved,
        params.tracks,
        params.contributions,
        gap,
        available,
    );
    if params.stretch_auto
        && let Some(available) = available
    {
        stretch_auto_tracks(&mut resolved, params.tracks, gap, available);
    }
    tracing::debug!("resolve_track_sizes: axis={:?} -> {:?}", params.axis, resolved.base_sizes);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::GridArea;
    use crate::types::{TrackBreadth, TrackListType};

    fn sizes_for(tracks: &[GridTrack], available: Option<f32>, items: &[ItemContribution]) -> Vec<f32> {
        resolve_track_sizes(&TrackSizingParams {
            tracks,
            gap: 10.0,
            available_size: available,
            contributions: items,
            axis: GridAxis::Column,
            stretch_auto: false,
        })
        .base_sizes
    }

    fn contribution(start: usize, span: usize, min: f32, max: f32) -> ItemContribution {
        ItemContribution {
            start,
            span,
            sizes: ContentSizes::new(min, max),
        }
    }

    fn explicit(sizes: &[GridTrackSize]) -> Vec<GridTrack> {
        sizes.iter().copied().map(GridTrack::explicit).collect()
    }

    fn assert_sizes(got: &[f32], expected: &[f32]) {
        assert_eq!(got.len(), expected.len(), "got {got:?}");
        for (value, want) in got.iter().zip(expected) {
            assert!((value - want).abs() < 0.01, "got {got:?}, expected {expected:?}");
        }
    }

    /// Test resolution of fixed-size and percentage tracks.
    ///
    /// # Panics
    /// Panics if fixed tracks do not keep their lengths.
    #[test]
    fn test_resolve_fixed_tracks() {
        let tracks = explicit(&[
            GridTrackSize::px(100.0),
            GridTrackSize::Breadth(TrackBreadth::Percentage(0.5)),
        ]);
        assert_sizes(&sizes_for(&tracks, Some(400.0), &[]), &[100.0, 200.0]);
        // Percentages of an indefinite axis behave as auto.
        assert_sizes(&sizes_for(&tracks, None, &[contribution(1, 1, 30.0, 60.0)]), &[100.0, 60.0]);
    }

    /// Test resolution of flexible tracks with fr units.
    ///
    /// # Panics
    /// Panics if the leftover space is not shared by flex factor after gaps.
    #[test]
    fn test_resolve_flex_tracks() {
        let tracks = explicit(&[
            GridTrackSize::px(100.0),
            GridTrackSize::fr(1.0),
            GridTrackSize::fr(2.0),
        ]);
        // 420 - 100 - 2 gaps = 300, shared 1:2
        assert_sizes(&sizes_for(&tracks, Some(420.0), &[]), &[100.0, 100.0, 200.0]);
    }

    /// # Panics
    /// Panics if an fr track with large content does not keep its minimum.
    #[test]
    fn flex_track_keeps_content_minimum() {
        let tracks = explicit(&[GridTrackSize::fr(1.0), GridTrackSize::fr(1.0)]);
        let items = [contribution(0, 1, 250.0, 250.0)];
        // 310 - 10 gap = 300; track 0 needs 250 so it becomes inflexible.
        assert_sizes(&sizes_for(&tracks, Some(310.0), &items), &[250.0, 50.0]);
    }

    /// # Panics
    /// Panics if indefinite fr tracks do not size to their max-content share.
    #[test]
    fn indefinite_flex_uses_max_content() {
        let tracks = explicit(&[GridTrackSize::fr(1.0), GridTrackSize::fr(2.0)]);
        let items = [contribution(0, 1, 10.0, 40.0), contribution(1, 1, 10.0, 20.0)];
        assert_sizes(&sizes_for(&tracks, None, &items), &[40.0, 80.0]);
    }

    /// # Panics
    /// Panics if auto tracks do not size between min- and max-content.
    #[test]
    fn auto_tracks_grow_to_max_content() {
        let tracks = explicit(&[GridTrackSize::auto(), GridTrackSize::auto()]);
        let items = [contribution(0, 1, 20.0, 100.0), contribution(1, 1, 30.0, 50.0)];
        // Enough room: both reach max-content.
        assert_sizes(&sizes_for(&tracks, Some(500.0), &items), &[100.0, 50.0]);
        // 100 - 10 gap = 90: 40 free after minimums, shared equally.
        assert_sizes(&sizes_for(&tracks, Some(100.0), &items), &[40.0, 50.0]);
    }

    /// # Panics
    /// Panics if a spanning item does not account for the gap it covers.
    #[test]
    fn spanning_item_distributes_excess() {
        let tracks = explicit(&[GridTrackSize::auto(), GridTrackSize::auto()]);
        let items = [contribution(0, 2, 110.0, 110.0)];
        // 110 - 10 gap = 100 shared by two auto tracks.
        assert_sizes(&sizes_for(&tracks, None, &items), &[50.0, 50.0]);
        let with_fixed = explicit(&[GridTrackSize::px(30.0), GridTrackSize::auto()]);
        assert_sizes(&sizes_for(&with_fixed, None, &items), &[30.0, 70.0]);
    }

    /// # Panics
    /// Panics if fit-content does not clamp max-content to its limit.
    #[test]
    fn fit_content_clamps() {
        let tracks = explicit(&[GridTrackSize::FitContent(TrackBreadth::Length(80.0))]);
        let items = [contribution(0, 1, 20.0, 200.0)];
        assert_sizes(&sizes_for(&tracks, Some(500.0), &items), &[80.0]);
    }

    /// # Panics
    /// Panics if stretch does not share leftover space among auto tracks.
    #[test]
    fn stretch_grows_auto_tracks() {
        let tracks = explicit(&[GridTrackSize::px(100.0), GridTrackSize::auto()]);
        let sizes = resolve_track_sizes(&TrackSizingParams {
            tracks: &tracks,
            gap: 0.0,
            available_size: Some(300.0),
            contributions: &[],
            axis: GridAxis::Row,
            stretch_auto: true,
        });
        assert_sizes(&sizes.base_sizes, &[100.0, 200.0]);
    }

    /// Test auto-fit with minmax(200px, 1fr) and a single item.
    ///
    /// This simulates: grid-template-columns: repeat(auto-fit, minmax(200px, 1fr))
    /// With 569px available and 10px gap two repetitions fit; the empty one collapses
    /// and the remaining column takes the full width.
    ///
    /// # Panics
    /// Panics if the empty repetition is kept or the column does not fill the axis.
    #[test]
    fn test_auto_fit_minmax_single_item() {
        let repeat_track =
            GridTrackSize::MinMax(TrackBreadth::Length(200.0), TrackBreadth::Flex(1.0));
        let axis_tracks =
            GridAxisTracks::with_auto_repeat(vec![], 10.0, TrackRepeat::AutoFit(vec![repeat_track]));
        let expanded = expand_auto_repeat_tracks(&axis_tracks, Some(569.0));
        assert_eq!(expanded.len(), 2);
        assert!(expanded.iter().all(|track| track.track_type == TrackListType::AutoFit));

        let mut areas = vec![GridArea::new(1, 2, 1, 2)];
        let tracks = collapse_auto_fit_tracks(expanded, &mut areas, GridAxis::Column);
        assert_eq!(tracks.len(), 1);
        assert_sizes(&sizes_for(&tracks, Some(569.0), &[]), &[569.0]);
    }

    /// # Panics
    /// Panics if collapsing does not remap areas past the removed tracks.
    #[test]
    fn collapse_remaps_areas() {
        let axis_tracks = GridAxisTracks::with_auto_repeat(
            vec![],
            0.0,
            TrackRepeat::AutoFit(vec![GridTrackSize::px(100.0)]),
        );
        let expanded = expand_auto_repeat_tracks(&axis_tracks, Some(400.0));
        assert_eq!(expanded.len(), 4);
        let mut areas = vec![GridArea::new(1, 2, 1, 2), GridArea::new(1, 2, 3, 4)];
        let tracks = collapse_auto_fit_tracks(expanded, &mut areas, GridAxis::Column);
        assert_eq!(tracks.len(), 2);
        assert_eq!(areas.get(1), Some(&GridArea::new(1, 2, 2, 3)));
    }

    /// # Panics
    /// Panics if implicit tracks do not cycle the auto track pattern.
    #[test]
    fn implicit_tracks_cycle_pattern() {
        let tracks = add_implicit_tracks(
            explicit(&[GridTrackSize::px(10.0)]),
            4,
            &[GridTrackSize::px(20.0), GridTrackSize::px(30.0)],
        );
        let sizes: Vec<GridTrackSize> = tracks.iter().map(|track| track.size).collect();
        assert_eq!(
            sizes,
            vec![
                GridTrackSize::px(10.0),
                GridTrackSize::px(20.0),
                GridTrackSize::px(30.0),
                GridTrackSize::px(20.0),
            ]
        );
        assert_eq!(auto_repeat_count(&GridAxisTracks::default(), &[GridTrackSize::auto()], Some(100.0)), 1);
    }
}
