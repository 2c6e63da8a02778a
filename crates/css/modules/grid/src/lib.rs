//! CSS Grid Layout Module Level 2
//! Spec: <https://www.w3.org/TR/css-grid-2/>
//!
//! Placement and track sizing for two-dimensional grids. Items are described by
//! their placement and content contributions; results are logical offsets inside the
//! container's content box (columns along the inline axis, rows along the block axis).

// Grid container and item types
mod types;
pub use types::{
    ContentSizes, GridAlignment, GridAutoFlow, GridContentAlignment, GridItem, GridItemAxis,
    GridLine, GridPlacement, GridTrack, GridTrackSize, TrackBreadth, TrackListType, TrackRepeat,
};

// Named areas
mod areas;
pub use areas::TemplateAreas;

// Track sizing algorithm
mod track_sizing;
pub use track_sizing::{
    GridAxis, GridAxisTracks, ItemContribution, ResolvedTrackSizes, TrackSizingParams,
    resolve_track_sizes,
};

// Grid placement algorithm
mod placement;
pub use placement::{
    AxisPlacement, GridArea, MAX_GRID_TRACKS, PlacementResult, place_grid_items, resolve_axis_lines,
};

// Alignment
mod alignment;
pub use alignment::{align_in_area, area_extent, content_distribution};

// Grid layout algorithm
mod layout;
pub use layout::{
    GridContainerInputs, GridLayoutResult, GridPlacedItem, layout_grid, layout_grid_with,
};
