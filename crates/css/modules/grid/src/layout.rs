//! Grid layout algorithm.
//!
//! Spec: §12 Grid Sizing
//! <https://www.w3.org/TR/css-grid-2/#layout-algorithm>

use crate::alignment::{
    align_in_area, area_extent, content_distribution, effective_alignment, track_positions,
};
use crate::areas::TemplateAreas;
use crate::placement::{GridArea, place_grid_items};
use crate::track_sizing::{
    GridAxis, GridAxisTracks, ItemContribution, ResolvedTrackSizes, TrackSizingParams,
    add_implicit_tracks, collapse_auto_fit_tracks, expand_auto_repeat_tracks, resolve_track_sizes,
};
use crate::types::{
    ContentSizes, GridAlignment, GridAutoFlow, GridContentAlignment, GridItem, GridItemAxis,
    GridTrack,
};

/// Input parameters for grid layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridContainerInputs {
    /// Row tracks definition
    pub row_tracks: GridAxisTracks,
    /// Column tracks definition
    pub col_tracks: GridAxisTracks,
    /// `grid-template-areas`
    pub areas: TemplateAreas,
    /// Auto-flow direction
    pub auto_flow: GridAutoFlow,
    /// Definite content-box inline size
    pub inline_size: Option<f32>,
    /// Definite content-box block size
    pub block_size: Option<f32>,
    /// Justify items in their grid area (inline axis)
    pub justify_items: GridAlignment,
    /// Align items in their grid area (block axis)
    pub align_items: GridAlignment,
    pub justify_content: GridContentAlignment,
    pub align_content: GridContentAlignment,
}

impl GridContainerInputs {
    /// Create a new grid container inputs with default values.
    pub fn new(
        row_tracks: GridAxisTracks,
        col_tracks: GridAxisTracks,
        inline_size: Option<f32>,
        block_size: Option<f32>,
    ) -> Self {
        Self {
            row_tracks,
            col_tracks,
            inline_size,
            block_size,
            ..Self::default()
        }
    }
}

/// A grid item with its final position and size, relative to the content box.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlacedItem<NodeId = usize> {
    /// Node identifier (generic to support different node ID types)
    pub node_id: NodeId,
    /// Border-box offset along the inline (column) axis
    pub inline_offset: f32,
    /// Border-box offset along the block (row) axis
    pub block_offset: f32,
    pub inline_size: f32,
    pub block_size: f32,
    /// Grid area occupied
    pub area: GridArea,
}

/// Result of grid layout computation.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayoutResult<NodeId = usize> {
    /// Placed items with their positions
    pub items: Vec<GridPlacedItem<NodeId>>,
    /// Σ column tracks + gaps
    pub total_inline: f32,
    /// Σ row tracks + gaps
    pub total_block: f32,
    /// Resolved column sizes
    pub col_sizes: ResolvedTrackSizes,
    /// Resolved row sizes
    pub row_sizes: ResolvedTrackSizes,
    pub col_positions: Vec<f32>,
    pub row_positions: Vec<f32>,
}

/// Final track list for one axis: explicit (with repeats), grown to `count` implicit
/// tracks, with empty `auto-fit` tracks collapsed.
fn build_axis_tracks(
    explicit: Vec<GridTrack>,
    axis_tracks: &GridAxisTracks,
    count: usize,
    areas: &mut [GridArea],
    axis: GridAxis,
) -> Vec<GridTrack> {
    let grown = add_implicit_tracks(explicit, count, &axis_tracks.auto_tracks);
    collapse_auto_fit_tracks(grown, areas, axis)
}

fn contributions<NodeId>(
    items: &[GridItem<NodeId>],
    areas: &[GridArea],
    axis: GridAxis,
    block_axes: &[GridItemAxis],
) -> Vec<ItemContribution> {
    items
        .iter()
        .zip(areas.iter())
        .enumerate()
        .map(|(index, (item, area))| match axis {
            GridAxis::Column => ItemContribution {
                start: area.col_start - 1,
                span: area.col_span(),
                sizes: item.inline.outer_contribution(),
            },
            GridAxis::Row => ItemContribution {
                start: area.row_start - 1,
                span: area.row_span(),
                sizes: block_axes
                    .get(index)
                    .unwrap_or(&item.block)
                    .outer_contribution(),
            },
        })
        .collect()
}

/// Track positions after content distribution within a definite axis.
fn distribute_tracks(
    sizes: &ResolvedTrackSizes,
    gap: f32,
    available: Option<f32>,
    align: GridContentAlignment,
) -> Vec<f32> {
    let count = sizes.base_sizes.len();
    let free = available.map_or(0.0, |size| size - sizes.total(gap));
    let (start, between) = content_distribution(align, free, count);
    track_positions(&sizes.base_sizes, gap, start, between)
}

/// Run the grid layout algorithm with static block contributions.
///
/// Spec: §12 Grid Sizing Algorithm
/// <https://www.w3.org/TR/css-grid-2/#layout-algorithm>
pub fn layout_grid<NodeId: Clone>(
    items: &[GridItem<NodeId>],
    inputs: &GridContainerInputs,
) -> GridLayoutResult<NodeId> {
    layout_grid_with(items, inputs, |index, _| {
        items
            .get(index)
            .map(|item| item.block.contribution)
            .unwrap_or_default()
    })
}

/// Run the grid layout algorithm, measuring each item's block contributions at its
/// resolved inline size.
///
/// 1. Expands repeats, places items and grows implicit tracks
/// 2. Sizes columns from inline contributions
/// 3. Resolves each item's inline size, then measures its block contributions
/// 4. Sizes rows and positions items within their areas
pub fn layout_grid_with<NodeId, Measure>(
    items: &[GridItem<NodeId>],
    inputs: &GridContainerInputs,
    mut measure_block: Measure,
) -> GridLayoutResult<NodeId>
where
    NodeId: Clone,
    Measure: FnMut(usize, f32) -> ContentSizes,
{
    let mut explicit_cols = expand_auto_repeat_tracks(&inputs.col_tracks, inputs.inline_size);
    let mut explicit_rows = expand_auto_repeat_tracks(&inputs.row_tracks, inputs.block_size);
    explicit_cols = add_implicit_tracks(explicit_cols, inputs.areas.columns, &[]);
    explicit_rows = add_implicit_tracks(explicit_rows, inputs.areas.rows, &[]);

    let placement = place_grid_items(
        items,
        explicit_rows.len(),
        explicit_cols.len(),
        &inputs.areas,
        inputs.auto_flow,
    );
    let mut areas = placement.areas;
    let col_tracks = build_axis_tracks(
        explicit_cols,
        &inputs.col_tracks,
        placement.col_count,
        &mut areas,
        GridAxis::Column,
    );
    let row_tracks = build_axis_tracks(
        explicit_rows,
        &inputs.row_tracks,
        placement.row_count,
        &mut areas,
        GridAxis::Row,
    );
    tracing::debug!(
        "layout_grid: items={}, columns={}, rows={}",
        items.len(),
        col_tracks.len(),
        row_tracks.len()
    );

    // Columns first.
    let col_gap = inputs.col_tracks.gap();
    let col_contributions = contributions(items, &areas, GridAxis::Column, &[]);
    let col_sizes = resolve_track_sizes(&TrackSizingParams {
        tracks: &col_tracks,
        gap: col_gap,
        available_size: inputs.inline_size,
        contributions: &col_contributions,
        axis: GridAxis::Column,
        stretch_auto: inputs.justify_content == GridContentAlignment::Stretch,
    });
    let col_positions = distribute_tracks(
        &col_sizes,
        col_gap,
        inputs.inline_size,
        inputs.justify_content,
    );

    let inline_placements: Vec<(f32, f32)> = items
        .iter()
        .zip(areas.iter())
        .map(|(item, area)| {
            let (area_offset, area_size) = area_extent(
                &col_positions,
                &col_sizes.base_sizes,
                area.col_start - 1,
                area.col_end - 1,
            );
            let align = effective_alignment(&item.inline, inputs.justify_items, item.has_aspect_ratio);
            align_in_area(&item.inline, align, area_offset, area_size)
        })
        .collect();

    // Then rows, from block contributions at the resolved inline sizes.
    let block_axes: Vec<GridItemAxis> = items
        .iter()
        .zip(inline_placements.iter())
        .enumerate()
        .map(|(index, (item, &(_, inline_size)))| GridItemAxis {
            contribution: measure_block(index, inline_size),
            ..item.block
        })
        .collect();
    let row_gap = inputs.row_tracks.gap();
    let row_contributions = contributions(items, &areas, GridAxis::Row, &block_axes);
    let row_sizes = resolve_track_sizes(&TrackSizingParams {
        tracks: &row_tracks,
        gap: row_gap,
        available_size: inputs.block_size,
        contributions: &row_contributions,
        axis: GridAxis::Row,
        stretch_auto: inputs.align_content == GridContentAlignment::Stretch,
    });
    let row_positions = distribute_tracks(&row_sizes, row_gap, inputs.block_size, inputs.align_content);

    let placed: Vec<GridPlacedItem<NodeId>> = items
        .iter()
        .zip(areas.iter())
        .zip(inline_placements.iter().zip(block_axes.iter()))
        .map(|((item, area), (&(inline_offset, inline_size), block_axis))| {
            let (area_offset, area_size) = area_extent(
                &row_positions,
                &row_sizes.base_sizes,
                area.row_start - 1,
                area.row_end - 1,
            );
            let align = effective_alignment(block_axis, inputs.align_items, item.has_aspect_ratio);
            let (block_offset, block_size) = align_in_area(block_axis, align, area_offset, area_size);
            tracing::trace!(
                "grid item area={area:?} inline=({inline_offset:.1},{inline_size:.1}) block=({block_offset:.1},{block_size:.1})"
            );
            GridPlacedItem {
                node_id: item.node_id.clone(),
                inline_offset,
                block_offset,
                inline_size,
                block_size,
                area: *area,
            }
        })
        .collect();

    GridLayoutResult {
        items: placed,
        total_inline: col_sizes.total(col_gap),
        total_block: row_sizes.total(row_gap),
        col_sizes,
        row_sizes,
        col_positions,
        row_positions,
    }
}
