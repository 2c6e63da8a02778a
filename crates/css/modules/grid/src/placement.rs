//! Grid item placement algorithm.
//!
//! Spec: §8 Placing Grid Items
//! <https://www.w3.org/TR/css-grid-2/#placement>

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::areas::TemplateAreas;
use crate::types::{GridAutoFlow, GridItem, GridLine};

/// Area occupied by a grid item (row/column span).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridArea {
    /// Row start line (1-indexed)
    pub row_start: usize,
    /// Row end line (1-indexed, exclusive)
    pub row_end: usize,
    /// Column start line (1-indexed)
    pub col_start: usize,
    /// Column end line (1-indexed, exclusive)
    pub col_end: usize,
}

impl GridArea {
    /// Create a new grid area.
    pub const fn new(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Get the row span (number of rows occupied).
    pub const fn row_span(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Get the column span (number of columns occupied).
    pub const fn col_span(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    /// Check if this area overlaps with another area.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.row_start < other.row_end
            && self.row_end > other.row_start
            && self.col_start < other.col_end
            && self.col_end > other.col_start
    }
}

/// Result of placement: one area per item plus the grid size including implicit tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacementResult {
    pub areas: Vec<GridArea>,
    pub row_count: usize,
    pub col_count: usize,
}

/// Placement along one axis after resolving lines: zero-based start when definite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPlacement {
    pub start: Option<usize>,
    pub span: usize,
}

impl AxisPlacement {
    const fn auto(span: usize) -> Self {
        Self { start: None, span }
    }

    const fn definite(start: usize, span: usize) -> Self {
        Self {
            start: Some(start),
            span,
        }
    }
}

/// Zero-based line index for a 1-based (or negative) CSS line number.
///
/// Negative numbers count back from the last explicit line. Lines before the explicit
/// grid clamp to the first line.
fn line_index(line: i32, explicit_tracks: usize) -> Option<usize> {
    match line {
        0 => None,
        positive if positive > 0 => usize::try_from(positive - 1).ok(),
        negative => {
            let from_end = usize::try_from(negative.unsigned_abs()).unwrap_or(usize::MAX);
            Some((explicit_tracks + 1).saturating_sub(from_end))
        }
    }
}

fn span_of(line: GridLine) -> Option<usize> {
    match line {
        GridLine::Span(span) => Some(usize::from(span.max(1))),
        _ => None,
    }
}

/// Most tracks one axis may reach through line numbers and spans.
///
/// Spec: §8.2 (implementations may clamp the implicit grid)
pub const MAX_GRID_TRACKS: usize = 1000;

/// Keep a placement inside the first [`MAX_GRID_TRACKS`] tracks.
fn clamp_to_track_limit(placement: AxisPlacement) -> AxisPlacement {
    let span = placement.span.clamp(1, MAX_GRID_TRACKS);
    let clamped = placement.start.map_or(AxisPlacement::auto(span), |start| {
        let first = start.min(MAX_GRID_TRACKS - 1);
        AxisPlacement::definite(first, span.min(MAX_GRID_TRACKS - first))
    });
    if clamped != placement {
        warn!(
            "resolve_axis_lines: {placement:?} exceeds {MAX_GRID_TRACKS} tracks, clamped to {clamped:?}"
        );
    }
    clamped
}

/// Resolve a start/end pair into a definite or auto placement.
///
/// Out-of-range lines and spans clamp to [`MAX_GRID_TRACKS`].
///
/// Spec: §8.3.1 Grid Placement Conflict Handling
pub fn resolve_axis_lines(start: GridLine, end: GridLine, explicit_tracks: usize) -> AxisPlacement {
    clamp_to_track_limit(resolve_unclamped(start, end, explicit_tracks))
}

fn resolve_unclamped(start: GridLine, end: GridLine, explicit_tracks: usize) -> AxisPlacement {
    let start_line = match start {
        GridLine::Line(line) => line_index(line, explicit_tracks),
        _ => None,
    };
    let end_line = match end {
        GridLine::Line(line) => line_index(line, explicit_tracks),
        _ => None,
    };
    match (start_line, end_line) {
        (Some(first), Some(second)) => {
            let (low, high) = if first <= second {
                (first, second)
            } else {
                (second, first)
            };
            AxisPlacement::definite(low, (high - low).max(1))
        }
        (Some(first), None) => AxisPlacement::definite(first, span_of(end).unwrap_or(1)),
        (None, Some(second)) => {
            let span = span_of(start).unwrap_or(1);
            let low = second.saturating_sub(span);
            AxisPlacement::definite(low, second.saturating_sub(low).max(1))
        }
        (None, None) => AxisPlacement::auto(span_of(start).or_else(|| span_of(end)).unwrap_or(1)),
    }
}

/// Item placement expressed along the flow axes: `primary` grows with auto placement
/// (rows for row flow), `secondary` is bounded by the grid width.
#[derive(Debug, Clone, Copy)]
struct FlowItem {
    primary: AxisPlacement,
    secondary: AxisPlacement,
}

/// Occupied cells keyed by `(primary, secondary)`.
#[derive(Debug, Default)]
struct Occupancy {
    cells: HashSet<(usize, usize)>,
}

impl Occupancy {
    fn is_free(&self, primary: usize, secondary: usize, item: (usize, usize)) -> bool {
        let (primary_span, secondary_span) = item;
        (primary..primary + primary_span).all(|row| {
            (secondary..secondary + secondary_span).all(|col| !self.cells.contains(&(row, col)))
        })
    }

    fn occupy(&mut self, primary: usize, secondary: usize, item: (usize, usize)) {
        let (primary_span, secondary_span) = item;
        for row in primary..primary + primary_span {
            for col in secondary..secondary + secondary_span {
                self.cells.insert((row, col));
            }
        }
    }
}

/// Place grid items according to the grid placement algorithm.
///
/// Named areas resolve first; unknown names fall back to auto placement. Items locked to
/// a primary track search along the secondary axis; fully automatic items scan with a
/// cursor (sparse) or from the grid start (dense).
///
/// Spec: §8.5 Grid Item Placement Algorithm
/// <https://www.w3.org/TR/css-grid-2/#auto-placement-algo>
pub fn place_grid_items<NodeId>(
    items: &[GridItem<NodeId>],
    explicit_rows: usize,
    explicit_cols: usize,
    areas: &TemplateAreas,
    auto_flow: GridAutoFlow,
) -> PlacementResult {
    let column_flow = auto_flow.is_column();
    let dense = auto_flow.is_dense();
    let (explicit_primary, explicit_secondary) = if column_flow {
        (explicit_cols, explicit_rows)
    } else {
        (explicit_rows, explicit_cols)
    };

    let flow_items: Vec<FlowItem> = items
        .iter()
        .map(|item| {
            let named = item
                .placement
                .area
                .as_deref()
                .and_then(|name| areas.get(name));
            let (rows, cols) = named.map_or_else(
                || {
                    let placement = &item.placement;
                    (
                        resolve_axis_lines(placement.row_start, placement.row_end, explicit_rows),
                        resolve_axis_lines(
                            placement.column_start,
                            placement.column_end,
                            explicit_cols,
                        ),
                    )
                },
                |area| {
                    (
                        AxisPlacement::definite(area.row_start - 1, area.row_span()),
                        AxisPlacement::definite(area.col_start - 1, area.col_span()),
                    )
                },
            );
            if column_flow {
                FlowItem {
                    primary: cols,
                    secondary: rows,
                }
            } else {
                FlowItem {
                    primary: rows,
                    secondary: cols,
                }
            }
        })
        .collect();

    // The secondary axis is bounded by the explicit grid, widened by definite placements
    // and the largest auto span.
    let secondary_count = flow_items
        .iter()
        .map(|flow| {
            flow.secondary
                .start
                .map_or(flow.secondary.span, |start| start + flow.secondary.span)
        })
        .fold(explicit_secondary.max(1), usize::max);

    let mut occupancy = Occupancy::default();
    let mut resolved: Vec<Option<(usize, usize)>> = vec![None; flow_items.len()];

    // Step 1: fully definite items.
    for (slot, flow) in resolved.iter_mut().zip(flow_items.iter()) {
        if let (Some(primary), Some(secondary)) = (flow.primary.start, flow.secondary.start) {
            occupancy.occupy(primary, secondary, (flow.primary.span, flow.secondary.span));
            *slot = Some((primary, secondary));
        }
    }

    // Step 2: items locked to a primary track search the secondary axis.
    let mut lane_cursors: HashMap<usize, usize> = HashMap::new();
    for (slot, flow) in resolved.iter_mut().zip(flow_items.iter()) {
        let (Some(primary), None) = (flow.primary.start, flow.secondary.start) else {
            continue;
        };
        let spans = (flow.primary.span, flow.secondary.span);
        let first = if dense {
            0
        } else {
            lane_cursors.get(&primary).copied().unwrap_or(0)
        };
        let last = secondary_count.saturating_sub(flow.secondary.span);
        let found = (first..=last).find(|&secondary| occupancy.is_free(primary, secondary, spans));
        // No room in the lane: overflow past the secondary end rather than overlap.
        let secondary = found.unwrap_or(secondary_count);
        occupancy.occupy(primary, secondary, spans);
        lane_cursors.insert(primary, secondary + flow.secondary.span);
        *slot = Some((primary, secondary));
    }

    // Step 3: remaining items, in order, with the auto-placement cursor.
    let mut cursor = (0usize, 0usize);
    for (slot, flow) in resolved.iter_mut().zip(flow_items.iter()) {
        if slot.is_some() {
            continue;
        }
        let spans = (flow.primary.span, flow.secondary.span);
        let position = match flow.secondary.start {
            Some(secondary) => {
                let mut primary = if dense { 0 } else { cursor.0 };
                if !dense && secondary < cursor.1 {
                    primary += 1;
                }
                while !occupancy.is_free(primary, secondary, spans) {
                    primary += 1;
                }
                (primary, secondary)
            }
            None => {
                let (mut primary, mut secondary) = if dense { (0, 0) } else { cursor };
                let last = secondary_count.saturating_sub(flow.secondary.span);
                loop {
                    if secondary > last {
                        primary += 1;
                        secondary = 0;
                        continue;
                    }
                    if occupancy.is_free(primary, secondary, spans) {
                        break (primary, secondary);
                    }
                    secondary += 1;
                }
            }
        };
        occupancy.occupy(position.0, position.1, spans);
        cursor = (position.0, position.1 + flow.secondary.span);
        *slot = Some(position);
    }

    let mut primary_count = explicit_primary;
    let mut max_secondary = secondary_count;
    let areas_out: Vec<GridArea> = resolved
        .iter()
        .zip(flow_items.iter())
        .map(|(slot, flow)| {
            let (primary, secondary) = slot.unwrap_or((0, 0));
            primary_count = primary_count.max(primary + flow.primary.span);
            max_secondary = max_secondary.max(secondary + flow.secondary.span);
            let (row, row_span, col, col_span) = if column_flow {
                (secondary, flow.secondary.span, primary, flow.primary.span)
            } else {
                (primary, flow.primary.span, secondary, flow.secondary.span)
            };
            GridArea::new(row + 1, row + 1 + row_span, col + 1, col + 1 + col_span)
        })
        .collect();
    let (row_count, col_count) = if column_flow {
        (max_secondary, primary_count)
    } else {
        (primary_count, max_secondary)
    };
    debug!(
        "place_grid_items: items={}, rows={row_count}, cols={col_count}, flow={auto_flow:?}",
        items.len()
    );
    PlacementResult {
        areas: areas_out,
        row_count,
        col_count,
    }
}
