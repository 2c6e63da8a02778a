//! Grid container and item type definitions.
//!
//! The crate works in logical terms: columns run along the inline axis, rows along the
//! block axis. Callers map the results to physical coordinates for their writing mode.
//!
//! Spec: CSS Grid Layout Module Level 2
//! <https://www.w3.org/TR/css-grid-2/>

/// Represents a track size in the grid.
///
/// Spec: §7.2.1 Track Sizing Functions
/// <https://www.w3.org/TR/css-grid-2/#track-sizing>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackBreadth {
    /// Length in pixels
    Length(f32),
    /// Fraction of the axis size (`0.5` = 50%)
    Percentage(f32),
    /// Flex factor (fr units)
    Flex(f32),
    /// Minimum content size
    MinContent,
    /// Maximum content size
    MaxContent,
    /// Automatic sizing
    Auto,
}

impl TrackBreadth {
    /// Check if this breadth is intrinsic (depends on content).
    pub const fn is_intrinsic(&self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent | Self::Auto)
    }

    /// Check if this breadth is flexible (uses fr units).
    pub const fn is_flexible(&self) -> bool {
        matches!(self, Self::Flex(_))
    }

    /// Get the flex factor, or 0.0 if not flexible.
    pub fn flex_factor(&self) -> f32 {
        match self {
            Self::Flex(factor) if factor.is_finite() => factor.max(0.0),
            _ => 0.0,
        }
    }

    /// Resolve a fixed breadth against the axis size. Percentages of an indefinite
    /// axis, intrinsic and flexible breadths yield `None`.
    pub fn fixed(&self, axis_size: Option<f32>) -> Option<f32> {
        match *self {
            Self::Length(len) => Some(sanitize(len)),
            Self::Percentage(pct) => axis_size.map(|size| sanitize(size * pct)),
            _ => None,
        }
    }
}

/// Track sizing function.
///
/// Spec: §7.2.1 Track Sizing Functions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridTrackSize {
    /// Single breadth
    Breadth(TrackBreadth),
    /// minmax(min, max)
    MinMax(TrackBreadth, TrackBreadth),
    /// fit-content(limit)
    FitContent(TrackBreadth),
}

impl GridTrackSize {
    /// A fixed pixel track.
    pub const fn px(len: f32) -> Self {
        Self::Breadth(TrackBreadth::Length(len))
    }

    /// A flexible `fr` track.
    pub const fn fr(factor: f32) -> Self {
        Self::Breadth(TrackBreadth::Flex(factor))
    }

    pub const fn auto() -> Self {
        Self::Breadth(TrackBreadth::Auto)
    }

    /// Get the minimum breadth for this track size.
    ///
    /// A flexible minimum is invalid and behaves as `auto`.
    pub const fn min_breadth(&self) -> TrackBreadth {
        match *self {
            Self::Breadth(TrackBreadth::Flex(_))
            | Self::MinMax(TrackBreadth::Flex(_), _)
            | Self::FitContent(_) => TrackBreadth::Auto,
            Self::Breadth(breadth) | Self::MinMax(breadth, _) => breadth,
        }
    }

    /// Get the maximum breadth for this track size.
    pub const fn max_breadth(&self) -> TrackBreadth {
        match *self {
            Self::Breadth(breadth) | Self::MinMax(_, breadth) => breadth,
            Self::FitContent(_) => TrackBreadth::MaxContent,
        }
    }

    /// The `fit-content()` clamp, if any.
    pub fn fit_content_limit(&self, axis_size: Option<f32>) -> Option<f32> {
        match self {
            Self::FitContent(limit) => limit.fixed(axis_size),
            _ => None,
        }
    }
}

/// Repeat pattern for track lists.
///
/// Spec: §7.2.3 Repeating Rows and Columns
#[derive(Debug, Clone, PartialEq)]
pub enum TrackRepeat {
    /// repeat(count, track-list)
    Count(usize, Vec<GridTrackSize>),
    /// repeat(auto-fill, track-list)
    AutoFill(Vec<GridTrackSize>),
    /// repeat(auto-fit, track-list)
    AutoFit(Vec<GridTrackSize>),
}

/// Origin of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackListType {
    /// Explicit tracks from grid-template-*
    Explicit,
    /// Explicit tracks produced by an `auto-fit` repetition; collapse when empty
    AutoFit,
    /// Implicit tracks from grid-auto-*
    Implicit,
}

/// A track in the grid with its sizing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTrack {
    /// Track sizing function
    pub size: GridTrackSize,
    /// Track type
    pub track_type: TrackListType,
}

impl GridTrack {
    pub const fn explicit(size: GridTrackSize) -> Self {
        Self {
            size,
            track_type: TrackListType::Explicit,
        }
    }
}

/// Auto-placement algorithm direction.
///
/// Spec: §8.5 Grid Item Placement Algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAutoFlow {
    /// Place items row by row
    #[default]
    Row,
    /// Place items column by column
    Column,
    /// Pack items densely (try to fill holes)
    RowDense,
    /// Pack items densely in columns
    ColumnDense,
}

impl GridAutoFlow {
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnDense)
    }

    pub const fn is_dense(self) -> bool {
        matches!(self, Self::RowDense | Self::ColumnDense)
    }
}

/// One side of a grid-row or grid-column placement.
///
/// Spec: §8.3 Line-based Placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLine {
    #[default]
    Auto,
    /// 1-based line number; negative numbers count back from the explicit grid's end.
    /// Line 0 is invalid and behaves as `auto`.
    Line(i32),
    /// `span n`
    Span(u16),
}

/// grid-row / grid-column / grid-area of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridPlacement {
    pub row_start: GridLine,
    pub row_end: GridLine,
    pub column_start: GridLine,
    pub column_end: GridLine,
    /// Named area; takes precedence over the line fields when it resolves.
    pub area: Option<String>,
}

impl GridPlacement {
    /// Place at 1-based `row` and `column` lines with the given spans.
    pub const fn at(row: i32, row_span: u16, column: i32, column_span: u16) -> Self {
        Self {
            row_start: GridLine::Line(row),
            row_end: GridLine::Span(row_span),
            column_start: GridLine::Line(column),
            column_end: GridLine::Span(column_span),
            area: None,
        }
    }

    /// Auto placement with the given spans.
    pub const fn spanning(row_span: u16, column_span: u16) -> Self {
        Self {
            row_start: GridLine::Span(row_span),
            row_end: GridLine::Auto,
            column_start: GridLine::Span(column_span),
            column_end: GridLine::Auto,
            area: None,
        }
    }

    pub fn named(area: &str) -> Self {
        Self {
            area: Some(area.to_owned()),
            ..Self::default()
        }
    }
}

/// Self alignment of an item inside its grid area.
///
/// Spec: §11 Alignment and Spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAlignment {
    /// Start alignment
    Start,
    /// End alignment
    End,
    /// Center alignment
    Center,
    /// Stretch to fill
    #[default]
    Stretch,
}

/// Distribution of free space between tracks (`justify-content` / `align-content`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridContentAlignment {
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    /// Grow `auto` tracks equally.
    #[default]
    Stretch,
}

/// Min-content and max-content contributions of an item along one axis (border box,
/// margins excluded).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentSizes {
    pub min_content: f32,
    pub max_content: f32,
}

impl ContentSizes {
    pub fn new(min_content: f32, max_content: f32) -> Self {
        let min_content = sanitize(min_content);
        Self {
            min_content,
            max_content: sanitize(max_content).max(min_content),
        }
    }

    /// Both contributions equal to `size`.
    pub fn fixed(size: f32) -> Self {
        Self::new(size, size)
    }
}

/// Per-axis inputs of a grid item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridItemAxis {
    pub margin_start: f32,
    pub margin_end: f32,
    /// Definite border-box size; `None` for `auto`.
    pub size: Option<f32>,
    pub min_size: f32,
    /// `f32::INFINITY` when unbounded.
    pub max_size: f32,
    pub contribution: ContentSizes,
    /// `justify-self` (inline) or `align-self` (block); `None` defers to the container.
    pub align_self: Option<GridAlignment>,
}

impl Default for GridItemAxis {
    fn default() -> Self {
        Self {
            margin_start: 0.0,
            margin_end: 0.0,
            size: None,
            min_size: 0.0,
            max_size: f32::INFINITY,
            contribution: ContentSizes::default(),
            align_self: None,
        }
    }
}

impl GridItemAxis {
    #[inline]
    pub fn margins(&self) -> f32 {
        sanitize(self.margin_start) + sanitize(self.margin_end)
    }

    /// Outer contributions used for track sizing: border box plus margins, counted once.
    pub fn outer_contribution(&self) -> ContentSizes {
        let margins = self.margins();
        match self.size {
            Some(size) => ContentSizes::fixed(self.clamp(size) + margins),
            None => ContentSizes::new(
                self.clamp(self.contribution.min_content) + margins,
                self.clamp(self.contribution.max_content) + margins,
            ),
        }
    }

    /// Clamp by min/max, min winning.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        sanitize(value).min(self.max_size).max(sanitize(self.min_size))
    }
}

/// Represents a grid item with its style and content information.
#[derive(Debug, Clone)]
pub struct GridItem<NodeId = usize> {
    /// Node identifier (generic to support different node ID types)
    pub node_id: NodeId,
    pub placement: GridPlacement,
    /// Column-axis (inline) inputs.
    pub inline: GridItemAxis,
    /// Row-axis (block) inputs. Its contribution is replaced by the measured one when
    /// the layout is run with a block measurer.
    pub block: GridItemAxis,
    /// Items with a preferred aspect ratio default to start alignment instead of stretch.
    pub has_aspect_ratio: bool,
}

impl<NodeId> GridItem<NodeId> {
    /// Create an auto-placed grid item with the given node ID.
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            placement: GridPlacement::default(),
            inline: GridItemAxis::default(),
            block: GridItemAxis::default(),
            has_aspect_ratio: false,
        }
    }

    #[must_use]
    pub fn with_placement(mut self, placement: GridPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Check if this item has explicit row placement.
    pub fn has_explicit_row_placement(&self) -> bool {
        self.placement.area.is_some()
            || matches!(self.placement.row_start, GridLine::Line(_))
            || matches!(self.placement.row_end, GridLine::Line(_))
    }

    /// Check if this item has explicit column placement.
    pub fn has_explicit_col_placement(&self) -> bool {
        self.placement.area.is_some()
            || matches!(self.placement.column_start, GridLine::Line(_))
            || matches!(self.placement.column_end, GridLine::Line(_))
    }
}

/// Replace negative and non-finite values with zero.
#[inline]
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
