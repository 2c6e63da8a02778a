//! Pre-resolved style of one box.
//!
//! Values arrive already cascaded and computed. `None` stands for `auto` wherever a
//! length may be auto; there are no sentinel lengths. Unit-tagged lengths in
//! [`SpecifiedLengths`] are the one exception: they are turned into the px fields when
//! a pass starts.

use css_box::{BoxSizing, Edges, content_box_size, sanitize_length};
use css_flexbox::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};
use css_grid::{
    GridAlignment, GridAutoFlow, GridContentAlignment, GridLine, GridTrackSize, TemplateAreas,
    TrackRepeat,
};
use css_position::{Insets, Position};
use css_text::TextStyle;
use css_values_units::{Length, LengthBasis, compute_length_px};
use css_writing_modes::{Direction, WritingMode};

/// Which layout algorithm owns a box.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Display {
    #[default]
    Block,
    Flex,
    Grid,
    /// Text leaf.
    Text,
    /// Not rendered; the box and its subtree get zero rects.
    None,
}

/// One margin side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarginValue {
    Length(f32),
    Auto,
}

impl Default for MarginValue {
    fn default() -> Self {
        Self::Length(0.0)
    }
}

impl MarginValue {
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The length, with `auto` and non-finite values as zero. Negative margins stay.
    #[inline]
    pub fn or_zero(self) -> f32 {
        match self {
            Self::Length(value) if value.is_finite() => value,
            Self::Length(_) | Self::Auto => 0.0,
        }
    }
}

impl From<f32> for MarginValue {
    fn from(value: f32) -> Self {
        Self::Length(value)
    }
}

/// Margin quadruple.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Margins {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl Margins {
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: MarginValue::Length(value),
            right: MarginValue::Length(value),
            bottom: MarginValue::Length(value),
            left: MarginValue::Length(value),
        }
    }

    /// `margin: 0 auto`.
    pub const fn auto_inline() -> Self {
        Self {
            top: MarginValue::Length(0.0),
            right: MarginValue::Auto,
            bottom: MarginValue::Length(0.0),
            left: MarginValue::Auto,
        }
    }

    /// Resolved lengths with every `auto` side as zero.
    pub fn fixed(&self) -> Edges {
        Edges::new(
            self.top.or_zero(),
            self.right.or_zero(),
            self.bottom.or_zero(),
            self.left.or_zero(),
        )
    }
}

/// Flex container and flex item properties.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexStyle {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub align_self: Option<AlignItems>,
    pub grow: f32,
    pub shrink: f32,
    /// `None` is `flex-basis: auto`.
    pub basis: Option<f32>,
    pub order: i32,
    pub row_gap: f32,
    pub column_gap: f32,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            wrap: FlexWrap::Nowrap,
            justify_content: JustifyContent::Start,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            align_self: None,
            grow: 0.0,
            shrink: 1.0,
            basis: None,
            order: 0,
            row_gap: 0.0,
            column_gap: 0.0,
        }
    }
}

/// One entry of a track list.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackDef {
    Track(GridTrackSize),
    Repeat(TrackRepeat),
}

impl From<GridTrackSize> for TrackDef {
    fn from(size: GridTrackSize) -> Self {
        Self::Track(size)
    }
}

/// Grid container and grid item properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridStyle {
    pub template_rows: Vec<TrackDef>,
    pub template_columns: Vec<TrackDef>,
    /// `grid-auto-rows`, cycled; empty means `auto`.
    pub auto_rows: Vec<GridTrackSize>,
    pub auto_columns: Vec<GridTrackSize>,
    pub auto_flow: GridAutoFlow,
    pub row_gap: f32,
    pub column_gap: f32,
    pub template_areas: TemplateAreas,
    pub justify_items: GridAlignment,
    pub align_items: GridAlignment,
    pub justify_content: GridContentAlignment,
    pub align_content: GridContentAlignment,
    // Item side.
    pub row_start: GridLine,
    pub row_end: GridLine,
    pub column_start: GridLine,
    pub column_end: GridLine,
    pub area: Option<String>,
    pub justify_self: Option<GridAlignment>,
    pub align_self: Option<GridAlignment>,
}

/// Layout-relevant properties of one box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub display: Display,
    pub box_sizing: BoxSizing,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    /// Width divided by height.
    pub aspect_ratio: Option<f32>,
    pub padding: Edges,
    pub border: Edges,
    pub margin: Margins,
    pub writing_mode: WritingMode,
    pub direction: Direction,
    pub flex: FlexStyle,
    pub grid: GridStyle,
    pub text: TextStyle,
    pub position: Position,
    pub inset: Insets,
    pub lengths: SpecifiedLengths,
}

/// Per-side unit-tagged lengths. An unset side keeps its px value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LengthSides {
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
}

impl LengthSides {
    pub const fn uniform(length: Length) -> Self {
        Self {
            top: Some(length),
            right: Some(length),
            bottom: Some(length),
            left: Some(length),
        }
    }

    /// Sides in top, right, bottom, left order.
    const fn to_array(self) -> [Option<Length>; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Sizes given in units other than px.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpecifiedLengths {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_width: Option<Length>,
    pub min_height: Option<Length>,
    pub max_width: Option<Length>,
    pub max_height: Option<Length>,
    pub padding: Option<LengthSides>,
    pub margin: Option<LengthSides>,
    pub inset: Option<LengthSides>,
}

impl SpecifiedLengths {
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Box-sizing aware size limits along one physical axis, in content-box px.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisLimits {
    pub specified: Option<f32>,
    pub min: f32,
    pub max: Option<f32>,
}

impl AxisLimits {
    /// Clamp a content size; the minimum wins.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        let capped = self.max.map_or(value, |max| value.min(max));
        capped.max(self.min).max(0.0)
    }

    /// Specified size, clamped, or `fallback` clamped.
    #[inline]
    pub fn resolve(&self, fallback: f32) -> f32 {
        self.clamp(self.specified.unwrap_or(fallback))
    }
}

impl Style {
    /// Overwrite px fields with the unit-tagged lengths resolved against `basis`.
    ///
    /// Returns how many lengths could not be resolved; those fields keep their value.
    pub fn apply_lengths(&mut self, basis: &LengthBasis) -> usize {
        let lengths = self.lengths;
        let mut unresolved = 0usize;
        let mut px = |length: Option<Length>| {
            let length = length?;
            let resolved = compute_length_px(length, basis);
            if resolved.is_none() {
                unresolved += 1;
            }
            resolved
        };
        if let Some(width) = px(lengths.width) {
            self.width = Some(width);
        }
        if let Some(height) = px(lengths.height) {
            self.height = Some(height);
        }
        if let Some(min_width) = px(lengths.min_width) {
            self.min_width = min_width;
        }
        if let Some(min_height) = px(lengths.min_height) {
            self.min_height = min_height;
        }
        if let Some(max_width) = px(lengths.max_width) {
            self.max_width = Some(max_width);
        }
        if let Some(max_height) = px(lengths.max_height) {
            self.max_height = Some(max_height);
        }
        if let Some(sides) = lengths.padding {
            let [top, right, bottom, left] = sides.to_array().map(&mut px);
            let padding = self.padding;
            self.padding = Edges::new(
                top.unwrap_or(padding.top),
                right.unwrap_or(padding.right),
                bottom.unwrap_or(padding.bottom),
                left.unwrap_or(padding.left),
            );
        }
        if let Some(sides) = lengths.margin {
            let [top, right, bottom, left] = sides.to_array().map(&mut px);
            let margin = &mut self.margin;
            margin.top = top.map_or(margin.top, MarginValue::Length);
            margin.right = right.map_or(margin.right, MarginValue::Length);
            margin.bottom = bottom.map_or(margin.bottom, MarginValue::Length);
            margin.left = left.map_or(margin.left, MarginValue::Length);
        }
        if let Some(sides) = lengths.inset {
            let [top, right, bottom, left] = sides.to_array().map(&mut px);
            let inset = &mut self.inset;
            inset.top = top.or(inset.top);
            inset.right = right.or(inset.right);
            inset.bottom = bottom.or(inset.bottom);
            inset.left = left.or(inset.left);
        }
        unresolved
    }

    /// Padding plus border with negative sides dropped.
    pub fn padding_border(&self) -> Edges {
        self.padding.non_negative() + self.border.non_negative()
    }

    /// Width limits converted to content-box px.
    pub fn width_limits(&self) -> AxisLimits {
        let extra = self.padding_border().horizontal();
        let specified = self
            .width
            .or_else(|| self.ratio_width())
            .map(|width| content_box_size(width, self.box_sizing, extra));
        self.limits(specified, self.min_width, self.max_width, extra)
    }

    /// Height limits converted to content-box px.
    pub fn height_limits(&self) -> AxisLimits {
        let extra = self.padding_border().vertical();
        let specified = self
            .height
            .or_else(|| self.ratio_height())
            .map(|height| content_box_size(height, self.box_sizing, extra));
        self.limits(specified, self.min_height, self.max_height, extra)
    }

    fn limits(&self, specified: Option<f32>, min: f32, max: Option<f32>, extra: f32) -> AxisLimits {
        AxisLimits {
            specified,
            min: content_box_size(min, self.box_sizing, extra),
            max: max.map(|max| content_box_size(max, self.box_sizing, extra)),
        }
    }

    /// Usable aspect ratio.
    #[inline]
    pub fn ratio(&self) -> Option<f32> {
        self.aspect_ratio
            .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
    }

    fn ratio_width(&self) -> Option<f32> {
        Some(self.height? * self.ratio()?)
    }

    fn ratio_height(&self) -> Option<f32> {
        Some(self.width? / self.ratio()?)
    }

    /// Height derived from a used content width through the aspect ratio, in the same
    /// box the ratio applies to.
    pub fn height_for_width(&self, content_width: f32) -> Option<f32> {
        let ratio = self.ratio()?;
        let pb = self.padding_border();
        Some(match self.box_sizing {
            BoxSizing::ContentBox => content_width / ratio,
            BoxSizing::BorderBox => {
                ((content_width + pb.horizontal()) / ratio - pb.vertical()).max(0.0)
            }
        })
    }

    /// Specified border-box width.
    pub fn border_box_width(&self) -> Option<f32> {
        let limits = self.width_limits();
        limits
            .specified
            .map(|width| limits.clamp(width) + self.padding_border().horizontal())
    }

    /// Specified border-box height.
    pub fn border_box_height(&self) -> Option<f32> {
        let limits = self.height_limits();
        limits
            .specified
            .map(|height| limits.clamp(height) + self.padding_border().vertical())
    }

    /// Border-box min and max width.
    pub fn border_box_width_range(&self) -> (f32, f32) {
        let limits = self.width_limits();
        let extra = self.padding_border().horizontal();
        (
            limits.min + extra,
            limits.max.map_or(f32::INFINITY, |max| max + extra),
        )
    }

    /// Border-box min and max height.
    pub fn border_box_height_range(&self) -> (f32, f32) {
        let limits = self.height_limits();
        let extra = self.padding_border().vertical();
        (
            limits.min + extra,
            limits.max.map_or(f32::INFINITY, |max| max + extra),
        )
    }

    /// Gap between grid columns, or flex items in a row.
    #[inline]
    pub fn column_gap(&self) -> f32 {
        match self.display {
            Display::Grid => sanitize_length(self.grid.column_gap),
            _ => sanitize_length(self.flex.column_gap),
        }
    }

    #[inline]
    pub fn row_gap(&self) -> f32 {
        match self.display {
            Display::Grid => sanitize_length(self.grid.row_gap),
            _ => sanitize_length(self.flex.row_gap),
        }
    }
}
