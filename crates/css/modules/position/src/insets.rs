//! §3 Box insets: relative offsets and absolute placement along one axis.
//! Spec: <https://www.w3.org/TR/css-position-3/#insets>

use css_box::Point;
use log::trace;

/// Resolved `top`/`right`/`bottom`/`left` in px. `None` is `auto`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Insets {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl Insets {
    pub const AUTO: Self = Self {
        top: None,
        right: None,
        bottom: None,
        left: None,
    };

    /// The same inset on every side.
    pub const fn all(value: f32) -> Self {
        Self {
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
            left: Some(value),
        }
    }

    /// Left and right.
    #[inline]
    pub fn horizontal(&self) -> AxisInsets {
        AxisInsets::new(self.left, self.right)
    }

    /// Top and bottom.
    #[inline]
    pub fn vertical(&self) -> AxisInsets {
        AxisInsets::new(self.top, self.bottom)
    }

    /// Visual shift of a relatively positioned box from its in-flow position.
    ///
    /// Spec: §3.4. When both sides of an axis are set, `left` and `top` win.
    pub fn relative_offset(&self) -> Point {
        Point::new(
            self.horizontal().relative_shift(),
            self.vertical().relative_shift(),
        )
    }
}

/// The two insets of one physical axis: `start` is left or top.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisInsets {
    pub start: Option<f32>,
    pub end: Option<f32>,
}

impl AxisInsets {
    /// Non-finite insets are treated as `auto`.
    pub fn new(start: Option<f32>, end: Option<f32>) -> Self {
        Self {
            start: start.filter(|value| value.is_finite()),
            end: end.filter(|value| value.is_finite()),
        }
    }

    #[inline]
    pub fn relative_shift(self) -> f32 {
        self.start
            .or_else(|| self.end.map(|end| -end))
            .unwrap_or(0.0)
    }

    /// Border-box size of an `auto`-sized box pinned on both sides.
    ///
    /// Spec: §5.3. With both insets set the box fills the space between them.
    pub fn stretch_size(self, margins: f32, containing: f32) -> Option<f32> {
        Some((containing - self.start? - self.end? - margins).max(0.0))
    }

    /// Room left for a shrink-to-fit box after the insets and margins.
    pub fn available_size(self, margins: f32, containing: f32) -> f32 {
        (containing - self.start.unwrap_or(0.0) - self.end.unwrap_or(0.0) - margins).max(0.0)
    }

    /// Offset of the border box from the containing block's start edge.
    ///
    /// A set start inset wins; a lone end inset anchors the box to the far edge; with
    /// both `auto` the box sits at the start edge.
    pub fn offset(self, size: f32, margin_start: f32, margin_end: f32, containing: f32) -> f32 {
        match (self.start, self.end) {
            (Some(start), end) => {
                if let Some(end) = end {
                    let slack = containing - start - end - size - margin_start - margin_end;
                    if slack.abs() > 0.01 {
                        trace!(
                            target: "css::position",
                            "[INSET] over-constrained by {slack:.2}, end inset ignored"
                        );
                    }
                }
                start + margin_start
            }
            (None, Some(end)) => containing - end - margin_end - size,
            (None, None) => margin_start,
        }
    }
}
