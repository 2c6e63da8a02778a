//! Flex Containers — container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// Main axis follows the inline axis.
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    /// Multi-line container.
    #[inline]
    pub const fn is_wrapping(self) -> bool {
        !matches!(self, Self::Nowrap)
    }
}

/// Spec: <https://www.w3.org/TR/css-align-3/#propdef-justify-content>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// `align-items` / `align-self` values.
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    #[default]
    Stretch,
    Start,
    End,
    Center,
    /// First-baseline alignment. Items without a baseline synthesize one at their
    /// cross-end border edge.
    Baseline,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignContent {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    #[default]
    Stretch,
}
