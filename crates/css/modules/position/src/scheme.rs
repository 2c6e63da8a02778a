//! §2 Choosing a positioning scheme: the `position` property.

/// Value of the `position` property.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Static,
    /// In flow, then shifted by its insets.
    Relative,
    /// Out of flow, placed in the nearest positioned ancestor.
    Absolute,
    /// Out of flow, placed in the viewport.
    Fixed,
    /// In flow. Without a scroll offset it behaves like `relative`.
    Sticky,
}

impl Position {
    /// Establishes a containing block for absolutely positioned descendants.
    #[inline]
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Removed from normal flow; siblings lay out as if the box were absent.
    #[inline]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }

    /// Laid out in flow, then visually offset by its insets.
    #[inline]
    pub const fn is_offset_in_flow(self) -> bool {
        matches!(self, Self::Relative | Self::Sticky)
    }
}
