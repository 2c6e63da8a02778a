//! Margin strut for collapsing adjacent block-axis margins.
//!
//! Tracks the largest positive and the most negative margin seen since the last
//! in-flow box, and resolves them once the next box position is known.

/// Pending collapsible margins between two block-level siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarginStrut {
    /// Largest positive margin accumulated
    pub positive_margin: f32,
    /// Most negative margin accumulated
    pub negative_margin: f32,
}

impl MarginStrut {
    pub const fn new() -> Self {
        Self {
            positive_margin: 0.0,
            negative_margin: 0.0,
        }
    }

    /// Add one margin.
    ///
    /// Positive margins keep the maximum, negative margins keep the minimum,
    /// and the two signs are summed only at [`Self::collapse`].
    pub fn append(&mut self, margin: f32) {
        if margin > 0.0 {
            self.positive_margin = self.positive_margin.max(margin);
        } else if margin < 0.0 {
            self.negative_margin = self.negative_margin.min(margin);
        }
    }

    /// The single resolved margin.
    pub fn collapse(&self) -> f32 {
        self.positive_margin + self.negative_margin
    }

    pub fn is_empty(&self) -> bool {
        self.positive_margin == 0.0 && self.negative_margin == 0.0
    }
}
