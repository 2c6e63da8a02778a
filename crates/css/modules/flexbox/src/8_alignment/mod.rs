//! Alignment: auto margins, justify-content, align-items/self and align-content
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

pub mod auto_margins;
pub mod cross_axis;

use crate::chapter5::{AlignContent, JustifyContent};

/// Distribution of free space: offset before the first box and extra space between boxes.
pub type Distribution = (f32, f32);

/// `justify-content` start offset and between-spacing (excluding CSS gap).
///
/// Negative free space is treated as zero, so overflowing lines pack at main-start.
pub fn justify_params(justify: JustifyContent, free_space: f32, item_count: usize) -> Distribution {
    let remaining = free_space.max(0.0);
    match (justify, item_count) {
        (JustifyContent::End, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        _ => (0.0, 0.0),
    }
}

/// `align-content` start offset and between-spacing for lines (excluding CSS gap).
///
/// `Stretch` packs at the start here; line growth happens before packing.
pub fn align_content_params(align: AlignContent, free_space: f32, line_count: usize) -> Distribution {
    let remaining = free_space.max(0.0);
    match (align, line_count) {
        (AlignContent::End, _) => (remaining, 0.0),
        (AlignContent::Center, _) => (remaining * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 => (0.0, remaining / (count as f32 - 1.0)),
        (AlignContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        (AlignContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        _ => (0.0, 0.0),
    }
}

/// Total gap space between `count` boxes.
#[inline]
pub fn gaps_total(count: usize, gap: f32) -> f32 {
    count.saturating_sub(1) as f32 * gap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if justify distributions do not match the keyword definitions.
    fn justify_distributions() {
        assert_eq!(justify_params(JustifyContent::End, 60.0, 3), (60.0, 0.0));
        assert_eq!(justify_params(JustifyContent::Center, 60.0, 3), (30.0, 0.0));
        assert_eq!(justify_params(JustifyContent::SpaceBetween, 60.0, 3), (0.0, 30.0));
        assert_eq!(justify_params(JustifyContent::SpaceAround, 60.0, 3), (10.0, 20.0));
        assert_eq!(justify_params(JustifyContent::SpaceEvenly, 60.0, 3), (15.0, 15.0));
        // A lone item with space-between packs at start.
        assert_eq!(justify_params(JustifyContent::SpaceBetween, 60.0, 1), (0.0, 0.0));
        assert_eq!(justify_params(JustifyContent::End, -10.0, 2), (0.0, 0.0));
    }

    #[test]
    /// # Panics
    /// Panics if align-content distributions do not match the keyword definitions.
    fn align_content_distributions() {
        assert_eq!(align_content_params(AlignContent::SpaceAround, 40.0, 2), (10.0, 20.0));
        assert_eq!(align_content_params(AlignContent::Stretch, 40.0, 2), (0.0, 0.0));
        assert_eq!(align_content_params(AlignContent::Center, 40.0, 2), (20.0, 0.0));
    }
}
