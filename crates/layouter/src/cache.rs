//! Per-pass memo of layout results.
//!
//! Flex and grid containers size a child several times (basis, hypothetical size,
//! final size). Each box keeps what it computed so repeated requests within one pass
//! do not walk its subtree again. Entries are dropped when a top-level pass starts.

use css_box::{Constraints, Size};

use crate::intrinsic::IntrinsicSizes;

/// Measurement slots kept per box.
const MEASURE_SLOTS: usize = 4;

/// Outcome of laying a box out under some constraints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measured {
    pub constraints: Constraints,
    pub size: Size,
    /// First baseline from the top border edge.
    pub baseline: Option<f32>,
}

/// Results one box produced earlier in the current pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutCache {
    /// The layout whose output the subtree currently holds.
    laid_out: Option<Measured>,
    measured: Vec<Measured>,
    intrinsic: Option<IntrinsicSizes>,
}

impl LayoutCache {
    /// The current subtree output, when it was produced under `constraints`.
    pub fn layout_for(&self, constraints: Constraints) -> Option<Measured> {
        self.laid_out.filter(|entry| entry.constraints == constraints)
    }

    /// Any earlier result for `constraints`, whether or not the subtree still holds it.
    pub fn measured_for(&self, constraints: Constraints) -> Option<Measured> {
        self.layout_for(constraints).or_else(|| {
            self.measured
                .iter()
                .find(|entry| entry.constraints == constraints)
                .copied()
        })
    }

    /// Remember a layout that just ran; its output is now in the subtree.
    pub fn record(&mut self, entry: Measured) {
        self.laid_out = Some(entry);
        self.measured.retain(|slot| slot.constraints != entry.constraints);
        if self.measured.len() == MEASURE_SLOTS {
            self.measured.remove(0);
        }
        self.measured.push(entry);
    }

    /// The subtree output no longer matches any recorded layout.
    pub fn forget_layout(&mut self) {
        self.laid_out = None;
    }

    pub const fn intrinsic(&self) -> Option<IntrinsicSizes> {
        self.intrinsic
    }

    pub fn set_intrinsic(&mut self, sizes: IntrinsicSizes) {
        self.intrinsic = Some(sizes);
    }

    pub fn clear(&mut self) {
        self.laid_out = None;
        self.measured.clear();
        self.intrinsic = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(width: f32) -> Measured {
        Measured {
            constraints: Constraints::loose_width(width),
            size: Size::new(width / 2.0, 10.0),
            baseline: None,
        }
    }

    #[test]
    /// # Panics
    /// Panics if a forgotten layout still counts as the subtree output.
    fn layout_and_measure_lookups() {
        let mut cache = LayoutCache::default();
        cache.record(entry(100.0));
        cache.record(entry(200.0));
        assert_eq!(cache.layout_for(Constraints::loose_width(200.0)), Some(entry(200.0)));
        assert_eq!(cache.layout_for(Constraints::loose_width(100.0)), None);
        assert_eq!(cache.measured_for(Constraints::loose_width(100.0)), Some(entry(100.0)));

        cache.forget_layout();
        assert_eq!(cache.layout_for(Constraints::loose_width(200.0)), None);
        assert_eq!(cache.measured_for(Constraints::loose_width(200.0)), Some(entry(200.0)));
    }

    #[test]
    /// # Panics
    /// Panics if the oldest slot is not evicted first.
    fn slots_are_bounded() {
        let mut cache = LayoutCache::default();
        for step in 1..=5u8 {
            cache.record(entry(f32::from(step) * 10.0));
        }
        assert_eq!(cache.measured.len(), MEASURE_SLOTS);
        assert_eq!(cache.measured_for(Constraints::loose_width(10.0)), None);
        assert!(cache.measured_for(Constraints::loose_width(20.0)).is_some());
    }
}
