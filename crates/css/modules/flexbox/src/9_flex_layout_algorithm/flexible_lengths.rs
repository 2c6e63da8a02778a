//! Resolving flexible lengths.
//!
//! Items that violate their min/max constraints are frozen at the clamped size and the
//! remaining free space is redistributed among the rest until every item is frozen.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use crate::chapter6::{FlexChild, clamp_size};

/// Whether the line grows into positive free space or shrinks to absorb negative space.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlexMode {
    Grow,
    Shrink,
}

impl FlexMode {
    #[inline]
    fn factor(self, child: &FlexChild) -> f32 {
        let raw = match self {
            Self::Grow => child.flex_grow,
            Self::Shrink => child.flex_shrink,
        };
        if raw.is_finite() { raw.max(0.0) } else { 0.0 }
    }
}

#[inline]
fn base_size(child: &FlexChild) -> f32 {
    if child.flex_basis.is_finite() {
        child.flex_basis.max(0.0)
    } else {
        0.0
    }
}

/// Resolve the main sizes of one line's items so they fill `inner_space`, the line's
/// main size minus fixed margins and gaps. An infinite `inner_space` disables flexing.
pub fn resolve_flexible_lengths(items: &[FlexChild], inner_space: f32) -> Vec<f32> {
    let hypothetical: Vec<f32> = items.iter().map(FlexChild::hypothetical_main).collect();
    if !inner_space.is_finite() {
        return hypothetical;
    }
    let sum_hypothetical: f32 = hypothetical.iter().sum();
    let mode = if sum_hypothetical < inner_space {
        FlexMode::Grow
    } else {
        FlexMode::Shrink
    };
    let bases: Vec<f32> = items.iter().map(base_size).collect();
    let mut sizes = hypothetical.clone();
    let mut frozen: Vec<bool> = items
        .iter()
        .zip(bases.iter().zip(hypothetical.iter()))
        .map(|(child, (&base, &hypothetical_size))| {
            mode.factor(child) <= 0.0
                || (mode == FlexMode::Grow && base > hypothetical_size)
                || (mode == FlexMode::Shrink && base < hypothetical_size)
        })
        .collect();
    let occupied = |sizes: &[f32], frozen: &[bool]| -> f32 {
        frozen
            .iter()
            .zip(sizes.iter().zip(bases.iter()))
            .map(|(&is_frozen, (&size, &base))| if is_frozen { size } else { base })
            .sum()
    };
    let initial_free = inner_space - occupied(&sizes, &frozen);
    for _ in 0..=items.len() {
        if frozen.iter().all(|is_frozen| *is_frozen) {
            break;
        }
        let mut remaining = inner_space - occupied(&sizes, &frozen);
        let sum_factors: f32 = items
            .iter()
            .zip(frozen.iter())
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(child, _)| mode.factor(child))
            .sum();
        if sum_factors < 1.0 {
            let scaled = initial_free * sum_factors;
            if scaled.abs() < remaining.abs() {
                remaining = scaled;
            }
        }
        let sum_scaled_shrink: f32 = items
            .iter()
            .zip(frozen.iter().zip(bases.iter()))
            .filter(|(_, (is_frozen, _))| !**is_frozen)
            .map(|(child, (_, &base))| mode.factor(child) * base)
            .sum();
        let mut total_violation = 0.0f32;
        let mut targets: Vec<(usize, f32, f32)> = Vec::new();
        for (index, child) in items.iter().enumerate() {
            if frozen.get(index).copied().unwrap_or(true) {
                continue;
            }
            let base = bases.get(index).copied().unwrap_or(0.0);
            let target = match mode {
                FlexMode::Grow => base + remaining * mode.factor(child) / sum_factors,
                FlexMode::Shrink if sum_scaled_shrink > 0.0 => {
                    base + remaining * mode.factor(child) * base / sum_scaled_shrink
                }
                FlexMode::Shrink => base,
            };
            let clamped = clamp_size(target, child.min_main, child.max_main);
            total_violation += clamped - target;
            targets.push((index, target, clamped));
        }
        let violation_epsilon = 1e-4;
        for (index, target, clamped) in targets {
            let freeze = if total_violation.abs() < violation_epsilon {
                true
            } else if total_violation > 0.0 {
                clamped > target
            } else {
                clamped < target
            };
            if let Some(size) = sizes.get_mut(index) {
                *size = clamped;
            }
            if freeze && let Some(flag) = frozen.get_mut(index) {
                *flag = true;
            }
        }
    }
    sizes
}
