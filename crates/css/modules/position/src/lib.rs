//! CSS Positioned Layout Module Level 3 — relative, absolute, fixed, sticky.
//! Spec: <https://www.w3.org/TR/css-position-3/>
//!
//! Pure geometry: callers size the box and hand in its containing block; this crate
//! answers where the box goes and how large the insets let it be.

mod insets;
mod scheme;

pub use insets::{AxisInsets, Insets};
pub use scheme::Position;
