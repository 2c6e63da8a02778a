//! CSS Box Model Module Level 3 — Box geometry, edges, sizing constraints.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Every layout algorithm in the workspace speaks in the vocabulary defined here:
//! a parent hands a child a [`Constraints`] range, the child answers with a [`Size`]
//! and records its own [`Rect`] relative to the parent's border-box origin.

mod constraints;
mod geometry;
mod margin_strut;
mod sizing;

pub use constraints::Constraints;
pub use geometry::{Edges, Point, Rect, Size};
pub use margin_strut::MarginStrut;
pub use sizing::{BoxSizing, clamp_between, content_box_size, sanitize_length};
