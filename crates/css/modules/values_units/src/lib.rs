//! CSS Values and Units Module Level 4 — unit-tagged lengths.
//! Spec: <https://www.w3.org/TR/css-values-4/>

#![forbid(unsafe_code)]

pub mod chapter_6_dimensions;

pub use chapter_6_dimensions::{
    Length, LengthBasis, LengthUnit, Viewport, compute_length_px, parse_length,
};

/// Parse error for the parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// The dimension carried a unit this crate does not know.
    UnknownUnit,
}
