//! Box-tree layout.
//!
//! A [`Node`] tree carries pre-resolved [`Style`]s. [`layout`] walks it once, top
//! down, handing each box to the algorithm its [`Display`] names: block flow, flexbox,
//! grid or a text paragraph. Every box ends up with a border-box [`Rect`] relative to
//! its parent's border box, and text leaves with positioned lines. Absolutely
//! positioned and fixed boxes are taken out of flow and placed once their containing
//! block is sized.
//!
//! Text measurement is injected through [`LayoutContext`], so the same tree lays out
//! identically against [`css_text::MonospaceMeasurer`] in tests and a real font
//! backend elsewhere.

pub mod block;
pub mod cache;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod flex;
pub mod grid;
pub mod intrinsic;
pub mod node;
pub mod positioned;
pub mod sizing;
pub mod snapshot;
pub mod style;
pub mod text;
pub mod values;

use anyhow::{Result, ensure};

pub use cache::{LayoutCache, Measured};
pub use config::LayoutConfig;
pub use context::LayoutContext;
pub use css_box::{BoxSizing, Constraints, Edges, Rect, Size};
pub use css_position::{Insets, Position};
pub use css_values_units::{Length, LengthUnit};
pub use dispatch::{layout, layout_in_viewport, layout_root, measure, place};
pub use intrinsic::{IntrinsicSizes, intrinsic_widths};
pub use node::Node;
pub use snapshot::LayoutSnapshot;
pub use style::{
    Display, FlexStyle, GridStyle, LengthSides, MarginValue, Margins, SpecifiedLengths, Style,
    TrackDef,
};

/// Verify that every rect in a laid out tree is finite with non-negative extents.
///
/// # Errors
/// Names the first offending box by its child-index path.
pub fn check_output_contract(root: &Node) -> Result<()> {
    check_node(root, &mut Vec::new())
}

fn check_node(node: &Node, path: &mut Vec<usize>) -> Result<()> {
    ensure!(
        node.rect.is_well_formed(),
        "box at {path:?} has malformed rect {:?}",
        node.rect
    );
    for (index, line) in node.text_lines.iter().enumerate() {
        ensure!(
            line.rect.is_well_formed(),
            "line {index} of box at {path:?} has malformed rect {:?}",
            line.rect
        );
    }
    for (index, child) in node.children.iter().enumerate() {
        path.push(index);
        check_node(child, path)?;
        path.pop();
    }
    Ok(())
}
