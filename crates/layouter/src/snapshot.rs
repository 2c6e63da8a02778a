//! A serializable, printable view of a laid out tree, used by tests and debugging.

use core::fmt;

use css_box::Rect;
use serde::Serialize;

use crate::node::Node;
use crate::style::Display;

/// Rects of one box and its subtree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub kind: String,
    pub rect: Rect,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<Rect>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

const fn kind_name(display: Display) -> &'static str {
    match display {
        Display::Block => "block",
        Display::Flex => "flex",
        Display::Grid => "grid",
        Display::Text => "text",
        Display::None => "none",
    }
}

impl From<&Node> for LayoutSnapshot {
    fn from(node: &Node) -> Self {
        Self {
            kind: kind_name(node.style.display).to_owned(),
            rect: node.rect,
            lines: node.text_lines.iter().map(|line| line.rect).collect(),
            children: node.children.iter().map(Self::from).collect(),
        }
    }
}

fn write_indent(formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        formatter.write_str("  ")?;
    }
    Ok(())
}

fn write_rect(formatter: &mut fmt::Formatter<'_>, rect: &Rect) -> fmt::Result {
    write!(
        formatter,
        "({:.1}, {:.1}) {:.1}x{:.1}",
        rect.x, rect.y, rect.width, rect.height
    )
}

impl LayoutSnapshot {
    fn write_tree(&self, formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write_indent(formatter, depth)?;
        write!(formatter, "{} ", self.kind)?;
        write_rect(formatter, &self.rect)?;
        writeln!(formatter)?;
        for line in &self.lines {
            write_indent(formatter, depth + 1)?;
            formatter.write_str("line ")?;
            write_rect(formatter, line)?;
            writeln!(formatter)?;
        }
        for child in &self.children {
            child.write_tree(formatter, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for LayoutSnapshot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "LAYOUT")?;
        self.write_tree(formatter, 0)
    }
}
