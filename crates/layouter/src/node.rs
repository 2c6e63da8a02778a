//! The box tree.

use css_box::{Edges, Rect};
use css_flexbox::FlexDirection;
use css_grid::{GridAlignment, GridLine};
use css_position::{Insets, Position};
use css_text::{TextLine, TextStyle};

use crate::cache::LayoutCache;
use crate::style::{Display, FlexStyle, GridStyle, Margins, SpecifiedLengths, Style};

/// One box. The caller owns the tree; layout only writes the output fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub style: Style,
    pub children: Vec<Node>,
    /// Raw text of a text leaf.
    pub text: Option<String>,
    /// Border box relative to the parent's border-box origin.
    pub rect: Rect,
    /// Lines of a text leaf, rects relative to this node's border box.
    pub text_lines: Vec<TextLine>,
    /// First baseline, measured from this node's top border edge.
    pub baseline: Option<f32>,
    /// Results memoized during the current layout pass.
    pub cache: LayoutCache,
}

impl Node {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_children(style: Style, children: Vec<Self>) -> Self {
        Self {
            style,
            children,
            ..Self::default()
        }
    }

    /// A text leaf.
    pub fn text(text: &str, text_style: TextStyle) -> Self {
        Self {
            style: Style {
                display: Display::Text,
                text: text_style,
                ..Style::default()
            },
            text: Some(text.to_owned()),
            ..Self::default()
        }
    }

    /// A block with a fixed border-box size.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new(Style {
            width: Some(width),
            height: Some(height),
            ..Style::default()
        })
    }

    /// A flex row of `children`.
    pub fn hstack(children: Vec<Self>) -> Self {
        Self::with_children(flex_style(FlexDirection::Row), children)
    }

    /// A flex column of `children`.
    pub fn vstack(children: Vec<Self>) -> Self {
        Self::with_children(flex_style(FlexDirection::Column), children)
    }

    /// An empty box that absorbs free space in a flex container.
    pub fn spacer() -> Self {
        Self::new(Style {
            flex: FlexStyle {
                grow: 1.0,
                ..FlexStyle::default()
            },
            ..Style::default()
        })
    }

    /// Children drawn on top of each other in the top-left corner.
    ///
    /// The stack is a single-cell grid, so it grows to its largest child. It is
    /// positioned, making it the containing block of absolutely positioned children.
    pub fn zstack(children: Vec<Self>) -> Self {
        let children = children
            .into_iter()
            .map(|mut child| {
                child.style.grid.row_start = GridLine::Line(1);
                child.style.grid.column_start = GridLine::Line(1);
                child
            })
            .collect();
        Self::with_children(
            Style {
                display: Display::Grid,
                position: Position::Relative,
                grid: GridStyle {
                    justify_items: GridAlignment::Start,
                    align_items: GridAlignment::Start,
                    ..GridStyle::default()
                },
                ..Style::default()
            },
            children,
        )
    }

    #[must_use]
    pub fn with_position(mut self, position: Position, inset: Insets) -> Self {
        self.style.position = position;
        self.style.inset = inset;
        self
    }

    #[must_use]
    pub fn with_lengths(mut self, lengths: SpecifiedLengths) -> Self {
        self.style.lengths = lengths;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.style.margin = Margins::uniform(margin);
        self
    }

    /// The `index`th child.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    /// The rect of the child at `path`, walking down from this node.
    pub fn rect_at(&self, path: &[usize]) -> Option<Rect> {
        let mut current = self;
        for index in path {
            current = current.children.get(*index)?;
        }
        Some(current.rect)
    }

    /// Whether the box takes part in layout.
    #[inline]
    pub fn is_displayed(&self) -> bool {
        self.style.display != Display::None
    }

    /// Whether the box takes part in its parent's layout algorithm.
    #[inline]
    pub fn is_in_flow(&self) -> bool {
        self.is_displayed() && !self.style.position.is_out_of_flow()
    }

    /// Zero this node's output and every descendant's.
    pub fn clear_layout(&mut self) {
        self.rect = Rect::ZERO;
        self.text_lines.clear();
        self.baseline = None;
        self.cache.forget_layout();
        for child in &mut self.children {
            child.clear_layout();
        }
    }

    /// Drop memoized results in this subtree, e.g. after editing styles.
    pub fn reset_cache(&mut self) {
        self.cache.clear();
        for child in &mut self.children {
            child.reset_cache();
        }
    }
}

fn flex_style(direction: FlexDirection) -> Style {
    Style {
        display: Display::Flex,
        flex: FlexStyle {
            direction,
            ..FlexStyle::default()
        },
        ..Style::default()
    }
}
