use css_box::Edges;
use layouter::{
    Constraints, Display, LayoutContext, MarginValue, Margins, Node, Style, layout_root,
};

fn block(height: f32, top: f32, bottom: f32) -> Node {
    Node::new(Style {
        height: Some(height),
        margin: Margins {
            top: MarginValue::Length(top),
            bottom: MarginValue::Length(bottom),
            ..Margins::default()
        },
        ..Style::default()
    })
}

fn lay_out(children: Vec<Node>) -> Node {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut root = Node::with_children(Style::default(), children);
    layout_root(&mut root, Constraints::loose_width(400.0), &LayoutContext::default());
    root
}

#[test]
fn sibling_vertical_margins_collapse() {
    let root = lay_out(vec![block(50.0, 0.0, 20.0), block(50.0, 10.0, 0.0)]);
    let second = root.rect_at(&[1]).unwrap_or_default();
    assert!((second.y - 70.0).abs() < f32::EPSILON);
    assert!((root.rect.height - 120.0).abs() < f32::EPSILON);
}

#[test]
fn two_negative_margins_take_the_most_negative() {
    let root = lay_out(vec![block(40.0, 0.0, -5.0), block(40.0, -15.0, 0.0)]);
    let second = root.rect_at(&[1]).unwrap_or_default();
    assert!((second.y - 25.0).abs() < f32::EPSILON);
}

#[test]
fn hidden_sibling_does_not_separate_margins() {
    let mut hidden = block(30.0, 100.0, 100.0);
    hidden.style.display = Display::None;
    let root = lay_out(vec![block(50.0, 0.0, 20.0), hidden, block(50.0, 10.0, 0.0)]);
    let third = root.rect_at(&[2]).unwrap_or_default();
    assert!((third.y - 70.0).abs() < f32::EPSILON);
}

#[test]
fn first_child_margin_stays_inside_parent() {
    let root = lay_out(vec![Node::with_children(
        Style::default(),
        vec![block(20.0, 15.0, 5.0)],
    )]);
    let parent = root.rect_at(&[0]).unwrap_or_default();
    let child = root.rect_at(&[0, 0]).unwrap_or_default();
    assert!((child.y - 15.0).abs() < f32::EPSILON);
    assert!((parent.height - 40.0).abs() < f32::EPSILON);
    assert!(parent.y.abs() < f32::EPSILON);
}

#[test]
fn padding_offsets_children_and_margins_shrink_width() {
    let mut child = block(10.0, 0.0, 0.0);
    child.style.margin.left = MarginValue::Length(12.0);
    child.style.margin.right = MarginValue::Length(8.0);
    let root = lay_out(vec![
        Node::with_children(
            Style {
                padding: Edges::uniform(10.0),
                ..Style::default()
            },
            vec![child],
        ),
    ]);
    let inner = root.rect_at(&[0, 0]).unwrap_or_default();
    assert!((inner.x - 22.0).abs() < f32::EPSILON);
    assert!((inner.y - 10.0).abs() < f32::EPSILON);
    assert!((inner.width - 360.0).abs() < f32::EPSILON);
}
