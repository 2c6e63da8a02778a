use css_flexbox::{AlignItems, FlexDirection, JustifyContent};
use css_text::{MonospaceMeasurer, TextStyle};
use layouter::{Constraints, LayoutContext, MarginValue, Node, layout_root};

const TEN: MonospaceMeasurer = MonospaceMeasurer::new(10.0);

fn lay_out(mut row: Node, width: f32) -> Node {
    let _ = env_logger::builder().is_test(true).try_init();
    row.style.width = Some(width);
    layout_root(&mut row, Constraints::unbounded(), &LayoutContext::new(&TEN));
    row
}

fn xs(node: &Node) -> Vec<f32> {
    node.children.iter().map(|child| child.rect.x).collect()
}

#[test]
fn spacer_pushes_trailing_item_to_the_end() {
    let row = lay_out(
        Node::hstack(vec![Node::fixed(40.0, 10.0), Node::spacer(), Node::fixed(60.0, 10.0)]),
        300.0,
    );
    assert_eq!(xs(&row), vec![0.0, 40.0, 240.0]);
    let spacer = row.rect_at(&[1]).unwrap_or_default();
    assert!((spacer.width - 200.0).abs() < f32::EPSILON);
}

#[test]
fn shrink_is_weighted_by_basis() {
    let mut wide = Node::fixed(200.0, 10.0);
    wide.style.flex.shrink = 1.0;
    let mut narrow = Node::fixed(100.0, 10.0);
    narrow.style.flex.shrink = 1.0;
    let row = lay_out(Node::hstack(vec![wide, narrow]), 240.0);
    let widths: Vec<f32> = row.children.iter().map(|child| child.rect.width).collect();
    assert_eq!(widths, vec![160.0, 80.0]);
}

#[test]
fn auto_margin_absorbs_free_space() {
    let mut pushed = Node::fixed(50.0, 10.0);
    pushed.style.margin.left = MarginValue::Auto;
    let row = lay_out(Node::hstack(vec![Node::fixed(50.0, 10.0), pushed]), 200.0);
    assert_eq!(xs(&row), vec![0.0, 150.0]);
}

#[test]
fn center_alignment_on_both_axes() {
    let mut row = Node::hstack(vec![Node::fixed(40.0, 10.0), Node::fixed(40.0, 30.0)]);
    row.style.flex.justify_content = JustifyContent::Center;
    row.style.flex.align_items = AlignItems::Center;
    let row = lay_out(row, 180.0);
    assert_eq!(xs(&row), vec![50.0, 90.0]);
    let short = row.rect_at(&[0]).unwrap_or_default();
    assert!((short.y - 10.0).abs() < f32::EPSILON);
}

#[test]
fn row_reverse_starts_from_the_right() {
    let mut row = Node::hstack(vec![Node::fixed(40.0, 10.0), Node::fixed(60.0, 10.0)]);
    row.style.flex.direction = FlexDirection::RowReverse;
    let row = lay_out(row, 200.0);
    assert_eq!(xs(&row), vec![160.0, 100.0]);
}

#[test]
fn text_items_wrap_inside_their_flexed_width() {
    let mut label = Node::text("one two three four", TextStyle::default());
    label.style.flex.grow = 1.0;
    label.style.flex.basis = Some(0.0);
    let row = lay_out(Node::hstack(vec![Node::fixed(40.0, 10.0), label]), 100.0);
    let text = row.child(1).cloned().unwrap_or_default();
    assert!((text.rect.width - 60.0).abs() < 0.001);
    assert!(text.text_lines.len() >= 3);
    let line_height = 16.0 * 1.2;
    assert!((text.rect.height - text.text_lines.len() as f32 * line_height).abs() < 0.001);
    assert!((row.rect.height - text.rect.height).abs() < 0.001);
}

#[test]
fn baseline_alignment_lines_up_text() {
    let mut big = Node::text("Big", TextStyle {
        font_size: 32.0,
        ..TextStyle::default()
    });
    big.style.flex.align_self = Some(AlignItems::Baseline);
    let mut small = Node::text("small", TextStyle::default());
    small.style.flex.align_self = Some(AlignItems::Baseline);
    let row = lay_out(Node::hstack(vec![big, small]), 400.0);
    let baselines: Vec<f32> = row
        .children
        .iter()
        .map(|child| child.rect.y + child.baseline.unwrap_or_default())
        .collect();
    let first = baselines.first().copied().unwrap_or_default();
    let second = baselines.get(1).copied().unwrap_or_default();
    assert!((first - second).abs() < 0.001);
}
