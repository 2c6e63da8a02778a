use css_grid::{
    GridAlignment, GridAutoFlow, GridLine, GridTrackSize, TemplateAreas, TrackBreadth, TrackRepeat,
};
use css_text::{MonospaceMeasurer, TextStyle};
use layouter::{
    Constraints, Display, GridStyle, LayoutContext, Margins, Node, Style, TrackDef, layout_root,
};

const TEN: MonospaceMeasurer = MonospaceMeasurer::new(10.0);

fn px(sizes: &[f32]) -> Vec<TrackDef> {
    sizes
        .iter()
        .map(|size| TrackDef::Track(GridTrackSize::px(*size)))
        .collect()
}

fn grid(style: GridStyle, children: Vec<Node>) -> Node {
    Node::with_children(
        Style {
            display: Display::Grid,
            grid: style,
            ..Style::default()
        },
        children,
    )
}

fn lay_out(mut container: Node, constraints: Constraints) -> Node {
    let _ = env_logger::builder().is_test(true).try_init();
    layout_root(&mut container, constraints, &LayoutContext::new(&TEN));
    container
}

#[test]
fn items_fill_cells_in_row_order() {
    let container = lay_out(
        grid(
            GridStyle {
                template_columns: px(&[150.0, 150.0]),
                template_rows: px(&[100.0, 100.0]),
                row_gap: 10.0,
                column_gap: 10.0,
                ..GridStyle::default()
            },
            (0..4).map(|_| Node::default()).collect(),
        ),
        Constraints::unbounded(),
    );
    let origins: Vec<(f32, f32)> = container
        .children
        .iter()
        .map(|child| (child.rect.x, child.rect.y))
        .collect();
    assert_eq!(origins, vec![(0.0, 0.0), (160.0, 0.0), (0.0, 110.0), (160.0, 110.0)]);
    assert!((container.rect.width - 310.0).abs() < f32::EPSILON);
    assert!((container.rect.height - 210.0).abs() < f32::EPSILON);
}

#[test]
fn named_areas_place_items() {
    let areas = TemplateAreas::parse(&["head head", "side main"]).unwrap_or_default();
    let named = |area: &str| {
        let mut item = Node::default();
        item.style.grid.area = Some(area.to_owned());
        item
    };
    let container = lay_out(
        grid(
            GridStyle {
                template_columns: px(&[80.0, 200.0]),
                template_rows: px(&[40.0, 120.0]),
                template_areas: areas,
                ..GridStyle::default()
            },
            vec![named("main"), named("head"), named("side")],
        ),
        Constraints::unbounded(),
    );
    let main = container.rect_at(&[0]).unwrap_or_default();
    let head = container.rect_at(&[1]).unwrap_or_default();
    assert_eq!((main.x, main.y, main.width, main.height), (80.0, 40.0, 200.0, 120.0));
    assert!((head.width - 280.0).abs() < f32::EPSILON);
}

#[test]
fn auto_rows_grow_to_wrapped_text() {
    let container = lay_out(
        grid(
            GridStyle {
                template_columns: px(&[60.0, 100.0]),
                ..GridStyle::default()
            },
            vec![
                Node::text("aaa bbb ccc", TextStyle::default()),
                Node::fixed(20.0, 10.0),
            ],
        ),
        Constraints::unbounded(),
    );
    let text = container.child(0).cloned().unwrap_or_default();
    assert_eq!(text.text_lines.len(), 3);
    assert!((container.rect.height - 3.0 * 19.2).abs() < 0.001);
}

#[test]
fn auto_fill_repeats_to_the_width() {
    let container = lay_out(
        grid(
            GridStyle {
                template_columns: vec![TrackDef::Repeat(TrackRepeat::AutoFill(vec![
                    GridTrackSize::px(100.0),
                ]))],
                column_gap: 10.0,
                ..GridStyle::default()
            },
            (0..4).map(|_| Node::default()).collect(),
        ),
        Constraints::loose_width(340.0),
    );
    // 3 columns fit in 340px; the fourth item wraps to a second row.
    let fourth = container.rect_at(&[3]).unwrap_or_default();
    assert!(fourth.x.abs() < f32::EPSILON);
    let third = container.rect_at(&[2]).unwrap_or_default();
    assert!((third.x - 220.0).abs() < f32::EPSILON);
}

#[test]
fn column_flow_fills_columns_first() {
    let container = lay_out(
        grid(
            GridStyle {
                template_columns: px(&[50.0, 50.0]),
                template_rows: px(&[20.0, 20.0]),
                auto_flow: GridAutoFlow::Column,
                ..GridStyle::default()
            },
            (0..3).map(|_| Node::default()).collect(),
        ),
        Constraints::unbounded(),
    );
    let second = container.rect_at(&[1]).unwrap_or_default();
    assert!(second.x.abs() < f32::EPSILON);
    assert!((second.y - 20.0).abs() < f32::EPSILON);
}

#[test]
fn self_alignment_and_margins_inside_the_area() {
    let mut centered = Node::fixed(40.0, 20.0);
    centered.style.grid.justify_self = Some(GridAlignment::Center);
    centered.style.grid.align_self = Some(GridAlignment::End);
    let mut inset = Node::default();
    inset.style.margin = Margins::uniform(5.0);
    inset.style.grid.row_start = GridLine::Line(2);
    let container = lay_out(
        grid(
            GridStyle {
                template_columns: px(&[100.0]),
                template_rows: px(&[60.0, 60.0]),
                ..GridStyle::default()
            },
            vec![centered, inset],
        ),
        Constraints::unbounded(),
    );
    let placed = container.rect_at(&[0]).unwrap_or_default();
    assert_eq!((placed.x, placed.y), (30.0, 40.0));
    let inner = container.rect_at(&[1]).unwrap_or_default();
    assert_eq!((inner.x, inner.y, inner.width, inner.height), (5.0, 65.0, 90.0, 50.0));
}

#[test]
fn fr_and_minmax_share_leftover_space() {
    let container = lay_out(
        grid(
            GridStyle {
                template_columns: vec![
                    TrackDef::Track(GridTrackSize::MinMax(
                        TrackBreadth::Length(50.0),
                        TrackBreadth::Flex(1.0),
                    )),
                    TrackDef::Track(GridTrackSize::fr(1.0)),
                ],
                ..GridStyle::default()
            },
            vec![Node::default(), Node::default()],
        ),
        Constraints::loose_width(300.0),
    );
    let second = container.rect_at(&[1]).unwrap_or_default();
    assert!((second.x - 150.0).abs() < 0.001);
    assert!((second.width - 150.0).abs() < 0.001);
}
