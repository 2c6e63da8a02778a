use css_text::{
    Hyphens, MonospaceMeasurer, Paragraph, ParagraphInput, TextAlign, TextLine, TextStyle,
    WhiteSpace, layout_paragraph,
};
use css_writing_modes::{Direction, WritingMode};

const TEN: MonospaceMeasurer = MonospaceMeasurer::new(10.0);

fn lay_out(text: &str, style: &TextStyle, available_inline: f32) -> Paragraph {
    let _ = env_logger::builder().is_test(true).try_init();
    layout_paragraph(
        &ParagraphInput {
            text,
            style,
            direction: Direction::Ltr,
            writing_mode: WritingMode::HorizontalTb,
            available_inline,
            min_inline: 0.0,
        },
        &TEN,
    )
}

fn line_texts(paragraph: &Paragraph) -> Vec<String> {
    paragraph.lines.iter().map(TextLine::text).collect()
}

#[test]
fn pre_expands_tabs_and_keeps_newlines() {
    let style = TextStyle {
        white_space: WhiteSpace::Pre,
        tab_size: 4,
        ..TextStyle::default()
    };
    let paragraph = lay_out("a\tb\nc", &style, 20.0);
    assert_eq!(line_texts(&paragraph), vec!["a   b", "c"]);
    let widths: Vec<f32> = paragraph.lines.iter().map(|line| line.width).collect();
    assert_eq!(widths, vec![50.0, 10.0]);
}

#[test]
fn ideographs_wrap_without_spaces() {
    let paragraph = lay_out("中文字中文", &TextStyle::default(), 30.0);
    assert_eq!(line_texts(&paragraph), vec!["中文字", "中文"]);
}

#[test]
fn hard_hyphen_breaks_only_with_auto() {
    let auto = TextStyle {
        hyphens: Hyphens::Auto,
        ..TextStyle::default()
    };
    assert_eq!(line_texts(&lay_out("well-known", &auto, 60.0)), vec!["well-", "known"]);
    assert_eq!(
        line_texts(&lay_out("well-known", &TextStyle::default(), 60.0)),
        vec!["well-known"]
    );
}

#[test]
fn justified_lines_fill_the_box() {
    let style = TextStyle {
        text_align: TextAlign::Justify,
        ..TextStyle::default()
    };
    let paragraph = lay_out("aa bb cc", &style, 70.0);
    assert_eq!(line_texts(&paragraph), vec!["aa bb", "cc"]);
    // Justified text spans the available room rather than its widest line.
    assert!((paragraph.inline_size - 70.0).abs() < 0.001);

    let wide = layout_paragraph(
        &ParagraphInput {
            text: "aa bb cc",
            style: &style,
            direction: Direction::Ltr,
            writing_mode: WritingMode::HorizontalTb,
            available_inline: 70.0,
            min_inline: 70.0,
        },
        &TEN,
    );
    let first = wide.lines.first().cloned().unwrap_or_default();
    assert_eq!(first.gap_count, 1);
    assert!((first.justified_width() - 70.0).abs() < 0.001);
    let last = wide.lines.get(1).cloned().unwrap_or_default();
    assert_eq!(last.gap_count, 0);
}

#[test]
fn rtl_start_aligns_right() {
    let paragraph = layout_paragraph(
        &ParagraphInput {
            text: "abc",
            style: &TextStyle::default(),
            direction: Direction::Rtl,
            writing_mode: WritingMode::HorizontalTb,
            available_inline: 100.0,
            min_inline: 100.0,
        },
        &TEN,
    );
    let rect = paragraph.lines.first().map(|line| line.rect).unwrap_or_default();
    assert!((rect.x - 70.0).abs() < 0.001);
    assert!((rect.width - 30.0).abs() < 0.001);
}
