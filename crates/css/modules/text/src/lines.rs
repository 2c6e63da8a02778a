//! Line boxes and greedy line packing.
//! Spec: <https://www.w3.org/TR/css-text-3/#line-breaking>
//! Spec: <https://www.w3.org/TR/css-overflow-3/#text-overflow>

use css_box::Rect;
use log::debug;
use smallvec::SmallVec;

use crate::line_break::{BreakOpportunity, SOFT_HYPHEN};
use crate::measure::{MeasureStyle, TextMeasurer};

/// Width comparisons tolerate this much overflow.
pub const WIDTH_EPSILON: f32 = 0.001;

/// The glyph substituted for truncated text.
pub const ELLIPSIS: &str = "\u{2026}";

/// One unbreakable run of text placed on a line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineBox {
    /// Visible text of the run.
    pub text: String,
    /// White space following the run on the same line.
    pub trailing: String,
    /// Offset from the line's inline-start, justification included.
    pub inline_offset: f32,
    /// Width of `text`, justification included.
    pub width: f32,
    /// Width of `trailing`.
    pub trailing_width: f32,
    pub ascent: f32,
    pub descent: f32,
}

/// One line of a paragraph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLine {
    pub boxes: SmallVec<InlineBox, 4>,
    /// Natural width of the line; white space hanging at the end is excluded.
    pub width: f32,
    /// Alignment offset from the content box's inline-start edge.
    pub inline_offset: f32,
    /// Offset of the line box from the content box's block-start edge.
    pub block_offset: f32,
    /// Number of justification opportunities used on this line.
    pub gap_count: usize,
    /// Extra space added at each justification opportunity.
    pub gap_adjustment: f32,
    /// The line ended at a forced break.
    pub hard_break: bool,
    pub ascent: f32,
    pub descent: f32,
    /// Physical line box relative to the content box, set by writing-mode remapping.
    pub rect: Rect,
}

impl TextLine {
    /// Visible text of the line, without hanging white space.
    pub fn text(&self) -> String {
        let mut output = String::new();
        let last_index = self.boxes.len().saturating_sub(1);
        for (index, inline_box) in self.boxes.iter().enumerate() {
            output.push_str(&inline_box.text);
            if index < last_index {
                output.push_str(&inline_box.trailing);
            }
        }
        output
    }

    /// Width after justification.
    pub fn justified_width(&self) -> f32 {
        (self.gap_count as f32).mul_add(self.gap_adjustment, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Measures runs with letter and word spacing applied on top of the measurer's advance.
pub struct RunMeasure<'measure> {
    measurer: &'measure dyn TextMeasurer,
    style: MeasureStyle,
    letter_spacing: f32,
    word_spacing: f32,
}

impl<'measure> RunMeasure<'measure> {
    pub fn new(
        measurer: &'measure dyn TextMeasurer,
        style: MeasureStyle,
        letter_spacing: f32,
        word_spacing: f32,
    ) -> Self {
        Self {
            measurer,
            style,
            letter_spacing,
            word_spacing,
        }
    }

    /// Advance of `run` in px. Soft hyphens are invisible and measure zero.
    pub fn width(&self, run: &str) -> f32 {
        if run.is_empty() {
            return 0.0;
        }
        let visible: String;
        let run = if run.contains(SOFT_HYPHEN) {
            visible = strip_soft_hyphens(run);
            visible.as_str()
        } else {
            run
        };
        let metrics = self.measurer.measure(run, &self.style);
        let chars = run.chars().count() as f32;
        let spaces = run
            .chars()
            .filter(|character| matches!(character, ' ' | '\u{00A0}'))
            .count() as f32;
        let spaced = self
            .letter_spacing
            .mul_add(chars, spaces.mul_add(self.word_spacing, metrics.advance));
        spaced.max(0.0)
    }

    /// `(ascent, descent)` for `run`.
    pub fn vertical_metrics(&self, run: &str) -> (f32, f32) {
        let metrics = self.measurer.measure(run, &self.style);
        (metrics.ascent, metrics.descent)
    }
}

pub fn strip_soft_hyphens(run: &str) -> String {
    run.chars()
        .filter(|character| *character != SOFT_HYPHEN)
        .collect()
}

/// Text between two break opportunities.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Segment<'text> {
    content: &'text str,
    trailing: &'text str,
    hard_break: bool,
}

/// Separators that end a forced break segment.
const fn is_line_separator(character: char) -> bool {
    matches!(
        character,
        '\n' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

fn split_segments<'text>(text: &'text str, breaks: &[BreakOpportunity]) -> Vec<Segment<'text>> {
    let mut segments = Vec::with_capacity(breaks.len());
    let mut start = 0usize;
    for opportunity in breaks {
        let end = opportunity.byte_offset;
        let Some(piece) = text.get(start..end) else {
            continue;
        };
        if end <= start {
            continue;
        }
        start = end;
        let (piece, hard_break) = match piece.chars().next_back() {
            Some(last) if is_line_separator(last) => {
                (piece.get(..piece.len() - last.len_utf8()).unwrap_or(""), true)
            }
            _ => (piece, false),
        };
        let content = piece.trim_end_matches([' ', '\t']);
        let trailing = piece.get(content.len()..).unwrap_or("");
        // A run made only of preserved spaces is visible content.
        let segment = if content.is_empty() {
            Segment {
                content: trailing,
                trailing: "",
                hard_break,
            }
        } else {
            Segment {
                content,
                trailing,
                hard_break,
            }
        };
        segments.push(segment);
    }
    segments
}

/// How a line ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LineEnd {
    /// Soft wrap: the next run did not fit.
    Wrapped,
    /// Forced break.
    Forced,
    /// Last line of the paragraph.
    EndOfText,
}

/// Accumulates runs for the line under construction.
struct LineBuilder {
    boxes: SmallVec<InlineBox, 4>,
    /// Width through the end of the last run.
    width: f32,
    /// White space after the last run; counts only if another run follows.
    pending_trailing: f32,
    limit: f32,
}

impl LineBuilder {
    fn new(limit: f32) -> Self {
        Self {
            boxes: SmallVec::new(),
            width: 0.0,
            pending_trailing: 0.0,
            limit,
        }
    }

    fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    fn width_with(&self, run_width: f32) -> f32 {
        self.width + self.pending_trailing + run_width
    }

    fn push(&mut self, content: &str, trailing: &str, measure: &RunMeasure<'_>) {
        if content.is_empty() && trailing.is_empty() {
            return;
        }
        let width = measure.width(content);
        let trailing_width = measure.width(trailing);
        let (ascent, descent) = measure.vertical_metrics(content);
        let inline_offset = if self.is_empty() {
            0.0
        } else {
            self.width + self.pending_trailing
        };
        self.boxes.push(InlineBox {
            text: content.to_owned(),
            trailing: trailing.to_owned(),
            inline_offset,
            width,
            trailing_width,
            ascent,
            descent,
        });
        self.width = inline_offset + width;
        self.pending_trailing = trailing_width;
    }

    fn finish(self, end: LineEnd, measure: &RunMeasure<'_>) -> TextLine {
        let mut boxes = self.boxes;
        let mut width = self.width;
        let last_index = boxes.len().saturating_sub(1);
        for (index, inline_box) in boxes.iter_mut().enumerate() {
            if !inline_box.text.contains(SOFT_HYPHEN) {
                continue;
            }
            // A soft hyphen shows as a hyphen only where the line wraps after it.
            let shows_hyphen = index == last_index
                && end == LineEnd::Wrapped
                && inline_box.text.ends_with(SOFT_HYPHEN);
            let mut visible = strip_soft_hyphens(&inline_box.text);
            if shows_hyphen {
                visible.push('-');
            }
            let new_width = measure.width(&visible);
            if index == last_index {
                width += new_width - inline_box.width;
            }
            inline_box.text = visible;
            inline_box.width = new_width;
        }
        let (ascent, descent) = if boxes.is_empty() {
            measure.vertical_metrics("")
        } else {
            boxes.iter().fold((0.0f32, 0.0f32), |(asc, desc), inline_box| {
                (asc.max(inline_box.ascent), desc.max(inline_box.descent))
            })
        };
        TextLine {
            boxes,
            width,
            hard_break: end == LineEnd::Forced,
            ascent,
            descent,
            ..TextLine::default()
        }
    }
}

/// Inputs to greedy packing.
#[derive(Copy, Clone, Debug)]
pub struct PackingInput<'input> {
    /// Text after white-space processing and transforms.
    pub text: &'input str,
    pub breaks: &'input [BreakOpportunity],
    /// Inline size to fill; `f32::INFINITY` never wraps.
    pub available: f32,
    /// Reduces the first line's available size.
    pub text_indent: f32,
    /// Soft wrap opportunities may be taken.
    pub allow_wrap: bool,
    /// Runs wider than an empty line may be split between characters.
    pub char_break: bool,
}

/// Greedily pack the runs between break opportunities into lines.
///
/// A run that overflows a non-empty line starts the next line. A run that overflows
/// an empty line stays there, unless `char_break` allows splitting it.
pub fn pack_lines(input: &PackingInput<'_>, measure: &RunMeasure<'_>) -> Vec<TextLine> {
    let segments = split_segments(input.text, input.breaks);
    let line_limit = |line_index: usize| {
        if line_index == 0 {
            (input.available - input.text_indent).max(0.0)
        } else {
            input.available.max(0.0)
        }
    };
    let mut lines: Vec<TextLine> = Vec::new();
    let mut builder = LineBuilder::new(line_limit(0));
    for segment in segments {
        let content_width = measure.width(segment.content);
        if input.allow_wrap
            && !builder.is_empty()
            && builder.width_with(content_width) > builder.limit + WIDTH_EPSILON
        {
            lines.push(builder.finish(LineEnd::Wrapped, measure));
            builder = LineBuilder::new(line_limit(lines.len()));
        }
        let mut rest = segment.content;
        while input.allow_wrap
            && input.char_break
            && builder.is_empty()
            && rest.chars().nth(1).is_some()
            && measure.width(rest) > builder.limit + WIDTH_EPSILON
        {
            let cut = longest_fitting_prefix(rest, builder.limit, measure);
            let (head, tail) = rest.split_at(cut);
            builder.push(head, "", measure);
            lines.push(builder.finish(LineEnd::Wrapped, measure));
            builder = LineBuilder::new(line_limit(lines.len()));
            rest = tail;
        }
        builder.push(rest, segment.trailing, measure);
        if segment.hard_break {
            lines.push(builder.finish(LineEnd::Forced, measure));
            builder = LineBuilder::new(line_limit(lines.len()));
        }
    }
    if !builder.is_empty() {
        lines.push(builder.finish(LineEnd::EndOfText, measure));
    }
    debug!(
        target: "css::text::lines",
        "[PACK] available={:.3} indent={:.3} wrap={} char_break={} lines={}",
        input.available,
        input.text_indent,
        input.allow_wrap,
        input.char_break,
        lines.len()
    );
    lines
}

/// Byte length of the longest prefix (at least one character) that fits in `limit`.
fn longest_fitting_prefix(run: &str, limit: f32, measure: &RunMeasure<'_>) -> usize {
    let mut best = run.chars().next().map_or(run.len(), char::len_utf8);
    for (offset, character) in run.char_indices().skip(1) {
        let end = offset + character.len_utf8();
        let Some(prefix) = run.get(..end) else {
            break;
        };
        if measure.width(prefix) > limit + WIDTH_EPSILON {
            break;
        }
        best = end;
    }
    best
}

/// Truncate an overflowing line to the longest prefix that fits together with "…".
///
/// When even the ellipsis alone does not fit, the line becomes just the ellipsis.
pub fn apply_ellipsis(line: &mut TextLine, limit: f32, measure: &RunMeasure<'_>) {
    if !limit.is_finite() || line.width <= limit + WIDTH_EPSILON {
        return;
    }
    let full = line.text();
    let ellipsis_width = measure.width(ELLIPSIS);
    let budget = limit - ellipsis_width;
    let mut best = "";
    if budget >= 0.0 {
        for (offset, character) in full.char_indices() {
            let end = offset + character.len_utf8();
            let Some(prefix) = full.get(..end) else {
                break;
            };
            let trimmed = prefix.trim_end();
            if measure.width(trimmed) > budget + WIDTH_EPSILON {
                break;
            }
            best = trimmed;
        }
    }
    let mut truncated = best.to_owned();
    truncated.push_str(ELLIPSIS);
    let width = measure.width(&truncated);
    let (ascent, descent) = measure.vertical_metrics(&truncated);
    debug!(
        target: "css::text::lines",
        "[ELLIPSIS] limit={limit:.3} from={:.3} to={width:.3}",
        line.width
    );
    line.boxes.clear();
    line.boxes.push(InlineBox {
        text: truncated,
        width,
        ascent,
        descent,
        ..InlineBox::default()
    });
    line.width = width;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_break::{BreakRules, break_opportunities};
    use crate::measure::MonospaceMeasurer;
    use crate::style::{Hyphens, WordBreak};

    const TEN: MonospaceMeasurer = MonospaceMeasurer::new(10.0);

    fn run_measure() -> RunMeasure<'static> {
        RunMeasure::new(&TEN, MeasureStyle::default(), 0.0, 0.0)
    }

    fn pack(text: &str, available: f32, allow_wrap: bool, char_break: bool) -> Vec<TextLine> {
        let rules = BreakRules {
            allow_wrap,
            hyphens: Hyphens::Manual,
            word_break: WordBreak::Normal,
        };
        let breaks = break_opportunities(text, rules);
        let input = PackingInput {
            text,
            breaks: &breaks,
            available,
            text_indent: 0.0,
            allow_wrap,
            char_break,
        };
        pack_lines(&input, &run_measure())
    }

    fn texts(lines: &[TextLine]) -> Vec<String> {
        lines.iter().map(TextLine::text).collect()
    }

    #[test]
    /// # Panics
    /// Panics if trailing spaces count toward the line width or words are misplaced.
    fn greedy_wrap_hangs_trailing_space() {
        let lines = pack("Hello world", 100.0, true, false);
        assert_eq!(texts(&lines), vec!["Hello", "world"]);
        for line in &lines {
            assert!((line.width - 50.0).abs() < 0.001);
        }
    }

    #[test]
    /// # Panics
    /// Panics if words that fit together are split or box offsets skip the space.
    fn several_words_share_a_line() {
        let lines = pack("aa bb cc dd", 70.0, true, false);
        assert_eq!(texts(&lines), vec!["aa bb", "cc dd"]);
        let offsets: Vec<f32> = lines
            .first()
            .map(|line| line.boxes.iter().map(|item| item.inline_offset).collect())
            .unwrap_or_default();
        assert_eq!(offsets, vec![0.0, 30.0]);
    }

    #[test]
    /// # Panics
    /// Panics if an overlong word is dropped instead of kept on its own line.
    fn overlong_word_is_kept() {
        let lines = pack("a extraordinary b", 50.0, true, false);
        assert_eq!(texts(&lines), vec!["a", "extraordinary", "b"]);
        let middle = lines.get(1).map_or(0.0, |line| line.width);
        assert!((middle - 130.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if character breaking emits empty pieces or overflowing pieces.
    fn char_break_splits_long_runs() {
        let lines = pack("abcdefg hi", 30.0, true, true);
        assert_eq!(texts(&lines), vec!["abc", "def", "g", "hi"]);
        assert!(lines.iter().all(|line| !line.is_empty()));
    }

    #[test]
    /// # Panics
    /// Panics if forced breaks are not honored or flagged.
    fn forced_breaks_flagged() {
        let lines = pack("one\n\ntwo", 1000.0, false, false);
        assert_eq!(texts(&lines), vec!["one", "", "two"]);
        let flags: Vec<bool> = lines.iter().map(|line| line.hard_break).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    /// # Panics
    /// Panics if a wrapped soft hyphen is not rendered as a visible hyphen.
    fn soft_hyphen_visible_only_at_wrap() {
        let lines = pack("hy\u{ad}phen", 40.0, true, false);
        assert_eq!(texts(&lines), vec!["hy-", "phen"]);
        let unwrapped = pack("hy\u{ad}phen", 400.0, true, false);
        assert_eq!(texts(&unwrapped), vec!["hyphen"]);
        let width = unwrapped.first().map_or(0.0, |line| line.width);
        assert!((width - 60.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if the ellipsis prefix is not the longest that fits.
    fn ellipsis_truncates_to_fit() {
        let mut lines = pack("Hello world", 75.0, false, false);
        let measure = run_measure();
        for line in &mut lines {
            apply_ellipsis(line, 75.0, &measure);
        }
        assert_eq!(texts(&lines), vec!["Hello\u{2026}"]);
        let mut tiny = pack("Hello", 5.0, false, false);
        for line in &mut tiny {
            apply_ellipsis(line, 5.0, &measure);
        }
        assert_eq!(texts(&tiny), vec!["\u{2026}"]);
    }
}
