//! Line break opportunities (UAX #14) filtered by CSS text properties.
//!
//! The base opportunities come from the `unicode-linebreak` crate. CSS then adjusts them:
//!
//! - `white-space: nowrap | pre` drops every non-mandatory opportunity
//! - `hyphens` gates the opportunities after hard and soft hyphens
//! - `word-break: break-all` adds opportunities between any two letters
//! - `word-break: keep-all` drops opportunities between two CJK letters
//!
//! Spec: <https://www.unicode.org/reports/tr14/>
//! Spec: <https://www.w3.org/TR/css-text-3/#line-breaking>

use unicode_linebreak::{BreakOpportunity as UaxBreak, linebreaks};

use crate::style::{Hyphens, WordBreak};

/// Soft hyphen, invisible unless a line breaks after it.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Whether the line must or may break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakType {
    /// Forced break (line feed and other separators).
    Mandatory,
    /// Soft wrap opportunity.
    Allowed,
}

/// A position where the line may (or must) end.
///
/// `byte_offset` points just after the character that allows the break, so the text
/// before it belongs to the earlier line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOpportunity {
    pub byte_offset: usize,
    pub break_type: BreakType,
}

impl BreakOpportunity {
    #[inline]
    pub const fn new(byte_offset: usize, break_type: BreakType) -> Self {
        Self {
            byte_offset,
            break_type,
        }
    }

    #[inline]
    pub fn is_mandatory(&self) -> bool {
        self.break_type == BreakType::Mandatory
    }
}

/// CSS inputs that shape the break opportunity set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakRules {
    /// False for `nowrap` and `pre`.
    pub allow_wrap: bool,
    pub hyphens: Hyphens,
    pub word_break: WordBreak,
}

/// Raw UAX #14 opportunities. The final entry is always at `text.len()`.
pub fn find_break_opportunities(text: &str) -> Vec<BreakOpportunity> {
    linebreaks(text)
        .map(|(byte_offset, kind)| {
            let break_type = match kind {
                UaxBreak::Mandatory => BreakType::Mandatory,
                UaxBreak::Allowed => BreakType::Allowed,
            };
            BreakOpportunity::new(byte_offset, break_type)
        })
        .collect()
}

/// Opportunities after applying the CSS rules, sorted by offset, ending at `text.len()`.
pub fn break_opportunities(text: &str, rules: BreakRules) -> Vec<BreakOpportunity> {
    let raw = find_break_opportunities(text);
    let mut filtered: Vec<BreakOpportunity> = raw
        .into_iter()
        .filter(|opportunity| keep_opportunity(text, *opportunity, rules))
        .collect();
    if rules.allow_wrap && rules.word_break == WordBreak::BreakAll {
        add_break_all_opportunities(text, &mut filtered);
    }
    filtered
}

fn keep_opportunity(text: &str, opportunity: BreakOpportunity, rules: BreakRules) -> bool {
    let offset = opportunity.byte_offset;
    if opportunity.is_mandatory() || offset >= text.len() {
        return true;
    }
    if !rules.allow_wrap {
        return false;
    }
    let before = text.get(..offset).and_then(|head| head.chars().next_back());
    let after = text.get(offset..).and_then(|tail| tail.chars().next());
    match before {
        Some(SOFT_HYPHEN) => return rules.hyphens != Hyphens::None,
        Some(character) if is_hard_hyphen(character) => return rules.hyphens == Hyphens::Auto,
        _ => {}
    }
    if rules.word_break == WordBreak::KeepAll
        && let (Some(prev), Some(next)) = (before, after)
        && is_cjk(prev)
        && is_cjk(next)
    {
        return false;
    }
    true
}

/// Insert an opportunity at every boundary between two non-space characters.
fn add_break_all_opportunities(text: &str, opportunities: &mut Vec<BreakOpportunity>) {
    let mut extra = Vec::new();
    let mut previous: Option<char> = None;
    for (offset, character) in text.char_indices() {
        if let Some(prev) = previous
            && can_split_between(prev, character)
            && !opportunities
                .iter()
                .any(|existing| existing.byte_offset == offset)
        {
            extra.push(BreakOpportunity::new(offset, BreakType::Allowed));
        }
        previous = Some(character);
    }
    if extra.is_empty() {
        return;
    }
    opportunities.extend(extra);
    opportunities.sort_by_key(|opportunity| opportunity.byte_offset);
}

/// Character boundaries where forced splitting is acceptable.
pub fn can_split_between(prev: char, next: char) -> bool {
    !prev.is_whitespace()
        && !next.is_whitespace()
        && !is_glue(prev)
        && !is_glue(next)
        && !is_combining(next)
}

/// NBSP, word joiner and zero-width no-break space forbid breaks on either side.
const fn is_glue(character: char) -> bool {
    matches!(character, '\u{00A0}' | '\u{2060}' | '\u{FEFF}' | '\u{202F}')
}

const fn is_combining(character: char) -> bool {
    matches!(character, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{20D0}'..='\u{20FF}' | '\u{FE20}'..='\u{FE2F}')
}

/// Hyphen-minus and U+2010 HYPHEN.
#[inline]
pub const fn is_hard_hyphen(character: char) -> bool {
    matches!(character, '-' | '\u{2010}')
}

/// Ideographic and syllabic CJK characters that break without spaces.
pub const fn is_cjk(character: char) -> bool {
    matches!(
        character,
        '\u{2E80}'..='\u{2FDF}'
            | '\u{3040}'..='\u{30FF}'
            | '\u{3100}'..='\u{312F}'
            | '\u{3130}'..='\u{318F}'
            | '\u{31A0}'..='\u{31FF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{AC00}'..='\u{D7AF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF66}'..='\u{FF9F}'
            | '\u{20000}'..='\u{2FFFF}'
    )
}
