//! White space processing: tab expansion and collapsing.
//! Spec: <https://www.w3.org/TR/css-text-3/#white-space-processing>

use core::iter::repeat_n;

use crate::style::WhiteSpace;

/// Collapsible white space per CSS: space, tab, line feed, carriage return, form feed.
/// U+00A0 is deliberately absent.
#[inline]
pub const fn is_collapsible_space(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r' | '\u{000C}')
}

/// Unify `\r\n` and lone `\r` into `\n`.
fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Replace each tab with spaces up to the next tab stop. Columns restart after newlines.
///
/// `tab_size == 0` removes tabs.
pub fn expand_tabs(input: &str, tab_size: u32) -> String {
    if !input.contains('\t') {
        return input.to_owned();
    }
    let stop = tab_size as usize;
    let mut output = String::with_capacity(input.len());
    let mut column = 0usize;
    for character in input.chars() {
        match character {
            '\t' => {
                if stop > 0 {
                    let fill = stop - column % stop;
                    output.extend(repeat_n(' ', fill));
                    column += fill;
                }
            }
            '\n' => {
                output.push('\n');
                column = 0;
            }
            other => {
                output.push(other);
                column += 1;
            }
        }
    }
    output
}

/// Collapse white space runs to a single space and trim both ends.
pub fn collapse_whitespace(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_whitespace = false;
    for character in input.chars() {
        if is_collapsible_space(character) {
            if !in_whitespace {
                output.push(' ');
                in_whitespace = true;
            }
        } else {
            output.push(character);
            in_whitespace = false;
        }
    }
    output.trim_matches(' ').to_owned()
}

/// `pre-line`: collapse spaces and tabs, keep newlines, drop spaces around newlines.
fn collapse_preserving_newlines(input: &str) -> String {
    let lines: Vec<String> = input
        .split('\n')
        .map(|line| {
            let spaced: String = line
                .chars()
                .map(|character| if character == '\t' { ' ' } else { character })
                .collect();
            collapse_whitespace(&spaced)
        })
        .collect();
    lines.join("\n")
}

/// Run tab expansion and white-space normalization for `mode`.
pub fn process_white_space(input: &str, mode: WhiteSpace, tab_size: u32) -> String {
    match mode {
        WhiteSpace::Normal | WhiteSpace::Nowrap => collapse_whitespace(input),
        WhiteSpace::PreLine => collapse_preserving_newlines(&normalize_newlines(input)),
        WhiteSpace::Pre | WhiteSpace::PreWrap => {
            expand_tabs(&normalize_newlines(input), tab_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if collapsing merges NBSP or fails to trim.
    fn normal_collapses_but_keeps_nbsp() {
        let out = process_white_space("  a \t\n b\u{a0}\u{a0}c  ", WhiteSpace::Normal, 8);
        assert_eq!(out, "a b\u{a0}\u{a0}c");
    }

    #[test]
    /// # Panics
    /// Panics if tabs do not advance to the next stop.
    fn tabs_expand_to_stops() {
        assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
        assert_eq!(expand_tabs("\tx\n\ty", 2), "  x\n  y");
        assert_eq!(expand_tabs("a\tb", 0), "ab");
    }

    #[test]
    /// # Panics
    /// Panics if pre-line loses newlines or keeps spaces adjacent to them.
    fn pre_line_keeps_breaks() {
        let out = process_white_space("one   two \n\t three\r\nfour", WhiteSpace::PreLine, 8);
        assert_eq!(out, "one two\nthree\nfour");
    }

    #[test]
    /// # Panics
    /// Panics if pre-wrap alters spacing other than tabs.
    fn pre_wrap_preserves_spacing() {
        let out = process_white_space("a  b\tc", WhiteSpace::PreWrap, 8);
        assert_eq!(out, "a  b    c");
    }
}
