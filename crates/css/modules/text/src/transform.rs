//! `text-transform` case mapping.
//! Spec: <https://www.w3.org/TR/css-text-3/#text-transform-property>

use crate::style::TextTransform;

/// Apply the case transform. Full Unicode case mapping may change the string length.
pub fn apply_text_transform(input: &str, transform: TextTransform) -> String {
    match transform {
        TextTransform::None => input.to_owned(),
        TextTransform::Uppercase => input.to_uppercase(),
        TextTransform::Lowercase => input.to_lowercase(),
        TextTransform::Capitalize => capitalize_words(input),
    }
}

/// Uppercase the first letter of every word; a word starts after white space.
fn capitalize_words(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;
    for character in input.chars() {
        if character.is_whitespace() {
            at_word_start = true;
            output.push(character);
        } else if at_word_start && character.is_alphabetic() {
            output.extend(character.to_uppercase());
            at_word_start = false;
        } else {
            output.push(character);
            at_word_start = false;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if capitalize touches letters other than word starts.
    fn capitalize_word_starts() {
        assert_eq!(
            apply_text_transform("hello wORLD\u{a0}éte", TextTransform::Capitalize),
            "Hello WORLD\u{a0}Éte"
        );
        assert_eq!(apply_text_transform("don't", TextTransform::Capitalize), "Don't");
    }

    #[test]
    /// # Panics
    /// Panics if full case mapping is not applied.
    fn upper_and_lower() {
        assert_eq!(apply_text_transform("straße", TextTransform::Uppercase), "STRASSE");
        assert_eq!(apply_text_transform("ABC", TextTransform::Lowercase), "abc");
    }
}
