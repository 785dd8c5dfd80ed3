// src/core/tokenizer.rs

/// Characters that separate words. Matches the ASCII `\s` class, so
/// non-breaking spaces and other Unicode blanks stay inside a word.
const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '\'' || c == '-'
}

/// Normalizes a single whitespace-delimited piece of text into a token.
///
/// The piece is lowercased (ASCII only) and every character other than
/// `a`-`z`, `'` and `-` is dropped.
///
/// # Returns
///
/// * `Some(token)` - The normalized token
/// * `None` - Nothing survived the character filter
#[inline]
#[must_use]
pub fn normalize(word: &str) -> Option<String> {
    let token: String = word
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|&c| is_word_char(c))
        .collect();

    if token.is_empty() { None } else { Some(token) }
}

/// Splits a line into normalized tokens, lazily.
#[inline]
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .filter_map(normalize)
}
