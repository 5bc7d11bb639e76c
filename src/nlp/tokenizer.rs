//! Word segmentation shared by every component that compares tokens

use unicode_segmentation::UnicodeSegmentation;

/// Characters UAX-29 allows inside a word that still separate skills:
/// "excel's", "tools:sql", "excel.sql".
const INNER_SEPARATORS: &[char] = &['\'', '\u{2019}', ':', '.'];

/// Split text on Unicode word boundaries, dropping whitespace segments.
/// Punctuation is kept as separate segments, so "a/b testing" becomes
/// `["a", "/", "b", "testing"]`. Returns byte offsets with each segment.
pub fn segments(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    for (offset, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        split_inner(offset, segment, &mut out);
    }
    out
}

/// Break a word segment on [`INNER_SEPARATORS`], keeping each separator as
/// its own segment. Numbers such as "4.5" stay whole.
fn split_inner<'a>(offset: usize, segment: &'a str, out: &mut Vec<(usize, &'a str)>) {
    if !segment.chars().any(char::is_alphabetic) {
        out.push((offset, segment));
        return;
    }

    let mut start = 0;
    for (i, c) in segment.char_indices() {
        if INNER_SEPARATORS.contains(&c) {
            if i > start {
                out.push((offset + start, &segment[start..i]));
            }
            let end = i + c.len_utf8();
            out.push((offset + i, &segment[i..end]));
            start = end;
        }
    }
    if start < segment.len() {
        out.push((offset + start, &segment[start..]));
    }
}

/// Lowercased segments of a phrase, used to key vocabulary entries.
pub fn phrase_key(phrase: &str) -> Vec<String> {
    segments(&phrase.to_lowercase())
        .into_iter()
        .map(|(_, s)| s.to_string())
        .collect()
}
