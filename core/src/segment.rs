//! Sentence boundary detection for free-form notes.
//!
//! Splits note text into trimmed sentences without tripping over
//! abbreviations, decimals, initials or list markers the way a naive
//! `split('.')` would.

/// A period after one of these words never ends a sentence.
/// Compared lower-cased, without the final period ("e.g." scans as "e.g").
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st",
    "vs", "etc", "approx", "dept", "no",
    "e.g", "i.e", "a.m", "p.m", "u.s", "u.k",
];

/// Split a block of text into an ordered list of trimmed sentences.
///
/// Boundaries are `.`, `!` and `?` runs followed by whitespace or end of
/// input, plus hard newlines (notes tend to be line-oriented). Closing
/// quotes and brackets after a terminator stay with their sentence.
/// Empty input yields an empty vec.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c == '\n' {
            push_trimmed(&mut sentences, &text[start..pos]);
            start = pos + c.len_utf8();
            i += 1;
            continue;
        }

        if is_terminator(c) {
            // Absorb the whole terminator run ("...", "?!"), then any
            // closing quotes or brackets that belong to the sentence.
            let mut j = i;
            while j + 1 < chars.len() && is_terminator(chars[j + 1].1) {
                j += 1;
            }
            let mut k = j;
            while k + 1 < chars.len() && is_closer(chars[k + 1].1) {
                k += 1;
            }

            let next = chars.get(k + 1).map(|&(_, ch)| ch);
            let followed_by_break = match next {
                None => true,
                Some(ch) => ch.is_whitespace(),
            };

            // Abbreviation, initial and list-marker checks only apply to
            // a lone period; "!" / "?" / ellipsis runs always split.
            let lone_period = c == '.' && j == i;
            let boundary = followed_by_break && !(lone_period && suppresses_period(text, pos));

            if boundary {
                let end = chars[k].0 + chars[k].1.len_utf8();
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
            i = k + 1;
            continue;
        }

        i += 1;
    }

    if start < text.len() {
        push_trimmed(&mut sentences, &text[start..]);
    }

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// True when the word directly before the period at `period_pos` means
/// the period is not a sentence boundary: a known abbreviation, a
/// single-letter initial, or a bare number (list marker).
fn suppresses_period(text: &str, period_pos: usize) -> bool {
    let word: String = text[..period_pos]
        .chars()
        .rev()
        .take_while(|c| !c.is_whitespace())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let word = word
        .trim_start_matches(['(', '[', '"', '\'', '\u{201c}', '\u{2018}'])
        .to_lowercase();

    if word.is_empty() {
        return false;
    }
    if ABBREVIATIONS.contains(&word.as_str()) {
        return true;
    }
    // Single-letter initial: "J. Smith".
    if word.chars().count() == 1 && word.chars().all(|c| c.is_alphabetic()) {
        return true;
    }
    // List marker: "1. Buy milk".
    word.chars().all(|c| c.is_ascii_digit())
}
