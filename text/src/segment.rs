//! Rule-based sentence and word segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::backend::TextSegmenter;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+(?:['\-]\w+)*|[^\w\s]").unwrap());

/// Default [`TextSegmenter`] that splits on terminal punctuation.
///
/// A sentence ends after a run of `.`, `!`, `?` or `…` (and their CJK
/// forms). Closing quotes or brackets right after the run stay with the
/// sentence when whitespace or the end of text follows them; otherwise
/// they open the next one. Dots between digits (`3.14`) do not end a
/// sentence. Words are runs of word characters, optionally joined by `'`
/// or `-`; every other non-space character is its own token.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl TextSegmenter for RuleSegmenter {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            current.push(c);
            i += 1;

            if !is_sentence_boundary(c, i - 1, &chars) {
                continue;
            }
            while i < chars.len() && is_terminal(chars[i]) {
                current.push(chars[i]);
                i += 1;
            }
            // closing marks belong here only when the sentence ends after them
            let mut end = i;
            while end < chars.len() && is_closing(chars[end]) {
                end += 1;
            }
            if end > i && chars.get(end).is_none_or(|c| c.is_whitespace()) {
                current.extend(&chars[i..end]);
                i = end;
            }
            push_trimmed(&mut sentences, &mut current);
        }
        push_trimmed(&mut sentences, &mut current);
        sentences
    }

    fn split_words(&self, sentence: &str) -> Vec<String> {
        WORD.find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Words of `sentence`, each paired with whether whitespace follows it.
pub(crate) fn words_with_spacing(sentence: &str) -> Vec<(&str, bool)> {
    WORD.find_iter(sentence)
        .map(|m| {
            let trailing_ws = sentence[m.end()..].starts_with(char::is_whitespace);
            (m.as_str(), trailing_ws)
        })
        .collect()
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
    current.clear();
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…' | '。' | '！' | '？')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»' | '」')
}

/// Checks if a character ends a sentence.
fn is_sentence_boundary(c: char, idx: usize, chars: &[char]) -> bool {
    let prev = if idx > 0 { chars[idx - 1] } else { ' ' };
    let next = if idx + 1 < chars.len() { chars[idx + 1] } else { ' ' };

    match c {
        // decimal numbers (9.9)
        '.' => !(next.is_ascii_digit() && prev.is_ascii_digit()),
        _ => is_terminal(c),
    }
}
