//! Pronunciation dictionary usable as every phonemizer backend.
//!
//! The file format is one entry per line, `word<TAB>ph1 ph2 …`. Blank lines
//! and lines starting with `#` are skipped. Words are matched
//! case-insensitively; a word that is not in the dictionary is spelled out
//! as its lowercase letters and digits. Underscores count as word
//! characters and are never emitted.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::backend::{
    AnalyzedSentence, AnalyzedWord, SentencePhonemizer, TextSegmenter, WordAnalyzer,
    WordPhonemizer,
};
use crate::error::TokenizerError;
use crate::segment::{RuleSegmenter, words_with_spacing};
use crate::symbols::SPACE;

const QUOTE: &str = "\"";

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
    char_level: bool,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses dictionary text.
    pub fn parse(text: &str) -> Result<Self, TokenizerError> {
        let mut lexicon = Self::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((word, phonemes)) = line.split_once('\t') else {
                return Err(TokenizerError::Backend(format!(
                    "lexicon line {}: expected `word<TAB>phonemes`",
                    idx + 1
                )));
            };
            let phonemes = phonemes.split_whitespace().map(str::to_string).collect();
            lexicon.insert(word.trim(), phonemes);
        }
        debug!(entries = lexicon.len(), "lexicon: parsed");
        Ok(lexicon)
    }

    /// Reads and parses a dictionary file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TokenizerError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Adds or replaces the pronunciation of `word`.
    pub fn insert(&mut self, word: &str, phonemes: Vec<String>) {
        self.entries.insert(word.to_lowercase(), phonemes);
    }

    /// Splits every phoneme into single characters in
    /// [`SentencePhonemizer`] output, as espeak-style consumers expect.
    pub fn with_char_level(mut self, char_level: bool) -> Self {
        self.char_level = char_level;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pronunciation of `word`, or its lowercase letters and digits when
    /// unknown.
    pub fn lookup(&self, word: &str) -> Vec<String> {
        let key = word.to_lowercase();
        match self.entries.get(&key) {
            Some(phonemes) => phonemes.clone(),
            None => key
                .chars()
                .filter(|c| c.is_alphanumeric())
                .map(String::from)
                .collect(),
        }
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        RuleSegmenter::new().split_sentences(text)
    }
}

fn is_punctuation(token: &str) -> bool {
    // `_` is a word character to the segmenter and the pad symbol to the tables
    !token.chars().any(|c| c.is_alphanumeric() || c == '_')
}

fn is_major(token: &str) -> bool {
    token.chars().all(|c| matches!(c, '.' | '!' | '?' | '…'))
}

impl WordAnalyzer for Lexicon {
    fn analyze(
        &self,
        text: &str,
        _language: &str,
    ) -> Result<Vec<AnalyzedSentence>, TokenizerError> {
        let sentences = self
            .sentences(text)
            .iter()
            .map(|sentence| {
                words_with_spacing(sentence)
                    .into_iter()
                    .map(|(token, trailing_ws)| {
                        if token == QUOTE {
                            AnalyzedWord {
                                text: token.to_string(),
                                trailing_ws,
                                ..AnalyzedWord::default()
                            }
                        } else if is_punctuation(token) {
                            AnalyzedWord::punctuation(token, is_major(token), trailing_ws)
                        } else {
                            AnalyzedWord::word(token, self.lookup(token), trailing_ws)
                        }
                    })
                    .collect()
            })
            .collect();
        Ok(sentences)
    }
}

impl SentencePhonemizer for Lexicon {
    fn phonemize(&self, text: &str, _language: &str) -> Result<Vec<Vec<String>>, TokenizerError> {
        let mut out = Vec::new();
        for sentence in self.sentences(text) {
            let mut phonemes = Vec::new();
            for (token, trailing_ws) in words_with_spacing(&sentence) {
                if is_punctuation(token) {
                    phonemes.push(token.to_string());
                } else {
                    phonemes.extend(self.lookup(token));
                }
                if trailing_ws {
                    phonemes.push(SPACE.to_string());
                }
            }
            if self.char_level {
                phonemes = phonemes
                    .iter()
                    .flat_map(|p| p.chars().map(String::from))
                    .collect();
            }
            out.push(phonemes);
        }
        Ok(out)
    }
}

impl WordPhonemizer for Lexicon {
    fn phonemize_words(&self, sentence: &str) -> Result<Vec<Vec<String>>, TokenizerError> {
        Ok(words_with_spacing(sentence)
            .into_iter()
            .filter(|(token, _)| *token != QUOTE)
            .map(|(token, _)| {
                if is_punctuation(token) {
                    vec![token.to_string()]
                } else {
                    self.lookup(token)
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DICT: &str = "# tiny\nhello\th ə l ˈoʊ\nworld\tw ˈɜː l d\n\nhi\th ˈaɪ\n";

    fn ph(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_and_lookup() {
        let lexicon = Lexicon::parse(DICT).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.lookup("Hello"), ph(&["h", "ə", "l", "ˈoʊ"]));
        assert_eq!(lexicon.lookup("Xy"), ph(&["x", "y"]));
    }

    #[test]
    fn malformed_line() {
        let err = Lexicon::parse("hello h ə l o\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DICT.as_bytes()).unwrap();
        let lexicon = Lexicon::from_file(file.path()).unwrap();
        assert_eq!(lexicon.lookup("world"), ph(&["w", "ˈɜː", "l", "d"]));

        let missing = file.path().with_extension("missing");
        assert!(matches!(Lexicon::from_file(missing), Err(TokenizerError::Io(_))));
    }

    #[test]
    fn analyze_marks_breaks_and_spacing() {
        let lexicon = Lexicon::parse(DICT).unwrap();
        let sentences = lexicon.analyze("Hello, world! \"Hi\"", "en-us").unwrap();
        assert_eq!(sentences.len(), 2);

        let first = &sentences[0];
        assert_eq!(first.len(), 4);
        assert!(first[1].is_minor_break && first[1].trailing_ws);
        assert!(first[3].is_major_break);
        assert_eq!(first[2].phonemes, ph(&["w", "ˈɜː", "l", "d"]));

        let second = &sentences[1];
        assert_eq!(second[0].text, "\"");
        assert!(!second[0].is_break());
    }

    #[test]
    fn phonemize_sentences() {
        let lexicon = Lexicon::parse(DICT).unwrap();
        let sentences = lexicon.phonemize("Hello world. Hi!", "en-us").unwrap();
        assert_eq!(
            sentences,
            vec![
                ph(&["h", "ə", "l", "ˈoʊ", " ", "w", "ˈɜː", "l", "d", "."]),
                ph(&["h", "ˈaɪ", "!"]),
            ]
        );

        let lexicon = lexicon.with_char_level(true);
        let sentences = lexicon.phonemize("Hi!", "en-us").unwrap();
        assert_eq!(sentences, vec![ph(&["h", "ˈ", "a", "ɪ", "!"])]);
    }

    #[test]
    fn word_groups_skip_quotes() {
        let lexicon = Lexicon::new();
        let groups = lexicon.phonemize_words("kata \"ya\".").unwrap();
        assert_eq!(groups, vec![ph(&["k", "a", "t", "a"]), ph(&["y", "a"]), ph(&["."])]);
    }

    #[test]
    fn underscore_is_not_punctuation() {
        let lexicon = Lexicon::parse(DICT).unwrap();
        assert!(lexicon.lookup("_").is_empty());
        assert_eq!(lexicon.lookup("x_y"), ph(&["x", "y"]));

        let sentences = lexicon.analyze("hello _ world", "en-us").unwrap();
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].iter().all(|word| !word.is_break()));

        let phonemes = lexicon.phonemize("hi _ hi", "en-us").unwrap();
        assert!(!phonemes[0].contains(&"_".to_string()));
        let groups = lexicon.phonemize_words("a_b _").unwrap();
        assert_eq!(groups, vec![ph(&["a", "b"]), Vec::<String>::new()]);
    }
}
