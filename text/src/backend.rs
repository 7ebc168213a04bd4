//! Interfaces to the grapheme-to-phoneme engines and text segmenters the
//! tokenizers delegate to.
//!
//! None of these engines live in this crate. Callers wire concrete
//! implementations in through [`Backends`]; a tokenizer whose backend is
//! missing fails with [`TokenizerError::BackendUnavailable`] when it first
//! needs to phonemize, so schemes that do not need it stay usable.

use std::fmt;
use std::sync::Arc;

use crate::error::TokenizerError;

/// A word produced by a sentence/word-level analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedWord {
    /// Surface text of the word (or the punctuation mark for breaks).
    pub text: String,
    /// Phonemes of the word, empty for punctuation.
    pub phonemes: Vec<String>,
    /// Sentence-final or otherwise major prosodic break.
    pub is_major_break: bool,
    /// Clause-level break such as a comma.
    pub is_minor_break: bool,
    /// Whitespace followed the word in the input.
    pub trailing_ws: bool,
}

impl AnalyzedWord {
    /// A regular word with phonemes.
    pub fn word<S: Into<String>>(text: S, phonemes: Vec<String>, trailing_ws: bool) -> Self {
        Self {
            text: text.into(),
            phonemes,
            trailing_ws,
            ..Self::default()
        }
    }

    /// A punctuation break.
    pub fn punctuation<S: Into<String>>(text: S, major: bool, trailing_ws: bool) -> Self {
        Self {
            text: text.into(),
            is_major_break: major,
            is_minor_break: !major,
            trailing_ws,
            ..Self::default()
        }
    }

    pub fn is_break(&self) -> bool {
        self.is_major_break || self.is_minor_break
    }
}

/// Words of one sentence, in order.
pub type AnalyzedSentence = Vec<AnalyzedWord>;

/// Sentence/word-aware G2P engine (gruut style).
pub trait WordAnalyzer: Send + Sync {
    /// Splits `text` into sentences of analyzed words.
    fn analyze(
        &self,
        text: &str,
        language: &str,
    ) -> Result<Vec<AnalyzedSentence>, TokenizerError>;
}

/// Phoneme-string G2P engine (espeak style) that segments sentences itself.
pub trait SentencePhonemizer: Send + Sync {
    /// Returns one phoneme list per sentence.
    fn phonemize(&self, text: &str, language: &str) -> Result<Vec<Vec<String>>, TokenizerError>;
}

/// Single-language G2P engine returning one phoneme group per word.
///
/// Implementations skip quotation marks: the returned list has one entry
/// per non-quote word of the sentence, in order.
pub trait WordPhonemizer: Send + Sync {
    fn phonemize_words(&self, sentence: &str) -> Result<Vec<Vec<String>>, TokenizerError>;
}

/// Plain-text sentence and word tokenizer.
pub trait TextSegmenter: Send + Sync {
    fn split_sentences(&self, text: &str) -> Vec<String>;

    fn split_words(&self, sentence: &str) -> Vec<String>;
}

/// Set of backends handed to tokenizer factories.
#[derive(Clone, Default)]
pub struct Backends {
    pub word_analyzer: Option<Arc<dyn WordAnalyzer>>,
    pub sentence_phonemizer: Option<Arc<dyn SentencePhonemizer>>,
    pub word_phonemizer: Option<Arc<dyn WordPhonemizer>>,
    pub segmenter: Option<Arc<dyn TextSegmenter>>,
}

impl fmt::Debug for Backends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backends")
            .field("word_analyzer", &self.word_analyzer.is_some())
            .field("sentence_phonemizer", &self.sentence_phonemizer.is_some())
            .field("word_phonemizer", &self.word_phonemizer.is_some())
            .field("segmenter", &self.segmenter.is_some())
            .finish()
    }
}

impl Backends {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word_analyzer(mut self, backend: Arc<dyn WordAnalyzer>) -> Self {
        self.word_analyzer = Some(backend);
        self
    }

    pub fn with_sentence_phonemizer(mut self, backend: Arc<dyn SentencePhonemizer>) -> Self {
        self.sentence_phonemizer = Some(backend);
        self
    }

    pub fn with_word_phonemizer(mut self, backend: Arc<dyn WordPhonemizer>) -> Self {
        self.word_phonemizer = Some(backend);
        self
    }

    pub fn with_segmenter(mut self, backend: Arc<dyn TextSegmenter>) -> Self {
        self.segmenter = Some(backend);
        self
    }
}

/// Resolves an optional backend or reports it as unavailable.
pub(crate) fn require<'a, T: ?Sized>(
    backend: &'a Option<Arc<T>>,
    name: &'static str,
    hint: &'static str,
) -> Result<&'a T, TokenizerError> {
    backend
        .as_deref()
        .ok_or(TokenizerError::BackendUnavailable { backend: name, hint })
}
