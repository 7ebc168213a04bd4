//! Tokenizers backed by a gruut-style word analyzer.

use std::sync::Arc;

use tracing::debug;

use crate::backend::{AnalyzedWord, Backends, WordAnalyzer, require};
use crate::error::TokenizerError;
use crate::symbols::{GRUUT, GRUUT_SW, SPACE, SymbolTable};
use crate::tokenizer::{Encoded, PhonemeIds, Tokenizer, TokenizerOptions};

const BACKEND: &str = "gruut";
const HINT: &str = "configure a word analyzer with Backends::with_word_analyzer";

/// Phonemizes through a [`WordAnalyzer`] and maps whole phonemes to IDs.
///
/// Sentence boundaries are not kept: output is always flat.
pub struct GruutTokenizer {
    name: &'static str,
    table: &'static SymbolTable,
    language: Option<&'static str>,
    options: TokenizerOptions,
    analyzer: Option<Arc<dyn WordAnalyzer>>,
}

impl GruutTokenizer {
    pub const NAME: &'static str = "gruut";
    pub const SWAHILI: &'static str = "gruut_sw";

    /// General tokenizer using the caller's language and the English table.
    pub fn new(options: TokenizerOptions, backends: &Backends) -> Self {
        Self {
            name: Self::NAME,
            table: &GRUUT,
            language: None,
            options,
            analyzer: backends.word_analyzer.clone(),
        }
    }

    /// Swahili tokenizer: always analyzes as `sw`.
    pub fn swahili(options: TokenizerOptions, backends: &Backends) -> Self {
        Self {
            name: Self::SWAHILI,
            table: &GRUUT_SW,
            language: Some("sw"),
            options,
            analyzer: backends.word_analyzer.clone(),
        }
    }

    /// Returns the phoneme stream of `text` and the normalized text.
    pub fn phonemize_text(
        &self,
        text: &str,
        language: &str,
    ) -> Result<(Vec<String>, String), TokenizerError> {
        let language = self.language.unwrap_or(language);
        let analyzer = require(&self.analyzer, BACKEND, HINT)?;

        let text = self.normalize(text, language);
        let sentences = analyzer.analyze(&text, language)?;
        debug!(scheme = self.name, language, sentences = sentences.len(), "gruut: analyzed");

        let phonemes = sentences
            .iter()
            .flat_map(|sentence| sentence_phonemes(sentence))
            .collect();
        Ok((phonemes, text))
    }
}

/// Flattens one analyzed sentence into phoneme tokens.
///
/// Breaks contribute their punctuation, a literal `"` stays a quote token,
/// other words contribute their phonemes, and a space follows every word
/// with trailing whitespace except the last.
pub fn sentence_phonemes(sentence: &[AnalyzedWord]) -> Vec<String> {
    let mut out = Vec::new();
    let last = sentence.len().saturating_sub(1);
    for (idx, word) in sentence.iter().enumerate() {
        if word.is_break() {
            out.push(word.text.clone());
        } else if word.text == "\"" {
            out.push("\"".to_string());
        } else if !word.phonemes.is_empty() {
            out.extend(word.phonemes.iter().cloned());
        }

        if word.trailing_ws && idx < last {
            out.push(SPACE.to_string());
        }
    }
    out
}

impl Tokenizer for GruutTokenizer {
    fn name(&self) -> &str {
        self.name
    }

    fn symbols(&self) -> &'static SymbolTable {
        self.table
    }

    fn options(&self) -> TokenizerOptions {
        self.options
    }

    fn encode(
        &self,
        text: &str,
        language: &str,
        _split_sentences: bool,
    ) -> Result<Encoded, TokenizerError> {
        let (phonemes, normalized_text) = self.phonemize_text(text, language)?;
        let ids = self.table.phonemes_to_ids(&phonemes)?;
        let ids = self
            .table
            .finish_ids(ids, self.options.add_blank, self.options.add_bos_eos);
        Ok(Encoded {
            ids: PhonemeIds::Flat(ids),
            normalized_text,
        })
    }
}
