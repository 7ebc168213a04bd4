//! The tokenizer capability shared by every scheme.

use serde::{Deserialize, Serialize};

use crate::error::TokenizerError;
use crate::normalize::preprocess_text;
use crate::symbols::SymbolTable;

/// Construction-time switches applied to every call of a tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Insert the pad ID between IDs and at both ends.
    pub add_blank: bool,
    /// Surround the IDs with bos/eos.
    pub add_bos_eos: bool,
    /// NFKC-normalize text before cleanup.
    pub normalize_text: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            add_blank: true,
            add_bos_eos: true,
            normalize_text: true,
        }
    }
}

/// Phoneme IDs, either flat or one sequence per sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PhonemeIds {
    Flat(Vec<i64>),
    Sentences(Vec<Vec<i64>>),
}

impl PhonemeIds {
    /// Returns the IDs as one sequence, concatenating sentences.
    pub fn flatten(self) -> Vec<i64> {
        match self {
            PhonemeIds::Flat(ids) => ids,
            PhonemeIds::Sentences(sentences) => sentences.into_iter().flatten().collect(),
        }
    }

    /// Number of sequences: 1 for flat output.
    pub fn sequence_count(&self) -> usize {
        match self {
            PhonemeIds::Flat(_) => 1,
            PhonemeIds::Sentences(sentences) => sentences.len(),
        }
    }

    pub fn as_flat(&self) -> Option<&[i64]> {
        match self {
            PhonemeIds::Flat(ids) => Some(ids),
            PhonemeIds::Sentences(_) => None,
        }
    }

    pub fn as_sentences(&self) -> Option<&[Vec<i64>]> {
        match self {
            PhonemeIds::Flat(_) => None,
            PhonemeIds::Sentences(sentences) => Some(sentences),
        }
    }
}

/// Result of [`Tokenizer::encode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub ids: PhonemeIds,
    /// The cleaned text that was phonemized.
    pub normalized_text: String,
}

/// Text → phoneme-ID tokenizer for one scheme.
pub trait Tokenizer: Send + Sync {
    /// Scheme name, as registered.
    fn name(&self) -> &str;

    fn symbols(&self) -> &'static SymbolTable;

    fn options(&self) -> TokenizerOptions;

    /// Whether [`Tokenizer::encode_default`] splits sentences.
    fn default_split_sentences(&self) -> bool {
        false
    }

    /// Cleans text the way [`Tokenizer::encode`] does before phonemizing.
    fn normalize(&self, text: &str, language: &str) -> String {
        preprocess_text(text, language, self.options().normalize_text)
    }

    /// Normalizes, phonemizes and maps `text` to IDs.
    fn encode(
        &self,
        text: &str,
        language: &str,
        split_sentences: bool,
    ) -> Result<Encoded, TokenizerError>;

    fn encode_default(&self, text: &str, language: &str) -> Result<Encoded, TokenizerError> {
        self.encode(text, language, self.default_split_sentences())
    }

    /// Maps IDs back to phonemes, dropping pad, bos and eos.
    fn decode(&self, ids: &[i64]) -> Result<String, TokenizerError> {
        let table = self.symbols();
        let reserved = [table.pad_id(), table.bos_id(), table.eos_id()];
        let kept: Vec<i64> = ids.iter().copied().filter(|id| !reserved.contains(id)).collect();
        table.ids_to_phonemes(&kept)
    }
}
