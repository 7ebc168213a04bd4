//! Character-level IPA tokenizer fed by an espeak-style phonemizer.

use std::sync::Arc;

use tracing::debug;

use crate::backend::{Backends, SentencePhonemizer, require};
use crate::error::TokenizerError;
use crate::normalize::collapse_whitespace;
use crate::symbols::{IPA, SymbolTable};
use crate::tokenizer::{Encoded, PhonemeIds, Tokenizer, TokenizerOptions};

const BACKEND: &str = "espeak";
const HINT: &str = "install espeak-ng and configure it with Backends::with_sentence_phonemizer";

pub struct IpaTokenizer {
    options: TokenizerOptions,
    phonemizer: Option<Arc<dyn SentencePhonemizer>>,
}

impl IpaTokenizer {
    pub const NAME: &'static str = "ipa";

    pub fn new(options: TokenizerOptions, backends: &Backends) -> Self {
        Self {
            options,
            phonemizer: backends.sentence_phonemizer.clone(),
        }
    }

    /// Returns per-sentence phonemes and the normalized text.
    pub fn phonemize_text(
        &self,
        text: &str,
        language: &str,
    ) -> Result<(Vec<Vec<String>>, String), TokenizerError> {
        let phonemizer = require(&self.phonemizer, BACKEND, HINT)?;
        let text = self.normalize(text, language);
        let sentences = phonemizer.phonemize(&text, language)?;
        Ok((sentences, text))
    }

    fn sentence_ids(&self, phonemes: &str) -> Result<Vec<i64>, TokenizerError> {
        let ids = IPA.chars_to_ids(&collapse_whitespace(phonemes))?;
        Ok(IPA.finish_ids(ids, self.options.add_blank, self.options.add_bos_eos))
    }
}

impl Tokenizer for IpaTokenizer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn symbols(&self) -> &'static SymbolTable {
        &IPA
    }

    fn options(&self) -> TokenizerOptions {
        self.options
    }

    fn default_split_sentences(&self) -> bool {
        true
    }

    fn encode(
        &self,
        text: &str,
        language: &str,
        split_sentences: bool,
    ) -> Result<Encoded, TokenizerError> {
        let (sentences, normalized_text) = self.phonemize_text(text, language)?;
        debug!(language, sentences = sentences.len(), split_sentences, "ipa: phonemized");

        let ids = if split_sentences {
            let ids = sentences
                .iter()
                .map(|sentence| self.sentence_ids(&sentence.concat()))
                .collect::<Result<Vec<_>, _>>()?;
            PhonemeIds::Sentences(ids)
        } else {
            let joined: String = sentences.iter().map(|sentence| sentence.concat()).collect();
            PhonemeIds::Flat(self.sentence_ids(&joined)?)
        };

        Ok(Encoded {
            ids,
            normalized_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Espeak;

    impl SentencePhonemizer for Espeak {
        fn phonemize(
            &self,
            text: &str,
            _language: &str,
        ) -> Result<Vec<Vec<String>>, TokenizerError> {
            // one sentence per '.'-terminated chunk, one phoneme per character
            Ok(text
                .split_inclusive('.')
                .map(|s| s.chars().map(|c| c.to_string()).collect())
                .collect())
        }
    }

    fn tokenizer(add_blank: bool, add_bos_eos: bool) -> IpaTokenizer {
        let backends = Backends::new().with_sentence_phonemizer(Arc::new(Espeak));
        IpaTokenizer::new(
            TokenizerOptions {
                add_blank,
                add_bos_eos,
                normalize_text: false,
            },
            &backends,
        )
    }

    #[test]
    fn split_sentences_by_default() {
        let tok = tokenizer(false, true);
        assert!(tok.default_split_sentences());

        let encoded = tok.encode_default("ab. c.", "en-us").unwrap();
        let sentences = encoded.ids.as_sentences().unwrap();
        assert_eq!(sentences.len(), 2);

        let a = IPA.symbol_to_id("a").unwrap();
        let b = IPA.symbol_to_id("b").unwrap();
        let c = IPA.symbol_to_id("c").unwrap();
        let dot = IPA.symbol_to_id(".").unwrap();
        let space = IPA.space_id();
        assert_eq!(sentences[0], vec![1, a, b, dot, 2]);
        assert_eq!(sentences[1], vec![1, space, c, dot, 2]);
    }

    #[test]
    fn flat_output_collapses_whitespace() {
        let tok = tokenizer(true, true);
        let encoded = tok.encode("ab.   c.", "en-us", false).unwrap();
        assert_eq!(encoded.normalized_text, "ab. c.");

        let ids = encoded.ids.as_flat().unwrap();
        // "ab. c." -> 6 chars -> 13 with blanks -> 15 with boundaries
        assert_eq!(ids.len(), 15);
        assert_eq!(ids[0], IPA.bos_id());
        assert_eq!(ids[14], IPA.eos_id());
        assert_eq!(tok.decode(ids).unwrap(), "ab. c.");
    }

    #[test]
    fn backend_whitespace_is_collapsed() {
        struct Spaced;
        impl SentencePhonemizer for Spaced {
            fn phonemize(
                &self,
                _text: &str,
                _language: &str,
            ) -> Result<Vec<Vec<String>>, TokenizerError> {
                Ok(vec![vec!["h".into(), "  ".into(), "\t".into(), "ə".into()]])
            }
        }
        let backends = Backends::new().with_sentence_phonemizer(Arc::new(Spaced));
        let tok = IpaTokenizer::new(
            TokenizerOptions {
                add_blank: false,
                add_bos_eos: false,
                normalize_text: true,
            },
            &backends,
        );
        let encoded = tok.encode("x", "en-us", true).unwrap();
        let h = IPA.symbol_to_id("h").unwrap();
        let schwa = IPA.symbol_to_id("ə").unwrap();
        assert_eq!(encoded.ids, PhonemeIds::Sentences(vec![vec![h, IPA.space_id(), schwa]]));
    }

    #[test]
    fn unknown_character() {
        let tok = tokenizer(false, false);
        let err = tok.encode("中.", "zh", true).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownSymbol { table: "ipa", .. }));
    }

    #[test]
    fn missing_backend_fails_at_phonemization() {
        let tok = IpaTokenizer::new(TokenizerOptions::default(), &Backends::new());
        assert_eq!(tok.name(), "ipa");
        let err = tok.encode("hello", "en-us", true).unwrap_err();
        assert!(matches!(err, TokenizerError::BackendUnavailable { backend: "espeak", .. }));
        assert!(err.to_string().contains("espeak-ng"));
    }
}
