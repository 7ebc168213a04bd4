//! Indonesian tokenizer driven by a per-word G2P engine.

use std::sync::Arc;

use tracing::debug;

use crate::backend::{Backends, TextSegmenter, WordPhonemizer, require};
use crate::error::TokenizerError;
use crate::normalize::{preprocess_text, tidy_punctuation_spacing};
use crate::segment::RuleSegmenter;
use crate::symbols::{G2P_ID, SPACE, SymbolTable};
use crate::tokenizer::{Encoded, PhonemeIds, Tokenizer, TokenizerOptions};

const BACKEND: &str = "g2p_id";
const HINT: &str = "configure an Indonesian G2P engine with Backends::with_word_phonemizer";
const QUOTE: &str = "\"";

/// Punctuation that suppresses the space before the word carrying it.
const NO_SPACE_BEFORE: [char; 5] = ['.', ',', '!', '?', ':'];

/// Indonesian G2P tokenizer.
///
/// The blank and boundary options are accepted but not applied: the model
/// variants trained on this scheme consume the bare phoneme IDs.
pub struct G2pIdTokenizer {
    options: TokenizerOptions,
    phonemizer: Option<Arc<dyn WordPhonemizer>>,
    segmenter: Arc<dyn TextSegmenter>,
}

impl G2pIdTokenizer {
    pub const NAME: &'static str = "g2p_id";

    pub fn new(options: TokenizerOptions, backends: &Backends) -> Self {
        Self {
            options,
            phonemizer: backends.word_phonemizer.clone(),
            segmenter: backends
                .segmenter
                .clone()
                .unwrap_or_else(|| Arc::new(RuleSegmenter::new())),
        }
    }

    /// Returns the flat phoneme stream of `text` and the normalized text.
    pub fn phonemize_text(
        &self,
        text: &str,
        language: &str,
    ) -> Result<(Vec<String>, String), TokenizerError> {
        let phonemizer = require(&self.phonemizer, BACKEND, HINT)?;
        let text = self.normalize(text, language);

        let mut phonemes = Vec::new();
        for sentence in self.segmenter.split_sentences(&text) {
            let words = self.segmenter.split_words(&sentence);
            let groups = phonemizer.phonemize_words(&sentence)?;
            let groups = reinsert_quotes(&sentence, &words, groups)?;
            debug!(words = words.len(), "g2p_id: phonemized sentence");
            phonemes.extend(join_words(&groups));
        }
        Ok((phonemes, text))
    }
}

/// Puts a literal quote group back at every position where `words` has a
/// quote; the backend drops them.
///
/// Fails when the result does not line up one group per word.
pub fn reinsert_quotes(
    sentence: &str,
    words: &[String],
    mut groups: Vec<Vec<String>>,
) -> Result<Vec<Vec<String>>, TokenizerError> {
    for (idx, word) in words.iter().enumerate() {
        if word == QUOTE && idx <= groups.len() {
            groups.insert(idx, vec![QUOTE.to_string()]);
        }
    }

    if groups.len() != words.len() {
        return Err(TokenizerError::WordCountMismatch {
            sentence: sentence.to_string(),
            words: words.len(),
            phonemes: groups.len(),
        });
    }
    Ok(groups)
}

/// Concatenates per-word phoneme groups, inserting spaces between words.
///
/// No space goes before a group containing `.,!?:`, and none while a
/// quotation is open; each literal quote group toggles the open state.
pub fn join_words(groups: &[Vec<String>]) -> Vec<String> {
    let mut out = Vec::new();
    let mut quote_open = false;

    for (idx, group) in groups.iter().enumerate() {
        if is_quote(group) {
            quote_open = !quote_open;
        }
        out.extend(group.iter().cloned());

        let Some(next) = groups.get(idx + 1) else {
            continue;
        };
        if !quote_open && !has_pause_punctuation(next) {
            out.push(SPACE.to_string());
        }
    }
    out
}

fn is_quote(group: &[String]) -> bool {
    group.len() == 1 && group[0] == QUOTE
}

fn has_pause_punctuation(group: &[String]) -> bool {
    group
        .iter()
        .any(|phoneme| phoneme.chars().any(|c| NO_SPACE_BEFORE.contains(&c)))
}

impl Tokenizer for G2pIdTokenizer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn symbols(&self) -> &'static SymbolTable {
        &G2P_ID
    }

    fn options(&self) -> TokenizerOptions {
        self.options
    }

    fn normalize(&self, text: &str, language: &str) -> String {
        let text = preprocess_text(text, language, self.options.normalize_text);
        tidy_punctuation_spacing(&text)
    }

    fn encode(
        &self,
        text: &str,
        language: &str,
        _split_sentences: bool,
    ) -> Result<Encoded, TokenizerError> {
        let (phonemes, normalized_text) = self.phonemize_text(text, language)?;
        let ids = G2P_ID.phonemes_to_ids(&phonemes)?;
        Ok(Encoded {
            ids: PhonemeIds::Flat(ids),
            normalized_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn words(list: &[&str]) -> Vec<String> {
        group(list)
    }

    /// Spells each non-quote word letter by letter.
    struct Spelling;

    fn spell(c: char) -> String {
        match c {
            'g' => "ɡ".to_string(),
            'y' => "j".to_string(),
            c => c.to_string(),
        }
    }

    impl WordPhonemizer for Spelling {
        fn phonemize_words(&self, sentence: &str) -> Result<Vec<Vec<String>>, TokenizerError> {
            Ok(RuleSegmenter::new()
                .split_words(sentence)
                .into_iter()
                .filter(|w| w != QUOTE)
                .map(|w| w.to_lowercase().chars().map(spell).collect())
                .collect())
        }
    }

    fn tokenizer() -> G2pIdTokenizer {
        let backends = Backends::new().with_word_phonemizer(Arc::new(Spelling));
        G2pIdTokenizer::new(TokenizerOptions::default(), &backends)
    }

    #[test]
    fn reinserts_quotes_at_word_positions() {
        let ws = words(&["dia", "\"", "pergi", "\"", "."]);
        let groups = vec![
            group(&["d", "i", "a"]),
            group(&["p", "ə", "r", "ɡ", "i"]),
            group(&["."]),
        ];
        let out = reinsert_quotes("dia \"pergi\".", &ws, groups).unwrap();
        assert_eq!(out.len(), ws.len());
        assert_eq!(out[1], group(&["\""]));
        assert_eq!(out[3], group(&["\""]));
        assert_eq!(out[4], group(&["."]));
    }

    #[test]
    fn quote_reinsertion_matches_word_count() {
        // two quotes at every pair of positions in a five-word sentence
        for first in 0..5 {
            for second in first + 1..5 {
                let ws: Vec<String> = (0..5)
                    .map(|i| {
                        if i == first || i == second {
                            QUOTE.to_string()
                        } else {
                            "a".to_string()
                        }
                    })
                    .collect();
                let groups = vec![group(&["a"]); 3];
                let out = reinsert_quotes("", &ws, groups).unwrap();
                assert_eq!(out.len(), ws.len());
                assert_eq!(out[first], group(&["\""]));
                assert_eq!(out[second], group(&["\""]));
            }
        }
    }

    #[test]
    fn mismatch_is_an_error() {
        let ws = words(&["satu", "dua"]);
        let err = reinsert_quotes("satu dua", &ws, vec![group(&["s"])]).unwrap_err();
        match err {
            TokenizerError::WordCountMismatch { words, phonemes, .. } => {
                assert_eq!(words, 2);
                assert_eq!(phonemes, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn spaces_between_words() {
        let groups = vec![group(&["a", "k", "u"]), group(&["m", "a", "u"]), group(&["."])];
        assert_eq!(join_words(&groups), group(&["a", "k", "u", " ", "m", "a", "u", "."]));
    }

    #[test]
    fn no_space_before_pause_punctuation() {
        for p in [".", ",", "!", "?", ":"] {
            let groups = vec![group(&["j", "a"]), group(&[p]), group(&["t", "i"])];
            assert_eq!(join_words(&groups), group(&["j", "a", p, " ", "t", "i"]));
        }
        // ';' is not a pause mark here
        let groups = vec![group(&["j", "a"]), group(&[";"])];
        assert_eq!(join_words(&groups), group(&["j", "a", " ", ";"]));
    }

    #[test]
    fn no_space_inside_quotes() {
        let groups = vec![
            group(&["k", "a", "t", "a"]),
            group(&["\""]),
            group(&["h", "a"]),
            group(&["l", "o"]),
            group(&["\""]),
            group(&["l", "a", "ɡ", "i"]),
        ];
        assert_eq!(join_words(&groups).concat(), "kata \"halo\" laɡi");
    }

    #[test]
    fn encode_ignores_blank_and_boundary_options() {
        let tok = tokenizer();
        let encoded = tok.encode("Saya makan nasi.", "id", false).unwrap();
        let ids = encoded.ids.as_flat().unwrap();
        assert_eq!(tok.decode(ids).unwrap(), "saja makan nasi.");
        assert_ne!(ids[0], G2P_ID.bos_id());
        assert!(!ids.contains(&G2P_ID.pad_id()));
    }

    #[test]
    fn encode_multiple_sentences_with_quotes() {
        let tok = tokenizer();
        let encoded = tok
            .encode("Dia  berkata \" halo \" . Lalu pergi!", "id", true)
            .unwrap();
        assert_eq!(encoded.normalized_text, "Dia berkata\"halo\". Lalu pergi!");
        let ids = encoded.ids.as_flat().unwrap();
        assert_eq!(tok.decode(ids).unwrap(), "dia berkata \"halo\".lalu perɡi!");
    }

    #[test]
    fn quotation_opening_a_sentence() {
        let tok = tokenizer();
        let encoded = tok.encode("Saya pergi. \"Halo\" saya.", "id", false).unwrap();
        assert_eq!(encoded.normalized_text, "Saya pergi.\"Halo\"saya.");
        let ids = encoded.ids.as_flat().unwrap();
        assert_eq!(tok.decode(ids).unwrap(), "saja perɡi.\"halo\" saja.");
    }

    #[test]
    fn missing_backend() {
        let tok = G2pIdTokenizer::new(TokenizerOptions::default(), &Backends::new());
        let err = tok.encode("halo", "id", false).unwrap_err();
        assert!(matches!(err, TokenizerError::BackendUnavailable { backend: "g2p_id", .. }));
    }
}
