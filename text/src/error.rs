use thiserror::Error;

/// Errors returned by normalization, phonemization and ID mapping.
#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("tokenizer `{0}` does not exist")]
    UnknownTokenizer(String),

    #[error("phonemizer backend `{backend}` is not available: {hint}")]
    BackendUnavailable {
        backend: &'static str,
        hint: &'static str,
    },

    #[error(
        "word/phoneme count mismatch in {sentence:?}: {words} words, {phonemes} phoneme groups"
    )]
    WordCountMismatch {
        sentence: String,
        words: usize,
        phonemes: usize,
    },

    #[error("symbol {symbol:?} not in `{table}` table")]
    UnknownSymbol { table: &'static str, symbol: String },

    #[error("id {id} not in `{table}` table")]
    UnknownId { table: &'static str, id: i64 },

    #[error("phonemizer backend: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
