//! Builtin tokenizer schemes.

mod g2p_id;
mod gruut;
mod ipa;

pub use g2p_id::{G2pIdTokenizer, join_words, reinsert_quotes};
pub use gruut::{GruutTokenizer, sentence_phonemes};
pub use ipa::IpaTokenizer;

use crate::backend::Backends;
use crate::registry::TokenizerFactory;
use crate::tokenizer::{Tokenizer, TokenizerOptions};

fn gruut(options: TokenizerOptions, backends: &Backends) -> Box<dyn Tokenizer> {
    Box::new(GruutTokenizer::new(options, backends))
}

fn gruut_sw(options: TokenizerOptions, backends: &Backends) -> Box<dyn Tokenizer> {
    Box::new(GruutTokenizer::swahili(options, backends))
}

fn g2p_id(options: TokenizerOptions, backends: &Backends) -> Box<dyn Tokenizer> {
    Box::new(G2pIdTokenizer::new(options, backends))
}

fn ipa(options: TokenizerOptions, backends: &Backends) -> Box<dyn Tokenizer> {
    Box::new(IpaTokenizer::new(options, backends))
}

/// Name and factory of every builtin scheme, in registration order.
pub fn builtin_factories() -> [(&'static str, TokenizerFactory); 4] {
    [
        (GruutTokenizer::NAME, gruut as TokenizerFactory),
        (GruutTokenizer::SWAHILI, gruut_sw as TokenizerFactory),
        (G2pIdTokenizer::NAME, g2p_id as TokenizerFactory),
        (IpaTokenizer::NAME, ipa as TokenizerFactory),
    ]
}
