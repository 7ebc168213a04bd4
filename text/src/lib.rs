//! Text front end for phoneme-based speech synthesis.
//!
//! This crate provides:
//! - [`SymbolTable`]: the fixed phoneme vocabularies ([`IPA`], [`GRUUT`],
//!   [`GRUUT_SW`], [`G2P_ID`]) mapping phonemes to model IDs
//! - [`preprocess_text`]: punctuation and whitespace cleanup
//! - [`Tokenizer`]: text → phoneme IDs for one scheme
//! - [`TokenizerRegistry`]: scheme name → tokenizer factory
//! - [`Backends`]: the G2P engines tokenizers delegate to, with
//!   [`Lexicon`] as a dictionary implementation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use optispeech_text::{Backends, Lexicon, TokenizerOptions, new_tokenizer};
//!
//! let lexicon = Arc::new(Lexicon::from_file("en.tsv")?);
//! let backends = Backends::new().with_word_analyzer(lexicon);
//!
//! let tokenizer = new_tokenizer("gruut", TokenizerOptions::default(), &backends)?;
//! let encoded = tokenizer.encode("Hello, world!", "en-us", false)?;
//! ```

mod backend;
mod error;
mod lexicon;
mod normalize;
mod registry;
mod segment;
mod symbols;
mod tokenizer;
mod tokenizers;

pub use backend::*;
pub use error::*;
pub use lexicon::*;
pub use normalize::*;
pub use registry::*;
pub use segment::RuleSegmenter;
pub use symbols::*;
pub use tokenizer::*;
pub use tokenizers::*;
