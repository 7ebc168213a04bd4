use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use optispeech_text::{PhonemeIds, Tokenizer, new_tokenizer};
use serde::Serialize;
use tracing::debug;

use super::{format_ids, get_config, load_backends, print_json};
use crate::Cli;

/// Normalize text and map it to phoneme IDs.
#[derive(Args)]
pub struct TokenizeCommand {
    /// Tokenizer scheme (gruut, gruut_sw, g2p_id, ipa, ...)
    #[arg(short = 's', long)]
    pub scheme: Option<String>,

    /// Phonemizer language
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Pronunciation dictionary (word<TAB>phonemes)
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Return one ID sequence per sentence
    #[arg(long, overrides_with = "no_split")]
    pub split: bool,

    /// Return a single ID sequence
    #[arg(long, overrides_with = "split")]
    pub no_split: bool,

    /// Text to tokenize
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TokenizeOutput {
    scheme: String,
    language: String,
    normalized_text: String,
    ids: PhonemeIds,
    phonemes: Vec<String>,
}

impl TokenizeCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let scheme = self.scheme.as_deref().unwrap_or(cfg.scheme());
        let language = self.language.as_deref().unwrap_or(cfg.language());
        let lexicon = self.lexicon.as_deref().or(cfg.lexicon.as_deref());
        let split = self.split_flag().or(cfg.split_sentences);

        let backends = load_backends(lexicon, scheme)?;
        let tokenizer = new_tokenizer(scheme, cfg.tokenizer, &backends)?;
        debug!(scheme, language, ?split, "tokenize");

        let text = self.text.join(" ");
        let encoded = match split {
            Some(split) => tokenizer.encode(&text, language, split),
            None => tokenizer.encode_default(&text, language),
        }
        .with_context(|| format!("tokenize with `{scheme}`"))?;

        let phonemes = decode_all(tokenizer.as_ref(), &encoded.ids)?;
        let output = TokenizeOutput {
            scheme: scheme.to_string(),
            language: language.to_string(),
            normalized_text: encoded.normalized_text,
            ids: encoded.ids,
            phonemes,
        };

        if cli.json {
            return print_json(&output);
        }
        println!("{}", output.normalized_text);
        let sequences: Vec<&[i64]> = match &output.ids {
            PhonemeIds::Flat(ids) => vec![ids.as_slice()],
            PhonemeIds::Sentences(sentences) => sentences.iter().map(Vec::as_slice).collect(),
        };
        for (ids, phonemes) in sequences.iter().zip(&output.phonemes) {
            println!("{phonemes}");
            println!("{}", format_ids(ids));
        }
        Ok(())
    }

    fn split_flag(&self) -> Option<bool> {
        match (self.split, self.no_split) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn decode_all(tokenizer: &dyn Tokenizer, ids: &PhonemeIds) -> anyhow::Result<Vec<String>> {
    let decoded = match ids {
        PhonemeIds::Flat(ids) => vec![tokenizer.decode(ids)?],
        PhonemeIds::Sentences(sentences) => sentences
            .iter()
            .map(|ids| tokenizer.decode(ids))
            .collect::<Result<_, _>>()?,
    };
    Ok(decoded)
}
