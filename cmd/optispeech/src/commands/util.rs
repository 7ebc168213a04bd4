//! Utility functions for CLI commands.

use std::sync::Arc;

use anyhow::Context as _;
use optispeech_text::{Backends, IpaTokenizer, Lexicon};

use crate::Cli;
use crate::config::{Config, load_config};

/// Gets the configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(cli.config.as_deref())
}

/// Builds the backends for `scheme` from an optional dictionary file.
///
/// The dictionary emits character-level output for the IPA scheme.
pub fn load_backends(lexicon: Option<&std::path::Path>, scheme: &str) -> anyhow::Result<Backends> {
    let Some(path) = lexicon else {
        return Ok(Backends::new());
    };
    let lexicon = Lexicon::from_file(path)
        .with_context(|| format!("load lexicon {}", path.display()))?
        .with_char_level(scheme == IpaTokenizer::NAME);
    let lexicon = Arc::new(lexicon);

    Ok(Backends::new()
        .with_word_analyzer(lexicon.clone())
        .with_sentence_phonemizer(lexicon.clone())
        .with_word_phonemizer(lexicon))
}

/// Prints a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Joins IDs with single spaces.
pub fn format_ids(ids: &[i64]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn format_ids_joins() {
        assert_eq!(format_ids(&[1, 0, 42]), "1 0 42");
        assert_eq!(format_ids(&[]), "");
    }

    #[test]
    fn backends_from_lexicon() {
        assert!(load_backends(None, "gruut").unwrap().word_analyzer.is_none());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hi\th ˈaɪ").unwrap();
        let backends = load_backends(Some(file.path()), "ipa").unwrap();
        let sentences = backends
            .sentence_phonemizer
            .as_ref()
            .unwrap()
            .phonemize("hi", "en-us")
            .unwrap();
        assert_eq!(sentences, vec![vec!["h", "ˈ", "a", "ɪ"]]);
    }
}
