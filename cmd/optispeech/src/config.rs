//! Configuration for the CLI.
//!
//! Stored in ~/.optispeech/config.yaml. Every field is optional; command
//! line flags take precedence.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use optispeech_text::TokenizerOptions;
use serde::{Deserialize, Serialize};

/// Default configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".optispeech";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Scheme used when neither the flag nor the config names one.
pub const DEFAULT_SCHEME: &str = "gruut";
/// Language used when neither the flag nor the config names one.
pub const DEFAULT_LANGUAGE: &str = "en-us";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tokenizer scheme name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Language passed to the phonemizer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Pronunciation dictionary (TSV) backing the phonemizers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,

    /// Split IPA output per sentence; unset uses the scheme default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_sentences: Option<bool>,

    /// Tokenizer construction options.
    pub tokenizer: TokenizerOptions,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

impl Config {
    /// Gets the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// Loads the configuration; a missing file yields the defaults.
///
/// Relative lexicon paths are resolved against the config file's directory.
pub fn load_config(custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path()
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    let mut cfg: Config = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("read config {}", config_path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", config_path.display()))?
    } else if custom_path.is_some() {
        anyhow::bail!("config file {} not found", config_path.display());
    } else {
        Config::default()
    };

    if let (Some(lexicon), Some(dir)) = (&cfg.lexicon, config_path.parent()) {
        if lexicon.is_relative() {
            cfg.lexicon = Some(dir.join(lexicon));
        }
    }
    cfg.config_path = config_path;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_custom_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(load_config(path.to_str()).is_err());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "scheme: ipa\nlexicon: en.tsv\ntokenizer:\n  add_blank: false\n",
        )
        .unwrap();

        let cfg = load_config(path.to_str()).unwrap();
        assert_eq!(cfg.scheme(), "ipa");
        assert_eq!(cfg.language(), DEFAULT_LANGUAGE);
        assert_eq!(cfg.lexicon, Some(dir.path().join("en.tsv")));
        assert!(!cfg.tokenizer.add_blank);
        assert!(cfg.tokenizer.add_bos_eos);
        assert!(cfg.split_sentences.is_none());
        assert_eq!(cfg.path(), path.as_path());
    }

    #[test]
    fn empty_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.scheme(), DEFAULT_SCHEME);
        assert_eq!(cfg.tokenizer, TokenizerOptions::default());
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        assert!(!yaml.contains("scheme"));
    }

    #[test]
    fn invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "tokenizer: [1, 2").unwrap();
        let err = load_config(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }
}
