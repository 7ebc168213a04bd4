use clap::Args;
use optispeech_text::{Backends, SymbolTable, TokenizerOptions, new_tokenizer, tokenizer_names};
use serde::Serialize;

use super::{get_config, print_json};
use crate::Cli;

/// Print the symbol table of a scheme.
#[derive(Args)]
pub struct SymbolsCommand {
    /// Scheme name (default from config)
    pub scheme: Option<String>,
}

/// List registered tokenizer schemes.
#[derive(Args)]
pub struct SchemesCommand {}

#[derive(Debug, Serialize)]
struct SymbolEntry {
    id: i64,
    symbol: &'static str,
}

#[derive(Debug, Serialize)]
struct SchemeEntry {
    name: String,
    table: &'static str,
    symbols: usize,
}

fn table_of(scheme: &str) -> anyhow::Result<&'static SymbolTable> {
    let tokenizer = new_tokenizer(scheme, TokenizerOptions::default(), &Backends::new())?;
    Ok(tokenizer.symbols())
}

impl SymbolsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let scheme = self.scheme.as_deref().unwrap_or(cfg.scheme());
        let table = table_of(scheme)?;

        let entries: Vec<SymbolEntry> = table
            .symbols()
            .iter()
            .enumerate()
            .map(|(id, &symbol)| SymbolEntry {
                id: id as i64,
                symbol,
            })
            .collect();

        if cli.json {
            return print_json(&entries);
        }
        for entry in &entries {
            println!("{}\t{:?}", entry.id, entry.symbol);
        }
        Ok(())
    }
}

impl SchemesCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let schemes = tokenizer_names()
            .into_iter()
            .map(|name| {
                let table = table_of(&name)?;
                Ok(SchemeEntry {
                    name,
                    table: table.name(),
                    symbols: table.len(),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if cli.json {
            return print_json(&schemes);
        }
        for scheme in &schemes {
            println!("{}\t{}\t{}", scheme.name, scheme.table, scheme.symbols);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_by_scheme() {
        assert_eq!(table_of("gruut_sw").unwrap().len(), 52);
        assert_eq!(table_of("ipa").unwrap().name(), "ipa");
        assert!(table_of("klingon").is_err());
    }
}
