//! OptiSpeech CLI - turns text into the phoneme IDs an OptiSpeech model consumes.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{SchemesCommand, SymbolsCommand, TokenizeCommand, VadCommand};

/// OptiSpeech CLI - text front end for phoneme-based speech synthesis.
///
/// This tool lets you:
///   - normalize and tokenize text with any registered scheme
///   - inspect the phoneme tables behind each scheme
///   - score raw 16 kHz audio for voice activity
///
/// Defaults are read from ~/.optispeech/config.yaml.
#[derive(Parser)]
#[command(name = "optispeech")]
#[command(about = "OptiSpeech text front end tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.optispeech/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize text and map it to phoneme IDs
    Tokenize(TokenizeCommand),
    /// Print the symbol table of a scheme
    Symbols(SymbolsCommand),
    /// List registered tokenizer schemes
    Schemes(SchemesCommand),
    /// Score raw PCM16 audio for voice activity
    Vad(VadCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Tokenize(cmd) => cmd.run(&cli),
        Commands::Symbols(cmd) => cmd.run(&cli),
        Commands::Schemes(cmd) => cmd.run(&cli),
        Commands::Vad(cmd) => cmd.run(&cli),
    }
}
