//! CLI command definitions and handlers.

mod check;
mod decode;
mod expand;

pub use check::CheckCommand;
pub use decode::DecodeCommand;
pub use expand::ExpandCommand;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use seedword::{Language, WordList};
use tracing::debug;

/// Seedword - decode and check BIP-39 mnemonics.
#[derive(Parser)]
#[command(name = "seedword")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Recover the entropy encoded by a mnemonic.
    Decode(DecodeCommand),

    /// Check a mnemonic's length, words and checksum.
    #[command(alias = "validate")]
    Check(CheckCommand),

    /// Expand 4-letter word prefixes to full words.
    Expand(ExpandCommand),
}

/// Word list selection shared by all commands.
#[derive(Args)]
pub struct WordListArgs {
    /// Newline-separated word list file (2048 words).
    #[arg(short, long, conflicts_with = "language")]
    wordlist: Option<PathBuf>,

    /// Bundled word list language.
    #[arg(short, long, value_enum, default_value = "english")]
    language: CliLanguage,
}

impl WordListArgs {
    /// Load the selected word list.
    pub fn load(&self) -> Result<WordList, Box<dyn std::error::Error>> {
        match &self.wordlist {
            Some(path) => {
                debug!(path = %path.display(), "loading word list file");
                let text = std::fs::read_to_string(path)?;
                Ok(WordList::from_text(&text)?)
            }
            None => Ok(WordList::from_language(self.language.into())),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliLanguage {
    English,
    SimplifiedChinese,
    TraditionalChinese,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Spanish,
}

impl From<CliLanguage> for Language {
    fn from(val: CliLanguage) -> Self {
        match val {
            CliLanguage::English => Self::English,
            CliLanguage::SimplifiedChinese => Self::SimplifiedChinese,
            CliLanguage::TraditionalChinese => Self::TraditionalChinese,
            CliLanguage::Czech => Self::Czech,
            CliLanguage::French => Self::French,
            CliLanguage::Italian => Self::Italian,
            CliLanguage::Japanese => Self::Japanese,
            CliLanguage::Korean => Self::Korean,
            CliLanguage::Spanish => Self::Spanish,
        }
    }
}
