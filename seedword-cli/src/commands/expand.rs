//! Prefix expansion command.

use clap::Args;
use colored::Colorize;
use seedword::mnemonic;

use super::WordListArgs;

/// Expand 4-letter word prefixes to full words.
#[derive(Args)]
pub struct ExpandCommand {
    /// Mnemonic phrase, possibly with abbreviated words.
    #[arg(short, long)]
    mnemonic: String,

    #[command(flatten)]
    words: WordListArgs,
}

impl ExpandCommand {
    /// Execute the expand command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let word_list = self.words.load()?;
        let expanded = mnemonic::expand_in(&word_list, &self.mnemonic)?;
        let valid = mnemonic::is_valid_in(&word_list, &expanded);
        print_expanded(&self.mnemonic, &expanded, valid);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_expanded(input: &str, expanded: &str, valid: bool) {
    let status = if valid { "valid".green() } else { "invalid".yellow() };

    println!();
    println!("      {}     {}", "Input".cyan().bold(), input);
    println!("      {}  {}", "Expanded".cyan().bold(), expanded.green());
    println!("      {}  {}", "Checksum".cyan().bold(), status);
    println!();
}
