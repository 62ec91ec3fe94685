//! Mnemonic validation command.

use clap::Args;
use colored::Colorize;
use seedword::mnemonic;

use super::WordListArgs;

/// Check a mnemonic's length, words and checksum.
#[derive(Args)]
pub struct CheckCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: String,

    #[command(flatten)]
    words: WordListArgs,
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// An invalid mnemonic is reported and returned as the command error.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let word_list = self.words.load()?;
        let words = self.mnemonic.split_whitespace().count();
        match mnemonic::decode_in(&word_list, &self.mnemonic) {
            Ok(_) => {
                print_status(words, &"valid".green().bold().to_string());
                Ok(())
            }
            Err(err) => {
                print_status(words, &"invalid".red().bold().to_string());
                Err(err.into())
            }
        }
    }
}

#[rustfmt::skip]
fn print_status(words: usize, status: &str) {
    println!();
    println!("      {}   {words} words", "Words".cyan().bold());
    println!("      {}  {status}", "Status".cyan().bold());
    println!();
}
