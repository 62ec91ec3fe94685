//! Mnemonic decoding command.

use clap::Args;
use colored::Colorize;
use seedword::mnemonic;
use zeroize::Zeroizing;

use super::WordListArgs;

/// Recover the entropy encoded by a mnemonic.
#[derive(Args)]
pub struct DecodeCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: String,

    /// Append the checksum byte to the output.
    #[arg(short, long)]
    checksum: bool,

    #[command(flatten)]
    words: WordListArgs,
}

impl DecodeCommand {
    /// Execute the decode command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let word_list = self.words.load()?;
        let bytes = if self.checksum {
            mnemonic::decode_with_checksum_in(&word_list, &self.mnemonic)?
        } else {
            mnemonic::decode_in(&word_list, &self.mnemonic)?
        };
        let hex = Zeroizing::new(hex::encode(bytes.as_slice()));
        print_entropy(&self.mnemonic, &hex, self.checksum);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_entropy(phrase: &str, hex: &str, with_checksum: bool) {
    let words = phrase.split_whitespace().count();
    let label = if with_checksum { "Entropy+CS" } else { "Entropy" };

    println!();
    println!("      {}       {words} words", "Words".cyan().bold());
    println!("      {}  {}", format!("{label:<10}").cyan().bold(), hex.green());
    println!();
}
