//! BIP-39 mnemonic decoding.
//!
//! [`decode_in`] recovers the entropy a mnemonic was generated from and
//! verifies its checksum:
//!
//! 1. the sentence is split into 12, 15, 18, 21 or 24 words,
//! 2. each word is mapped to its 11-bit index in the word list,
//! 3. the indices are packed into one big integer, first word most significant,
//! 4. the trailing `n / 3` bits are split off as the checksum,
//! 5. the checksum is compared against the SHA-256 of the entropy.
//!
//! This module also provides prefix-based word expansion, relying on the
//! property of the BIP-39 lists that every word is uniquely identified by
//! its first 4 characters.
//!
//! # Example
//!
//! ```
//! use seedword::mnemonic;
//!
//! let entropy = mnemonic::decode(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! )?;
//! assert_eq!(entropy.as_slice(), &[0u8; 16]);
//!
//! let expanded = mnemonic::expand("aban aban aban aban aban aban aban aban aban aban aban abou")?;
//! assert_eq!(
//!     expanded,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! # Ok::<(), seedword::Error>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::bits::{self, Split};
use crate::checksum;
use crate::phrase::{self, WordCount};
use crate::wordlist::WordList;
use crate::{Error, Result};

/// Minimum prefix length required for unambiguous word expansion.
///
/// BIP-39 English wordlist guarantees uniqueness at 4 characters.
pub const MIN_PREFIX_LEN: usize = 4;

/// Decode a mnemonic against the English word list.
///
/// See [`decode_in`] for details.
///
/// # Errors
///
/// Same as [`decode_in`].
#[cfg(feature = "std")]
pub fn decode(sentence: &str) -> Result<Zeroizing<Vec<u8>>> {
    decode_in(WordList::english(), sentence)
}

/// Decode a mnemonic into the entropy it encodes.
///
/// Returns the entropy bytes (16, 20, 24, 28 or 32 bytes for 12 to 24 words)
/// once the checksum has been verified.
///
/// # Errors
///
/// - [`Error::InvalidMnemonic`] if the word count is not 12, 15, 18, 21 or 24.
/// - [`Error::WordNotFound`] if a word is missing from `word_list`.
/// - [`Error::ChecksumIncorrect`] if the checksum does not match the entropy.
pub fn decode_in(word_list: &WordList, sentence: &str) -> Result<Zeroizing<Vec<u8>>> {
    let (split, _) = decode_split(word_list, sentence)?;
    Ok(split.entropy)
}

/// Decode a mnemonic and return the entropy followed by one checksum byte.
///
/// The checksum byte holds the `n / 3` checksum bits right-aligned. The
/// checksum is verified first, as in [`decode_in`].
///
/// # Errors
///
/// Same as [`decode_in`].
pub fn decode_with_checksum_in(
    word_list: &WordList,
    sentence: &str,
) -> Result<Zeroizing<Vec<u8>>> {
    let (split, count) = decode_split(word_list, sentence)?;
    let mut bytes = Zeroizing::new(Vec::with_capacity(count.entropy_bytes() + 1));
    bytes.extend_from_slice(&split.entropy);
    bytes.push(split.checksum);
    Ok(bytes)
}

/// Check a mnemonic against the English word list.
#[cfg(feature = "std")]
pub fn is_valid(sentence: &str) -> bool {
    is_valid_in(WordList::english(), sentence)
}

/// Check that a mnemonic has a valid length, known words and a matching
/// checksum.
pub fn is_valid_in(word_list: &WordList, sentence: &str) -> bool {
    decode_split(word_list, sentence).is_ok()
}

fn decode_split(word_list: &WordList, sentence: &str) -> Result<(Split, WordCount)> {
    let (words, count) = phrase::split_words(sentence).map_err(|err| {
        tracing::debug!(%err, "rejected mnemonic structure");
        err
    })?;
    let indices = Zeroizing::new(word_list.indices(&words)?);

    let split = bits::split(bits::pack(&indices), count)?;
    checksum::verify(&split.entropy, count, split.checksum)?;

    tracing::trace!(words = count.words(), "mnemonic decoded");
    Ok((split, count))
}

/// Expand abbreviated words in a mnemonic phrase to their full English form.
///
/// See [`expand_in`] for details.
///
/// # Errors
///
/// Same as [`expand_in`].
#[cfg(feature = "std")]
pub fn expand(phrase: &str) -> Result<String> {
    expand_in(WordList::english(), phrase)
}

/// Expand abbreviated words using the given word list.
///
/// Each whitespace-separated token is matched against the list:
/// - If the token is an exact match, it is kept as-is.
/// - If the token is a prefix (>= 4 characters) that uniquely identifies
///   a single word, it is expanded to that word.
/// - Otherwise, an error is returned.
///
/// The word count and checksum are not checked; pass the result to
/// [`decode_in`] for that.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if a token does not match any word.
/// Returns [`Error::AmbiguousPrefix`] if a token matches multiple words.
/// Returns [`Error::PrefixTooShort`] if a non-exact token has fewer than 4 characters.
pub fn expand_in(word_list: &WordList, phrase: &str) -> Result<String> {
    let mut result = String::new();
    for (i, token) in phrase.split_whitespace().enumerate() {
        let word = resolve_token(word_list, token)?;
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    Ok(result)
}

/// Resolve a single token to the full word it is or abbreviates.
fn resolve_token<'a>(word_list: &'a WordList, token: &str) -> Result<&'a str> {
    if let Some(index) = word_list.index_of(token) {
        if let Some(word) = word_list.word(usize::from(index)) {
            return Ok(word);
        }
    }

    if token.chars().count() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: String::from(token),
            min_len: MIN_PREFIX_LEN,
        });
    }

    let matches: Vec<&str> = word_list
        .iter()
        .filter(|word| word.starts_with(token))
        .collect();

    match matches.as_slice() {
        [] => Err(Error::UnknownPrefix(String::from(token))),
        [word] => Ok(*word),
        _ => Err(Error::AmbiguousPrefix {
            prefix: String::from(token),
            candidates: matches.iter().map(|w| String::from(*w)).collect(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;
    use bip39::{Language, Mnemonic};

    const TEST_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_15: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address";
    const TEST_18: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent";
    const TEST_21: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon admit";
    const TEST_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    // Entropy and mnemonic pairs from the BIP-39 reference vectors.
    const VECTORS: [(&str, &str); 9] = [
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        ),
        (
            "80808080808080808080808080808080",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        ),
        (
            "ffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        ),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal will",
        ),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth title",
        ),
        (
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        ),
        (
            "9e885d952ad362caeb4efe34a8e91bd2",
            "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        ),
        (
            "0460ef47585604c5660618db2e6a7e7f",
            "afford alter spike radar gate glance object seek swamp infant panel yellow",
        ),
        (
            "f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f",
            "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold",
        ),
    ];

    fn english() -> WordList {
        WordList::from_language(Language::English)
    }

    fn encode(entropy: &[u8]) -> String {
        Mnemonic::from_entropy_in(Language::English, entropy)
            .unwrap()
            .to_string()
    }

    #[test]
    fn decodes_all_zero_entropy_for_every_length() {
        let list = english();
        for (phrase, len) in [(TEST_12, 16), (TEST_15, 20), (TEST_18, 24), (TEST_21, 28), (TEST_24, 32)] {
            let entropy = decode_in(&list, phrase).unwrap();
            assert_eq!(entropy.as_slice(), vec![0u8; len].as_slice());
        }
    }

    #[test]
    fn decodes_reference_vectors() {
        let list = english();
        for (entropy_hex, phrase) in VECTORS {
            let entropy = decode_in(&list, phrase).unwrap();
            assert_eq!(hex::encode(entropy.as_slice()), entropy_hex, "{phrase}");
        }
    }

    #[test]
    fn preserves_leading_zero_bytes() {
        let list = english();
        let mut original = [0u8; 16];
        original[3] = 0x01;
        original[15] = 0xee;
        let entropy = decode_in(&list, &encode(&original)).unwrap();
        assert_eq!(entropy.as_slice(), &original);
    }

    #[test]
    fn twenty_four_words_compare_the_whole_hash_byte() {
        let list = english();
        // "art" is index 102 = 0x66, the first byte of sha256(0^32).
        assert!(decode_in(&list, TEST_24).is_ok());
        // Changing only the lowest checksum bit must be detected.
        let next = list.word(usize::from(list.index_of("art").unwrap()) + 1).unwrap();
        let flipped = TEST_24.replace(" art", &format!(" {next}"));
        assert_eq!(decode_in(&list, &flipped), Err(Error::ChecksumIncorrect));
    }

    #[test]
    fn rejects_bad_checksum() {
        let list = english();
        let phrase = TEST_12.replace(" about", " abandon");
        assert_eq!(decode_in(&list, &phrase), Err(Error::ChecksumIncorrect));
    }

    #[test]
    fn rejects_unknown_word() {
        let list = english();
        let phrase = TEST_12.replacen("abandon", "bitcoin", 1);
        assert_eq!(
            decode_in(&list, &phrase),
            Err(Error::WordNotFound {
                word: String::from("bitcoin"),
                position: 0,
            })
        );
    }

    #[test]
    fn rejects_thirteen_words() {
        let list = english();
        let phrase = format!("{TEST_12} abandon");
        assert_eq!(
            decode_in(&list, &phrase),
            Err(Error::InvalidMnemonic { word_count: 13 })
        );
    }

    #[test]
    fn rejects_nine_and_twenty_seven_words() {
        let list = english();
        let nine = vec!["abandon"; 9].join(" ");
        let twenty_seven = vec!["abandon"; 27].join(" ");
        assert_eq!(
            decode_in(&list, &nine),
            Err(Error::InvalidMnemonic { word_count: 9 })
        );
        assert_eq!(
            decode_in(&list, &twenty_seven),
            Err(Error::InvalidMnemonic { word_count: 27 })
        );
    }

    #[test]
    fn word_count_is_checked_before_words() {
        let list = english();
        assert_eq!(
            decode_in(&list, "not a mnemonic"),
            Err(Error::InvalidMnemonic { word_count: 3 })
        );
    }

    #[test]
    fn tolerates_irregular_whitespace() {
        let list = english();
        let messy = format!("  {}  ", TEST_12.replace(' ', " \t "));
        assert_eq!(decode_in(&list, &messy).unwrap().as_slice(), &[0u8; 16]);
    }

    #[test]
    fn decodes_against_custom_word_list() {
        let english = english();
        let custom =
            WordList::new((0..crate::wordlist::WORDLIST_LEN).map(|i| format!("w{i:04}"))).unwrap();
        let (entropy_hex, phrase) = VECTORS[6];
        let translated: Vec<String> = phrase
            .split_whitespace()
            .map(|w| format!("w{:04}", english.index_of(w).unwrap()))
            .collect();

        let entropy = decode_in(&custom, &translated.join(" ")).unwrap();
        assert_eq!(hex::encode(entropy.as_slice()), entropy_hex);
        assert!(matches!(
            decode_in(&custom, phrase),
            Err(Error::WordNotFound { position: 0, .. })
        ));
    }

    #[test]
    fn with_checksum_appends_checksum_byte() {
        let list = english();
        let bytes = decode_with_checksum_in(&list, TEST_12).unwrap();
        assert_eq!(bytes.len(), 17);
        assert_eq!(&bytes[..16], &[0u8; 16]);
        assert_eq!(bytes[16], 3);

        let bytes = decode_with_checksum_in(&list, TEST_24).unwrap();
        assert_eq!(bytes.len(), 33);
        assert_eq!(bytes[32], 0x66);
    }

    #[test]
    fn validity_matches_decoding() {
        let list = english();
        assert!(is_valid_in(&list, TEST_12));
        assert!(is_valid_in(&list, VECTORS[8].1));
        assert!(!is_valid_in(&list, "abandon"));
        assert!(!is_valid_in(&list, &TEST_12.replace(" about", " abandon")));
    }

    #[cfg(feature = "std")]
    #[test]
    fn english_shortcuts() {
        assert_eq!(decode(TEST_21).unwrap().len(), 28);
        assert!(is_valid(TEST_18));
        assert_eq!(
            expand("aban aban aban aban aban aban aban aban aban aban aban abou").unwrap(),
            TEST_12
        );
    }

    #[test]
    fn full_words_unchanged() {
        let result = expand_in(&english(), TEST_12).unwrap();
        assert_eq!(result, TEST_12);
    }

    #[test]
    fn mixed_full_and_abbreviated() {
        let input = "abandon aban abandon aban abandon aban abandon aban abandon aban abandon about";
        let result = expand_in(&english(), input).unwrap();
        assert_eq!(result, TEST_12);
    }

    #[test]
    fn longer_prefix_works() {
        let input = "abando abando abando abando abando abando abando abando abando abando abando about";
        let result = expand_in(&english(), input).unwrap();
        assert_eq!(result, TEST_12);
    }

    #[test]
    fn prefix_too_short_rejected() {
        let result = expand_in(&english(), "aba aba aba aba aba aba aba aba aba aba aba aba");
        assert!(matches!(result, Err(Error::PrefixTooShort { min_len: 4, .. })));
    }

    #[test]
    fn unknown_prefix_rejected() {
        let result = expand_in(&english(), "aban zzzz");
        assert_eq!(result, Err(Error::UnknownPrefix(String::from("zzzz"))));
    }

    #[test]
    fn ambiguous_prefix_rejected() {
        // Synthetic list where "w000" prefixes w0000..w0009.
        let list =
            WordList::new((0..crate::wordlist::WORDLIST_LEN).map(|i| format!("w{i:04}"))).unwrap();
        let result = expand_in(&list, "w000");
        match result {
            Err(Error::AmbiguousPrefix { prefix, candidates }) => {
                assert_eq!(prefix, "w000");
                assert_eq!(candidates.len(), 10);
            }
            other => panic!("expected AmbiguousPrefix, got {other:?}"),
        }
    }

    #[test]
    fn exact_short_words_accepted() {
        let result = expand_in(&english(), "zoo art ice").unwrap();
        assert_eq!(result, "zoo art ice");
    }

    #[test]
    fn expanded_phrase_decodes() {
        let list = english();
        let expanded = expand_in(&list, "ozon dril grab fibe curt grac pudd than crui elde eigh picn").unwrap();
        let entropy = decode_in(&list, &expanded).unwrap();
        assert_eq!(hex::encode(entropy.as_slice()), VECTORS[6].0);
    }
}
