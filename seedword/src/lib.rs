//! # Seedword - BIP-39 Mnemonic Decoding
//!
//! A small, `no_std` compatible library that turns a BIP-39 mnemonic
//! sentence back into the entropy it was generated from, verifying the
//! embedded checksum on the way.
//!
//! ## Features
//!
//! - **no_std compatible**: only `alloc` is required
//! - **Any word list**: the bundled `bip39` lists or a caller-supplied one
//! - **Exact bit accounting**: big-integer reconstruction for 12 to 24 words
//! - **Zeroized output**: recovered entropy is wiped on drop
//!
//! ## Cargo features
//!
//! - `std` (default): `std::error::Error`, the shared English word list and
//!   the English shortcuts [`mnemonic::decode`], [`mnemonic::is_valid`] and
//!   [`mnemonic::expand`]
//!
//! ## Usage
//!
//! ```
//! use seedword::{mnemonic, Error, Language, WordList};
//!
//! let words = WordList::from_language(Language::English);
//!
//! let entropy = mnemonic::decode_in(
//!     &words,
//!     "legal winner thank year wave sausage worth useful legal winner thank yellow",
//! )?;
//! assert_eq!(entropy.as_slice(), &[0x7fu8; 16]);
//!
//! let err = mnemonic::decode_in(
//!     &words,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon",
//! );
//! assert_eq!(err, Err(Error::ChecksumIncorrect));
//! # Ok::<(), Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::cast_possible_truncation,
    clippy::cast_lossless
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bits;
pub mod checksum;
pub mod error;
pub mod hash;
pub mod mnemonic;
pub mod phrase;
pub mod wordlist;

pub use bip39::Language;
pub use error::{Error, Result};
pub use phrase::WordCount;
pub use wordlist::WordList;
