//! Running-key polyalphabetic cipher over a configurable alphabet.
//!
//! A keyword is repeated cyclically across the input to form a key-stream;
//! each input symbol is shifted by the alphabet position of its key-stream
//! symbol. Decryption runs the same traversal with the direction negated.
//! The key-stream depends only on position index and keyword - never on the
//! text's content - which is what makes decryption regenerate the exact
//! stream used at encryption time.

use crate::alphabet::Alphabet;
use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};
use crate::modular;

/// An immutable running-key cipher configuration: a non-empty keyword and an
/// alphabet.
///
/// Keyword symbols need not belong to the alphabet; a key-stream symbol whose
/// position lookup fails leaves that input position unshifted, the same
/// pass-through policy applied to input symbols. Lookups are exact-match and
/// case-sensitive; normalize case before constructing if needed.
#[derive(Debug, Clone)]
pub struct RunningKeyCipher {
    key: Vec<char>,
    alphabet: Alphabet,
}

impl RunningKeyCipher {
    /// Creates a cipher with the given keyword and alphabet.
    ///
    /// Fails with `EmptyKey` if the keyword has no symbols: cyclic key-stream
    /// indexing is undefined over an empty keyword.
    pub fn new(key: &str, alphabet: Alphabet) -> Result<Self> {
        let key: Vec<char> = key.chars().collect();
        if key.is_empty() {
            return Err(CipherboxError::with_kind(
                ErrorCategory::User,
                ErrorKind::EmptyKey,
                "running-key keyword must contain at least one symbol",
            ));
        }
        Ok(Self { key, alphabet })
    }

    /// Creates a cipher with the given keyword over the default running-key
    /// alphabet (the shift-cipher default plus a trailing space).
    pub fn with_key(key: &str) -> Result<Self> {
        Self::new(key, Alphabet::cyrillic_lower_space())
    }

    /// The configured alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The keyword cyclically repeated and truncated to `len` symbols.
    ///
    /// `key_stream[i]` is `keyword[i mod keyword_len]`, independent of any
    /// text content and of whether keyword symbols are in the alphabet.
    pub fn key_stream(&self, len: usize) -> String {
        self.key.iter().copied().cycle().take(len).collect()
    }

    /// Encrypts `text` with the configured keyword.
    pub fn encrypt(&self, text: &str) -> String {
        self.transform(text, 1)
    }

    /// Decrypts `text` with the configured keyword.
    pub fn decrypt(&self, text: &str) -> String {
        self.transform(text, -1)
    }

    fn transform(&self, text: &str, direction: i64) -> String {
        text.chars()
            .zip(self.key.iter().copied().cycle())
            .map(|(symbol, key_symbol)| self.shift_symbol(symbol, key_symbol, direction))
            .collect()
    }

    /// Shifts `symbol` by `direction` times the position of `key_symbol`.
    ///
    /// If either symbol is absent from the alphabet, `symbol` is returned
    /// unchanged.
    fn shift_symbol(&self, symbol: char, key_symbol: char, direction: i64) -> char {
        let (Some(position), Some(key_position)) = (
            self.alphabet.position(symbol),
            self.alphabet.position(key_symbol),
        ) else {
            return symbol;
        };
        self.alphabet.symbol(modular::wrap_index(
            position as i64 + direction * key_position as i64,
            self.alphabet.len(),
        ))
    }
}
