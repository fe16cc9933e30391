//! Alphabets: ordered, duplicate-free symbol sequences.
//!
//! An [`Alphabet`] defines the bijection between symbols and zero-based
//! positions that both ciphers do their arithmetic over. Lookup is
//! exact-match and case-sensitive; callers wanting case-insensitive behavior
//! must normalize text and alphabet to the same case before use.

use std::collections::HashMap;

use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};

/// The 32 lowercase Cyrillic letters (Ukrainian variant) used as the default
/// shift-cipher alphabet.
pub const CYRILLIC_LOWER: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщюя";

/// Default running-key alphabet: [`CYRILLIC_LOWER`] plus a trailing space.
pub const CYRILLIC_LOWER_SPACE: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщюя ";

/// An ordered sequence of distinct symbols with O(1) position lookup.
///
/// Positions are stable for the lifetime of the value. Construction rejects
/// empty and duplicate-symbol alphabets, so every `Alphabet` in existence
/// supports well-defined modular index arithmetic.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from the symbols of `symbols`, in order.
    ///
    /// Fails with `EmptyAlphabet` if the string contains no symbols and with
    /// `DuplicateSymbol` if any symbol occurs more than once.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(CipherboxError::with_kind(
                ErrorCategory::User,
                ErrorKind::EmptyAlphabet,
                "alphabet must contain at least one symbol",
            ));
        }

        let mut positions = HashMap::with_capacity(symbols.len());
        for (position, &symbol) in symbols.iter().enumerate() {
            if positions.insert(symbol, position).is_some() {
                return Err(CipherboxError::with_kind(
                    ErrorCategory::User,
                    ErrorKind::DuplicateSymbol,
                    format!("alphabet repeats the symbol '{}'", symbol),
                ));
            }
        }

        Ok(Self { symbols, positions })
    }

    /// The default shift-cipher alphabet ([`CYRILLIC_LOWER`]).
    pub fn cyrillic_lower() -> Self {
        Self::new(CYRILLIC_LOWER).expect("reference alphabet is valid")
    }

    /// The default running-key alphabet ([`CYRILLIC_LOWER_SPACE`]).
    pub fn cyrillic_lower_space() -> Self {
        Self::new(CYRILLIC_LOWER_SPACE).expect("reference alphabet is valid")
    }

    /// Number of symbols in the alphabet. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Zero-based position of `symbol`, or `None` if the symbol is not part
    /// of the alphabet.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// The symbol at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`. Cipher code only calls this with
    /// indices already reduced modulo the alphabet length.
    pub fn symbol(&self, position: usize) -> char {
        self.symbols[position]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::cyrillic_lower()
    }
}
