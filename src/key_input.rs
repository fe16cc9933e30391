//! Keyword reading functionality
//!
//! The running-key cipher takes its keyword from one of several sources:
//! a fixed value (tests), an arbitrary byte stream (stdin), or an
//! interactive terminal with echo disabled. Keywords are passed through
//! raw: no trimming and no case folding, since alphabet lookup is
//! exact-match and any alteration would change cipher semantics.

use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};
use std::io::{self, IsTerminal, Read, Write};
use zeroize::Zeroizing;

/// Trait for reading cipher keywords from various sources
pub trait KeyReader {
    /// Read a keyword as UTF-8 text.
    ///
    /// Returns the keyword wrapped in `Zeroizing` so it is wiped from memory
    /// when dropped.
    fn read_key(&mut self) -> Result<Zeroizing<String>>;
}

/// Returns a fixed keyword (for testing)
pub struct ConstantKeyReader {
    key: Zeroizing<String>,
}

impl ConstantKeyReader {
    pub fn new(key: String) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }
}

impl KeyReader for ConstantKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new((*self.key).clone()))
    }
}

/// Reads the keyword from any io::Read source
pub struct ReaderKeyReader {
    reader: Box<dyn Read>,
}

impl ReaderKeyReader {
    pub fn new(reader: Box<dyn Read>) -> Self {
        Self { reader }
    }
}

impl KeyReader for ReaderKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<String>> {
        let mut data = Zeroizing::new(Vec::new());
        self.reader.read_to_end(&mut data).map_err(|e| {
            CipherboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("error reading keyword: {}", e),
                e,
            )
        })?;
        let key = std::str::from_utf8(&data).map_err(|e| {
            CipherboxError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::KeyUnavailable,
                "keyword is not valid UTF-8",
                e,
            )
        })?;
        Ok(Zeroizing::new(key.to_string()))
    }
}

/// Reads the keyword from a terminal with no echo
pub struct TerminalKeyReader;

impl TerminalKeyReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalKeyReader {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyReader for TerminalKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<String>> {
        if !io::stdin().is_terminal() {
            return Err(CipherboxError::with_kind(
                ErrorCategory::User,
                ErrorKind::KeyUnavailable,
                "cannot read keyword from terminal - stdin is not a terminal",
            ));
        }

        io::stderr().write_all(b"Key (cipherbox): ").map_err(|e| {
            CipherboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to write prompt: {}", e),
                e,
            )
        })?;
        io::stderr().flush().map_err(|e| {
            CipherboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to flush prompt: {}", e),
                e,
            )
        })?;

        // Read keyword *without echo*
        let key = rpassword::read_password().map_err(|e| {
            CipherboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::KeyUnavailable,
                format!("failure reading keyword: {}", e),
                e,
            )
        })?;

        Ok(Zeroizing::new(key))
    }
}
