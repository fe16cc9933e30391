//! Cipherbox - classical shift and running-key text ciphers over
//! configurable alphabets.
//!
//! Two independent substitution ciphers share one arithmetic primitive
//! (non-negative modular index wrap-around):
//!
//! - [`ShiftCipher`] offsets every symbol's alphabet position by a fixed
//!   signed shift; decryption is encryption with the negated shift.
//! - [`RunningKeyCipher`] repeats a keyword cyclically across the input and
//!   offsets each symbol by its key symbol's alphabet position.
//!
//! Symbols absent from the configured [`Alphabet`] pass through unchanged in
//! both directions. These are classical, breakable ciphers for educational
//! use; nothing here provides cryptographic security.
//!
//! # Examples
//!
//! Shift cipher over the lowercase Latin alphabet:
//!
//! ```
//! use cipherbox::{Alphabet, ShiftCipher};
//!
//! let cipher = ShiftCipher::new(10, Alphabet::new("abcdefghijklmnopqrstuvwxyz")?);
//! assert_eq!(cipher.encrypt("hello"), "rovvy");
//! assert_eq!(cipher.decrypt("rovvy"), "hello");
//! # Ok::<(), cipherbox::error::CipherboxError>(())
//! ```
//!
//! Running-key cipher, with the space included in the alphabet:
//!
//! ```
//! use cipherbox::{Alphabet, RunningKeyCipher};
//!
//! let cipher = RunningKeyCipher::new("key", Alphabet::new("abcdefghijklmnopqrstuvwxyz ")?)?;
//! let encrypted = cipher.encrypt("attack at dawn");
//! assert_eq!(cipher.decrypt(&encrypted), "attack at dawn");
//! # Ok::<(), cipherbox::error::CipherboxError>(())
//! ```

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod error;
pub mod file_ops;
pub mod key_input;
pub mod modular;
pub mod running_key;
pub mod shift_cipher;

pub use alphabet::Alphabet;
pub use error::{CipherboxError, ErrorCategory, ErrorKind};
pub use running_key::RunningKeyCipher;
pub use shift_cipher::ShiftCipher;
