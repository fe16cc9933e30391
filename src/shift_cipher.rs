//! Shift cipher over a configurable alphabet.
//!
//! Each symbol's alphabet position is offset by a fixed signed shift, modulo
//! the alphabet length. Symbols absent from the alphabet (punctuation,
//! whitespace, anything else) pass through unchanged, so output symbol count
//! always equals input symbol count. Decryption is encryption with the
//! negated shift - there is no separate code path.

use crate::alphabet::Alphabet;
use crate::modular;

/// Default shift amount when none is configured.
pub const DEFAULT_SHIFT: i64 = 3;

/// An immutable shift-cipher configuration: a shift amount and an alphabet.
///
/// Shifts of any magnitude and sign are accepted; their semantics are modulo
/// the alphabet length. To operate with a different configuration, construct
/// a new value (they are cheap) or use the per-call
/// [`encrypt_with`](Self::encrypt_with)/[`decrypt_with`](Self::decrypt_with)
/// overrides.
#[derive(Debug, Clone)]
pub struct ShiftCipher {
    shift: i64,
    alphabet: Alphabet,
}

impl ShiftCipher {
    /// Creates a cipher with the given shift and alphabet.
    pub fn new(shift: i64, alphabet: Alphabet) -> Self {
        Self { shift, alphabet }
    }

    /// Creates a cipher with the given shift over the default alphabet.
    pub fn with_shift(shift: i64) -> Self {
        Self::new(shift, Alphabet::default())
    }

    /// The configured shift amount.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// The configured alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encrypts `text` with the configured shift.
    pub fn encrypt(&self, text: &str) -> String {
        self.encrypt_with(text, self.shift)
    }

    /// Encrypts `text` with an explicit shift, ignoring the configured one.
    pub fn encrypt_with(&self, text: &str, shift: i64) -> String {
        let len = self.alphabet.len();
        text.chars()
            .map(|symbol| match self.alphabet.position(symbol) {
                Some(position) => self
                    .alphabet
                    .symbol(modular::wrap_index(position as i64 + shift, len)),
                None => symbol,
            })
            .collect()
    }

    /// Decrypts `text` with the configured shift.
    pub fn decrypt(&self, text: &str) -> String {
        self.decrypt_with(text, self.shift)
    }

    /// Decrypts `text` with an explicit shift, ignoring the configured one.
    pub fn decrypt_with(&self, text: &str, shift: i64) -> String {
        self.encrypt_with(text, -shift)
    }
}

impl Default for ShiftCipher {
    fn default() -> Self {
        Self::with_shift(DEFAULT_SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

    fn latin_cipher(shift: i64) -> ShiftCipher {
        ShiftCipher::new(shift, Alphabet::new(LATIN).unwrap())
    }

    #[test]
    fn test_hello_shift_ten() {
        let cipher = latin_cipher(10);
        assert_eq!(cipher.encrypt("hello"), "rovvy");
        assert_eq!(cipher.decrypt("rovvy"), "hello");
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let cipher = latin_cipher(0);
        assert_eq!(cipher.encrypt("unchanged"), "unchanged");
    }

    #[test]
    fn test_negative_shift() {
        let cipher = latin_cipher(-3);
        assert_eq!(cipher.encrypt("abc"), "xyz");
        assert_eq!(cipher.decrypt("xyz"), "abc");
    }

    #[test]
    fn test_shift_beyond_alphabet_length_wraps() {
        // 29 = 26 + 3, so it must behave exactly like shift 3.
        let cipher = latin_cipher(29);
        assert_eq!(cipher.encrypt("xyz"), "abc");
        assert_eq!(cipher.encrypt("abc"), latin_cipher(3).encrypt("abc"));
    }

    #[test]
    fn test_out_of_alphabet_symbols_pass_through() {
        let cipher = latin_cipher(10);
        assert_eq!(cipher.encrypt("hello, world!"), "rovvy, gybvn!");
        assert_eq!(cipher.decrypt("rovvy, gybvn!"), "hello, world!");
    }

    #[test]
    fn test_length_preserved_in_symbols() {
        let cipher = latin_cipher(7);
        let text = "mixed INPUT with 123 and punctuation?!";
        assert_eq!(
            cipher.encrypt(text).chars().count(),
            text.chars().count()
        );
    }

    #[test]
    fn test_empty_text() {
        let cipher = latin_cipher(5);
        assert_eq!(cipher.encrypt(""), "");
        assert_eq!(cipher.decrypt(""), "");
    }

    #[test]
    fn test_per_call_override_ignores_configured_shift() {
        let cipher = latin_cipher(1);
        assert_eq!(cipher.encrypt_with("hello", 10), "rovvy");
        assert_eq!(cipher.decrypt_with("rovvy", 10), "hello");
    }

    #[test]
    fn test_default_cipher_uses_cyrillic_alphabet() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.shift(), 3);
        assert_eq!(cipher.encrypt("абв"), "гґд");
        // Positions 29..31 wrap around to the start of the alphabet.
        assert_eq!(cipher.encrypt("щюя"), "абв");
        assert_eq!(cipher.decrypt("абв"), "щюя");
    }

    #[test]
    fn test_roundtrip_boundary_shifts() {
        let text = "the quick brown fox jumps over the lazy dog";
        for shift in [-104, -27, -26, -1, 0, 1, 25, 26, 27, 104] {
            let cipher = latin_cipher(shift);
            assert_eq!(
                cipher.decrypt(&cipher.encrypt(text)),
                text,
                "round-trip failed for shift {}",
                shift
            );
        }
    }

    #[test]
    fn test_roundtrip_random_shifts() {
        let mut rng = rand::rng();
        let text = "attack at dawn; retreat at dusk.";
        for _ in 0..100 {
            let shift: i64 = rng.random_range(-1000..1000);
            let cipher = latin_cipher(shift);
            assert_eq!(
                cipher.decrypt(&cipher.encrypt(text)),
                text,
                "round-trip failed for shift {}",
                shift
            );
        }
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let cipher = ShiftCipher::new(42, Alphabet::new("x").unwrap());
        assert_eq!(cipher.encrypt("xxyx"), "xxyx");
    }
}
