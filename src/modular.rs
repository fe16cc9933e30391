//! Non-negative modular arithmetic for alphabet index math.
//!
//! Both ciphers shift symbol positions by signed amounts (decryption is
//! encryption with a negated shift), so index arithmetic routinely goes
//! negative or beyond the alphabet length. A plain truncating `%` would
//! yield negative residues; this helper always lands in `[0, modulus)`.

/// Reduces a signed index to the canonical residue in `[0, modulus)`.
///
/// Equivalent to `((value % modulus) + modulus) % modulus`.
///
/// # Panics
///
/// Panics with an arithmetic (divide-by-zero) error if `modulus` is zero.
/// Alphabets are validated to be non-empty at construction, so cipher code
/// never reaches this with a zero modulus.
pub fn wrap_index(value: i64, modulus: usize) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_value() {
        assert_eq!(wrap_index(-1, 26), 25);
        assert_eq!(wrap_index(-26, 26), 0);
        assert_eq!(wrap_index(-27, 26), 25);
        assert_eq!(wrap_index(-53, 26), 25);
    }

    #[test]
    fn test_value_at_or_beyond_modulus() {
        assert_eq!(wrap_index(26, 26), 0);
        assert_eq!(wrap_index(27, 26), 1);
        assert_eq!(wrap_index(104, 26), 0);
    }

    #[test]
    fn test_value_within_range() {
        assert_eq!(wrap_index(0, 26), 0);
        assert_eq!(wrap_index(13, 26), 13);
        assert_eq!(wrap_index(25, 26), 25);
    }

    #[test]
    fn test_modulus_one() {
        assert_eq!(wrap_index(0, 1), 0);
        assert_eq!(wrap_index(7, 1), 0);
        assert_eq!(wrap_index(-7, 1), 0);
    }

    #[test]
    fn test_large_magnitudes() {
        assert_eq!(wrap_index(1_000_003, 26), 1_000_003 % 26);
        assert_eq!(wrap_index(i64::from(i32::MAX), 32), (i64::from(i32::MAX) % 32) as usize);
    }

    #[test]
    #[should_panic]
    fn test_zero_modulus_panics() {
        let _ = wrap_index(5, 0);
    }
}
