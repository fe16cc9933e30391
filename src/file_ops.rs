//! File-level cipher operations
//!
//! This module provides the plumbing between the CLI and the ciphers:
//! reading a UTF-8 text file, applying a cipher transform to its contents,
//! and writing the result either to a separate output file or atomically
//! back over the input. File contents are passed to the transform raw -
//! no trimming and no case folding - so the cipher semantics are exactly
//! those of the library API.

use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Transform the text of `input_path` and write the result to `output_path`.
///
/// Reads `input_path`, which must contain valid UTF-8 text, applies
/// `transform`, and writes the transformed text to `output_path`.
pub fn transform_to_file(
    input_path: &Path,
    output_path: &Path,
    transform: impl FnOnce(&str) -> String,
) -> Result<()> {
    let text = read_text(input_path)?;
    let transformed = transform(&text);
    fs::write(output_path, transformed.as_bytes()).map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            format!("failed to write to {}", output_path.display()),
            e,
        )
    })?;
    Ok(())
}

/// Transform the text of `path` and atomically replace the file with the
/// result.
///
/// The replacement goes through a tempfile in the same directory followed by
/// flush, fsync and rename, so either the old file or the complete new file
/// exists - never a partial one.
pub fn transform_in_place(path: &Path, transform: impl FnOnce(&str) -> String) -> Result<()> {
    let text = read_text(path)?;
    let transformed = transform(&text);

    let dir = path.parent().ok_or_else(|| {
        CipherboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::Io,
            "target path has no parent directory",
        )
    })?;
    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to create tempfile",
            e,
        )
    })?;

    temp_file.write_all(transformed.as_bytes()).map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to write to tempfile",
            e,
        )
    })?;
    // Flush and fsync() such that the rename later, if it succeeds, will
    // always point to a valid file.
    temp_file.flush().map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to flush tempfile",
            e,
        )
    })?;
    temp_file.as_file().sync_all().map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to sync file prior to rename",
            e,
        )
    })?;
    temp_file.persist(path).map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            format!("failed to rename to target file {}", path.display()),
            e,
        )
    })?;
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::Io,
            format!("{} is not valid UTF-8 text", path.display()),
            e,
        )
    })
}

fn read_error(path: &Path, err: io::Error) -> CipherboxError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::User
    } else {
        ErrorCategory::Internal
    };
    CipherboxError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::shift_cipher::ShiftCipher;
    use std::fs;
    use tempfile::TempDir;

    fn latin_cipher(shift: i64) -> ShiftCipher {
        ShiftCipher::new(shift, Alphabet::new("abcdefghijklmnopqrstuvwxyz").unwrap())
    }

    #[test]
    fn test_transform_to_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let plain_path = temp_dir.path().join("plain.txt");
        let crypt_path = temp_dir.path().join("crypt.txt");
        let back_path = temp_dir.path().join("back.txt");

        fs::write(&plain_path, "hello world").unwrap();

        let cipher = latin_cipher(10);
        transform_to_file(&plain_path, &crypt_path, |text| cipher.encrypt(text)).unwrap();
        assert_eq!(fs::read_to_string(&crypt_path).unwrap(), "rovvy gybvn");

        transform_to_file(&crypt_path, &back_path, |text| cipher.decrypt(text)).unwrap();
        assert_eq!(fs::read_to_string(&back_path).unwrap(), "hello world");
    }

    #[test]
    fn test_transform_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let cipher = latin_cipher(10);
        transform_in_place(&path, |text| cipher.encrypt(text)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "rovvy");

        transform_in_place(&path, |text| cipher.decrypt(text)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_missing_input_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let out = temp_dir.path().join("out.txt");

        let err = transform_to_file(&missing, &out, |text| text.to_string())
            .expect_err("expected read failure");
        assert_eq!(err.kind, Some(ErrorKind::Io));
        assert_eq!(err.category, ErrorCategory::User);
        assert!(!out.exists());
    }

    #[test]
    fn test_non_utf8_input_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.dat");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = transform_in_place(&path, |text| text.to_string())
            .expect_err("expected utf-8 failure");
        assert_eq!(err.kind, Some(ErrorKind::Io));
        assert_eq!(err.category, ErrorCategory::User);
        // The original file must be untouched.
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00]);
    }

    #[test]
    fn test_file_contents_not_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("padded.txt");
        fs::write(&path, "  hello  \n").unwrap();

        let cipher = latin_cipher(10);
        transform_in_place(&path, |text| cipher.encrypt(text)).unwrap();
        // Whitespace passes through the cipher and keeps its positions.
        assert_eq!(fs::read_to_string(&path).unwrap(), "  rovvy  \n");
    }
}
