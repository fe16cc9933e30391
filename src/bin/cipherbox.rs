//! Cipherbox CLI - classical text ciphers over configurable alphabets
//!
//! Command-line interface for encrypting and decrypting text files with the
//! shift cipher and the running-key cipher. Text, keywords, and alphabets
//! are passed through raw - no trimming and no case folding.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use cipherbox::error::Result;
use cipherbox::file_ops;
use cipherbox::key_input::{KeyReader, ReaderKeyReader, TerminalKeyReader};
use cipherbox::{Alphabet, RunningKeyCipher, ShiftCipher};

#[derive(Parser)]
#[command(name = "cipherbox")]
#[command(version)]
#[command(about = "Classical text ciphers over configurable alphabets.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file with the shift cipher
    #[command(name = "shift-encrypt", alias = "se")]
    ShiftEncrypt {
        /// Path to the file whose contents is to be encrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the encrypted text to; omit to rewrite
        /// the input file in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Shift amount; any sign and magnitude, applied modulo the alphabet
        /// length
        #[arg(short, long, value_name = "AMOUNT", default_value_t = 3, allow_negative_numbers = true)]
        shift: i64,

        /// Alphabet symbols in order; defaults to the lowercase Cyrillic
        /// reference alphabet
        #[arg(long, value_name = "SYMBOLS")]
        alphabet: Option<String>,
    },

    /// Decrypt a file with the shift cipher
    #[command(name = "shift-decrypt", alias = "sd")]
    ShiftDecrypt {
        /// Path to the file whose contents is to be decrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the decrypted text to; omit to rewrite
        /// the input file in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Shift amount the text was encrypted with
        #[arg(short, long, value_name = "AMOUNT", default_value_t = 3, allow_negative_numbers = true)]
        shift: i64,

        /// Alphabet symbols in order; defaults to the lowercase Cyrillic
        /// reference alphabet
        #[arg(long, value_name = "SYMBOLS")]
        alphabet: Option<String>,
    },

    /// Encrypt a file with the running-key cipher
    #[command(name = "key-encrypt", alias = "ke")]
    KeyEncrypt {
        /// Path to the file whose contents is to be encrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the encrypted text to; omit to rewrite
        /// the input file in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Alphabet symbols in order; defaults to the lowercase Cyrillic
        /// reference alphabet plus a trailing space
        #[arg(long, value_name = "SYMBOLS")]
        alphabet: Option<String>,

        /// Read the keyword from stdin instead of from terminal
        #[arg(long)]
        key_stdin: bool,
    },

    /// Decrypt a file with the running-key cipher
    #[command(name = "key-decrypt", alias = "kd")]
    KeyDecrypt {
        /// Path to the file whose contents is to be decrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the decrypted text to; omit to rewrite
        /// the input file in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Alphabet symbols in order; defaults to the lowercase Cyrillic
        /// reference alphabet plus a trailing space
        #[arg(long, value_name = "SYMBOLS")]
        alphabet: Option<String>,

        /// Read the keyword from stdin instead of from terminal
        #[arg(long)]
        key_stdin: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::ShiftEncrypt {
            input,
            output,
            shift,
            alphabet,
        } => {
            let cipher = shift_cipher(shift, alphabet.as_deref())?;
            transform(&input, output.as_deref(), |text| cipher.encrypt(text))
        }
        Commands::ShiftDecrypt {
            input,
            output,
            shift,
            alphabet,
        } => {
            let cipher = shift_cipher(shift, alphabet.as_deref())?;
            transform(&input, output.as_deref(), |text| cipher.decrypt(text))
        }
        Commands::KeyEncrypt {
            input,
            output,
            alphabet,
            key_stdin,
        } => {
            let cipher = running_key_cipher(alphabet.as_deref(), key_stdin)?;
            transform(&input, output.as_deref(), |text| cipher.encrypt(text))
        }
        Commands::KeyDecrypt {
            input,
            output,
            alphabet,
            key_stdin,
        } => {
            let cipher = running_key_cipher(alphabet.as_deref(), key_stdin)?;
            transform(&input, output.as_deref(), |text| cipher.decrypt(text))
        }
    }
}

fn shift_cipher(shift: i64, alphabet: Option<&str>) -> Result<ShiftCipher> {
    let alphabet = match alphabet {
        Some(symbols) => Alphabet::new(symbols)?,
        None => Alphabet::cyrillic_lower(),
    };
    Ok(ShiftCipher::new(shift, alphabet))
}

fn running_key_cipher(alphabet: Option<&str>, key_stdin: bool) -> Result<RunningKeyCipher> {
    let alphabet = match alphabet {
        Some(symbols) => Alphabet::new(symbols)?,
        None => Alphabet::cyrillic_lower_space(),
    };
    let mut reader = get_key_reader(key_stdin);
    let key = reader.read_key()?;
    RunningKeyCipher::new(&key, alphabet)
}

fn transform(
    input: &Path,
    output: Option<&Path>,
    transform: impl FnOnce(&str) -> String,
) -> Result<()> {
    match output {
        Some(output) => file_ops::transform_to_file(input, output, transform),
        None => file_ops::transform_in_place(input, transform),
    }
}

fn get_key_reader(use_stdin: bool) -> Box<dyn KeyReader> {
    if use_stdin {
        Box::new(ReaderKeyReader::new(Box::new(std::io::stdin())))
    } else {
        Box::new(TerminalKeyReader)
    }
}
