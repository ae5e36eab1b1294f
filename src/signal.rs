use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use thiserror::Error;

/// Errors raised while turning puzzle input into a [`Signal`].
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Failed to read signal file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}

/// An ordered sequence of decimal digits.
///
/// Phases never touch a signal in place; each one builds a fresh `Signal`
/// of the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signal {
    digits: Vec<u8>,
}

impl Signal {
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d < 10), "signal digit out of range");
        Signal { digits }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn into_digits(self) -> Vec<u8> {
        self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Leading `count` digits rendered as text (fewer if the signal is shorter).
    pub fn first_digits(&self, count: usize) -> String {
        self.digits
            .iter()
            .take(count)
            .map(|&d| char::from(b'0' + d))
            .collect()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Signal {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse puzzle text into a signal, one digit per character.
///
/// Trailing whitespace is dropped. Any other non-digit character is rejected
/// with its position.
pub fn parse(text: &str) -> Result<Signal, SignalError> {
    let trimmed = text.trim_end();
    let mut digits = Vec::with_capacity(trimmed.len());

    for (index, ch) in trimmed.chars().enumerate() {
        let digit = ch
            .to_digit(10)
            .ok_or(SignalError::InvalidDigit { index, found: ch })?;
        digits.push(digit as u8);
    }

    Ok(Signal { digits })
}

pub fn load_signal<P: AsRef<Path>>(path: P) -> Result<Signal, SignalError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SignalError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let signal = parse(&text)?;
    if signal.is_empty() {
        warn!("{} contains no digits", path.display());
    }
    info!("Loaded {} digits from {}", signal.len(), path.display());
    Ok(signal)
}
