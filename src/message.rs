//! Embedded message decoding.
//!
//! The real signal is the puzzle input repeated [`REPEAT_COUNT`] times. Its
//! first seven digits give an offset, and after the phases run the eight
//! digits at that offset are the message.
//!
//! A full phase over millions of digits is out of reach, but for any output
//! index `k` with `2k >= len` the pattern is zero before `k` and one from `k`
//! to the end. Each phase over that suffix is therefore a running sum from
//! the back, mod 10.

use log::info;
use thiserror::Error;

use crate::signal::Signal;

pub const REPEAT_COUNT: usize = 10_000;
pub const OFFSET_DIGITS: usize = 7;
pub const MESSAGE_LEN: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MessageError {
    #[error("Signal has {0} digits, need at least 7 for the message offset")]
    TooShort(usize),

    #[error("Message offset {offset} leaves no room for 8 digits in a signal of {total}")]
    OffsetOutOfRange { offset: usize, total: usize },

    #[error("Message offset {offset} lies in the first half of a signal of {total}")]
    OffsetTooSmall { offset: usize, total: usize },
}

/// Offset encoded by the leading digits of the input.
pub fn message_offset(signal: &Signal) -> Result<usize, MessageError> {
    if signal.len() < OFFSET_DIGITS {
        return Err(MessageError::TooShort(signal.len()));
    }
    Ok(signal.digits()[..OFFSET_DIGITS]
        .iter()
        .fold(0usize, |acc, &d| acc * 10 + d as usize))
}

pub fn decode_message(signal: &Signal, passes: usize) -> Result<String, MessageError> {
    decode_message_repeated(signal, REPEAT_COUNT, passes)
}

/// Decode the message from `signal` repeated `repeat` times.
pub fn decode_message_repeated(
    signal: &Signal,
    repeat: usize,
    passes: usize,
) -> Result<String, MessageError> {
    let offset = message_offset(signal)?;
    let digits = signal.digits();
    let total = digits.len() * repeat;

    if offset + MESSAGE_LEN > total {
        return Err(MessageError::OffsetOutOfRange { offset, total });
    }
    if offset * 2 < total {
        return Err(MessageError::OffsetTooSmall { offset, total });
    }

    let mut tail: Vec<u8> = (offset..total).map(|i| digits[i % digits.len()]).collect();
    info!(
        "Decoding message at offset {} ({} trailing digits, {} phases)",
        offset,
        tail.len(),
        passes
    );

    for _ in 0..passes {
        let mut sum = 0u32;
        for d in tail.iter_mut().rev() {
            sum = (sum + *d as u32) % 10;
            *d = sum as u8;
        }
    }

    Ok(Signal::from_digits(tail).first_digits(MESSAGE_LEN))
}
