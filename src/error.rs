use std::io;

use thiserror::Error;

/// Errors raised while decoding a symbol stream.
///
/// `position` is the byte offset of the offending symbol in the input.
/// Decoding stops at the first error; chunks handed out before it are part of
/// a failed result and should be discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("out of range symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("input ended inside a code at position {position}")]
    UnexpectedEnd { position: usize },
    #[error("reserved symbol {symbol:?} at position {position}")]
    ReservedSymbol { symbol: char, position: usize },
    #[error("literal at position {position} precedes any band selector")]
    LiteralWithoutBand { position: usize },
    #[error("invalid band selector {symbol:?} at position {position}")]
    InvalidBand { symbol: char, position: usize },
    #[error("decoded value {value:#x} at position {position} exceeds 16 bits")]
    CodeUnitOutOfRange { value: u32, position: usize },
    #[error("back-reference distance {distance} at position {position} is out of range")]
    InvalidBackReference { distance: usize, position: usize },
    #[error("decoded text contains unpaired surrogate {unit:#06x}")]
    UnpairedSurrogate { unit: u16 },
    #[error("decoded value {unit:#x} does not fit in a byte")]
    ByteOutOfRange { unit: u16 },
}

/// Errors from the streaming sinks, which both decode and write.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
