//! LZ77-style compression of Unicode text into a stream of the 62 symbols
//! `A-Z`, `a-z` and `0-9`, safe to drop into URLs, identifiers or JSON.
//!
//! ```
//! let packed = lzbase62::compress("hello hello hello");
//! assert_eq!(packed, "tYVccfxGM");
//! assert_eq!(lzbase62::decompress(&packed).unwrap(), "hello hello hello");
//! ```
//!
//! Text is processed as UTF-16 code units and bytes as units in 0..=255.
//! Large inputs can be handled chunk by chunk with [`CompressChunks`] and
//! [`DecompressChunks`]; the plain functions collect those same chunks.
//!
//! The stream carries no header. The constants in [`table`] define the
//! format, so both sides must agree on them.

pub mod band;
pub mod compress;
pub mod decompress;
pub mod error;
pub mod options;
pub mod search;
pub mod table;
pub mod window;

pub use compress::{compress, compress_bytes, compress_units, CompressChunks};
pub use decompress::{
    decompress, decompress_bytes, decompress_units, DecompressByteChunks, DecompressChunks,
    UnitChunks,
};
pub use error::{DecodeError, StreamError};
pub use options::{Mode, Options};
