use std::io::{self, Write};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::band::{encode_literal, encode_match, Band, Symbols};
use crate::options::Options;
use crate::search::find_match;
use crate::table::{encode_symbol, WINDOW_MAX};
use crate::window::with_window;

/// Lazy encoder yielding the compressed stream in chunks.
///
/// Each chunk holds at most `chunk_size` symbols (when that is at least
/// four) and is never empty. Concatenating every chunk gives exactly what
/// [`compress`] returns for the same input.
#[derive(Debug, Clone)]
pub struct CompressChunks {
    data: Vec<u16>,
    offset: usize,
    band: Band,
    chunk_size: usize,
}

impl CompressChunks {
    /// Compresses text as its UTF-16 code units.
    pub fn from_text(input: &str, options: Options) -> Self {
        Self::new(input.encode_utf16(), options)
    }

    /// Compresses bytes, one code unit per byte.
    pub fn from_bytes(input: &[u8], options: Options) -> Self {
        Self::new(input.iter().map(|&b| b as u16), options)
    }

    /// Compresses raw UTF-16 code units; unpaired surrogates are allowed.
    pub fn from_units(input: &[u16], options: Options) -> Self {
        Self::new(input.iter().copied(), options)
    }

    fn new(units: impl IntoIterator<Item = u16>, options: Options) -> Self {
        Self {
            data: with_window(units),
            offset: WINDOW_MAX,
            band: Band::None,
            chunk_size: options.chunk_size.max(1),
        }
    }

    /// Number of input code units not yet encoded.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Writes every remaining chunk to `writer`
    ///
    /// # Arguments
    /// * `writer` - A mutable reference to a type implementing Write
    ///
    /// # Returns
    /// The number of symbols written, or the first I/O error
    pub fn write_to(self, writer: &mut impl Write) -> io::Result<usize> {
        let mut written = 0;
        for chunk in self {
            writer.write_all(chunk.as_bytes())?;
            written += chunk.len();
        }
        writer.flush()?;
        Ok(written)
    }

    // One literal or one match.
    fn step(&mut self) -> Symbols {
        match find_match(&self.data, self.offset) {
            Some(m) => {
                self.offset += m.length;
                self.band = Band::None;
                encode_match(m)
            }
            None => {
                let unit = self.data[self.offset];
                self.offset += 1;
                let (band, symbols) = encode_literal(self.band, unit);
                self.band = band;
                symbols
            }
        }
    }
}

impl Iterator for CompressChunks {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining() == 0 {
            return None;
        }

        let mut chunk = String::with_capacity(self.chunk_size.min(self.remaining() * Symbols::MAX));
        loop {
            let symbols = self.step();
            chunk.extend(symbols.as_slice().iter().map(|&code| char::from(encode_symbol(code))));

            if self.remaining() == 0 || chunk.len() + Symbols::MAX > self.chunk_size {
                break;
            }
        }

        trace!(symbols = chunk.len(), remaining = self.remaining(), "compressed chunk");
        Some(chunk)
    }
}

impl FusedIterator for CompressChunks {}

/// Compresses a string into the 62-symbol alphabet
///
/// # Arguments
/// * `input` - Text to compress; empty input gives an empty string
///
/// # Returns
/// The compressed stream, using only `A-Z`, `a-z` and `0-9`
pub fn compress(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    drain(CompressChunks::from_text(input, Options::default()))
}

/// Compresses a byte buffer, treating each byte as a code unit in 0..=255.
pub fn compress_bytes(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }
    drain(CompressChunks::from_bytes(input, Options::default()))
}

/// Compresses raw UTF-16 code units.
pub fn compress_units(input: &[u16]) -> String {
    if input.is_empty() {
        return String::new();
    }
    drain(CompressChunks::from_units(input, Options::default()))
}

fn drain(chunks: CompressChunks) -> String {
    let units = chunks.remaining();
    let out: String = chunks.collect();
    debug!(units, symbols = out.len(), "compressed");
    out
}
