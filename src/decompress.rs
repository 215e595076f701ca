use std::io::Write;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::band::{latin_unit, unicode_unit, Band};
use crate::error::{DecodeError, Result, StreamError};
use crate::options::Options;
use crate::table::{
    decode_symbol, encode_symbol, BUFFER_MAX, CHAR_START, COMPRESS_FIXED_START, COMPRESS_INDEX,
    COMPRESS_START, DECODE_MAX, LATIN_DECODE_MAX, MIN_MATCH, UNICODE_BAND_OFFSET, WINDOW_MAX,
};
use crate::window::WINDOW;

/// Lazy decoder yielding the decompressed UTF-16 code units in chunks.
///
/// History starts with the window and is trimmed back to `WINDOW_MAX`
/// units after each flush, which covers the longest possible distance.
/// Intermediate chunks never end on a high surrogate, so a pair is never
/// split between chunks. After an error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct UnitChunks<'a> {
    source: &'a str,
    pos: usize,
    band: Band,
    history: Vec<u16>,
    // Units before this index are already out (or are the window).
    emitted: usize,
    chunk_size: usize,
    done: bool,
}

impl<'a> UnitChunks<'a> {
    pub fn new(input: &'a str, options: Options) -> Self {
        Self {
            source: input,
            pos: 0,
            band: Band::None,
            history: WINDOW.to_vec(),
            emitted: WINDOW_MAX,
            chunk_size: options.chunk_size.max(1),
            done: false,
        }
    }

    fn input(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    fn symbol_at(&self, position: usize) -> char {
        self.source
            .get(position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    // Next symbol code; running out here means a code was cut short.
    fn read(&mut self) -> Result<u8> {
        let position = self.pos;
        let byte = *self
            .input()
            .get(position)
            .ok_or(DecodeError::UnexpectedEnd { position })?;
        let code = decode_symbol(byte).ok_or_else(|| DecodeError::InvalidSymbol {
            symbol: self.symbol_at(position),
            position,
        })?;
        self.pos += 1;
        Ok(code)
    }

    // Decodes one literal, band selector or back-reference.
    fn step(&mut self) -> Result<()> {
        let position = self.pos;
        let code = self.read()?;

        match code {
            c if c < DECODE_MAX => {
                let value = match self.band {
                    Band::None => return Err(DecodeError::LiteralWithoutBand { position }),
                    Band::Latin(index) => latin_unit(index, c),
                    Band::Unicode(index) => {
                        let high = self.read()?;
                        unicode_unit(index, c, high)
                    }
                };
                let unit = u16::try_from(value)
                    .map_err(|_| DecodeError::CodeUnitOutOfRange { value, position })?;
                self.history.push(unit);
            }
            c if c < LATIN_DECODE_MAX => {
                self.band = Band::Latin(c - DECODE_MAX);
            }
            CHAR_START => {
                let at = self.pos;
                let selector = self.read()?;
                let index = selector
                    .checked_sub(UNICODE_BAND_OFFSET)
                    .ok_or(DecodeError::InvalidBand {
                        symbol: char::from(encode_symbol(selector)),
                        position: at,
                    })?;
                self.band = Band::Unicode(index);
            }
            c if (COMPRESS_START..COMPRESS_INDEX).contains(&c) => {
                let lo = self.read()?;
                let (hi, length) = if c < COMPRESS_FIXED_START {
                    (c - COMPRESS_START, self.read()? as usize)
                } else {
                    (c - COMPRESS_FIXED_START, MIN_MATCH)
                };
                let distance = hi as usize * BUFFER_MAX + lo as usize;
                self.copy(distance, length, position)?;
                self.band = Band::None;
            }
            c => {
                return Err(DecodeError::ReservedSymbol {
                    symbol: char::from(encode_symbol(c)),
                    position,
                })
            }
        }
        Ok(())
    }

    // Unit by unit: the source may run into what this copy writes.
    fn copy(&mut self, distance: usize, length: usize, position: usize) -> Result<()> {
        if distance == 0 || distance > self.history.len() {
            return Err(DecodeError::InvalidBackReference { distance, position });
        }
        let start = self.history.len() - distance;
        self.history.reserve(length);
        for i in 0..length {
            let unit = self.history[start + i];
            self.history.push(unit);
        }
        Ok(())
    }

    fn pending(&self) -> usize {
        self.history.len() - self.emitted
    }

    fn take_pending(&mut self, last: bool) -> Vec<u16> {
        let mut end = self.history.len();
        if !last && end > self.emitted && is_high_surrogate(self.history[end - 1]) {
            end -= 1;
        }
        let chunk = self.history[self.emitted..end].to_vec();
        self.emitted = end;

        if self.emitted > WINDOW_MAX {
            let excess = self.emitted - WINDOW_MAX;
            self.history.drain(..excess);
            self.emitted -= excess;
        }
        chunk
    }
}

impl Iterator for UnitChunks<'_> {
    type Item = Result<Vec<u16>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if self.pos >= self.input().len() {
                self.done = true;
                let chunk = self.take_pending(true);
                return (!chunk.is_empty()).then_some(Ok(chunk));
            }

            if let Err(err) = self.step() {
                self.done = true;
                return Some(Err(err));
            }

            if self.pending() >= self.chunk_size {
                let chunk = self.take_pending(false);
                if !chunk.is_empty() {
                    trace!(units = chunk.len(), position = self.pos, "decompressed chunk");
                    return Some(Ok(chunk));
                }
            }
        }
        None
    }
}

impl FusedIterator for UnitChunks<'_> {}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

fn units_to_string(units: &[u16]) -> Result<String> {
    char::decode_utf16(units.iter().copied())
        .map(|c| {
            c.map_err(|err| DecodeError::UnpairedSurrogate {
                unit: err.unpaired_surrogate(),
            })
        })
        .collect()
}

fn units_to_bytes(units: &[u16]) -> Result<Vec<u8>> {
    units
        .iter()
        .map(|&unit| u8::try_from(unit).map_err(|_| DecodeError::ByteOutOfRange { unit }))
        .collect()
}

/// Lazy decoder yielding the decompressed text in chunks.
#[derive(Debug, Clone)]
pub struct DecompressChunks<'a> {
    inner: UnitChunks<'a>,
}

impl<'a> DecompressChunks<'a> {
    pub fn new(input: &'a str, options: Options) -> Self {
        Self {
            inner: UnitChunks::new(input, options),
        }
    }

    /// Decompresses every remaining chunk into `writer` as UTF-8
    ///
    /// # Arguments
    /// * `writer` - A mutable reference to a type implementing Write
    ///
    /// # Returns
    /// The number of bytes written, or the first decode or I/O error
    ///
    /// # Errors
    /// Output written before a decode error is incomplete and should be discarded
    pub fn write_to(self, writer: &mut impl Write) -> std::result::Result<usize, StreamError> {
        let mut written = 0;
        for chunk in self {
            let chunk = chunk?;
            writer.write_all(chunk.as_bytes())?;
            written += chunk.len();
        }
        writer.flush()?;
        Ok(written)
    }
}

impl Iterator for DecompressChunks<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let converted = self.inner.next()?.and_then(|units| units_to_string(&units));
        if converted.is_err() {
            self.inner.done = true;
        }
        Some(converted)
    }
}

impl FusedIterator for DecompressChunks<'_> {}

/// Lazy decoder yielding the decompressed bytes in chunks.
#[derive(Debug, Clone)]
pub struct DecompressByteChunks<'a> {
    inner: UnitChunks<'a>,
}

impl<'a> DecompressByteChunks<'a> {
    pub fn new(input: &'a str, options: Options) -> Self {
        Self {
            inner: UnitChunks::new(input, options),
        }
    }

    /// Decompresses every remaining chunk into `writer` as raw bytes.
    pub fn write_to(self, writer: &mut impl Write) -> std::result::Result<usize, StreamError> {
        let mut written = 0;
        for chunk in self {
            let chunk = chunk?;
            writer.write_all(&chunk)?;
            written += chunk.len();
        }
        writer.flush()?;
        Ok(written)
    }
}

impl Iterator for DecompressByteChunks<'_> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let converted = self.inner.next()?.and_then(|units| units_to_bytes(&units));
        if converted.is_err() {
            self.inner.done = true;
        }
        Some(converted)
    }
}

impl FusedIterator for DecompressByteChunks<'_> {}

/// Decompresses a stream produced by [`compress`](crate::compress)
///
/// # Arguments
/// * `input` - The symbol stream; empty input gives an empty string
///
/// # Returns
/// The original text, or the first [`DecodeError`]
///
/// # Errors
/// Any character outside `A-Z`, `a-z`, `0-9`, a truncated code, or output
/// that is not valid UTF-16
pub fn decompress(input: &str) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }
    let out: String = DecompressChunks::new(input, Options::default()).collect::<Result<_>>()?;
    debug!(symbols = input.len(), bytes = out.len(), "decompressed");
    Ok(out)
}

/// Decompresses a stream produced by [`compress_bytes`](crate::compress_bytes).
pub fn decompress_bytes(input: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for chunk in DecompressByteChunks::new(input, Options::default()) {
        out.extend_from_slice(&chunk?);
    }
    debug!(symbols = input.len(), bytes = out.len(), "decompressed");
    Ok(out)
}

/// Decompresses to raw UTF-16 code units, without validating pairs.
pub fn decompress_units(input: &str) -> Result<Vec<u16>> {
    let mut out = Vec::new();
    for chunk in UnitChunks::new(input, Options::default()) {
        out.extend_from_slice(&chunk?);
    }
    debug!(symbols = input.len(), units = out.len(), "decompressed");
    Ok(out)
}
