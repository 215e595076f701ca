use crate::table::CHUNK_SIZE;

/// Tuning for the chunked interfaces. None of it affects the encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Target chunk length: symbols per chunk when compressing, code units
    /// per chunk when decompressing.
    pub chunk_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chunk size; zero is treated as one.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

/// How raw data on the uncompressed side is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// UTF-8 text, compressed as UTF-16 code units.
    #[default]
    Text,
    /// Arbitrary bytes, each one a code unit in 0..=255.
    Bytes,
}
