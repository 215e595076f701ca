//! The 62-symbol alphabet and the constants that carve its code space into
//! literal payloads, band selectors and match headers.
//!
//! Changing any value here produces an incompatible stream.

/// Output alphabet, indexed by symbol code.
pub const BASE62_TABLE: &[u8; TABLE_LENGTH] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const TABLE_LENGTH: usize = 62;
/// Largest match length, and the radix of the distance digits.
pub const BUFFER_MAX: usize = TABLE_LENGTH - 1;

/// Length of the padding both sides place in front of the data.
pub const WINDOW_MAX: usize = 1024;
/// How far back the match finder looks.
pub const WINDOW_BUFFER_MAX: usize = 304;

/// Shortest run worth a back-reference.
pub const MIN_MATCH: usize = 2;

pub const LATIN_CHAR_MAX: u32 = 11;
/// Code units below this use the Latin bands (U+0000 - U+0083).
pub const LATIN_BUFFER_MAX: u32 = LATIN_CHAR_MAX * (LATIN_CHAR_MAX + 1);

/// Radix of a literal payload digit.
pub const UNICODE_CHAR_MAX: u32 = 40;
/// Code units covered by one Unicode band.
pub const UNICODE_BUFFER_MAX: u32 = UNICODE_CHAR_MAX * (UNICODE_CHAR_MAX + 1);

/// Symbols below this are literal payload digits.
pub const DECODE_MAX: u8 = 43;
/// Symbols in `DECODE_MAX..LATIN_DECODE_MAX` select a Latin band.
pub const LATIN_DECODE_MAX: u8 = UNICODE_CHAR_MAX as u8 + 7;
/// Followed by one symbol naming the Unicode band. The code just below it
/// (47) is never emitted.
pub const CHAR_START: u8 = LATIN_DECODE_MAX + 1;
/// Match header carrying an explicit length symbol.
pub const COMPRESS_START: u8 = CHAR_START + 1;
/// Match header with an implied length of two.
pub const COMPRESS_FIXED_START: u8 = COMPRESS_START + 5;
/// Codes from here up (59, 60 and 61) are never emitted.
pub const COMPRESS_INDEX: u8 = COMPRESS_FIXED_START + 5;

/// Added to the Unicode band number in the symbol after `CHAR_START`.
pub const UNICODE_BAND_OFFSET: u8 = 5;

/// Default chunk size, in symbols when compressing and code units when
/// decompressing.
pub const CHUNK_SIZE: usize = 65533;

const INVALID: u8 = 0xFF;

const fn build_reverse_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < TABLE_LENGTH {
        table[BASE62_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static REVERSE_TABLE: [u8; 256] = build_reverse_table();

/// Maps a symbol code (0..=61) to its output byte.
#[inline]
pub fn encode_symbol(code: u8) -> u8 {
    debug_assert!((code as usize) < TABLE_LENGTH);
    BASE62_TABLE[code as usize]
}

/// Maps an input byte back to its symbol code.
#[inline]
pub fn decode_symbol(byte: u8) -> Option<u8> {
    match REVERSE_TABLE[byte as usize] {
        INVALID => None,
        code => Some(code),
    }
}

/// True if every byte of `s` belongs to the output alphabet.
pub fn is_symbol_string(s: &str) -> bool {
    s.bytes().all(|b| decode_symbol(b).is_some())
}
