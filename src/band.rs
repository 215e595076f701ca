//! Symbol codes for literals and back-references.
//!
//! Literals are grouped into bands so a run of similar characters only pays
//! for the band selector once. The active band is explicit state: the
//! encoder threads it through [`encode_literal`], the decoder through its
//! own step function, and both reset it after a match.

use crate::search::Match;
use crate::table::{
    BUFFER_MAX, CHAR_START, COMPRESS_FIXED_START, COMPRESS_START, DECODE_MAX, LATIN_BUFFER_MAX,
    MIN_MATCH, UNICODE_BAND_OFFSET, UNICODE_BUFFER_MAX, UNICODE_CHAR_MAX,
};

/// The literal band currently selected in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Band {
    /// Nothing selected yet, or a match just ended the literal run.
    #[default]
    None,
    /// One of the four 40-unit bands below `LATIN_BUFFER_MAX`.
    Latin(u8),
    /// One of the 1640-unit bands covering the whole 16-bit range.
    Unicode(u8),
}

impl Band {
    /// The band a code unit is written in.
    pub fn of(unit: u16) -> Band {
        let unit = unit as u32;
        if unit < LATIN_BUFFER_MAX {
            Band::Latin((unit / UNICODE_CHAR_MAX) as u8)
        } else {
            Band::Unicode((unit / UNICODE_BUFFER_MAX) as u8)
        }
    }
}

/// Up to four symbol codes produced by one encoder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Symbols {
    codes: [u8; 4],
    len: u8,
}

impl Symbols {
    /// Most symbols a single literal or match can take.
    pub const MAX: usize = 4;

    fn push(&mut self, code: u8) {
        self.codes[self.len as usize] = code;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.codes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Encodes one literal given the active band.
///
/// Returns the band that is active afterwards and the symbol codes to emit.
pub fn encode_literal(active: Band, unit: u16) -> (Band, Symbols) {
    let band = Band::of(unit);
    let unit = unit as u32;
    let mut out = Symbols::default();

    if let Band::Unicode(index) = band {
        if active != band {
            out.push(CHAR_START);
            out.push(index + UNICODE_BAND_OFFSET);
        }
        let rest = unit % UNICODE_BUFFER_MAX;
        out.push((rest % UNICODE_CHAR_MAX) as u8);
        out.push((rest / UNICODE_CHAR_MAX) as u8);
    } else {
        if active != band {
            out.push(DECODE_MAX + (unit / UNICODE_CHAR_MAX) as u8);
        }
        out.push((unit % UNICODE_CHAR_MAX) as u8);
    }

    (band, out)
}

/// Encodes a back-reference. Length two drops the explicit length symbol.
pub fn encode_match(m: Match) -> Symbols {
    debug_assert!(m.length >= MIN_MATCH && m.length <= BUFFER_MAX);
    let hi = (m.distance / BUFFER_MAX) as u8;
    let lo = (m.distance % BUFFER_MAX) as u8;
    let mut out = Symbols::default();

    if m.length == MIN_MATCH {
        out.push(COMPRESS_FIXED_START + hi);
        out.push(lo);
    } else {
        out.push(COMPRESS_START + hi);
        out.push(lo);
        out.push(m.length as u8);
    }
    out
}

/// Rebuilds a Latin literal from its band and payload digit.
#[inline]
pub fn latin_unit(index: u8, digit: u8) -> u32 {
    index as u32 * UNICODE_CHAR_MAX + digit as u32
}

/// Rebuilds a Unicode literal from its band and two payload digits.
#[inline]
pub fn unicode_unit(index: u8, low: u8, high: u8) -> u32 {
    high as u32 * UNICODE_CHAR_MAX + low as u32 + UNICODE_BUFFER_MAX * index as u32
}
