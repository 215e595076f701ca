//! Greedy longest-match search over the trailing `WINDOW_BUFFER_MAX` units.

use crate::table::{BUFFER_MAX, MIN_MATCH, WINDOW_BUFFER_MAX};

/// A back-reference: copy `length` units starting `distance` units back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub distance: usize,
    pub length: usize,
}

/// Last start position, relative to the search region, a candidate may take.
/// The region begins `WINDOW_BUFFER_MAX` units before `offset`, so this is
/// the unit just before it.
const LAST_START: usize = WINDOW_BUFFER_MAX - 1;

/// Finds the match to emit at `offset`, or `None` to emit a literal.
///
/// `data` is the window followed by the input, and `offset` must be at least
/// `WINDOW_BUFFER_MAX`. Candidates start at most one unit before `offset`
/// and may run into the lookahead, so a copy can overlap itself.
///
/// The search starts from the nearest occurrence of the next two units. Each
/// time the candidate stops matching, it looks for the nearest occurrence of
/// the prefix plus the mismatching unit, and gives up once it has reached the
/// farthest occurrence of the opening pair. Encoded output depends on these
/// exact steps.
pub fn find_match(data: &[u16], offset: usize) -> Option<Match> {
    debug_assert!(offset >= WINDOW_BUFFER_MAX);
    let len = BUFFER_MAX.min(data.len().saturating_sub(offset));
    if len < MIN_MATCH {
        return None;
    }

    let base = offset - WINDOW_BUFFER_MAX;
    let region = &data[base..offset + len];

    // Farthest start of the opening pair.
    let pair = &data[offset..offset + MIN_MATCH];
    let first = region[..LAST_START + MIN_MATCH]
        .windows(MIN_MATCH)
        .position(|w| w == pair)?;

    let mut i = MIN_MATCH;
    let mut best = None;
    loop {
        let Some(start) = rfind(region, &data[offset..offset + i]) else {
            break;
        };
        best = Some(start);

        let from = base + start;
        while i < len && data[offset + i] == data[from + i] {
            i += 1;
        }

        if start == first {
            i += 1;
            break;
        }
        i += 1;
        if i >= len {
            break;
        }
    }

    best.map(|start| Match {
        distance: WINDOW_BUFFER_MAX - start,
        length: i - 1,
    })
}

/// Nearest start of `needle` in `region` at or before `LAST_START`.
fn rfind(region: &[u16], needle: &[u16]) -> Option<usize> {
    (0..=LAST_START)
        .rev()
        .find(|&start| region[start..].starts_with(needle))
}
