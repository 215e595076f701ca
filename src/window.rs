//! Padding placed in front of the data so the first positions can be
//! searched and referenced like any other.

use crate::table::WINDOW_MAX;

/// The padding content: `WINDOW_MAX` spaces.
///
/// The decoder rebuilds this on its own, so it must never change.
pub static WINDOW: [u16; WINDOW_MAX] = [b' ' as u16; WINDOW_MAX];

/// Returns `WINDOW` followed by `units`, the sequence the match finder walks.
pub(crate) fn with_window(units: impl IntoIterator<Item = u16>) -> Vec<u16> {
    let units = units.into_iter();
    let mut data = Vec::with_capacity(WINDOW_MAX + units.size_hint().0);
    data.extend_from_slice(&WINDOW);
    data.extend(units);
    data
}
