//! Reversible token obfuscation for the local key file.
//!
//! This is deliberately not cryptography. It only keeps the stored key from
//! being readable at a glance in `cfbd.json`; anyone with this source can
//! reverse it. The scheme: reverse the string, then rotate every printable
//! non-space ASCII byte by a fixed shift within the `!`..=`~` range. Both
//! directions take the same shift constant.

/// Shift applied by [`TokenStore`](super::store::TokenStore) when persisting.
pub const TOKEN_SHIFT: u8 = 13;

const ROT_BASE: u8 = b'!';
const ROT_SPAN: u8 = 94; // '!'..='~' inclusive

/// Obfuscate `text` with the given shift. Characters outside the printable
/// ASCII range pass through unchanged, so any token round-trips.
pub fn obfuscate(text: &str, shift: u8) -> String {
    text.chars()
        .rev()
        .map(|c| rotate(c, shift % ROT_SPAN))
        .collect()
}

/// Invert [`obfuscate`] for the same shift.
pub fn deobfuscate(text: &str, shift: u8) -> String {
    let back = (ROT_SPAN - shift % ROT_SPAN) % ROT_SPAN;
    text.chars().rev().map(|c| rotate(c, back)).collect()
}

fn rotate(c: char, by: u8) -> char {
    if c.is_ascii() {
        let b = c as u8;
        if (ROT_BASE..ROT_BASE + ROT_SPAN).contains(&b) {
            return ((b - ROT_BASE + by) % ROT_SPAN + ROT_BASE) as char;
        }
    }
    c
}
