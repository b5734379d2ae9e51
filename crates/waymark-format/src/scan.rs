//! Digit-run accumulation over loosely-formatted text.
//!
//! The map header formats interleave digits with arbitrary prose
//! (`"height 42"`, `"42,13 comment"`). The scanners here make the
//! accumulation rules explicit instead of relying on character-code
//! arithmetic: only ASCII `0-9` count as digits, everything else is
//! either skipped or a terminator depending on the dialect.

/// Accumulate every ASCII digit in `line` into one decimal value.
///
/// Non-digit characters are skipped, not treated as terminators, so
/// `"height 42"` and `"4x2"` both decode to 42. A line with no digits
/// decodes to 0. Saturates instead of overflowing.
pub fn digits_in_line(line: &str) -> u64 {
    let mut value: u64 = 0;
    for c in line.chars() {
        if let Some(d) = c.to_digit(10) {
            value = value.saturating_mul(10).saturating_add(u64::from(d));
        }
    }
    value
}

/// Accumulate ASCII digits from `chars` until a terminator is seen.
///
/// Non-digit, non-terminator characters are skipped. Consumes the
/// terminator. Returns the decoded value and whether a terminator was
/// actually found before the iterator ran out.
pub fn digits_until(
    chars: &mut impl Iterator<Item = char>,
    is_terminator: impl Fn(char) -> bool,
) -> (u64, bool) {
    let mut value: u64 = 0;
    for c in chars {
        if is_terminator(c) {
            return (value, true);
        }
        if let Some(d) = c.to_digit(10) {
            value = value.saturating_mul(10).saturating_add(u64::from(d));
        }
    }
    (value, false)
}
