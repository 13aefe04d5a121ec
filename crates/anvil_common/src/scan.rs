//! Numeric literal and token scanning helpers.
//!
//! Integer literals follow assembler conventions: radix prefixes
//! (`0x`/`0h`/`$` hex, `0b`/`0y` binary, `0o`/`0q` octal, `0d`/`0t`
//! decimal), radix suffixes (`h`/`x`, `b`/`y`, `o`/`q`, `d`/`t`), and `_`
//! as a digit-group separator. Signs are not part of a literal; unary
//! minus belongs to the expression layer.

/// Errors produced while scanning a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumError {
    /// The literal had no digits.
    #[error("empty numeric literal")]
    Empty,
    /// A character was not a valid digit in the literal's radix.
    #[error("invalid digit '{0}' in numeric literal")]
    InvalidDigit(char),
    /// The literal does not fit in 64 bits.
    ///
    /// Callers usually report this through the number-overflow warning
    /// class rather than as a hard error.
    #[error("numeric literal does not fit in 64 bits")]
    Overflow,
}

/// Parses an integer literal using assembler number rules.
///
/// The token must start with an ASCII digit or `$`; this keeps literals
/// distinguishable from identifiers like `ffh`. The returned value is the
/// 64-bit bit pattern of the literal, so `0xffff_ffff_ffff_ffff` comes
/// back as `-1`.
pub fn read_num(s: &str) -> Result<i64, NumError> {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return Err(NumError::Empty);
    };
    if first != b'$' && !first.is_ascii_digit() {
        return Err(NumError::InvalidDigit(first as char));
    }

    let (radix, body) = if first == b'$' {
        (16, &s[1..])
    } else if bytes.len() > 2 && first == b'0' {
        match bytes[1].to_ascii_lowercase() {
            b'x' | b'h' => (16, &s[2..]),
            b'b' | b'y' => (2, &s[2..]),
            b'o' | b'q' => (8, &s[2..]),
            b'd' | b't' => (10, &s[2..]),
            _ => split_radix_suffix(s),
        }
    } else {
        split_radix_suffix(s)
    };

    let mut acc: u64 = 0;
    let mut seen = false;
    for c in body.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix).ok_or(NumError::InvalidDigit(c))? as u64;
        acc = acc
            .checked_mul(u64::from(radix))
            .and_then(|a| a.checked_add(digit))
            .ok_or(NumError::Overflow)?;
        seen = true;
    }
    if !seen {
        return Err(NumError::Empty);
    }
    Ok(acc as i64)
}

/// Splits a trailing radix-suffix letter off a literal, defaulting to
/// decimal when the last character is not a recognized suffix.
fn split_radix_suffix(s: &str) -> (u32, &str) {
    match s.as_bytes()[s.len() - 1].to_ascii_lowercase() {
        b'h' | b'x' => (16, &s[..s.len() - 1]),
        b'b' | b'y' => (2, &s[..s.len() - 1]),
        b'o' | b'q' => (8, &s[..s.len() - 1]),
        b'd' | b't' => (10, &s[..s.len() - 1]),
        _ => (10, s),
    }
}

/// Converts a character-constant payload (the text between the quotes)
/// into its little-endian numeric value.
///
/// The first byte lands in the low-order position, so `'ab'` is `0x6261`.
/// Returns the value and a flag that is `true` when the constant was
/// longer than 8 bytes and had to be truncated; callers report that
/// through the number-overflow warning class.
pub fn read_str_num(bytes: &[u8]) -> (i64, bool) {
    let truncated = bytes.len() > 8;
    let mut acc: u64 = 0;
    for (i, &b) in bytes.iter().take(8).enumerate() {
        acc |= u64::from(b) << (8 * i);
    }
    (acc as i64, truncated)
}

/// Returns `s` with leading ASCII whitespace removed.
pub fn skip_spaces(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Splits the leading word off `s`, returning `(word, rest)` with
/// whitespace around the boundary consumed.
pub fn split_word(s: &str) -> (&str, &str) {
    let s = skip_spaces(s);
    match s.find(|c: char| c.is_ascii_whitespace()) {
        Some(i) => (&s[..i], skip_spaces(&s[i..])),
        None => (s, ""),
    }
}

/// Splits a `key=value` directive option into its parts.
///
/// A bare `key` yields `(key, None)`.
pub fn opt_val(s: &str) -> (&str, Option<&str>) {
    match s.split_once('=') {
        Some((key, val)) => (key, Some(val)),
        None => (s, None),
    }
}
