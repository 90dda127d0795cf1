//! Character classes from the RFC 3986 ABNF.
//!
//! These predicates operate on single bytes in the ASCII subset; any
//! non-ASCII byte fails every predicate.

/// Returns true if the byte is an ASCII letter (`A-Z` / `a-z`).
#[must_use]
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Returns true if the byte is an ASCII digit (`0-9`).
#[must_use]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Returns true if the byte is a hexadecimal digit (`0-9` / `A-F` / `a-f`).
#[must_use]
pub const fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// Returns true if the byte is in the `unreserved` class:
/// letter, digit, or one of `- . _ ~`.
#[must_use]
pub const fn is_unreserved(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte) || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Returns true if the byte is in the `sub-delims` class:
/// one of `! $ & ' ( ) * + , ; =`.
#[must_use]
pub const fn is_subdelimiter(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}
