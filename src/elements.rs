//! Structural predicates over whole URI elements.
//!
//! These build on [`crate::chars`] and validate the host-related grammar
//! elements of RFC 3986: decimal octets, IPv4 addresses, IPv6 addresses
//! (leniently), bracketed IP literals, and registered names.

use crate::chars;

/// Returns true if `element` is a textual decimal octet.
///
/// The accepted ranges are keyed on length: one digit must encode a value in
/// (0, 9], two digits a value in [10, 99], three digits a value in [100, 255].
///
/// Note that the single character `"0"` is rejected. This is the documented
/// contract of this predicate (and makes `is_ipv4("0.0.0.0")` false); it is
/// preserved deliberately rather than silently corrected.
#[must_use]
pub fn is_decimal_octet(element: &str) -> bool {
    let bytes = element.as_bytes();
    if !bytes.iter().all(|&b| chars::is_digit(b)) {
        return false;
    }
    match bytes {
        [d] => *d > b'0',
        [_, _] | [_, _, _] => {
            let value: u16 = bytes.iter().fold(0, |acc, &b| acc * 10 + u16::from(b - b'0'));
            match bytes.len() {
                2 => (10..=99).contains(&value),
                _ => (100..=255).contains(&value),
            }
        }
        _ => false,
    }
}

/// Returns true if `element` is a dotted-quad IPv4 address.
///
/// Exactly four `.`-separated pieces are required; each piece must satisfy
/// [`is_decimal_octet`]. Any character other than a digit or `.` invalidates
/// immediately.
#[must_use]
pub fn is_ipv4(element: &str) -> bool {
    if !element.bytes().all(|b| chars::is_digit(b) || b == b'.') {
        return false;
    }
    let mut count = 0;
    for piece in element.split('.') {
        count += 1;
        if count > 4 || !is_decimal_octet(piece) {
            return false;
        }
    }
    count == 4
}

/// Returns true if `element` passes the lenient IPv6 character scan.
///
/// This accepts hex digits, colons, and — once a colon has been seen — dots
/// (tagging an embedded IPv4 tail, after which further colons are rejected).
/// It does not enforce group counts, double-colon rules, or address length;
/// it is a permissive character check, not an RFC 4291 validator.
#[must_use]
pub fn is_ipv6(element: &str) -> bool {
    let mut colon_seen = false;
    let mut ipv4_tail = false;
    for b in element.bytes() {
        if chars::is_hex_digit(b) {
            continue;
        }
        if b == b':' && !ipv4_tail {
            colon_seen = true;
            continue;
        }
        if b == b'.' && colon_seen {
            ipv4_tail = true;
            continue;
        }
        return false;
    }
    true
}

/// Returns true if `element` is a bracket-delimited IP literal with a
/// non-empty interior satisfying [`is_ipv6`].
#[must_use]
pub fn is_ip_literal(element: &str) -> bool {
    let bytes = element.as_bytes();
    match bytes {
        [b'[', interior @ .., b']'] if !interior.is_empty() => {
            is_ipv6(&element[1..element.len() - 1])
        }
        _ => false,
    }
}

/// Returns true if `element` is a registered name: every character is
/// unreserved, a sub-delimiter, or part of a percent-encoded triplet.
///
/// The empty string is valid; it represents an absent or empty host.
#[must_use]
pub fn is_regular_name(element: &str) -> bool {
    all_valid_with(element, &[])
}

/// Scans `element`, accepting unreserved and sub-delimiter characters, any
/// byte listed in `extra`, and percent-encoded triplets. Shared by the
/// registered-name check and the per-component compliance rules.
pub(crate) fn all_valid_with(element: &str, extra: &[u8]) -> bool {
    let bytes = element.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if chars::is_unreserved(b) || chars::is_subdelimiter(b) || extra.contains(&b) {
            i += 1;
            continue;
        }
        if b == b'%'
            && i + 2 < bytes.len()
            && chars::is_hex_digit(bytes[i + 1])
            && chars::is_hex_digit(bytes[i + 2])
        {
            i += 3;
            continue;
        }
        return false;
    }
    true
}
