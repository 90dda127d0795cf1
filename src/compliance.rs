//! Per-component RFC 3986 grammar rules.
//!
//! This is the strict half of the two-tier model: a pure, re-runnable pass
//! over views the lenient parser already extracted. Nothing here is consulted
//! during parsing.

use crate::chars;
use crate::elements;

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
///
/// An absent scheme is non-compliant: a compliant URI names its scheme.
pub(crate) fn scheme(component: &str) -> bool {
    let bytes = component.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    chars::is_alpha(first)
        && rest
            .iter()
            .all(|&b| chars::is_alpha(b) || chars::is_digit(b) || matches!(b, b'+' | b'-' | b'.'))
}

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub(crate) fn userinfo(component: &str) -> bool {
    elements::all_valid_with(component, b":")
}

/// Host rule: a component containing `[` anywhere must be an IP literal;
/// otherwise it must be an IPv4 address or a registered name.
pub(crate) fn host(component: &str) -> bool {
    if component.contains('[') {
        return elements::is_ip_literal(component);
    }
    elements::is_ipv4(component) || elements::is_regular_name(component)
}

/// `port = *DIGIT` — the empty port is compliant.
pub(crate) fn port(component: &str) -> bool {
    component.bytes().all(chars::is_digit)
}

/// Path-segment rule: `pchar` plus the `/` retained on non-final segments.
pub(crate) fn path_segment(component: &str) -> bool {
    elements::all_valid_with(component, b":@/")
}

/// Query and fragment share one character rule: `pchar / "/" / "?"`.
pub(crate) fn query_or_fragment(component: &str) -> bool {
    elements::all_valid_with(component, b":@/?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_must_start_with_letter() {
        assert!(scheme("https"));
        assert!(scheme("z39.50r"));
        assert!(scheme("coap+tcp"));
        assert!(!scheme("1http"));
        assert!(!scheme(""));
        assert!(!scheme("ht tp"));
        assert!(!scheme("ht_tp"));
    }

    #[test]
    fn userinfo_allows_colon_and_pct() {
        assert!(userinfo(""));
        assert!(userinfo("user:pass"));
        assert!(userinfo("u%20ser"));
        assert!(!userinfo("user@"));
        assert!(!userinfo("us er"));
    }

    #[test]
    fn host_bracket_forces_ip_literal() {
        assert!(host("[::1]"));
        assert!(!host("[1.2.3.4]"));
        assert!(!host("a[b"));
        assert!(host("192.168.1.1"));
        assert!(host("example.com"));
        assert!(host(""));
        assert!(!host("exa mple"));
    }

    #[test]
    fn port_is_all_digits() {
        assert!(port(""));
        assert!(port("8080"));
        assert!(!port("80a"));
    }

    #[test]
    fn path_segment_allows_colon_at_slash() {
        assert!(path_segment("a/"));
        assert!(path_segment("c=GB"));
        assert!(path_segment("v:1@x"));
        assert!(!path_segment("a b"));
        assert!(!path_segment("a?b"));
    }

    #[test]
    fn query_and_fragment_share_rule() {
        assert!(query_or_fragment(""));
        assert!(query_or_fragment("x=1&y=2"));
        assert!(query_or_fragment("a/b?c"));
        assert!(!query_or_fragment("a b"));
        assert!(!query_or_fragment("a#b"));
    }
}
