//! The component-extraction state machine.
//!
//! Parsing is *lenient*: it segments the input into component views and
//! enforces only two structural invariants (no `@` after an empty userinfo,
//! no query piece without `=`). Grammar conformance of the extracted
//! components is checked separately by [`crate::compliance`].

use crate::error::{ParseErrorKind, ParseOutcome};
use crate::view::View;

/// The states of the segmentation machine, in transition order.
///
/// Each step consumes a prefix of the remaining input and possibly records
/// one component view. Edge-case ordering here is load-bearing: the
/// authority-detection heuristic and the last-colon host/port split must not
/// be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseStep {
    Scheme,
    CheckAuthority,
    Authority,
    CheckSeparator,
    Path,
    Query,
    Fragment,
}

/// Component views extracted by a single parse, all bound to the source text
/// the parse ran over.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawComponents {
    pub(crate) scheme: View,
    pub(crate) user: View,
    pub(crate) host: View,
    pub(crate) port: View,
    pub(crate) path: View,
    pub(crate) query_line: View,
    pub(crate) fragment: View,
    /// Ordered path segments; non-final segments retain their trailing `/`.
    pub(crate) segments: Vec<View>,
    /// Query pairs in parse order, key view then value view.
    pub(crate) query_pairs: Vec<(View, View)>,
    pub(crate) is_absolute_path: bool,
    pub(crate) outcome: ParseOutcome,
}

/// Runs the state machine over `source`.
///
/// An empty input short-circuits with `ParseOutcome::EmptyInput` and every
/// view absent. Any other input either segments fully (`NoError`) or aborts
/// on one of the two structural faults.
pub(crate) fn parse(source: &str) -> Result<RawComponents, ParseErrorKind> {
    let mut out = RawComponents::default();
    if source.is_empty() {
        return Ok(out);
    }
    out.outcome = ParseOutcome::NoError;

    let mut cur = 0;
    let mut step = ParseStep::Scheme;

    while cur < source.len() {
        let rest = &source[cur..];
        match step {
            ParseStep::Scheme => {
                // The scheme is the text before the first ':' when that colon
                // precedes any '/', '?', or '#'. The ':' is consumed; a
                // following "//" is left for CheckAuthority.
                match rest.find([':', '/', '?', '#']) {
                    Some(i) if rest.as_bytes()[i] == b':' => {
                        out.scheme = View::new(cur, i);
                        cur += i + 1;
                    }
                    _ => {}
                }
                step = ParseStep::CheckAuthority;
            }
            ParseStep::CheckAuthority => {
                // Authority is present when the remainder carries the "//"
                // marker. Without a scheme the heuristic widens: anything
                // before the first '/' (or an input with no '/' at all) is
                // taken for an authority, so "host.com/path" and
                // "bob@example.com" resolve as host text. After a scheme the
                // marker is required, so "mailto:bob@example.com" falls
                // through to a rootless path instead.
                if rest.starts_with("//") {
                    cur += 2;
                    step = ParseStep::Authority;
                } else if out.scheme.is_absent() && !matches!(rest.find('/'), Some(0)) {
                    step = ParseStep::Authority;
                } else {
                    step = ParseStep::CheckSeparator;
                }
            }
            ParseStep::Authority => {
                let end = rest.find(['/', '#', '?']).unwrap_or(rest.len());
                let authority = &rest[..end];

                let mut host_start = cur;
                let mut host_part = authority;
                if let Some(at) = authority.find('@') {
                    if at == 0 {
                        return Err(ParseErrorKind::MalformedAuthority { position: cur });
                    }
                    out.user = View::new(cur, at);
                    host_start = cur + at + 1;
                    host_part = &authority[at + 1..];
                }

                if !host_part.is_empty() {
                    // Split on the last ':' — not the first — because an IPv6
                    // literal host contains colons of its own.
                    match host_part.rfind(':') {
                        Some(colon) => {
                            out.host = View::new(host_start, colon);
                            out.port =
                                View::new(host_start + colon + 1, host_part.len() - colon - 1);
                        }
                        None => out.host = View::new(host_start, host_part.len()),
                    }
                }

                cur += end;
                step = ParseStep::CheckSeparator;
            }
            ParseStep::CheckSeparator => {
                step = match rest.as_bytes()[0] {
                    b'/' => ParseStep::Path,
                    b'?' => {
                        cur += 1;
                        ParseStep::Query
                    }
                    b'#' => {
                        cur += 1;
                        ParseStep::Fragment
                    }
                    // Anything else starts a rootless path, e.g. the
                    // remainder of "mailto:bob@example.com".
                    _ => ParseStep::Path,
                };
            }
            ParseStep::Path => {
                let end = rest.find(['?', '#']).unwrap_or(rest.len());
                let path = &rest[..end];
                out.path = View::new(cur, end);
                out.is_absolute_path = path.starts_with('/');

                // The root '/' belongs to the path view but to no segment.
                let skip = usize::from(out.is_absolute_path);
                let mut seg_start = cur + skip;
                let mut remaining = &path[skip..];
                while !remaining.is_empty() {
                    match remaining.find('/') {
                        Some(i) => {
                            out.segments.push(View::new(seg_start, i + 1));
                            seg_start += i + 1;
                            remaining = &remaining[i + 1..];
                        }
                        None => {
                            out.segments.push(View::new(seg_start, remaining.len()));
                            break;
                        }
                    }
                }

                cur += end;
                step = ParseStep::CheckSeparator;
            }
            ParseStep::Query => {
                let end = rest.find('#').unwrap_or(rest.len());
                out.query_line = View::new(cur, end);

                let mut piece_start = cur;
                let mut remaining = &rest[..end];
                while !remaining.is_empty() {
                    let (piece, advance) = match remaining.find('&') {
                        Some(i) => (&remaining[..i], i + 1),
                        None => (remaining, remaining.len()),
                    };
                    let Some(eq) = piece.find('=') else {
                        return Err(ParseErrorKind::MalformedQueryPair {
                            pair: piece.to_string(),
                            position: piece_start,
                        });
                    };
                    out.query_pairs.push((
                        View::new(piece_start, eq),
                        View::new(piece_start + eq + 1, piece.len() - eq - 1),
                    ));
                    piece_start += advance;
                    remaining = &remaining[advance..];
                }

                cur += end;
                if source[cur..].starts_with('#') {
                    cur += 1;
                }
                step = ParseStep::Fragment;
            }
            ParseStep::Fragment => {
                // Terminal: the remainder, unconditionally.
                out.fragment = View::new(cur, source.len() - cur);
                cur = source.len();
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(source: &str) -> RawComponents {
        parse(source).expect("structurally valid")
    }

    fn text(v: View, source: &str) -> Option<&str> {
        v.resolve(source)
    }

    #[test]
    fn full_uri_decomposition() {
        let s = "https://user@host.example:8080/a/b?x=1&y=2#frag";
        let c = views(s);
        assert_eq!(text(c.scheme, s), Some("https"));
        assert_eq!(text(c.user, s), Some("user"));
        assert_eq!(text(c.host, s), Some("host.example"));
        assert_eq!(text(c.port, s), Some("8080"));
        assert_eq!(text(c.path, s), Some("/a/b"));
        assert_eq!(text(c.query_line, s), Some("x=1&y=2"));
        assert_eq!(text(c.fragment, s), Some("frag"));
        assert!(c.is_absolute_path);
        assert_eq!(c.outcome, ParseOutcome::NoError);

        let segs: Vec<_> = c.segments.iter().map(|v| v.of(s)).collect();
        assert_eq!(segs, ["a/", "b"]);

        let pairs: Vec<_> = c.query_pairs.iter().map(|(k, v)| (k.of(s), v.of(s))).collect();
        assert_eq!(pairs, [("x", "1"), ("y", "2")]);
    }

    #[test]
    fn empty_input_reports_empty_outcome() {
        let c = views("");
        assert_eq!(c.outcome, ParseOutcome::EmptyInput);
        assert!(c.scheme.is_absent());
        assert!(c.host.is_absent());
        assert!(c.path.is_absent());
        assert!(c.segments.is_empty());
        assert!(c.query_pairs.is_empty());
    }

    #[test]
    fn leading_at_is_malformed_authority() {
        let err = parse("@host.com/path").unwrap_err();
        assert!(matches!(err, ParseErrorKind::MalformedAuthority { position: 0 }));
    }

    #[test]
    fn query_piece_without_equals_is_malformed() {
        let err = parse("http://host?k1=v1&k2").unwrap_err();
        assert!(matches!(
            err,
            ParseErrorKind::MalformedQueryPair { ref pair, .. } if pair == "k2"
        ));
    }

    #[test]
    fn mailto_parses_as_scheme_and_rootless_path() {
        let s = "mailto:bob@example.com";
        let c = views(s);
        assert_eq!(text(c.scheme, s), Some("mailto"));
        assert_eq!(text(c.user, s), None);
        assert_eq!(text(c.host, s), None);
        assert_eq!(text(c.path, s), Some("bob@example.com"));
        assert!(!c.is_absolute_path);
    }

    #[test]
    fn schemeless_host_and_path() {
        let s = "host.com/path/to/file";
        let c = views(s);
        assert_eq!(text(c.scheme, s), None);
        assert_eq!(text(c.host, s), Some("host.com"));
        assert_eq!(text(c.path, s), Some("/path/to/file"));
        let segs: Vec<_> = c.segments.iter().map(|v| v.of(s)).collect();
        assert_eq!(segs, ["path/", "to/", "file"]);
    }

    #[test]
    fn schemeless_bare_host() {
        let s = "example.com";
        let c = views(s);
        assert_eq!(text(c.host, s), Some("example.com"));
        assert_eq!(text(c.path, s), None);
    }

    #[test]
    fn rooted_path_without_authority() {
        let s = "/path/to/file";
        let c = views(s);
        assert_eq!(text(c.host, s), None);
        assert_eq!(text(c.path, s), Some("/path/to/file"));
        assert!(c.is_absolute_path);
    }

    #[test]
    fn ipv6_host_splits_port_on_last_colon() {
        let s = "ldap://[2001:db8::7]:389/c=GB?objectClass=one";
        let c = views(s);
        assert_eq!(text(c.host, s), Some("[2001:db8::7]"));
        assert_eq!(text(c.port, s), Some("389"));
        assert_eq!(text(c.path, s), Some("/c=GB"));
        assert_eq!(text(c.query_line, s), Some("objectClass=one"));
    }

    #[test]
    fn trailing_port_colon_leaves_port_absent() {
        let s = "ssh://device.local:/";
        let c = views(s);
        assert_eq!(text(c.host, s), Some("device.local"));
        assert_eq!(text(c.port, s), None);
        assert_eq!(text(c.path, s), Some("/"));
        assert!(c.segments.is_empty());
    }

    #[test]
    fn fragment_directly_after_authority() {
        let s = "http://host#frag";
        let c = views(s);
        assert_eq!(text(c.host, s), Some("host"));
        assert_eq!(text(c.fragment, s), Some("frag"));
        assert_eq!(text(c.query_line, s), None);
    }

    #[test]
    fn query_without_fragment() {
        let s = "http://host?a=1";
        let c = views(s);
        assert_eq!(text(c.query_line, s), Some("a=1"));
        assert_eq!(text(c.fragment, s), None);
    }

    #[test]
    fn empty_query_line_before_fragment() {
        let s = "http://host?#frag";
        let c = views(s);
        assert_eq!(text(c.query_line, s), None);
        assert!(c.query_pairs.is_empty());
        assert_eq!(text(c.fragment, s), Some("frag"));
    }

    #[test]
    fn trailing_ampersand_is_tolerated() {
        let s = "http://host?a=1&";
        let c = views(s);
        let pairs: Vec<_> = c.query_pairs.iter().map(|(k, v)| (k.of(s), v.of(s))).collect();
        assert_eq!(pairs, [("a", "1")]);
    }

    #[test]
    fn leading_ampersand_is_malformed() {
        let err = parse("http://host?&a=1").unwrap_err();
        assert!(matches!(err, ParseErrorKind::MalformedQueryPair { ref pair, .. } if pair.is_empty()));
    }

    #[test]
    fn pair_with_empty_value_is_kept() {
        let s = "http://host?k=";
        let c = views(s);
        let (k, v) = c.query_pairs[0];
        assert_eq!(k.of(s), "k");
        assert!(v.is_absent());
    }

    #[test]
    fn duplicate_keys_are_recorded_in_parse_order() {
        let s = "http://host?a=1&a=2";
        let c = views(s);
        let pairs: Vec<_> = c.query_pairs.iter().map(|(k, v)| (k.of(s), v.of(s))).collect();
        assert_eq!(pairs, [("a", "1"), ("a", "2")]);
    }

    #[test]
    fn trailing_path_separator_keeps_separator_in_segment() {
        let s = "http://host/a/b/";
        let c = views(s);
        let segs: Vec<_> = c.segments.iter().map(|v| v.of(s)).collect();
        assert_eq!(segs, ["a/", "b/"]);
    }

    #[test]
    fn segments_reconstruct_relative_path() {
        let s = "https://h/a/b/c?x=1";
        let c = views(s);
        let joined: String = c.segments.iter().map(|v| v.of(s)).collect();
        assert_eq!(format!("/{joined}"), c.path.of(s));
    }

    #[test]
    fn userinfo_before_bare_host() {
        let s = "user@example.com";
        let c = views(s);
        assert_eq!(text(c.user, s), Some("user"));
        assert_eq!(text(c.host, s), Some("example.com"));
    }

    #[test]
    fn double_slash_without_scheme_is_authority() {
        let s = "//example.com/a";
        let c = views(s);
        assert_eq!(text(c.scheme, s), None);
        assert_eq!(text(c.host, s), Some("example.com"));
        assert_eq!(text(c.path, s), Some("/a"));
    }

    #[test]
    fn scheme_only_input() {
        let s = "mailto:";
        let c = views(s);
        assert_eq!(text(c.scheme, s), Some("mailto"));
        assert_eq!(text(c.path, s), None);
    }

    #[test]
    fn bare_query_input() {
        let s = "?a=1";
        let c = views(s);
        assert_eq!(text(c.host, s), None);
        assert_eq!(text(c.query_line, s), Some("a=1"));
    }

    #[test]
    fn bare_fragment_input() {
        let s = "#frag";
        let c = views(s);
        assert_eq!(text(c.fragment, s), Some("frag"));
    }
}
