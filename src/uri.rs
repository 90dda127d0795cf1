//! The owned, parsed URI value.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::compliance;
use crate::error::{ParseError, ParseOutcome};
use crate::parser::{self, RawComponents};
use crate::view::View;

/// A URI split into component views over one owned text buffer.
///
/// Parsing is lenient: any input free of the two structural faults (an `@`
/// after an empty userinfo, a query pair without `=`) segments successfully,
/// regardless of RFC conformance. Strict grammar checking is a separate,
/// re-runnable pass exposed as [`is_compliant`](Self::is_compliant).
///
/// Every accessor returns a slice borrowed from the buffer; a component is
/// absent when its byte length is zero, so an explicitly-present-but-empty
/// component (for example the port in `"ssh://host:/"`) is indistinguishable
/// from a missing one.
///
/// # Examples
///
/// ```
/// use uri_view::Uri;
///
/// let uri = Uri::parse("https://user@host.example:8080/a/b?x=1&y=2#frag")?;
/// assert_eq!(uri.scheme(), Some("https"));
/// assert_eq!(uri.user(), Some("user"));
/// assert_eq!(uri.host(), Some("host.example"));
/// assert_eq!(uri.port(), Some("8080"));
/// assert_eq!(uri.port_number(), 8080);
/// assert_eq!(uri.path(), Some("/a/b"));
/// assert_eq!(uri.query_line(), Some("x=1&y=2"));
/// assert_eq!(uri.fragment(), Some("frag"));
/// assert!(uri.is_absolute_path());
/// assert!(uri.has_authority());
/// # Ok::<_, uri_view::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Uri {
    source: String,
    outcome: ParseOutcome,
    is_absolute_path: bool,
    scheme: View,
    user: View,
    host: View,
    port: View,
    path: View,
    query_line: View,
    fragment: View,
    segments: Vec<View>,
    query_pairs: Vec<(View, View)>,
}

impl Uri {
    /// Parses a URI from an owned (or owning-convertible) text value.
    ///
    /// An empty input is not an error: it yields an empty value whose
    /// [`outcome`](Self::outcome) is [`ParseOutcome::EmptyInput`] and whose
    /// accessors all return `None`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on one of the two structural faults:
    /// `MalformedAuthority` or `MalformedQueryPair`.
    pub fn parse(input: impl Into<String>) -> Result<Self, ParseError> {
        let source = input.into();
        match parser::parse(&source) {
            Ok(raw) => Ok(Self::assemble(source, raw)),
            Err(kind) => Err(ParseError { input: source, kind }),
        }
    }

    fn assemble(source: String, raw: RawComponents) -> Self {
        Self {
            source,
            outcome: raw.outcome,
            is_absolute_path: raw.is_absolute_path,
            scheme: raw.scheme,
            user: raw.user,
            host: raw.host,
            port: raw.port,
            path: raw.path,
            query_line: raw.query_line,
            fragment: raw.fragment,
            segments: raw.segments,
            query_pairs: raw.query_pairs,
        }
    }

    /// Returns the outcome recorded when this value was parsed.
    #[must_use]
    pub const fn outcome(&self) -> ParseOutcome {
        self.outcome
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.resolve(&self.source)
    }

    /// Returns the userinfo, if present.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.resolve(&self.source)
    }

    /// Returns the host, if present.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.resolve(&self.source)
    }

    /// Returns the port as text, if present.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.resolve(&self.source)
    }

    /// Returns the port as a number; 0 when the port is absent or not
    /// numeric.
    #[must_use]
    pub fn port_number(&self) -> u32 {
        self.port()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }

    /// Returns the path, if present. An absolute path includes its root `/`.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.resolve(&self.source)
    }

    /// Returns the query line (the text between `?` and `#`), if present.
    #[must_use]
    pub fn query_line(&self) -> Option<&str> {
        self.query_line.resolve(&self.source)
    }

    /// Returns the fragment, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.resolve(&self.source)
    }

    /// Returns path segment `i`; the index is clamped to the last valid
    /// segment, never out of range.
    ///
    /// Non-final segments retain their trailing `/`. Returns `None` when
    /// there is no path or the path has no segments (a bare `"/"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_view::Uri;
    ///
    /// let uri = Uri::parse("https://h/a/b")?;
    /// assert_eq!(uri.segment(0), Some("a/"));
    /// assert_eq!(uri.segment(1), Some("b"));
    /// assert_eq!(uri.segment(99), Some("b"));
    /// # Ok::<_, uri_view::ParseError>(())
    /// ```
    #[must_use]
    pub fn segment(&self, i: usize) -> Option<&str> {
        if self.path.is_absent() || self.segments.is_empty() {
            return None;
        }
        let i = i.min(self.segments.len() - 1);
        Some(self.segments[i].of(&self.source))
    }

    /// Returns the path prefix through segment `i` inclusive, including the
    /// root `/` of an absolute path. The index is clamped like
    /// [`segment`](Self::segment).
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_view::Uri;
    ///
    /// let uri = Uri::parse("https://h/a/b/c")?;
    /// assert_eq!(uri.path_until(1), Some("/a/b/"));
    /// # Ok::<_, uri_view::ParseError>(())
    /// ```
    #[must_use]
    pub fn path_until(&self, i: usize) -> Option<&str> {
        if self.path.is_absent() || self.segments.is_empty() {
            return None;
        }
        let i = i.min(self.segments.len() - 1);
        Some(&self.source[self.path.start()..self.segments[i].end()])
    }

    /// Returns the number of path segments, or `None` when there is no path.
    #[must_use]
    pub fn segment_count(&self) -> Option<usize> {
        if self.path.is_absent() {
            None
        } else {
            Some(self.segments.len())
        }
    }

    /// Returns the query pairs as a mapping sorted by key, or `None` when no
    /// pairs were parsed.
    ///
    /// Duplicate keys are first-wins: the earliest parsed value for a key is
    /// the one exposed.
    #[must_use]
    pub fn queries(&self) -> Option<BTreeMap<&str, &str>> {
        if self.query_pairs.is_empty() {
            return None;
        }
        let mut map = BTreeMap::new();
        for (key, value) in &self.query_pairs {
            map.entry(key.of(&self.source)).or_insert(value.of(&self.source));
        }
        Some(map)
    }

    /// Returns true if a host was found; the minimal mark of an authority.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.host.is_present()
    }

    /// Returns true if a path was found.
    #[must_use]
    pub fn has_path(&self) -> bool {
        self.path.is_present()
    }

    /// Returns true if a fragment was found.
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_present()
    }

    /// Returns true if at least one query pair was parsed.
    #[must_use]
    pub fn has_queries(&self) -> bool {
        !self.query_pairs.is_empty()
    }

    /// Returns true if the path begins with `/`.
    #[must_use]
    pub const fn is_absolute_path(&self) -> bool {
        self.is_absolute_path
    }

    /// Returns true if the source text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Checks every extracted component against the RFC 3986 grammar.
    ///
    /// This is a pure pass over the views produced at parse time; it can be
    /// called any number of times and never alters the value. A compliant URI
    /// must name a scheme and a host.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_view::Uri;
    ///
    /// assert!(Uri::parse("https://example.com/a/b?x=1#top")?.is_compliant());
    /// // Lenient parsing accepts the space; the compliance pass does not.
    /// assert!(!Uri::parse("https://exa mple.com/")?.is_compliant());
    /// // No host: parsed fine, not compliant.
    /// assert!(!Uri::parse("mailto:bob@example.com")?.is_compliant());
    /// # Ok::<_, uri_view::ParseError>(())
    /// ```
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        compliance::scheme(self.scheme.of(&self.source))
            && compliance::userinfo(self.user.of(&self.source))
            && self.host.is_present()
            && compliance::host(self.host.of(&self.source))
            && compliance::port(self.port.of(&self.source))
            && self
                .segments
                .iter()
                .all(|seg| compliance::path_segment(seg.of(&self.source)))
            && compliance::query_or_fragment(self.query_line.of(&self.source))
            && compliance::query_or_fragment(self.fragment.of(&self.source))
    }

    /// Replaces the scheme, rebuilding the buffer and re-deriving every view
    /// with a full re-parse.
    ///
    /// When the value has no scheme, one is inserted: with `"://"` if the
    /// value has an authority (so its host survives the re-parse), otherwise
    /// with a bare `":"`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the rebuilt text hits a structural fault (for
    /// example a scheme text containing `?`); the value is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_view::Uri;
    ///
    /// let mut uri = Uri::parse("http://example.com/a")?;
    /// uri.set_scheme("https")?;
    /// assert_eq!(uri.as_str(), "https://example.com/a");
    /// assert_eq!(uri.host(), Some("example.com"));
    /// # Ok::<_, uri_view::ParseError>(())
    /// ```
    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), ParseError> {
        let mut source = String::with_capacity(scheme.len() + self.source.len() + 3);
        source.push_str(scheme);
        if self.scheme.is_present() {
            source.push_str(&self.source[self.scheme.end()..]);
        } else if self.host.is_present() {
            source.push_str("://");
            source.push_str(&self.source);
        } else {
            source.push(':');
            source.push_str(&self.source);
        }
        *self = Self::parse(source)?;
        Ok(())
    }

    /// Returns the full source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Consumes this value and yields the underlying buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.source
    }

    /// Resets to the empty value, discarding the buffer and every view.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for Uri {
    /// Creates an empty URI: no buffer, every view absent,
    /// outcome [`ParseOutcome::EmptyInput`].
    fn default() -> Self {
        Self::assemble(String::new(), RawComponents::default())
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Uri {}

impl Hash for Uri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source.cmp(&other.source)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(s).map_err(serde::de::Error::custom)
    }
}
