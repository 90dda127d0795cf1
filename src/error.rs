//! Error and outcome types for URI parsing.

use std::fmt;

/// An error produced while splitting a URI into components.
///
/// Only the two *structural* faults below abort a parse. Everything else —
/// non-compliant characters in scheme, host, path, query, or fragment — is
/// observable solely through [`Uri::is_compliant`](crate::Uri::is_compliant),
/// which returns a boolean instead of signaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific structural fault
    pub kind: ParseErrorKind,
}

/// Structural parse faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An `@` separator appeared as the first character of the authority
    /// substring, leaving an empty userinfo before it.
    MalformedAuthority {
        /// Byte offset of the `@` in the input
        position: usize,
    },
    /// A `&`-delimited or final query segment contained no `=` separator.
    MalformedQueryPair {
        /// The offending key-value piece
        pair: String,
        /// Byte offset of the piece in the input
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MalformedAuthority { position } => {
                write!(f, "'@' at offset {position} cannot follow an empty userinfo")
            }
            ParseErrorKind::MalformedQueryPair { pair, position } => {
                write!(f, "query piece '{pair}' at offset {position} has no '=' separator")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The outcome recorded by a construction parse.
///
/// An empty input is a valid-but-trivial case, reported as a distinct
/// non-error outcome rather than a fault: every view of the resulting URI is
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseOutcome {
    /// The input was segmented without a structural fault.
    NoError,
    /// The input was empty; no segmentation was performed.
    #[default]
    EmptyInput,
}
