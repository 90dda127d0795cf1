//! Zero-copy URI decomposition with RFC 3986 compliance checks.
//!
//! This crate splits URI text into component views over a single owned
//! buffer, then lets a separate strict pass judge conformance.
//!
//! # Overview
//!
//! A [`Uri`] holds one `String` and a set of offset ranges into it:
//!
//! ```text
//! scheme://user@host:port/path?query#fragment
//! ```
//!
//! Parsing is deliberately *lenient*. Only two structural faults abort it: an
//! `@` directly after the authority marker (an empty userinfo), and a query
//! piece with no `=`. Everything else — exotic characters, a digitless port,
//! a malformed host — parses fine and is reported by the separate
//! [`is_compliant`](Uri::is_compliant) pass. This keeps "carve up whatever
//! the wire handed us" and "is this actually RFC 3986?" as two independent
//! questions.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_view::Uri;
//!
//! let uri = Uri::parse("https://user@host.example:8080/a/b?x=1&y=2#frag").unwrap();
//!
//! assert_eq!(uri.scheme(), Some("https"));
//! assert_eq!(uri.host(), Some("host.example"));
//! assert_eq!(uri.port_number(), 8080);
//! assert_eq!(uri.segment(1), Some("b"));
//! assert_eq!(uri.queries().unwrap()["x"], "1");
//! assert!(uri.is_compliant());
//! ```
//!
//! # Lenient vs. strict
//!
//! ```rust
//! use uri_view::Uri;
//!
//! // Segments fine, despite the space in the host.
//! let uri = Uri::parse("https://exa mple.com/a").unwrap();
//! assert_eq!(uri.host(), Some("exa mple.com"));
//! assert!(!uri.is_compliant());
//! ```
//!
//! # Component absence
//!
//! Every accessor returns `Option<&str>`; a component is absent exactly when
//! its text is empty. `"ssh://host:/"` therefore reports *no* port even
//! though the `:` separator is present.
//!
//! The low-level grammar predicates used by the strict pass are exported in
//! [`chars`] and [`elements`] for callers that validate host or address text
//! on its own.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chars;
mod compliance;
pub mod elements;
mod error;
mod parser;
pub mod prelude;
mod uri;
mod view;

pub use error::{ParseError, ParseErrorKind, ParseOutcome};
pub use uri::Uri;
