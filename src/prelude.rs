//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_view::prelude::*;
//!
//! let uri = Uri::parse("https://example.com/a?x=1").unwrap();
//! assert!(uri.is_compliant());
//! ```

pub use crate::{
    // Core type
    Uri,
    // Errors and outcomes
    ParseError, ParseErrorKind, ParseOutcome,
    // Element-level grammar predicates
    elements::{is_decimal_octet, is_ip_literal, is_ipv4, is_ipv6, is_regular_name},
};
