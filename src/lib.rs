//! Attach an HTTP status code, an application code and a request context to errors,
//! and recover them wherever the error is handled.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_meta::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Creating an Error with Metadata
//!
//! ```
//! use error_meta::{find_enriched, new, with_custom_code, with_http_code};
//!
//! let err = new("resource not found", [with_http_code(404), with_custom_code(1001)]);
//!
//! let enriched = find_enriched(&*err).unwrap();
//! assert_eq!(enriched.http_code(), 404);
//! assert_eq!(enriched.custom_code(), 1001);
//! ```
//!
//! ## Wrapping a Cause
//!
//! ```
//! use error_meta::{http_code_of, with_http_code, wrap_error};
//!
//! let io = std::io::Error::other("original error");
//! let err = wrap_error(io, "file not found", [with_http_code(404)]);
//!
//! assert!(err.to_string().contains("file not found"));
//! assert!(err.to_string().contains("original error"));
//! assert_eq!(http_code_of(&*err), 404);
//! ```
//!
//! ## Handling at the Edge
//!
//! ```
//! use error_meta::{http_code_of, new, with_http_code, wrap_error, BoxError};
//!
//! fn status_for(err: &BoxError) -> u16 {
//!     match http_code_of(&**err) {
//!         0 => 500,
//!         code => code,
//!     }
//! }
//!
//! let err = wrap_error(new("row missing", [with_http_code(404)]), "loading user", []);
//! assert_eq!(status_for(&err), 404);
//! assert_eq!(status_for(&new("unclassified", [])), 500);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Constructors and metadata options
pub mod construct;
/// Chain-walking identity and type-extraction predicates
pub mod inspect;
/// Shorthand macros for the constructors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result`
pub mod traits;
/// Enriched, plain and context types
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing span capture (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use construct::*;
pub use inspect::{chain, custom_code_of, find, find_enriched, http_code_of, is, is_same, Chain};
pub use traits::*;
pub use types::{
    BoxError, BoxResult, ContextEntry, EnrichedError, ErrorVec, MessageError, PrefixedError,
    RequestContext,
};
