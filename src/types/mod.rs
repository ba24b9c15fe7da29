//! Error types and utilities.
//!
//! This module provides the enriched error value, the plain errors produced on the
//! lightweight paths, and the request context handle.
//!
//! # Examples
//!
//! ```
//! use error_meta::{EnrichedError, RequestContext};
//!
//! let err = EnrichedError::wrap(std::io::Error::other("disk full"), "saving upload")
//!     .with_http_code(507)
//!     .with_context(RequestContext::background().with_value("upload_id", "u-19"));
//!
//! assert_eq!(err.to_string(), "disk full: saving upload");
//! println!("{:#}", err);
//! // Error: saving upload (http: 507)
//! // Context:
//! //   - upload_id=u-19
//! // Caused by:
//! //   - disk full
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod enriched_error;
pub mod plain_error;
pub mod request_context;

pub use enriched_error::*;
pub use plain_error::*;
pub use request_context::*;

/// SmallVec-backed collection used for context entries.
///
/// Uses inline storage for a single element, which covers the common case of a
/// request id being the only attached value.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Type-erased error used as the return type of every constructor.
pub type BoxError = alloc_type::Box<dyn core::error::Error + Send + Sync + 'static>;

/// Result alias that carries a [`BoxError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type BoxResult<T> = Result<T, BoxError>;
