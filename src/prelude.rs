//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_meta::prelude::*;
//!
//! fn find_order(id: u64) -> BoxResult<()> {
//!     Err(new_err!("order {} not found", id; with_http_code(404), with_custom_code(2001)))
//! }
//!
//! let err = find_order(7).unwrap_err();
//! assert_eq!(http_code_of(&*err), 404);
//! assert_eq!(custom_code_of(&*err), 2001);
//! ```

// Macros
pub use crate::{new_err, request_context, wrap_err};

// Constructors and options
pub use crate::construct::{
    new, with_context, with_custom_code, with_http_code, wrap, wrap_error, ErrorOption,
};

// Inspection
pub use crate::inspect::{custom_code_of, find, find_enriched, http_code_of, is};

// Core types
pub use crate::types::{BoxError, BoxResult, EnrichedError, RequestContext};

// Traits
pub use crate::traits::ResultExt;
