//! Extension traits for attaching metadata from `Result` chains.
//!
//! - [`ResultExt`]: `.wrap_err()`, `.wrap_err_with()` and `.with_options()` on any
//!   `Result` whose error converts into a [`BoxError`](crate::BoxError)
//!
//! # Examples
//!
//! ```
//! use error_meta::traits::ResultExt;
//! use error_meta::{http_code_of, with_http_code};
//!
//! let result: Result<(), std::io::Error> = Err(std::io::Error::other("refused"));
//! let err = result.wrap_err("calling inventory", [with_http_code(502)]).unwrap_err();
//!
//! assert_eq!(http_code_of(&*err), 502);
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
