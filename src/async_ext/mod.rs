//! Async extensions for error-meta.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-meta = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_meta::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> BoxResult<User> {
//!     fetch_from_db(id)
//!         .wrap_err("fetching user from database", [with_http_code(503)])
//!         .await
//! }
//! ```

mod future_ext;
mod wrap_future;

pub use future_ext::FutureResultExt;
pub use wrap_future::WrapFuture;
