//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus
//! [`FutureResultExt`](crate::async_ext::FutureResultExt) and
//! [`WrapFuture`](crate::async_ext::WrapFuture).
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

pub use crate::prelude::*;

pub use crate::async_ext::{FutureResultExt, WrapFuture};
