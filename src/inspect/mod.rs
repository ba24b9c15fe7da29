//! Chain-walking predicates over [`Error::source`].
//!
//! - [`chain`] iterates an error followed by every transitive cause.
//! - [`find`] / [`find_enriched`] extract the first link of a given type.
//! - [`is`] / [`is_same`] test whether a target appears anywhere in the chain, by
//!   equality or by identity.
//!
//! # Examples
//!
//! ```
//! use error_meta::inspect::{find_enriched, http_code_of};
//! use error_meta::{new, with_http_code, wrap_error};
//!
//! let err = wrap_error(new("row missing", [with_http_code(404)]), "loading user", []);
//!
//! assert_eq!(http_code_of(&*err), 404);
//! assert_eq!(find_enriched(&*err).map(|e| e.message()), Some("loading user"));
//! ```

use crate::types::alloc_type::Box;
use crate::types::EnrichedError;
use core::error::Error;
use core::iter::FusedIterator;

/// Iterator over an error and its transitive causes, outermost first.
///
/// Created by [`chain`] or [`EnrichedError::chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Returns an iterator starting at `error` and following `source()` links.
#[inline]
pub fn chain<'a>(error: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(error) }
}

/// Returns the first link in the chain whose concrete type is `T`.
///
/// # Examples
///
/// ```
/// use error_meta::inspect::find;
/// use error_meta::{wrap_error, MessageError};
///
/// let err = wrap_error(MessageError::new("timeout"), "calling billing", []);
/// let root = find::<MessageError>(&*err).unwrap();
/// assert_eq!(root.message(), "timeout");
/// ```
#[inline]
pub fn find<'a, T>(error: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    chain(error).find_map(|link| link.downcast_ref::<T>())
}

/// Returns the outermost [`EnrichedError`] in the chain.
///
/// A link holding a `Box<EnrichedError>` counts as enriched too.
///
/// # Examples
///
/// ```
/// use error_meta::inspect::find_enriched;
/// use error_meta::{BoxError, EnrichedError};
///
/// let boxed = Box::new(EnrichedError::new("row missing").with_http_code(404));
/// let err: BoxError = boxed.into();
/// assert_eq!(find_enriched(&*err).map(|e| e.http_code()), Some(404));
/// ```
#[inline]
pub fn find_enriched<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a EnrichedError> {
    enriched_links(error).next()
}

/// Returns `true` if some link is a `T` equal to `target`.
#[inline]
pub fn is<T>(error: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    chain(error).any(|link| link.downcast_ref::<T>() == Some(target))
}

/// Returns `true` if `target` is one of the links, compared by address.
#[inline]
pub fn is_same(error: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    chain(error).any(|link| core::ptr::addr_eq(link as *const dyn Error, target as *const dyn Error))
}

/// HTTP status code of the nearest enriched link that set one, `0` when none did.
#[inline]
pub fn http_code_of(error: &(dyn Error + 'static)) -> u16 {
    enriched_links(error).find_map(EnrichedError::http_status).unwrap_or(0)
}

/// Application code of the nearest enriched link that set one, `0` when none did.
#[inline]
pub fn custom_code_of(error: &(dyn Error + 'static)) -> u32 {
    enriched_links(error).find_map(EnrichedError::custom_status).unwrap_or(0)
}

fn enriched_links<'a>(error: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a EnrichedError> {
    chain(error).filter_map(as_enriched)
}

/// Views a single link as an [`EnrichedError`], looking through one level of boxing.
///
/// `Box<EnrichedError>` erased into a [`BoxError`](crate::BoxError) is a link of its own
/// whose `source()` skips the enriched value, so it has to be recognised here.
pub(crate) fn as_enriched<'a>(link: &'a (dyn Error + 'static)) -> Option<&'a EnrichedError> {
    link.downcast_ref::<EnrichedError>()
        .or_else(|| link.downcast_ref::<Box<EnrichedError>>().map(|boxed| &**boxed))
}
