//! Request-scoped handle stored on every [`EnrichedError`](crate::EnrichedError).
//!
//! A [`RequestContext`] is an immutable association of string keys to string values.
//! Deriving a child with [`RequestContext::with_value`] never touches the parent, so
//! handles can be shared freely between threads and errors.
//!
//! # Examples
//!
//! ```
//! use error_meta::RequestContext;
//!
//! let ctx = RequestContext::background()
//!     .with_value("request_id", "7f3a")
//!     .with_value("tenant", "acme");
//!
//! assert_eq!(ctx.value("request_id"), Some("7f3a"));
//! assert!(RequestContext::BACKGROUND.is_background());
//! ```
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::ErrorVec;
use core::fmt::Display;

/// Single key/value pair held by a [`RequestContext`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextEntry {
    key: Cow<'static, str>,
    value: String,
}

impl ContextEntry {
    /// Returns the entry key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the entry value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ContextEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Opaque request-scoped association carried alongside an error.
///
/// The default value is [`RequestContext::BACKGROUND`], which holds no entries and
/// allocates nothing. Cloning is an `Arc` bump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    entries: Option<Arc<ErrorVec<ContextEntry>>>,
}

impl RequestContext {
    /// The empty, process-wide default handle.
    pub const BACKGROUND: Self = Self { entries: None };

    /// Returns [`RequestContext::BACKGROUND`].
    #[inline]
    pub const fn background() -> Self {
        Self::BACKGROUND
    }

    /// Returns `true` if no value was ever attached.
    #[inline]
    pub fn is_background(&self) -> bool {
        self.entries.is_none()
    }

    /// Derives a child handle that additionally maps `key` to `value`.
    ///
    /// A key that is already present is shadowed, not replaced: [`value`](Self::value)
    /// returns the newest entry while [`iter`](Self::iter) still yields both.
    #[must_use]
    pub fn with_value<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        let mut entries = match &self.entries {
            Some(existing) => ErrorVec::clone(existing),
            None => ErrorVec::new(),
        };
        entries.push(ContextEntry { key: key.into(), value: value.into() });
        Self { entries: Some(Arc::new(entries)) }
    }

    /// Looks up the most recently attached value for `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.iter().rev().find(|entry| entry.key() == key).map(ContextEntry::value)
    }

    /// Iterates over all entries in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ContextEntry> {
        self.entries.as_deref().map(|entries| entries.as_slice()).unwrap_or(&[]).iter()
    }

    /// Number of entries, shadowed keys included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.as_deref().map_or(0, |entries| entries.len())
    }

    /// Returns `true` if the context holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &'a RequestContext {
    type Item = &'a ContextEntry;
    type IntoIter = core::slice::Iter<'a, ContextEntry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
