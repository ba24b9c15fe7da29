use super::{EnrichedError, Origin};
use crate::inspect;
use crate::types::alloc_type::ToString;
use core::error::Error;
use core::fmt::{Display, Formatter, Result};

impl Display for EnrichedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            return self.fmt_report(f);
        }
        match &self.origin {
            Origin::Wrapped(cause) => write!(f, "{}: {}", cause, self.message),
            Origin::Root | Origin::Adopted(_) => f.write_str(&self.message),
        }
    }
}

impl EnrichedError {
    /// Multi-line diagnostic form used by `{:#}`.
    fn fmt_report(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Error: {}", self.message)?;
        match (self.http_status(), self.custom_status()) {
            (Some(http), Some(code)) => write!(f, " (http: {}, code: {})", http, code)?,
            (Some(http), None) => write!(f, " (http: {})", http)?,
            (None, Some(code)) => write!(f, " (code: {})", code)?,
            (None, None) => {},
        }

        if !self.context.is_empty() {
            f.write_str("\nContext:")?;
            for entry in &self.context {
                write!(f, "\n  - {}", entry)?;
            }
        }

        let mut causes = self.chain().skip(1).peekable();
        // An adopted cause renders the same text as the message.
        if let Origin::Adopted(_) = self.origin {
            causes.next();
        }
        if causes.peek().is_some() {
            f.write_str("\nCaused by:")?;
            for cause in causes {
                write!(f, "\n  - {}", cause)?;
            }
        }
        Ok(())
    }
}

impl Error for EnrichedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = self.cause()?;
        Some(cause)
    }
}

/// Equality over message, codes, context and cause.
///
/// Enriched causes are compared structurally; any other cause is compared by its
/// rendered text.
impl PartialEq for EnrichedError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.http_code == other.http_code
            && self.custom_code == other.custom_code
            && self.context == other.context
            && origin_eq(&self.origin, &other.origin)
    }
}

fn origin_eq(left: &Origin, right: &Origin) -> bool {
    match (left, right) {
        (Origin::Root, Origin::Root) => true,
        (Origin::Wrapped(left), Origin::Wrapped(right))
        | (Origin::Adopted(left), Origin::Adopted(right)) => cause_eq(&**left, &**right),
        _ => false,
    }
}

fn cause_eq(left: &(dyn Error + Send + Sync + 'static), right: &(dyn Error + Send + Sync + 'static)) -> bool {
    match (inspect::as_enriched(left), inspect::as_enriched(right)) {
        (Some(left), Some(right)) => left == right,
        (None, None) => left.to_string() == right.to_string(),
        _ => false,
    }
}
