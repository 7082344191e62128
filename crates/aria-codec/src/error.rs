//! Codec Errors

use thiserror::Error;

/// Error raised by codec operations.
///
/// Only name resolution and writes can fail. Malformed stored data on read is
/// reported as `None` by `get`, never as an error: the store may have been
/// mutated out-of-band, and reads must not crash on that.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AriaError {
    /// Attribute name outside the closed vocabulary.
    #[error("unknown ARIA attribute `{0}`")]
    InvalidAttribute(String),

    /// Recognized attribute, but the supplied value is outside its domain.
    #[error("invalid value for ARIA attribute `{attribute}`: {reason}")]
    InvalidValue {
        /// Attribute name, lowercase and unprefixed.
        attribute: &'static str,
        /// What the domain expected.
        reason: String,
    },
}
