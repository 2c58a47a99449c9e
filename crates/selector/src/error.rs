//! Error types for selector building.

use thiserror::Error;

/// Errors that can occur while appending parts to a selector.
///
/// # Examples
///
/// ```rust
/// use selector::{SelectorError, element};
///
/// let result = element("a").and_then(|s| s.element("b"));
/// assert_eq!(result, Err(SelectorError::DuplicateViolation));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended a second time.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector.")]
    DuplicateViolation,

    /// A part was appended after a part of a later category.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element."
    )]
    OrderViolation,
}

pub type Result<T> = std::result::Result<T, SelectorError>;
