//! The immutable selector builder.
//!
//! Every append returns a new [`SelectorBuilder`]; the receiver is left
//! untouched, so a single prototype (such as [`EMPTY`]) can seed any number
//! of independent chains.

use std::fmt;

use crate::category::Category;
use crate::combinator::Combinator;
use crate::error::{Result, SelectorError};

/// The shared root every chain starts from.
///
/// A single process-wide instance; appends borrow it and never modify it.
pub static EMPTY: SelectorBuilder = SelectorBuilder::new();

/// Accumulated selector text plus one occurrence counter per [`Category`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectorBuilder {
    text: String,
    counts: [usize; 6],
}

impl SelectorBuilder {
    /// Creates an empty builder, equal to [`EMPTY`].
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            counts: [0; 6],
        }
    }

    /// Appends a type selector such as `div`.
    pub fn element(&self, value: impl AsRef<str>) -> Result<Self> {
        self.append(Category::Element, value.as_ref())
    }

    /// Appends `#value`.
    pub fn id(&self, value: impl AsRef<str>) -> Result<Self> {
        self.append(Category::Id, value.as_ref())
    }

    /// Appends `.value`.
    pub fn class(&self, value: impl AsRef<str>) -> Result<Self> {
        self.append(Category::Class, value.as_ref())
    }

    /// Appends `[value]`. The value is written verbatim, including any
    /// operator and quoting (`href$=".png"`).
    pub fn attr(&self, value: impl AsRef<str>) -> Result<Self> {
        self.append(Category::Attribute, value.as_ref())
    }

    /// Appends `:value`.
    pub fn pseudo_class(&self, value: impl AsRef<str>) -> Result<Self> {
        self.append(Category::PseudoClass, value.as_ref())
    }

    /// Appends `::value`.
    pub fn pseudo_element(&self, value: impl AsRef<str>) -> Result<Self> {
        self.append(Category::PseudoElement, value.as_ref())
    }

    /// Appends a part of the given category.
    ///
    /// Fails with [`SelectorError::DuplicateViolation`] when a singleton
    /// category is already present, and with [`SelectorError::OrderViolation`]
    /// when any later category is already present. The duplicate check wins
    /// when both apply.
    pub fn append(&self, category: Category, value: &str) -> Result<Self> {
        if category.is_singleton() && self.count(category) > 0 {
            log::debug!(
                "SELECTOR: rejected {} '{}' on '{}': duplicate",
                category,
                value,
                self.text
            );
            return Err(SelectorError::DuplicateViolation);
        }

        if let Some(present) = category.later().find(|c| self.count(*c) > 0) {
            log::debug!(
                "SELECTOR: rejected {} '{}' on '{}': {} already present",
                category,
                value,
                self.text,
                present
            );
            return Err(SelectorError::OrderViolation);
        }

        let mut next = self.clone();
        next.text.push_str(&category.render(value));
        next.counts[category.index()] += 1;
        log::trace!("SELECTOR: {} '{}' -> '{}'", category, value, next.text);
        Ok(next)
    }

    /// Joins two selectors as `"{self} {combinator} {other}"`.
    ///
    /// The token is not validated; an unrecognized one is written as given.
    /// All counters of the result are zero, so further appends are accepted
    /// and written directly after `other`. Doing so is not supported usage.
    pub fn combine(&self, combinator: &str, other: &SelectorBuilder) -> SelectorBuilder {
        if combinator.parse::<Combinator>().is_err() {
            log::warn!("SELECTOR: unrecognized combinator {combinator:?}");
        }
        self.join(combinator, other)
    }

    /// Typed form of [`combine`](Self::combine).
    pub fn combine_with(&self, combinator: Combinator, other: &SelectorBuilder) -> SelectorBuilder {
        self.join(combinator.token(), other)
    }

    fn join(&self, token: &str, other: &SelectorBuilder) -> SelectorBuilder {
        let text = format!("{} {} {}", self.text, token, other.text);
        log::trace!("SELECTOR: combine -> '{}'", text);
        SelectorBuilder {
            text,
            counts: [0; 6],
        }
    }

    /// The selector text built so far.
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// Consumes the builder, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// How many parts of `category` have been appended.
    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<SelectorBuilder> for String {
    fn from(builder: SelectorBuilder) -> Self {
        builder.text
    }
}

/// Starts a chain from [`EMPTY`] with an element.
pub fn element(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    EMPTY.element(value)
}

/// Starts a chain from [`EMPTY`] with an id.
pub fn id(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    EMPTY.id(value)
}

/// Starts a chain from [`EMPTY`] with a class.
pub fn class(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    EMPTY.class(value)
}

/// Starts a chain from [`EMPTY`] with an attribute.
pub fn attr(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    EMPTY.attr(value)
}

/// Starts a chain from [`EMPTY`] with a pseudo-class.
pub fn pseudo_class(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    EMPTY.pseudo_class(value)
}

/// Starts a chain from [`EMPTY`] with a pseudo-element.
pub fn pseudo_element(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    EMPTY.pseudo_element(value)
}

/// Free-function form of [`SelectorBuilder::combine`].
pub fn combine(a: &SelectorBuilder, combinator: &str, b: &SelectorBuilder) -> SelectorBuilder {
    a.combine(combinator, b)
}

/// Free-function form of [`SelectorBuilder::stringify`].
pub fn stringify(builder: &SelectorBuilder) -> &str {
    builder.stringify()
}
