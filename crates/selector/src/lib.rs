//! # Selector - CSS3 selector builder
//!
//! Builds selector strings one simple part at a time while enforcing the
//! CSS3 rules for compound selectors:
//!
//! - Element, id and pseudo-element appear at most once.
//! - Parts are appended in the order element, id, class, attribute,
//!   pseudo-class, pseudo-element.
//!
//! Builders are immutable values. Each append returns a new builder, and
//! [`combine`] joins two finished selectors with a combinator.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector::{SelectorError, element, id};
//!
//! let link = element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let editable = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(editable.to_string(), "#main.container.editable");
//!
//! assert_eq!(
//!     element("a")?.class("x")?.id("y"),
//!     Err(SelectorError::OrderViolation)
//! );
//! # Ok::<(), SelectorError>(())
//! ```
//!
//! ## Combining
//!
//! ```rust
//! use selector::{Combinator, combine, element};
//!
//! let a = element("div")?.id("main")?;
//! let b = element("table")?.id("data")?;
//! assert_eq!(combine(&a, "+", &b).stringify(), "div#main + table#data");
//! assert_eq!(a.combine_with(Combinator::Child, &b).stringify(), "div#main > table#data");
//! # Ok::<(), selector::SelectorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`builder`]: [`SelectorBuilder`] and the free-function entry points
//! - [`category`]: simple part categories and their precedence
//! - [`combinator`]: the four CSS3 combinators
//! - [`error`]: [`SelectorError`]

pub mod builder;
pub mod category;
pub mod combinator;
pub mod error;

pub use builder::{
    EMPTY, SelectorBuilder, attr, class, combine, element, id, pseudo_class, pseudo_element,
    stringify,
};
pub use category::Category;
pub use combinator::{Combinator, ParseCombinatorError};
pub use error::{Result, SelectorError};
