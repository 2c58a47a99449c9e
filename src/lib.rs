//! Build CSS3 selector strings with a fluent, immutable builder.
//!
//! This package re-exports the [`selector`] crate, which does the work.
//!
//! ```rust
//! use css_selector::{combine, element};
//!
//! let nav = element("nav")?.class("top")?;
//! let link = element("a")?.pseudo_class("hover")?;
//! assert_eq!(combine(&nav, ">", &link).stringify(), "nav.top > a:hover");
//! # Ok::<(), css_selector::SelectorError>(())
//! ```

pub use selector::*;
