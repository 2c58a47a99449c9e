//! Simple selector part categories and their precedence.

use std::fmt;

/// The kind of a simple selector part.
///
/// Variants are declared in precedence order, so the derived `Ord` matches
/// the order in which parts must be appended to a compound selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl Category {
    /// All categories, in precedence order.
    pub const ALL: [Category; 6] = [
        Category::Element,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];

    /// Position of this category in [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for categories that may appear at most once.
    pub const fn is_singleton(self) -> bool {
        matches!(
            self,
            Category::Element | Category::Id | Category::PseudoElement
        )
    }

    /// Categories that must not already be present when appending `self`.
    pub fn later(self) -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(move |c| *c > self)
    }

    /// Renders `value` the way this category appears in selector text.
    pub fn render(self, value: &str) -> String {
        match self {
            Category::Element => value.to_string(),
            Category::Id => format!("#{value}"),
            Category::Class => format!(".{value}"),
            Category::Attribute => format!("[{value}]"),
            Category::PseudoClass => format!(":{value}"),
            Category::PseudoElement => format!("::{value}"),
        }
    }

    /// Lowercase name, as used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Element => "element",
            Category::Id => "id",
            Category::Class => "class",
            Category::Attribute => "attribute",
            Category::PseudoClass => "pseudo-class",
            Category::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
