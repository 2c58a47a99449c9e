//! Combinators joining two compound selectors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Returned when a token is not one of ` `, `>`, `+` or `~`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown combinator: {0:?}")]
pub struct ParseCombinatorError(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// The token written between the two selectors.
    pub const fn token(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Combinator {
    type Err = ParseCombinatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " => Ok(Combinator::Descendant),
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::AdjacentSibling),
            "~" => Ok(Combinator::GeneralSibling),
            other => Err(ParseCombinatorError(other.to_string())),
        }
    }
}
