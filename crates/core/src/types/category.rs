//! Product categories offered by the add-product form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a category name is not one of the fixed options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of categories, in selector order.
///
/// The first option is the default the form resets to after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Shirts,
    Jeans,
    Jackets,
    Sweaters,
    Accessories,
}

impl Category {
    /// Every category, in the order the selector lists them.
    pub const ALL: [Self; 5] = [
        Self::Shirts,
        Self::Jeans,
        Self::Jackets,
        Self::Sweaters,
        Self::Accessories,
    ];

    /// Wire and display name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shirts => "Shirts",
            Self::Jeans => "Jeans",
            Self::Jackets => "Jackets",
            Self::Sweaters => "Sweaters",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}
