//! Product classification, stored as the PostgreSQL enum type `category`.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, sqlx::Type)]
#[sqlx(type_name = "category", rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Electronics,
    Beauty,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Unknown,
        Category::Cloths,
        Category::Electronics,
        Category::Beauty,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Electronics => "ELECTRONICS",
            Category::Beauty => "BEAUTY",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("CLOTHS".parse::<Category>(), Ok(Category::Cloths));
        assert_eq!("electronics".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!(" Beauty ".parse::<Category>(), Ok(Category::Beauty));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "NonExistentCategory".parse::<Category>(),
            Err(ValidationError::UnknownCategory("NonExistentCategory".into()))
        );
    }

    #[test]
    fn display_matches_wire_name() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>(), Ok(c));
        }
        assert_eq!(Category::default().as_str(), "UNKNOWN");
    }
}
