use std::fmt;

use serde::{Deserialize, Serialize};

/// Decision category. The set is closed; anything else entering the
/// system degrades to `Personal` at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Business,
    Personal,
    Career,
    Lifestyle,
    Finance,
    Technology,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Business,
        Category::Personal,
        Category::Career,
        Category::Lifestyle,
        Category::Finance,
        Category::Technology,
    ];

    /// Parse a category name. Unknown names fall back to `Personal`
    /// rather than failing, so free-form input always lands somewhere.
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "business" => Category::Business,
            "personal" => Category::Personal,
            "career" => Category::Career,
            "lifestyle" => Category::Lifestyle,
            "finance" => Category::Finance,
            "technology" => Category::Technology,
            _ => Category::Personal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Personal => "personal",
            Category::Career => "career",
            Category::Lifestyle => "lifestyle",
            Category::Finance => "finance",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        for category in Category::ALL {
            assert_eq!(Category::parse_lossy(category.as_str()), category);
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Category::parse_lossy("  Career "), Category::Career);
        assert_eq!(Category::parse_lossy("FINANCE"), Category::Finance);
    }

    #[test]
    fn unknown_name_falls_back_to_personal() {
        assert_eq!(Category::parse_lossy("astrology"), Category::Personal);
        assert_eq!(Category::parse_lossy(""), Category::Personal);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::Technology).unwrap(),
            "\"technology\""
        );
    }
}
