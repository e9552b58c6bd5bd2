/// Built-in categories written to a fresh configuration file.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Event Cover", "Community Outreach", "Unit Running", "Other"];

/// Entry type as typed by the user: either one of the configured
/// categories or a free-form tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Fixed(String),
    Custom(String),
}

impl Category {
    /// Match `input` against the configured categories (case-insensitive).
    /// A match yields the configured spelling; anything else is a custom tag.
    pub fn resolve(input: &str, fixed: &[String]) -> Self {
        let trimmed = input.trim();
        fixed
            .iter()
            .find(|c| c.eq_ignore_ascii_case(trimmed))
            .map(|c| Category::Fixed(c.clone()))
            .unwrap_or_else(|| Category::Custom(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Fixed(s) | Category::Custom(s) => s,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Category::Custom(_))
    }
}
