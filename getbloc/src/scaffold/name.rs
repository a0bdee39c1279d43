//! Entity names and their casing variants
//!
//! Both casing forms are derived from the lowercased raw name, so
//! `Counter`, `COUNTER` and `counter` all scaffold `Counter`/`counter`.

use convert_case::{Case, Casing};
use std::fmt;

use crate::error::{Result, ScaffoldError};

const SEPARATORS: [char; 4] = [' ', '-', '_', '.'];

/// A validated, user-supplied feature name (e.g. `counter`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName {
    raw: String,
}

impl EntityName {
    /// Validate a raw name
    ///
    /// Accepted characters are ASCII letters, digits, and the separators
    /// space, `-`, `_` and `.`; the name must start with a letter.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Validation`] if the name is blank, contains
    /// any other character, or would not produce a valid identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// # use getbloc::scaffold::EntityName;
    /// let name = EntityName::parse("my feature").unwrap();
    /// assert_eq!(name.pascal(), "MyFeature");
    /// assert_eq!(name.snake(), "my_feature");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScaffoldError::validation("The name must not be empty"));
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !SEPARATORS.contains(c))
        {
            return Err(ScaffoldError::validation(format!(
                "The name '{trimmed}' contains an unsupported character '{bad}'"
            )));
        }

        let name = Self {
            raw: trimmed.to_string(),
        };
        if !name.pascal().starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(ScaffoldError::validation(format!(
                "The name '{trimmed}' must start with a letter"
            )));
        }

        Ok(name)
    }

    /// `PascalCase` form, used for Dart type names
    #[must_use]
    pub fn pascal(&self) -> String {
        self.normalized().from_case(Case::Lower).to_case(Case::Pascal)
    }

    /// `snake_case` form, used for file and directory names
    #[must_use]
    pub fn snake(&self) -> String {
        self.normalized().from_case(Case::Lower).to_case(Case::Snake)
    }

    /// Lowercased words joined by single spaces; digits stay inside their word
    fn normalized(&self) -> String {
        self.raw
            .to_lowercase()
            .split(SEPARATORS)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
