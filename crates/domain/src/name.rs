use derive_more::{AsRef, Display};

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 30;

/// Normalized name under which a plan is saved.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutName(String);

impl WorkoutName {
    pub fn new(name: &str) -> Result<Self, NameError> {
        if name.trim().is_empty() {
            return Err(NameError::Empty);
        }

        let normalized = Self::normalize(name);
        let len = normalized.chars().count();

        if len < MIN_LENGTH {
            return Err(NameError::TooShort(len));
        }

        if len > MAX_LENGTH {
            return Err(NameError::TooLong(len));
        }

        Ok(WorkoutName(normalized))
    }

    /// Lowercases the name, drops everything except letters, digits, spaces and hyphens and
    /// collapses whitespace.
    #[must_use]
    pub fn normalize(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .chars()
            .filter(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-'
            })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is required")]
    Empty,
    #[error("Name must be at least {MIN_LENGTH} characters ({0} < {MIN_LENGTH})")]
    TooShort(usize),
    #[error("Name must be {MAX_LENGTH} characters or less ({0} > {MAX_LENGTH})")]
    TooLong(usize),
}
