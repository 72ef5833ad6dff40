use std::fmt;

use thiserror::Error;

/// Minimum accepted length, in characters, after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;
/// Maximum accepted length, in characters, after trimming.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Client-caused rejections of a `/generate` request.
///
/// The `Display` text is safe to return to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request must be JSON format")]
    NotJson,

    #[error("Missing required field: prompt")]
    MissingPrompt,

    #[error("Project description cannot be empty")]
    Empty,

    #[error("Project description must be at least 10 characters long")]
    TooShort,

    #[error("Project description must be less than 5000 characters")]
    TooLong,
}

/// A trimmed project description within the accepted length bounds.
///
/// Only constructible through [`ProjectDescription::parse`], so holding one
/// means validation already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    /// Trim and validate a raw description.
    ///
    /// Checks run in order and the first failure wins: empty, too short, too long.
    /// Length is counted in characters, not bytes.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        let len = trimmed.chars().count();
        if len < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::TooShort);
        }
        if len > MAX_DESCRIPTION_CHARS {
            return Err(ValidationError::TooLong);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
