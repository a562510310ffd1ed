//! Explanation difficulty levels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How deep an explanation should go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Simple explanations with analogies
    #[default]
    Beginner,
    /// Logic with dry runs
    Intermediate,
    /// Optimizations & edge cases
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Lowercase identifier, as used in lookup keys and on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Capitalized label shown in the level selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Beginner => "Simple explanations with analogies",
            Self::Intermediate => "Logic with dry runs",
            Self::Advanced => "Optimizations & edge cases",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}' (expected beginner, intermediate or advanced)")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Beginner".parse::<Level>(), Ok(Level::Beginner));
        assert_eq!(" ADVANCED ".parse::<Level>(), Ok(Level::Advanced));
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Level::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        let parsed: Level = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Level::Advanced);
    }

    #[test]
    fn default_is_beginner() {
        assert_eq!(Level::default(), Level::Beginner);
        assert_eq!(Level::default().to_string(), "Beginner");
    }
}
