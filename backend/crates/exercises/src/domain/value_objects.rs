//! Domain Value Objects
//!
//! Immutable value types for the exercises domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::Exercise;

// ============================================================================
// Unit
// ============================================================================

/// Weight unit - the only two values a record may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kgs,
    Lbs,
}

impl Unit {
    /// Wire/storage representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Kgs => "kgs",
            Unit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a unit string is outside the two-value enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitParseError {
    pub input: String,
}

impl fmt::Display for UnitParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid unit '{}': must be 'kgs' or 'lbs'", self.input)
    }
}

impl std::error::Error for UnitParseError {}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kgs" => Ok(Unit::Kgs),
            "lbs" => Ok(Unit::Lbs),
            other => Err(UnitParseError {
                input: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// ExerciseName
// ============================================================================

/// Error returned when exercise name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseNameError {
    /// Name is empty after trimming
    Empty,
}

impl fmt::Display for ExerciseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Exercise name cannot be empty"),
        }
    }
}

impl std::error::Error for ExerciseNameError {}

/// Validated exercise name
///
/// # Invariants
/// - Non-empty after trimming
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseName(String);

impl ExerciseName {
    /// Create a new ExerciseName from raw input
    ///
    /// Trims surrounding whitespace and rejects empty input.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ExerciseNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExerciseNameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ExerciseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExerciseName({:?})", self.0)
    }
}

impl fmt::Display for ExerciseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExerciseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExerciseName {
    type Error = ExerciseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ExerciseName {
    type Error = ExerciseNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExerciseName> for String {
    fn from(name: ExerciseName) -> Self {
        name.0
    }
}

// ============================================================================
// ExerciseFilter
// ============================================================================

/// Field-to-value equality constraints for the list operation
///
/// An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub reps: Option<i32>,
}

impl ExerciseFilter {
    /// Filter by exact rep count
    pub fn by_reps(reps: i32) -> Self {
        Self { reps: Some(reps) }
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.reps.is_none()
    }

    /// Whether the given exercise satisfies every set constraint
    pub fn matches(&self, exercise: &Exercise) -> bool {
        match self.reps {
            Some(reps) => exercise.reps == reps,
            None => true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod unit {
        use super::*;

        #[test]
        fn test_parse_valid() {
            assert_eq!("kgs".parse::<Unit>().unwrap(), Unit::Kgs);
            assert_eq!("lbs".parse::<Unit>().unwrap(), Unit::Lbs);
        }

        #[test]
        fn test_parse_rejects_unknown() {
            assert!("pounds".parse::<Unit>().is_err());
            assert!("KGS".parse::<Unit>().is_err());
            assert!("".parse::<Unit>().is_err());
        }

        #[test]
        fn test_as_str_roundtrip() {
            assert_eq!(Unit::Kgs.as_str().parse::<Unit>().unwrap(), Unit::Kgs);
            assert_eq!(Unit::Lbs.as_str().parse::<Unit>().unwrap(), Unit::Lbs);
        }

        #[test]
        fn test_serde() {
            assert_eq!(serde_json::to_string(&Unit::Lbs).unwrap(), "\"lbs\"");
            let unit: Unit = serde_json::from_str("\"kgs\"").unwrap();
            assert_eq!(unit, Unit::Kgs);
            assert!(serde_json::from_str::<Unit>("\"stone\"").is_err());
        }

        #[test]
        fn test_error_message_names_both_values() {
            let err = "stone".parse::<Unit>().unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("kgs") && msg.contains("lbs"));
        }
    }

    mod exercise_name {
        use super::*;

        #[test]
        fn test_valid() {
            let name = ExerciseName::new("Squats").unwrap();
            assert_eq!(name.as_str(), "Squats");
        }

        #[test]
        fn test_trims_whitespace() {
            let name = ExerciseName::new("  Bench Press  ").unwrap();
            assert_eq!(name.as_str(), "Bench Press");
        }

        #[test]
        fn test_empty_fails() {
            assert_eq!(ExerciseName::new("").unwrap_err(), ExerciseNameError::Empty);
        }

        #[test]
        fn test_whitespace_only_fails() {
            assert_eq!(
                ExerciseName::new("   ").unwrap_err(),
                ExerciseNameError::Empty
            );
        }

        #[test]
        fn test_serde_deserialize_invalid() {
            let result: Result<ExerciseName, _> = serde_json::from_str("\"  \"");
            assert!(result.is_err());
        }

        #[test]
        fn test_into_string() {
            let name = ExerciseName::new("Deadlift").unwrap();
            let s: String = name.into();
            assert_eq!(s, "Deadlift");
        }
    }

    mod filter {
        use super::*;

        #[test]
        fn test_empty_filter() {
            let filter = ExerciseFilter::default();
            assert!(filter.is_empty());
        }

        #[test]
        fn test_by_reps() {
            let filter = ExerciseFilter::by_reps(10);
            assert!(!filter.is_empty());
            assert_eq!(filter.reps, Some(10));
        }
    }
}
