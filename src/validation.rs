use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SkyDriveError;

/// A length window plus a pattern that a user-entered string must satisfy.
///
/// Rules are plain configuration data. Compile one into a [`RuleMatcher`]
/// to actually accept or reject candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub min_length: usize,
    pub max_length: usize,
    pub pattern: String,
}

impl ValidationRule {
    pub fn new(min_length: usize, max_length: usize, pattern: &str) -> Self {
        Self {
            min_length,
            max_length,
            pattern: pattern.to_string(),
        }
    }

    /// Check the definition-time invariants: ordered length bounds and a
    /// pattern that compiles.
    pub fn validate(&self) -> Result<(), SkyDriveError> {
        self.compile().map(|_| ())
    }

    /// Compile the pattern once for repeated matching.
    pub fn compile(&self) -> Result<RuleMatcher, SkyDriveError> {
        if self.min_length > self.max_length {
            return Err(SkyDriveError::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        Ok(RuleMatcher {
            min_length: self.min_length,
            max_length: self.max_length,
            regex: Regex::new(&self.pattern)?,
        })
    }
}

/// Compiled form of a [`ValidationRule`].
///
/// Length is counted in characters, not bytes. Anchoring is up to the
/// pattern itself; all shipped defaults are `^...$` anchored.
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    min_length: usize,
    max_length: usize,
    regex: Regex,
}

impl RuleMatcher {
    pub fn accepts(&self, candidate: &str) -> bool {
        let length = candidate.chars().count();
        length >= self.min_length && length <= self.max_length && self.regex.is_match(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationRule;
    use crate::error::SkyDriveError;

    #[test]
    fn test_accepts_inside_length_window() {
        let matcher = ValidationRule::new(2, 4, "^[a-z]+$").compile().unwrap();

        assert!(!matcher.accepts("a"));
        assert!(matcher.accepts("ab"));
        assert!(matcher.accepts("abcd"));
        assert!(!matcher.accepts("abcde"));
    }

    #[test]
    fn test_rejects_pattern_mismatch() {
        let matcher = ValidationRule::new(1, 10, "^[a-z]+$").compile().unwrap();

        assert!(!matcher.accepts("abc1"));
        assert!(!matcher.accepts("ABC"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let matcher = ValidationRule::new(1, 5, "^.*$").compile().unwrap();

        // 5 characters, 10 bytes
        assert!(matcher.accepts("ééééé"));
    }

    #[test]
    fn test_inverted_bounds_is_a_defect() {
        let err = ValidationRule::new(10, 5, "^.*$").compile().unwrap_err();

        assert!(matches!(
            err,
            SkyDriveError::InvalidLengthBounds { min: 10, max: 5 }
        ));
    }

    #[test]
    fn test_unparseable_pattern_is_a_defect() {
        let err = ValidationRule::new(0, 5, "^[unclosed").compile().unwrap_err();

        assert!(matches!(err, SkyDriveError::PatternError { .. }));
    }
}
