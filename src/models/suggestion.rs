//! Category suggestions attached to transactions
//!
//! A suggestion pairs a proposed category with a confidence score. Scores
//! come with the seed data; nothing in the crate computes them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// A confidence score, always within `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Create a confidence score, rejecting values outside `[0, 1]` and NaN
    pub fn new(value: f64) -> Result<Self, SuggestionValidationError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SuggestionValidationError::ConfidenceOutOfRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = SuggestionValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// A proposed category for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: Category,
    pub confidence: Confidence,
}

impl CategorySuggestion {
    pub fn new(category: Category, confidence: f64) -> Result<Self, SuggestionValidationError> {
        Ok(Self {
            category,
            confidence: Confidence::new(confidence)?,
        })
    }
}

/// Where a transaction sits in the suggestion lifecycle
///
/// `NoSuggestion` and `Accepted` are terminal. The only transition is
/// `Pending -> Accepted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionState {
    NoSuggestion,
    Pending,
    Accepted,
}

impl SuggestionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

impl fmt::Display for SuggestionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuggestion => write!(f, "No suggestion"),
            Self::Pending => write!(f, "Pending"),
            Self::Accepted => write!(f, "Accepted"),
        }
    }
}

/// Validation errors for suggestions
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionValidationError {
    ConfidenceOutOfRange(f64),
}

impl fmt::Display for SuggestionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfidenceOutOfRange(v) => {
                write!(f, "Confidence must be between 0 and 1, got {}", v)
            }
        }
    }
}

impl std::error::Error for SuggestionValidationError {}
