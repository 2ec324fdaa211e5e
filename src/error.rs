//! Custom error types for Finboard
//!
//! Every failure in the dashboard core is local and recoverable. Validation
//! failures leave the session untouched; domain and argument errors are
//! reported to the caller instead of panicking.

use thiserror::Error;

/// The main error type for Finboard operations
#[derive(Error, Debug)]
pub enum FinboardError {
    /// Required fields were left empty on record creation
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A field was present but its value is not acceptable
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation is undefined for the given domain values
    #[error("Domain error: {0}")]
    Domain(String),

    /// A caller passed an argument the operation cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The session is logged out
    #[error("Not logged in. Run 'finboard login' first.")]
    NotAuthenticated,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinboardError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a missing-fields error
    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        Self::MissingFields(fields)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (missing or invalid input)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MissingFields(_))
    }

    /// Check if this is a domain error
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

impl From<std::io::Error> for FinboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<crate::models::BudgetValidationError> for FinboardError {
    fn from(err: crate::models::BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::models::suggestion::SuggestionValidationError> for FinboardError {
    fn from(err: crate::models::suggestion::SuggestionValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for FinboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Finboard operations
pub type FinboardResult<T> = Result<T, FinboardError>;
