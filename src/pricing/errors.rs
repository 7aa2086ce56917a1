//! Pricing error types.

use uuid::Uuid;

/// Errors raised by the collaborators around the pricing engine.
///
/// The engine itself never fails; these come from data entry, rate card
/// validation and project edits.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid value for {field}: '{value}'")]
    InvalidInput { field: String, value: String },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        errors: Vec<String>,
    },

    #[error("Room {0} not found")]
    UnknownRoom(Uuid),

    #[error("Line item {0} not found")]
    UnknownItem(Uuid),
}

impl PricingError {
    pub fn invalid_input(field: &str, value: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// Qualify an input error's field with where it sits, e.g.
    /// `rooms[0].items[1]` + `qty`. Other variants pass through unchanged.
    pub fn within(self, location: &str) -> Self {
        match self {
            PricingError::InvalidInput { field, value } => PricingError::InvalidInput {
                field: format!("{}.{}", location, field),
                value,
            },
            other => other,
        }
    }
}
